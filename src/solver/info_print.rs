#![allow(non_snake_case)]

use crate::algebra::ScsFloat;
use crate::io::PrintTarget;
use crate::solver::{ScsCone, ScsData, ScsInfo, ScsSettings, ScsStatus};
use itertools::Itertools;
use std::io::Write;

pub(crate) fn print_configuration(
    out: &mut PrintTarget,
    data: &ScsData,
    cone: &ScsCone,
    settings: &ScsSettings,
    pins: usize,
) -> std::io::Result<()> {
    if !settings.verbose {
        return std::io::Result::Ok(());
    }

    writeln!(out, "\nproblem:")?;
    writeln!(out, "  variables     = {}", data.n)?;
    writeln!(out, "  constraints   = {}", data.m)?;
    writeln!(
        out,
        "  nnz(P)        = {}",
        data.P.as_ref().map_or(0, |P| P.nnz())
    )?;
    writeln!(out, "  nnz(A)        = {}", data.A.nnz())?;
    writeln!(out, "  cone rows     = {}", cone.rows())?;

    _print_conedims(out, "zero", cone.z)?;
    _print_conedims(out, "nonnegative", cone.l)?;
    _print_conedims(out, "box", cone.bsize())?;
    _print_conelist(out, "second order", &cone.q)?;
    _print_conelist(out, "semidefinite", &cone.s)?;
    _print_conedims(out, "exp primal", cone.ep)?;
    _print_conedims(out, "exp dual", cone.ed)?;
    _print_conedims(out, "power", cone.p.len())?;

    writeln!(out, "settings:")?;
    writeln!(
        out,
        "  max iters = {}, time limit = {}, precision: {} bit",
        settings.max_iters,
        _time_limit_str(settings.time_limit_secs),
        8 * std::mem::size_of::<ScsFloat>(),
    )?;
    writeln!(
        out,
        "  eps_abs = {:.1e}, eps_rel = {:.1e}, eps_infeas = {:.1e}",
        settings.eps_abs, settings.eps_rel, settings.eps_infeas
    )?;
    writeln!(
        out,
        "  normalize: {}, adaptive scale: {}, warm start: {}",
        _bool_on_off(settings.normalize),
        _bool_on_off(settings.adaptive_scale),
        _bool_on_off(settings.warm_start),
    )?;
    writeln!(out, "boundary:")?;
    writeln!(out, "  pinned buffers = {}", pins)?;
    writeln!(out)?;
    out.flush()?;

    std::io::Result::Ok(())
}

pub(crate) fn print_footer(
    out: &mut PrintTarget,
    settings: &ScsSettings,
    status: Option<ScsStatus>,
    info: &ScsInfo,
) -> std::io::Result<()> {
    if !settings.verbose {
        return std::io::Result::Ok(());
    }

    match status {
        Some(status) => writeln!(out, "Terminated with status = {}", status)?,
        None => writeln!(out, "Terminated with unrecognized status")?,
    }
    writeln!(
        out,
        "iterations = {}, setup time = {:.2e}ms, solve time = {:.2e}ms",
        info.iter, info.setup_time, info.solve_time
    )?;
    out.flush()?;

    std::io::Result::Ok(())
}

fn _print_conedims(out: &mut PrintTarget, name: &str, dim: usize) -> std::io::Result<()> {
    //skip if there are none of this type
    if dim == 0 {
        return std::io::Result::Ok(());
    }
    writeln!(out, "    : {:<13}= {}", name, dim)
}

fn _print_conelist(out: &mut PrintTarget, name: &str, dims: &[usize]) -> std::io::Result<()> {
    let maxlistlen = 5;

    if dims.is_empty() {
        return std::io::Result::Ok(());
    }

    write!(out, "    : {:<13}= {}, numel = (", name, dims.len())?;
    write!(out, "{}", dims.iter().take(maxlistlen).join(","))?;
    if dims.len() > maxlistlen {
        write!(out, ",...")?;
    }
    writeln!(out, ")")
}

fn _bool_on_off(v: bool) -> &'static str {
    match v {
        true => "on",
        false => "off",
    }
}

fn _time_limit_str(secs: ScsFloat) -> String {
    if secs <= 0. {
        "none".to_string()
    } else {
        format!("{}s", secs)
    }
}

#[test]
fn test_print_configuration() {
    use crate::algebra::CscMatrix;
    use crate::io::ConfigurablePrintTarget;

    let data = ScsData::new(CscMatrix::identity(2), None, vec![1., 1.], vec![0., 0.]);
    let cone = ScsCone {
        q: vec![2],
        ..ScsCone::default()
    };
    let mut out = PrintTarget::default();
    out.print_to_buffer();

    let quiet = ScsSettings {
        verbose: false,
        ..ScsSettings::default()
    };
    print_configuration(&mut out, &data, &cone, &quiet, 5).unwrap();
    assert!(out.get_print_buffer().unwrap().is_empty());

    print_configuration(&mut out, &data, &cone, &ScsSettings::default(), 5).unwrap();
    let text = out.get_print_buffer().unwrap();
    assert!(text.contains("variables     = 2"));
    assert!(text.contains("second order = 1, numel = (2)"));
    assert!(text.contains("pinned buffers = 5"));
    assert!(text.contains("time limit = none"));
}
