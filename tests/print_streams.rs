mod common;
use common::*;

use scsbridge::io::ConfigurablePrintTarget;
use scsbridge::solver::*;

fn verbose_solver() -> Scs {
    reset_mock(1);
    Scs::new(mock_api())
}

#[test]
fn test_print_to_stdout() {
    let (data, cone) = basic_socp();
    let mut scs = verbose_solver();
    scs.print_to_stdout();
    scs.solve(&data, &cone, &ScsSettings::default()).unwrap();
}

#[test]
fn test_print_to_buffer() {
    let (data, cone) = basic_socp();
    let mut scs = verbose_solver();
    scs.print_to_buffer();
    scs.solve(&data, &cone, &ScsSettings::default()).unwrap();

    let result = scs.get_print_buffer().unwrap();
    assert!(result.contains("constraints   = 5"));
    assert!(result.contains("nonnegative"));
    assert!(result.contains("pinned buffers"));
    assert!(result.contains("Terminated with status = solved"));
}

#[test]
fn test_print_quiet() {
    let (data, cone) = basic_socp();
    let mut scs = verbose_solver();
    scs.print_to_buffer();
    scs.solve(&data, &cone, &quiet_settings()).unwrap();
    assert!(scs.get_print_buffer().unwrap().is_empty());
}

#[test]
fn test_print_to_file() {
    use std::io::{Read, Seek};

    let (data, cone) = basic_socp();
    let mut scs = verbose_solver();
    let file = tempfile::NamedTempFile::new().unwrap();
    let mut file2 = file.reopen().unwrap();
    scs.print_to_file(file.into_file());
    scs.solve(&data, &cone, &ScsSettings::default()).unwrap();

    file2.seek(std::io::SeekFrom::Start(0)).unwrap();
    let mut result = String::new();
    file2.read_to_string(&mut result).unwrap();
    assert!(result.contains("Terminated with status"));
}

#[test]
fn test_print_to_stream() {
    use std::io::{Read, Seek};

    let (data, cone) = basic_socp();
    let mut scs = verbose_solver();
    let file = tempfile::NamedTempFile::new().unwrap();
    let mut file2 = file.reopen().unwrap();
    let stream = Box::new(file.into_file());

    scs.print_to_stream(stream);
    scs.solve(&data, &cone, &ScsSettings::default()).unwrap();

    file2.seek(std::io::SeekFrom::Start(0)).unwrap();
    let mut result = String::new();
    file2.read_to_string(&mut result).unwrap();
    assert!(result.contains("second order"));
}

#[test]
fn test_print_to_sink() {
    let (data, cone) = basic_socp();
    let mut scs = verbose_solver();
    scs.print_to_sink();
    scs.solve(&data, &cone, &ScsSettings::default()).unwrap();
    assert!(scs.get_print_buffer().is_err());
}
