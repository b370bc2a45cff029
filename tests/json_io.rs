#![cfg(feature = "serde")]

mod common;
use common::*;

use scsbridge::solver::*;
use std::io::{Seek, SeekFrom};

#[test]
fn test_json_problem_solve() {
    reset_mock(1);
    let (data, cone) = basic_socp();
    let problem = ScsProblem::new(data, cone, quiet_settings());

    // write the problem to a file
    let mut file = tempfile::tempfile().unwrap();
    problem.write_to_file(&mut file).unwrap();

    // read the problem from the file and solve both
    file.seek(SeekFrom::Start(0)).unwrap();
    let problem2 = ScsProblem::read_from_file(&mut file).unwrap();
    assert_eq!(problem, problem2);

    let mut scs = Scs::new(mock_api());
    let r1 = scs
        .solve(&problem.data, &problem.cone, &problem.settings)
        .unwrap();
    let r2 = scs
        .solve(&problem2.data, &problem2.cone, &problem2.settings)
        .unwrap();
    assert_eq!(r1.solution, r2.solution);
}

#[test]
fn test_json_box_bounds() {
    let (data, _) = basic_socp();
    let cone = ScsCone {
        bbox: Some(BoxCone::new(
            vec![scsbridge::algebra::ScsFloat::NEG_INFINITY, 0., 0., 0.],
            vec![1., 1., scsbridge::algebra::ScsFloat::INFINITY, 1.],
        )),
        ..ScsCone::default()
    };
    let problem = ScsProblem::new(data, cone, ScsSettings::default());

    let mut file = tempfile::tempfile().unwrap();
    problem.write_to_file(&mut file).unwrap();
    file.seek(SeekFrom::Start(0)).unwrap();
    let problem2 = ScsProblem::read_from_file(&mut file).unwrap();

    assert_eq!(problem2.cone.rows(), 5);
    let bbox = problem2.cone.bbox.as_ref().unwrap();
    assert!(bbox.bl[0].is_infinite() && bbox.bl[0] < 0.);
    assert!(bbox.bu[2].is_infinite() && bbox.bu[2] > 0.);
    assert_eq!(problem2.cone, problem.cone);
}
