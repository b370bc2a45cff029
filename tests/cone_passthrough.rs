#![allow(non_snake_case)]

mod common;
use common::*;

use scsbridge::algebra::*;
use scsbridge::solver::*;

// one cone of every kind, 24 rows in total
fn every_cone() -> ScsCone {
    ScsCone {
        z: 1,
        l: 2,
        bbox: Some(BoxCone::new(vec![-1., -2.], vec![3., 4.])),
        q: vec![3],
        s: vec![2],
        ep: 1,
        ed: 1,
        p: vec![0.5, -0.3],
    }
}

fn every_cone_data(m: usize) -> ScsData {
    let mut A = Matrix::zeros((m, 2));
    for row in 0..m {
        A[(row, row % 2)] = -(row as ScsFloat) - 1.;
    }
    let b = (0..m).map(|i| i as ScsFloat * 0.5).collect();
    ScsData::new(CscMatrix::from_dense(&A), None, b, vec![1., -1.])
}

#[test]
fn test_every_cone_reaches_native_validator() {
    reset_mock(1);
    let cone = every_cone();
    assert_eq!(cone.rows(), 24);
    let data = every_cone_data(cone.rows());

    let mut scs = Scs::new(mock_api());
    scs.validate_cones(&data, &cone).unwrap();

    let seen = mock_state().seen.unwrap();
    assert_eq!(seen.cone, cone);
    assert_eq!(seen.A.as_ref(), Some(&data.A));
    assert_eq!(seen.b, data.b);
    for field in ["bl", "bu", "q", "s", "p"] {
        assert!(!seen.null_fields.contains(&field), "{field} is null");
    }
    assert!(scs.pin_ledger().is_balanced());
}

#[test]
fn test_every_cone_reaches_native_solver() {
    reset_mock(1);
    let cone = every_cone();
    let data = every_cone_data(cone.rows());

    let mut scs = Scs::new(mock_api());
    let result = scs.solve(&data, &cone, &quiet_settings()).unwrap();
    assert_eq!(result.solution.y.len(), 24);

    let seen = mock_state().seen.unwrap();
    assert_eq!(seen.cone, cone);
    let bbox = seen.cone.bbox.as_ref().unwrap();
    assert_eq!(bbox.bl, vec![-1., -2.]);
    assert_eq!(bbox.bu, vec![3., 4.]);
    assert!(scs.pin_ledger().is_balanced());
}

#[test]
fn test_zero_rows_outputs_not_null() {
    // no constraints: y and s have zero length
    reset_mock(1);
    let A = CscMatrix::new(0, 2, vec![0, 0, 0], vec![], vec![]);
    let data = ScsData::new(A, None, vec![], vec![1., 1.]);
    let cone = ScsCone::default();

    let mut scs = Scs::new(mock_api());
    let result = scs.solve(&data, &cone, &quiet_settings()).unwrap();
    assert_eq!(result.solution.x, vec![1., 2.]);
    assert!(result.solution.y.is_empty());
    assert!(result.solution.s.is_empty());

    let seen = mock_state().seen.unwrap();
    assert!(seen.null_fields.contains(&"b"));
    for field in ["sol.x", "sol.y", "sol.s"] {
        assert!(!seen.null_fields.contains(&field), "{field} is null");
    }
    assert!(scs.pin_ledger().is_balanced());
}
