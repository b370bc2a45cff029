#![allow(non_snake_case)]

use scsbridge::algebra::*;
use scsbridge::solver::*;

fn problem_data() -> ScsData {
    //a 2-d box constraint, separated into 4 inequalities.
    //A = [I; -I]
    let A = CscMatrix::new(
        4,                      // m
        2,                      // n
        vec![0, 2, 4],          // colptr
        vec![0, 2, 1, 3],       // rowval
        vec![1., -1., 1., -1.], // nzval
    );

    let b = vec![1.; 4];
    let c = vec![1., -1.];

    ScsData::new(A, None, b, c)
}

fn main() {
    let data = problem_data();
    let cone = ScsCone {
        l: 4,
        ..ScsCone::default()
    };

    let settings = ScsSettingsBuilder::default()
        .max_iters(500)
        .build()
        .unwrap();

    let mut scs = Scs::linked();
    println!("SCS version {}", scs.version().unwrap());

    scs.validate_cones(&data, &cone).unwrap();
    let result = scs.solve(&data, &cone, &settings).unwrap();

    println!("status = {}", result.status);
    println!("x = {:?}", result.solution.x);
}
