#![allow(non_snake_case)]

use scsbridge::algebra::*;
use scsbridge::solver::*;

fn main() {
    // maximize x + y
    // subject to sqrt(x^2 + y^2) <= sqrt(2)
    //            x, y >= 0
    let A = CscMatrix::from(&[
        [-1., 0.], // x >= 0
        [0., -1.], // y >= 0
        [0., 0.],  // second order cone
        [-1., 0.], //
        [0., -1.], //
    ]);
    let b = vec![0., 0., (2.0 as ScsFloat).sqrt(), 0., 0.];
    let c = vec![-1., -1.];
    let data = ScsData::new(A, None, b, c);

    let cone = ScsCone {
        l: 2,
        q: vec![3],
        ..ScsCone::default()
    };

    let mut scs = Scs::linked();
    let settings = scs.default_settings().unwrap();

    // first solve: cold start
    let mut solution = ScsSolution::new(data.n, data.m);
    let (status, info) = scs
        .solve_with(&data, &cone, &settings, &mut solution)
        .unwrap();
    println!("status = {}, iterations = {}", status, info.iter);
    println!("x = {:?}", solution.x);
    println!("y = {:?}", solution.y);
    println!("s = {:?}", solution.s);

    // second solve: start from the previous solution
    let settings = ScsSettings {
        warm_start: true,
        ..settings
    };
    let (status, info) = scs
        .solve_with(&data, &cone, &settings, &mut solution)
        .unwrap();
    println!("warm start status = {}, iterations = {}", status, info.iter);
}
