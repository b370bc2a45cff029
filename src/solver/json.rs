#![allow(non_snake_case)]

use crate::algebra::ScsFloat;
use crate::solver::{ScsCone, ScsData, ScsSettings};

use serde::{Deserialize, Serialize};
use std::io::Write;
use std::{fs::File, io, io::Read};

/// Trait for reading and writing complete problems as JSON files
pub trait ScsJSONReadWrite: Sized {
    /// write the problem to a JSON file
    fn write_to_file(&self, file: &mut File) -> Result<(), io::Error>;
    /// read a problem from a JSON file
    fn read_from_file(file: &mut File) -> Result<Self, io::Error>;
}

/// A complete problem: data, cones and settings
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ScsProblem {
    #[allow(missing_docs)]
    pub data: ScsData,
    #[allow(missing_docs)]
    pub cone: ScsCone,
    #[allow(missing_docs)]
    pub settings: ScsSettings,
}

impl ScsProblem {
    /// Bundle a problem for serialization
    pub fn new(data: ScsData, cone: ScsCone, settings: ScsSettings) -> Self {
        Self {
            data,
            cone,
            settings,
        }
    }
}

impl ScsJSONReadWrite for ScsProblem {
    fn write_to_file(&self, file: &mut File) -> Result<(), io::Error> {
        let mut json_data = self.clone();

        // sanitize box bounds to remove values that
        // can't be serialized, i.e. infs
        sanitize_cone(&mut json_data.cone);

        // write to file
        let json = serde_json::to_string(&json_data)?;
        file.write_all(json.as_bytes())?;

        Ok(())
    }

    fn read_from_file(file: &mut File) -> Result<Self, io::Error> {
        // read file
        let mut buffer = String::new();
        file.read_to_string(&mut buffer)?;
        let mut json_data: ScsProblem = serde_json::from_str(&buffer)?;

        // restore sanitized bounds to their (likely) original values
        desanitize_cone(&mut json_data.cone);

        Ok(json_data)
    }
}

fn sanitize_cone(cone: &mut ScsCone) {
    if let Some(bbox) = cone.bbox.as_mut() {
        bbox.bl.iter_mut().chain(bbox.bu.iter_mut()).for_each(|v| {
            if *v == ScsFloat::INFINITY {
                *v = ScsFloat::MAX;
            } else if *v == ScsFloat::NEG_INFINITY {
                *v = ScsFloat::MIN;
            }
        });
    }
}

fn desanitize_cone(cone: &mut ScsCone) {
    if let Some(bbox) = cone.bbox.as_mut() {
        bbox.bl.iter_mut().chain(bbox.bu.iter_mut()).for_each(|v| {
            if *v == ScsFloat::MAX {
                *v = ScsFloat::INFINITY;
            } else if *v == ScsFloat::MIN {
                *v = ScsFloat::NEG_INFINITY;
            }
        });
    }
}

#[test]
fn test_json_io() {
    use crate::algebra::CscMatrix;
    use crate::solver::{BoxCone, ScsSettingsBuilder};
    use std::io::{Seek, SeekFrom};

    let A = CscMatrix::from(&[
        [1., 0.], //
        [0., -1.], //
        [2., 0.], //
    ]);
    let data = ScsData::new(A, Some(CscMatrix::identity(2)), vec![1., 0., 0.], vec![1., 1.]);
    let cone = ScsCone {
        z: 1,
        bbox: Some(BoxCone::new(vec![ScsFloat::NEG_INFINITY], vec![ScsFloat::INFINITY])),
        ..ScsCone::default()
    };
    let settings = ScsSettingsBuilder::default()
        .max_iters(500)
        .log_csv_filename("iters.csv")
        .build()
        .unwrap();
    let problem = ScsProblem::new(data, cone, settings);

    // write the problem to a file
    let mut file = tempfile::tempfile().unwrap();
    problem.write_to_file(&mut file).unwrap();

    // read the problem from the file
    file.seek(SeekFrom::Start(0)).unwrap();
    let problem2 = ScsProblem::read_from_file(&mut file).unwrap();
    assert_eq!(problem, problem2);
}
