use lina::{Matrix, Vector};
use pretty_assertions::assert_eq;
use serde::Deserialize;

mod shared;
use self::shared::{v, m};

#[derive(Debug, Deserialize)]
struct Problem {
    transform: Matrix,
    points: Vec<Vector>,
}

const PROBLEM_YAML: &str = "
transform:
  - [0, -1]
  - [1, 0]
points:
  - [1, 0]
  - [0.5, 2]
";

#[test]
fn read_yaml_document() {
    let problem: Problem = serde_yaml::from_str(PROBLEM_YAML).unwrap();
    assert_eq!(problem.transform, m(&[[0.0, -1.0], [1.0, 0.0]]));
    assert_eq!(problem.points, vec![v(&[1.0, 0.0]), v(&[0.5, 2.0])]);
    assert_eq!(problem.transform.determinant(), Ok(1.0));
}

#[test]
fn json_roundtrip_preserves_values() {
    let a = m(&[[1.5, -2.0, 3.0], [4.0, 5.0, 6.25]]);
    let json = serde_json::to_string(&a).unwrap();
    assert_eq!(serde_json::from_str::<Matrix>(&json).unwrap(), a);
}

#[test]
fn yaml_type_mismatch() {
    let err = serde_yaml::from_str::<Vector>("[1, x]").unwrap_err();
    assert!(err.to_string().contains("element 1 is not numeric (found string \"x\")"), "{}", err);

    let err = serde_yaml::from_str::<Matrix>("[[1, 2], [3, true]]").unwrap_err();
    assert!(err.to_string().contains("element (1, 1) is not numeric (found boolean `true`)"), "{}", err);

    // tags do not make a number out of a tagged value
    let err = serde_yaml::from_str::<Vector>("[1, !foo 2]").unwrap_err();
    assert!(err.to_string().contains("element 1 is not numeric"), "{}", err);
}

#[test]
fn yaml_shape_errors() {
    let err = serde_yaml::from_str::<Matrix>("[[1, 2], [3]]").unwrap_err();
    assert!(err.to_string().contains("matrix rows must all have the same length"), "{}", err);

    let err = serde_yaml::from_str::<Vector>("[]").unwrap_err();
    assert!(err.to_string().contains("vector cannot be empty"), "{}", err);
}
