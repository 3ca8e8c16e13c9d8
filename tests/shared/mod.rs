#![allow(dead_code)] // not every test binary uses every helper

use lina::{Matrix, Vector};
use rand::Rng;

pub fn init_logger() {
    let _ = ::env_logger::try_init();
}

pub fn v(data: &[f64]) -> Vector {
    Vector::new(data).unwrap()
}

pub fn m<R: AsRef<[f64]>>(rows: &[R]) -> Matrix {
    Matrix::new(rows).unwrap()
}

/// Integer-valued data, so that arithmetic identities hold exactly.
pub fn random_ints(len: usize) -> Vec<f64> {
    let mut rng = ::rand::thread_rng();
    (0..len).map(|_| rng.gen_range(-100, 100) as f64).collect()
}

pub fn random_int_matrix((rows, cols): (usize, usize)) -> Matrix {
    Matrix::from_row_major_data((rows, cols), random_ints(rows * cols)).unwrap()
}
