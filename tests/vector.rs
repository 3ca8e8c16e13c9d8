#[macro_use] extern crate lina_assert_close;

use lina::{Vector, Error, ErrorKind, Dims};
use pretty_assertions::assert_eq;
use rand::Rng;

mod shared;
use self::shared::{init_logger, v, random_ints};

#[test]
fn add_then_subtract_is_identity() {
    init_logger();
    let mut rng = ::rand::thread_rng();
    for _ in 0..1000 {
        let dim = rng.gen_range(1, 10);
        let a = Vector::new(random_ints(dim)).unwrap();
        let b = Vector::new(random_ints(dim)).unwrap();
        assert_eq!(a.add(&b).unwrap().subtract(&b).unwrap(), a);
        assert_eq!((&(&a + &b).unwrap() - &b).unwrap(), a);
    }
}

#[test]
fn scaling_by_one_and_zero() {
    let mut rng = ::rand::thread_rng();
    for _ in 0..1000 {
        let dim = rng.gen_range(1, 10);
        let a = Vector::new(random_ints(dim)).unwrap();
        assert_eq!(a.scale(1.0), a);
        assert_eq!(a.scale(0.0), Vector::zero(dim).unwrap());
        assert_eq!(a.scale(0.0).norm(), 0.0);
    }
}

#[test]
fn products_and_norm() {
    assert_eq!(v(&[1.0, 0.0, 0.0]).cross(&v(&[0.0, 1.0, 0.0])), Ok(v(&[0.0, 0.0, 1.0])));
    assert_eq!(v(&[3.0, 4.0]).norm(), 5.0);
    assert_eq!(v(&[1.0, 2.0]).dot(&v(&[3.0, 4.0])), Ok(11.0));
}

#[test]
fn cross_is_orthogonal() {
    for _ in 0..1000 {
        let a = Vector::new(random_ints(3)).unwrap();
        let b = Vector::new(random_ints(3)).unwrap();
        let c = a.cross(&b).unwrap();
        // integer data, so these are exact
        assert_eq!(c.dot(&a), Ok(0.0));
        assert_eq!(c.dot(&b), Ok(0.0));
        assert_eq!(b.cross(&a).unwrap(), -&c);
    }
}

#[test]
fn dot_requires_equal_dimension() {
    let mut rng = ::rand::thread_rng();
    for _ in 0..100 {
        let dim = rng.gen_range(1, 10);
        let other = dim + rng.gen_range(1, 5);
        let a = Vector::new(random_ints(dim)).unwrap();
        let b = Vector::new(random_ints(other)).unwrap();
        assert_eq!(
            a.dot(&b),
            Err(Error::DimensionMismatch {
                op: "dot product",
                left: Dims::Vector(dim),
                right: Dims::Vector(other),
            })
        );
        assert_eq!(b.dot(&a).unwrap_err().kind(), ErrorKind::DimensionMismatch);
    }
}

#[test]
fn division() {
    let a = v(&[1.0, 2.0, 3.0]);
    assert_close!(abs=1e-15, (&a / 3.0).unwrap().to_vec(), vec![1.0 / 3.0, 2.0 / 3.0, 1.0]);
    assert_eq!(a.divide(0.0), Err(Error::DivisionByZero));
    assert_eq!((&a / 0.0).unwrap_err().kind(), ErrorKind::DivisionByZero);
}

#[test]
fn empty_vector_is_rejected() {
    let err = Vector::new(Vec::<f64>::new()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ValueError);
    assert_eq!(err.to_string(), "vector cannot be empty");
}

#[test]
fn operations_do_not_modify_operands() {
    let a = v(&[1.0, 2.0, 3.0]);
    let b = v(&[4.0, 5.0, 6.0]);
    let _ = a.add(&b);
    let _ = a.cross(&b);
    let _ = a.scale(10.0);
    let _ = &a / 2.0;
    assert_eq!(a, v(&[1.0, 2.0, 3.0]));
    assert_eq!(b, v(&[4.0, 5.0, 6.0]));
}
