/* ************************************************************************ **
** This file is part of lina, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! A tour of the operations.  Run with `RUST_LOG=debug` to see the
//! library's own log output as well.

#[macro_use] extern crate log;

use lina::{Matrix, Vector};

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let a = Vector::new(vec![1.0, 2.0, 3.0])?;
    let b = Vector::new(vec![4.0, 5.0, 6.0])?;

    info!("a = {}, b = {}", a, b);
    info!("a + b = {}", a.add(&b)?);
    info!("a - b = {}", (&a - &b)?);
    info!("2a = {}", &a * 2.0);
    info!("a / 4 = {}", a.divide(4.0)?);
    info!("a . b = {}", a.dot(&b)?);
    info!("a x b = {}", a.cross(&b)?);
    info!("|a| = {}", a.norm());

    let m = Matrix::new(&[[1.0, 2.0], [3.0, 4.0]])?;
    let inv = m.inverse()?;
    info!("m = {}", m);
    info!("m^T = {}", m.transpose());
    info!("det(m) = {}", m.determinant()?);
    info!("m^-1 = {}", inv);
    info!("m^-1 m = {}", inv.multiply(&m)?);

    let rect = Matrix::new(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]])?;
    info!("rect rect^T = {}", (&rect * &rect.transpose())?);

    // errors are values, not panics
    match rect.determinant() {
        Ok(_) => unreachable!(),
        Err(e) => warn!("as expected: {}", e),
    }
    match Matrix::new(&[[1.0, 2.0], [2.0, 4.0]])?.inverse() {
        Ok(_) => unreachable!(),
        Err(e) => warn!("as expected: {}", e),
    }

    let parsed: Vector = serde_json::from_str("[0.5, 1.5]")?;
    info!("parsed = {}", parsed);
    if let Err(e) = serde_json::from_str::<Vector>(r#"[0.5, "one"]"#) {
        warn!("as expected: {}", e);
    }
    Ok(())
}
