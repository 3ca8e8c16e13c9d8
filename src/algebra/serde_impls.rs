/* ************************************************************************ **
** This file is part of lina, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Deserialization goes through these loosely-typed forms so that a
//! non-numeric element is reported as a `TypeMismatch` (with the position
//! of the element), rather than as whatever error the format would produce.

use std::convert::TryFrom;
use std::fmt;

use serde::de::{self, Deserialize, Deserializer, EnumAccess, IgnoredAny, MapAccess, SeqAccess};
use serde::de::{VariantAccess, Visitor};

use crate::{Vector, Matrix, Error};
use crate::validate::{self, Element};

#[derive(serde::Deserialize)]
#[serde(transparent)]
pub(crate) struct RawVector(Vec<Element>);

#[derive(serde::Deserialize)]
#[serde(transparent)]
pub(crate) struct RawMatrix(Vec<Vec<Element>>);

impl TryFrom<RawVector> for Vector {
    type Error = Error;

    fn try_from(RawVector(elements): RawVector) -> Result<Vector, Error>
    {
        let elements = validate::nonempty("vector", elements)?;
        Vector::new(validate::numeric(elements, |i| format!("element {}", i))?)
    }
}

impl TryFrom<RawMatrix> for Matrix {
    type Error = Error;

    fn try_from(RawMatrix(rows): RawMatrix) -> Result<Matrix, Error>
    {
        let ((height, width), elements) = validate::rectangular::<Element, _>(&rows)?;
        let data = validate::numeric(elements, |i| {
            format!("element ({}, {})", i / width, i % width)
        })?;
        Matrix::from_row_major_data((height, width), data)
    }
}

impl<'de> Deserialize<'de> for Element {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Element, D::Error>
    { deserializer.deserialize_any(ElementVisitor) }
}

struct ElementVisitor;

impl<'de> Visitor<'de> for ElementVisitor {
    type Value = Element;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    { f.write_str("a vector or matrix element") }

    fn visit_i64<E: de::Error>(self, x: i64) -> Result<Element, E>
    { Ok(Element::Number(x as f64)) }

    fn visit_u64<E: de::Error>(self, x: u64) -> Result<Element, E>
    { Ok(Element::Number(x as f64)) }

    fn visit_f64<E: de::Error>(self, x: f64) -> Result<Element, E>
    { Ok(Element::Number(x)) }

    fn visit_bool<E: de::Error>(self, b: bool) -> Result<Element, E>
    { Ok(Element::Other(format!("boolean `{}`", b))) }

    fn visit_str<E: de::Error>(self, s: &str) -> Result<Element, E>
    { Ok(Element::Other(format!("string {:?}", s))) }

    fn visit_char<E: de::Error>(self, c: char) -> Result<Element, E>
    { Ok(Element::Other(format!("character {:?}", c))) }

    fn visit_bytes<E: de::Error>(self, bytes: &[u8]) -> Result<Element, E>
    { Ok(Element::Other(format!("{} bytes", bytes.len()))) }

    fn visit_unit<E: de::Error>(self) -> Result<Element, E>
    { Ok(Element::Other("null".into())) }

    fn visit_none<E: de::Error>(self) -> Result<Element, E>
    { Ok(Element::Other("null".into())) }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Element, D::Error>
    { deserializer.deserialize_any(self) }

    fn visit_newtype_struct<D: Deserializer<'de>>(self, deserializer: D) -> Result<Element, D::Error>
    { deserializer.deserialize_any(self) }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Element, A::Error>
    {
        while let Some(IgnoredAny) = seq.next_element()? {}
        Ok(Element::Other("sequence".into()))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Element, A::Error>
    {
        while let Some((IgnoredAny, IgnoredAny)) = map.next_entry()? {}
        Ok(Element::Other("map".into()))
    }

    // e.g. tagged YAML values, `!foo 2`
    fn visit_enum<A: EnumAccess<'de>>(self, data: A) -> Result<Element, A::Error>
    {
        let (tag, variant) = data.variant::<String>()?;
        variant.newtype_variant::<IgnoredAny>()?;
        Ok(Element::Other(format!("tagged value `!{}`", tag)))
    }
}
