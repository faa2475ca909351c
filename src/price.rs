// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2025 Daniel Negri
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Caller-supplied prices and their normalization to cents.
//!
//! Upstream callers hand over prices either as whole amounts or as decimals
//! typed in by a person. [`Price`] tags which representation arrived, and
//! [`Price::to_cents`] applies the single scaling step (`× 100`, truncated
//! toward zero) that turns it into [`Cents`].
//!
//! ```
//! use invoice_composer::{Cents, Price};
//!
//! assert_eq!(Price::from(3000.50).to_cents().unwrap(), Cents(300_050));
//! assert_eq!(Price::from(12_i64).to_cents().unwrap(), Cents(1_200));
//! assert!(Price::from("12.00").to_cents().is_err());
//! ```

use crate::InvoiceError;
use crate::base::Cents;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

const SCALE: i64 = 100;

/// A price in one of the accepted input representations.
///
/// Integer variants are whole currency units. Sub-cent fractions in the
/// floating and decimal variants are dropped, not rounded.
#[derive(Debug, Clone, PartialEq)]
pub enum Price {
    Int64(i64),
    Int(i32),
    Float32(f32),
    Float64(f64),
    Decimal(Decimal),
    /// Unparsed text. Never convertible.
    Text(String),
}

impl Price {
    /// Normalizes to integer cents.
    ///
    /// # Errors
    ///
    /// [`InvoiceError::UnsupportedPriceType`] for [`Price::Text`], for
    /// non-finite floats, and for amounts whose cent value does not fit in
    /// an `i64`.
    pub fn to_cents(&self) -> Result<Cents, InvoiceError> {
        match self {
            Price::Int64(units) => units
                .checked_mul(SCALE)
                .map(Cents)
                .ok_or_else(|| unsupported(format!("i64 {units} overflows cents"))),
            Price::Int(units) => Ok(Cents(i64::from(*units) * SCALE)),
            // Scale in single precision, as the value was given.
            Price::Float32(value) => float_to_cents(f64::from(value * SCALE as f32), "f32"),
            Price::Float64(value) => float_to_cents(value * SCALE as f64, "f64"),
            Price::Decimal(value) => value
                .checked_mul(Decimal::ONE_HUNDRED)
                .and_then(|scaled| scaled.trunc().to_i64())
                .map(Cents)
                .ok_or_else(|| unsupported(format!("decimal {value} overflows cents"))),
            Price::Text(text) => Err(unsupported(format!("text {text:?}"))),
        }
    }
}

fn unsupported(detail: String) -> InvoiceError {
    InvoiceError::UnsupportedPriceType(detail)
}

fn float_to_cents(scaled: f64, kind: &str) -> Result<Cents, InvoiceError> {
    // i64::MAX as f64 rounds up to 2^63, hence the exclusive upper bound.
    if !scaled.is_finite() || scaled < i64::MIN as f64 || scaled >= i64::MAX as f64 {
        return Err(unsupported(format!("{kind} {scaled} is not representable as cents")));
    }
    Ok(Cents(scaled.trunc() as i64))
}

impl From<i64> for Price {
    fn from(value: i64) -> Self {
        Price::Int64(value)
    }
}

impl From<i32> for Price {
    fn from(value: i32) -> Self {
        Price::Int(value)
    }
}

impl From<f32> for Price {
    fn from(value: f32) -> Self {
        Price::Float32(value)
    }
}

impl From<f64> for Price {
    fn from(value: f64) -> Self {
        Price::Float64(value)
    }
}

impl From<Decimal> for Price {
    fn from(value: Decimal) -> Self {
        Price::Decimal(value)
    }
}

impl From<&str> for Price {
    fn from(value: &str) -> Self {
        Price::Text(value.to_owned())
    }
}

impl From<String> for Price {
    fn from(value: String) -> Self {
        Price::Text(value)
    }
}
