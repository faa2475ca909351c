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

//! Invoice line items.

use crate::InvoiceError;
use crate::base::Cents;
use crate::price::Price;
use serde::Serialize;

/// One purchasable entry on an invoice.
///
/// The unit price is stored in cents and only ever derived from a [`Price`]
/// at construction, together with the line total. Quantities and prices are
/// not range-checked: zero and negative values pass through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineItem {
    title: String,
    quantity: i64,
    unit_price: Cents,
    #[serde(skip)]
    line_total: Cents,
}

impl LineItem {
    /// Creates a line item, normalizing `price` to cents.
    ///
    /// # Errors
    ///
    /// - [`InvoiceError::UnsupportedPriceType`] - `price` cannot be expressed in cents.
    /// - [`InvoiceError::AmountOverflow`] - `quantity * price` does not fit in cents.
    pub fn new(
        title: impl Into<String>,
        quantity: i64,
        price: impl Into<Price>,
    ) -> Result<Self, InvoiceError> {
        let unit_price = price.into().to_cents()?;
        let line_total = unit_price.checked_mul(quantity).ok_or_else(|| {
            InvoiceError::AmountOverflow(format!("{quantity} x {unit_price} cents"))
        })?;
        Ok(Self {
            title: title.into(),
            quantity,
            unit_price,
            line_total,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn unit_price(&self) -> Cents {
        self.unit_price
    }

    /// Returns `quantity * unit_price`.
    pub fn line_total(&self) -> Cents {
        self.line_total
    }

    pub fn unit_price_display(&self) -> f64 {
        self.unit_price.to_display()
    }

    pub fn line_total_display(&self) -> f64 {
        self.line_total().to_display()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_total_multiplies_in_cents() {
        let item = LineItem::new("Macbook Pro", 3, 200.70).unwrap();
        assert_eq!(item.unit_price(), Cents(20_070));
        assert_eq!(item.line_total(), Cents(60_210));
        assert_eq!(item.line_total_display(), 602.1);
        assert_eq!(item.unit_price_display(), 200.7);
    }

    #[test]
    fn negative_quantity_is_accepted() {
        let item = LineItem::new("Refund", -2, 10_i64).unwrap();
        assert_eq!(item.line_total(), Cents(-2_000));
    }

    #[test]
    fn empty_title_is_accepted() {
        let item = LineItem::new("", 1, 1_i32).unwrap();
        assert_eq!(item.title(), "");
    }

    #[test]
    fn overflowing_line_total_is_rejected() {
        let result = LineItem::new("Bulk", i64::MAX, 2_i64);
        assert_eq!(
            result,
            Err(InvoiceError::AmountOverflow(
                "9223372036854775807 x 200 cents".into()
            ))
        );
        assert!(LineItem::new("Refund", i64::MIN, 1_i64).is_err());
    }

    #[test]
    fn text_price_is_rejected() {
        let result = LineItem::new("Widget", 1, "ten dollars");
        assert_eq!(
            result,
            Err(InvoiceError::UnsupportedPriceType("text \"ten dollars\"".into()))
        );
    }
}
