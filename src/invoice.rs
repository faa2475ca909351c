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

//! Invoice aggregate.
//!
//! # Example
//!
//! ```
//! use invoice_composer::{Invoice, LineItem};
//!
//! let items = vec![
//!     LineItem::new("Ecommerce application", 1, 3000.50).unwrap(),
//!     LineItem::new("Macbook Pro", 1, 200.70).unwrap(),
//! ];
//! let invoice = Invoice::new("Example Shop1", "Example address", items);
//! assert_eq!(invoice.grand_total_display(), 3201.20);
//! ```

use crate::InvoiceError;
use crate::base::Cents;
use crate::line_item::LineItem;
use serde::Serialize;

/// A billed party and its ordered line items.
///
/// Name, address and items are not validated; an invoice without items is
/// valid and totals to zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Invoice {
    business_name: String,
    address: String,
    /// Display order.
    items: Vec<LineItem>,
}

impl Invoice {
    pub fn new(
        business_name: impl Into<String>,
        address: impl Into<String>,
        items: Vec<LineItem>,
    ) -> Self {
        Self {
            business_name: business_name.into(),
            address: address.into(),
            items,
        }
    }

    pub fn business_name(&self) -> &str {
        &self.business_name
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Sum of all line totals, in cents.
    ///
    /// # Errors
    ///
    /// [`InvoiceError::AmountOverflow`] if the sum does not fit in an `i64`.
    pub fn grand_total(&self) -> Result<Cents, InvoiceError> {
        self.items.iter().try_fold(Cents::ZERO, |total, item| {
            total.checked_add(item.line_total()).ok_or_else(|| {
                InvoiceError::AmountOverflow(format!("grand total of {}", self.business_name))
            })
        })
    }

    /// Grand total in display units.
    ///
    /// Line totals are summed as integers and divided by 100 exactly once.
    /// The sum is taken in `i128`, which no number of `i64` line totals can
    /// overflow in practice.
    pub fn grand_total_display(&self) -> f64 {
        let cents: i128 = self
            .items
            .iter()
            .map(|item| i128::from(item.line_total().0))
            .sum();
        cents as f64 / 100.0
    }

    /// File stem of the rendered artifact: the lower-cased business name
    /// followed by `_invoice`.
    ///
    /// Equal business names always yield the same stem, so a later render
    /// overwrites an earlier one.
    pub fn artifact_stem(&self) -> String {
        format!("{}_invoice", self.business_name.to_lowercase())
    }
}
