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

//! Line items from CSV.
//!
//! # CSV Format
//!
//! Expected columns: `title, quantity, price`
//! - `title`: Free text
//! - `quantity`: Integer unit count
//! - `price`: Decimal unit price in currency units, e.g. `3000.50`
//!
//! ```csv
//! title,quantity,price
//! Ecommerce application,1,3000.50
//! Macbook Pro,1,200.70
//! ```

use crate::InvoiceError;
use crate::line_item::LineItem;
use csv::{ReaderBuilder, Trim};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;
use tracing::debug;

/// Raw CSV record matching the input format.
#[derive(Debug, Deserialize)]
struct CsvRecord {
    title: String,
    quantity: i64,
    price: Decimal,
}

/// Reads line items in file order.
///
/// Unlike a transaction feed, an invoice cannot drop rows: a skipped line
/// would change the total. Any malformed row fails the whole read.
///
/// # Errors
///
/// [`InvoiceError::InvalidInput`] for unreadable or malformed rows, and for
/// rows whose price or line total does not fit in cents. The message names
/// the offending line.
pub fn read_line_items<R: Read>(reader: R) -> Result<Vec<LineItem>, InvoiceError> {
    let mut rdr = ReaderBuilder::new()
        .trim(Trim::All)
        .has_headers(true)
        .from_reader(reader);

    let headers = rdr.headers().map_err(invalid_input)?.clone();
    let mut items = Vec::new();
    for result in rdr.records() {
        let raw = result.map_err(invalid_input)?;
        let line = raw.position().map_or(0, |p| p.line());
        let record: CsvRecord = raw.deserialize(Some(&headers)).map_err(invalid_input)?;
        let item = LineItem::new(record.title, record.quantity, record.price)
            .map_err(|e| InvoiceError::InvalidInput(format!("line {line}: {e}")))?;
        items.push(item);
    }

    debug!(count = items.len(), "read line items");
    Ok(items)
}

fn invalid_input(e: csv::Error) -> InvoiceError {
    let line = e.position().map_or(0, |p| p.line());
    InvoiceError::InvalidInput(format!("line {line}: {e}"))
}
