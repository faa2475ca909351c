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

//! Property-based tests for money handling and composition.
//!
//! These tests verify invariants that should hold for any invoice.

use invoice_composer::{Cents, Composer, Invoice, InvoiceError, LineItem, Price, StyleRegistry};
use proptest::prelude::*;
use rust_decimal::Decimal;

// =============================================================================
// Arbitrary Strategies
// =============================================================================

/// Generate a price with up to 4 decimal places, between -100000 and 100000.
fn arb_price() -> impl Strategy<Value = Decimal> {
    (-1_000_000_000i64..=1_000_000_000i64).prop_map(|raw| Decimal::new(raw, 4))
}

fn arb_quantity() -> impl Strategy<Value = i64> {
    -1_000i64..=1_000i64
}

fn arb_items() -> impl Strategy<Value = Vec<LineItem>> {
    prop::collection::vec(
        ("[a-zA-Z ]{0,20}", arb_quantity(), arb_price())
            .prop_map(|(title, quantity, price)| LineItem::new(title, quantity, price).unwrap()),
        0..20,
    )
}

// =============================================================================
// Money Invariant Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Line total equals quantity times the price truncated to cents.
    #[test]
    fn line_total_truncates_toward_zero(
        quantity in arb_quantity(),
        raw in -1_000_000_000i64..=1_000_000_000i64,
    ) {
        // raw has 4 decimal places, so cents are raw / 100 rounded toward zero.
        let item = LineItem::new("item", quantity, Decimal::new(raw, 4)).unwrap();
        let expected = raw / 100;
        prop_assert_eq!(item.unit_price(), Cents(expected));
        prop_assert_eq!(item.line_total(), Cents(quantity * expected));
    }

    /// Float prices are scaled once and truncated, never rounded.
    #[test]
    fn float_prices_truncate(quantity in arb_quantity(), price in -1.0e6f64..1.0e6f64) {
        let item = LineItem::new("item", quantity, price).unwrap();
        let expected = (price * 100.0).trunc() as i64;
        prop_assert_eq!(item.line_total(), Cents(quantity * expected));
    }

    /// Whole-unit integer prices scale by exactly 100.
    #[test]
    fn integer_prices_scale_by_hundred(units in -1_000_000i64..=1_000_000i64) {
        prop_assert_eq!(Price::Int64(units).to_cents(), Ok(Cents(units * 100)));
    }

    /// Grand total is the integer sum divided once, in any item order.
    #[test]
    fn grand_total_is_order_independent(items in arb_items()) {
        let sum: i64 = items.iter().map(|i| i.line_total().0).sum();
        let mut reversed = items.clone();
        reversed.reverse();

        let forward = Invoice::new("Shop", "Street", items);
        let backward = Invoice::new("Shop", "Street", reversed);

        prop_assert_eq!(forward.grand_total_display(), sum as f64 / 100.0);
        prop_assert_eq!(forward.grand_total(), backward.grand_total());
    }

    /// Text prices never convert.
    #[test]
    fn text_prices_are_rejected(text in ".*") {
        let result = LineItem::new("item", 1, text);
        prop_assert!(matches!(result, Err(InvoiceError::UnsupportedPriceType(_))));
    }
}

// =============================================================================
// Composition Invariant Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// One header row plus one row per item, in item order.
    #[test]
    fn itemization_has_row_per_item(items in arb_items()) {
        let styles = StyleRegistry::standard();
        let invoice = Invoice::new("Shop", "Street", items);
        let document = Composer::new(&styles).compose(&invoice).unwrap();

        let table = document.nodes[3].as_table().unwrap();
        let rows = table.rows();
        prop_assert_eq!(rows.len(), invoice.items().len() + 1);
        for (row, item) in rows[1..].iter().zip(invoice.items()) {
            let title = &row[0].content.as_paragraph().unwrap().text;
            prop_assert_eq!(title, &format!(" {}", item.title()));
        }
    }

    /// Composing twice yields identical trees.
    #[test]
    fn composition_is_pure(items in arb_items()) {
        let styles = StyleRegistry::standard();
        let composer = Composer::new(&styles);
        let invoice = Invoice::new("Shop", "Street", items);
        prop_assert_eq!(composer.compose(&invoice), composer.compose(&invoice));
    }
}
