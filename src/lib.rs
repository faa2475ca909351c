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

//! # Invoice Composer
//!
//! This library turns invoices (line items, quantities, unit prices) into a
//! document layout made of styled tables, ready to hand to a renderer.
//!
//! ## Core Components
//!
//! - [`LineItem`] and [`Cents`]: Fixed-point money, normalized once from a [`Price`]
//! - [`Invoice`]: Billed party plus ordered line items, totalled in cents
//! - [`StyleRegistry`]: Immutable table of named cell styles
//! - [`Composer`]: Builds the [`Document`] layout tree from an invoice
//! - [`Renderer`]: Boundary to whatever produces the final artifact
//! - [`InvoiceError`]: Error types for every step
//!
//! ## Example
//!
//! ```
//! use invoice_composer::{Composer, Invoice, LineItem, StyleRegistry};
//!
//! let items = vec![
//!     LineItem::new("Ecommerce application", 1, 3000.50).unwrap(),
//!     LineItem::new("Macbook Pro", 1, 200.70).unwrap(),
//! ];
//! let invoice = Invoice::new("Example Shop1", "Example address", items);
//! assert_eq!(invoice.grand_total_display(), 3201.20);
//!
//! let styles = StyleRegistry::standard();
//! let document = Composer::new(&styles).compose(&invoice).unwrap();
//! assert_eq!(document.nodes.len(), 5);
//! ```
//!
//! ## Thread Safety
//!
//! Composition is synchronous and touches only its own invoice. A
//! [`StyleRegistry`] is never mutated once built, so one instance can serve
//! compositions on any number of threads.

mod base;
pub mod composer;
pub mod config;
pub mod error;
mod generate;
pub mod import;
mod invoice;
pub mod layout;
mod line_item;
mod price;
pub mod render;
pub mod style;

pub use base::Cents;
pub use composer::Composer;
pub use config::LicenseConfig;
pub use error::InvoiceError;
pub use generate::generate_invoice;
pub use import::read_line_items;
pub use invoice::Invoice;
pub use layout::{Cell, Document, LayoutNode, Margins, Paragraph, Rectangle, Table, TextStyle};
pub use line_item::LineItem;
pub use price::Price;
pub use render::{JsonRenderer, Renderer, write_artifact};
pub use style::{
    BorderSide, BorderStyle, Color, HorizontalAlignment, StyleDescriptor, StyleRegistry,
};
