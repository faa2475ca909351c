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

//! Invoice layout composition.
//!
//! The [`Composer`] turns an [`Invoice`] into a [`Document`] whose top-level
//! nodes are, in order:
//!
//! | # | Node | Content |
//! |---|------|---------|
//! | 1 | Rectangle | Full-width banner |
//! | 2 | Table (1 column) | Document title |
//! | 3 | Table (2 columns) | Business name and address |
//! | 4 | Table (4 columns) | Header row, then one row per line item |
//! | 5 | Table (12 columns) | Right-hand summary with the grand total |
//!
//! Composition is a pure function of the invoice and the style registry. The
//! first failing step aborts it and no partial document is returned.

use crate::InvoiceError;
use crate::invoice::Invoice;
use crate::layout::{
    Document, LayoutNode, Margins, PAGE_WIDTH, Paragraph, Rectangle, Table, TextStyle,
};
use crate::style::{Color, HIGHLIGHT_BACKGROUND, StyleDescriptor, StyleRegistry};
use tracing::debug;

pub const DOCUMENT_TITLE: &str = "Sample Invoice";
pub const TOTAL_LABEL: &str = "Total Amount:";

const PAGE_MARGINS: Margins = Margins::new(40.0, 40.0, 0.0, 0.0);
const BANNER_HEIGHT: f64 = 120.0;
const TITLE_FONT_SIZE: f64 = 50.0;
const HEADING_FONT_SIZE: f64 = 20.0;
const HEADING_TEXT: Color = Color::rgb(0xfd, 0xfd, 0xfd);
const ITEM_COLUMN_WIDTHS: [f64; 4] = [0.4, 0.2, 0.2, 0.2];
const SUMMARY_COLUMN_WIDTHS: [f64; 2] = [0.6, 0.4];
const SUMMARY_GRID_COLUMNS: usize = 12;
const SUMMARY_GRID_SPAN: usize = 7;

/// Builds invoice layouts from a shared style registry.
#[derive(Debug, Clone, Copy)]
pub struct Composer<'a> {
    styles: &'a StyleRegistry,
}

impl<'a> Composer<'a> {
    pub fn new(styles: &'a StyleRegistry) -> Self {
        Self { styles }
    }

    /// Composes the invoice document.
    ///
    /// # Errors
    ///
    /// [`InvoiceError::CompositionFailure`] naming the failed step and wrapping
    /// its cause, typically [`InvoiceError::UnknownStyle`] when the registry
    /// lacks a style the layout uses, or [`InvoiceError::InvalidTable`].
    pub fn compose(&self, invoice: &Invoice) -> Result<Document, InvoiceError> {
        let mut document = Document::letter(PAGE_MARGINS);

        document.push(banner());
        document.push(self.title().map_err(|e| e.at("title"))?);
        document.push(self.party(invoice).map_err(|e| e.at("party"))?);
        document.push(self.itemization(invoice).map_err(|e| e.at("itemization"))?);
        document.push(self.summary(invoice).map_err(|e| e.at("summary"))?);

        debug!(
            business = invoice.business_name(),
            items = invoice.items().len(),
            nodes = document.nodes.len(),
            "composed invoice layout"
        );
        Ok(document)
    }

    fn cell(
        &self,
        table: &mut Table,
        content: impl Into<LayoutNode>,
        style: &str,
    ) -> Result<(), InvoiceError> {
        let style = self.styles.resolve(style)?;
        table.add_cell(content.into(), style)
    }

    fn title(&self) -> Result<Table, InvoiceError> {
        let mut table = Table::new(1)?.with_margins(Margins::new(0.0, 0.0, 20.0, 0.0));
        let title = Paragraph::new(DOCUMENT_TITLE, TextStyle::sized(TITLE_FONT_SIZE));
        self.cell(&mut table, title, "centered")?;
        Ok(table)
    }

    fn party(&self, invoice: &Invoice) -> Result<Table, InvoiceError> {
        let mut table = Table::new(2)?.with_margins(Margins::new(0.0, 0.0, 50.0, 0.0));
        let style = TextStyle::default();
        self.cell(
            &mut table,
            Paragraph::new(format!("Business: {}", invoice.business_name()), style),
            "left",
        )?;
        self.cell(
            &mut table,
            Paragraph::new(format!("Address: {}", invoice.address()), style),
            "left",
        )?;
        Ok(table)
    }

    fn itemization(&self, invoice: &Invoice) -> Result<Table, InvoiceError> {
        let mut table = Table::new(4)?.with_margins(Margins::new(0.0, 0.0, 20.0, 0.0));
        table.set_column_widths(&ITEM_COLUMN_WIDTHS)?;

        let heading = TextStyle {
            font_size: HEADING_FONT_SIZE,
            color: HEADING_TEXT,
        };
        self.cell(&mut table, Paragraph::new(" Title", heading), "heading-left")?;
        for label in ["Quantity", "Price", "Total"] {
            self.cell(&mut table, Paragraph::new(label, heading), "heading-centered")?;
        }

        let regular = TextStyle::default();
        for item in invoice.items() {
            self.cell(
                &mut table,
                Paragraph::new(format!(" {}", item.title()), regular),
                "left-highlighted",
            )?;
            let values = [
                item.quantity().to_string(),
                item.unit_price_display().to_string(),
                item.line_total_display().to_string(),
            ];
            for value in values {
                self.cell(&mut table, Paragraph::new(value, regular), "centered-highlighted")?;
            }
        }
        Ok(table)
    }

    fn summary(&self, invoice: &Invoice) -> Result<Table, InvoiceError> {
        let style = TextStyle::default();
        let mut totals = Table::new(2)?;
        totals.set_column_widths(&SUMMARY_COLUMN_WIDTHS)?;
        self.cell(&mut totals, Paragraph::new(TOTAL_LABEL, style), "conduct-key")?;
        self.cell(
            &mut totals,
            Paragraph::new(invoice.grand_total_display().to_string(), style),
            "conduct-val",
        )?;

        // Unstyled container; the span leaves the remaining grid columns empty.
        let mut grid =
            Table::new(SUMMARY_GRID_COLUMNS)?.with_margins(Margins::new(0.0, 0.0, 50.0, 0.0));
        grid.add_cell(totals.into(), &StyleDescriptor::default().spanning(SUMMARY_GRID_SPAN))?;
        Ok(grid)
    }
}

fn banner() -> Rectangle {
    Rectangle {
        x: 0.0,
        y: 0.0,
        width: PAGE_WIDTH,
        height: BANNER_HEIGHT,
        fill: Some(HIGHLIGHT_BACKGROUND),
        border_width: 0.0,
    }
}
