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

//! Layout tree handed to a renderer.
//!
//! Nodes own their children by value: a [`Table`] owns its [`Cell`]s and every
//! cell owns exactly one content node, either a [`Paragraph`] or a nested
//! [`Table`]. Nothing is shared between parents, so the tree cannot contain
//! cycles.

use crate::InvoiceError;
use crate::style::{Color, StyleDescriptor};
use serde::Serialize;

/// US Letter, in points.
pub const PAGE_WIDTH: f64 = 612.0;
pub const PAGE_HEIGHT: f64 = 792.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Margins {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Margins {
    pub const ZERO: Margins = Margins::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(left: f64, right: f64, top: f64, bottom: f64) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }
}

/// Font size and colour of a paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TextStyle {
    pub font_size: f64,
    pub color: Color,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_size: 10.0,
            color: Color::rgb(0, 0, 0),
        }
    }
}

impl TextStyle {
    pub fn sized(font_size: f64) -> Self {
        Self {
            font_size,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rectangle {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Option<Color>,
    pub border_width: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Paragraph {
    pub text: String,
    pub style: TextStyle,
    pub wrap_enabled: bool,
}

impl Paragraph {
    /// Single-line paragraph; wrapping is off.
    pub fn new(text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            text: text.into(),
            style,
            wrap_enabled: false,
        }
    }
}

/// A table cell and the one node it contains.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cell {
    pub content: Box<LayoutNode>,
    pub style: StyleDescriptor,
}

/// Grid of cells laid out row by row.
///
/// Cells fill the current row left to right; a cell with `col_span > 1`
/// takes that many slots, and a row is complete once all `columns` slots are
/// taken.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    columns: usize,
    column_widths: Option<Vec<f64>>,
    margins: Margins,
    cells: Vec<Cell>,
    #[serde(skip)]
    filled_slots: usize,
}

impl Table {
    /// # Errors
    ///
    /// [`InvoiceError::InvalidTable`] if `columns` is zero.
    pub fn new(columns: usize) -> Result<Self, InvoiceError> {
        if columns == 0 {
            return Err(InvoiceError::InvalidTable("table needs at least one column".into()));
        }
        Ok(Self {
            columns,
            column_widths: None,
            margins: Margins::ZERO,
            cells: Vec::new(),
            filled_slots: 0,
        })
    }

    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    /// Sets relative column widths.
    ///
    /// # Errors
    ///
    /// [`InvoiceError::InvalidTable`] unless exactly one finite, non-negative
    /// width is given per column.
    pub fn set_column_widths(&mut self, widths: &[f64]) -> Result<(), InvoiceError> {
        if widths.len() != self.columns {
            return Err(InvoiceError::InvalidTable(format!(
                "{} column widths for {} columns",
                widths.len(),
                self.columns
            )));
        }
        if let Some(bad) = widths.iter().find(|w| !w.is_finite() || **w < 0.0) {
            return Err(InvoiceError::InvalidTable(format!("invalid column width {bad}")));
        }
        self.column_widths = Some(widths.to_vec());
        Ok(())
    }

    /// Appends a cell holding `content`, styled with `style`.
    ///
    /// # Errors
    ///
    /// [`InvoiceError::InvalidTable`] if `content` is not a paragraph or a
    /// table, or if the style's column span is zero or does not fit in what
    /// is left of the current row.
    pub fn add_cell(
        &mut self,
        content: LayoutNode,
        style: &StyleDescriptor,
    ) -> Result<(), InvoiceError> {
        if let LayoutNode::Rectangle(_) = content {
            return Err(InvoiceError::InvalidTable(format!(
                "cell content must be a paragraph or a table, got {}",
                content.kind()
            )));
        }
        let remaining = self.columns - self.filled_slots % self.columns;
        if style.col_span == 0 || style.col_span > remaining {
            return Err(InvoiceError::InvalidTable(format!(
                "column span {} does not fit in {} remaining columns",
                style.col_span, remaining
            )));
        }
        self.filled_slots += style.col_span;
        self.cells.push(Cell {
            content: Box::new(content),
            style: style.clone(),
        });
        Ok(())
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn column_widths(&self) -> Option<&[f64]> {
        self.column_widths.as_deref()
    }

    pub fn margins(&self) -> Margins {
        self.margins
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Cells grouped into rows. A trailing row may be incomplete.
    pub fn rows(&self) -> Vec<&[Cell]> {
        let mut rows = Vec::new();
        let mut start = 0;
        let mut slots = 0;
        for (index, cell) in self.cells.iter().enumerate() {
            slots += cell.style.col_span;
            if slots == self.columns {
                rows.push(&self.cells[start..=index]);
                start = index + 1;
                slots = 0;
            }
        }
        if start < self.cells.len() {
            rows.push(&self.cells[start..]);
        }
        rows
    }
}

/// A node of the composed document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LayoutNode {
    Rectangle(Rectangle),
    Paragraph(Paragraph),
    Table(Table),
}

impl LayoutNode {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Rectangle(_) => "rectangle",
            Self::Paragraph(_) => "paragraph",
            Self::Table(_) => "table",
        }
    }

    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Self::Table(table) => Some(table),
            _ => None,
        }
    }

    pub fn as_paragraph(&self) -> Option<&Paragraph> {
        match self {
            Self::Paragraph(paragraph) => Some(paragraph),
            _ => None,
        }
    }
}

impl From<Rectangle> for LayoutNode {
    fn from(rectangle: Rectangle) -> Self {
        Self::Rectangle(rectangle)
    }
}

impl From<Paragraph> for LayoutNode {
    fn from(paragraph: Paragraph) -> Self {
        Self::Paragraph(paragraph)
    }
}

impl From<Table> for LayoutNode {
    fn from(table: Table) -> Self {
        Self::Table(table)
    }
}

/// A single page and the top-level nodes drawn on it, in drawing order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    pub page_width: f64,
    pub page_height: f64,
    pub margins: Margins,
    pub nodes: Vec<LayoutNode>,
}

impl Document {
    pub fn letter(margins: Margins) -> Self {
        Self {
            page_width: PAGE_WIDTH,
            page_height: PAGE_HEIGHT,
            margins,
            nodes: Vec::new(),
        }
    }

    pub fn push(&mut self, node: impl Into<LayoutNode>) {
        self.nodes.push(node.into());
    }
}
