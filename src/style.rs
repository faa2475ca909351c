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

//! Named cell styles.
//!
//! A [`StyleRegistry`] maps a style name such as `"heading-left"` to the
//! [`StyleDescriptor`] applied to a table cell. Registries are assembled once
//! through [`StyleRegistryBuilder`] and are read-only afterwards, so a single
//! instance can be shared by any number of compositions.
//!
//! ```
//! use invoice_composer::{HorizontalAlignment, StyleRegistry};
//!
//! let styles = StyleRegistry::standard();
//! let heading = styles.resolve("heading-centered").unwrap();
//! assert_eq!(heading.alignment, HorizontalAlignment::Center);
//! assert!(styles.resolve("nonexistent").is_err());
//! ```

use crate::InvoiceError;
use serde::Serialize;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;

/// RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#rrggbb` (the leading `#` is optional).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }
        let channel = |at: usize| u8::from_str_radix(&digits[at..at + 2], 16).ok();
        Some(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Dark background of heading cells.
pub const HEADING_BACKGROUND: Color = Color::rgb(0x33, 0x2f, 0x3f);
/// Light background of highlighted cells and the page banner.
pub const HIGHLIGHT_BACKGROUND: Color = Color::rgb(0xdd, 0xe4, 0xe5);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum HorizontalAlignment {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum BorderSide {
    #[default]
    None,
    All,
    Left,
    Right,
    Top,
    Bottom,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum BorderStyle {
    #[default]
    None,
    Single,
    Double,
}

/// Appearance of a table cell.
///
/// Text colour and size are not part of the descriptor; they belong to the
/// paragraph placed in the cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyleDescriptor {
    /// Number of table columns the cell covers. At least 1.
    pub col_span: usize,
    pub alignment: HorizontalAlignment,
    pub background: Option<Color>,
    pub border_side: BorderSide,
    pub border_style: BorderStyle,
    pub border_width: f64,
    pub border_color: Option<Color>,
    /// Left indent; 0 leaves the cell unindented.
    pub indent: f64,
}

impl Default for StyleDescriptor {
    fn default() -> Self {
        Self {
            col_span: 1,
            alignment: HorizontalAlignment::Left,
            background: None,
            border_side: BorderSide::None,
            border_style: BorderStyle::None,
            border_width: 0.0,
            border_color: None,
            indent: 0.0,
        }
    }
}

impl StyleDescriptor {
    /// Alignment only; no background or border.
    pub fn aligned(alignment: HorizontalAlignment) -> Self {
        Self {
            alignment,
            ..Self::default()
        }
    }

    /// Filled cell with a single white border on all sides.
    pub fn boxed(alignment: HorizontalAlignment, background: Color, border_width: f64) -> Self {
        Self {
            alignment,
            background: Some(background),
            border_side: BorderSide::All,
            border_style: BorderStyle::Single,
            border_width,
            border_color: Some(Color::WHITE),
            ..Self::default()
        }
    }

    /// Same style stretched over `col_span` columns.
    pub fn spanning(mut self, col_span: usize) -> Self {
        self.col_span = col_span;
        self
    }
}

/// Immutable lookup table of named cell styles.
#[derive(Debug, Clone)]
pub struct StyleRegistry {
    styles: HashMap<String, StyleDescriptor>,
}

impl StyleRegistry {
    pub fn builder() -> StyleRegistryBuilder {
        StyleRegistryBuilder::default()
    }

    /// The style set used by the invoice layout.
    pub fn standard() -> Self {
        use HorizontalAlignment::{Center, Left};

        let entries = [
            ("heading-left", StyleDescriptor::boxed(Left, HEADING_BACKGROUND, 6.0)),
            ("heading-centered", StyleDescriptor::boxed(Center, HEADING_BACKGROUND, 6.0)),
            ("left-highlighted", StyleDescriptor::boxed(Left, HIGHLIGHT_BACKGROUND, 6.0)),
            ("centered-highlighted", StyleDescriptor::boxed(Center, HIGHLIGHT_BACKGROUND, 6.0)),
            ("left", StyleDescriptor::aligned(Left)),
            ("centered", StyleDescriptor::aligned(Center)),
            ("gradingsys-head", StyleDescriptor::aligned(Left)),
            ("gradingsys-row", StyleDescriptor::aligned(Center)),
            ("conduct-head", StyleDescriptor::aligned(Left)),
            ("conduct-key", StyleDescriptor::aligned(Left)),
            ("conduct-val", StyleDescriptor::boxed(Center, HIGHLIGHT_BACKGROUND, 3.0)),
        ];

        Self {
            styles: entries
                .into_iter()
                .map(|(name, style)| (name.to_owned(), style))
                .collect(),
        }
    }

    /// Looks up a style by name.
    ///
    /// # Errors
    ///
    /// [`InvoiceError::UnknownStyle`] if no style of that name was registered.
    pub fn resolve(&self, name: &str) -> Result<&StyleDescriptor, InvoiceError> {
        self.styles
            .get(name)
            .ok_or_else(|| InvoiceError::UnknownStyle(name.to_owned()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.styles.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Default for StyleRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

/// Collects styles for a [`StyleRegistry`].
#[derive(Debug, Default)]
pub struct StyleRegistryBuilder {
    styles: HashMap<String, StyleDescriptor>,
}

impl StyleRegistryBuilder {
    /// Adds a named style.
    ///
    /// # Errors
    ///
    /// [`InvoiceError::DuplicateStyle`] if `name` is already registered; the
    /// existing style is kept.
    pub fn register(
        mut self,
        name: impl Into<String>,
        style: StyleDescriptor,
    ) -> Result<Self, InvoiceError> {
        match self.styles.entry(name.into()) {
            Entry::Occupied(entry) => Err(InvoiceError::DuplicateStyle(entry.key().clone())),
            Entry::Vacant(entry) => {
                entry.insert(style);
                Ok(self)
            }
        }
    }

    pub fn build(self) -> StyleRegistry {
        StyleRegistry {
            styles: self.styles,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_registry_has_reference_names() {
        let styles = StyleRegistry::standard();
        for name in [
            "heading-left",
            "heading-centered",
            "left-highlighted",
            "centered-highlighted",
            "left",
            "centered",
            "conduct-key",
            "conduct-val",
        ] {
            assert!(styles.contains(name), "missing style {name}");
        }
        assert_eq!(styles.len(), 11);
    }

    #[test]
    fn heading_styles_are_dark_and_bordered() {
        let styles = StyleRegistry::standard();
        let heading = styles.resolve("heading-left").unwrap();
        assert_eq!(heading.background, Some(HEADING_BACKGROUND));
        assert_eq!(heading.border_side, BorderSide::All);
        assert_eq!(heading.border_style, BorderStyle::Single);
        assert_eq!(heading.border_width, 6.0);
        assert_eq!(heading.border_color, Some(Color::WHITE));
        assert_eq!(heading.col_span, 1);
    }

    #[test]
    fn plain_styles_carry_alignment_only() {
        let styles = StyleRegistry::standard();
        let centered = styles.resolve("centered").unwrap();
        assert_eq!(centered, &StyleDescriptor::aligned(HorizontalAlignment::Center));
        assert_eq!(centered.background, None);
        assert_eq!(centered.border_side, BorderSide::None);
    }

    #[test]
    fn summary_value_has_thinner_border() {
        let styles = StyleRegistry::standard();
        assert_eq!(styles.resolve("conduct-val").unwrap().border_width, 3.0);
    }

    #[test]
    fn resolve_is_stable() {
        let styles = StyleRegistry::standard();
        assert_eq!(
            styles.resolve("left-highlighted").unwrap(),
            styles.resolve("left-highlighted").unwrap()
        );
    }

    #[test]
    fn unknown_style_fails() {
        let styles = StyleRegistry::standard();
        assert_eq!(
            styles.resolve("nonexistent"),
            Err(InvoiceError::UnknownStyle("nonexistent".into()))
        );
    }

    #[test]
    fn builder_rejects_duplicates() {
        let result = StyleRegistry::builder()
            .register("left", StyleDescriptor::default())
            .and_then(|b| b.register("left", StyleDescriptor::aligned(HorizontalAlignment::Right)));
        assert_eq!(result.unwrap_err(), InvoiceError::DuplicateStyle("left".into()));
    }

    #[test]
    fn builder_registers_custom_styles() {
        let styles = StyleRegistry::builder()
            .register("right", StyleDescriptor::aligned(HorizontalAlignment::Right))
            .unwrap()
            .build();
        assert_eq!(styles.names(), ["right"]);
        assert!(styles.resolve("left").is_err());
    }

    #[test]
    fn color_hex_parsing() {
        assert_eq!(Color::from_hex("#332f3f"), Some(HEADING_BACKGROUND));
        assert_eq!(Color::from_hex("dde4e5"), Some(HIGHLIGHT_BACKGROUND));
        assert_eq!(Color::from_hex("#fff"), None);
        assert_eq!(Color::from_hex("#gggggg"), None);
        assert_eq!(HIGHLIGHT_BACKGROUND.to_string(), "#dde4e5");
    }
}
