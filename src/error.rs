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

//! Error types for invoice construction, composition and rendering.

use thiserror::Error;

/// Invoice processing errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvoiceError {
    /// Price was supplied in a representation that cannot become cents
    #[error("unsupported price type: {0}")]
    UnsupportedPriceType(String),

    /// Line or invoice total does not fit in cents
    #[error("amount overflows cents: {0}")]
    AmountOverflow(String),

    /// Style name is not in the registry
    #[error("unknown style: {0}")]
    UnknownStyle(String),

    /// Style name was registered twice
    #[error("style already registered: {0}")]
    DuplicateStyle(String),

    /// Table could not be assembled (bad widths, bad cell content, bad span)
    #[error("invalid table: {0}")]
    InvalidTable(String),

    /// A composition step failed
    #[error("composition failed at {step}: {source}")]
    CompositionFailure {
        step: &'static str,
        #[source]
        source: Box<InvoiceError>,
    },

    /// Renderer could not produce the artifact
    #[error("renderer failed: {0}")]
    RendererFailure(String),

    /// Licensing or configuration was missing before rendering started
    #[error("precondition failed: {0}")]
    PreconditionFailure(String),

    /// Line-item input could not be read
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl InvoiceError {
    /// Wraps `self` as the cause of a failed composition step.
    pub(crate) fn at(self, step: &'static str) -> InvoiceError {
        InvoiceError::CompositionFailure {
            step,
            source: Box::new(self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::InvoiceError;
    use std::error::Error;

    #[test]
    fn error_display_messages() {
        assert_eq!(
            InvoiceError::UnsupportedPriceType("text \"abc\"".into()).to_string(),
            "unsupported price type: text \"abc\""
        );
        assert_eq!(
            InvoiceError::AmountOverflow("2 x 9223372036854775807".into()).to_string(),
            "amount overflows cents: 2 x 9223372036854775807"
        );
        assert_eq!(
            InvoiceError::UnknownStyle("nope".into()).to_string(),
            "unknown style: nope"
        );
        assert_eq!(
            InvoiceError::DuplicateStyle("left".into()).to_string(),
            "style already registered: left"
        );
        assert_eq!(
            InvoiceError::RendererFailure("disk full".into()).to_string(),
            "renderer failed: disk full"
        );
        assert_eq!(
            InvoiceError::PreconditionFailure("no key".into()).to_string(),
            "precondition failed: no key"
        );
    }

    #[test]
    fn composition_failure_keeps_cause() {
        let error = InvoiceError::UnknownStyle("missing".into()).at("itemization");
        assert_eq!(
            error.to_string(),
            "composition failed at itemization: unknown style: missing"
        );
        let source = error.source().unwrap();
        assert_eq!(source.to_string(), "unknown style: missing");
    }

    #[test]
    fn errors_are_cloneable() {
        let error = InvoiceError::InvalidTable("zero columns".into()).at("title");
        let cloned = error.clone();
        assert_eq!(error, cloned);
    }
}
