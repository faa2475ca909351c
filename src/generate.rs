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

//! End-to-end invoice generation.

use crate::InvoiceError;
use crate::composer::Composer;
use crate::config::LicenseConfig;
use crate::invoice::Invoice;
use crate::render::{Renderer, write_artifact};
use crate::style::StyleRegistry;
use std::path::{Path, PathBuf};
use tracing::info;

/// Composes `invoice` and writes it to `out_dir` as
/// `<lower-cased business name>_invoice.<extension>`.
///
/// A [`LicenseConfig`] only exists once the licence key was found, so
/// holding one is the precondition for any layout work. Load it first with
/// [`LicenseConfig::from_env`] and propagate its
/// [`InvoiceError::PreconditionFailure`]. Steps run in order and the first
/// error is returned unchanged; no artifact is written unless every step
/// succeeded.
///
/// # Errors
///
/// - [`InvoiceError::CompositionFailure`] - The layout could not be built.
/// - [`InvoiceError::InvalidInput`] - The business name is not usable as a
///   file name.
/// - [`InvoiceError::RendererFailure`] - The artifact could not be written.
pub fn generate_invoice(
    invoice: &Invoice,
    styles: &StyleRegistry,
    _license: &LicenseConfig,
    renderer: &dyn Renderer,
    out_dir: &Path,
) -> Result<PathBuf, InvoiceError> {
    let document = Composer::new(styles).compose(invoice)?;
    let path = write_artifact(renderer, &document, out_dir, &invoice.artifact_stem())?;

    info!(
        business = invoice.business_name(),
        total = invoice.grand_total_display(),
        "generated invoice"
    );
    Ok(path)
}
