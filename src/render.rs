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

//! Renderer boundary and artifact output.
//!
//! A [`Renderer`] turns a composed [`Document`] into bytes. [`write_artifact`]
//! drives it against a temporary file in the target directory and moves the
//! file into place only once rendering succeeded. On any failure the
//! temporary file is removed and an existing artifact of the same name is
//! left as it was.

use crate::InvoiceError;
use crate::layout::Document;
use std::io::{self, BufWriter, Write};
use std::path::{Component, Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::info;

/// Produces a document artifact from a composed layout.
pub trait Renderer {
    /// File extension of the artifact, without the dot.
    fn extension(&self) -> &str;

    /// Writes `document` to `out`.
    ///
    /// # Errors
    ///
    /// [`InvoiceError::RendererFailure`] if the document cannot be rendered
    /// or written.
    fn render(&self, document: &Document, out: &mut dyn Write) -> Result<(), InvoiceError>;
}

/// Renders the layout tree as JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer {
    pub pretty: bool,
}

impl JsonRenderer {
    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

impl Renderer for JsonRenderer {
    fn extension(&self) -> &str {
        "json"
    }

    fn render(&self, document: &Document, out: &mut dyn Write) -> Result<(), InvoiceError> {
        let result = if self.pretty {
            serde_json::to_writer_pretty(&mut *out, document)
        } else {
            serde_json::to_writer(&mut *out, document)
        };
        result.map_err(|e| InvoiceError::RendererFailure(e.to_string()))
    }
}

fn io_failure(error: io::Error) -> InvoiceError {
    InvoiceError::RendererFailure(error.to_string())
}

/// Accepts only a single ordinary path component, so the artifact always
/// lands directly inside the output directory.
fn check_stem(stem: &str) -> Result<(), InvoiceError> {
    let mut components = Path::new(stem).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(name)), None) if name == stem => Ok(()),
        _ => Err(InvoiceError::InvalidInput(format!(
            "artifact name {stem:?} is not a plain file name"
        ))),
    }
}

/// Renders `document` to `<dir>/<stem>.<extension>`, replacing any existing
/// file of that name, and returns the path written.
///
/// # Errors
///
/// - [`InvoiceError::InvalidInput`] - `stem` is empty or is not a plain file
///   name, e.g. it holds a path separator or is `..`. Nothing is written.
/// - [`InvoiceError::RendererFailure`] - rendering fails or the file cannot
///   be created, written or moved into place. Nothing is left at the target
///   path beyond what was there before.
pub fn write_artifact(
    renderer: &dyn Renderer,
    document: &Document,
    dir: &Path,
    stem: &str,
) -> Result<PathBuf, InvoiceError> {
    check_stem(stem)?;
    let target = dir.join(format!("{stem}.{}", renderer.extension()));
    let mut file = NamedTempFile::new_in(dir).map_err(io_failure)?;
    {
        let mut writer = BufWriter::new(file.as_file_mut());
        renderer.render(document, &mut writer)?;
        writer.flush().map_err(io_failure)?;
    }
    file.as_file().sync_all().map_err(io_failure)?;
    file.persist(&target).map_err(|e| io_failure(e.error))?;

    info!(path = %target.display(), "wrote invoice artifact");
    Ok(target)
}
