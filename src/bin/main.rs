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

use clap::Parser;
use invoice_composer::{
    Invoice, JsonRenderer, LicenseConfig, StyleRegistry, generate_invoice, read_line_items,
};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::process;
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Invoice Composer - Lay out an invoice from a CSV of line items
///
/// Reads line items from a CSV file, composes the invoice layout and writes
/// it to `<business name>_invoice.json` in the output directory, replacing
/// any earlier file of that name.
#[derive(Parser, Debug)]
#[command(name = "invoice-composer")]
#[command(about = "Composes an invoice layout from a CSV of line items", long_about = None)]
struct Args {
    /// Path to CSV file with line items
    ///
    /// Expected format: title,quantity,price
    /// Example: cargo run -- items.csv --business "Example Shop1" --address "Example address"
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Name of the billed business
    #[arg(long)]
    business: String,

    /// Address of the billed business
    #[arg(long)]
    address: String,

    /// Directory the artifact is written to
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
}

fn main() {
    init_tracing();

    let args = Args::parse();

    // Checked before the input is even opened.
    let license = match LicenseConfig::from_env() {
        Ok(license) => license,
        Err(e) => {
            error!("{e}");
            process::exit(1);
        }
    };

    let file = match File::open(&args.input) {
        Ok(f) => f,
        Err(e) => {
            error!("Error opening file '{}': {}", args.input.display(), e);
            process::exit(1);
        }
    };

    let items = match read_line_items(BufReader::new(file)) {
        Ok(items) => items,
        Err(e) => {
            error!("Error reading line items: {}", e);
            process::exit(1);
        }
    };

    let invoice = Invoice::new(args.business, args.address, items);
    let styles = StyleRegistry::standard();

    if let Err(e) = generate_invoice(
        &invoice,
        &styles,
        &license,
        &JsonRenderer::pretty(),
        &args.out_dir,
    ) {
        error!("Error generating invoice: {}", e);
        process::exit(1);
    }

    println!(
        "The Total Invoice Amount is: {}",
        invoice.grand_total_display()
    );
}

/// Logs go to stderr, filtered by `RUST_LOG` (default `info`).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
