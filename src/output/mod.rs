//! Output formatting for CLI results

use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::error::Result;

pub mod display;
pub mod json;
pub mod table;

pub use json::Metadata;

/// Trait for types that can be formatted for output
pub trait Formattable {
    /// Format the data according to the specified format. `meta` is only
    /// rendered by formats that carry metadata.
    fn format(&self, format: OutputFormat, meta: Metadata) -> Result<String>;
}

impl<T: Tabled + Serialize> Formattable for Vec<T> {
    fn format(&self, format: OutputFormat, meta: Metadata) -> Result<String> {
        match format {
            OutputFormat::Table => Ok(table::format_table(self)),
            OutputFormat::Json => Ok(json::format_json(self, meta)?),
        }
    }
}

/// Format and print data to stdout
pub fn print<T: Formattable>(data: &T, format: OutputFormat, meta: Metadata) -> Result<()> {
    let output = data.format(format, meta)?;
    println!("{}", output);
    Ok(())
}
