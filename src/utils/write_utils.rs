//! Output writing utilities
//!
//! Commands print JSON to stdout, or to a file when one is given.

use std::fs::File;
use std::io::{self, BufWriter, Write};

use log::info;
use serde::Serialize;

use crate::errors::GeoResult;

/// Write `value` as pretty JSON to `output`, or stdout when `None`
pub fn write_json<T: Serialize + ?Sized>(value: &T, output: Option<&str>) -> GeoResult<()> {
    match output {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            write_json_to(&mut writer, value)?;
            info!("Wrote output to {}", path);
        }
        None => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            write_json_to(&mut lock, value)?;
        }
    }
    Ok(())
}

/// Write `value` as pretty JSON followed by a newline
pub fn write_json_to<W: Write, T: Serialize + ?Sized>(writer: &mut W, value: &T) -> GeoResult<()> {
    serde_json::to_writer_pretty(&mut *writer, value)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
