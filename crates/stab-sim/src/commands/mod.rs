#![allow(missing_docs)]

use std::error::Error;

use stab_pcm::ClassicalCode;

pub mod build;
pub mod crossings;
pub mod pcm;
pub mod sweep;
pub mod version;

/// Parses a `ROWS,COLS` scale argument.
pub(crate) fn parse_scale(text: &str) -> Result<(usize, usize), String> {
    let (rows, cols) = text
        .split_once(|c: char| c == ',' || c == 'x')
        .ok_or_else(|| format!("expected ROWS,COLS, got `{text}`"))?;
    let rows = rows.trim().parse().map_err(|err| format!("rows: {err}"))?;
    let cols = cols.trim().parse().map_err(|err| format!("cols: {err}"))?;
    Ok((rows, cols))
}

pub(crate) fn parse_code(text: &str) -> Result<ClassicalCode, Box<dyn Error>> {
    Ok(text.parse::<ClassicalCode>()?)
}
