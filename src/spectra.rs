//! Plain-text spectra input: one spectrum per line.

use std::path::Path;

use anyhow::{Context, Result, bail};

/// Reads all spectra from a text file.
pub fn read_spectra(path: &Path) -> Result<Vec<Vec<f64>>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read spectra file: {}", path.display()))?;
    parse_spectra(&text).with_context(|| format!("failed to parse spectra: {}", path.display()))
}

/// Parses spectra from text.
///
/// Values are separated by commas and/or whitespace. Blank lines and
/// anything after `#` are ignored.
pub fn parse_spectra(text: &str) -> Result<Vec<Vec<f64>>> {
    let mut spectra = Vec::new();
    for (lineno, line) in text.lines().enumerate() {
        let content = line.split('#').next().unwrap_or_default().trim();
        if content.is_empty() {
            continue;
        }
        let spectrum = content
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|field| !field.is_empty())
            .map(|field| {
                field
                    .parse::<f64>()
                    .with_context(|| format!("line {}: invalid value {field:?}", lineno + 1))
            })
            .collect::<Result<Vec<f64>>>()?;
        spectra.push(spectrum);
    }
    if spectra.is_empty() {
        bail!("no spectra found");
    }
    Ok(spectra)
}
