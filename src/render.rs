//! Plain-text rendering of factor mappings

use crate::core::FactorMapping;
use std::io::Write;

/// Write a mapping as one `key: [v1, v2]` line per member, in ascending
/// key order
pub fn write_mapping<W: Write>(writer: &mut W, mapping: &FactorMapping) -> std::io::Result<()> {
    for (number, factors) in mapping {
        let rendered: Vec<String> = factors.iter().map(|f| f.to_string()).collect();
        writeln!(writer, "{}: [{}]", number, rendered.join(", "))?;
    }
    Ok(())
}
