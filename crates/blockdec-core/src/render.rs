use crate::model::DecodedPrefixes;

/// Render one output block for a hash (no trailing newline).
///
/// The caller is responsible for the blank-line separator between blocks.
pub fn block_report(hash: &str, prefixes: &DecodedPrefixes) -> String {
    format!(
        "Hash: {hash}\n  First 3 bytes: {}\n  First 4 bytes: {}\n  First 8 bytes: {}",
        prefixes.first3, prefixes.first4, prefixes.first8
    )
}
