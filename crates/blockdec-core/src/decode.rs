use serde::{Deserialize, Serialize};

use crate::model::DecodedPrefixes;

/// Hex characters consumed per hash: 8 bytes at 2 characters each.
pub const FULL_PREFIX_HEX_CHARS: usize = 16;

/// Stable, machine-readable decode failures.
///
/// `NonHexDigit` maps the underlying hex-parse failure; `InputTooShort` is a
/// strict length check so a short hash fails loudly instead of yielding a
/// silently smaller integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "code")]
pub enum DecodeError {
    NonHexDigit { ch: char, index: usize },
    InputTooShort { len: usize },
}

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DecodeError::NonHexDigit { ch, index } => {
                write!(f, "invalid hex digit {ch:?} at index {index}")
            }
            DecodeError::InputTooShort { len } => {
                write!(
                    f,
                    "hash has {len} hex characters, need at least {FULL_PREFIX_HEX_CHARS}"
                )
            }
        }
    }
}

impl std::error::Error for DecodeError {}

/// Decode the leading 3-, 4-, and 8-byte prefixes of a hex hash as
/// big-endian unsigned integers.
///
/// Only the first [`FULL_PREFIX_HEX_CHARS`] characters are inspected;
/// anything after them may be arbitrary. Upper- and lowercase digits are
/// accepted. Pure and deterministic.
pub fn decode(h: &str) -> Result<DecodedPrefixes, DecodeError> {
    let bytes = h.as_bytes();
    if bytes.len() < FULL_PREFIX_HEX_CHARS {
        return Err(DecodeError::InputTooShort { len: bytes.len() });
    }

    let mut raw = [0u8; 8];
    hex::decode_to_slice(&bytes[..FULL_PREFIX_HEX_CHARS], &mut raw).map_err(|err| match err {
        hex::FromHexError::InvalidHexCharacter { c, index } => {
            DecodeError::NonHexDigit { ch: c, index }
        }
        // The slice is always exactly 16 bytes; the length variants cannot
        // occur here.
        hex::FromHexError::OddLength | hex::FromHexError::InvalidStringLength => {
            DecodeError::InputTooShort { len: bytes.len() }
        }
    })?;

    let first8 = u64::from_be_bytes(raw);

    // Narrower prefixes are truncations of the same bytes, so derive them by
    // shifting; the nesting invariant then holds by construction.
    Ok(DecodedPrefixes {
        first3: (first8 >> 40) as u32,
        first4: (first8 >> 32) as u32,
        first8,
    })
}
