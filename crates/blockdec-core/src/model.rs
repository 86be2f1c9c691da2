use serde::{Deserialize, Serialize};

/// A hexadecimal hash string (case-insensitive digits).
pub type HashString = String;

/// Block hashes whose leading bytes encode block numbers.
///
/// Order is significant: output blocks must appear in this order.
pub const BLOCK_HASHES: [&str; 3] = [
    "0000006c3a436500b20c0c80f5dae66e1233d84da4ddd5af2987cfdb1562eb9f",
    "0000010214efc2d0f09b4b0bce1f1f5af7df428471031886bff73119c45cdcbc",
    "000002d7a7e5d7bb05b43c21aef385b934c61d3a7605c0829c35defb490a651c",
];

/// The big-endian integer values of a hash's leading 3, 4, and 8 bytes.
///
/// The prefixes are nested truncations of the same byte sequence, so
/// `first3 == first4 >> 8` and `u64::from(first4) == first8 >> 32` always
/// hold for a value produced by [`crate::decode::decode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedPrefixes {
    pub first3: u32,
    pub first4: u32,
    pub first8: u64,
}
