//! `blockdec-core` holds the deterministic pieces of the block-hash prefix
//! decoder:
//! - the embedded hash list and the `DecodedPrefixes` record
//! - the prefix decoder itself
//! - plain-text report rendering
//!
//! This crate intentionally contains **no** I/O. Printing and process exit
//! codes belong to `blockdec-cli`.

pub mod model;
pub mod decode;
pub mod render;
