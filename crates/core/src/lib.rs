#![no_std]
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]

//! Building blocks for counting distinct lines.
//!
//! This crate has no I/O. It provides the [`NormalizerChain`] applied to every
//! raw line, the [`FrequencyTable`] the lines are counted into, and the
//! [`CountOptions`] toggles that decide how both are configured. Reading
//! streams lives in `occurs_engine`.

extern crate alloc;

pub mod normalizer;
pub mod options;
pub mod table;

pub use normalizer::{FnNormalizer, Lowercase, Normalizer, NormalizerChain, TrimWhitespace};
pub use options::CountOptions;
pub use table::FrequencyTable;
