use crate::normalizer::{Lowercase, NormalizerChain, TrimWhitespace};

/// Toggles selecting the normalizer chain and the counting path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct CountOptions {
    /// Strip leading/trailing whitespace from each line.
    pub trim_whitespace: bool,
    /// Lowercase each line.
    pub ignore_case: bool,
    /// Drop lines that are empty after normalization.
    pub skip_empty: bool,
    /// Scan all streams at once instead of one after another.
    pub concurrent: bool,
}

impl CountOptions {
    /// Builds the normalizer chain for these options.
    ///
    /// Trimming always runs before lowercasing.
    #[must_use]
    pub fn chain(&self) -> NormalizerChain {
        let mut chain = NormalizerChain::new();
        if self.trim_whitespace {
            chain.push(TrimWhitespace);
        }
        if self.ignore_case {
            chain.push(Lowercase);
        }
        chain
    }
}
