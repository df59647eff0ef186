// crates/core/src/normalizer.rs
use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

/// A pure, total transform applied to a line before it is counted.
///
/// Implementations must not hold mutable state: the same normalizer is
/// shared by every worker thread during a concurrent count.
pub trait Normalizer: Send + Sync {
    /// Transform `line`. Return `Cow::Borrowed` when nothing changes.
    fn normalize<'a>(&self, line: &'a str) -> Cow<'a, str>;

    /// Short label used in debug output.
    fn name(&self) -> &str {
        "custom"
    }
}

/// Strips leading and trailing Unicode whitespace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrimWhitespace;

impl Normalizer for TrimWhitespace {
    fn normalize<'a>(&self, line: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(line.trim())
    }

    fn name(&self) -> &str {
        "trim"
    }
}

/// Converts a line to Unicode lowercase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Lowercase;

impl Normalizer for Lowercase {
    fn normalize<'a>(&self, line: &'a str) -> Cow<'a, str> {
        // ASCII fast path: nothing to allocate when there is no uppercase letter
        if line.is_ascii() && !line.bytes().any(|b| b.is_ascii_uppercase()) {
            return Cow::Borrowed(line);
        }
        Cow::Owned(line.to_lowercase())
    }

    fn name(&self) -> &str {
        "lowercase"
    }
}

/// Adapts any `Fn(&str) -> String` into a [`Normalizer`].
pub struct FnNormalizer<F> {
    func: F,
}

impl<F> FnNormalizer<F>
where
    F: Fn(&str) -> String + Send + Sync,
{
    pub const fn new(func: F) -> Self {
        Self { func }
    }
}

impl<F> Normalizer for FnNormalizer<F>
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn normalize<'a>(&self, line: &'a str) -> Cow<'a, str> {
        Cow::Owned((self.func)(line))
    }
}

impl<F> fmt::Debug for FnNormalizer<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnNormalizer").finish_non_exhaustive()
    }
}

/// An ordered sequence of normalizers, run first to last.
///
/// The empty chain is the identity. The chain is itself a [`Normalizer`],
/// so chains can be nested.
#[derive(Default)]
pub struct NormalizerChain {
    steps: Vec<Box<dyn Normalizer>>,
}

impl NormalizerChain {
    /// Creates an empty (identity) chain.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `step` to the end of the chain.
    pub fn push<N: Normalizer + 'static>(&mut self, step: N) {
        self.steps.push(Box::new(step));
    }

    /// Appends a closure to the end of the chain.
    pub fn push_fn<F>(&mut self, func: F)
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.push(FnNormalizer::new(func));
    }

    /// Builder-style [`push`](Self::push).
    #[must_use]
    pub fn with<N: Normalizer + 'static>(mut self, step: N) -> Self {
        self.push(step);
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Runs every step over `line` in insertion order.
    #[must_use]
    pub fn apply<'a>(&self, line: &'a str) -> Cow<'a, str> {
        let mut current = Cow::Borrowed(line);
        for step in &self.steps {
            current = match current {
                Cow::Borrowed(s) => step.normalize(s),
                Cow::Owned(s) => {
                    let next = step.normalize(&s);
                    // Only a borrow of the whole input means the step left it alone
                    let unchanged = matches!(
                        &next,
                        Cow::Borrowed(out) if out.as_ptr() == s.as_ptr() && out.len() == s.len()
                    );
                    if unchanged {
                        drop(next);
                        Cow::Owned(s)
                    } else {
                        Cow::Owned(next.into_owned())
                    }
                }
            };
        }
        current
    }
}

impl Normalizer for NormalizerChain {
    fn normalize<'a>(&self, line: &'a str) -> Cow<'a, str> {
        self.apply(line)
    }

    fn name(&self) -> &str {
        "chain"
    }
}

impl fmt::Debug for NormalizerChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.steps.iter().map(|s| s.name()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_empty_chain_is_identity() {
        let chain = NormalizerChain::new();
        assert!(chain.is_empty());
        assert_eq!(chain.apply("  Mixed Case  "), "  Mixed Case  ");
        assert!(matches!(chain.apply("abc"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_trim_then_lowercase() {
        let chain = NormalizerChain::new().with(TrimWhitespace).with(Lowercase);
        assert_eq!(chain.len(), 2);
        assert_eq!(chain.apply("\t Hello World \r"), "hello world");
    }

    #[test]
    fn test_lowercase_borrows_when_unchanged() {
        assert!(matches!(Lowercase.normalize("already lower"), Cow::Borrowed(_)));
        assert!(matches!(Lowercase.normalize("Upper"), Cow::Owned(_)));
        assert_eq!(Lowercase.normalize("ÄÖÜ"), "äöü");
    }

    #[test]
    fn test_order_is_preserved() {
        // Non-commutative steps: append then uppercase vs uppercase then append
        let mut a = NormalizerChain::new();
        a.push_fn(|s| s.to_string() + "x");
        a.push_fn(|s| s.to_uppercase());

        let mut b = NormalizerChain::new();
        b.push_fn(|s| s.to_uppercase());
        b.push_fn(|s| s.to_string() + "x");

        assert_eq!(a.apply("a"), "AX");
        assert_eq!(b.apply("a"), "Ax");
    }

    #[test]
    fn test_trim_after_owned_step() {
        let mut chain = NormalizerChain::new();
        chain.push_fn(|s| s.replace('-', " "));
        chain.push(TrimWhitespace);
        assert_eq!(chain.apply("-a-b-"), "a b");
    }

    struct Constant;

    impl Normalizer for Constant {
        fn normalize<'a>(&self, _line: &'a str) -> Cow<'a, str> {
            Cow::Borrowed("zz")
        }
    }

    #[test]
    fn test_static_borrow_after_owned_step() {
        let mut chain = NormalizerChain::new();
        chain.push_fn(|s| s.to_string());
        chain.push(Constant);
        assert_eq!(chain.apply("ab"), "zz");
    }

    #[test]
    fn test_nested_chain() {
        let inner = NormalizerChain::new().with(TrimWhitespace);
        let outer = NormalizerChain::new().with(inner).with(Lowercase);
        assert_eq!(outer.apply("  ABC "), "abc");
    }

    #[test]
    fn test_debug_lists_step_names() {
        let chain = NormalizerChain::new().with(TrimWhitespace).with(Lowercase);
        assert_eq!(alloc::format!("{chain:?}"), r#"["trim", "lowercase"]"#);
    }
}
