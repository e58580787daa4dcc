/// Ordered log of the intermediate approximations produced during one solve.
///
/// One entry is appended per completed iteration, in chronological order.
/// The trace is append-only: the only mutator is crate-private, so a trace
/// handed to the caller can never be edited retroactively. It is empty only
/// for degenerate zero-iteration solves, such as a bisection endpoint that
/// is already an exact root.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trace(Vec<f64>);

impl Trace {
    pub(crate) fn new() -> Self {
        Self(Vec::new())
    }

    pub(crate) fn push(&mut self, x: f64) {
        self.0.push(x);
    }

    /// Returns the number of recorded iterations.
    ///
    /// Never exceeds the configured `max_iters`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no iterations were recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the approximations in solve order.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Iterates over the approximations in solve order.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().copied()
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
