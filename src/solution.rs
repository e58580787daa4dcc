use crate::trace::Trace;

/// The result of a successful root-finding solve.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Best estimate of the root.
    pub root: f64,

    /// Intermediate approximations, one per completed iteration.
    pub trace: Trace,
}

impl Solution {
    pub(crate) fn new(root: f64, trace: Trace) -> Self {
        Self { root, trace }
    }
}
