use thiserror::Error;

/// Errors that can occur during a root-finding solve.
///
/// Precondition violations (`InvalidMethod`, `MissingSecondPoint`,
/// `NoSignChange`, `DegenerateSecant`, `ZeroDerivative`) mean the inputs must
/// change; `MaxIterationsExceeded` means the budget or method should. A
/// failed solve returns no partial state: the trace accumulated before the
/// failure is discarded.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("unrecognized method `{name}`")]
    InvalidMethod { name: String },

    #[error("method `{method}` requires a second point `b`")]
    MissingSecondPoint { method: &'static str },

    #[error("no sign change over [{a}, {b}]: f(a) = {f_a}, f(b) = {f_b}")]
    NoSignChange { a: f64, b: f64, f_a: f64, f_b: f64 },

    #[error("secant step is degenerate: f({x0}) = f({x1}) = {value}")]
    DegenerateSecant { x0: f64, x1: f64, value: f64 },

    #[error("derivative is zero at x = {x}")]
    ZeroDerivative { x: f64 },

    #[error("no convergence within {max_iters} iterations")]
    MaxIterationsExceeded { max_iters: usize },
}
