/// A scalar equation whose root is sought.
///
/// Implementors evaluate f(x) at solver-chosen arguments. The solvers assume
/// the function is deterministic and cheap; they do not guard against an
/// evaluator that hangs or returns different values for the same input.
///
/// Closures automatically implement `Equation`, so `|x| x * x - 2.0` can be
/// passed anywhere an equation is expected.
pub trait Equation {
    /// Evaluates f at `x`.
    fn eval(&self, x: f64) -> f64;
}

/// Blanket implementation for closures.
impl<F> Equation for F
where
    F: Fn(f64) -> f64,
{
    fn eval(&self, x: f64) -> f64 {
        self(x)
    }
}
