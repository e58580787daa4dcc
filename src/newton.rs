//! Newton-Raphson: one-point, derivative-based root finding.
//!
//! # Algorithm
//!
//! Each iteration follows the tangent line at the current point to its
//! x-intercept: c = x − f(x)/f'(x). With an analytic derivative and a seed
//! close to a simple root, convergence is quadratic.
//!
//! # Derivative fallback
//!
//! When no analytic derivative is supplied
//! ([`Derivative::ForwardDifference`]), f'(x) is approximated per iteration
//! by (f(x + tol) − f(x)) / tol. The perturbation step is the convergence
//! tolerance itself, not an independently tunable value. This coupling is a
//! known sharp edge: tightening `tol` also shrinks the difference step,
//! which degrades the derivative estimate as it approaches the noise floor
//! of f. Supply an analytic derivative when accuracy matters.
//!
//! # Limitations
//!
//! - A zero derivative at any iterate is unrecoverable
//!   ([`Error::ZeroDerivative`]).
//! - No global convergence guarantee; a poor seed can cycle or diverge and
//!   is caught only by the iteration budget.

use log::{debug, trace};

use crate::{Config, Derivative, Equation, Error, Solution, Trace};

/// Finds a root of the equation by Newton-Raphson iteration from seed `a`.
///
/// An iterate `c` is accepted as the root when `|c - a| < tol`, where `a` is
/// the previous iterate.
///
/// # Errors
///
/// Returns [`Error::ZeroDerivative`] if f'(x) evaluates to exactly zero at
/// any iterate, or [`Error::MaxIterationsExceeded`] if the step size never
/// drops below the tolerance within `config.max_iters()` iterations.
pub fn solve<F>(f: &F, a: f64, derivative: Derivative<'_>, config: &Config) -> Result<Solution, Error>
where
    F: Equation + ?Sized,
{
    let tol = config.tol();
    let mut trace_log = Trace::new();
    let mut x = a;

    for iter in 1..=config.max_iters() {
        let f_x = f.eval(x);
        let df_x = match derivative {
            Derivative::Analytic(d) => d.eval(x),
            Derivative::ForwardDifference => (f.eval(x + tol) - f_x) / tol,
        };

        if df_x == 0.0 {
            debug!("newton: zero derivative at x = {x}");
            return Err(Error::ZeroDerivative { x });
        }

        let c = x - f_x / df_x;
        trace_log.push(c);
        trace!("newton iter {iter}: f({x}) = {f_x}, f'({x}) = {df_x}, step to {c}");

        if (c - x).abs() < tol {
            debug!("newton: converged to {c} after {iter} iterations");
            return Ok(Solution::new(c, trace_log));
        }

        x = c;
    }

    debug!("newton: budget of {} iterations exhausted", config.max_iters());
    Err(Error::MaxIterationsExceeded {
        max_iters: config.max_iters(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn shifted_square(x: f64) -> f64 {
        x * x - 2.0
    }

    fn shifted_square_prime(x: f64) -> f64 {
        2.0 * x
    }

    #[test]
    fn converges_quadratically_with_analytic_derivative() {
        let solution = solve(
            &shifted_square,
            1.0,
            Derivative::Analytic(&shifted_square_prime),
            &Config::default(),
        )
        .expect("should converge");

        assert_relative_eq!(solution.root, std::f64::consts::SQRT_2, epsilon = 1e-9);
        // Quadratic convergence from a nearby seed finishes in a handful of steps.
        assert!(solution.trace.len() < 10);
    }

    #[test]
    fn forward_difference_fallback_converges() {
        let solution = solve(
            &shifted_square,
            1.0,
            Derivative::ForwardDifference,
            &Config::default(),
        )
        .expect("should converge");

        assert_relative_eq!(solution.root, std::f64::consts::SQRT_2, epsilon = 1e-5);
    }

    #[test]
    fn errors_on_zero_derivative() {
        let result = solve(
            &|x: f64| x * x,
            0.0,
            Derivative::Analytic(&|x: f64| 2.0 * x),
            &Config::default(),
        );

        assert!(matches!(result, Err(Error::ZeroDerivative { x }) if x == 0.0));
    }

    #[test]
    fn errors_when_budget_exhausted() {
        let config = Config::new(1e-15, 3).expect("valid config");
        let result = solve(
            &shifted_square,
            50.0,
            Derivative::Analytic(&shifted_square_prime),
            &config,
        );

        assert!(matches!(
            result,
            Err(Error::MaxIterationsExceeded { max_iters: 3 })
        ));
    }

    #[test]
    fn trace_records_each_step_in_order() {
        let solution = solve(
            &shifted_square,
            3.0,
            Derivative::Analytic(&shifted_square_prime),
            &Config::default(),
        )
        .expect("should converge");

        // First Newton step from 3: 3 - 7/6.
        assert_relative_eq!(solution.trace.as_slice()[0], 3.0 - 7.0 / 6.0);
        // Steps shrink monotonically toward the root from above.
        let xs = solution.trace.as_slice();
        for pair in xs.windows(2) {
            assert!(pair[1] <= pair[0]);
        }
    }
}
