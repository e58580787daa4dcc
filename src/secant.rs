//! Secant: two-point, derivative-free root finding.
//!
//! # Algorithm
//!
//! From two seed points the method draws the secant line through their
//! function values and takes its x-intercept as the next approximation,
//! then slides the two-point window forward. Near a simple root convergence
//! is superlinear (order ≈ 1.618) without needing a derivative or a
//! sign-changing bracket.
//!
//! # Limitations
//!
//! - No global convergence guarantee; a diverging iteration is caught only
//!   by the iteration budget.
//! - Two points with equal function values make the secant horizontal and
//!   the update undefined ([`Error::DegenerateSecant`]).

use log::{debug, trace};

use crate::{Config, Equation, Error, Solution, Trace};

/// Finds a root of the equation by secant iteration from seeds `a` and `b`.
///
/// An iterate `c` is accepted as the root when `|c - b| < tol` or
/// `|f(c)| < tol`; either criterion alone suffices.
///
/// # Errors
///
/// Returns [`Error::DegenerateSecant`] if the current window has
/// `f(a) = f(b)`, or [`Error::MaxIterationsExceeded`] if neither convergence
/// criterion is met within `config.max_iters()` iterations.
pub fn solve<F>(f: &F, a: f64, b: f64, config: &Config) -> Result<Solution, Error>
where
    F: Equation + ?Sized,
{
    let tol = config.tol();
    let mut trace_log = Trace::new();

    let (mut x0, mut x1) = (a, b);
    let mut f_x0 = f.eval(x0);
    let mut f_x1 = f.eval(x1);

    for iter in 1..=config.max_iters() {
        if f_x0 == f_x1 {
            debug!("secant: degenerate window at ({x0}, {x1})");
            return Err(Error::DegenerateSecant {
                x0,
                x1,
                value: f_x0,
            });
        }

        let c = x1 - f_x1 * (x1 - x0) / (f_x1 - f_x0);
        let f_c = f.eval(c);
        trace_log.push(c);
        trace!("secant iter {iter}: window ({x0}, {x1}), f({c}) = {f_c}");

        if (c - x1).abs() < tol || f_c.abs() < tol {
            debug!("secant: converged to {c} after {iter} iterations");
            return Ok(Solution::new(c, trace_log));
        }

        x0 = x1;
        f_x0 = f_x1;
        x1 = c;
        f_x1 = f_c;
    }

    debug!("secant: budget of {} iterations exhausted", config.max_iters());
    Err(Error::MaxIterationsExceeded {
        max_iters: config.max_iters(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn cubic(x: f64) -> f64 {
        x.powi(3) - 9.0 * x + 5.0
    }

    #[test]
    fn finds_first_root_of_cubic() {
        let solution = solve(&cubic, 0.0, 2.0, &Config::default()).expect("should converge");

        assert_relative_eq!(solution.root, 0.5769, epsilon = 1e-3);
        assert!(cubic(solution.root).abs() < 1e-4);
        assert!(solution.trace.len() <= Config::default().max_iters());
    }

    #[test]
    fn converges_without_a_sign_change() {
        // Both seeds sit left of the root of x² - 4, where f < 0.
        let solution =
            solve(&|x: f64| x * x - 4.0, 0.0, 1.0, &Config::default()).expect("should converge");

        assert_relative_eq!(solution.root, 2.0, epsilon = 1e-4);
    }

    #[test]
    fn errors_on_equal_seed_values() {
        // Symmetric function: f(-1) = f(1), so the first secant is horizontal.
        let result = solve(&|x: f64| x * x, -1.0, 1.0, &Config::default());
        assert!(matches!(result, Err(Error::DegenerateSecant { .. })));
    }

    #[test]
    fn detects_degeneracy_mid_iteration() {
        // x² + 1 has no real root. From seeds 0 and 1 the first update lands
        // on c = -1 with f(-1) = f(1), degenerating the next window.
        let result = solve(&|x: f64| x * x + 1.0, 0.0, 1.0, &Config::default());
        assert!(matches!(result, Err(Error::DegenerateSecant { .. })));
    }

    #[test]
    fn errors_when_budget_exhausted() {
        let config = Config::new(1e-12, 2).expect("valid config");
        let result = solve(&cubic, 0.0, 2.0, &config);

        assert!(matches!(
            result,
            Err(Error::MaxIterationsExceeded { max_iters: 2 })
        ));
    }
}
