//! Bisection: bracket-based root finding with guaranteed convergence.
//!
//! # Algorithm
//!
//! Bisection requires a bracket `[a, b]` over which f changes sign (Bolzano).
//! Each iteration evaluates f at the midpoint and keeps whichever half still
//! brackets a sign change, halving the interval width every step. After n
//! iterations the error is bounded by the initial half-width divided by 2ⁿ,
//! so convergence is guaranteed whenever the precondition holds.
//!
//! # Limitations
//!
//! - Requires endpoints with strictly opposite signs; same-sign endpoints
//!   fail with [`Error::NoSignChange`].
//! - Linear convergence; the derivative-based methods are much faster near a
//!   simple root.

use log::{debug, trace};

use crate::{Config, Equation, Error, Solution, Trace};

/// Finds a root of the equation by bisection over the bracket `[a, b]`.
///
/// A reversed bracket (`a > b`) is normalized before iterating. If either
/// endpoint is already an exact root it is returned immediately with a
/// single-entry trace and no iteration. Otherwise the solver iterates until
/// the bracket half-width is at most `config.tol()`, returning the final
/// midpoint.
///
/// # Errors
///
/// Returns [`Error::NoSignChange`] if `f(a)` and `f(b)` have the same sign,
/// or [`Error::MaxIterationsExceeded`] if the bracket is still wider than
/// the tolerance after `config.max_iters()` iterations.
pub fn solve<F>(f: &F, a: f64, b: f64, config: &Config) -> Result<Solution, Error>
where
    F: Equation + ?Sized,
{
    let f_a = f.eval(a);
    let f_b = f.eval(b);

    if f_a == 0.0 {
        let mut t = Trace::new();
        t.push(a);
        return Ok(Solution::new(a, t));
    }
    if f_b == 0.0 {
        let mut t = Trace::new();
        t.push(b);
        return Ok(Solution::new(b, t));
    }

    if f_a * f_b > 0.0 {
        debug!("bisection: no sign change over [{a}, {b}]");
        return Err(Error::NoSignChange { a, b, f_a, f_b });
    }

    let (mut low, mut high, mut f_low) = if a < b { (a, b, f_a) } else { (b, a, f_b) };

    let tol = config.tol();
    let mut trace_log = Trace::new();
    let mut iters = 0;

    while (high - low) / 2.0 > tol && iters < config.max_iters() {
        let mid = 0.5 * (low + high);
        let f_mid = f.eval(mid);
        trace_log.push(mid);
        iters += 1;
        trace!("bisection iter {iters}: bracket [{low}, {high}], f({mid}) = {f_mid}");

        if f_mid == 0.0 {
            debug!("bisection: exact root {mid} after {iters} iterations");
            return Ok(Solution::new(mid, trace_log));
        }

        if f_low * f_mid < 0.0 {
            high = mid;
        } else {
            low = mid;
            f_low = f_mid;
        }
    }

    if (high - low) / 2.0 > tol {
        debug!("bisection: budget of {iters} iterations exhausted");
        return Err(Error::MaxIterationsExceeded {
            max_iters: config.max_iters(),
        });
    }

    let root = 0.5 * (low + high);
    debug!("bisection: converged to {root} after {iters} iterations");
    Ok(Solution::new(root, trace_log))
}
