use thiserror::Error;

/// Configuration shared by all root-finding solvers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    tol: f64,
    max_iters: usize,
}

/// Errors that can occur when validating a solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tol must be finite and positive")]
    Tol,

    #[error("max_iters must be at least 1")]
    MaxIters,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(1e-6, 1000).unwrap()
    }
}

impl Config {
    /// Creates a new config with a validated tolerance and iteration budget.
    ///
    /// # Errors
    ///
    /// Returns an error if `tol` is non-finite or not strictly positive, or
    /// if `max_iters` is zero.
    pub fn new(tol: f64, max_iters: usize) -> Result<Self, ConfigError> {
        if !tol.is_finite() || tol <= 0.0 {
            return Err(ConfigError::Tol);
        }
        if max_iters == 0 {
            return Err(ConfigError::MaxIters);
        }

        Ok(Self { tol, max_iters })
    }

    /// Returns the convergence tolerance.
    ///
    /// Newton-Raphson without an analytic derivative also uses this value as
    /// the forward-difference step; see [`crate::newton`].
    #[must_use]
    pub fn tol(&self) -> f64 {
        self.tol
    }

    /// Returns the maximum number of iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_documented_values() {
        let config = Config::default();
        assert_eq!(config.tol(), 1e-6);
        assert_eq!(config.max_iters(), 1000);
    }

    #[test]
    fn rejects_bad_tolerances() {
        assert!(matches!(Config::new(0.0, 100), Err(ConfigError::Tol)));
        assert!(matches!(Config::new(-1e-6, 100), Err(ConfigError::Tol)));
        assert!(matches!(Config::new(f64::NAN, 100), Err(ConfigError::Tol)));
        assert!(matches!(
            Config::new(f64::INFINITY, 100),
            Err(ConfigError::Tol)
        ));
    }

    #[test]
    fn rejects_zero_iteration_budget() {
        assert!(matches!(Config::new(1e-6, 0), Err(ConfigError::MaxIters)));
    }
}
