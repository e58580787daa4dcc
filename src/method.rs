use crate::{equation::Equation, error::Error};

/// How Newton-Raphson obtains f'(x).
#[derive(Clone, Copy, Default)]
pub enum Derivative<'a> {
    /// Caller-supplied analytic derivative.
    Analytic(&'a dyn Equation),

    /// Per-iteration forward difference, (f(x + tol) − f(x)) / tol.
    ///
    /// The step size is the convergence tolerance itself, not an independent
    /// knob; see [`crate::newton`] for the implications.
    #[default]
    ForwardDifference,
}

/// A root-finding method together with its starting data.
///
/// Each variant carries only the parameters its solver needs, so no method
/// can be invoked with the wrong shape of seed data.
#[derive(Clone, Copy)]
pub enum Method<'a> {
    /// Bisection over the bracket `[a, b]`.
    Bisection { a: f64, b: f64 },

    /// Secant iteration from the two seed points `a` and `b`.
    Secant { a: f64, b: f64 },

    /// Newton-Raphson iteration from the seed point `a`.
    NewtonRaphson { a: f64, derivative: Derivative<'a> },
}

impl<'a> Method<'a> {
    /// Parses a method from its wire name and seed data.
    ///
    /// Recognized names are exactly `"bissecao"`, `"secante"`, and
    /// `"newton_raphson"`; matching is case-sensitive. The `derivative` is
    /// used only by Newton-Raphson and ignored by the other methods.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMethod`] for an unrecognized name, or
    /// [`Error::MissingSecondPoint`] if `b` is absent for a two-point method.
    pub fn from_name(
        name: &str,
        a: f64,
        b: Option<f64>,
        derivative: Derivative<'a>,
    ) -> Result<Self, Error> {
        match name {
            "bissecao" => {
                let b = b.ok_or(Error::MissingSecondPoint { method: "bissecao" })?;
                Ok(Self::Bisection { a, b })
            }
            "secante" => {
                let b = b.ok_or(Error::MissingSecondPoint { method: "secante" })?;
                Ok(Self::Secant { a, b })
            }
            "newton_raphson" => Ok(Self::NewtonRaphson { a, derivative }),
            _ => Err(Error::InvalidMethod {
                name: name.to_owned(),
            }),
        }
    }

    /// Returns the method's wire name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bisection { .. } => "bissecao",
            Self::Secant { .. } => "secante",
            Self::NewtonRaphson { .. } => "newton_raphson",
        }
    }
}
