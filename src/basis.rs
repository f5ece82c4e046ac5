//! Basis functions of a scalar variable.
//!
//! These are the building blocks of linear basis-function models: fixed,
//! non-linear functions of the input whose outputs are weighted by adaptive
//! parameters. Each [`Function`] can produce a numerical approximation of
//! its derivative.

use crate::error::{Error, Result};
use log::debug;
use std::{fmt, str::FromStr, sync::Arc};

/// Step used by [`Function::derivative_default`].
pub const DEFAULT_DERIVATIVE_TOL: f64 = 0.001;

/// Shape of a sigmoid basis function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SigmoidKind {
    /// Logistic sigmoid, ranging over `(0, 1)`.
    #[default]
    Logistic,
    /// Hyperbolic-tangent sigmoid, ranging over `(-1, 1)`.
    Tanh,
}

impl FromStr for SigmoidKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<SigmoidKind> {
        match s {
            "logistic" => Ok(SigmoidKind::Logistic),
            "tanh" => Ok(SigmoidKind::Tanh),
            other => Err(Error::UnknownSigmoid(other.to_string())),
        }
    }
}

/// Parameters for building a basis function by name.
///
/// Each kind of function reads only the parameters it needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Params {
    /// Degree of a polynomial.
    pub degree: i32,
    /// Location in input space (gaussian and sigmoid).
    pub mu: f64,
    /// Spatial scale (gaussian and sigmoid).
    pub sigma: f64,
    /// Sigmoid shape.
    pub sigmoid: SigmoidKind,
}

impl Default for Params {
    fn default() -> Params {
        Params {
            degree: 1,
            mu: 0.0,
            sigma: 1.0,
            sigmoid: SigmoidKind::Logistic,
        }
    }
}

/// A named scalar function.
///
/// Cloning is cheap: the function itself is shared.
#[derive(Clone)]
pub struct Function {
    name: String,
    func: Arc<dyn Fn(f64) -> f64 + Send + Sync>,
}

impl Function {
    /// Creates a function from a closure.
    pub fn custom<F>(name: impl Into<String>, func: F) -> Function
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        Function {
            name: name.into(),
            func: Arc::new(func),
        }
    }

    /// Builds a basis function from the name of its kind.
    ///
    /// # Parameters
    ///
    /// - `name`: one of `"bias"`, `"identity"`, `"polynomial"`,
    ///   `"gaussian"` or `"sigmoid"`.
    /// - `params`: parameters for the function.
    ///
    /// # Returns
    ///
    /// - `Ok(function)` for a known kind.
    /// - `Err(Error::UnknownFunction)` otherwise.
    pub fn from_name(name: &str, params: Params) -> Result<Function> {
        debug!("building {} basis function with {:?}", name, params);
        match name {
            "bias" => Ok(Function::bias()),
            "identity" => Ok(Function::identity()),
            "polynomial" => Ok(Function::polynomial(params.degree)),
            "gaussian" => Ok(Function::gaussian(params.mu, params.sigma)),
            "sigmoid" => Ok(Function::sigmoid(params.mu, params.sigma, params.sigmoid)),
            other => Err(Error::UnknownFunction(other.to_string())),
        }
    }

    /// Returns 1 regardless of input.
    pub fn bias() -> Function {
        Function::custom("bias", |_| 1.0)
    }

    pub fn identity() -> Function {
        Function::custom("identity", |x| x)
    }

    /// `x^degree`.
    pub fn polynomial(degree: i32) -> Function {
        Function::custom("polynomial", move |x| x.powi(degree))
    }

    /// Unnormalized gaussian bump centered on `mu` with width `sigma`.
    pub fn gaussian(mu: f64, sigma: f64) -> Function {
        Function::custom("gaussian", move |x| {
            (-(x - mu).powi(2) / (2.0 * sigma.powi(2))).exp()
        })
    }

    /// Sigmoid located at `mu` with scale `sigma`.
    pub fn sigmoid(mu: f64, sigma: f64, kind: SigmoidKind) -> Function {
        let logistic = move |x: f64| 1.0 / (1.0 + (-(x - mu) / sigma).exp());
        match kind {
            SigmoidKind::Logistic => Function::custom("sigmoid", logistic),
            SigmoidKind::Tanh => Function::custom("sigmoid", move |x| 2.0 * logistic(x) - 1.0),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Evaluates the function at `x`.
    pub fn call(&self, x: f64) -> f64 {
        (self.func)(x)
    }

    /// Returns the numerical derivative of this function.
    ///
    /// The derivative is a central finite difference:
    /// `(f(x + tol) - f(x - tol)) / (2 tol)`.
    pub fn derivative(&self, tol: f64) -> Function {
        let f = Arc::clone(&self.func);
        Function {
            name: format!("{} derivative", self.name),
            func: Arc::new(move |x| (f(x + tol) - f(x - tol)) / (2.0 * tol)),
        }
    }

    /// [`Function::derivative`] with [`DEFAULT_DERIVATIVE_TOL`].
    pub fn derivative_default(&self) -> Function {
        self.derivative(DEFAULT_DERIVATIVE_TOL)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function").field("name", &self.name).finish()
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} function", title_case(&self.name))
    }
}

/// Capitalizes the first letter of every word and lowercases the rest.
///
/// A word is a run of alphabetic characters, so `"my_func"` becomes
/// `"My_Func"` and `"myFunc"` becomes `"Myfunc"`.
fn title_case(s: &str) -> String {
    let mut title = String::with_capacity(s.len());
    let mut in_word = false;
    for c in s.chars() {
        if in_word {
            title.extend(c.to_lowercase());
        } else {
            title.extend(c.to_uppercase());
        }
        in_word = c.is_alphabetic();
    }
    title
}
