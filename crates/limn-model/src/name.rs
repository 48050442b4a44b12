//! Structural model names and their canonical rendering.

use smallvec::SmallVec;
use std::fmt;

/// Structural name of a model: a base identifier plus the structural
/// parameters the model was built with (time representation, message
/// types, nested model parameters).
///
/// Renders as `base` when there are no parameters, or `base<p1,p2>` when
/// there are. The rendered form is the atomic half of the structural
/// signature contract: two models whose shapes differ must never render
/// to the same string, so authors are expected to supply fully-qualified
/// base names and to thread every shape-determining parameter through
/// `params`.
///
/// # Examples
///
/// ```
/// use limn_model::ModelName;
///
/// let plain = ModelName::new("traffic_light");
/// assert_eq!(plain.to_string(), "traffic_light");
///
/// let parameterized = ModelName::parameterized("generator", ["f64", "pulse"]);
/// assert_eq!(parameterized.to_string(), "generator<f64,pulse>");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ModelName {
    base: String,
    params: SmallVec<[String; 2]>,
}

impl ModelName {
    /// Create a name with no structural parameters.
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            params: SmallVec::new(),
        }
    }

    /// Create a name with structural parameters, in declaration order.
    pub fn parameterized<I, S>(base: impl Into<String>, params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            base: base.into(),
            params: params.into_iter().map(Into::into).collect(),
        }
    }

    /// The base identifier, without parameters.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// The structural parameters, in declaration order.
    pub fn params(&self) -> &[String] {
        &self.params
    }
}

impl fmt::Display for ModelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.base)?;
        if !self.params.is_empty() {
            write!(f, "<{}>", self.params.join(","))?;
        }
        Ok(())
    }
}

impl From<&str> for ModelName {
    fn from(base: &str) -> Self {
        Self::new(base)
    }
}

impl From<String> for ModelName {
    fn from(base: String) -> Self {
        Self::new(base)
    }
}
