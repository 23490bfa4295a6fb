use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque board layer token.
///
/// The generators never interpret it; it is handed to the sink alongside
/// every primitive so the host can resolve it to its own layer id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Layer(String);

impl Layer {
    /// Creates a layer token from a host layer name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the layer name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl Default for Layer {
    fn default() -> Self {
        Self::new("F.Cu")
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Layer {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_front_copper() {
        assert_eq!(Layer::default().name(), "F.Cu");
    }

    #[test]
    fn name_is_passed_through() {
        let layer = Layer::from("In2.Cu");
        assert_eq!(layer.to_string(), "In2.Cu");
    }
}
