use serde::{Deserialize, Serialize};

/// A named bucket of a distribution (a product line, a video type).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub magnitude: f64,
}

impl Category {
    pub fn new(name: impl Into<String>, magnitude: f64) -> Self {
        Self {
            name: name.into(),
            magnitude,
        }
    }
}
