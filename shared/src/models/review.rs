//! Review Records

use serde::{Deserialize, Serialize};

/// A published guest or press review
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub quote: String,
    pub source: String,
}

impl Review {
    pub fn new(quote: &str, source: &str) -> Self {
        Self {
            quote: quote.to_string(),
            source: source.to_string(),
        }
    }
}
