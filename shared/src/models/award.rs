//! Award Records

use serde::{Deserialize, Serialize};

/// A distinction the restaurant has received
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Award {
    pub title: String,
    /// Who awarded it and when, e.g. "Foodie Magazine, 2023"
    pub citation: String,
}

impl Award {
    pub fn new(title: &str, citation: &str) -> Self {
        Self {
            title: title.to_string(),
            citation: citation.to_string(),
        }
    }
}
