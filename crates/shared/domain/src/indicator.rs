//! Financial indicator definitions.
//!
//! An indicator is a named, reusable metric such as revenue or net profit.
//! Reported values reference indicators but never own them.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::constants::{MAX_INDICATOR_CODE_LENGTH, MAX_INDICATOR_NAME_LENGTH};
use crate::error::{require_text, DomainError, DomainResult};

static INDICATOR_CODE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z][A-Z0-9_]*$").expect("valid indicator code regex"));

/// Metric definition used as a dimension for reported values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialIndicator {
    pub id: i32,
    /// Machine-readable stable key, e.g. `REVENUE`
    pub indicator_code: String,
    pub indicator_name: String,
    pub description: Option<String>,
}

/// Indicator creation data transfer object
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewIndicator {
    pub indicator_code: String,
    pub indicator_name: String,
    pub description: Option<String>,
}

impl NewIndicator {
    /// Build a validated indicator definition.
    ///
    /// Codes are upper-cased; a blank description is stored as `None`.
    pub fn new(code: &str, name: &str, description: Option<&str>) -> DomainResult<Self> {
        let indicator_code = code.trim().to_ascii_uppercase();
        require_text("Indicator code", &indicator_code, MAX_INDICATOR_CODE_LENGTH)?;
        if !INDICATOR_CODE_PATTERN.is_match(&indicator_code) {
            return Err(DomainError::validation(format!(
                "Invalid indicator code '{}': use letters, digits and underscores, starting with a letter",
                code
            )));
        }
        require_text("Indicator name", name, MAX_INDICATOR_NAME_LENGTH)?;

        Ok(Self {
            indicator_code,
            indicator_name: name.trim().to_string(),
            description: description
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .map(str::to_string),
        })
    }
}
