//! Stock code value object.
//!
//! An exchange ticker such as `600036.SH`: six digits, a dot and the
//! exchange suffix. Stock codes are the natural key of a bank.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::constants::{EXCHANGE_BEIJING, EXCHANGE_SHANGHAI, EXCHANGE_SHENZHEN};
use crate::error::{DomainError, DomainResult};

static STOCK_CODE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{6}\.(SH|SZ|BJ)$").expect("valid stock code regex"));

/// Validated exchange stock code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StockCode(String);

impl StockCode {
    /// Parse a stock code, normalizing the exchange suffix to upper case.
    ///
    /// # Errors
    /// Returns a validation error if the code is not `NNNNNN.SH`, `NNNNNN.SZ`
    /// or `NNNNNN.BJ`.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        let normalized = raw.trim().to_ascii_uppercase();
        if !STOCK_CODE_PATTERN.is_match(&normalized) {
            return Err(DomainError::validation(format!(
                "Invalid stock code '{}': expected six digits followed by .{}, .{} or .{}",
                raw, EXCHANGE_SHANGHAI, EXCHANGE_SHENZHEN, EXCHANGE_BEIJING
            )));
        }
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for StockCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for StockCode {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        StockCode::parse(&value)
    }
}

impl From<StockCode> for String {
    fn from(code: StockCode) -> Self {
        code.0
    }
}
