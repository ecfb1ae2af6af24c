//! Bank domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{LISTED_BANKS, MAX_BANK_NAME_LENGTH};
use crate::error::{require_text, DomainResult};
use crate::stock_code::StockCode;

/// A listed financial institution tracked by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bank {
    pub id: i32,
    pub bank_name: String,
    /// Exchange ticker, unique across all banks
    pub stock_code: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Bank creation data transfer object
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewBank {
    pub bank_name: String,
    pub stock_code: StockCode,
}

impl NewBank {
    /// Build a validated bank from raw input.
    pub fn new(bank_name: &str, stock_code: &str) -> DomainResult<Self> {
        require_text("Bank name", bank_name, MAX_BANK_NAME_LENGTH)?;
        Ok(Self {
            bank_name: bank_name.trim().to_string(),
            stock_code: StockCode::parse(stock_code)?,
        })
    }

    /// Built-in list of listed banks used to provision a fresh store.
    pub fn listed_banks() -> DomainResult<Vec<NewBank>> {
        LISTED_BANKS
            .iter()
            .map(|(name, code)| NewBank::new(name, code))
            .collect()
    }
}
