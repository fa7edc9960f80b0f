//! Create-payload validation for customers, policies, and claims.
//!
//! Payloads are checked field by field against the raw JSON body so that every
//! violated rule is reported, not just the first one. The collected messages
//! are joined into one string with `", "`.

mod claim;
mod customer;
mod policy;
mod rules;

pub use claim::{validate_claim, ClaimCreate};
pub use customer::{validate_customer, CustomerCreate};
pub use policy::{validate_policy, PolicyCreate};
pub use rules::{parse_date, Validator};

use thiserror::Error;

/// All rule violations of one payload, already joined for display.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct ValidationError(pub String);

impl ValidationError {
    #[must_use]
    pub fn messages(&self) -> Vec<&str> {
        self.0.split(", ").collect()
    }
}
