use super::{ValidationError, Validator};
use crate::entity::{Claim, ClaimStatus};
use serde_json::Value;

/// A claim create payload that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ClaimCreate {
    pub claim_number: String,
    pub policy_id: String,
    pub customer_id: String,
    pub date_of_incident: String,
    pub description: String,
    pub amount: f64,
}

impl ClaimCreate {
    /// New claims always start out open.
    #[must_use]
    pub fn into_record(self, id: String) -> Claim {
        Claim {
            id,
            claim_number: self.claim_number,
            policy_id: self.policy_id,
            customer_id: self.customer_id,
            date_of_incident: self.date_of_incident,
            description: self.description,
            amount: self.amount,
            status: ClaimStatus::Open,
        }
    }
}

pub fn validate_claim(body: &Value) -> Result<ClaimCreate, ValidationError> {
    let mut v = Validator::new(body);
    let claim_number = v.min_len("claimNumber", 3, "Claim number must be at least 3 characters");
    let policy_id = v.min_len("policyId", 1, "Policy is required");
    let customer_id = v.min_len("customerId", 1, "Customer is required");
    let incident = v.date("dateOfIncident", "Invalid date of incident");
    let description = v.min_len(
        "description",
        10,
        "Description must be at least 10 characters",
    );
    let amount = v.amount(
        "amount",
        "Claim amount is required",
        "Claim amount must be a number",
        "Claim amount must be a positive number",
    );

    let input = match (claim_number, policy_id, customer_id, incident, description, amount) {
        (
            Some(claim_number),
            Some(policy_id),
            Some(customer_id),
            Some((date_of_incident, _)),
            Some(description),
            Some(amount),
        ) => Some(ClaimCreate {
            claim_number,
            policy_id,
            customer_id,
            date_of_incident,
            description,
            amount,
        }),
        _ => None,
    };
    v.finish(input)
}
