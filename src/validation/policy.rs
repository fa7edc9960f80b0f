use super::{ValidationError, Validator};
use crate::entity::kinds::POLICY_TYPES;
use crate::entity::{Policy, PolicyStatus};
use serde_json::Value;

/// A policy create payload that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct PolicyCreate {
    pub policy_number: String,
    pub customer_id: String,
    pub policy_type: String,
    pub start_date: String,
    pub end_date: String,
    pub premium: f64,
}

impl PolicyCreate {
    /// New policies always start out pending.
    #[must_use]
    pub fn into_record(self, id: String) -> Policy {
        Policy {
            id,
            policy_number: self.policy_number,
            customer_id: self.customer_id,
            policy_type: self.policy_type,
            start_date: self.start_date,
            end_date: self.end_date,
            premium: self.premium,
            status: PolicyStatus::Pending,
        }
    }
}

pub fn validate_policy(body: &Value) -> Result<PolicyCreate, ValidationError> {
    let mut v = Validator::new(body);
    let policy_number = v.min_len("policyNumber", 3, "Policy number must be at least 3 characters");
    let customer_id = v.min_len("customerId", 1, "Customer is required");
    let policy_type = v.one_of(
        "policyType",
        &POLICY_TYPES,
        "Policy type is required",
        "Invalid policy type",
    );
    let start = v.date("startDate", "Invalid start date");
    let end = v.date("endDate", "Invalid end date");
    let premium = v.amount(
        "premium",
        "Premium is required",
        "Premium must be a number",
        "Premium must be a positive number",
    );

    // Date order is only meaningful once every field is individually valid.
    if v.is_clean() {
        if let (Some((_, start_at)), Some((_, end_at))) = (&start, &end) {
            if end_at <= start_at {
                v.reject("End date must be after start date");
            }
        }
    }

    let input = match (policy_number, customer_id, policy_type, start, end, premium) {
        (
            Some(policy_number),
            Some(customer_id),
            Some(policy_type),
            Some((start_date, _)),
            Some((end_date, _)),
            Some(premium),
        ) => Some(PolicyCreate {
            policy_number,
            customer_id,
            policy_type,
            start_date,
            end_date,
            premium,
        }),
        _ => None,
    };
    v.finish(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body(start: &str, end: &str) -> Value {
        json!({
            "policyNumber": "AUTO-100",
            "customerId": "cust_1",
            "policyType": "Auto",
            "startDate": start,
            "endDate": end,
            "premium": "1200"
        })
    }

    #[test]
    fn test_valid_policy_is_pending() {
        let input = validate_policy(&body("2024-01-01", "2025-01-01")).unwrap();
        assert!((input.premium - 1200.0).abs() < f64::EPSILON);
        let record = input.into_record("pol_x".to_string());
        assert_eq!(record.status, PolicyStatus::Pending);
        assert_eq!(record.start_date, "2024-01-01");
    }

    #[test]
    fn test_equal_dates_rejected() {
        let err = validate_policy(&body("2024-01-01", "2024-01-01")).unwrap_err();
        assert_eq!(err.to_string(), "End date must be after start date");
    }

    #[test]
    fn test_date_order_skipped_when_other_fields_fail() {
        let mut payload = body("2024-06-01", "2024-01-01");
        payload["policyType"] = json!("Boat");
        let err = validate_policy(&payload).unwrap_err();
        assert_eq!(err.to_string(), "Invalid policy type");
    }

    #[test]
    fn test_missing_type_and_bad_premium() {
        let err = validate_policy(&json!({
            "policyNumber": "P1",
            "customerId": "",
            "startDate": "soon",
            "endDate": "2024-01-01",
            "premium": "lots"
        }))
        .unwrap_err();
        assert_eq!(
            err.messages(),
            vec![
                "Policy number must be at least 3 characters",
                "Customer is required",
                "Policy type is required",
                "Invalid start date",
                "Premium must be a number"
            ]
        );
    }
}
