use crate::entity::Entity;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClaimStatus {
    #[default]
    Open,
    #[serde(rename = "In Progress")]
    InProgress,
    Approved,
    Denied,
    Closed,
}

/// A claim filed against a policy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claim {
    pub id: String,
    pub claim_number: String,
    pub policy_id: String,
    pub customer_id: String,
    pub date_of_incident: String,
    pub description: String,
    pub amount: f64,
    pub status: ClaimStatus,
}

struct ClaimSeed<'a> {
    id: &'a str,
    number: &'a str,
    policy_id: &'a str,
    customer_id: &'a str,
    date: &'a str,
    description: &'a str,
    amount: f64,
    status: ClaimStatus,
}

impl From<ClaimSeed<'_>> for Claim {
    fn from(seed: ClaimSeed<'_>) -> Self {
        Claim {
            id: seed.id.to_string(),
            claim_number: seed.number.to_string(),
            policy_id: seed.policy_id.to_string(),
            customer_id: seed.customer_id.to_string(),
            date_of_incident: seed.date.to_string(),
            description: seed.description.to_string(),
            amount: seed.amount,
            status: seed.status,
        }
    }
}

impl Entity for Claim {
    const KIND: &'static str = "claim";
    const INDEX: &'static str = "claims";
    const ID_PREFIX: &'static str = "clm_";
    const LABEL: &'static str = "Claim";

    fn id(&self) -> &str {
        &self.id
    }

    fn initial_state() -> Self {
        Self::default()
    }

    fn seed_data() -> Vec<Self> {
        let seeds = [
            ClaimSeed {
                id: "clm_1",
                number: "CLM-001",
                policy_id: "pol_1",
                customer_id: "cust_1",
                date: "2023-07-20",
                description: "Minor fender bender",
                amount: 500.0,
                status: ClaimStatus::Approved,
            },
            ClaimSeed {
                id: "clm_2",
                number: "CLM-002",
                policy_id: "pol_2",
                customer_id: "cust_2",
                date: "2023-08-10",
                description: "Water damage from leaky pipe",
                amount: 2500.0,
                status: ClaimStatus::InProgress,
            },
            ClaimSeed {
                id: "clm_3",
                number: "CLM-003",
                policy_id: "pol_3",
                customer_id: "cust_3",
                date: "2023-09-01",
                description: "Multi-car collision",
                amount: 15000.0,
                status: ClaimStatus::Open,
            },
            ClaimSeed {
                id: "clm_4",
                number: "CLM-004",
                policy_id: "pol_5",
                customer_id: "cust_1",
                date: "2023-09-05",
                description: "Stolen bicycle from property",
                amount: 800.0,
                status: ClaimStatus::Denied,
            },
        ];
        seeds.into_iter().map(Claim::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_progress_uses_spaced_name() {
        let json = serde_json::to_string(&ClaimStatus::InProgress).unwrap();
        assert_eq!(json, r#""In Progress""#);
        let back: ClaimStatus = serde_json::from_str(r#""In Progress""#).unwrap();
        assert_eq!(back, ClaimStatus::InProgress);
    }

    #[test]
    fn test_seed_claims_reference_seed_policies() {
        let ids: Vec<String> = Claim::seed_data().into_iter().map(|c| c.policy_id).collect();
        assert_eq!(ids, vec!["pol_1", "pol_2", "pol_3", "pol_5"]);
    }
}
