use crate::entity::Entity;
use serde::{Deserialize, Serialize};

/// Policy types accepted on creation.
pub const POLICY_TYPES: [&str; 5] = ["Auto", "Home", "Life", "Health", "Business"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PolicyStatus {
    Active,
    #[default]
    Pending,
    Expired,
    Cancelled,
}

/// An insurance policy held by a customer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Policy {
    pub id: String,
    pub policy_number: String,
    pub customer_id: String,
    pub policy_type: String,
    pub start_date: String,
    pub end_date: String,
    pub premium: f64,
    pub status: PolicyStatus,
}

#[allow(clippy::too_many_arguments)]
fn policy(
    id: &str,
    number: &str,
    customer_id: &str,
    policy_type: &str,
    start: &str,
    end: &str,
    premium: f64,
    status: PolicyStatus,
) -> Policy {
    Policy {
        id: id.to_string(),
        policy_number: number.to_string(),
        customer_id: customer_id.to_string(),
        policy_type: policy_type.to_string(),
        start_date: start.to_string(),
        end_date: end.to_string(),
        premium,
        status,
    }
}

impl Entity for Policy {
    const KIND: &'static str = "policy";
    const INDEX: &'static str = "policies";
    const ID_PREFIX: &'static str = "pol_";
    const LABEL: &'static str = "Policy";

    fn id(&self) -> &str {
        &self.id
    }

    fn initial_state() -> Self {
        Self::default()
    }

    fn seed_data() -> Vec<Self> {
        use PolicyStatus::{Active, Cancelled, Expired, Pending};
        vec![
            policy(
                "pol_1",
                "AUTO-001",
                "cust_1",
                "Auto",
                "2023-02-01",
                "2024-02-01",
                1200.0,
                Active,
            ),
            policy(
                "pol_2",
                "HOME-001",
                "cust_2",
                "Home",
                "2023-03-15",
                "2024-03-15",
                800.0,
                Active,
            ),
            policy(
                "pol_3",
                "AUTO-002",
                "cust_3",
                "Auto",
                "2023-04-01",
                "2024-04-01",
                1500.0,
                Pending,
            ),
            policy(
                "pol_4",
                "LIFE-001",
                "cust_4",
                "Life",
                "2022-05-20",
                "2032-05-20",
                2400.0,
                Expired,
            ),
            policy(
                "pol_5",
                "HOME-002",
                "cust_1",
                "Home",
                "2023-06-01",
                "2024-06-01",
                950.0,
                Cancelled,
            ),
        ]
    }
}
