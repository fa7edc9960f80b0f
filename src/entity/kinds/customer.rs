use crate::entity::Entity;
use serde::{Deserialize, Serialize};

/// A policy holder.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    /// RFC 3339 creation time.
    pub created_at: String,
}

fn customer(
    id: &str,
    name: &str,
    email: &str,
    phone: &str,
    address: &str,
    created_at: &str,
) -> Customer {
    Customer {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        address: address.to_string(),
        created_at: created_at.to_string(),
    }
}

impl Entity for Customer {
    const KIND: &'static str = "customer";
    const INDEX: &'static str = "customers";
    const ID_PREFIX: &'static str = "cust_";
    const LABEL: &'static str = "Customer";

    fn id(&self) -> &str {
        &self.id
    }

    fn initial_state() -> Self {
        Self::default()
    }

    fn seed_data() -> Vec<Self> {
        vec![
            customer(
                "cust_1",
                "John Doe",
                "john.doe@example.com",
                "555-0101",
                "123 Maple St, Springfield",
                "2023-01-15T10:00:00Z",
            ),
            customer(
                "cust_2",
                "Jane Smith",
                "jane.smith@example.com",
                "555-0102",
                "456 Oak Ave, Metropolis",
                "2023-02-20T11:30:00Z",
            ),
            customer(
                "cust_3",
                "Alice Johnson",
                "alice.j@example.com",
                "555-0103",
                "789 Pine Ln, Gotham",
                "2023-03-10T09:00:00Z",
            ),
            customer(
                "cust_4",
                "Bob Brown",
                "bob.brown@example.com",
                "555-0104",
                "101 Elm Ct, Star City",
                "2023-04-05T14:00:00Z",
            ),
            customer(
                "cust_5",
                "Charlie Davis",
                "charlie.d@example.com",
                "555-0105",
                "212 Birch Rd, Central City",
                "2023-05-12T16:45:00Z",
            ),
        ]
    }
}
