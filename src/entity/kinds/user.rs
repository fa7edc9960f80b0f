use crate::entity::Entity;
use serde::{Deserialize, Serialize};

/// An operator of the admin console.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
}

impl Entity for User {
    const KIND: &'static str = "user";
    const INDEX: &'static str = "users";
    const ID_PREFIX: &'static str = "usr_";
    const LABEL: &'static str = "User";

    fn id(&self) -> &str {
        &self.id
    }

    fn initial_state() -> Self {
        Self::default()
    }

    fn seed_data() -> Vec<Self> {
        vec![
            User {
                id: "u1".to_string(),
                name: "Admin User".to_string(),
            },
            User {
                id: "u2".to_string(),
                name: "Support Agent".to_string(),
            },
        ]
    }
}
