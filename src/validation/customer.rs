use super::{ValidationError, Validator};
use crate::entity::Customer;
use crate::utils::now_iso;
use serde_json::Value;

/// A customer create payload that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerCreate {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

impl CustomerCreate {
    /// The stored record, stamped with the current time.
    #[must_use]
    pub fn into_record(self, id: String) -> Customer {
        Customer {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            address: self.address,
            created_at: now_iso(),
        }
    }
}

pub fn validate_customer(body: &Value) -> Result<CustomerCreate, ValidationError> {
    let mut v = Validator::new(body);
    let name = v.min_len("name", 2, "Name must be at least 2 characters");
    let email = v.email("email", "Invalid email address");
    let phone = v.min_len("phone", 10, "Phone number must be at least 10 characters");
    let address = v.min_len("address", 10, "Address must be at least 10 characters");

    let input = match (name, email, phone, address) {
        (Some(name), Some(email), Some(phone), Some(address)) => Some(CustomerCreate {
            name,
            email,
            phone,
            address,
        }),
        _ => None,
    };
    v.finish(input)
}
