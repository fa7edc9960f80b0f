//! Indexed entities: one store namespace plus one index per record kind.
//!
//! Every record type implements [`Entity`], which supplies its kind name,
//! index name, identifier prefix, initial state, and fixture data. The generic
//! [`IndexedEntity`] then provides creation, deletion, listing, mutation, and
//! seed-once behavior for that kind.

pub mod chat;
pub mod error;
pub mod id;
pub mod indexed;
pub mod kinds;

pub use error::EntityError;
pub use id::generate_id;
pub use indexed::IndexedEntity;
pub use kinds::{
    Chat, ChatBoard, ChatMessage, Claim, ClaimStatus, Customer, Policy, PolicyStatus, User,
};

use serde::de::DeserializeOwned;
use serde::Serialize;

/// A record type stored through an [`IndexedEntity`].
pub trait Entity: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Storage namespace for records of this kind.
    const KIND: &'static str;
    /// Name of the index listing this kind.
    const INDEX: &'static str;
    /// Prefix of server-generated identifiers.
    const ID_PREFIX: &'static str;
    /// Human-readable name used in error messages.
    const LABEL: &'static str;

    fn id(&self) -> &str;

    /// Value observed for an id that has never been written.
    fn initial_state() -> Self;

    /// Fixture records loaded the first time the kind is listed.
    fn seed_data() -> Vec<Self> {
        Vec::new()
    }

    /// A fresh identifier for a new record of this kind.
    #[must_use]
    fn new_id() -> String {
        generate_id(Self::ID_PREFIX)
    }
}
