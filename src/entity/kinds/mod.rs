//! Record types served by the daemon, with their initial values and fixtures.

mod chat;
mod claim;
mod customer;
mod policy;
mod user;

pub use chat::{Chat, ChatBoard, ChatMessage};
pub use claim::{Claim, ClaimStatus};
pub use customer::Customer;
pub use policy::{Policy, PolicyStatus, POLICY_TYPES};
pub use user::User;
