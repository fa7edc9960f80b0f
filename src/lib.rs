// Allow panic/unwrap/expect in tests (denied globally via Cargo.toml lints)
#![cfg_attr(
    test,
    allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::indexing_slicing
    )
)]

pub mod app;
pub mod config;
pub mod cors;
pub mod entity;
pub mod http_logging;
pub mod index;
pub mod logging;
pub mod metrics;
pub mod server;
pub mod storage;
pub mod store;
pub mod utils;
pub mod validation;

// Re-export commonly used types
pub use config::{load_config, FileConfig, Settings};
pub use entity::{
    ChatBoard, ChatMessage, Claim, ClaimStatus, Customer, Entity, EntityError, IndexedEntity,
    Policy, PolicyStatus, User,
};
pub use index::{Index, Page};
pub use server::{build_router, AppState, ShutdownSignal};
pub use storage::{Backend, FsBackend, MemoryBackend, StoreError};
pub use store::EntityStore;
pub use validation::ValidationError;
