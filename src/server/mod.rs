//! REST surface of the daemon.
//!
//! Every route lives under `/api` and answers with the
//! `{ success, data?, error? }` envelope from [`ApiResponse`].

mod error_mapping;
mod handlers;
mod response;

pub use error_mapping::{ApiError, ToHttpError};
pub use response::ApiResponse;

use crate::cors::build_cors_layer;
use crate::entity::{ChatBoard, Claim, Customer, Entity, IndexedEntity, Policy, User};
use crate::http_logging::HttpLoggingLayer;
use crate::store::EntityStore;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;

/// One [`IndexedEntity`] per record kind, sharing a single store.
#[derive(Debug)]
pub struct Entities {
    pub users: IndexedEntity<User>,
    pub chats: IndexedEntity<ChatBoard>,
    pub customers: IndexedEntity<Customer>,
    pub policies: IndexedEntity<Policy>,
    pub claims: IndexedEntity<Claim>,
}

impl Entities {
    #[must_use]
    pub fn new(store: &EntityStore, page_size: usize) -> Self {
        Self {
            users: IndexedEntity::new(store.clone(), page_size),
            chats: IndexedEntity::new(store.clone(), page_size),
            customers: IndexedEntity::new(store.clone(), page_size),
            policies: IndexedEntity::new(store.clone(), page_size),
            claims: IndexedEntity::new(store.clone(), page_size),
        }
    }
}

/// Record kinds with generic list/get/delete routes.
pub trait Routed: Entity {
    fn repository(entities: &Entities) -> &IndexedEntity<Self>;
}

impl Routed for User {
    fn repository(entities: &Entities) -> &IndexedEntity<Self> {
        &entities.users
    }
}

impl Routed for ChatBoard {
    fn repository(entities: &Entities) -> &IndexedEntity<Self> {
        &entities.chats
    }
}

impl Routed for Customer {
    fn repository(entities: &Entities) -> &IndexedEntity<Self> {
        &entities.customers
    }
}

impl Routed for Policy {
    fn repository(entities: &Entities) -> &IndexedEntity<Self> {
        &entities.policies
    }
}

impl Routed for Claim {
    fn repository(entities: &Entities) -> &IndexedEntity<Self> {
        &entities.claims
    }
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub entities: Arc<Entities>,
}

impl AppState {
    #[must_use]
    pub fn new(store: &EntityStore, page_size: usize) -> Self {
        Self {
            entities: Arc::new(Entities::new(store, page_size)),
        }
    }
}

/// Signal sent through the shutdown watch channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShutdownSignal {
    #[default]
    None,
    Shutdown,
}

/// Build the API router for `state`, without CORS or request logging.
#[must_use]
pub fn api_router(state: AppState) -> Router {
    use handlers::{
        create_chat, create_claim, create_customer, create_policy, create_user, delete_entity,
        get_entity, health, list_entities, list_messages, send_message,
    };

    Router::new()
        .route("/api/health", get(health))
        .route("/api/users", get(list_entities::<User>).post(create_user))
        .route("/api/users/:id", get(get_entity::<User>).delete(delete_entity::<User>))
        .route("/api/chats", get(list_entities::<ChatBoard>).post(create_chat))
        .route(
            "/api/chats/:id",
            get(get_entity::<ChatBoard>).delete(delete_entity::<ChatBoard>),
        )
        .route("/api/chats/:id/messages", get(list_messages).post(send_message))
        .route(
            "/api/customers",
            get(list_entities::<Customer>).post(create_customer),
        )
        .route(
            "/api/customers/:id",
            get(get_entity::<Customer>).delete(delete_entity::<Customer>),
        )
        .route("/api/policies", get(list_entities::<Policy>).post(create_policy))
        .route(
            "/api/policies/:id",
            get(get_entity::<Policy>).delete(delete_entity::<Policy>),
        )
        .route("/api/claims", get(list_entities::<Claim>).post(create_claim))
        .route(
            "/api/claims/:id",
            get(get_entity::<Claim>).delete(delete_entity::<Claim>),
        )
        .fallback(handlers::not_found)
        .with_state(state)
}

/// The full HTTP application: routes, request logging, and CORS.
#[must_use]
pub fn build_router(state: AppState, cors_origins: Vec<String>) -> Router {
    api_router(state)
        .layer(HttpLoggingLayer)
        .layer(build_cors_layer(cors_origins))
}
