//! Members-only articles service
//!
//! A small web backend exposing member-gated article content behind a
//! session-based login: a session gate (`/login`, `/logout`, `/clear`)
//! and an article access service (`/members_only_articles`,
//! `/members_only_articles/:id`) that is only reachable once the gate
//! has established a session.

pub mod error;
pub mod fixtures;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod session;
pub mod state;

pub use routes::create_router;
pub use state::AppState;
