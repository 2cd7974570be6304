//! # API crate: typed HTTP client for the Campus Hub backend
//!
//! The backend is a separate REST service; this crate is the only place the
//! frontends talk to it. Every request goes through [`ApiClient`], which
//! attaches the bearer token from the session store, enforces a request
//! timeout, and translates the server's response envelope into typed values
//! or an [`ApiError`].
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | The HTTP transport: bearer auth, timeout race, status mapping, 401 expiry |
//! | [`config`] | Base URL resolution from `CAMPUS_HUB_API_URL` |
//! | [`envelope`] | The `{ success, data, message }` response wrapper and pagination metadata |
//! | [`error`] | [`ApiError`] taxonomy shared by every call site |
//! | [`models`] | Domain types: users, notices, events, lost & found posts, feedback, stats |
//! | [`query`] | List-endpoint query state (page, search, filters) |
//! | [`session`] | Login, registration, session restore, and logout on top of the store |
//!
//! ## Endpoint wrappers
//!
//! The remaining modules add `impl ApiClient` blocks, one per backend
//! collection:
//!
//! - **Notices**: `list_notices`, `recent_notices`, `create_notice`, `update_notice`, `delete_notice`
//! - **Events**: `list_events`, `upcoming_events`, `create_event`, `update_event`, `delete_event`
//! - **Lost & found**: `browse_lostfound`, `my_lostfound_posts`, `moderate_lostfound`,
//!   `create_lostfound`, `update_lostfound`, `delete_lostfound`,
//!   `approve_lostfound`, `reject_lostfound`, `claim_lostfound`
//! - **Feedback**: `submit_feedback`, `list_feedback`, `resolve_feedback`
//! - **Admin accounts**: `list_admins`, `create_admin`, `delete_admin`
//! - **Stats**: `fetch_stats`, `fetch_activity`

pub mod client;
pub mod config;
pub mod envelope;
pub mod error;
pub mod models;
pub mod query;
pub mod session;

mod auth;
mod events;
mod feedback;
mod lostfound;
mod notices;
mod stats;

pub use auth::CreateAdminRequest;
pub use client::ApiClient;
pub use envelope::{Envelope, Page, Pagination};
pub use error::{absorb_conflict, ApiError};
pub use query::ListQuery;
pub use session::{AuthOutcome, RegisterRequest, SessionManager};
