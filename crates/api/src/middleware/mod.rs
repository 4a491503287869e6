//! Request extractors for identifying the caller.
//!
//! - [`auth::AuthUser`] -- requires a valid JWT Bearer token.
//! - [`auth::CurrentActor`] -- accepts anonymous callers; rejects bad tokens.

pub mod auth;
