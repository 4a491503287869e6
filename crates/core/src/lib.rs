//! Domain rules for daybook: visibility and ownership checks, day-keyed
//! entry validation, progress derivation, comment validation, and the
//! object store abstraction used for entry images.
//!
//! Nothing in this crate touches the database; persistence lives in
//! `daybook_db` and request handling in `daybook_api`.

pub mod access;
pub mod comment;
pub mod entry;
pub mod error;
pub mod profile;
pub mod progress;
pub mod project;
pub mod storage;
pub mod types;
