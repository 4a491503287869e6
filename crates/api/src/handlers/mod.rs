pub mod auth;
pub mod comment;
pub mod entry;
pub mod profile;
pub mod project;
