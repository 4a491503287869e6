//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` (or any Postgres executor, where a caller needs
//! to run them inside a transaction) as the first argument.

pub mod comment_repo;
pub mod entry_repo;
pub mod profile_repo;
pub mod project_repo;
pub mod session_repo;
pub mod user_repo;

pub use comment_repo::CommentRepo;
pub use entry_repo::EntryRepo;
pub use profile_repo::ProfileRepo;
pub use project_repo::ProjectRepo;
pub use session_repo::SessionRepo;
pub use user_repo::UserRepo;
