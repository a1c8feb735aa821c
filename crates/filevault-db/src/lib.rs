//! Filevault Database Library
//!
//! Repositories over Postgres. Queries are dynamic SQLx queries so no
//! DATABASE_URL or `sqlx prepare` step is required at compile time.

pub mod files;
pub mod users;

pub use files::FileRepository;
pub use users::UserRepository;
