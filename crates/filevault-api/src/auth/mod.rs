pub mod jwt;
pub mod middleware;
pub mod models;
pub mod password;

pub use jwt::{decode_token, issue_token, Claims};
pub use middleware::{auth_middleware, secure_compare};
pub use models::CurrentUser;
pub use password::{hash_password, verify_password};
