//! Domain models and API request/response types.

pub mod auth;
pub mod file;
pub mod upload;
pub mod user;

pub use auth::{AuthResponse, LoginRequest, RegisterRequest, RegisterResponse};
pub use file::{FileListResponse, FileRecord, FileStatus};
pub use upload::{
    DownloadUrlResponse, SweepResponse, UploadRequest, UploadResponse, WebhookRequest,
    WebhookResponse,
};
pub use user::{PublicUser, User};
