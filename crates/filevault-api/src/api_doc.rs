//! OpenAPI documentation.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::error;
use crate::handlers;
use filevault_core::models;

/// Returns the OpenAPI spec served at /api/openapi.json.
pub fn get_openapi_spec() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Filevault API",
        version = "0.1.0",
        description = "File storage API brokering presigned upload and download URLs. Clients upload directly to object storage; a storage-event webhook confirms completed uploads."
    ),
    modifiers(&SecurityAddon),
    paths(
        // Health
        handlers::health::health_check,
        // Auth
        handlers::auth::register,
        handlers::auth::login,
        // Users
        handlers::users::get_profile,
        handlers::users::check_auth,
        // Files
        handlers::files::request_upload_url,
        handlers::files::list_files,
        handlers::files::get_download_url,
        handlers::files::delete_file,
        handlers::files::sweep_pending,
        handlers::webhook::confirm_upload,
    ),
    components(
        schemas(
            // Auth models
            models::RegisterRequest,
            models::RegisterResponse,
            models::LoginRequest,
            models::AuthResponse,
            models::PublicUser,
            // File models
            models::FileRecord,
            models::FileStatus,
            models::FileListResponse,
            models::UploadRequest,
            models::UploadResponse,
            models::WebhookRequest,
            models::WebhookResponse,
            models::DownloadUrlResponse,
            models::SweepResponse,
            // Error
            error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Service health checks"),
        (name = "auth", description = "Account registration and login"),
        (name = "users", description = "Authenticated user operations"),
        (name = "files", description = "Presigned upload/download brokering and file management")
    )
)]
pub struct ApiDoc;
