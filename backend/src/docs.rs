//! OpenAPI documentation
//!
//! Generates the OpenAPI document from the route annotations and serves
//! it with Swagger UI at /docs.

use axum::Router;
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::auth::register,
        crate::routes::auth::login,
        crate::routes::todos::create_todo,
        crate::routes::todos::list_todos,
        crate::routes::todos::get_todo,
        crate::routes::todos::update_todo,
        crate::routes::todos::delete_todo,
        crate::routes::users::get_user,
        crate::routes::users::update_user,
        crate::routes::users::delete_user,
        crate::routes::health::health_check,
        crate::routes::health::readiness_check,
        crate::routes::health::liveness_check
    ),
    components(
        schemas(
            todo_api_shared::types::RegisterRequest,
            todo_api_shared::types::LoginRequest,
            todo_api_shared::types::LoginResponse,
            todo_api_shared::types::UserResponse,
            todo_api_shared::types::UpdateUserRequest,
            todo_api_shared::types::CreateTodoRequest,
            todo_api_shared::types::UpdateTodoRequest,
            todo_api_shared::types::TodoResponse,
            crate::error::ErrorResponse,
            crate::routes::health::HealthResponse,
            crate::routes::health::HealthChecks,
            crate::routes::health::CheckStatus
        )
    ),
    tags(
        (name = "auth", description = "Registration and login"),
        (name = "todos", description = "Todo CRUD operations"),
        (name = "users", description = "User account management"),
        (name = "health", description = "Service health probes")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};

        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearerAuth",
            SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).build()),
        );
    }
}

/// Swagger UI at /docs plus the raw document at /api-docs/openapi.json
pub fn docs_router() -> Router<AppState> {
    SwaggerUi::new("/docs")
        .url("/api-docs/openapi.json", ApiDoc::openapi())
        .into()
}
