use utoipa::{
    OpenApi,
    openapi::{self, server::Server},
};
use utoipa_swagger_ui::SwaggerUi;

use userdir_core::{NewUser, User, UserPatch, api_routes::docs};

use crate::{infra::errors::ErrorBody, users::user_handlers};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Management API",
        version = "1.0.0",
        description = "API for managing users in the application"
    ),
    paths(
        user_handlers::list_users_handler,
        user_handlers::create_user_handler,
        user_handlers::get_user_handler,
        user_handlers::update_user_handler,
        user_handlers::delete_user_handler,
    ),
    components(schemas(User, NewUser, UserPatch, ErrorBody)),
    tags(
        (name = "Users", description = "The users managing API")
    )
)]
pub struct ApiDoc;

/// Build the document with a server entry for the configured port.
pub fn api_doc(port: u16) -> openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    doc.servers = Some(vec![Server::new(format!("http://localhost:{port}/"))]);
    doc
}

/// Swagger UI under `/v1`, which also serves the raw document.
pub fn swagger_ui(port: u16) -> SwaggerUi {
    SwaggerUi::new(docs::SWAGGER_UI).url(docs::OPENAPI, api_doc(port))
}
