pub mod openapi;

pub use openapi::{ApiDoc, api_doc, swagger_ui};
