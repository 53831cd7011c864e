//! # userdir server
//!
//! REST front for the in-memory user directory.
//!
//! The `/user` resource maps HTTP verbs onto a [`UsersRepository`] held in
//! [`AppState`]. Route templates come from [`userdir_core::api_routes`] so
//! the router, the tests and any client agree on the same paths.
//!
//! [`UsersRepository`]: userdir_core::UsersRepository

pub mod api;
pub mod infra;
pub mod routes;
pub mod users;

pub use infra::app::create_app;
pub use infra::app_state::AppState;
