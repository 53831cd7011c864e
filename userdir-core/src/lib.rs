//! # userdir core
//!
//! Domain types and storage for the user directory service.
//!
//! ## Overview
//!
//! - [`domain::users`]: the [`User`] record plus the [`NewUser`] and
//!   [`UserPatch`] payloads accepted at the HTTP boundary
//! - [`database`]: the [`UsersRepository`] port and the process-lifetime
//!   [`InMemoryUsersRepository`]
//! - [`api_routes`]: route templates shared by the server and its clients
//!
//! ## Example
//!
//! ```no_run
//! use userdir_core::{InMemoryUsersRepository, NewUser, UsersRepository};
//!
//! async fn register(repo: &InMemoryUsersRepository) {
//!     let user = repo
//!         .create_user(NewUser {
//!             first_name: "Ann".into(),
//!             email: "a@x.com".into(),
//!             ..Default::default()
//!         })
//!         .await;
//!     println!("created {}", user.id);
//! }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

/// Route templates used across userdir services
pub mod api_routes;

/// Repository port and implementations
pub mod database;

/// Domain records and payloads
pub mod domain;

/// Domain error type
pub mod error;

/// Strongly typed identifiers
pub mod types;

pub use database::{InMemoryUsersRepository, ports::users::UsersRepository};
pub use domain::users::user::{NewUser, User, UserPatch};
pub use error::{Result, UserError};
pub use types::ids::UserId;
