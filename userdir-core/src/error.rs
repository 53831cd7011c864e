use thiserror::Error;

use crate::types::ids::UserId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UserError {
    #[error("User not found: {0}")]
    NotFound(UserId),
}

pub type Result<T> = std::result::Result<T, UserError>;
