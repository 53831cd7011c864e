use async_trait::async_trait;

use crate::domain::users::user::{NewUser, User, UserPatch};
use crate::error::Result;
use crate::types::ids::UserId;

/// Storage port for directory entries.
///
/// Implementations own the collection outright. Reads hand back clones, and
/// every mutation goes through this trait.
#[async_trait]
pub trait UsersRepository: Send + Sync {
    /// All users in insertion order.
    async fn list_users(&self) -> Vec<User>;

    /// Store a new user under a freshly generated id.
    async fn create_user(&self, fields: NewUser) -> User;

    async fn get_user(&self, id: &UserId) -> Result<User>;

    /// Merge `patch` into the stored user in place.
    async fn update_user(&self, id: &UserId, patch: UserPatch) -> Result<()>;

    async fn delete_user(&self, id: &UserId) -> Result<()>;

    async fn count(&self) -> usize;
}
