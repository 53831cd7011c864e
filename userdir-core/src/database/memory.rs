use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

use crate::database::ports::users::UsersRepository;
use crate::domain::users::user::{NewUser, User, UserPatch};
use crate::error::{Result, UserError};
use crate::types::ids::UserId;

/// Process-lifetime user store.
///
/// Users are kept in insertion order behind a single mutex, so every
/// operation observes and mutates the collection atomically. Nothing is
/// persisted; a new instance always starts empty.
#[derive(Debug, Default)]
pub struct InMemoryUsersRepository {
    users: Mutex<Vec<User>>,
}

impl InMemoryUsersRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn fresh_id(users: &[User]) -> UserId {
    loop {
        let id = UserId::generate();
        if !users.iter().any(|user| user.id == id) {
            return id;
        }
    }
}

#[async_trait]
impl UsersRepository for InMemoryUsersRepository {
    async fn list_users(&self) -> Vec<User> {
        self.users.lock().await.clone()
    }

    async fn create_user(&self, fields: NewUser) -> User {
        let mut users = self.users.lock().await;
        let user = User::new(fresh_id(&users), fields);
        users.push(user.clone());
        debug!(user_id = %user.id, total = users.len(), "user stored");
        user
    }

    async fn get_user(&self, id: &UserId) -> Result<User> {
        self.users
            .lock()
            .await
            .iter()
            .find(|user| &user.id == id)
            .cloned()
            .ok_or_else(|| UserError::NotFound(id.clone()))
    }

    async fn update_user(&self, id: &UserId, patch: UserPatch) -> Result<()> {
        let mut users = self.users.lock().await;
        let user = users
            .iter_mut()
            .find(|user| &user.id == id)
            .ok_or_else(|| UserError::NotFound(id.clone()))?;
        user.apply_patch(patch);
        Ok(())
    }

    async fn delete_user(&self, id: &UserId) -> Result<()> {
        let mut users = self.users.lock().await;
        let index = users
            .iter()
            .position(|user| &user.id == id)
            .ok_or_else(|| UserError::NotFound(id.clone()))?;
        users.remove(index);
        debug!(user_id = %id, total = users.len(), "user removed");
        Ok(())
    }

    async fn count(&self) -> usize {
        self.users.lock().await.len()
    }
}
