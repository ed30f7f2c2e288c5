//! In-memory implementation of UserRepository

use async_trait::async_trait;
use futures::stream::{self, BoxStream, StreamExt};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{UserError, UserResult};
use crate::models::{EMAIL_INDEX, User};
use crate::repository::UserRepository;

/// Process-local store with the same contract as the MongoDB repository.
///
/// Keeps insertion order, assigns UUID v4 ids and rejects duplicate emails as
/// a violation of the email index. Clones share the same data.
#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<Vec<User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn save(&self, mut user: User) -> UserResult<User> {
        let mut users = self.users.write().await;

        let email_taken = users
            .iter()
            .any(|u| u.email == user.email && u.id != user.id);
        if email_taken {
            return Err(UserError::duplicate_on(EMAIL_INDEX));
        }

        match user.id.as_deref() {
            None => {
                user.id = Some(Uuid::new_v4().to_string());
                users.push(user.clone());
            }
            Some(id) => {
                let slot = users
                    .iter_mut()
                    .find(|u| u.id.as_deref() == Some(id))
                    .ok_or_else(|| UserError::NotFound(id.to_string()))?;
                *slot = user.clone();
            }
        }

        Ok(user)
    }

    async fn find_by_id(&self, id: &str) -> UserResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.id.as_deref() == Some(id)).cloned())
    }

    fn find_all(&self) -> BoxStream<'static, UserResult<User>> {
        let users = Arc::clone(&self.users);
        stream::once(async move { users.read().await.clone() })
            .flat_map(|snapshot| stream::iter(snapshot.into_iter().map(Ok)))
            .boxed()
    }

    async fn delete_by_id(&self, id: &str) -> UserResult<bool> {
        let mut users = self.users.write().await;
        let before = users.len();
        users.retain(|u| u.id.as_deref() != Some(id));
        Ok(users.len() < before)
    }
}
