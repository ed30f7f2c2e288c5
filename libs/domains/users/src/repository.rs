use async_trait::async_trait;
use futures::stream::BoxStream;

use crate::error::UserResult;
use crate::models::User;

/// Repository trait for User persistence
///
/// Implementations enforce email uniqueness and report violations as
/// [`UserError::DuplicateKey`](crate::error::UserError::DuplicateKey).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert when `user.id` is `None` (the store assigns the id), otherwise
    /// replace the stored record with that id.
    async fn save(&self, user: User) -> UserResult<User>;

    /// Ids the store cannot interpret are a miss, not an error.
    async fn find_by_id(&self, id: &str) -> UserResult<Option<User>>;

    /// Every stored user, in store order. Nothing is read until polled.
    fn find_all(&self) -> BoxStream<'static, UserResult<User>>;

    /// Whether a record was removed.
    async fn delete_by_id(&self, id: &str) -> UserResult<bool>;
}
