//! User Service - Business logic layer

use futures::stream::BoxStream;
use std::sync::Arc;
use tracing::instrument;

use crate::error::{UserError, UserResult};
use crate::mapper;
use crate::models::{User, UserRequest};
use crate::repository::UserRepository;

/// User service orchestrating mapping and repository calls.
///
/// Requests reaching the service are already validated; uniqueness is left to
/// the repository.
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Persist a new user and return it with its assigned id.
    #[instrument(skip(self, request), fields(email = ?request.email))]
    pub async fn save(&self, request: UserRequest) -> UserResult<User> {
        self.repository.save(mapper::to_entity(request)).await
    }

    #[instrument(skip(self))]
    pub async fn find_by_id(&self, id: &str) -> UserResult<User> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| UserError::NotFound(id.to_string()))
    }

    pub fn find_all(&self) -> BoxStream<'static, UserResult<User>> {
        self.repository.find_all()
    }

    /// Apply the present request fields to an existing user.
    #[instrument(skip(self, request))]
    pub async fn update(&self, id: &str, request: UserRequest) -> UserResult<User> {
        let mut user = self.find_by_id(id).await?;
        mapper::apply(request, &mut user);
        self.repository.save(user).await
    }

    /// Remove a user, returning the record as it was before deletion.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> UserResult<User> {
        let user = self.find_by_id(id).await?;
        if !self.repository.delete_by_id(id).await? {
            return Err(UserError::NotFound(id.to_string()));
        }
        Ok(user)
    }
}

impl<R: UserRepository> Clone for UserService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EMAIL_INDEX;
    use crate::repository::MockUserRepository;
    use futures::{StreamExt, TryStreamExt, stream};
    use mockall::predicate::eq;

    const ID: &str = "123";

    fn stored() -> User {
        User {
            id: Some(ID.to_string()),
            name: "usuario".to_string(),
            email: "usuario@email.com".to_string(),
            password: "usuario123".to_string(),
        }
    }

    fn request() -> UserRequest {
        UserRequest::new("usuario", "usuario@email.com", "usuario123")
    }

    #[tokio::test]
    async fn test_save_maps_and_persists_once() {
        let mut repo = MockUserRepository::new();
        repo.expect_save()
            .withf(|user| user.id.is_none() && user.email == "usuario@email.com")
            .times(1)
            .returning(|user| {
                Ok(User {
                    id: Some(ID.to_string()),
                    ..user
                })
            });

        let saved = UserService::new(repo).save(request()).await.unwrap();
        assert_eq!(saved, stored());
    }

    #[tokio::test]
    async fn test_save_propagates_duplicate_key() {
        let mut repo = MockUserRepository::new();
        repo.expect_save()
            .times(1)
            .returning(|_| Err(UserError::duplicate_on(EMAIL_INDEX)));

        let err = UserService::new(repo).save(request()).await.unwrap_err();
        assert!(matches!(err, UserError::DuplicateKey { .. }));
    }

    #[tokio::test]
    async fn test_find_by_id_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .with(eq(ID))
            .times(1)
            .returning(|_| Ok(Some(stored())));

        let user = UserService::new(repo).find_by_id(ID).await.unwrap();
        assert_eq!(user, stored());
    }

    #[tokio::test]
    async fn test_find_by_id_miss_is_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().times(1).returning(|_| Ok(None));

        let err = UserService::new(repo).find_by_id(ID).await.unwrap_err();
        assert_eq!(err.to_string(), "Object not found. Id: 123, Type: User");
    }

    #[tokio::test]
    async fn test_find_all_streams_repository_results() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_all()
            .times(1)
            .returning(|| stream::iter(vec![Ok(stored()), Ok(stored())]).boxed());

        let users: Vec<User> = UserService::new(repo).find_all().try_collect().await.unwrap();
        assert_eq!(users.len(), 2);
    }

    #[tokio::test]
    async fn test_update_applies_request_to_stored_user() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .with(eq(ID))
            .returning(|_| Ok(Some(stored())));
        repo.expect_save()
            .withf(|user| user.id.as_deref() == Some(ID) && user.name == "renamed")
            .times(1)
            .returning(Ok);

        let update = UserRequest {
            name: Some("renamed".to_string()),
            ..Default::default()
        };
        let user = UserService::new(repo).update(ID, update).await.unwrap();

        assert_eq!(user.name, "renamed");
        assert_eq!(user.email, "usuario@email.com");
    }

    #[tokio::test]
    async fn test_update_unknown_id_does_not_save() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));
        repo.expect_save().never();

        let err = UserService::new(repo)
            .update(ID, request())
            .await
            .unwrap_err();
        assert!(matches!(err, UserError::NotFound(ref id) if id == ID));
    }

    #[tokio::test]
    async fn test_delete_returns_deleted_user() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(Some(stored())));
        repo.expect_delete_by_id()
            .with(eq(ID))
            .times(1)
            .returning(|_| Ok(true));

        let deleted = UserService::new(repo).delete(ID).await.unwrap();
        assert_eq!(deleted, stored());
    }

    #[tokio::test]
    async fn test_delete_unknown_id_is_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));
        repo.expect_delete_by_id().never();

        let err = UserService::new(repo).delete(ID).await.unwrap_err();
        assert!(matches!(err, UserError::NotFound(_)));
    }
}
