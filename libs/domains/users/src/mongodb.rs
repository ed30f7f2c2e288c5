//! MongoDB implementation of UserRepository

use async_trait::async_trait;
use futures::stream::{self, BoxStream, StreamExt, TryStreamExt};
use mongodb::{
    Collection, Database, IndexModel,
    bson::{doc, oid::ObjectId},
    options::IndexOptions,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::{UserError, UserResult};
use crate::models::{EMAIL_INDEX, User};
use crate::repository::UserRepository;

/// Stored shape of a user in the `users` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct UserDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    name: String,
    email: String,
    password: String,
}

impl From<UserDocument> for User {
    fn from(doc: UserDocument) -> Self {
        User {
            id: doc.id.map(|oid| oid.to_hex()),
            name: doc.name,
            email: doc.email,
            password: doc.password,
        }
    }
}

impl UserDocument {
    fn new(user: &User, id: Option<ObjectId>) -> Self {
        Self {
            id,
            name: user.name.clone(),
            email: user.email.clone(),
            password: user.password.clone(),
        }
    }
}

/// MongoDB implementation of the UserRepository
#[derive(Clone)]
pub struct MongoUserRepository {
    collection: Collection<UserDocument>,
}

impl MongoUserRepository {
    /// Repository over the `users` collection of `db`.
    ///
    /// # Example
    /// ```ignore
    /// let client = Client::with_uri_str("mongodb://localhost:27017").await?;
    /// let repo = MongoUserRepository::new(client.database("app"));
    /// repo.ensure_indexes().await?;
    /// ```
    pub fn new(db: Database) -> Self {
        Self::with_collection(db, "users")
    }

    /// Create a new MongoUserRepository with a custom collection name
    pub fn with_collection(db: Database, collection_name: &str) -> Self {
        let collection = db.collection::<UserDocument>(collection_name);
        Self { collection }
    }

    /// Create the unique email index if it does not exist yet.
    #[instrument(skip(self))]
    pub async fn ensure_indexes(&self) -> UserResult<()> {
        let index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(
                IndexOptions::builder()
                    .name(EMAIL_INDEX.to_string())
                    .unique(true)
                    .build(),
            )
            .build();

        self.collection.create_index(index).await?;
        tracing::info!(index = EMAIL_INDEX, "User indexes ensured");
        Ok(())
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    #[instrument(skip(self, user), fields(user_id = ?user.id))]
    async fn save(&self, user: User) -> UserResult<User> {
        match user.id.as_deref() {
            None => {
                let result = self
                    .collection
                    .insert_one(UserDocument::new(&user, None))
                    .await?;
                let id = result.inserted_id.as_object_id().ok_or_else(|| {
                    UserError::Database(format!(
                        "unexpected inserted id: {}",
                        result.inserted_id
                    ))
                })?;

                tracing::info!(user_id = %id, "User created successfully");
                Ok(User {
                    id: Some(id.to_hex()),
                    ..user
                })
            }
            Some(id) => {
                let oid =
                    ObjectId::parse_str(id).map_err(|_| UserError::NotFound(id.to_string()))?;
                let result = self
                    .collection
                    .replace_one(doc! { "_id": oid }, UserDocument::new(&user, Some(oid)))
                    .await?;

                if result.matched_count == 0 {
                    return Err(UserError::NotFound(id.to_string()));
                }

                tracing::info!(user_id = %id, "User updated successfully");
                Ok(user)
            }
        }
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &str) -> UserResult<Option<User>> {
        let Ok(oid) = ObjectId::parse_str(id) else {
            return Ok(None);
        };
        let doc = self.collection.find_one(doc! { "_id": oid }).await?;
        Ok(doc.map(User::from))
    }

    fn find_all(&self) -> BoxStream<'static, UserResult<User>> {
        let collection = self.collection.clone();
        stream::once(async move { collection.find(doc! {}).await })
            .try_flatten()
            .map_ok(User::from)
            .map_err(UserError::from)
            .boxed()
    }

    #[instrument(skip(self))]
    async fn delete_by_id(&self, id: &str) -> UserResult<bool> {
        let Ok(oid) = ObjectId::parse_str(id) else {
            return Ok(false);
        };
        let result = self.collection.delete_one(doc! { "_id": oid }).await?;

        if result.deleted_count > 0 {
            tracing::info!(user_id = %id, "User deleted successfully");
        }
        Ok(result.deleted_count > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{TestDataBuilder, TestMongo};

    fn user(builder: &TestDataBuilder, suffix: &str) -> User {
        User {
            id: None,
            name: builder.name(suffix),
            email: builder.email(suffix),
            password: builder.password(),
        }
    }

    async fn repository(mongo: &TestMongo, builder: &TestDataBuilder) -> MongoUserRepository {
        let repo = MongoUserRepository::new(mongo.database(&builder.database_name()));
        repo.ensure_indexes().await.unwrap();
        repo
    }

    #[test]
    fn test_document_to_user_uses_hex_id() {
        let oid = ObjectId::new();
        let user = User::from(UserDocument {
            id: Some(oid),
            name: "usuario".to_string(),
            email: "usuario@email.com".to_string(),
            password: "usuario123".to_string(),
        });
        assert_eq!(user.id, Some(oid.to_hex()));
    }

    #[tokio::test]
    #[ignore] // Requires Docker
    async fn test_save_find_and_delete() {
        let builder = TestDataBuilder::from_test_name("test_save_find_and_delete");
        let mongo = TestMongo::new().await;
        let repo = repository(&mongo, &builder).await;

        let saved = repo.save(user(&builder, "main")).await.unwrap();
        let id = saved.id.clone().unwrap();

        assert_eq!(repo.find_by_id(&id).await.unwrap(), Some(saved.clone()));
        assert!(repo.delete_by_id(&id).await.unwrap());
        assert_eq!(repo.find_by_id(&id).await.unwrap(), None);
    }

    #[tokio::test]
    #[ignore] // Requires Docker
    async fn test_duplicate_email_reports_email_index() {
        let builder = TestDataBuilder::from_test_name("test_duplicate_email_reports_email_index");
        let mongo = TestMongo::new().await;
        let repo = repository(&mongo, &builder).await;

        repo.save(user(&builder, "main")).await.unwrap();
        let mut twin = user(&builder, "twin");
        twin.email = builder.email("main");

        let err = repo.save(twin).await.unwrap_err();
        assert!(matches!(err, UserError::DuplicateKey { index: Some(ref i) } if i == EMAIL_INDEX));
    }

    #[tokio::test]
    #[ignore] // Requires Docker
    async fn test_find_all_and_malformed_ids() {
        let builder = TestDataBuilder::from_test_name("test_find_all_and_malformed_ids");
        let mongo = TestMongo::new().await;
        let repo = repository(&mongo, &builder).await;

        repo.save(user(&builder, "a")).await.unwrap();
        repo.save(user(&builder, "b")).await.unwrap();

        let all: Vec<User> = repo.find_all().try_collect().await.unwrap();
        assert_eq!(all.len(), 2);

        assert_eq!(repo.find_by_id("123").await.unwrap(), None);
        assert!(!repo.delete_by_id("123").await.unwrap());
    }
}
