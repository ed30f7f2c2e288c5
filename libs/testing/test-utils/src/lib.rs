//! Shared test utilities for domain testing
//!
//! - `TestMongo`: MongoDB container with automatic cleanup (feature: "mongo")
//! - `TestDataBuilder`: Deterministic test data generation (always available)
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{TestDataBuilder, TestMongo};
//!
//! #[tokio::test]
//! #[ignore] // Requires Docker
//! async fn my_mongo_test() {
//!     let builder = TestDataBuilder::from_test_name("my_mongo_test");
//!     let mongo = TestMongo::new().await;
//!     let db = mongo.database(&builder.database_name());
//!
//!     let email = builder.email("main");
//! }
//! ```

#[cfg(feature = "mongo")]
mod mongo;

#[cfg(feature = "mongo")]
pub use mongo::TestMongo;

/// Builder for test data with deterministic randomization
///
/// The same seed always yields the same values, so tests are reproducible
/// while different tests do not collide on unique fields.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    /// Create a new builder with a seed (for deterministic tests)
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Create from test name (generates seed from test name hash)
    ///
    /// # Example
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("test_save_user");
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// A display name of 3 to 50 characters without surrounding whitespace.
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let name = TestDataBuilder::new(7).name("main");
    /// assert_eq!(name, "user-7-main");
    /// ```
    pub fn name(&self, suffix: &str) -> String {
        let mut name = format!("user-{}-{}", self.seed % 1_000_000, suffix);
        name.truncate(50);
        name
    }

    /// A syntactically valid email address, unique per seed and suffix.
    pub fn email(&self, suffix: &str) -> String {
        format!("user-{}-{}@example.com", self.seed, suffix)
    }

    pub fn password(&self) -> String {
        format!("secret-{}", self.seed % 10_000)
    }

    /// Database name scoped to this seed.
    pub fn database_name(&self) -> String {
        format!("test_{}", self.seed)
    }
}
