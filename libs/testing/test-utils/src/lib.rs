//! Shared test utilities for domain testing
//!
//! - `TestDatabase`: migrated SQL store for repository tests. In-memory
//!   SQLite is always available; a PostgreSQL container comes with the
//!   `postgres` feature.
//! - `TestDataBuilder`: Deterministic test data generation
//! - `assertions`: Custom assertion helpers
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{TestDatabase, TestDataBuilder};
//!
//! #[tokio::test]
//! async fn my_sql_test() {
//!     let db = TestDatabase::sqlite().await;
//!     let builder = TestDataBuilder::from_test_name("my_test");
//!
//!     let title = builder.title("main");
//! }
//! ```
//!
//! ## PostgreSQL Testing
//!
//! Add `features = ["postgres"]` to your dev-dependencies (requires Docker):
//!
//! ```rust,ignore
//! let db = TestDatabase::postgres().await;
//! let repo = SqlTodoRepository::new(db.connection());
//! ```

mod store;

pub use store::TestDatabase;

/// Builder for test data with deterministic randomization
///
/// Tests stay reproducible because the data is derived from a seed.
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
    /// let builder = TestDataBuilder::from_test_name("test_create_todo");
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Generate a todo title unique to this builder
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::new(7);
    /// assert_eq!(builder.title("groceries"), "todo-7-groceries");
    /// ```
    pub fn title(&self, suffix: &str) -> String {
        format!("todo-{}-{}", self.seed, suffix)
    }

    /// Generate a description that mentions the title it belongs to
    pub fn description(&self, suffix: &str) -> String {
        format!("details for {}", self.title(suffix))
    }
}

/// Test assertion helpers
pub mod assertions {
    /// Assert that ids are strictly increasing
    pub fn assert_ascending_ids(ids: &[i64], context: &str) {
        for pair in ids.windows(2) {
            assert!(
                pair[0] < pair[1],
                "{}: ids not strictly ascending: {:?}",
                context,
                ids
            );
        }
    }

    /// Assert that an optional value is Some
    pub fn assert_some<T>(value: Option<T>, context: &str) -> T {
        value.unwrap_or_else(|| panic!("{}: expected Some, got None", context))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_builder_deterministic() {
        let builder1 = TestDataBuilder::new(42);
        let builder2 = TestDataBuilder::new(42);

        assert_eq!(builder1.title("a"), builder2.title("a"));
        assert_eq!(builder1.description("a"), builder2.description("a"));
    }

    #[test]
    fn test_data_builder_different_names() {
        let builder1 = TestDataBuilder::from_test_name("test1");
        let builder2 = TestDataBuilder::from_test_name("test2");

        assert_ne!(builder1.title("x"), builder2.title("x"));
    }

    #[test]
    #[should_panic(expected = "not strictly ascending")]
    fn test_assert_ascending_ids_rejects_duplicates() {
        assertions::assert_ascending_ids(&[1, 2, 2], "dupes");
    }

    #[tokio::test]
    async fn test_sqlite_database_is_migrated() {
        use sea_orm::{ConnectionTrait, Statement};

        let db = TestDatabase::sqlite().await;
        let conn = db.connection();
        let stmt = Statement::from_string(
            conn.get_database_backend(),
            "SELECT COUNT(*) AS n FROM todos".to_owned(),
        );

        assert!(conn.query_one_raw(stmt).await.unwrap().is_some());
    }
}
