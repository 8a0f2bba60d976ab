//! Todos Domain
//!
//! Todo items with a pluggable persistence layer.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP transport (axum), OpenAPI docs
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Validation, timestamps
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Trait + in-memory and SQL implementations
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Todo entity, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_todos::{CreateTodo, InMemoryTodoRepository, TodoService};
//!
//! # async fn example() -> Result<(), domain_todos::TodoError> {
//! let service = TodoService::new(InMemoryTodoRepository::new());
//! let todo = service
//!     .create_todo(CreateTodo {
//!         title: "Buy milk".to_string(),
//!         description: None,
//!     })
//!     .await?;
//! assert!(!todo.completed);
//! # Ok(())
//! # }
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;
pub mod sql;

pub use error::{TodoError, TodoResult};
pub use handlers::ApiDoc;
pub use models::{CreateTodo, Todo, TodoFilter, UpdateTodo};
pub use repository::{InMemoryTodoRepository, TodoRepository};
pub use service::TodoService;
pub use sql::SqlTodoRepository;
