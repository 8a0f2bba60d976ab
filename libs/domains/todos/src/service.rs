use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::TodoResult;
use crate::models::{CreateTodo, Todo, TodoFilter, UpdateTodo};
use crate::repository::TodoRepository;

/// Service layer for Todo business logic
///
/// Validates every write before it reaches the repository. Repository
/// errors pass through unchanged; nothing is retried.
pub struct TodoService<R: TodoRepository> {
    repository: Arc<R>,
}

impl<R: TodoRepository> Clone for TodoService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: TodoRepository> TodoService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new, open todo
    #[instrument(skip(self, input), fields(title_len = input.title.len()))]
    pub async fn create_todo(&self, input: CreateTodo) -> TodoResult<Todo> {
        let todo = Todo::new(input);
        todo.validate()?;

        self.repository.create(todo).await
    }

    /// List todos, optionally filtered by completion state
    #[instrument(skip(self))]
    pub async fn list_todos(&self, filter: TodoFilter) -> TodoResult<Vec<Todo>> {
        self.repository.find_all(filter.completed).await
    }

    /// Get a todo by ID
    #[instrument(skip(self))]
    pub async fn get_todo(&self, id: i64) -> TodoResult<Todo> {
        self.repository.find_by_id(id).await
    }

    /// Replace a todo's title, description and completion state
    ///
    /// The read and the write are separate repository calls, so two
    /// concurrent updates of one id resolve as last-write-wins.
    #[instrument(skip(self, input))]
    pub async fn update_todo(&self, id: i64, input: UpdateTodo) -> TodoResult<Todo> {
        let mut todo = self.repository.find_by_id(id).await?;

        todo.apply_update(input);
        todo.validate()?;

        self.repository.update(todo).await
    }

    /// Delete a todo
    #[instrument(skip(self))]
    pub async fn delete_todo(&self, id: i64) -> TodoResult<()> {
        self.repository.delete(id).await
    }
}
