use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{TodoError, TodoResult};
use crate::models::Todo;

/// Repository trait for Todo persistence
///
/// Every call is a future; dropping it cancels the operation. How far a
/// cancelled call got depends on the implementation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Persist a new todo under a freshly assigned id and return it
    async fn create(&self, todo: Todo) -> TodoResult<Todo>;

    /// All todos, optionally only those with the given completion state,
    /// in ascending id order
    async fn find_all(&self, completed: Option<bool>) -> TodoResult<Vec<Todo>>;

    /// Get a todo by ID
    async fn find_by_id(&self, id: i64) -> TodoResult<Todo>;

    /// Replace the stored todo with the same id
    async fn update(&self, todo: Todo) -> TodoResult<Todo>;

    /// Delete a todo by ID
    async fn delete(&self, id: i64) -> TodoResult<()>;
}

#[derive(Debug)]
struct Store {
    todos: BTreeMap<i64, Todo>,
    next_id: i64,
}

impl Default for Store {
    fn default() -> Self {
        Self {
            todos: BTreeMap::new(),
            next_id: 1,
        }
    }
}

/// In-memory implementation of TodoRepository
///
/// Each instance owns its own table. Clones share it.
#[derive(Debug, Default, Clone)]
pub struct InMemoryTodoRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryTodoRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn create(&self, mut todo: Todo) -> TodoResult<Todo> {
        let mut store = self.store.write().await;

        todo.id = store.next_id;
        store.next_id += 1;
        store.todos.insert(todo.id, todo.clone());

        tracing::info!(todo_id = todo.id, "Created todo");
        Ok(todo)
    }

    async fn find_all(&self, completed: Option<bool>) -> TodoResult<Vec<Todo>> {
        let store = self.store.read().await;

        Ok(store
            .todos
            .values()
            .filter(|t| completed.is_none_or(|c| t.completed == c))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: i64) -> TodoResult<Todo> {
        let store = self.store.read().await;
        store.todos.get(&id).cloned().ok_or(TodoError::NotFound(id))
    }

    async fn update(&self, todo: Todo) -> TodoResult<Todo> {
        let mut store = self.store.write().await;

        let slot = store
            .todos
            .get_mut(&todo.id)
            .ok_or(TodoError::NotFound(todo.id))?;
        *slot = todo.clone();

        tracing::info!(todo_id = todo.id, "Updated todo");
        Ok(todo)
    }

    async fn delete(&self, id: i64) -> TodoResult<()> {
        let mut store = self.store.write().await;

        store.todos.remove(&id).ok_or(TodoError::NotFound(id))?;

        tracing::info!(todo_id = id, "Deleted todo");
        Ok(())
    }
}
