use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};

use crate::entity::{self, Column, Entity as TodoEntity};
use crate::error::{TodoError, TodoResult};
use crate::models::Todo;
use crate::repository::TodoRepository;

/// SeaORM-backed implementation of TodoRepository
///
/// Works with any backend SeaORM is built for (SQLite, PostgreSQL). The
/// `todos` table must exist; run the `migration` crate's `Migrator` first.
/// Dropping a call's future aborts the in-flight query.
#[derive(Clone)]
pub struct SqlTodoRepository {
    db: DatabaseConnection,
}

impl SqlTodoRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TodoRepository for SqlTodoRepository {
    async fn create(&self, todo: Todo) -> TodoResult<Todo> {
        let model = entity::ActiveModel::from_todo(todo)
            .insert(&self.db)
            .await?;

        tracing::info!(todo_id = model.id, "Created todo");
        Ok(model.into())
    }

    async fn find_all(&self, completed: Option<bool>) -> TodoResult<Vec<Todo>> {
        let mut query = TodoEntity::find();

        if let Some(completed) = completed {
            query = query.filter(Column::Completed.eq(completed));
        }

        let models = query.order_by_asc(Column::Id).all(&self.db).await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: i64) -> TodoResult<Todo> {
        TodoEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .map(Into::into)
            .ok_or(TodoError::NotFound(id))
    }

    async fn update(&self, todo: Todo) -> TodoResult<Todo> {
        let id = todo.id;

        let result = TodoEntity::update_many()
            .set(entity::ActiveModel::from_todo(todo.clone()))
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(TodoError::NotFound(id));
        }

        tracing::info!(todo_id = id, "Updated todo");
        Ok(todo)
    }

    async fn delete(&self, id: i64) -> TodoResult<()> {
        let result = TodoEntity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(TodoError::NotFound(id));
        }

        tracing::info!(todo_id = id, "Deleted todo");
        Ok(())
    }
}
