use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;

use crate::models::Todo;

/// Sea-ORM Entity for the todos table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "todos")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_type = "Text")]
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub completed: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Todo {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            description: model.description,
            completed: model.completed,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl ActiveModel {
    /// Column values for a todo. The id stays unset: the database assigns
    /// it on insert, and updates select the row by filter.
    pub fn from_todo(todo: Todo) -> Self {
        Self {
            id: NotSet,
            title: Set(todo.title),
            description: Set(todo.description),
            completed: Set(todo.completed),
            created_at: Set(todo.created_at),
            updated_at: Set(todo.updated_at),
        }
    }
}
