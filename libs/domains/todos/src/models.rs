use chrono::{DateTime, SubsecRound, Utc};
use serde::de::{self, Deserializer, Unexpected};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

/// Titles must contain something other than whitespace.
fn validate_title(title: &str) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("title must not be empty".into()));
    }
    Ok(())
}

/// Query flag spellings: `1 t T true TRUE True` and their false
/// counterparts. An empty value means no filter.
fn deserialize_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref() {
        None | Some("") => Ok(None),
        Some("1" | "t" | "T" | "true" | "TRUE" | "True") => Ok(Some(true)),
        Some("0" | "f" | "F" | "false" | "FALSE" | "False") => Ok(Some(false)),
        Some(other) => Err(de::Error::invalid_value(
            Unexpected::Str(other),
            &"a boolean (1, t, true, 0, f, false)",
        )),
    }
}

/// Current time at the resolution every store can hold (microseconds).
pub(crate) fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

/// Todo entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct Todo {
    /// Server-assigned identifier, positive and never reused
    pub id: i64,
    #[validate(custom(function = "validate_title"))]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// DTO for creating a new todo
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateTodo {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// DTO for replacing a todo's mutable fields
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateTodo {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub completed: bool,
}

/// Query filters for listing todos
#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TodoFilter {
    /// Only todos with this completion state
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub completed: Option<bool>,
}

impl Todo {
    /// Build an unsaved todo; the repository assigns the id.
    pub fn new(input: CreateTodo) -> Self {
        let now = now();
        Self {
            id: 0,
            title: input.title,
            description: input.description,
            completed: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrite the mutable fields and refresh `updated_at`.
    pub fn apply_update(&mut self, update: UpdateTodo) {
        self.title = update.title;
        self.description = update.description;
        self.completed = update.completed;
        self.updated_at = now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo(title: &str) -> Todo {
        Todo::new(CreateTodo {
            title: title.to_string(),
            description: None,
        })
    }

    #[test]
    fn test_new_todo_is_open_with_equal_timestamps() {
        let t = todo("Write report");
        assert!(!t.completed);
        assert_eq!(t.created_at, t.updated_at);
        assert_eq!(t.created_at.timestamp_subsec_nanos() % 1_000, 0);
    }

    #[test]
    fn test_blank_titles_are_rejected() {
        for title in ["", "   ", "\t\n"] {
            let errors = todo(title).validate().unwrap_err();
            assert!(errors.field_errors().contains_key("title"), "{title:?}");
        }
        assert!(todo(" x ").validate().is_ok());
    }

    #[test]
    fn test_apply_update_replaces_fields() {
        let mut t = todo("Draft");
        let created = t.created_at;
        t.apply_update(UpdateTodo {
            title: "Final".to_string(),
            description: Some("ship it".to_string()),
            completed: true,
        });

        assert_eq!(t.title, "Final");
        assert_eq!(t.description.as_deref(), Some("ship it"));
        assert!(t.completed);
        assert_eq!(t.created_at, created);
        assert!(t.updated_at >= created);
    }

    fn filter(query: serde_json::Value) -> Result<TodoFilter, serde_json::Error> {
        serde_json::from_value(query)
    }

    #[test]
    fn test_filter_accepts_flag_spellings() {
        for raw in ["1", "t", "T", "true", "TRUE", "True"] {
            let parsed = filter(serde_json::json!({ "completed": raw })).unwrap();
            assert_eq!(parsed.completed, Some(true), "{raw:?}");
        }
        for raw in ["0", "f", "F", "false", "FALSE", "False"] {
            let parsed = filter(serde_json::json!({ "completed": raw })).unwrap();
            assert_eq!(parsed.completed, Some(false), "{raw:?}");
        }
    }

    #[test]
    fn test_filter_empty_or_missing_means_all() {
        assert_eq!(filter(serde_json::json!({ "completed": "" })).unwrap().completed, None);
        assert_eq!(filter(serde_json::json!({})).unwrap().completed, None);
    }

    #[test]
    fn test_filter_rejects_other_words() {
        for raw in ["yes", "maybe", "tRuE", " 1"] {
            assert!(filter(serde_json::json!({ "completed": raw })).is_err(), "{raw:?}");
        }
    }

    #[test]
    fn test_description_omitted_when_absent() {
        let json = serde_json::to_value(todo("Plain")).unwrap();
        assert!(json.get("description").is_none());
        assert_eq!(json["completed"], false);
    }
}
