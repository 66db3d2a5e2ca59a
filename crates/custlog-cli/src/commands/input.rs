//! Loading of rows, directories and policy from files

use std::path::Path;

use custlog_core::errors::{ExError, ExErrorKind, Result};
use custlog_core::model::value_key;
use custlog_core::{ActorDirectory, RenderPolicy, TagDirectory, TagInfo};
use serde_json::Value;

fn read_text(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| {
        ExError::new(ExErrorKind::Io)
            .with_op("read_input")
            .with_entity_id(path.display().to_string())
            .with_message(format!("Failed to read file: {}", e))
    })
}

fn read_json(path: &Path) -> Result<Value> {
    let text = read_text(path)?;
    serde_json::from_str(&text).map_err(|e| {
        ExError::from(e)
            .with_op("read_input")
            .with_entity_id(path.display().to_string())
    })
}

fn invalid(path: &Path, message: &str) -> ExError {
    ExError::new(ExErrorKind::InvalidInput)
        .with_op("read_input")
        .with_entity_id(path.display().to_string())
        .with_message(message)
}

/// Rows file: a JSON array of rows, or `{ "rows": [...] }`
pub fn load_rows(path: &Path) -> Result<Vec<Value>> {
    match read_json(path)? {
        Value::Array(rows) => Ok(rows),
        Value::Object(mut obj) => match obj.remove("rows") {
            Some(Value::Array(rows)) => Ok(rows),
            _ => Err(invalid(path, "expected an array of rows or an object with a `rows` array")),
        },
        _ => Err(invalid(path, "expected an array of rows or an object with a `rows` array")),
    }
}

/// Display name of a user record: `name`, else `firstName lastName`
fn user_name(user: &serde_json::Map<String, Value>) -> Option<String> {
    if let Some(name) = user.get("name").and_then(Value::as_str) {
        return Some(name.trim().to_string());
    }
    let part = |keys: [&str; 2]| {
        keys.iter()
            .find_map(|k| user.get(*k).and_then(Value::as_str))
            .map(str::trim)
            .filter(|s| !s.is_empty())
    };
    let parts: Vec<&str> = [part(["firstName", "first_name"]), part(["lastName", "last_name"])]
        .into_iter()
        .flatten()
        .collect();
    (!parts.is_empty()).then(|| parts.join(" "))
}

/// Actors file: `{id: name}` or an array of user records
pub fn load_actors(path: &Path) -> Result<ActorDirectory> {
    match read_json(path)? {
        Value::Object(obj) => Ok(obj
            .iter()
            .filter_map(|(id, name)| name.as_str().map(|n| (id.clone(), n.to_string())))
            .collect()),
        Value::Array(users) => Ok(users
            .iter()
            .filter_map(Value::as_object)
            .filter_map(|user| {
                let id = user.get("id").and_then(value_key)?;
                Some((id, user_name(user)?))
            })
            .collect()),
        _ => Err(invalid(path, "expected an object of id to name or an array of users")),
    }
}

/// Tags file: an array of `{id, name, type?}`
pub fn load_tags(path: &Path) -> Result<TagDirectory> {
    let Value::Array(items) = read_json(path)? else {
        return Err(invalid(path, "expected an array of tags"));
    };
    Ok(items
        .iter()
        .filter_map(Value::as_object)
        .filter_map(|tag| {
            let id = tag.get("id").and_then(value_key)?;
            let name = tag.get("name").and_then(Value::as_str)?;
            let mut info = TagInfo::new(id, name);
            info.tag_type = tag.get("type").and_then(Value::as_str).map(str::to_string);
            Some(info)
        })
        .collect())
}

/// Policy file, or the built-in policy when none is given
pub fn load_policy(path: Option<&Path>) -> Result<RenderPolicy> {
    match path {
        Some(path) => {
            let text = read_text(path)?;
            RenderPolicy::from_toml_str(&text).map_err(|e| e.with_entity_id(path.display().to_string()))
        }
        None => Ok(RenderPolicy::default()),
    }
}
