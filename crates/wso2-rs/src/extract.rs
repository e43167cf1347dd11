//! Pull single values out of vendor JSON responses.
//!
//! Paths are dot separated keys; an all-digit segment indexes an array, so
//! `Resources.0.id` reads the id of the first SCIM2 search hit.

use crate::errors::Wso2Error;
use serde_json::Value;


/// Return the value at `path` in `body` as a string.
///
/// Strings come back verbatim, numbers and booleans in their JSON text form.
/// Absent keys, null, empty strings, objects and arrays are all a
/// [`Wso2Error::MissingField`].
pub fn field(body: &str, path: &str) -> Result<String, Wso2Error> {
    let root: Value = serde_json::from_str(body)?;
    field_in(&root, path)
}


/// Same as [`field`] for an already parsed document.
pub fn field_in(root: &Value, path: &str) -> Result<String, Wso2Error> {
    let missing = || Wso2Error::MissingField(path.to_string());
    let mut cur = root;
    for segment in path.split('.').filter(|s| !s.is_empty()) {
        cur = match cur {
            Value::Array(items) => {
                let idx: usize = segment.parse().map_err(|_| missing())?;
                items.get(idx).ok_or_else(missing)?
            }
            Value::Object(map) => map.get(segment).ok_or_else(missing)?,
            _ => return Err(missing()),
        };
    }
    match cur {
        Value::String(s) if !s.is_empty() => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        _ => Err(missing()),
    }
}


/// Reject an empty value a later step would consume.
pub fn non_empty(name: &str, value: &str) -> Result<String, Wso2Error> {
    if value.trim().is_empty() {
        return Err(Wso2Error::MissingField(name.to_string()));
    }
    Ok(value.to_string())
}
