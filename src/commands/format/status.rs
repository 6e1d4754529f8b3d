//! Status message and lookup helpers

use std::collections::HashMap;

use serde::Serialize;
use serde_json::json;
use waypath_core::error::Result;
use waypath_core::model::Route;
use waypath_core::store::Store;

/// Print a JSON status message with optional fields
///
/// # Examples
/// ```ignore
/// print_json_status("ok", Some("Store initialized"), &[("store", json!(path))])?;
/// ```
pub fn print_json_status(
    status: &str,
    message: Option<&str>,
    extra_fields: &[(&str, serde_json::Value)],
) -> Result<()> {
    let mut output = json!({ "status": status });

    if let Some(obj) = output.as_object_mut() {
        if let Some(msg) = message {
            obj.insert("message".to_string(), json!(msg));
        }
        for (key, value) in extra_fields {
            obj.insert(key.to_string(), value.clone());
        }
    }

    print_json(&output)
}

/// Pretty-print any serializable value
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Map of location id to display name
pub fn location_names(store: &Store) -> Result<HashMap<String, String>> {
    Ok(store
        .list_locations()?
        .into_iter()
        .map(|l| (l.id, l.name))
        .collect())
}

/// `From -> To` using names where known, ids otherwise
pub fn route_label(route: &Route, names: &HashMap<String, String>) -> String {
    let name = |id: &String| names.get(id).cloned().unwrap_or_else(|| id.clone());
    format!(
        "{} -> {}",
        name(&route.from_location_id),
        name(&route.to_location_id)
    )
}
