use std::collections::HashSet;
use std::hash::Hash;

use serde_json::Value;

use super::value::get_value;

/// Keep the first item for each distinct key, preserving order.
pub fn dedup_by<T, K, F>(items: impl IntoIterator<Item = T>, mut key: F) -> Vec<T>
where
    K: Hash + Eq,
    F: FnMut(&T) -> K,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(key(item)))
        .collect()
}

/// Drop repeated JSON values, comparing whole values or the value at
/// `key_path`.
///
/// Elements that lack the key all share one "missing" key, so only the
/// first of them survives.
pub fn deduplicate(items: &[Value], key_path: Option<&[&str]>) -> Vec<Value> {
    // serde_json objects are key-ordered, so the serialized form is canonical.
    dedup_by(items.iter().cloned(), |item| match key_path {
        Some(path) => get_value(item, path).map(Value::to_string),
        None => Some(item.to_string()),
    })
}
