use serde_json::Value;

/// Walk `path` through nested JSON objects.
///
/// Returns `None` as soon as the current value is not an object or lacks
/// the next key. A key that is present with a `null` value yields
/// `Some(&Value::Null)`, so "missing" and "null" stay distinguishable.
pub fn get_value<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    if !root.is_object() {
        return None;
    }
    path.iter()
        .try_fold(root, |current, key| current.as_object()?.get(*key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Value {
        json!({"user": {"id": 1, "first_name": "Conor", "nickname": null}})
    }

    #[test]
    fn finds_nested_values() {
        let data = sample();
        assert!(get_value(&data, &["user"]).unwrap().is_object());
        assert_eq!(get_value(&data, &["user", "id"]), Some(&json!(1)));
        assert_eq!(get_value(&data, &["user", "first_name"]), Some(&json!("Conor")));
    }

    #[test]
    fn missing_key_is_none() {
        assert_eq!(get_value(&sample(), &["user", "name"]), None);
    }

    #[test]
    fn present_null_is_found() {
        assert_eq!(get_value(&sample(), &["user", "nickname"]), Some(&Value::Null));
    }

    #[test]
    fn non_object_root_is_none() {
        assert_eq!(get_value(&json!("not-an-object"), &["user"]), None);
        assert_eq!(get_value(&Value::Null, &[]), None);
    }

    #[test]
    fn walking_through_a_scalar_is_none() {
        assert_eq!(get_value(&sample(), &["user", "first_name", "string"]), None);
    }

    #[test]
    fn empty_path_returns_object_root() {
        let data = sample();
        assert_eq!(get_value(&data, &[]), Some(&data));
    }
}
