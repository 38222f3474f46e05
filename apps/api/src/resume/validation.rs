use serde_json::{Map, Value};

/// Outcome of a required-field check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldCheck {
    pub ok: bool,
    pub message: String,
}

/// Checks that `submitted` contains every field named in `required`.
///
/// The message lists the missing field names in `required` order, joined by
/// ", " and prefixed with "Missing required fields: ". A key that is present
/// counts regardless of its value's type; type errors belong to the
/// deserialization step, not here.
pub fn validate_required_fields(required: &[&str], submitted: &Map<String, Value>) -> FieldCheck {
    let missing: Vec<&str> = required
        .iter()
        .copied()
        .filter(|field| !submitted.contains_key(*field))
        .collect();

    if missing.is_empty() {
        FieldCheck {
            ok: true,
            message: String::new(),
        }
    } else {
        FieldCheck {
            ok: false,
            message: format!("Missing required fields: {}", missing.join(", ")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn test_all_fields_present() {
        let submitted = object(json!({
            "name": "Python",
            "proficiency": "1-2 Years",
            "logo": "example-logo.png"
        }));
        let check = validate_required_fields(&["name", "proficiency", "logo"], &submitted);
        assert!(check.ok);
        assert_eq!(check.message, "");
    }

    #[test]
    fn test_one_missing_field() {
        let submitted = object(json!({ "name": "Python", "logo": "example-logo.png" }));
        let check = validate_required_fields(&["name", "proficiency", "logo"], &submitted);
        assert!(!check.ok);
        assert_eq!(check.message, "Missing required fields: proficiency");
    }

    #[test]
    fn test_multiple_missing_fields_keep_required_order() {
        let submitted = object(json!({ "company": "A Cool Company" }));
        let check = validate_required_fields(
            &["title", "company", "start_date", "end_date", "description", "logo"],
            &submitted,
        );
        assert!(!check.ok);
        assert_eq!(
            check.message,
            "Missing required fields: title, start_date, end_date, description, logo"
        );
    }

    #[test]
    fn test_empty_object_misses_everything() {
        let check = validate_required_fields(&["name", "proficiency", "logo"], &Map::new());
        assert!(!check.ok);
        assert_eq!(check.message, "Missing required fields: name, proficiency, logo");
    }

    #[test]
    fn test_no_required_fields() {
        let check = validate_required_fields(&[], &Map::new());
        assert!(check.ok);
    }

    #[test]
    fn test_null_value_counts_as_present() {
        let submitted = object(json!({ "name": null, "proficiency": "1-2 Years", "logo": "x" }));
        let check = validate_required_fields(&["name", "proficiency", "logo"], &submitted);
        assert!(check.ok);
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let submitted = object(json!({
            "name": "Python",
            "proficiency": "1-2 Years",
            "logo": "example-logo.png",
            "years": 3
        }));
        let check = validate_required_fields(&["name", "proficiency", "logo"], &submitted);
        assert!(check.ok);
    }
}
