// ═══════════════════════════════════════════════════════════════════════
// Helpers
// ═══════════════════════════════════════════════════════════════════════
mod record_tests {
    use crate::array::UtilityArray;
    use crate::error::ArrayError;
    use crate::record;
    use crate::record::{Fields, Record};
    use crate::value::Value;
    use serde_json::json;
    use std::sync::Arc;

    fn make_user() -> Record {
        record! {
            "id" => 1i64,
            "name" => "Alice",
            "age" => 30i64,
            "active" => true,
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Construction
    // ═══════════════════════════════════════════════════════════════════════

    #[test]
    fn test_macro_builds_fields() {
        let user = make_user();
        assert_eq!(user.len(), 4);
        assert_eq!(user.get("name").and_then(Value::as_str), Some("Alice"));
        assert_eq!(user.get("age").and_then(Value::as_i64), Some(30));
        assert!(user.get("missing").is_none());
        assert!(record!().is_empty());
    }

    #[test]
    fn test_nested_record_becomes_object() {
        let user = record! { "profile" => record! { "bio" => "Developer" } };
        assert_eq!(
            user.get("profile").and_then(|p| p.get("bio")).and_then(Value::as_str),
            Some("Developer")
        );
    }

    #[test]
    fn test_from_json_object() {
        let user = Record::try_from(json!({ "id": 1, "name": "Alice" })).unwrap();
        assert_eq!(user, record! { "id" => 1i64, "name" => "Alice" });
        assert_eq!(serde_json::Value::from(user.clone()), json!({ "id": 1, "name": "Alice" }));
        assert_eq!(serde_json::to_string(&user).unwrap(), r#"{"id":1,"name":"Alice"}"#);
    }

    #[test]
    fn test_from_json_rejects_non_object() {
        assert_eq!(Record::try_from(json!([1, 2])), Err(ArrayError::NotAnObject));
        assert_eq!(Record::try_from(json!(3)), Err(ArrayError::NotAnObject));
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Projection
    // ═══════════════════════════════════════════════════════════════════════

    #[test]
    fn test_pick_keeps_only_listed_fields() {
        let picked = make_user().pick(&["id", "name"]);
        assert_eq!(picked, record! { "id" => 1i64, "name" => "Alice" });
    }

    #[test]
    fn test_pick_skips_absent_fields() {
        let picked = make_user().pick(&["id", "email"]);
        assert_eq!(picked, record! { "id" => 1i64 });
        assert!(make_user().pick::<&str>(&[]).is_empty());
    }

    #[test]
    fn test_project_shares_composite_fields() {
        let tags = Value::from(vec![Value::from("rust")]);
        let user = record! { "id" => 1i64, "tags" => tags.clone() };
        let projected = Fields::project(&user, &["tags"]);
        assert!(projected.get("tags").unwrap().strict_eq(&tags));
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Pattern matching
    // ═══════════════════════════════════════════════════════════════════════

    #[test]
    fn test_matches_when_all_pattern_fields_equal() {
        let user = make_user();
        assert!(user.matches(&record! { "id" => 1i64 }));
        assert!(user.matches(&record! { "id" => 1i64, "name" => "Alice" }));
    }

    #[test]
    fn test_rejects_on_single_differing_field() {
        let user = make_user();
        assert!(!user.matches(&record! { "id" => 1i64, "name" => "Bob" }));
        assert!(!user.matches(&record! { "id" => 2i64 }));
    }

    #[test]
    fn test_rejects_on_absent_field() {
        let user = make_user();
        assert!(!user.matches(&record! { "email" => "a@b.c" }));
        assert!(!user.matches(&record! { "email" => Value::Null }));
    }

    #[test]
    fn test_empty_pattern_matches_anything() {
        assert!(make_user().matches(&Record::new()));
        assert!(Record::new().matches(&Record::new()));
    }

    #[test]
    fn test_matches_through_smart_pointers() {
        let shared = Arc::new(make_user());
        let pattern = record! { "active" => true };
        assert!(shared.matches(&pattern));
        assert!((&shared).matches(&pattern));
        assert_eq!(shared.field("id").and_then(Value::as_i64), Some(1));
    }

    #[test]
    fn test_value_objects_expose_fields() {
        let value = Value::from(make_user());
        assert!(value.matches(&record! { "name" => "Alice" }));
        assert!(Value::from(3i64).field("name").is_none());
        assert!(!Value::from(3i64).matches(&record! { "name" => "Alice" }));
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Custom element types
    // ═══════════════════════════════════════════════════════════════════════

    /// A caller-defined row that only exposes two fields.
    struct Employee {
        id: Value,
        team: Value,
        salary: u32,
    }

    impl Employee {
        fn new(id: i64, team: &str, salary: u32) -> Self {
            Self {
                id: Value::from(id),
                team: Value::from(team),
                salary,
            }
        }
    }

    impl Fields for Employee {
        fn field(&self, key: &str) -> Option<&Value> {
            match key {
                "id" => Some(&self.id),
                "team" => Some(&self.team),
                _ => None,
            }
        }
    }

    fn make_staff() -> UtilityArray<Employee> {
        vec![
            Employee::new(1, "core", 100),
            Employee::new(2, "infra", 200),
            Employee::new(3, "core", 300),
        ]
        .into()
    }

    #[test]
    fn test_custom_type_find_by() {
        let staff = make_staff();
        assert_eq!(staff.find_by("team", "infra").map(|e| e.salary), Some(200));
        assert_eq!(staff.find_index_by("id", 3i64), Some(2));
        assert!(staff.find_by("salary", 100i64).is_none());
    }

    #[test]
    fn test_custom_type_pattern_queries() {
        let mut staff = make_staff();
        let pattern = record! { "team" => "core", "id" => 3i64 };
        assert_eq!(staff.find_where(&pattern).map(|e| e.salary), Some(300));
        assert_eq!(staff.remove_where(&record! { "team" => "core" }).map(|e| e.salary), Some(100));
        assert_eq!(staff.len(), 2);
    }

    #[test]
    fn test_custom_type_extract_map() {
        let projected = make_staff().extract_map(&["id", "salary"]);
        assert_eq!(
            projected.as_slice(),
            &[record! { "id" => 1i64 }, record! { "id" => 2i64 }, record! { "id" => 3i64 }]
        );
    }
}
