use json_value::{JsonConvertible, JsonInterpolatable, Value};

#[derive(Debug, PartialEq)]
struct UserId(u32);

impl JsonInterpolatable for UserId {
    type Core = u32;

    fn to_core(&self) -> u32 {
        self.0
    }

    fn from_core(core: u32) -> Option<Self> {
        Some(UserId(core))
    }
}

#[derive(Debug, PartialEq)]
struct User {
    id: UserId,
    name: String,
    email: Option<String>,
}

impl JsonConvertible for User {
    fn to_json(&self) -> Value {
        Value::object([
            ("id", self.id.to_json()),
            ("name", self.name.to_json()),
            ("email", self.email.to_json()),
        ])
    }

    fn from_json(value: &Value) -> Option<Self> {
        Some(User {
            id: value.get_as("id")?,
            name: value.get_as("name")?,
            email: value.get_as("email").unwrap_or(None),
        })
    }
}

#[test]
fn test_user_type_round_trips_through_text() {
    let user = User {
        id: UserId(7),
        name: "ada".to_string(),
        email: None,
    };
    let text = user.to_json().encode().unwrap();
    assert_eq!(text, r#"{"email":null,"id":7,"name":"ada"}"#);
    assert_eq!(User::from_json(&Value::decode(&text).unwrap()), Some(user));
}

#[test]
fn test_list_of_user_types_is_all_or_nothing() {
    let doc = Value::decode(
        r#"{"users": [{"id": 1, "name": "a"}, {"id": 2.5, "name": "b"}]}"#,
    )
    .unwrap();
    assert_eq!(doc.get_as::<Vec<User>, _>("users"), None);

    let doc = Value::decode(r#"{"users": [{"id": 1, "name": "a", "email": "a@x"}]}"#).unwrap();
    assert_eq!(
        doc.get_as::<Vec<User>, _>("users"),
        Some(vec![User {
            id: UserId(1),
            name: "a".to_string(),
            email: Some("a@x".to_string()),
        }])
    );
}

#[test]
fn test_mixed_array_rejected_as_numbers() {
    let doc = Value::decode(r#"{"xs": [1, "oops", 3]}"#).unwrap();
    assert_eq!(doc.get_as::<Vec<f64>, _>("xs"), None);
    assert_eq!(doc.get("xs").and_then(|xs| xs.get_as::<f64, _>(0)), Some(1.0));
}

#[test]
fn test_null_converts_to_absence_for_optionals() {
    let doc = Value::decode(r#"{"a": null, "b": 1, "c": "1"}"#).unwrap();
    assert_eq!(doc.get_as::<Option<f64>, _>("a"), Some(None));
    assert_eq!(doc.get_as::<Option<bool>, _>("a"), Some(None));
    assert_eq!(doc.get_as::<Option<f64>, _>("b"), Some(Some(1.0)));
    assert_eq!(doc.get_as::<Option<f64>, _>("c"), None);
    assert_eq!(doc.get_as::<Option<f64>, _>("missing"), None);
}

#[test]
fn test_lookup_miss_and_conversion_failure_look_the_same() {
    let doc = Value::decode(r#"{"n": "not a number"}"#).unwrap();
    assert_eq!(doc.get_as::<f64, _>("n"), doc.get_as::<f64, _>("absent"));
}
