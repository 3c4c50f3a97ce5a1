use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ============================================================================
// SESSION - Payload returned by the backend identity endpoint (/me)
// ============================================================================

/// Authenticated session as reported by `GET /me`.
///
/// The backend only promises a JSON object. The fields the UI knows how to
/// show are typed when they hold strings. Everything else, including a known
/// key holding a number or an object, is kept untouched in `extra`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct Session {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Session {
    /// Name to greet the user with: `name`, then `user`, then `email`.
    pub fn display_name(&self) -> Option<&str> {
        [&self.name, &self.user, &self.email]
            .into_iter()
            .filter_map(|field| field.as_deref())
            .find(|value| !value.trim().is_empty())
    }

    /// Untyped fields rendered as `key: value` pairs, sorted by key.
    pub fn extra_fields(&self) -> Vec<(String, String)> {
        let mut fields: Vec<(String, String)> = self
            .extra
            .iter()
            .map(|(key, value)| {
                let text = match value {
                    Value::String(s) => s.clone(),
                    Value::Null => String::new(),
                    other => other.to_string(),
                };
                (key.clone(), text)
            })
            .collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));
        fields
    }
}

impl From<Map<String, Value>> for Session {
    fn from(mut fields: Map<String, Value>) -> Self {
        let mut take_string = |key: &str| match fields.remove(key) {
            Some(Value::String(s)) => Some(s),
            Some(Value::Null) | None => None,
            Some(other) => {
                fields.insert(key.to_string(), other);
                None
            }
        };
        let name = take_string("name");
        let email = take_string("email");
        let user = take_string("user");

        Self {
            name,
            email,
            user,
            extra: fields,
        }
    }
}

/// Error body produced by the backend on 401 (`{"detail": "Token expired"}`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ErrorDetail {
    pub detail: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_only_payload_displays_user() {
        let session: Session = serde_json::from_str(r#"{ "user": "alice" }"#).unwrap();
        assert_eq!(session.display_name(), Some("alice"));
        assert!(session.extra.is_empty());
    }

    #[test]
    fn backend_payload_prefers_name_over_email() {
        let session: Session =
            serde_json::from_str(r#"{ "name": "Alice Doe", "email": "alice@example.com" }"#).unwrap();
        assert_eq!(session.display_name(), Some("Alice Doe"));
        assert_eq!(session.email.as_deref(), Some("alice@example.com"));
    }

    #[test]
    fn blank_name_falls_through_to_email() {
        let session: Session =
            serde_json::from_str(r#"{ "name": " ", "email": "alice@example.com" }"#).unwrap();
        assert_eq!(session.display_name(), Some("alice@example.com"));
    }

    #[test]
    fn unknown_fields_are_kept_and_listed_in_order() {
        let session: Session =
            serde_json::from_str(r#"{ "user": "alice", "tenant": "acme", "admin": true }"#).unwrap();
        assert_eq!(
            session.extra_fields(),
            vec![
                ("admin".to_string(), "true".to_string()),
                ("tenant".to_string(), "acme".to_string()),
            ]
        );
    }

    #[test]
    fn non_object_payload_is_rejected() {
        assert!(serde_json::from_str::<Session>("null").is_err());
        assert!(serde_json::from_str::<Session>(r#"["alice"]"#).is_err());
    }

    #[test]
    fn non_string_known_fields_are_kept_as_extra() {
        let session: Session = serde_json::from_str(r#"{ "user": 42, "tenant": "acme" }"#).unwrap();
        assert_eq!(session.user, None);
        assert_eq!(session.extra.get("user"), Some(&Value::from(42)));
        assert_eq!(session.extra.get("tenant"), Some(&Value::from("acme")));

        let nested: Session =
            serde_json::from_str(r#"{ "user": { "id": "alice" }, "email": "alice@example.com" }"#).unwrap();
        assert_eq!(nested.user, None);
        assert_eq!(nested.display_name(), Some("alice@example.com"));
        assert_eq!(nested.extra_fields(), vec![("user".to_string(), r#"{"id":"alice"}"#.to_string())]);
    }

    #[test]
    fn null_known_fields_are_absent() {
        let session: Session = serde_json::from_str(r#"{ "name": null, "user": "alice" }"#).unwrap();
        assert_eq!(session.name, None);
        assert!(session.extra.is_empty());
        assert_eq!(session.display_name(), Some("alice"));
    }

    #[test]
    fn backend_error_detail_parses() {
        let detail: ErrorDetail = serde_json::from_str(r#"{ "detail": "Token expired" }"#).unwrap();
        assert_eq!(detail.detail, "Token expired");
    }
}
