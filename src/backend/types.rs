//! Shared types for prospects API communication

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Shown in place of a missing or empty email
pub const EMAIL_FALLBACK: &str = "N/A";

/// Candidate record as returned by the prospects API
///
/// Every field is optional and may hold any JSON value; a record with an
/// unexpected type in one field still decodes. Fields this client does not
/// know are kept in `extra`, so serializing a record gives back what the
/// API sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Prospect {
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub full_name: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub role: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub email: Option<Value>,
    /// Opaque score or label computed by the API
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub fit: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub profile_url: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub location: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub company: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub matched_skills: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Keeps an explicit `null` as `Some(Value::Null)`; absence is `None`
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Text for a display cell. Arrays are joined with "; ".
pub fn display(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| display(Some(item)))
            .collect::<Vec<_>>()
            .join("; "),
        Some(other) => other.to_string(),
    }
}

fn is_falsy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Number(n)) => n.as_f64() == Some(0.0),
        Some(_) => false,
    }
}

impl Prospect {
    pub fn name_cell(&self) -> String {
        display(self.full_name.as_ref())
    }

    pub fn role_cell(&self) -> String {
        display(self.role.as_ref())
    }

    /// Email, or "N/A" when absent or falsy
    pub fn email_cell(&self) -> String {
        if is_falsy(self.email.as_ref()) {
            EMAIL_FALLBACK.to_string()
        } else {
            display(self.email.as_ref())
        }
    }

    pub fn fit_cell(&self) -> String {
        display(self.fit.as_ref())
    }

    /// Link target; only a non-empty string counts
    pub fn profile_link(&self) -> Option<&str> {
        self.profile_url
            .as_ref()
            .and_then(Value::as_str)
            .filter(|url| !url.is_empty())
    }
}

/// The three search fields, edited one keystroke at a time
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub role: String,
    pub skills: String,
    pub location: String,
}

impl SearchQuery {
    pub fn new(role: impl Into<String>, skills: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            skills: skills.into(),
            location: location.into(),
        }
    }

    /// Query parameters in wire order; every key is always present
    pub fn pairs(&self) -> [(&'static str, &str); 3] {
        [
            ("role", self.role.as_str()),
            ("skills", self.skills.as_str()),
            ("location", self.location.as_str()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_full_record() {
        let body = r#"[{"full_name":"Ann","role":"Eng","email":"a@x.com","fit":"high","profile_url":"http://x/a"}]"#;
        let prospects: Vec<Prospect> = serde_json::from_str(body).unwrap();

        assert_eq!(prospects.len(), 1);
        let ann = &prospects[0];
        assert_eq!(ann.name_cell(), "Ann");
        assert_eq!(ann.role_cell(), "Eng");
        assert_eq!(ann.email_cell(), "a@x.com");
        assert_eq!(ann.fit_cell(), "high");
        assert_eq!(ann.profile_link(), Some("http://x/a"));
        assert!(ann.extra.is_empty());
    }

    #[test]
    fn test_missing_fields_render_empty_or_fallback() {
        let prospect: Prospect = serde_json::from_str(r#"{"role":"Eng"}"#).unwrap();

        assert_eq!(prospect.name_cell(), "");
        assert_eq!(prospect.email_cell(), "N/A");
        assert_eq!(prospect.fit_cell(), "");
        assert_eq!(prospect.profile_link(), None);
    }

    #[test]
    fn test_falsy_email_uses_fallback() {
        for email in [r#""""#, "null", "false", "0"] {
            let prospect: Prospect = serde_json::from_str(&format!(r#"{{"email":{}}}"#, email)).unwrap();
            assert_eq!(prospect.email_cell(), "N/A", "email {}", email);
        }
    }

    #[test]
    fn test_fit_is_opaque() {
        let numeric: Prospect = serde_json::from_str(r#"{"fit":0.75}"#).unwrap();
        let flag: Prospect = serde_json::from_str(r#"{"fit":true}"#).unwrap();

        assert_eq!(numeric.fit_cell(), "0.75");
        assert_eq!(flag.fit_cell(), "true");
    }

    #[test]
    fn test_unexpected_field_types_still_decode() {
        let body = r#"[{"full_name":"Ann","role":"Eng","email":"a@x.com","fit":"high","profile_url":"http://x/a",
                        "matched_skills":null,"company":{"name":"Acme"},"location":42}]"#;
        let prospects: Vec<Prospect> = serde_json::from_str(body).unwrap();

        let ann = &prospects[0];
        assert_eq!(ann.name_cell(), "Ann");
        assert_eq!(ann.email_cell(), "a@x.com");
        assert_eq!(ann.matched_skills, Some(Value::Null));
        assert_eq!(display(ann.company.as_ref()), r#"{"name":"Acme"}"#);
        assert_eq!(display(ann.location.as_ref()), "42");
    }

    #[test]
    fn test_non_string_profile_url_is_not_a_link() {
        let prospect: Prospect = serde_json::from_str(r#"{"full_name":7,"profile_url":{"href":"x"}}"#).unwrap();

        assert_eq!(prospect.name_cell(), "7");
        assert_eq!(prospect.profile_link(), None);
    }

    #[test]
    fn test_unknown_fields_are_kept() {
        let prospect: Prospect = serde_json::from_str(
            r#"{"full_name":"Bo","source":"serpapi","snippet":"...","matched_skills":["rust","go"]}"#,
        )
        .unwrap();

        assert_eq!(prospect.name_cell(), "Bo");
        assert_eq!(display(prospect.matched_skills.as_ref()), "rust; go");
        assert_eq!(prospect.extra.get("source"), Some(&json!("serpapi")));
        assert_eq!(prospect.extra.len(), 2);
    }

    #[test]
    fn test_serializes_back_to_received_record() {
        let raw = json!({"full_name": "Ann", "email": null, "source": "serpapi", "summary": "s"});
        let prospect: Prospect = serde_json::from_value(raw.clone()).unwrap();

        assert_eq!(serde_json::to_value(&prospect).unwrap(), raw);
    }

    #[test]
    fn test_query_pairs_keep_all_keys() {
        let query = SearchQuery::default();
        assert_eq!(query.pairs(), [("role", ""), ("skills", ""), ("location", "")]);
    }
}
