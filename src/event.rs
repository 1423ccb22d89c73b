//! Invocation event decoding
//!
//! Accepts the contact-flow event the telephony platform sends, plus a flat
//! `{ phoneNumber, category, validating }` form for local use.

use serde_json::{Map, Value};

use crate::keypad::{DigitString, PLACEHOLDER_NUMBER};
use crate::types::DEFAULT_CATEGORY;

/// Keys accepted for the validating flag, compared case-insensitively
const VALIDATING_KEYS: &[&str] = &[
    "validating",
    "validatingCaller",
    "isValidating",
    "isValidatingCaller",
];

/// A decoded invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VanityRequest {
    /// Caller number as received; the store key
    pub phone_number: String,
    /// Trimmed, lower-cased category
    pub category: String,
    pub validating: bool,
}

impl VanityRequest {
    pub fn new(phone_number: &str, category: Option<&str>, validating: bool) -> Self {
        let phone_number = phone_number.trim();
        Self {
            phone_number: if phone_number.is_empty() {
                PLACEHOLDER_NUMBER.to_string()
            } else {
                phone_number.to_string()
            },
            category: normalize_category(category),
            validating,
        }
    }

    /// Decode an event, filling defaults for anything absent
    pub fn from_event(event: &Value) -> Self {
        let details = event.get("Details");
        let contact = details.and_then(|d| d.get("ContactData"));
        let attributes = contact.and_then(|c| c.get("Attributes")).and_then(Value::as_object);
        let parameters = details.and_then(|d| d.get("Parameters")).and_then(Value::as_object);
        let top = event.as_object();
        let scopes: Vec<&Map<String, Value>> = [attributes, parameters, top].into_iter().flatten().collect();

        let phone = parameters
            .and_then(|p| p.get("phoneNumber"))
            .and_then(text)
            .or_else(|| {
                contact
                    .and_then(|c| c.get("CustomerEndpoint"))
                    .and_then(|e| e.get("Address"))
                    .and_then(text)
            })
            .or_else(|| top.and_then(|t| t.get("phoneNumber")).and_then(text))
            .unwrap_or_else(|| PLACEHOLDER_NUMBER.to_string());

        let category = attributes
            .and_then(|a| lookup(a, &["category"]))
            .or_else(|| parameters.and_then(|p| lookup(p, &["category"])))
            .or_else(|| top.and_then(|t| lookup(t, &["category"])))
            .and_then(text);

        let validating = scopes
            .iter()
            .find_map(|scope| lookup(scope, VALIDATING_KEYS))
            .map(truthy)
            .unwrap_or(false);

        Self::new(&phone, category.as_deref(), validating)
    }

    /// Significant digits of the caller number
    pub fn digits(&self) -> DigitString {
        DigitString::from_phone(&self.phone_number)
    }
}

fn normalize_category(category: Option<&str>) -> String {
    match category.map(str::trim) {
        Some(c) if !c.is_empty() => c.to_lowercase(),
        _ => DEFAULT_CATEGORY.to_string(),
    }
}

/// First value whose key matches one of `keys`, ignoring case
fn lookup<'a>(scope: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().find_map(|key| {
        scope
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v)
    })
}

/// Strings as-is, numbers rendered; anything else is absent
fn text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::String(s) => matches!(s.trim().to_lowercase().as_str(), "true" | "yes" | "1"),
        Value::Number(n) => n.as_i64() == Some(1),
        _ => false,
    }
}
