//! Purpose: Defensive JSON normalization for loosely typed inputs.
//! Exports: `JsonData`, `from_json`, `from_json_as`, parse-failure categorization.
//! Role: Single seam for decoding host-supplied JSON; callers never see parse errors.
//! Invariants: `from_json` never returns JSON `null`; absent, empty or invalid input yields `{}`.
//! Invariants: Already-structured input is passed through untouched.

pub(crate) mod parse;

pub use parse::{ParseFailureCategory, categorize_error, hint_for_error};

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::debug;

/// A JSON-ish input: nothing, an encoded text, or an already decoded value.
#[derive(Clone, Debug, PartialEq)]
pub enum JsonData<T> {
    Absent,
    Text(String),
    Structured(T),
}

impl<T> Default for JsonData<T> {
    fn default() -> Self {
        JsonData::Absent
    }
}

impl<T> From<&str> for JsonData<T> {
    fn from(text: &str) -> Self {
        JsonData::Text(text.to_string())
    }
}

impl<T> From<String> for JsonData<T> {
    fn from(text: String) -> Self {
        JsonData::Text(text)
    }
}

impl<T, U: Into<JsonData<T>>> From<Option<U>> for JsonData<T> {
    fn from(input: Option<U>) -> Self {
        input.map_or(JsonData::Absent, Into::into)
    }
}

impl From<Value> for JsonData<Value> {
    fn from(value: Value) -> Self {
        JsonData::Structured(value)
    }
}

pub fn empty_object() -> Value {
    Value::Object(Map::new())
}

/// Normalize `input` into a JSON value that is never `null`.
pub fn from_json(input: impl Into<JsonData<Value>>) -> Value {
    match input.into() {
        JsonData::Structured(Value::Null) => empty_object(),
        JsonData::Structured(value) => value,
        JsonData::Absent => empty_object(),
        JsonData::Text(text) => decode_text::<Value>(&text).unwrap_or_else(empty_object),
    }
}

/// Typed variant of [`from_json`]: failures fall back to `T::default()`.
pub fn from_json_as<T: DeserializeOwned + Default>(input: JsonData<T>) -> T {
    match input {
        JsonData::Structured(value) => value,
        JsonData::Absent => T::default(),
        JsonData::Text(text) => decode_text::<T>(&text).unwrap_or_default(),
    }
}

fn decode_text<T: DeserializeOwned>(text: &str) -> Option<T> {
    if text.is_empty() {
        return None;
    }
    // `null` decodes to `None` so it takes the same fallback as an absent input.
    match parse::from_str::<Option<T>>(text) {
        Ok(value) => value,
        Err(err) => {
            debug!(
                category = categorize_error(&err).label(),
                "json input rejected; using empty fallback"
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{JsonData, empty_object, from_json, from_json_as};
    use serde::Deserialize;
    use serde_json::{Value, json};

    #[test]
    fn parses_json_text() {
        assert_eq!(from_json(r#"{"foo":"bar"}"#), json!({"foo": "bar"}));
    }

    #[test]
    fn passes_structured_value_through() {
        assert_eq!(from_json(json!({"foo": "bar"})), json!({"foo": "bar"}));
        assert_eq!(from_json(json!([1, 2])), json!([1, 2]));
    }

    #[test]
    fn invalid_text_yields_empty_object() {
        assert_eq!(from_json("not json"), empty_object());
        assert_eq!(from_json("foo"), json!({}));
        assert_eq!(from_json("   "), json!({}));
    }

    #[test]
    fn absent_and_empty_yield_empty_object() {
        assert_eq!(from_json(None::<&str>), json!({}));
        assert_eq!(from_json(JsonData::Absent), json!({}));
        assert_eq!(from_json(""), json!({}));
        assert_eq!(from_json(Value::Null), json!({}));
    }

    #[test]
    fn null_text_never_leaks_null() {
        assert_eq!(from_json("null"), json!({}));
    }

    #[test]
    fn scalar_text_is_returned_as_parsed() {
        assert_eq!(from_json("42"), json!(42));
        assert_eq!(from_json(r#""quoted""#), json!("quoted"));
    }

    #[derive(Debug, Default, Deserialize, PartialEq)]
    struct Prefs {
        theme: String,
        #[serde(default)]
        compact: bool,
    }

    #[test]
    fn typed_decode_and_fallback() {
        let prefs: Prefs = from_json_as(r#"{"theme":"dark"}"#.into());
        assert_eq!(
            prefs,
            Prefs {
                theme: "dark".to_string(),
                compact: false
            }
        );

        let fallback: Prefs = from_json_as(r#"{"compact":true}"#.into());
        assert_eq!(fallback, Prefs::default());

        let given = Prefs {
            theme: "light".to_string(),
            compact: true,
        };
        let passthrough = from_json_as(JsonData::Structured(given));
        assert_eq!(passthrough.theme, "light");
    }
}
