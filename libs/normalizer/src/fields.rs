use serde_json::{Map, Value};
use tracing::debug;

/// A raw payload being taken apart.
///
/// Every key a canonical field is read from is removed, whether or not its
/// value turned out to be usable. Whatever is left at the end is passed
/// through untouched.
#[derive(Debug, Default)]
pub(crate) struct Fields(Map<String, Value>);

impl Fields {
    pub(crate) fn new(raw: Value, entity: &str) -> Self {
        match raw {
            Value::Object(map) => Self(map),
            Value::Null => Self::default(),
            other => {
                debug!(
                    task = "normalize",
                    entity,
                    kind = json_kind(&other),
                    "payload is not an object"
                );
                Self::default()
            }
        }
    }

    /// Removes all `keys` and returns the first value `read` accepts, trying
    /// keys in the given order.
    pub(crate) fn take<T>(
        &mut self,
        keys: &[&str],
        read: impl Fn(&Value) -> Option<T>,
    ) -> Option<T> {
        keys.iter()
            .filter_map(|key| self.0.remove(*key))
            .fold(None, |found, value| found.or_else(|| read(&value)))
    }

    /// Like [`Fields::take`], but values `read` rejects stay in the payload
    /// so they are passed through.
    pub(crate) fn take_or_keep<T>(
        &mut self,
        keys: &[&str],
        read: impl Fn(&Value) -> Option<T>,
    ) -> Option<T> {
        let mut found = None;
        for key in keys {
            let Some(value) = self.0.remove(*key) else {
                continue;
            };
            match read(&value) {
                Some(parsed) => {
                    found = found.or(Some(parsed));
                }
                None => {
                    self.0.insert(key.to_string(), value);
                }
            }
        }
        found
    }

    /// Removes all `keys` and returns the first value that is present and
    /// not `null`.
    pub(crate) fn take_value(&mut self, keys: &[&str]) -> Option<Value> {
        self.take_owned(keys, |value| (!value.is_null()).then_some(value))
    }

    pub(crate) fn take_text(&mut self, keys: &[&str]) -> Option<String> {
        self.take(keys, text)
    }

    pub(crate) fn take_owned<T>(
        &mut self,
        keys: &[&str],
        read: impl Fn(Value) -> Option<T>,
    ) -> Option<T> {
        keys.iter()
            .filter_map(|key| self.0.remove(*key))
            .fold(None, |found, value| found.or_else(|| read(value)))
    }

    pub(crate) fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key)
    }

    pub(crate) fn insert(&mut self, key: &str, value: Value) {
        self.0.insert(key.to_string(), value);
    }

    pub(crate) fn into_extra(self) -> Map<String, Value> {
        self.0
    }
}

/// Strings as they are; numbers and booleans in their JSON spelling.
pub(crate) fn text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
