use std::collections::BTreeMap;

use serde_json::{Map, Value};

/// Placeholder name to replacement text, built fresh for every request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeVariables(BTreeMap<String, String>);

impl MergeVariables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Spreads every field of a caller-supplied data object into the
    /// variables, overwriting keys that already exist.
    pub fn extend_from_object(&mut self, data: &Map<String, Value>) {
        for (key, value) in data {
            self.0.insert(key.clone(), scalar_text(value));
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl<K, V> FromIterator<(K, V)> for MergeVariables
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// `null` renders as nothing; nested values keep their compact JSON form.
fn scalar_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}
