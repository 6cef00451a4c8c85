use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Key the numeric account id is stored under once a detail fetch succeeds.
pub const USER_ID_KEY: &str = "userID";

/// Shown wherever a field is absent, null, or not a scalar.
pub const PLACEHOLDER: &str = "N/A";

/// A flat, schema-less view of one account: the union of whatever the
/// upstream responses provided.
///
/// Keys keep insertion order, so rendering and CSV export follow the order
/// in which sources contributed fields. Overwriting an existing key keeps
/// its original position.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileRecord(Map<String, Value>);

impl ProfileRecord {
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Wraps a JSON value if it is an object; anything else yields `None`.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }

    /// Shallow union: every field of `other` is written over `self`.
    pub fn overlay(&mut self, other: Self) {
        for (k, v) in other.0 {
            self.0.insert(k, v);
        }
    }

    /// Scalar text of a field, `None` when absent, null, or nested.
    pub fn text(&self, key: &str) -> Option<String> {
        self.get(key).and_then(scalar_text)
    }

    /// Like [`text`](Self::text) but substitutes [`PLACEHOLDER`].
    pub fn text_or_placeholder(&self, key: &str) -> String {
        self.text(key).unwrap_or_else(|| PLACEHOLDER.to_string())
    }

    /// Loose truthiness: `false`, `0`, `""`, `null`, empty containers and
    /// missing keys are all false.
    pub fn flag(&self, key: &str) -> bool {
        self.get(key).is_some_and(is_truthy)
    }

    pub fn username(&self) -> Option<String> {
        self.text("username")
    }

    /// The numeric id, looked up under `userID`, then `pk`, then `id`.
    pub fn user_id(&self) -> Option<String> {
        [USER_ID_KEY, "pk", "id"]
            .into_iter()
            .find_map(|k| self.text(k))
    }
}

/// `true` for strings, numbers, booleans and null.
pub fn is_scalar(v: &Value) -> bool {
    !matches!(v, Value::Array(_) | Value::Object(_))
}

/// Text form of a scalar. Booleans are spelled `True` / `False`.
pub fn scalar_text(v: &Value) -> Option<String> {
    match v {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(true) => Some("True".to_string()),
        Value::Bool(false) => Some("False".to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

pub fn is_truthy(v: &Value) -> bool {
    match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}
