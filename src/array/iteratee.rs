//! Iteratee shorthands and their normalization into key functions.
//!
//! The dynamic search helpers accept the same shorthands as lodash: a callable,
//! a property path, a `[path, value]` pair or a partial object. Every shape is
//! turned into a single [`KeyFn`] before any comparison happens.

use serde_json::Value;
use std::fmt;

/// Normalized projection. `None` stands for an undefined key.
pub type KeyFn<'a> = Box<dyn Fn(&Value) -> Option<Value> + 'a>;

/// A property name or deep path such as `a.b[0].c`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyPath {
    raw: String,
    segments: Vec<String>,
}

impl PropertyPath {
    /// # Examples
    /// ```
    /// use lodash_compat::array::iteratee::PropertyPath;
    /// let path = PropertyPath::new("a.b[0]");
    /// assert_eq!(path.segments(), ["a", "b", "0"]);
    /// ```
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let segments = parse_path(&raw);
        Self { raw, segments }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Resolve the path against `value`. A key that exists verbatim on an
    /// object wins over its deep-path reading.
    pub fn get<'v>(&self, value: &'v Value) -> Option<&'v Value> {
        if let Value::Object(map) = value {
            if let Some(found) = map.get(&self.raw) {
                return Some(found);
            }
        }
        self.segments
            .iter()
            .try_fold(value, |current, key| lookup(current, key))
    }
}

impl From<&str> for PropertyPath {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for PropertyPath {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl From<usize> for PropertyPath {
    fn from(index: usize) -> Self {
        Self::new(index.to_string())
    }
}

fn lookup<'v>(value: &'v Value, key: &str) -> Option<&'v Value> {
    match value {
        Value::Object(map) => map.get(key),
        Value::Array(items) => key.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    }
}

fn parse_path(raw: &str) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut chars = raw.chars();
    let mut after_bracket = false;

    while let Some(c) = chars.next() {
        match c {
            '.' => {
                if !after_bracket {
                    segments.push(std::mem::take(&mut current));
                }
                after_bracket = false;
            }
            '[' => {
                if !current.is_empty() {
                    segments.push(std::mem::take(&mut current));
                }
                let mut inner = String::new();
                for c in chars.by_ref() {
                    if c == ']' {
                        break;
                    }
                    inner.push(c);
                }
                segments.push(unquote(&inner).to_string());
                after_bracket = true;
            }
            _ => {
                current.push(c);
                after_bracket = false;
            }
        }
    }

    if !current.is_empty() || segments.is_empty() {
        segments.push(current);
    }
    segments
}

fn unquote(inner: &str) -> &str {
    let trimmed = inner.trim();
    for quote in ['"', '\''] {
        if trimmed.len() >= 2 && trimmed.starts_with(quote) && trimmed.ends_with(quote) {
            return &trimmed[1..trimmed.len() - 1];
        }
    }
    trimmed
}

/// Partial deep comparison used by the `matches` shorthands.
///
/// Objects match when every pattern key matches; arrays match when every
/// pattern element matches some target element; numbers compare numerically.
///
/// # Examples
/// ```
/// use lodash_compat::array::iteratee::is_match;
/// use serde_json::json;
/// assert!(is_match(&json!({"a": 1, "b": [1, 2]}), &json!({"b": [2]})));
/// assert!(!is_match(&json!({"a": 1}), &json!({"a": 2})));
/// ```
pub fn is_match(target: &Value, pattern: &Value) -> bool {
    match (target, pattern) {
        (_, Value::Object(expected)) if expected.is_empty() => true,
        (Value::Object(actual), Value::Object(expected)) => expected.iter().all(|(key, want)| {
            actual
                .get(key)
                .is_some_and(|have| is_match(have, want))
        }),
        (Value::Array(actual), Value::Array(expected)) => expected
            .iter()
            .all(|want| actual.iter().any(|have| is_match(have, want))),
        (Value::Number(a), Value::Number(b)) => a.as_f64() == b.as_f64(),
        _ => target == pattern,
    }
}

/// The shapes accepted as a projection.
pub enum Iteratee<'a> {
    Identity,
    Function(KeyFn<'a>),
    Property(PropertyPath),
    MatchesProperty(PropertyPath, Value),
    Matches(Value),
}

impl<'a> Iteratee<'a> {
    pub fn function<F>(f: F) -> Self
    where
        F: Fn(&Value) -> Option<Value> + 'a,
    {
        Iteratee::Function(Box::new(f))
    }

    pub fn property(path: impl Into<PropertyPath>) -> Self {
        Iteratee::Property(path.into())
    }

    pub fn matches_property(path: impl Into<PropertyPath>, value: Value) -> Self {
        Iteratee::MatchesProperty(path.into(), value)
    }

    pub fn matches(pattern: Value) -> Self {
        Iteratee::Matches(pattern)
    }

    /// Collapse the shorthand into a uniform key extractor.
    pub fn into_key_fn(self) -> KeyFn<'a> {
        log::trace!("normalizing iteratee {:?}", self);
        match self {
            Iteratee::Identity => Box::new(|value: &Value| Some(value.clone())),
            Iteratee::Function(f) => f,
            Iteratee::Property(path) => Box::new(move |value: &Value| path.get(value).cloned()),
            Iteratee::MatchesProperty(path, expected) => Box::new(move |value: &Value| {
                let matched = path
                    .get(value)
                    .is_some_and(|actual| is_match(actual, &expected));
                Some(Value::Bool(matched))
            }),
            Iteratee::Matches(pattern) => {
                Box::new(move |value: &Value| Some(Value::Bool(is_match(value, &pattern))))
            }
        }
    }
}

impl fmt::Debug for Iteratee<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Iteratee::Identity => f.write_str("Identity"),
            Iteratee::Function(_) => f.write_str("Function(..)"),
            Iteratee::Property(path) => f.debug_tuple("Property").field(&path.as_str()).finish(),
            Iteratee::MatchesProperty(path, value) => f
                .debug_tuple("MatchesProperty")
                .field(&path.as_str())
                .field(value)
                .finish(),
            Iteratee::Matches(pattern) => f.debug_tuple("Matches").field(pattern).finish(),
        }
    }
}

impl Default for Iteratee<'_> {
    fn default() -> Self {
        Iteratee::Identity
    }
}

impl From<&str> for Iteratee<'_> {
    fn from(path: &str) -> Self {
        Iteratee::property(path)
    }
}

impl From<String> for Iteratee<'_> {
    fn from(path: String) -> Self {
        Iteratee::property(path)
    }
}

impl From<usize> for Iteratee<'_> {
    fn from(index: usize) -> Self {
        Iteratee::property(index)
    }
}

impl From<PropertyPath> for Iteratee<'_> {
    fn from(path: PropertyPath) -> Self {
        Iteratee::Property(path)
    }
}

impl<P: Into<PropertyPath>> From<(P, Value)> for Iteratee<'_> {
    fn from((path, value): (P, Value)) -> Self {
        Iteratee::matches_property(path, value)
    }
}

/// JSON shorthands: `null` is identity, strings and numbers are property
/// paths, arrays are `[path, value]` pairs and objects are partial patterns.
impl From<Value> for Iteratee<'_> {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Iteratee::Identity,
            Value::String(path) => Iteratee::property(path),
            Value::Number(n) => Iteratee::property(n.to_string()),
            Value::Bool(b) => Iteratee::property(b.to_string()),
            Value::Object(_) => Iteratee::Matches(value),
            Value::Array(mut pair) => {
                let expected = if pair.len() > 1 {
                    pair.swap_remove(1)
                } else {
                    Value::Null
                };
                match pair.first() {
                    Some(Value::String(path)) => Iteratee::matches_property(path.as_str(), expected),
                    Some(Value::Number(n)) => Iteratee::matches_property(n.to_string(), expected),
                    other => {
                        log::trace!("unrecognized iteratee pair head {:?}, using identity", other);
                        Iteratee::Identity
                    }
                }
            }
        }
    }
}

impl<'a> From<Option<Value>> for Iteratee<'a> {
    fn from(value: Option<Value>) -> Self {
        value.map(Iteratee::from).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_path() {
        assert_eq!(PropertyPath::new("a").segments(), ["a"]);
        assert_eq!(PropertyPath::new("a.b.c").segments(), ["a", "b", "c"]);
        assert_eq!(PropertyPath::new("a[0].b").segments(), ["a", "0", "b"]);
        assert_eq!(PropertyPath::new("a[\"b.c\"]").segments(), ["a", "b.c"]);
        assert_eq!(PropertyPath::new("").segments(), [""]);
    }

    #[test]
    fn test_property_get_prefers_verbatim_key() {
        let value = json!({"a.b": 1, "a": {"b": 2}});
        assert_eq!(PropertyPath::new("a.b").get(&value), Some(&json!(1)));

        let value = json!({"a": {"b": 2}});
        assert_eq!(PropertyPath::new("a.b").get(&value), Some(&json!(2)));
    }

    #[test]
    fn test_property_get_array_index() {
        let value = json!({"list": [10, 20, 30]});
        assert_eq!(PropertyPath::new("list[1]").get(&value), Some(&json!(20)));
        assert_eq!(PropertyPath::from(2).get(&json!([1, 2, 3])), Some(&json!(3)));
        assert_eq!(PropertyPath::new("list[9]").get(&value), None);
        assert_eq!(PropertyPath::new("x").get(&json!(5)), None);
    }

    #[test]
    fn test_is_match_partial_objects() {
        let target = json!({"a": 1, "b": {"c": 2, "d": 3}});
        assert!(is_match(&target, &json!({"b": {"c": 2}})));
        assert!(is_match(&target, &json!({})));
        assert!(is_match(&json!(null), &json!({})));
        assert!(!is_match(&target, &json!({"e": 1})));
        assert!(!is_match(&json!(1), &json!({"a": 1})));
    }

    #[test]
    fn test_is_match_numbers_and_arrays() {
        assert!(is_match(&json!(1.0), &json!(1)));
        assert!(is_match(&json!([1, 2, 3]), &json!([3, 1])));
        assert!(!is_match(&json!([1, 2]), &json!([4])));
    }

    #[test]
    fn test_key_fn_shapes() {
        let element = json!({"x": 4, "tags": ["a", "b"]});

        let key = Iteratee::from("x").into_key_fn();
        assert_eq!(key(&element), Some(json!(4)));

        let key = Iteratee::from(("x", json!(4))).into_key_fn();
        assert_eq!(key(&element), Some(json!(true)));

        let key = Iteratee::matches(json!({"tags": ["b"]})).into_key_fn();
        assert_eq!(key(&element), Some(json!(true)));

        let key = Iteratee::function(|v| v.get("x").map(|x| json!(x.as_i64().unwrap_or(0) * 2)))
            .into_key_fn();
        assert_eq!(key(&element), Some(json!(8)));

        let key = Iteratee::Identity.into_key_fn();
        assert_eq!(key(&element), Some(element.clone()));

        let key = Iteratee::from("missing").into_key_fn();
        assert_eq!(key(&element), None);
    }

    #[test]
    fn test_from_json_shorthands() {
        assert!(matches!(Iteratee::from(json!(null)), Iteratee::Identity));
        assert!(matches!(Iteratee::from(json!("x")), Iteratee::Property(_)));
        assert!(matches!(Iteratee::from(json!(0)), Iteratee::Property(_)));
        assert!(matches!(Iteratee::from(json!({"x": 1})), Iteratee::Matches(_)));
        assert!(matches!(
            Iteratee::from(json!(["x", 1])),
            Iteratee::MatchesProperty(_, Value::Number(_))
        ));
        assert!(matches!(Iteratee::from(json!([])), Iteratee::Identity));
        assert!(matches!(Iteratee::from(None::<Value>), Iteratee::Identity));
    }
}
