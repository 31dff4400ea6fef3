//! Parameter values and bound parameter records.

use std::borrow::Cow;

use serde::Serialize;

/// One axis value: a tagged scalar rather than a dynamic property bag, so
/// suites can match exhaustively on what they bound.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl ParamValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ParamValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            ParamValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            ParamValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ParamValue::Text(v) => Some(v),
            _ => None,
        }
    }
}

impl std::fmt::Display for ParamValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParamValue::Bool(v) => write!(f, "{v}"),
            ParamValue::Int(v) => write!(f, "{v}"),
            ParamValue::Float(v) => write!(f, "{v}"),
            ParamValue::Text(v) => write!(f, "{v}"),
        }
    }
}

impl From<bool> for ParamValue {
    fn from(v: bool) -> Self {
        ParamValue::Bool(v)
    }
}

impl From<i64> for ParamValue {
    fn from(v: i64) -> Self {
        ParamValue::Int(v)
    }
}

impl From<i32> for ParamValue {
    fn from(v: i32) -> Self {
        ParamValue::Int(v as i64)
    }
}

impl From<usize> for ParamValue {
    fn from(v: usize) -> Self {
        ParamValue::Int(v as i64)
    }
}

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        ParamValue::Float(v)
    }
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        ParamValue::Text(v.to_owned())
    }
}

impl From<String> for ParamValue {
    fn from(v: String) -> Self {
        ParamValue::Text(v)
    }
}

/// A fully or partially bound parameter record: an ordered mapping from
/// axis name to value.
///
/// Insertion order is the axis definition order, which makes the `Display`
/// rendering a stable case identifier.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct TestParams {
    entries: Vec<(Cow<'static, str>, ParamValue)>,
}

impl TestParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind an axis. Binding the same name twice in one record is a
    /// definition-time error.
    pub fn insert(&mut self, name: impl Into<Cow<'static, str>>, value: impl Into<ParamValue>) {
        let name = name.into();
        assert!(
            self.get(&name).is_none(),
            "axis '{name}' is already bound in this record"
        );
        self.entries.push((name, value.into()));
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// Typed accessors; a missing axis or wrong type is a suite bug and
    /// panics with the axis name.
    pub fn bool(&self, name: &str) -> bool {
        self.expect(name).as_bool().unwrap_or_else(|| {
            panic!("axis '{name}' is not a bool")
        })
    }

    pub fn int(&self, name: &str) -> i64 {
        self.expect(name)
            .as_int()
            .unwrap_or_else(|| panic!("axis '{name}' is not an int"))
    }

    pub fn float(&self, name: &str) -> f64 {
        self.expect(name)
            .as_float()
            .unwrap_or_else(|| panic!("axis '{name}' is not a float"))
    }

    pub fn text(&self, name: &str) -> &str {
        self.expect(name)
            .as_text()
            .unwrap_or_else(|| panic!("axis '{name}' is not text"))
    }

    fn expect(&self, name: &str) -> &ParamValue {
        self.get(name)
            .unwrap_or_else(|| panic!("axis '{name}' is not bound"))
    }

    /// A new record holding this record's bindings followed by `other`'s.
    /// Used to present case + subcase bindings as one record; a name bound
    /// at both levels is a definition-time error.
    pub fn merged(&self, other: &TestParams) -> TestParams {
        let mut out = self.clone();
        for (name, value) in &other.entries {
            out.insert(name.clone(), value.clone());
        }
        out
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(n, v)| (n.as_ref(), v))
    }
}

impl std::fmt::Display for TestParams {
    /// Stable `name=value;name=value` rendering, usable as a case id.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, (name, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, ";")?;
            }
            write!(f, "{name}={value}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut p = TestParams::new();
        p.insert("format", "rgba8unorm");
        p.insert("samples", 4);
        assert_eq!(p.text("format"), "rgba8unorm");
        assert_eq!(p.int("samples"), 4);
        assert!(p.get("missing").is_none());
    }

    #[test]
    #[should_panic(expected = "already bound")]
    fn test_duplicate_axis_panics() {
        let mut p = TestParams::new();
        p.insert("x", 1);
        p.insert("x", 2);
    }

    #[test]
    #[should_panic(expected = "already bound")]
    fn test_merged_collision_panics() {
        let mut a = TestParams::new();
        a.insert("x", 1);
        let mut b = TestParams::new();
        b.insert("x", 2);
        let _ = a.merged(&b);
    }

    #[test]
    fn test_display_is_ordered() {
        let mut p = TestParams::new();
        p.insert("b", 2);
        p.insert("a", true);
        assert_eq!(p.to_string(), "b=2;a=true");
    }
}
