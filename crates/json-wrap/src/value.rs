//! The dynamic value tree navigated by [`Wrapper`](crate::Wrapper).
//!
//! Scalars are stored inline. Mappings and sequences sit behind a shared,
//! interior-mutable handle, so cloning a [`Value`] yields a second view onto
//! the same container rather than a copy: a write through one view is seen
//! by every other view of that container.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

/// Shared, interior-mutable container handle.
pub type Shared<T> = Rc<RefCell<T>>;

/// Mapping storage: string key to value.
pub type Map = BTreeMap<String, Value>;

/// A decoded JSON-like value.
#[derive(Debug, Clone, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    String(String),
    /// Raw bytes; read back as text by string getters.
    Bytes(Vec<u8>),
    Map(Shared<Map>),
    Seq(Shared<Vec<Value>>),
}

/// Shape classification of a [`Value`], as reported in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Null,
    Bool,
    Int,
    Uint,
    Float,
    String,
    Bytes,
    Dict,
    Array,
}

impl Kind {
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Null => "null",
            Kind::Bool => "bool",
            Kind::Int => "int",
            Kind::Uint => "uint",
            Kind::Float => "float",
            Kind::String => "string",
            Kind::Bytes => "bytes",
            Kind::Dict => "dict",
            Kind::Array => "array",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Value {
    /// A fresh, empty mapping.
    pub fn map() -> Self {
        Value::Map(Rc::new(RefCell::new(Map::new())))
    }

    /// A fresh sequence of `len` null slots.
    pub fn seq(len: usize) -> Self {
        Value::Seq(Rc::new(RefCell::new(vec![Value::Null; len])))
    }

    pub fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Bool,
            Value::Int(_) => Kind::Int,
            Value::Uint(_) => Kind::Uint,
            Value::Float(_) => Kind::Float,
            Value::String(_) => Kind::String,
            Value::Bytes(_) => Kind::Bytes,
            Value::Map(_) => Kind::Dict,
            Value::Seq(_) => Kind::Array,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_map(&self) -> bool {
        matches!(self, Value::Map(_))
    }

    pub fn is_seq(&self) -> bool {
        matches!(self, Value::Seq(_))
    }

    /// True for every leaf: anything that is not null, a mapping or a sequence.
    pub fn is_scalar(&self) -> bool {
        !matches!(self, Value::Null | Value::Map(_) | Value::Seq(_))
    }

    /// True if both values are views onto the same container.
    pub fn same_container(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Map(a), Value::Map(b)) => Rc::ptr_eq(a, b),
            (Value::Seq(a), Value::Seq(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// True if `target`'s container is `self` or reachable below it.
    pub fn contains_container(&self, target: &Value) -> bool {
        if self.same_container(target) {
            return true;
        }
        match self {
            Value::Map(m) => m.borrow().values().any(|v| v.contains_container(target)),
            Value::Seq(s) => s.borrow().iter().any(|v| v.contains_container(target)),
            _ => false,
        }
    }

    /// Copy the whole tree into fresh containers, detached from `self`.
    pub fn deep_clone(&self) -> Value {
        match self {
            Value::Map(m) => {
                let copy: Map = m
                    .borrow()
                    .iter()
                    .map(|(k, v)| (k.clone(), v.deep_clone()))
                    .collect();
                Value::Map(Rc::new(RefCell::new(copy)))
            }
            Value::Seq(s) => {
                let copy: Vec<Value> = s.borrow().iter().map(Value::deep_clone).collect();
                Value::Seq(Rc::new(RefCell::new(copy)))
            }
            other => other.clone(),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Uint(a), Value::Uint(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Bytes(a), Value::Bytes(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => Rc::ptr_eq(a, b) || *a.borrow() == *b.borrow(),
            (Value::Seq(a), Value::Seq(b)) => Rc::ptr_eq(a, b) || *a.borrow() == *b.borrow(),
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<u64> for Value {
    fn from(u: u64) -> Self {
        Value::Uint(u)
    }
}

impl From<u32> for Value {
    fn from(u: u32) -> Self {
        Value::Uint(u64::from(u))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<u8>> for Value {
    fn from(b: Vec<u8>) -> Self {
        Value::Bytes(b)
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else if let Some(u) = n.as_u64() {
                    Value::Uint(u)
                } else {
                    n.as_f64().map_or(Value::Null, Value::Float)
                }
            }
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(arr) => {
                let items: Vec<Value> = arr.into_iter().map(Value::from).collect();
                Value::Seq(Rc::new(RefCell::new(items)))
            }
            serde_json::Value::Object(obj) => {
                let map: Map = obj.into_iter().map(|(k, v)| (k, Value::from(v))).collect();
                Value::Map(Rc::new(RefCell::new(map)))
            }
        }
    }
}

impl From<&Value> for serde_json::Value {
    fn from(val: &Value) -> Self {
        match val {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Int(i) => serde_json::Value::from(*i),
            Value::Uint(u) => serde_json::Value::from(*u),
            // Non-finite floats have no JSON encoding.
            Value::Float(f) => serde_json::Number::from_f64(*f)
                .map_or(serde_json::Value::Null, serde_json::Value::Number),
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::Bytes(b) => serde_json::Value::String(String::from_utf8_lossy(b).into_owned()),
            Value::Seq(s) => {
                serde_json::Value::Array(s.borrow().iter().map(serde_json::Value::from).collect())
            }
            Value::Map(m) => serde_json::Value::Object(
                m.borrow()
                    .iter()
                    .map(|(k, v)| (k.clone(), serde_json::Value::from(v)))
                    .collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_kind_names() {
        assert_eq!(Value::Null.kind().to_string(), "null");
        assert_eq!(Value::from("x").kind().to_string(), "string");
        assert_eq!(Value::map().kind().to_string(), "dict");
        assert_eq!(Value::seq(0).kind().to_string(), "array");
        assert_eq!(Value::from(vec![1u8]).kind(), Kind::Bytes);
    }

    #[test]
    fn test_seq_is_null_filled() {
        let Value::Seq(items) = Value::seq(3) else {
            panic!("expected a sequence");
        };
        assert_eq!(items.borrow().len(), 3);
        assert!(items.borrow().iter().all(Value::is_null));
    }

    #[test]
    fn test_clone_aliases_containers() {
        let a = Value::map();
        let b = a.clone();
        assert!(a.same_container(&b));
        if let Value::Map(m) = &a {
            m.borrow_mut().insert("k".to_string(), Value::Int(1));
        }
        let Value::Map(m) = &b else {
            panic!("expected a mapping");
        };
        assert_eq!(m.borrow().get("k"), Some(&Value::Int(1)));
    }

    #[test]
    fn test_is_scalar() {
        assert!(Value::from(1i64).is_scalar());
        assert!(Value::from("s").is_scalar());
        assert!(Value::from(vec![0u8]).is_scalar());
        assert!(!Value::Null.is_scalar());
        assert!(!Value::map().is_scalar());
        assert!(!Value::seq(1).is_scalar());
    }

    #[test]
    fn test_contains_container() {
        let doc = Value::from(json!({"a": {"b": [1]}}));
        let Value::Map(m) = &doc else {
            panic!("expected a mapping");
        };
        let inner = m.borrow().get("a").cloned().unwrap();
        assert!(doc.contains_container(&doc));
        assert!(doc.contains_container(&inner));
        assert!(!inner.contains_container(&doc));
        assert!(!Value::Int(1).contains_container(&doc));
        assert!(!doc.contains_container(&Value::Int(1)));
    }

    #[test]
    fn test_deep_clone_detaches() {
        let a = Value::from(json!({"x": [1, 2]}));
        let b = a.deep_clone();
        assert!(!a.same_container(&b));
        assert_eq!(a, b);
        if let Value::Map(m) = &b {
            m.borrow_mut().insert("y".to_string(), Value::Null);
        }
        assert_ne!(a, b);
    }

    #[test]
    fn test_from_json_numbers() {
        assert_eq!(Value::from(json!(-5)), Value::Int(-5));
        assert_eq!(Value::from(json!(7)), Value::Int(7));
        assert_eq!(Value::from(json!(u64::MAX)), Value::Uint(u64::MAX));
        assert_eq!(Value::from(json!(1.5)), Value::Float(1.5));
    }

    #[test]
    fn test_to_json() {
        let doc = json!({"a": [1, "two", null, true], "b": {"c": 2.5}});
        let val = Value::from(doc.clone());
        assert_eq!(serde_json::Value::from(&val), doc);
    }

    #[test]
    fn test_to_json_lossy_leaves() {
        assert_eq!(serde_json::Value::from(&Value::Float(f64::NAN)), json!(null));
        assert_eq!(
            serde_json::Value::from(&Value::Bytes(b"hi".to_vec())),
            json!("hi")
        );
    }

    #[test]
    fn test_int_and_uint_are_distinct() {
        assert_ne!(Value::Int(1), Value::Uint(1));
        assert_ne!(Value::Int(1), Value::Float(1.0));
    }
}
