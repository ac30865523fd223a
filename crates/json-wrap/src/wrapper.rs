//! The navigable handle: construction, navigation and mutation.

use tracing::{debug, trace};

use crate::error::{Error, ErrorKind, Result};
use crate::path::{parse_dotted, AccessPath, Step};
use crate::value::{Map, Shared, Value};

/// A view onto one node of a [`Value`] tree.
///
/// A wrapper carries the node, the path that led to it, and the first error
/// met along that path. Navigation never mutates the wrapper it is called
/// on. Once an error is recorded it is handed down unchanged to every
/// wrapper derived from this one, while the path keeps growing so the final
/// message shows the whole attempted route.
///
/// # Example
///
/// ```
/// use json_wrap::wrap;
/// use serde_json::json;
///
/// let doc = wrap(json!({"uno": 1, "tres": "three"}));
/// assert_eq!(doc.at_key("uno").get_i64().unwrap(), 1);
///
/// let err = doc.at_key("tres").get_i64().unwrap_err();
/// assert_eq!(err.to_string(), "<root>.tres: type error: wanted int, got string");
/// ```
#[derive(Debug, Clone)]
pub struct Wrapper {
    value: Value,
    error: Option<Error>,
    path: AccessPath,
}

/// Wrap any value as a root.
pub fn wrap(value: impl Into<Value>) -> Wrapper {
    Wrapper::new(value)
}

impl Wrapper {
    /// Wrap `value` as a root: path `<root>`, no error.
    pub fn new(value: impl Into<Value>) -> Self {
        Wrapper {
            value: value.into(),
            error: None,
            path: AccessPath::root(),
        }
    }

    pub fn new_map() -> Self {
        Self::new(Value::map())
    }

    /// A sequence of `len` null slots.
    pub fn new_seq(len: usize) -> Self {
        Self::new(Value::seq(len))
    }

    pub fn new_null() -> Self {
        Self::new(Value::Null)
    }

    pub fn new_int(i: i64) -> Self {
        Self::new(Value::Int(i))
    }

    pub fn new_uint(u: u64) -> Self {
        Self::new(Value::Uint(u))
    }

    pub fn new_float(f: f64) -> Self {
        Self::new(Value::Float(f))
    }

    pub fn new_string(s: impl Into<String>) -> Self {
        Self::new(Value::String(s.into()))
    }

    pub fn new_bool(b: bool) -> Self {
        Self::new(Value::Bool(b))
    }

    pub fn new_bytes(b: impl Into<Vec<u8>>) -> Self {
        Self::new(Value::Bytes(b.into()))
    }

    /// A standalone carrier for `error`, disconnected from any tree.
    fn failed(error: Error, path: AccessPath) -> Self {
        Wrapper {
            value: Value::Null,
            error: Some(error),
            path,
        }
    }

    /// Build a new error located at this node.
    pub(crate) fn raise(&self, kind: ErrorKind) -> Error {
        let err = Error::new(self.path.clone(), kind);
        trace!(path = %self.path, error = %err, "wrapper error recorded");
        err
    }

    pub(crate) fn mismatch(&self, want: &'static str) -> Error {
        self.raise(ErrorKind::TypeMismatch {
            want,
            got: self.value.kind(),
        })
    }

    /// The node's value, or the carried error.
    pub(crate) fn checked(&self) -> Result<&Value> {
        match &self.error {
            Some(err) => Err(err.clone()),
            None => Ok(&self.value),
        }
    }

    fn as_map(&self) -> Result<&Shared<Map>> {
        match self.checked()? {
            Value::Map(map) => Ok(map),
            _ => Err(self.mismatch("dict")),
        }
    }

    fn as_seq(&self) -> Result<&Shared<Vec<Value>>> {
        match self.checked()? {
            Value::Seq(seq) => Ok(seq),
            _ => Err(self.mismatch("array")),
        }
    }

    /// Same node, same error, longer path.
    fn carry(&self, path: AccessPath) -> Option<Self> {
        self.error.as_ref().map(|err| Wrapper {
            value: self.value.clone(),
            error: Some(err.clone()),
            path,
        })
    }

    /// Descend into a mapping by key.
    ///
    /// A missing key is not an error here: the child holds null, and the
    /// getter eventually applied to it reports the type mismatch.
    pub fn at_key(&self, name: &str) -> Wrapper {
        let path = self.path.key(name);
        if let Some(carried) = self.carry(path.clone()) {
            return carried;
        }
        match self.as_map() {
            Ok(map) => {
                let value = map.borrow().get(name).cloned().unwrap_or_default();
                Wrapper {
                    value,
                    error: None,
                    path,
                }
            }
            Err(err) => Self::failed(err, path),
        }
    }

    /// Descend into a sequence by position; valid indices are `0..len`.
    pub fn at_index(&self, index: usize) -> Wrapper {
        let path = self.path.index(index);
        if let Some(carried) = self.carry(path.clone()) {
            return carried;
        }
        let seq = match self.as_seq() {
            Ok(seq) => seq,
            Err(err) => return Self::failed(err, path),
        };
        let items = seq.borrow();
        match items.get(index) {
            Some(value) => Wrapper {
                value: value.clone(),
                error: None,
                path,
            },
            None => {
                let err = self.raise(ErrorKind::IndexOutOfBounds {
                    index,
                    len: items.len(),
                });
                Self::failed(err, path)
            }
        }
    }

    /// Follow a dotted path such as `users.0.name`.
    ///
    /// All-digit segments are indices, other segments are keys, and an empty
    /// segment ends the walk. The walk also stops, returning the wrapper
    /// reached so far, once the current node is null or carries an error.
    pub fn at_path(&self, path: &str) -> Wrapper {
        let mut current = self.clone();
        for step in parse_dotted(path) {
            if current.error.is_some() || current.value.is_null() {
                break;
            }
            // Digit runs too long for `usize` arrive here as keys.
            current = match step {
                Step::Key(name) => current.at_key(name),
                Step::Index(index) => current.at_index(index),
            };
        }
        current
    }

    /// Number of elements of a sequence node.
    pub fn len(&self) -> Result<usize> {
        Ok(self.as_seq()?.borrow().len())
    }

    /// Keys of a mapping node. Do not rely on their order.
    pub fn keys(&self) -> Result<Vec<String>> {
        Ok(self.as_map()?.borrow().keys().cloned().collect())
    }

    /// True if the node is null. The error state is not consulted.
    pub fn is_nil(&self) -> bool {
        self.value.is_null()
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    pub fn error(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    pub fn path(&self) -> &AccessPath {
        &self.path
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn into_value(self) -> Value {
        self.value
    }

    /// Encode the node (and everything below it) as a `serde_json` tree.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::Value::from(&self.value)
    }

    /// Refuse a write that would make this container reachable from itself.
    fn check_acyclic(&self, child: &Wrapper) -> Result<()> {
        if child.value.contains_container(&self.value) {
            return Err(self.raise(ErrorKind::CyclicInsert));
        }
        Ok(())
    }

    /// Store `child`'s value under `name`, replacing any existing entry.
    ///
    /// Only the child's value is taken; its error and path are ignored.
    /// Every wrapper viewing this mapping observes the write.
    pub fn set_key(&self, name: impl Into<String>, child: &Wrapper) -> Result<()> {
        let map = self.as_map()?;
        self.check_acyclic(child)?;
        let name = name.into();
        debug!(path = %self.path, key = %name, "set key");
        map.borrow_mut().insert(name, child.value.clone());
        Ok(())
    }

    /// Overwrite position `index` of a sequence with `child`'s value.
    ///
    /// Out-of-range writes fail without touching the sequence.
    pub fn set_index(&self, index: usize, child: &Wrapper) -> Result<()> {
        let seq = self.as_seq()?;
        self.check_acyclic(child)?;
        let value = child.value.clone();
        let mut items = seq.borrow_mut();
        let len = items.len();
        match items.get_mut(index) {
            Some(slot) => {
                debug!(path = %self.path, index, "set index");
                *slot = value;
                Ok(())
            }
            None => Err(self.raise(ErrorKind::IndexOutOfBounds { index, len })),
        }
    }

    /// Append `child`'s value to a sequence.
    pub fn push(&self, child: &Wrapper) -> Result<()> {
        let seq = self.as_seq()?;
        self.check_acyclic(child)?;
        let value = child.value.clone();
        let mut items = seq.borrow_mut();
        debug!(path = %self.path, index = items.len(), "push");
        items.push(value);
        Ok(())
    }
}

impl Default for Wrapper {
    fn default() -> Self {
        Self::new_null()
    }
}

impl From<Value> for Wrapper {
    fn from(value: Value) -> Self {
        Self::new(value)
    }
}

impl From<serde_json::Value> for Wrapper {
    fn from(json: serde_json::Value) -> Self {
        Self::new(json)
    }
}
