//! Access paths: the human-readable route from the root to a node.
//!
//! A path always starts with the root marker and grows by one segment per
//! navigation step, so `<root>.users[0].name` reads as "key `users`, index
//! `0`, key `name`".

use std::fmt;

/// Rendering of the root segment.
pub const ROOT_SEGMENT: &str = "<root>";

/// A single segment of an [`AccessPath`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Segment {
    /// The root marker, always the first segment.
    Root,
    /// Mapping descent: `.key`
    Key(String),
    /// Sequence descent: `[index]`
    Index(usize),
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Root => f.write_str(ROOT_SEGMENT),
            Segment::Key(k) => write!(f, ".{}", k),
            Segment::Index(i) => write!(f, "[{}]", i),
        }
    }
}

/// Ordered list of segments accumulated from the root.
///
/// Paths are values: extending one returns a new path and leaves the
/// original untouched.
///
/// # Example
///
/// ```
/// use json_wrap::AccessPath;
///
/// let path = AccessPath::root().key("users").index(0).key("name");
/// assert_eq!(path.to_string(), "<root>.users[0].name");
/// assert_eq!(path.depth(), 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AccessPath(Vec<Segment>);

impl AccessPath {
    /// A path holding only the root marker.
    pub fn root() -> Self {
        Self(vec![Segment::Root])
    }

    /// Copy of this path extended by `.name`.
    pub fn key(&self, name: impl Into<String>) -> Self {
        self.with(Segment::Key(name.into()))
    }

    /// Copy of this path extended by `[index]`.
    pub fn index(&self, index: usize) -> Self {
        self.with(Segment::Index(index))
    }

    fn with(&self, seg: Segment) -> Self {
        let mut segments = Vec::with_capacity(self.0.len() + 1);
        segments.extend_from_slice(&self.0);
        segments.push(seg);
        Self(segments)
    }

    /// All segments, root marker included.
    pub fn segments(&self) -> &[Segment] {
        &self.0
    }

    /// Number of navigation steps below the root.
    pub fn depth(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    /// Last segment of the path.
    pub fn last(&self) -> Option<&Segment> {
        self.0.last()
    }

    pub fn is_root(&self) -> bool {
        self.depth() == 0
    }
}

impl Default for AccessPath {
    fn default() -> Self {
        Self::root()
    }
}

impl fmt::Display for AccessPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for seg in &self.0 {
            write!(f, "{}", seg)?;
        }
        Ok(())
    }
}

/// One step of a dotted path, as routed by `Wrapper::at_path`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step<'a> {
    Key(&'a str),
    Index(usize),
}

/// Check if a string consists only of ASCII digits.
pub fn is_integer(s: &str) -> bool {
    if s.is_empty() {
        return false;
    }
    s.bytes().all(|b| b.is_ascii_digit())
}

/// Split a dotted path into navigation steps.
///
/// - An all-digit segment is a sequence index.
/// - Any other non-empty segment is a mapping key.
/// - An empty segment ends the list; later segments are ignored.
///
/// An all-digit segment that does not fit in `usize` is kept as a key.
///
/// # Example
///
/// ```
/// use json_wrap::path::{parse_dotted, Step};
///
/// assert_eq!(
///     parse_dotted("a.0.b"),
///     vec![Step::Key("a"), Step::Index(0), Step::Key("b")]
/// );
/// assert_eq!(parse_dotted("a..b"), vec![Step::Key("a")]);
/// assert!(parse_dotted("").is_empty());
/// ```
pub fn parse_dotted(path: &str) -> Vec<Step<'_>> {
    let mut steps = Vec::new();
    for part in path.split('.') {
        if part.is_empty() {
            break;
        }
        let step = if is_integer(part) {
            match part.parse() {
                Ok(i) => Step::Index(i),
                Err(_) => Step::Key(part),
            }
        } else {
            Step::Key(part)
        };
        steps.push(step);
    }
    steps
}
