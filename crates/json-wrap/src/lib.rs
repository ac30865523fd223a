//! Navigation and coercion over decoded JSON-like trees.
//!
//! A [`Wrapper`] is a handle onto one node of a [`Value`] tree. It walks
//! down by key, index or dotted path, reads leaves as typed Rust values
//! with fixed numeric coercion rules, writes children back, and remembers
//! where in the tree the first error happened.
//!
//! # Example
//!
//! ```
//! use json_wrap::{wrap, Wrapper};
//! use serde_json::json;
//!
//! let doc = wrap(json!({"servers": [{"host": "a", "port": 8080}]}));
//!
//! let port = doc.at_path("servers.0.port").get_u64().unwrap();
//! assert_eq!(port, 8080);
//!
//! // Errors name the route that produced them.
//! let err = doc.at_path("servers.3.port").get_u64().unwrap_err();
//! assert_eq!(err.to_string(), "<root>.servers: index out of bounds 3 >= 1");
//!
//! // Writes through any handle are visible through every other.
//! let server = doc.at_key("servers").at_index(0);
//! server.set_key("tls", &Wrapper::new_bool(true)).unwrap();
//! assert!(doc.at_path("servers.0.tls").get_bool().unwrap());
//! ```
//!
//! Handles share containers through `Rc`, so a tree and its wrappers stay
//! on one thread.

pub mod coerce;
pub mod error;
pub mod path;
pub mod value;
pub mod void;
pub mod wrapper;

pub use error::{Error, ErrorKind, Result};
pub use path::{AccessPath, Segment, ROOT_SEGMENT};
pub use value::{Kind, Map, Shared, Value};
pub use void::defer;
pub use wrapper::{wrap, Wrapper};
