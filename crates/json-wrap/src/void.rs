//! Deferred error collection across a chain of extractions.
//!
//! Each `*_void` getter writes its value into a caller-owned output slot on
//! success and records its error into a shared slot only if that slot is
//! still empty. A run of such calls therefore leaves the first failure in
//! the shared slot, and every call still fills its own output when it can.
//!
//! ```
//! use json_wrap::wrap;
//! use serde_json::json;
//!
//! let doc = wrap(json!({"name": "ann", "age": "old", "admin": 1}));
//! let (mut name, mut age, mut admin) = (String::new(), 0i64, false);
//! let mut err = None;
//!
//! doc.at_key("name").get_string_void(&mut name, &mut err);
//! doc.at_key("age").get_i64_void(&mut age, &mut err);
//! doc.at_key("admin").get_bool_void(&mut admin, &mut err);
//!
//! assert_eq!(name, "ann");
//! assert_eq!(
//!     err.unwrap().to_string(),
//!     "<root>.age: type error: wanted int, got string"
//! );
//! ```

use crate::error::{Error, Result};
use crate::wrapper::Wrapper;

/// Route `result` into `out` on success, or into `slot` if it is empty.
pub fn defer<T>(result: Result<T>, out: &mut T, slot: &mut Option<Error>) {
    match result {
        Ok(v) => *out = v,
        Err(err) => {
            if slot.is_none() {
                *slot = Some(err);
            }
        }
    }
}

impl Wrapper {
    pub fn get_i64_void(&self, out: &mut i64, slot: &mut Option<Error>) {
        defer(self.get_i64(), out, slot)
    }

    pub fn get_u64_void(&self, out: &mut u64, slot: &mut Option<Error>) {
        defer(self.get_u64(), out, slot)
    }

    pub fn get_int_void(&self, out: &mut isize, slot: &mut Option<Error>) {
        defer(self.get_int(), out, slot)
    }

    pub fn get_uint_void(&self, out: &mut usize, slot: &mut Option<Error>) {
        defer(self.get_uint(), out, slot)
    }

    pub fn get_f64_void(&self, out: &mut f64, slot: &mut Option<Error>) {
        defer(self.get_f64(), out, slot)
    }

    pub fn get_bool_void(&self, out: &mut bool, slot: &mut Option<Error>) {
        defer(self.get_bool(), out, slot)
    }

    pub fn get_string_void(&self, out: &mut String, slot: &mut Option<Error>) {
        defer(self.get_string(), out, slot)
    }
}
