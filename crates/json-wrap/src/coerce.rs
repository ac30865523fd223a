//! Typed extraction with numeric widening and narrowing.
//!
//! | getter       | accepts                                       |
//! |--------------|-----------------------------------------------|
//! | `get_i64`    | int; float (truncated); uint up to `i64::MAX` |
//! | `get_u64`    | uint; float above zero (truncated); int >= 0  |
//! | `get_f64`    | float; int; uint                              |
//! | `get_bool`   | bool                                          |
//! | `get_string` | string; bytes (decoded as UTF-8)              |
//!
//! A wrapper that already carries an error returns it from every getter.

use crate::error::{ErrorKind, Result};
use crate::value::Value;
use crate::wrapper::Wrapper;

impl Wrapper {
    pub fn get_i64(&self) -> Result<i64> {
        match self.checked()? {
            Value::Int(i) => Ok(*i),
            // `as` truncates toward zero and saturates at the i64 bounds.
            Value::Float(f) => Ok(*f as i64),
            Value::Uint(u) => i64::try_from(*u).map_err(|_| self.raise(ErrorKind::Int64Overflow)),
            _ => Err(self.mismatch("int")),
        }
    }

    pub fn get_u64(&self) -> Result<u64> {
        match self.checked()? {
            Value::Uint(u) => Ok(*u),
            Value::Float(f) if *f > 0.0 => Ok(*f as u64),
            Value::Float(_) => Err(self.raise(ErrorKind::Uint64Underflow)),
            Value::Int(i) => u64::try_from(*i).map_err(|_| self.raise(ErrorKind::Uint64Underflow)),
            _ => Err(self.mismatch("uint")),
        }
    }

    /// [`get_i64`](Self::get_i64) narrowed to the platform width.
    pub fn get_int(&self) -> Result<isize> {
        let wide = self.get_i64()?;
        isize::try_from(wide).map_err(|_| self.raise(ErrorKind::NarrowingOverflow { target: "int" }))
    }

    /// [`get_u64`](Self::get_u64) narrowed to the platform width.
    pub fn get_uint(&self) -> Result<usize> {
        let wide = self.get_u64()?;
        usize::try_from(wide)
            .map_err(|_| self.raise(ErrorKind::NarrowingOverflow { target: "uint" }))
    }

    pub fn get_f64(&self) -> Result<f64> {
        match self.checked()? {
            Value::Float(f) => Ok(*f),
            Value::Int(i) => Ok(*i as f64),
            Value::Uint(u) => Ok(*u as f64),
            _ => Err(self.mismatch("float-like")),
        }
    }

    pub fn get_bool(&self) -> Result<bool> {
        match self.checked()? {
            Value::Bool(b) => Ok(*b),
            _ => Err(self.mismatch("bool")),
        }
    }

    /// Strings as-is; raw bytes decoded as UTF-8, invalid sequences replaced.
    pub fn get_string(&self) -> Result<String> {
        match self.checked()? {
            Value::String(s) => Ok(s.clone()),
            Value::Bytes(b) => Ok(String::from_utf8_lossy(b).into_owned()),
            _ => Err(self.mismatch("string")),
        }
    }
}
