//! Typed storage for variables.
//!
//! This module provides:
//! - [`Value`], the object-safe "set from a string" capability a variable owns
//! - [`EnvValue`], implemented by every type a variable can hold
//! - [`Handle`], the shared slot handed back at registration

mod int;
mod string;

use std::fmt;
use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard};

use crate::ValueError;

/// Something that can be set from a raw environment string.
pub trait Value: fmt::Debug + Send + Sync {
    /// Replace the stored value with one parsed from `raw`.
    ///
    /// # Errors
    ///
    /// Returns a [`ValueError`] if `raw` cannot be converted; the stored
    /// value is left unchanged in that case.
    fn set(&self, raw: &str) -> Result<(), ValueError>;
}

/// A type that variables can hold.
///
/// `Display` renders the default in usage text.
pub trait EnvValue: Clone + fmt::Debug + fmt::Display + Send + Sync + 'static {
    /// Short type name used in log output.
    const KIND: &'static str;

    /// Convert a raw environment string.
    ///
    /// # Errors
    ///
    /// Returns a [`ValueError`] describing why `raw` was rejected.
    fn parse_env(raw: &str) -> Result<Self, ValueError>;
}

/// Shared handle to a registered variable's storage.
///
/// Parsing writes through the same slot the caller reads, so no copy step is
/// needed once parsing has finished. Callers can overwrite the slot with
/// [`Handle::replace`]; a later parse overwrites it again only if the
/// variable has a matching entry.
#[derive(Debug)]
pub struct Handle<T>(Arc<RwLock<T>>);

impl<T> Clone for Handle<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T> Handle<T> {
    pub(crate) fn new(value: T) -> Self {
        Self(Arc::new(RwLock::new(value)))
    }

    /// Borrow the current value.
    pub fn read(&self) -> RwLockReadGuard<'_, T> {
        self.0.read()
    }

    /// Store `value`, returning the previous one.
    pub fn replace(&self, value: T) -> T {
        std::mem::replace(&mut *self.0.write(), value)
    }

    pub(crate) fn store(&self, value: T) {
        *self.0.write() = value;
    }
}

impl<T: Clone> Handle<T> {
    /// Copy out the current value.
    #[must_use]
    pub fn get(&self) -> T {
        self.0.read().clone()
    }
}

/// [`Value`] implementation backed by a [`Handle`].
#[derive(Debug)]
pub(crate) struct TypedValue<T> {
    slot: Handle<T>,
}

impl<T: EnvValue> TypedValue<T> {
    pub(crate) fn new(default: T) -> Self {
        Self {
            slot: Handle::new(default),
        }
    }

    pub(crate) fn handle(&self) -> Handle<T> {
        self.slot.clone()
    }
}

impl<T: EnvValue> Value for TypedValue<T> {
    fn set(&self, raw: &str) -> Result<(), ValueError> {
        let parsed = T::parse_env(raw)?;
        self.slot.store(parsed);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_shares_storage() {
        let value = TypedValue::new(String::from("before"));
        let handle = value.handle();
        value.set("after").unwrap();
        assert_eq!(handle.get(), "after");
        assert_eq!(handle.read().as_str(), "after");
    }

    #[test]
    fn test_failed_set_keeps_previous_value() {
        let value = TypedValue::new(7_i32);
        let handle = value.handle();
        assert!(value.set("seven").is_err());
        assert_eq!(handle.get(), 7);
    }

    #[test]
    fn test_replace_is_visible_to_all_handles() {
        let value = TypedValue::new(String::from("default"));
        let handle = value.handle();
        let other = handle.clone();

        assert_eq!(handle.replace(String::from("override")), "default");
        assert_eq!(other.get(), "override");

        value.set("parsed").unwrap();
        assert_eq!(handle.get(), "parsed");
    }

    #[test]
    fn test_cloned_handles_see_updates() {
        let value = TypedValue::new(0_i32);
        let first = value.handle();
        let second = first.clone();
        value.set("42").unwrap();
        assert_eq!(first.get(), 42);
        assert_eq!(second.get(), 42);
    }
}
