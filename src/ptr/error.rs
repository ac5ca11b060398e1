use std::borrow::Cow;

use derive_more::{Display, Error};

/// The error produced when an empty checked pointer is dereferenced.
///
/// The message defaults to [`NullPointerAccess::DEFAULT_MESSAGE`], but a more specific one can be
/// provided with [`with_message`](NullPointerAccess::with_message).
#[derive(Debug, Display, Clone, PartialEq, Eq, Error)]
#[display("{message}")]
pub struct NullPointerAccess {
    message: Cow<'static, str>,
}

impl NullPointerAccess {
    /// The message used by [`NullPointerAccess::new`].
    pub const DEFAULT_MESSAGE: &'static str = "Null pointer access attempt";

    /// Creates a new NullPointerAccess with the default message.
    pub fn new() -> NullPointerAccess {
        NullPointerAccess::with_message(NullPointerAccess::DEFAULT_MESSAGE)
    }

    /// Creates a new NullPointerAccess with a custom message.
    ///
    /// # Examples
    /// ```
    /// # use ergo_std::ptr::NullPointerAccess;
    /// let error = NullPointerAccess::with_message("config wasn't loaded");
    /// assert_eq!(error.to_string(), "config wasn't loaded");
    /// ```
    pub fn with_message(message: impl Into<Cow<'static, str>>) -> NullPointerAccess {
        let message = message.into();
        log::debug!("Null pointer access: {}", message);
        NullPointerAccess { message }
    }

    /// Returns the message describing this error.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Default for NullPointerAccess {
    fn default() -> Self {
        NullPointerAccess::new()
    }
}
