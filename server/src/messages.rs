//! Default-locale messages for error responses.
//!
//! Localized lookup happens outside this service; these are the strings the
//! API ships with. Handlers reference them by constant so every endpoint
//! reports the same wording for the same condition.

/// Top-level message when body validation fails.
pub const INSUFFICIENT_REQUEST: &str = "The request data is incomplete or invalid";

/// Top-level message when the referenced todo item cannot be found.
pub const RESOURCE_NOT_FOUND: &str = "The requested todo item could not be found";

/// Field-level message for the title rule.
pub const NOT_VALID_TITLE: &str = "A non-empty title is required";
