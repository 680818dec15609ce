//! Response validation.
//!
//! Free assertion functions plus the chainable [`ResponseValidator`].

pub mod assertions;
mod validator;

pub use validator::ResponseValidator;
