//! # lodash-compat
//!
//! Rust implementations of lodash's sorted-index searches and string case
//! converters, with the same edge-case behavior for absent and odd input.
//!
//! ```rust
//! use lodash_compat::array::sorted_last_index_by_iteratee;
//! use lodash_compat::string::kebab_case;
//! use serde_json::json;
//!
//! let objects = [json!({"x": 4}), json!({"x": 5})];
//! assert_eq!(sorted_last_index_by_iteratee(Some(&objects[..]), &json!({"x": 4}), "x"), 1);
//! assert_eq!(kebab_case("fooBar"), "foo-bar");
//! ```

pub use error::AppError;

/// Library layers
pub mod array; // Sorted-index searches and iteratees
pub mod string; // Text coercion and case conversion

/// Command-line front end
pub mod cli; // Argument parsing and dispatch
pub mod storage; // Configuration persistence

/// Support modules
pub mod error; // Error handling
pub mod utils; // Logging setup

pub type Result<T> = std::result::Result<T, AppError>;
