//! String helpers - text coercion, deburring, word splitting and case conversion

/// Case converters built on a shared word pipeline
pub mod case;

/// Latin letter folding
pub mod deburr;

/// Coercion of arbitrary values to text
pub mod to_text;

/// Word splitting
pub mod words;

pub use case::{CaseStyle, camel_case, kebab_case, lower_case, snake_case, start_case, upper_case};
pub use deburr::deburr;
pub use to_text::ToText;
pub use words::words;

/// Coerce any supported value to text; absent values become `""`.
///
/// # Examples
/// ```
/// use lodash_compat::string::to_text;
/// assert_eq!(to_text(&Some(12_u32)), "12");
/// assert_eq!(to_text(&None::<String>), "");
/// ```
pub fn to_text<T: ToText + ?Sized>(value: &T) -> String {
    value.to_text()
}
