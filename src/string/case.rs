//! Case conversion: kebab-case, snake_case, camelCase and friends.
//!
//! All converters share one pipeline: coerce the input to text, deburr it,
//! split it into [`words`](super::words), drop contraction apostrophes and
//! fold the words into the result with a per-style callback. The folded
//! result is deburred again, since case mapping can produce letters the
//! first pass never saw (`ẞ` lowercases to `ß`).

use super::deburr::deburr;
use super::to_text::ToText;
use super::words::{strip_apostrophes, words};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported output styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseStyle {
    Kebab,
    Snake,
    Lower,
    Upper,
    Camel,
    Start,
}

impl CaseStyle {
    pub fn convert<T: ToText + ?Sized>(self, input: &T) -> String {
        match self {
            CaseStyle::Kebab => kebab_case(input),
            CaseStyle::Snake => snake_case(input),
            CaseStyle::Lower => lower_case(input),
            CaseStyle::Upper => upper_case(input),
            CaseStyle::Camel => camel_case(input),
            CaseStyle::Start => start_case(input),
        }
    }
}

impl fmt::Display for CaseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CaseStyle::Kebab => "kebab",
            CaseStyle::Snake => "snake",
            CaseStyle::Lower => "lower",
            CaseStyle::Upper => "upper",
            CaseStyle::Camel => "camel",
            CaseStyle::Start => "start",
        };
        f.write_str(name)
    }
}

fn compound<T, F>(input: &T, mut callback: F) -> String
where
    T: ToText + ?Sized,
    F: FnMut(String, &str, usize) -> String,
{
    let text = deburr(&input.to_text());
    let folded = words(text.as_str())
        .iter()
        .map(|word| strip_apostrophes(word))
        .enumerate()
        .fold(String::new(), |result, (index, word)| {
            callback(result, &word, index)
        });
    deburr(&folded)
}

fn joined(mut result: String, separator: &str, word: &str, index: usize) -> String {
    if index > 0 {
        result.push_str(separator);
    }
    result.push_str(word);
    result
}

fn upper_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Convert to kebab-case.
///
/// # Examples
/// ```
/// use lodash_compat::string::kebab_case;
/// assert_eq!(kebab_case("Foo Bar"), "foo-bar");
/// assert_eq!(kebab_case("fooBar"), "foo-bar");
/// assert_eq!(kebab_case("__FOO_BAR__"), "foo-bar");
/// ```
pub fn kebab_case<T: ToText + ?Sized>(input: &T) -> String {
    compound(input, |result, word, index| {
        joined(result, "-", &word.to_lowercase(), index)
    })
}

/// Convert to snake_case.
pub fn snake_case<T: ToText + ?Sized>(input: &T) -> String {
    compound(input, |result, word, index| {
        joined(result, "_", &word.to_lowercase(), index)
    })
}

/// Convert to space separated lower case.
pub fn lower_case<T: ToText + ?Sized>(input: &T) -> String {
    compound(input, |result, word, index| {
        joined(result, " ", &word.to_lowercase(), index)
    })
}

/// Convert to space separated upper case.
pub fn upper_case<T: ToText + ?Sized>(input: &T) -> String {
    compound(input, |result, word, index| {
        joined(result, " ", &word.to_uppercase(), index)
    })
}

/// Convert to camelCase.
///
/// # Examples
/// ```
/// use lodash_compat::string::camel_case;
/// assert_eq!(camel_case("--foo-bar--"), "fooBar");
/// ```
pub fn camel_case<T: ToText + ?Sized>(input: &T) -> String {
    compound(input, |mut result, word, index| {
        let word = word.to_lowercase();
        if index == 0 {
            result.push_str(&word);
        } else {
            result.push_str(&upper_first(&word));
        }
        result
    })
}

/// Convert to Start Case, capitalizing the first letter of each word.
pub fn start_case<T: ToText + ?Sized>(input: &T) -> String {
    compound(input, |result, word, index| {
        joined(result, " ", &upper_first(word), index)
    })
}
