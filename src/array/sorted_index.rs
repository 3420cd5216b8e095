//! Binary search for insertion points in sorted sequences.
//!
//! Every search here runs the same loop: narrow `[low, high)` until it is
//! empty, asking a single predicate whether the middle element belongs before
//! the target. The "first" variants insert before equal keys, the "last"
//! variants after them.

use super::iteratee::Iteratee;
use serde_json::Value;
use std::cmp::Ordering;

/// Largest length of a lodash array.
pub const MAX_ARRAY_LENGTH: usize = 4_294_967_295;
/// Largest index ever returned by the searches.
pub const MAX_ARRAY_INDEX: usize = MAX_ARRAY_LENGTH - 1;

fn search<T>(array: Option<&[T]>, mut belongs_before: impl FnMut(&T) -> bool) -> usize {
    let array = array.unwrap_or(&[]);
    let mut low = 0;
    let mut high = array.len();

    while low < high {
        let mid = low + (high - low) / 2;
        if belongs_before(&array[mid]) {
            low = mid + 1;
        } else {
            high = mid;
        }
    }

    high.min(MAX_ARRAY_INDEX)
}

// NaN-like keys fail `partial_cmp` against themselves.
fn is_reflexive<K: PartialOrd + ?Sized>(key: &K) -> bool {
    key.partial_cmp(key).is_some()
}

fn key_belongs_before<K: PartialOrd + ?Sized>(
    computed: &K,
    target: &K,
    target_is_nan: bool,
    retain_highest: bool,
) -> bool {
    if target_is_nan {
        retain_highest || is_reflexive(computed)
    } else if retain_highest {
        computed <= target
    } else {
        computed < target
    }
}

/// Shared implementation of [`sorted_index_by`] and [`sorted_last_index_by`].
pub fn base_sorted_index_by<T, K, F>(
    array: Option<&[T]>,
    value: &T,
    iteratee: F,
    retain_highest: bool,
) -> usize
where
    F: Fn(&T) -> K,
    K: PartialOrd,
{
    let target = iteratee(value);
    let target_is_nan = !is_reflexive(&target);
    search(array, |element| {
        key_belongs_before(&iteratee(element), &target, target_is_nan, retain_highest)
    })
}

/// Lowest index at which `value` can be inserted to keep `array` sorted.
///
/// # Examples
/// ```
/// use lodash_compat::array::sorted_index;
/// assert_eq!(sorted_index(Some(&[30, 50][..]), &40), 1);
/// assert_eq!(sorted_index::<i32>(None, &40), 0);
/// ```
pub fn sorted_index<T: PartialOrd>(array: Option<&[T]>, value: &T) -> usize {
    let target_is_nan = !is_reflexive(value);
    search(array, |element| {
        key_belongs_before(element, value, target_is_nan, false)
    })
}

/// Highest index at which `value` can be inserted to keep `array` sorted.
///
/// # Examples
/// ```
/// use lodash_compat::array::sorted_last_index;
/// assert_eq!(sorted_last_index(Some(&[4, 5, 5, 5, 6][..]), &5), 4);
/// ```
pub fn sorted_last_index<T: PartialOrd>(array: Option<&[T]>, value: &T) -> usize {
    let target_is_nan = !is_reflexive(value);
    search(array, |element| {
        key_belongs_before(element, value, target_is_nan, true)
    })
}

/// Like [`sorted_index`], ranking `value` and each element by `iteratee`.
pub fn sorted_index_by<T, K, F>(array: Option<&[T]>, value: &T, iteratee: F) -> usize
where
    F: Fn(&T) -> K,
    K: PartialOrd,
{
    base_sorted_index_by(array, value, iteratee, false)
}

/// Like [`sorted_last_index`], ranking `value` and each element by `iteratee`.
///
/// # Examples
/// ```
/// use lodash_compat::array::sorted_last_index_by;
/// struct Point { n: i32 }
/// let objects = [Point { n: 4 }, Point { n: 5 }];
/// assert_eq!(sorted_last_index_by(Some(&objects[..]), &Point { n: 4 }, |p| p.n), 1);
/// ```
pub fn sorted_last_index_by<T, K, F>(array: Option<&[T]>, value: &T, iteratee: F) -> usize
where
    F: Fn(&T) -> K,
    K: PartialOrd,
{
    base_sorted_index_by(array, value, iteratee, true)
}

/// Position of an element equal to `value` in sorted `array`, searching from the left.
pub fn sorted_index_of<T: PartialOrd>(array: &[T], value: &T) -> Option<usize> {
    let index = sorted_index(Some(array), value);
    array
        .get(index)
        .filter(|&element| same_value_zero(element, value))
        .map(|_| index)
}

/// Position of an element equal to `value` in sorted `array`, searching from the right.
pub fn sorted_last_index_of<T: PartialOrd>(array: &[T], value: &T) -> Option<usize> {
    let index = sorted_last_index(Some(array), value).checked_sub(1)?;
    array
        .get(index)
        .filter(|&element| same_value_zero(element, value))
        .map(|_| index)
}

fn same_value_zero<T: PartialOrd>(a: &T, b: &T) -> bool {
    a == b || (!is_reflexive(a) && !is_reflexive(b))
}

/// Ranking of a dynamic key. `Undefined` sorts after `Null`, which sorts
/// after every comparable value.
#[derive(Debug, Clone, PartialEq)]
enum SortKey {
    Comparable(Value),
    Null,
    Undefined,
}

impl From<Option<Value>> for SortKey {
    fn from(key: Option<Value>) -> Self {
        match key {
            None => SortKey::Undefined,
            Some(Value::Null) => SortKey::Null,
            Some(value) => SortKey::Comparable(value),
        }
    }
}

impl SortKey {
    fn belongs_before(computed: &SortKey, target: &SortKey, retain_highest: bool) -> bool {
        match (target, computed) {
            (SortKey::Undefined, computed) => {
                retain_highest || !matches!(computed, SortKey::Undefined)
            }
            (SortKey::Null, SortKey::Undefined) => false,
            (SortKey::Null, SortKey::Null) => retain_highest,
            (SortKey::Null, SortKey::Comparable(_)) => true,
            (SortKey::Comparable(_), SortKey::Null | SortKey::Undefined) => false,
            (SortKey::Comparable(target), SortKey::Comparable(computed)) => {
                match js_compare(computed, target) {
                    Some(Ordering::Less) => true,
                    Some(Ordering::Equal) => retain_highest,
                    _ => false,
                }
            }
        }
    }
}

/// Relational comparison with JavaScript's coercions: strings against
/// strings by UTF-16 code units, everything else numerically.
fn js_compare(a: &Value, b: &Value) -> Option<Ordering> {
    if let (Value::String(a), Value::String(b)) = (a, b) {
        return Some(a.encode_utf16().cmp(b.encode_utf16()));
    }
    to_number(a)?.partial_cmp(&to_number(b)?)
}

fn to_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Null => Some(0.0),
        Value::String(s) => string_to_number(s.trim()),
        Value::Array(_) | Value::Object(_) => None,
    }
}

/// `Number(text)` for already trimmed text; `None` where JavaScript yields NaN.
fn string_to_number(text: &str) -> Option<f64> {
    match text {
        "" => return Some(0.0),
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }
    for (prefixes, base) in [(["0x", "0X"], 16), (["0o", "0O"], 8), (["0b", "0B"], 2)] {
        if let Some(digits) = prefixes.iter().find_map(|p| text.strip_prefix(*p)) {
            if digits.starts_with('+') {
                return None;
            }
            return u128::from_str_radix(digits, base).ok().map(|n| n as f64);
        }
    }
    // Rust also accepts "inf", "infinity" and "nan", JavaScript does not.
    if text.bytes().any(|b| matches!(b, b'i' | b'I' | b'n' | b'N')) {
        return None;
    }
    text.parse::<f64>().ok()
}

/// Shared implementation of the dynamic searches over JSON values.
pub fn base_sorted_index_by_iteratee<'a>(
    array: Option<&[Value]>,
    value: &Value,
    iteratee: impl Into<Iteratee<'a>>,
    retain_highest: bool,
) -> usize {
    let key = iteratee.into().into_key_fn();
    let target = SortKey::from(key(value));
    search(array, |element| {
        SortKey::belongs_before(&SortKey::from(key(element)), &target, retain_highest)
    })
}

/// Lowest insertion index for `value` in `array`, ranked by an [`Iteratee`] shorthand.
///
/// # Examples
/// ```
/// use lodash_compat::array::sorted_index_by_iteratee;
/// use serde_json::json;
/// let objects = [json!({"x": 4}), json!({"x": 5})];
/// assert_eq!(sorted_index_by_iteratee(Some(&objects[..]), &json!({"x": 4}), "x"), 0);
/// ```
pub fn sorted_index_by_iteratee<'a>(
    array: Option<&[Value]>,
    value: &Value,
    iteratee: impl Into<Iteratee<'a>>,
) -> usize {
    base_sorted_index_by_iteratee(array, value, iteratee, false)
}

/// Highest insertion index for `value` in `array`, ranked by an [`Iteratee`] shorthand.
///
/// # Examples
/// ```
/// use lodash_compat::array::sorted_last_index_by_iteratee;
/// use serde_json::json;
/// let objects = [json!({"x": 4}), json!({"x": 5})];
/// assert_eq!(sorted_last_index_by_iteratee(Some(&objects[..]), &json!({"x": 4}), "x"), 1);
/// ```
pub fn sorted_last_index_by_iteratee<'a>(
    array: Option<&[Value]>,
    value: &Value,
    iteratee: impl Into<Iteratee<'a>>,
) -> usize {
    base_sorted_index_by_iteratee(array, value, iteratee, true)
}
