//! Coercion of arbitrary values to text.
//!
//! Every string helper accepts `&T where T: ToText`, so callers can pass
//! `&str`, numbers, `Option`s or JSON values and get lodash's `toString`
//! rendering. Absent values become the empty string.

use serde_json::Value;

pub trait ToText {
    fn to_text(&self) -> String;
}

impl ToText for str {
    fn to_text(&self) -> String {
        self.to_string()
    }
}

impl ToText for String {
    fn to_text(&self) -> String {
        self.clone()
    }
}

impl ToText for char {
    fn to_text(&self) -> String {
        self.to_string()
    }
}

impl ToText for bool {
    fn to_text(&self) -> String {
        self.to_string()
    }
}

impl<T: ToText + ?Sized> ToText for &T {
    fn to_text(&self) -> String {
        (**self).to_text()
    }
}

impl<T: ToText> ToText for Option<T> {
    fn to_text(&self) -> String {
        self.as_ref().map(ToText::to_text).unwrap_or_default()
    }
}

impl<T: ToText> ToText for [T] {
    fn to_text(&self) -> String {
        self.iter()
            .map(ToText::to_text)
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl<T: ToText> ToText for Vec<T> {
    fn to_text(&self) -> String {
        self.as_slice().to_text()
    }
}

macro_rules! integer_to_text {
    ($($ty:ty),*) => {
        $(
            impl ToText for $ty {
                fn to_text(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

integer_to_text!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl ToText for f64 {
    fn to_text(&self) -> String {
        number_to_text(*self)
    }
}

impl ToText for f32 {
    fn to_text(&self) -> String {
        number_to_text(f64::from(*self))
    }
}

/// Top-level `null` is absent and renders empty; nested `null`s render as
/// `"null"`, matching how lodash stringifies array members.
impl ToText for Value {
    fn to_text(&self) -> String {
        match self {
            Value::Null => String::new(),
            other => value_to_text(other),
        }
    }
}

fn value_to_text(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match (n.as_i64(), n.as_u64()) {
            (Some(i), _) => i.to_string(),
            (_, Some(u)) => u.to_string(),
            _ => number_to_text(n.as_f64().unwrap_or(f64::NAN)),
        },
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(value_to_text)
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Render a float the way JavaScript's `String(number)` does, keeping the
/// sign of negative zero.
pub fn number_to_text(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    let sign = if n.is_sign_negative() { "-" } else { "" };
    if n.is_infinite() {
        return format!("{}Infinity", sign);
    }
    if n == 0.0 {
        return format!("{}0", sign);
    }

    // `{:e}` yields the shortest round-trip digits, e.g. "1.2345e-7".
    let exponential = format!("{:e}", n.abs());
    let (mantissa, exponent) = exponential
        .split_once('e')
        .unwrap_or((exponential.as_str(), "0"));
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let k = digits.len() as i32;
    let point = exponent.parse::<i32>().unwrap_or(0) + 1;

    let body = if k <= point && point <= 21 {
        format!("{}{}", digits, "0".repeat((point - k) as usize))
    } else if 0 < point && point <= 21 {
        let (int, frac) = digits.split_at(point as usize);
        format!("{}.{}", int, frac)
    } else if -6 < point && point <= 0 {
        format!("0.{}{}", "0".repeat((-point) as usize), digits)
    } else {
        let (first, rest) = digits.split_at(1);
        let fraction = if rest.is_empty() {
            String::new()
        } else {
            format!(".{}", rest)
        };
        let exp = point - 1;
        format!("{}{}e{}{}", first, fraction, if exp < 0 { "-" } else { "+" }, exp.abs())
    };
    format!("{}{}", sign, body)
}
