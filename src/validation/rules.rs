//! Rule factories for [`super::Validator`].
//!
//! Rules only judge the types they understand; anything else passes. A
//! `min(3)` rule therefore accepts booleans and objects, and `email()` accepts
//! numbers. Combine with [`required`] when a value must be present.

use serde_json::Value;
use validator::{ValidateEmail, ValidateUrl};

use super::Rule;
use crate::domain::types::normalize_phone_to_e164;

fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Numbers below `n` fail with `minimal n`; strings shorter than `n`
/// characters fail with `minimal n karakter`.
pub fn min(n: i64) -> Rule {
    Rule::new(move |value| match value {
        Value::Number(num) if num.as_f64().is_some_and(|v| v < n as f64) => {
            Some(format!("minimal {n}"))
        }
        Value::String(s) if (char_len(s) as i64) < n => Some(format!("minimal {n} karakter")),
        _ => None,
    })
}

/// Numbers above `n` fail with `maksimal n`; strings longer than `n`
/// characters fail with `maksimal n karakter`.
pub fn max(n: i64) -> Rule {
    Rule::new(move |value| match value {
        Value::Number(num) if num.as_f64().is_some_and(|v| v > n as f64) => {
            Some(format!("maksimal {n}"))
        }
        Value::String(s) if (char_len(s) as i64) > n => Some(format!("maksimal {n} karakter")),
        _ => None,
    })
}

/// Rejects `null`, blank strings and empty arrays.
pub fn required() -> Rule {
    Rule::new(|value| {
        let missing = match value {
            Value::Null => true,
            Value::String(s) => s.trim().is_empty(),
            Value::Array(items) => items.is_empty(),
            _ => false,
        };
        missing.then(|| "wajib diisi".to_string())
    })
}

/// Non-empty strings must be valid email addresses.
pub fn email() -> Rule {
    Rule::new(|value| match value {
        Value::String(s) if !s.is_empty() && !s.trim().validate_email() => {
            Some("email tidak valid".to_string())
        }
        _ => None,
    })
}

/// Non-empty strings must be valid URLs.
pub fn url() -> Rule {
    Rule::new(|value| match value {
        Value::String(s) if !s.is_empty() && !s.trim().validate_url() => {
            Some("url tidak valid".to_string())
        }
        _ => None,
    })
}

/// Non-empty strings must be dialable phone numbers (Indonesian by default).
pub fn phone() -> Rule {
    Rule::new(|value| match value {
        Value::String(s) if !s.is_empty() && normalize_phone_to_e164(s).is_err() => {
            Some("nomor telepon tidak valid".to_string())
        }
        _ => None,
    })
}

/// Wraps an ad-hoc check. Returning `None` or an empty string means valid.
pub fn custom<F>(check: F) -> Rule
where
    F: Fn(&Value) -> Option<String> + Send + Sync + 'static,
{
    Rule::new(check)
}
