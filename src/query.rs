//! Query-string building shared by every list and search request.
//!
//! Values that are absent or falsy (`None`, blank strings, zero, `false`) are
//! dropped instead of being sent as empty filters. Boolean filters whose
//! presence matters go through [`QueryParams::flag`].

use chrono::NaiveDate;
use thiserror::Error;

/// Reserved key carrying free-text search terms.
pub const SEARCH_KEY: &str = "s";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("failed to encode query string: {0}")]
    Encode(String),
}

/// A value that may be rendered as a query parameter.
///
/// Returns `None` when the value is falsy and the key should be omitted.
pub trait QueryValue {
    fn to_query_value(&self) -> Option<String>;
}

impl QueryValue for str {
    fn to_query_value(&self) -> Option<String> {
        if self.trim().is_empty() {
            None
        } else {
            Some(self.to_string())
        }
    }
}

impl QueryValue for String {
    fn to_query_value(&self) -> Option<String> {
        self.as_str().to_query_value()
    }
}

impl QueryValue for bool {
    fn to_query_value(&self) -> Option<String> {
        self.then(|| "true".to_string())
    }
}

impl QueryValue for f64 {
    fn to_query_value(&self) -> Option<String> {
        if *self == 0.0 || self.is_nan() {
            None
        } else {
            Some(self.to_string())
        }
    }
}

impl QueryValue for NaiveDate {
    fn to_query_value(&self) -> Option<String> {
        Some(self.format("%Y-%m-%d").to_string())
    }
}

impl<T: QueryValue + ?Sized> QueryValue for &T {
    fn to_query_value(&self) -> Option<String> {
        (**self).to_query_value()
    }
}

impl<T: QueryValue> QueryValue for Option<T> {
    fn to_query_value(&self) -> Option<String> {
        self.as_ref().and_then(QueryValue::to_query_value)
    }
}

macro_rules! integer_query_value {
    ($($ty:ty),*) => {
        $(
            impl QueryValue for $ty {
                fn to_query_value(&self) -> Option<String> {
                    (*self != 0).then(|| self.to_string())
                }
            }
        )*
    };
}

integer_query_value!(i32, i64, u32, u64, usize);

/// Ordered list of query parameters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `key=value` unless the value is absent or falsy.
    pub fn push<V: QueryValue>(&mut self, key: &str, value: V) -> &mut Self {
        if let Some(value) = value.to_query_value() {
            self.pairs.push((key.to_string(), value));
        }
        self
    }

    /// Appends a value verbatim, even when it is empty.
    pub fn push_raw(&mut self, key: &str, value: impl Into<String>) -> &mut Self {
        self.pairs.push((key.to_string(), value.into()));
        self
    }

    /// Appends a boolean whose presence is the signal, as `"true"`/`"false"`.
    pub fn flag(&mut self, key: &str, value: bool) -> &mut Self {
        self.push_raw(key, if value { "true" } else { "false" })
    }

    /// Appends the free-text search term under [`SEARCH_KEY`].
    pub fn search(&mut self, term: &str) -> &mut Self {
        self.push_raw(SEARCH_KEY, term)
    }

    /// Lets a typed filter append its keys.
    pub fn filter<F: ListFilter + ?Sized>(&mut self, filter: &F) -> &mut Self {
        filter.apply(self);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// URL-encodes the parameters in insertion order.
    pub fn to_query_string(&self) -> Result<String, QueryError> {
        serde_html_form::to_string(&self.pairs).map_err(|e| QueryError::Encode(e.to_string()))
    }

    /// Returns `path` with the encoded query appended, or `path` unchanged
    /// when there is nothing to send.
    pub fn append_to(&self, path: &str) -> Result<String, QueryError> {
        if self.is_empty() {
            return Ok(path.to_string());
        }
        Ok(format!("{path}?{}", self.to_query_string()?))
    }
}

/// Typed set of list filters specific to one resource.
pub trait ListFilter {
    fn apply(&self, params: &mut QueryParams);
}

/// Filter type for resources without list filters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoFilter;

impl ListFilter for NoFilter {
    fn apply(&self, _params: &mut QueryParams) {}
}

impl<F: ListFilter> ListFilter for Option<F> {
    fn apply(&self, params: &mut QueryParams) {
        if let Some(filter) = self {
            filter.apply(params);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falsy_values_are_omitted() {
        let mut params = QueryParams::new();
        params
            .push("empty", "")
            .push("blank", "   ")
            .push("zero", 0u32)
            .push("no", false)
            .push("missing", None::<i32>)
            .push("clinic_id", Some(3));

        assert_eq!(params.pairs(), &[("clinic_id".to_string(), "3".to_string())]);
    }

    #[test]
    fn flags_are_sent_explicitly() {
        let mut params = QueryParams::new();
        params.flag("with-meridian", true).flag("done", false);
        assert_eq!(
            params.to_query_string().unwrap(),
            "with-meridian=true&done=false"
        );
    }

    #[test]
    fn search_uses_reserved_key_and_encodes_value() {
        let mut params = QueryParams::new();
        params.search("budi & sons");
        assert_eq!(params.get(SEARCH_KEY), Some("budi & sons"));
        assert_eq!(params.to_query_string().unwrap(), "s=budi+%26+sons");
    }

    #[test]
    fn append_to_leaves_bare_path_without_params() {
        let params = QueryParams::new();
        assert_eq!(params.append_to("/clinic").unwrap(), "/clinic");

        let mut params = QueryParams::new();
        params.push("page", 1u32);
        assert_eq!(params.append_to("/clinic").unwrap(), "/clinic?page=1");
    }

    #[test]
    fn dates_render_as_calendar_days() {
        let mut params = QueryParams::new();
        params.push("birthdate", NaiveDate::from_ymd_opt(1990, 2, 3));
        assert_eq!(params.get("birthdate"), Some("1990-02-03"));
    }
}
