//! Query-string filter encoding.
//!
//! List endpoints narrow their results with one `q` parameter per filter,
//! each holding a clause in the platform grammar:
//!
//! - `name:value` for equality
//! - `name IN v1,v2` for set membership
//! - `name>value`, `name>=value`, `name<value`, `name<=value` for comparisons
//!
//! The server ANDs all `q` clauses together. Pagination parameters are
//! never folded into `q`; they are appended as top-level parameters by
//! [`QueryString::push_cursor`].

use std::fmt;

use crate::pagination::PageCursor;

/// Operator joining a filter field to its values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOperator {
    /// `name:value`. More than one value is sent as `IN`.
    Equals,
    /// `name IN v1,v2`.
    In,
    /// `name>value`.
    GreaterThan,
    /// `name>=value`.
    GreaterThanOrEqual,
    /// `name<value`.
    LessThan,
    /// `name<=value`.
    LessThanOrEqual,
}

impl FilterOperator {
    fn symbol(self) -> &'static str {
        match self {
            FilterOperator::Equals => ":",
            FilterOperator::In => " IN ",
            FilterOperator::GreaterThan => ">",
            FilterOperator::GreaterThanOrEqual => ">=",
            FilterOperator::LessThan => "<",
            FilterOperator::LessThanOrEqual => "<=",
        }
    }

    // `:` is legal inside a query component and stays literal; the rest is
    // percent-encoded like any other text.
    fn encoded_symbol(self) -> String {
        match self {
            FilterOperator::Equals => ":".to_string(),
            other => urlencoding::encode(other.symbol()).into_owned(),
        }
    }
}

/// A single typed constraint on a list operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterParameter {
    name: &'static str,
    operator: FilterOperator,
    values: Vec<String>,
}

impl FilterParameter {
    /// Create a filter on the wire field `name`.
    pub fn new<I, S>(name: &'static str, operator: FilterOperator, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name,
            operator,
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// `name:value`, or nothing when `value` is absent.
    pub fn equals(name: &'static str, value: Option<&str>) -> Self {
        Self::new(name, FilterOperator::Equals, value)
    }

    /// `name IN v1,v2,...` over the given values, in order.
    pub fn is_in(name: &'static str, values: &[String]) -> Self {
        Self::new(name, FilterOperator::In, values.iter().cloned())
    }

    /// Whether the filter carries no values and is therefore not sent.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn effective_operator(&self) -> FilterOperator {
        match self.operator {
            FilterOperator::Equals if self.values.len() > 1 => FilterOperator::In,
            op => op,
        }
    }

    /// The clause as the server reads it, before percent-encoding.
    pub fn render(&self) -> Option<String> {
        if self.is_empty() {
            return None;
        }
        Some(format!(
            "{}{}{}",
            self.name,
            self.effective_operator().symbol(),
            self.values.join(",")
        ))
    }

    /// The clause ready to be placed after `q=`.
    ///
    /// Each value is encoded on its own so that a comma inside a value
    /// cannot be confused with the `IN` separator.
    pub fn encode(&self) -> Option<String> {
        if self.is_empty() {
            return None;
        }
        let values: Vec<String> = self
            .values
            .iter()
            .map(|v| urlencoding::encode(v).into_owned())
            .collect();
        Some(format!(
            "{}{}{}",
            urlencoding::encode(self.name),
            self.effective_operator().encoded_symbol(),
            values.join(",")
        ))
    }
}

/// An ordered, already-encoded query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryString {
    pairs: Vec<(String, String)>,
}

impl QueryString {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `key=value`, encoding both.
    pub fn push(&mut self, key: &str, value: impl fmt::Display) {
        self.pairs.push((
            urlencoding::encode(key).into_owned(),
            urlencoding::encode(&value.to_string()).into_owned(),
        ));
    }

    /// Append `key=value` when `value` is present.
    pub fn push_opt<V: fmt::Display>(&mut self, key: &str, value: Option<V>) {
        if let Some(value) = value {
            self.push(key, value);
        }
    }

    /// Append one `q` clause; an empty filter leaves no trace.
    pub fn push_filter(&mut self, filter: &FilterParameter) {
        if let Some(clause) = filter.encode() {
            self.pairs.push(("q".to_string(), clause));
        }
    }

    /// Append the pagination parameters that are set.
    ///
    /// The page number is forwarded as given; zero and negative pages are
    /// left for the server to judge.
    pub fn push_cursor(&mut self, cursor: &PageCursor) {
        self.push_opt("page", cursor.page);
        self.push_opt("results-per-page", cursor.results_per_page);
        self.push_opt("order-direction", cursor.order_direction);
        self.push_opt("order-by", cursor.order_by.as_deref());
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl fmt::Display for QueryString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.pairs.iter().enumerate() {
            if i > 0 {
                f.write_str("&")?;
            }
            write!(f, "{key}={value}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagination::OrderDirection;

    #[test]
    fn test_equals_renders_colon() {
        let filter = FilterParameter::equals("name", Some("my-domain.com"));
        assert_eq!(filter.render().as_deref(), Some("name:my-domain.com"));
        assert_eq!(filter.encode().as_deref(), Some("name:my-domain.com"));
    }

    #[test]
    fn test_in_preserves_order() {
        let filter = FilterParameter::is_in("name", &["b".to_string(), "a".to_string()]);
        assert_eq!(filter.render().as_deref(), Some("name IN b,a"));

        let filter = FilterParameter::is_in("name", &["a".to_string(), "b".to_string()]);
        assert_eq!(filter.render().as_deref(), Some("name IN a,b"));
        assert_eq!(filter.encode().as_deref(), Some("name%20IN%20a,b"));
    }

    #[test]
    fn test_single_value_in_keeps_in_form() {
        let filter = FilterParameter::is_in("name", &["test-name.com".to_string()]);
        assert_eq!(filter.encode().as_deref(), Some("name%20IN%20test-name.com"));
    }

    #[test]
    fn test_equals_with_many_values_becomes_in() {
        let filter = FilterParameter::new("host", FilterOperator::Equals, ["a", "b"]);
        assert_eq!(filter.render().as_deref(), Some("host IN a,b"));
    }

    #[test]
    fn test_comparison_operators() {
        let gt = FilterParameter::new("timestamp", FilterOperator::GreaterThan, ["5"]);
        assert_eq!(gt.render().as_deref(), Some("timestamp>5"));
        assert_eq!(gt.encode().as_deref(), Some("timestamp%3E5"));

        let le = FilterParameter::new("timestamp", FilterOperator::LessThanOrEqual, ["9"]);
        assert_eq!(le.encode().as_deref(), Some("timestamp%3C%3D9"));
    }

    #[test]
    fn test_reserved_characters_in_values_are_encoded() {
        let filter = FilterParameter::is_in(
            "path",
            &["/a b".to_string(), "c,d".to_string()],
        );
        assert_eq!(filter.encode().as_deref(), Some("path%20IN%20%2Fa%20b,c%2Cd"));
    }

    #[test]
    fn test_empty_filter_leaves_no_trace() {
        let mut query = QueryString::new();
        query.push_filter(&FilterParameter::is_in("organization_guid", &[]));
        query.push_filter(&FilterParameter::equals("name", None));
        assert!(query.is_empty());
        assert!(!query.to_string().contains("organization_guid"));
    }

    #[test]
    fn test_each_filter_is_its_own_clause() {
        let mut query = QueryString::new();
        query.push_filter(&FilterParameter::is_in("host", &["h1".to_string()]));
        query.push_filter(&FilterParameter::is_in("port", &["80".to_string(), "443".to_string()]));
        assert_eq!(
            query.to_string(),
            "q=host%20IN%20h1&q=port%20IN%2080,443"
        );
    }

    #[test]
    fn test_cursor_is_top_level_and_negative_page_passes() {
        let mut query = QueryString::new();
        query.push_filter(&FilterParameter::is_in("name", &["x".to_string()]));
        query.push_cursor(&PageCursor {
            page: Some(-1),
            results_per_page: Some(50),
            order_direction: Some(OrderDirection::Desc),
            order_by: Some("name".to_string()),
        });
        assert_eq!(
            query.to_string(),
            "q=name%20IN%20x&page=-1&results-per-page=50&order-direction=desc&order-by=name"
        );
    }
}
