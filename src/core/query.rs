//! Current search text.

/// The free-text query as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    text: String,
}

impl SearchQuery {
    /// Replace the query text. Returns whether it changed.
    pub fn set(&mut self, text: &str) -> bool {
        if self.text == text {
            return false;
        }
        self.text = text.to_string();
        true
    }

    /// Clear the query.
    pub fn clear(&mut self) -> bool {
        self.set("")
    }

    /// Current text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Whether the query is long enough to be sent to the catalog.
    pub fn is_searchable(&self, min_len: usize) -> bool {
        self.text.chars().count() >= min_len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_reports_change() {
        let mut query = SearchQuery::default();
        assert!(query.set("bat"));
        assert!(!query.set("bat"));
        assert!(query.clear());
        assert_eq!(query.as_str(), "");
    }

    #[test]
    fn test_is_searchable_counts_chars() {
        let mut query = SearchQuery::default();
        query.set("ab");
        assert!(!query.is_searchable(3));
        query.set("abc");
        assert!(query.is_searchable(3));
        query.set("été");
        assert!(query.is_searchable(3));
    }
}
