//! Review rows and the table they accumulate into

use serde::Serialize;

/// One review extracted from a review block
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewRecord {
    /// Reviewer identifier (the block's `data-review-user` attribute)
    pub user_id: String,

    /// Star rating text, e.g. "4.0"
    pub rating: Option<String>,

    /// Review headline with the rating text removed
    pub title: Option<String>,

    /// Review body, plain or spoiler variant
    pub review_text: Option<String>,
}

/// Ordered review rows: page order, then position on the page
///
/// Duplicate reviewers are kept as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResultTable {
    records: Vec<ReviewRecord>,
}

impl ResultTable {
    /// Column names in row order
    pub const COLUMNS: [&'static str; 4] = ["user_id", "rating", "title", "review_text"];

    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn push(&mut self, record: ReviewRecord) {
        self.records.push(record);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ReviewRecord> {
        self.records.iter()
    }

    /// Rows as cell arrays in `COLUMNS` order
    pub fn rows(&self) -> impl Iterator<Item = [Option<&str>; 4]> + '_ {
        self.records.iter().map(|record| {
            [
                Some(record.user_id.as_str()),
                record.rating.as_deref(),
                record.title.as_deref(),
                record.review_text.as_deref(),
            ]
        })
    }

    pub fn into_records(self) -> Vec<ReviewRecord> {
        self.records
    }
}

impl Extend<ReviewRecord> for ResultTable {
    fn extend<I: IntoIterator<Item = ReviewRecord>>(&mut self, iter: I) {
        self.records.extend(iter);
    }
}

impl FromIterator<ReviewRecord> for ResultTable {
    fn from_iter<I: IntoIterator<Item = ReviewRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ResultTable {
    type Item = &'a ReviewRecord;
    type IntoIter = std::slice::Iter<'a, ReviewRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(user_id: &str, rating: Option<&str>) -> ReviewRecord {
        ReviewRecord {
            user_id: user_id.to_string(),
            rating: rating.map(str::to_string),
            title: Some(format!("title by {}", user_id)),
            review_text: None,
        }
    }

    #[test]
    fn test_empty_table() {
        let table = ResultTable::new();
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
        assert_eq!(table.rows().count(), 0);
    }

    #[test]
    fn test_insertion_order_kept() {
        let mut table = ResultTable::new();
        table.push(record("b", None));
        table.extend(vec![record("a", Some("3.5")), record("b", Some("1.0"))]);

        let ids: Vec<&str> = table.iter().map(|r| r.user_id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "b"]);
    }

    #[test]
    fn test_rows_follow_column_order() {
        let table: ResultTable = vec![record("u1", Some("4.0"))].into_iter().collect();
        let rows: Vec<_> = table.rows().collect();

        assert_eq!(ResultTable::COLUMNS[1], "rating");
        assert_eq!(
            rows[0],
            [Some("u1"), Some("4.0"), Some("title by u1"), None]
        );
    }

    #[test]
    fn test_into_records() {
        let table: ResultTable = vec![record("x", None)].into_iter().collect();
        let records = table.into_records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].user_id, "x");
    }
}
