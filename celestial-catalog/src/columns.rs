//! Column name to cell index lookup for one result table.

use std::collections::HashMap;

/// Index of each column in a result header.
///
/// Lookup is exact first, then case-insensitive, since some services fold
/// column names to lower case in their CSV output.
#[derive(Debug, Clone, Default)]
pub struct ColumnMap {
    exact: HashMap<String, usize>,
    folded: HashMap<String, usize>,
    len: usize,
}

impl ColumnMap {
    pub fn from_headers<S: AsRef<str>>(headers: &[S]) -> Self {
        let mut exact = HashMap::with_capacity(headers.len());
        let mut folded = HashMap::with_capacity(headers.len());
        for (index, header) in headers.iter().enumerate() {
            let name = header.as_ref().trim();
            exact.entry(name.to_string()).or_insert(index);
            folded.entry(name.to_ascii_lowercase()).or_insert(index);
        }
        Self {
            exact,
            folded,
            len: headers.len(),
        }
    }

    pub fn index(&self, name: &str) -> Option<usize> {
        self.exact
            .get(name)
            .or_else(|| self.folded.get(&name.to_ascii_lowercase()))
            .copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_and_folded_lookup() {
        let map = ColumnMap::from_headers(&["RA_ICRS", "DE_ICRS", " Plx "]);
        assert_eq!(map.index("RA_ICRS"), Some(0));
        assert_eq!(map.index("ra_icrs"), Some(0));
        assert_eq!(map.index("Plx"), Some(2));
        assert_eq!(map.index("pmRA"), None);
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn test_first_duplicate_wins() {
        let map = ColumnMap::from_headers(&["ra", "dec", "ra"]);
        assert_eq!(map.index("ra"), Some(0));
    }

    #[test]
    fn test_exact_match_beats_case_fold() {
        let map = ColumnMap::from_headers(&["Jmag", "jmag"]);
        assert_eq!(map.index("jmag"), Some(1));
        assert_eq!(map.index("JMAG"), Some(0));
    }
}
