//! The ordered page-access sequence driving a simulation.

use std::collections::HashSet;
use std::str::FromStr;

use crate::common::{Error, PageId};

/// An ordered sequence of page accesses.
///
/// Parsed from whitespace-separated non-negative integers. Repeats are
/// expected; they are what makes replacement policies differ.
///
/// # Example
/// ```
/// use pagesim::ReferenceString;
///
/// let refs: ReferenceString = "7 0 1 2 0".parse().unwrap();
/// assert_eq!(refs.len(), 5);
/// assert_eq!(refs.distinct_pages(), 4);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceString(Vec<PageId>);

impl ReferenceString {
    /// Wrap an already validated sequence.
    pub fn new(pages: Vec<PageId>) -> Self {
        ReferenceString(pages)
    }

    #[inline]
    pub fn as_slice(&self) -> &[PageId] {
        &self.0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PageId> {
        self.0.iter()
    }

    /// Number of distinct pages referenced.
    ///
    /// This is the fault count of every policy once the capacity reaches it.
    pub fn distinct_pages(&self) -> usize {
        self.0.iter().collect::<HashSet<_>>().len()
    }
}

impl FromStr for ReferenceString {
    type Err = Error;

    /// Parse whitespace-separated page numbers.
    ///
    /// Page numbers must fit in a `u64`; larger tokens are rejected like
    /// any other malformed token.
    ///
    /// # Errors
    /// `Error::InvalidReferenceString` if the input is blank or any token
    /// is not a non-negative integer that fits in a `u64`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let pages = s
            .split_whitespace()
            .map(|token| {
                token
                    .parse::<u64>()
                    .map(PageId::new)
                    .map_err(|_| Error::InvalidReferenceString)
            })
            .collect::<Result<Vec<_>, _>>()?;

        if pages.is_empty() {
            return Err(Error::InvalidReferenceString);
        }
        Ok(ReferenceString(pages))
    }
}

impl From<Vec<u64>> for ReferenceString {
    fn from(pages: Vec<u64>) -> Self {
        ReferenceString(pages.into_iter().map(PageId::new).collect())
    }
}

impl AsRef<[PageId]> for ReferenceString {
    fn as_ref(&self) -> &[PageId] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a ReferenceString {
    type Item = &'a PageId;
    type IntoIter = std::slice::Iter<'a, PageId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_space_separated() {
        let refs: ReferenceString = "1 2 3 4 1 2".parse().unwrap();
        assert_eq!(refs, ReferenceString::from(vec![1, 2, 3, 4, 1, 2]));
    }

    #[test]
    fn test_parse_any_whitespace() {
        let refs: ReferenceString = "  7\t0\n1  ".parse().unwrap();
        assert_eq!(refs.as_slice(), &[PageId(7), PageId(0), PageId(1)]);
    }

    #[test]
    fn test_parse_rejects_blank() {
        assert!(matches!(
            "".parse::<ReferenceString>(),
            Err(Error::InvalidReferenceString)
        ));
        assert!(matches!(
            "   ".parse::<ReferenceString>(),
            Err(Error::InvalidReferenceString)
        ));
    }

    #[test]
    fn test_parse_rejects_bad_tokens() {
        for input in ["1 2 x", "1,2,3", "1 -2", "1.5", "99999999999999999999999"] {
            assert!(
                matches!(
                    input.parse::<ReferenceString>(),
                    Err(Error::InvalidReferenceString)
                ),
                "accepted {input:?}"
            );
        }
    }

    #[test]
    fn test_distinct_pages() {
        let refs = ReferenceString::from(vec![7, 7, 7, 7]);
        assert_eq!(refs.distinct_pages(), 1);
        assert_eq!(ReferenceString::default().distinct_pages(), 0);
    }
}
