//! Page identifier type.

use serde::Serialize;
use std::fmt;

/// Identifies a logical page in a reference sequence.
///
/// Page ids carry no bound and no meaning beyond equality, so any `i64`
/// is valid, including negative values read from raw input.
///
/// Serializes as a bare integer.
///
/// # Example
/// ```
/// use framesim::PageId;
///
/// let page_id = PageId::new(7);
/// assert_eq!(page_id.0, 7);
/// assert_eq!(page_id.to_string(), "7");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct PageId(pub i64);

impl PageId {
    /// Create a new PageId.
    #[inline]
    pub fn new(id: i64) -> Self {
        PageId(id)
    }
}

impl From<i64> for PageId {
    fn from(id: i64) -> Self {
        PageId(id)
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Convert raw integers into a reference sequence.
pub fn pages(ids: &[i64]) -> Vec<PageId> {
    ids.iter().copied().map(PageId).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_new() {
        let pid = PageId::new(42);
        assert_eq!(pid.0, 42);
        assert_eq!(PageId::from(-3), PageId(-3));
    }

    #[test]
    fn test_page_id_display() {
        assert_eq!(format!("{}", PageId::new(42)), "42");
        assert_eq!(format!("{}", PageId::new(-1)), "-1");
    }

    #[test]
    fn test_page_id_serializes_as_integer() {
        let json = serde_json::to_string(&pages(&[7, 0, 1])).unwrap();
        assert_eq!(json, "[7,0,1]");
    }
}
