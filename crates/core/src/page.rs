//! Offset/limit paging window.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// Offset/limit window applied after filtering.
///
/// An offset past the end yields nothing; the limit only caps the count.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub offset: usize,
    pub limit: usize,
}

impl Page {
    pub const DEFAULT_LIMIT: usize = 10;

    pub fn new(offset: usize, limit: usize) -> Self {
        Self { offset, limit }
    }

    /// Build a page from signed transport values.
    ///
    /// Rejects a negative offset and a limit that is not strictly positive.
    pub fn from_signed(offset: Option<i64>, limit: Option<i64>) -> DomainResult<Self> {
        let offset = match offset {
            None => 0,
            Some(v) if v < 0 => {
                return Err(DomainError::invalid_argument("offset must be non-negative"));
            }
            Some(v) => usize::try_from(v)
                .map_err(|_| DomainError::invalid_argument("offset is too large"))?,
        };
        let limit = match limit {
            None => Self::DEFAULT_LIMIT,
            Some(v) if v <= 0 => {
                return Err(DomainError::invalid_argument("limit must be positive"));
            }
            Some(v) => usize::try_from(v)
                .map_err(|_| DomainError::invalid_argument("limit is too large"))?,
        };
        Ok(Self { offset, limit })
    }

    /// Skip `offset` elements, then take at most `limit`.
    pub fn slice<I: IntoIterator>(self, items: I) -> impl Iterator<Item = I::Item> {
        items.into_iter().skip(self.offset).take(self.limit)
    }
}

impl Default for Page {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: Self::DEFAULT_LIMIT,
        }
    }
}

impl ValueObject for Page {}
