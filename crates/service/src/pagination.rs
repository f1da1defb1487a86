//! Pagination utilities for service layer
//!
//! Callers pass an optional `offset`/`limit` pair; `normalize` turns it into a
//! concrete window repositories can apply directly.
use serde::Deserialize;

pub const DEFAULT_LIMIT: u64 = 50;
pub const MAX_LIMIT: u64 = 100;

/// Pagination parameters as received from a caller
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Pagination {
    /// rows to skip, defaults to 0
    pub offset: Option<u64>,
    /// rows to return, defaults to [`DEFAULT_LIMIT`]
    pub limit: Option<u64>,
}

/// Concrete window handed to repositories.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRequest {
    pub offset: u64,
    pub limit: u64,
}

impl Pagination {
    pub fn new(offset: u64, limit: u64) -> Self { Self { offset: Some(offset), limit: Some(limit) } }

    /// Fill defaults and clamp `limit` to `1..=MAX_LIMIT`
    pub fn normalize(self) -> PageRequest {
        self.normalize_with(DEFAULT_LIMIT, MAX_LIMIT)
    }

    pub fn normalize_with(self, default_limit: u64, max_limit: u64) -> PageRequest {
        let max_limit = max_limit.clamp(1, MAX_LIMIT);
        let limit = self.limit.unwrap_or(default_limit).clamp(1, max_limit);
        PageRequest { offset: self.offset.unwrap_or(0), limit }
    }
}

impl From<PageRequest> for Pagination {
    fn from(p: PageRequest) -> Self { Pagination::new(p.offset, p.limit) }
}

impl Default for PageRequest {
    fn default() -> Self { Pagination::default().normalize() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_values_use_defaults() {
        let p = Pagination::default().normalize();
        assert_eq!(p, PageRequest { offset: 0, limit: DEFAULT_LIMIT });
    }

    #[test]
    fn normalize_clamps_zero_limit() {
        let p = Pagination::new(3, 0).normalize();
        assert_eq!(p.offset, 3);
        assert_eq!(p.limit, 1);
    }

    #[test]
    fn normalize_clamps_upper_bound() {
        let p = Pagination::new(0, 1000).normalize();
        assert_eq!(p.limit, MAX_LIMIT);
    }

    #[test]
    fn configured_limits_apply_but_never_exceed_hard_max() {
        let p = Pagination::default().normalize_with(10, 20);
        assert_eq!(p.limit, 10);
        let p = Pagination { offset: None, limit: Some(500) }.normalize_with(10, 5000);
        assert_eq!(p.limit, MAX_LIMIT);
    }

    #[test]
    fn normalizing_twice_is_stable() {
        let once = Pagination { offset: Some(7), limit: None }.normalize_with(10, 20);
        assert_eq!(Pagination::from(once).normalize(), once);
    }
}
