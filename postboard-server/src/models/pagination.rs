//! Pagination for the post listing
//!
//! Query parameters are parsed leniently: a missing, negative or
//! non-numeric `limit`/`offset` falls back to its default instead of
//! failing the request.

/// Default number of posts returned by a listing
pub const DEFAULT_LIMIT: i64 = 10;

/// Default number of posts skipped by a listing
pub const DEFAULT_OFFSET: i64 = 0;

/// Limit/offset window over the timestamp-ordered posts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    limit: i64,
    offset: i64,
}

impl Pagination {
    /// Negative values are replaced by the defaults.
    pub fn new(limit: i64, offset: i64) -> Self {
        Self {
            limit: if limit < 0 { DEFAULT_LIMIT } else { limit },
            offset: if offset < 0 { DEFAULT_OFFSET } else { offset },
        }
    }

    /// Maximum number of posts to return (SQL LIMIT).
    pub fn limit(&self) -> i64 {
        self.limit
    }

    /// Number of posts to skip (SQL OFFSET).
    pub fn offset(&self) -> i64 {
        self.offset
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: DEFAULT_OFFSET,
        }
    }
}

/// First `limit`/`offset` values found in the query string.
///
/// Kept as strings so that bad input never rejects the request.
#[derive(Debug, Clone, Default)]
pub struct PaginationParams {
    pub limit: Option<String>,
    pub offset: Option<String>,
}

impl PaginationParams {
    /// Build from decoded query pairs, keeping the first value of each key.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "limit" => &mut params.limit,
                "offset" => &mut params.offset,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        params
    }
}

impl From<PaginationParams> for Pagination {
    fn from(params: PaginationParams) -> Self {
        Self {
            limit: parse_or(params.limit.as_deref(), DEFAULT_LIMIT),
            offset: parse_or(params.offset.as_deref(), DEFAULT_OFFSET),
        }
    }
}

fn parse_or(raw: Option<&str>, default: i64) -> i64 {
    raw.and_then(|s| s.parse::<i64>().ok())
        .filter(|v| *v >= 0)
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(limit: Option<&str>, offset: Option<&str>) -> PaginationParams {
        PaginationParams {
            limit: limit.map(str::to_owned),
            offset: offset.map(str::to_owned),
        }
    }

    #[test]
    fn defaults_when_absent() {
        let p = Pagination::from(params(None, None));
        assert_eq!(p, Pagination::default());
        assert_eq!(p.limit(), 10);
        assert_eq!(p.offset(), 0);
    }

    #[test]
    fn parses_valid_values() {
        let p = Pagination::from(params(Some("3"), Some("7")));
        assert_eq!(p.limit(), 3);
        assert_eq!(p.offset(), 7);
    }

    #[test]
    fn zero_is_kept() {
        let p = Pagination::from(params(Some("0"), Some("0")));
        assert_eq!(p.limit(), 0);
        assert_eq!(p.offset(), 0);
    }

    #[test]
    fn negative_falls_back() {
        let p = Pagination::from(params(Some("-1"), Some("-20")));
        assert_eq!(p, Pagination::default());

        assert_eq!(Pagination::new(-5, 4), Pagination::new(10, 4));
    }

    #[test]
    fn first_value_wins() {
        let pairs = vec![
            ("limit".to_string(), "5".to_string()),
            ("offset".to_string(), "1".to_string()),
            ("limit".to_string(), "3".to_string()),
            ("other".to_string(), "x".to_string()),
            ("offset".to_string(), "2".to_string()),
        ];
        let p = Pagination::from(PaginationParams::from_pairs(pairs));
        assert_eq!(p, Pagination::new(5, 1));
    }

    #[test]
    fn garbage_falls_back() {
        let p = Pagination::from(params(Some("ten"), Some("1.5")));
        assert_eq!(p, Pagination::default());

        let p = Pagination::from(params(Some(""), Some("99999999999999999999")));
        assert_eq!(p, Pagination::default());
    }
}
