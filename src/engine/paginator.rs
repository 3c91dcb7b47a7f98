//! Page arithmetic shared by every listing endpoint.
//!
//! Pages are 1-indexed. A page past the end of the list is empty rather than
//! an error; callers decide whether an empty page means "not found".

/// Page used when the request has none or an unusable one.
pub const DEFAULT_PAGE: u32 = 1;

/// A validated `page`/`limit` pair. Both are always >= 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    limit: u32,
}

impl PageRequest {
    /// Build a request, replacing zero values with the defaults.
    pub fn new(page: u32, limit: u32, default_limit: u32) -> Self {
        let default_limit = default_limit.max(1);
        Self {
            page: if page == 0 { DEFAULT_PAGE } else { page },
            limit: if limit == 0 { default_limit } else { limit },
        }
    }

    /// Coerce raw query-string values. Missing, non-numeric, zero or
    /// negative values fall back to the defaults instead of failing.
    pub fn from_params(page: Option<&str>, limit: Option<&str>, default_limit: u32) -> Self {
        Self::new(
            parse_positive(page).unwrap_or(DEFAULT_PAGE),
            parse_positive(limit).unwrap_or(0),
            default_limit,
        )
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Number of items before this page, for SQL `OFFSET`.
    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.limit)
    }
}

fn parse_positive(raw: Option<&str>) -> Option<u32> {
    raw.map(str::trim)
        .and_then(|s| s.parse::<u32>().ok())
        .filter(|n| *n > 0)
}

/// Slice `items[(page-1)*limit .. page*limit]`, clamped to the list bounds.
pub fn paginate<'a, T>(items: &'a [T], request: &PageRequest) -> &'a [T] {
    let len = items.len() as u64;
    let start = request.offset().min(len);
    let end = start.saturating_add(u64::from(request.limit())).min(len);
    &items[start as usize..end as usize]
}
