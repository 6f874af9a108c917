// src/shared/api/pagination.rs
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

pub const DEFAULT_LIMIT: u64 = 20;
pub const MAX_LIMIT: u64 = 100;

/// Raw `skip`/`limit` query parameters as they arrive from the client.
#[derive(Debug, Clone, Copy, Deserialize, IntoParams)]
pub struct PageQuery {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}

/// Validated pagination window. `skip` defaults to 0 and must not be
/// negative; `limit` defaults to 20, must be at least 1, and is clamped
/// to 100 rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageParams {
    skip: u64,
    limit: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PageParamsError {
    #[error("skip must be greater than or equal to 0")]
    NegativeSkip,
    #[error("limit must be greater than or equal to 1")]
    LimitTooSmall,
}

impl PageParams {
    pub fn new(skip: Option<i64>, limit: Option<i64>) -> Result<Self, PageParamsError> {
        let skip = match skip {
            None => 0,
            Some(s) if s < 0 => return Err(PageParamsError::NegativeSkip),
            Some(s) => s as u64,
        };

        let limit = match limit {
            None => DEFAULT_LIMIT,
            Some(l) if l < 1 => return Err(PageParamsError::LimitTooSmall),
            Some(l) => (l as u64).min(MAX_LIMIT),
        };

        Ok(Self { skip, limit })
    }

    pub fn skip(&self) -> u64 {
        self.skip
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }
}

impl TryFrom<PageQuery> for PageParams {
    type Error = PageParamsError;

    fn try_from(query: PageQuery) -> Result<Self, Self::Error> {
        Self::new(query.skip, query.limit)
    }
}

/// Paginated response envelope: `{total, skip, limit, items}`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Page<T> {
    pub total: u64,
    pub skip: u64,
    pub limit: u64,
    pub items: Vec<T>,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: u64, params: PageParams) -> Self {
        Self {
            total,
            skip: params.skip(),
            limit: params.limit(),
            items,
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            total: self.total,
            skip: self.skip,
            limit: self.limit,
            items: self.items.into_iter().map(f).collect(),
        }
    }
}
