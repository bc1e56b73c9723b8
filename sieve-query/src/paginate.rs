//! Pagination over compiled predicates
//!
//! Runs the same predicate twice through a [`PredicateExecutor`] - once for
//! the total count, once for the requested page - and wraps the results in
//! the `{data, pagination}` envelope. Read-only; no other side effects.

use crate::compile::Predicate;
use async_trait::async_trait;
use serde::Serialize;
use tracing::debug;

/// Page request parameters.
///
/// `page` and `limit` are 1-based and must be positive; the request-DTO
/// collaborator validates them (including the upper limit of 100) before
/// they reach this helper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageParams {
    pub page: u64,
    pub limit: u64,
}

impl Default for PageParams {
    fn default() -> Self {
        Self { page: 1, limit: 10 }
    }
}

impl PageParams {
    pub fn new(page: u64, limit: u64) -> Self {
        Self { page, limit }
    }

    /// Row offset of the first item on this page.
    pub fn offset(&self) -> u64 {
        self.limit * self.page.saturating_sub(1)
    }
}

/// Pagination metadata of the response envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PageInfo {
    pub total: u64,
    pub page: u64,
    pub limit: u64,
    pub pages: u64,
}

/// One page of results plus its pagination metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Page<T> {
    pub data: Vec<T>,
    pub pagination: PageInfo,
}

/// Query-execution seam for compiled predicates.
///
/// Implementations translate the predicate's join and clause lists into
/// their query language and run it; both methods are read-only.
#[async_trait]
pub trait PredicateExecutor<T>: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Count all rows matching the predicate, ignoring pagination.
    async fn count(&self, predicate: &Predicate) -> Result<u64, Self::Error>;

    /// Fetch one window of rows matching the predicate.
    async fn fetch(
        &self,
        predicate: &Predicate,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<T>, Self::Error>;
}

/// Execute a count plus a page fetch and assemble the envelope.
///
/// `pages = ceil(total / limit)`; a total of zero yields zero pages.
pub async fn paginate<T, E>(
    executor: &E,
    predicate: &Predicate,
    params: &PageParams,
) -> Result<Page<T>, E::Error>
where
    E: PredicateExecutor<T> + ?Sized,
{
    // limit is validated upstream; zero would divide by zero below
    let limit = params.limit.max(1);
    let page = params.page.max(1);

    let total = executor.count(predicate).await?;
    let data = executor.fetch(predicate, limit * (page - 1), limit).await?;

    let pages = if total == 0 { 0 } else { total.div_ceil(limit) };
    debug!(total, page, limit, pages, "paginated predicate query");

    Ok(Page {
        data,
        pagination: PageInfo {
            total,
            page,
            limit,
            pages,
        },
    })
}
