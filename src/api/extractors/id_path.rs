//! Numeric `:id` path segment extractors.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::api::views::PageError;
use crate::errors::AppError;

/// Integer id from the route path.
///
/// A segment that is not an `i32` names no row, so it is rejected as
/// `NotFound` with the usual JSON error body.
#[derive(Debug, Clone, Copy)]
pub struct IdPath(pub i32);

#[async_trait]
impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i32>::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                tracing::debug!(error = %e.body_text(), "Unparseable id in path");
                AppError::NotFound("Resource")
            })?;

        Ok(IdPath(id))
    }
}

/// [`IdPath`] for admin screens, rejected with the HTML notice page.
#[derive(Debug, Clone, Copy)]
pub struct PageId(pub i32);

#[async_trait]
impl<S> FromRequestParts<S> for PageId
where
    S: Send + Sync,
{
    type Rejection = PageError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let IdPath(id) = IdPath::from_request_parts(parts, state).await?;
        Ok(PageId(id))
    }
}
