//! Preview resolver port trait

use async_trait::async_trait;

use crate::domain::entities::ProjectPreview;
use crate::error::AppError;

/// Anything that turns a project URL into a preview.
///
/// Implementations absorb upstream failures into a fallback preview and only
/// fail on malformed input or unexpected errors.
#[async_trait]
pub trait PreviewResolver: Send + Sync {
    async fn resolve(&self, url: &str) -> Result<ProjectPreview, AppError>;
}
