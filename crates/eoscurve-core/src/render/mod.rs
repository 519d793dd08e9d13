pub mod figure;
pub mod layout;
pub mod legend;
pub mod panel;
pub mod style;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Drawing backend error: {0}")]
    Backend(String),
}

impl RenderError {
    /// Plotters error types are generic over the backend, so they are
    /// flattened to their display form at the boundary.
    pub(crate) fn backend(err: impl std::fmt::Display) -> Self {
        Self::Backend(err.to_string())
    }
}
