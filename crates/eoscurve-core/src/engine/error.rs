use thiserror::Error;

use super::config::ConfigError;
use crate::core::io::table::TableError;
use crate::render::RenderError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Dataset error: {source}")]
    Table {
        #[from]
        source: TableError,
    },

    #[error("Configuration error: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },

    #[error("Rendering failed: {source}")]
    Render {
        #[from]
        source: RenderError,
    },
}
