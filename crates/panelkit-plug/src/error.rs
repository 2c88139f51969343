//! Scaffolding error types.
//!
//! Each filesystem step gets its own variant so a failure identifies
//! exactly where the (non-transactional) scaffold stopped.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlugError {
    #[error("missing plugin name")]
    MissingName,

    #[error("failed to create ui-plugins directory: {0}")]
    CreateRootDir(#[source] std::io::Error),

    #[error("failed to create plugin directory: {0}")]
    CreatePluginDir(#[source] std::io::Error),

    #[error("failed to create dist directory: {0}")]
    CreateDistDir(#[source] std::io::Error),

    #[error("failed to save plugin.rs file: {0}")]
    WritePluginSource(#[source] std::io::Error),

    #[error("failed to save index.html file: {0}")]
    WriteIndexHtml(#[source] std::io::Error),
}
