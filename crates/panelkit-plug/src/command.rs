//! The `plug` command surface.

use std::path::PathBuf;

use clap::Args;

use crate::error::PlugError;
use crate::scaffold::{Config, Plug};

/// Creates a new UI plugin
///
/// Scaffolds a plugin directory under the plugins root:
///
/// ```text
/// ui-plugins/<name>/
/// ├── plugin.rs       # plugin registration module
/// └── dist/           # static files directory
///     └── index.html  # default HTML file
/// ```
#[derive(Debug, Args)]
pub struct PlugArgs {
    /// Human-readable name of the new plugin, eg. "my-plugin".
    pub name: String,

    /// Root directory under which plugin trees are created.
    #[arg(long, default_value = "ui-plugins")]
    pub dir: PathBuf,
}

impl PlugArgs {
    /// Run the generator interactively.
    pub async fn run(self) -> Result<(), PlugError> {
        let plug = Plug::new(Config { dir: self.dir });
        let _ = plug.create(&self.name, true).await?;
        Ok(())
    }
}
