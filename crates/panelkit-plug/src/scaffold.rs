//! Plugin scaffold generator.
//!
//! Emits a plugin source tree under the configured directory:
//!
//! ```text
//! <dir>/<normalized>/plugin.rs        # registration module
//! <dir>/<normalized>/dist/index.html  # default landing page
//! ```
//!
//! The generated module embeds `dist/` at compile time and exposes a
//! `plugin()` constructor whose descriptor the host passes to
//! `UiPluginRegistry::register`. Generation is not transactional: a
//! failure mid-way leaves the already-written entries behind, and the
//! error names the step that failed.

use std::path::PathBuf;

use crate::error::PlugError;
use crate::naming::snakecase;
use crate::prompt;

/// Source template for the generated `plugin.rs`.
///
/// Substitution markers: `{module}` and `{base}` take the normalized name,
/// `{dist_path}` the embed path of the dist directory as seen from the
/// host crate, `{name}` the raw name as typed by the user.
const PLUGIN_SOURCE_TEMPLATE: &str = r#"//! UI plugin module for the `{module}` plugin.

use std::sync::Arc;

use include_dir::{include_dir, Dir};
use panelkit_uiplugin::{EmbeddedAssets, UiPlugin};

static DIST: Dir<'_> = include_dir!("{dist_path}");

/// Returns the descriptor to pass to `UiPluginRegistry::register`.
pub fn plugin() -> UiPlugin {
    UiPlugin {
        name: "{name}".to_string(),
        base: "{base}".to_string(),
        icon: "ri-plug-line".to_string(),
        assets: Arc::new(EmbeddedAssets::new(&DIST)),
        ignore_route: false,
    }
}
"#;

/// Template for the generated `dist/index.html`.
const INDEX_HTML_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>{name}</title>
    <style>
        body {
            font-family: system-ui, -apple-system, sans-serif;
            max-width: 800px;
            margin: 0 auto;
            padding: 20px;
            line-height: 1.6;
        }
        h1 {
            color: #333;
            margin-bottom: 30px;
        }
        p {
            color: #666;
        }
        .container {
            background: #f8f9fa;
            border-radius: 8px;
            padding: 20px;
            margin: 20px 0;
        }
        .code {
            background: #e9ecef;
            padding: 10px;
            border-radius: 4px;
            font-family: 'Courier New', monospace;
            font-size: 14px;
        }
    </style>
</head>
<body>
    <h1>Welcome to {name}</h1>
    <p>This is a UI plugin page for panelkit.</p>

    <div class="container">
        <h2>Getting Started</h2>
        <p>You can customize this page with your own content and styling.</p>
        <p>This plugin is registered with the base path: <span class="code">{base}</span></p>
    </div>

    <div class="container">
        <h2>Development</h2>
        <p>To develop this plugin:</p>
        <ul>
            <li>Replace the content in the <span class="code">dist/</span> directory with your frontend assets</li>
            <li>Build your frontend application and output to the <span class="code">dist/</span> directory</li>
            <li>Rebuild your panelkit application to pick up the changes</li>
        </ul>
    </div>
</body>
</html>
"#;

/// Configuration for the scaffold generator.
#[derive(Debug, Clone)]
pub struct Config {
    /// Root directory under which plugin trees are created.
    pub dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("ui-plugins"),
        }
    }
}

/// The UI plugin scaffold generator.
pub struct Plug {
    config: Config,
}

impl Plug {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Create a new plugin source tree for `name`.
    ///
    /// In interactive mode the user is asked to confirm first (default
    /// No); a decline prints a cancellation notice and returns `Ok(None)`
    /// without touching the filesystem. On success, returns the created
    /// plugin directory.
    pub async fn create(&self, name: &str, interactive: bool) -> Result<Option<PathBuf>, PlugError> {
        if name.is_empty() {
            return Err(PlugError::MissingName);
        }

        let normalized = snakecase(name);
        let plugin_dir = self.config.dir.join(&normalized);

        if interactive {
            let question = format!(
                "Do you really want to create UI plugin {name:?} in {:?}?",
                plugin_dir
            );
            if !prompt::yes_no(&question, false) {
                println!("The command has been cancelled");
                return Ok(None);
            }
        }

        tokio::fs::create_dir_all(&self.config.dir)
            .await
            .map_err(PlugError::CreateRootDir)?;

        tokio::fs::create_dir_all(&plugin_dir)
            .await
            .map_err(PlugError::CreatePluginDir)?;

        let dist_dir = plugin_dir.join("dist");
        tokio::fs::create_dir_all(&dist_dir)
            .await
            .map_err(PlugError::CreateDistDir)?;

        let source_path = plugin_dir.join("plugin.rs");
        tokio::fs::write(&source_path, self.render_plugin_source(name, &normalized))
            .await
            .map_err(PlugError::WritePluginSource)?;

        let index_path = dist_dir.join("index.html");
        tokio::fs::write(&index_path, render_index_html(name, &normalized))
            .await
            .map_err(PlugError::WriteIndexHtml)?;

        tracing::debug!(name = %name, dir = %plugin_dir.display(), "UI plugin scaffolded");

        if interactive {
            println!("Successfully created UI plugin {name:?} in {:?}", plugin_dir);
            println!("Plugin files:");
            println!("  - {}", source_path.display());
            println!("  - {}", index_path.display());
            println!();
            println!("To use this plugin, you need to:");
            println!("1. Declare the generated module in your server crate and register it:");
            println!("   registry.register([{normalized}::plugin()]);");
            println!("2. Build the dist directory with your frontend assets");
            println!("3. Rebuild your panelkit application");
        }

        Ok(Some(plugin_dir))
    }

    /// Render the `plugin.rs` source for the given names.
    ///
    /// The module is compiled into a host crate under `crates/`, and
    /// `include_dir!` resolves relative to that crate's manifest — not
    /// the workspace root the `plug` command runs from. A relative
    /// plugins directory is therefore reached via `../../`; an absolute
    /// one is embedded as-is.
    pub fn render_plugin_source(&self, name: &str, normalized: &str) -> String {
        let dist_dir = self.config.dir.join(normalized).join("dist");
        let dist_path = if dist_dir.is_absolute() {
            dist_dir.to_string_lossy().replace('\\', "/")
        } else {
            format!(
                "$CARGO_MANIFEST_DIR/../../{}",
                dist_dir.to_string_lossy().replace('\\', "/")
            )
        };

        PLUGIN_SOURCE_TEMPLATE
            .replace("{module}", normalized)
            .replace("{dist_path}", &dist_path)
            .replace("{base}", normalized)
            .replace("{name}", name)
    }
}

/// Render the default landing page for the given names.
pub fn render_index_html(name: &str, normalized: &str) -> String {
    INDEX_HTML_TEMPLATE
        .replace("{base}", normalized)
        .replace("{name}", name)
}

// ─── Tests ──────────────────────────────────────────────────────────────
