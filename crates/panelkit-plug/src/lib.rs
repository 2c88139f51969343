//! Panelkit UI plugin scaffolding
//!
//! Adds the `plug` command to a panelkit host: given a human-readable
//! plugin name it emits a ready-to-compile plugin source tree under the
//! configured plugins directory — a `plugin.rs` module that registers the
//! plugin against `panelkit-uiplugin`, and a default `dist/index.html`
//! landing page.

pub mod command;
pub mod error;
pub mod naming;
pub mod prompt;
pub mod scaffold;

pub use command::PlugArgs;
pub use error::PlugError;
pub use naming::snakecase;
pub use scaffold::{Config, Plug};
