//! Panelkit UI plugin system
//!
//! Mounts auxiliary UI plugins — self-contained bundles of static web
//! assets — into the admin backend and exposes them as navigable entries
//! in the admin sidebar. Plugins are compiled into the host, registered
//! with the [`UiPluginRegistry`] during startup, and served through two
//! route bindings: a JSON listing endpoint and a per-plugin static
//! asset endpoint.

pub mod assets;
pub mod registry;
pub mod routes;

pub use assets::{AssetError, AssetTree, DirAssets, EmbeddedAssets};
pub use registry::{UiPlugin, UiPluginInfo, UiPluginRegistry};
pub use routes::ui_plugin_router;
