//! Plugin registry — the ordered list of UI plugin descriptors.
//!
//! The registry is populated during process startup from the composition
//! root, then frozen behind an `Arc` before the server begins handling
//! traffic. Registration order is preserved and is the order in which
//! plugins appear in the listing JSON and in which their static routes
//! are mounted. Descriptors are never mutated or removed.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::assets::AssetTree;

/// A UI plugin descriptor: static web assets plus sidebar metadata.
pub struct UiPlugin {
    /// Display name shown in the admin sidebar.
    pub name: String,
    /// URL path segment under which the assets are mounted, eg. "my_plugin".
    pub base: String,
    /// Icon class name for the sidebar entry (eg. "ri-plug-line"); may be empty.
    pub icon: String,
    /// The plugin's static content.
    pub assets: Arc<dyn AssetTree>,
    /// When true the plugin is still listed but no static route is mounted.
    pub ignore_route: bool,
}

impl fmt::Debug for UiPlugin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UiPlugin")
            .field("name", &self.name)
            .field("base", &self.base)
            .field("icon", &self.icon)
            .field("ignore_route", &self.ignore_route)
            .finish_non_exhaustive()
    }
}

/// Projection of a descriptor to the fields the listing endpoint exposes.
///
/// `assets` and `ignore_route` never appear in the listing JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UiPluginInfo {
    pub name: String,
    pub base: String,
    pub icon: String,
}

impl From<&UiPlugin> for UiPluginInfo {
    fn from(p: &UiPlugin) -> Self {
        Self {
            name: p.name.clone(),
            base: p.base.clone(),
            icon: p.icon.clone(),
        }
    }
}

/// Ordered collection of registered UI plugins.
///
/// Mutation happens only through [`register`](Self::register) during the
/// startup phase; afterwards the registry is shared read-only across
/// request tasks with no synchronization.
#[derive(Debug, Default)]
pub struct UiPluginRegistry {
    plugins: Vec<UiPlugin>,
}

impl UiPluginRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one or more UI plugins.
    ///
    /// Each descriptor must have a non-empty name and a non-empty base
    /// path. A violation is a configuration bug, so this panics rather
    /// than returning an error. Descriptors are appended in argument
    /// order; duplicate names or bases are the caller's responsibility.
    pub fn register<I>(&mut self, plugins: I)
    where
        I: IntoIterator<Item = UiPlugin>,
    {
        for p in plugins {
            if p.name.is_empty() {
                panic!("ui-plugins: name cannot be empty");
            }
            if p.base.is_empty() {
                panic!("ui-plugins: base path cannot be empty");
            }
            self.plugins.push(p);
        }
    }

    /// Registered plugins in registration order.
    pub fn plugins(&self) -> &[UiPlugin] {
        &self.plugins
    }

    /// Listing projections in registration order.
    pub fn infos(&self) -> Vec<UiPluginInfo> {
        self.plugins.iter().map(UiPluginInfo::from).collect()
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────
