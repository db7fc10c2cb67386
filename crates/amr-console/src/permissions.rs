//! Role permissions and their persisted store.
//!
//! Viewer and operator permissions are editable by an admin and survive
//! sessions as a versioned JSON blob. Admin permissions are a fixed
//! constant and never persisted.

#![allow(missing_docs)]

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConsoleError;

/// Current blob format version.
pub const PERMISSIONS_VERSION: u32 = 1;

const STORE_DIR: &str = ".config/amr-console";
const STORE_FILE: &str = "permissions.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Viewer,
    Operator,
    Admin,
}

/// The seven console tabs, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabKey {
    Home,
    Robot,
    Job,
    Battery,
    Map,
    Wireless,
    Api,
}

impl TabKey {
    pub const ALL: [TabKey; 7] = [
        TabKey::Home,
        TabKey::Robot,
        TabKey::Job,
        TabKey::Battery,
        TabKey::Map,
        TabKey::Wireless,
        TabKey::Api,
    ];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RolePermissions {
    pub tabs: Vec<TabKey>,
    pub can_control: bool,
    pub can_download: bool,
}

impl RolePermissions {
    #[must_use]
    pub fn allows(&self, tab: TabKey) -> bool {
        self.tabs.contains(&tab)
    }
}

/// Fixed administrative permissions: every tab plus both capabilities.
#[must_use]
pub fn admin_permissions() -> RolePermissions {
    RolePermissions {
        tabs: TabKey::ALL.to_vec(),
        can_control: true,
        can_download: true,
    }
}

fn default_viewer() -> RolePermissions {
    RolePermissions {
        tabs: vec![TabKey::Home, TabKey::Robot, TabKey::Map],
        can_control: false,
        can_download: false,
    }
}

fn default_operator() -> RolePermissions {
    RolePermissions {
        tabs: vec![
            TabKey::Home,
            TabKey::Robot,
            TabKey::Job,
            TabKey::Battery,
            TabKey::Map,
            TabKey::Wireless,
        ],
        can_control: true,
        can_download: false,
    }
}

/// Editable permissions for the non-administrative roles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionsConfig {
    pub viewer: RolePermissions,
    pub operator: RolePermissions,
}

impl Default for PermissionsConfig {
    fn default() -> Self {
        Self {
            viewer: default_viewer(),
            operator: default_operator(),
        }
    }
}

impl PermissionsConfig {
    /// Effective permissions for a role. Admin is the fixed constant.
    #[must_use]
    pub fn effective(&self, role: Role) -> RolePermissions {
        match role {
            Role::Viewer => self.viewer.clone(),
            Role::Operator => self.operator.clone(),
            Role::Admin => admin_permissions(),
        }
    }

    fn role_mut(&mut self, role: Role) -> Option<&mut RolePermissions> {
        match role {
            Role::Viewer => Some(&mut self.viewer),
            Role::Operator => Some(&mut self.operator),
            Role::Admin => None,
        }
    }

    /// Toggle a tab for a role. Rejected for admin and when it would leave
    /// the role without any tab.
    pub fn toggle_tab(&mut self, role: Role, tab: TabKey) -> bool {
        let Some(permissions) = self.role_mut(role) else {
            return false;
        };
        if let Some(index) = permissions.tabs.iter().position(|entry| *entry == tab) {
            if permissions.tabs.len() == 1 {
                return false;
            }
            permissions.tabs.remove(index);
        } else {
            permissions.tabs.push(tab);
            permissions
                .tabs
                .sort_by_key(|entry| TabKey::ALL.iter().position(|key| key == entry));
        }
        true
    }

    pub fn set_control(&mut self, role: Role, allowed: bool) -> bool {
        match self.role_mut(role) {
            Some(permissions) => {
                permissions.can_control = allowed;
                true
            }
            None => false,
        }
    }

    pub fn set_download(&mut self, role: Role, allowed: bool) -> bool {
        match self.role_mut(role) {
            Some(permissions) => {
                permissions.can_download = allowed;
                true
            }
            None => false,
        }
    }
}

/// On-disk shape. Partial or stale blobs fall back per role on load.
#[derive(Debug, Serialize, Deserialize)]
struct StoredPermissions {
    version: u32,
    #[serde(default)]
    viewer: Option<RolePermissions>,
    #[serde(default)]
    operator: Option<RolePermissions>,
}

/// File-backed permissions store.
#[derive(Debug, Clone)]
pub struct PermissionsStore {
    path: PathBuf,
}

impl PermissionsStore {
    /// Store under the user's home directory
    /// (`~/.config/amr-console/permissions.json`), or next to the binary
    /// when no home directory is available.
    #[must_use]
    pub fn open_default() -> Self {
        let base = home::home_dir().unwrap_or_else(|| PathBuf::from("."));
        Self {
            path: base.join(STORE_DIR).join(STORE_FILE),
        }
    }

    #[must_use]
    pub fn at(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the blob; absent, malformed or stale data falls back to the
    /// defaults (per role for partially-shaped blobs).
    #[must_use]
    pub fn load(&self) -> PermissionsConfig {
        let Ok(text) = std::fs::read_to_string(&self.path) else {
            return PermissionsConfig::default();
        };
        let Ok(stored) = serde_json::from_str::<StoredPermissions>(&text) else {
            tracing::debug!(path = %self.path.display(), "malformed permissions blob, using defaults");
            return PermissionsConfig::default();
        };
        if stored.version != PERMISSIONS_VERSION {
            tracing::debug!(
                version = stored.version,
                "unknown permissions blob version, using defaults"
            );
            return PermissionsConfig::default();
        }
        PermissionsConfig {
            viewer: stored.viewer.unwrap_or_else(default_viewer),
            operator: stored.operator.unwrap_or_else(default_operator),
        }
    }

    /// Write the blob immediately (no debounce).
    pub fn save(&self, config: &PermissionsConfig) -> Result<(), ConsoleError> {
        let stored = StoredPermissions {
            version: PERMISSIONS_VERSION,
            viewer: Some(config.viewer.clone()),
            operator: Some(config.operator.clone()),
        };
        let text = serde_json::to_string_pretty(&stored)
            .map_err(|err| ConsoleError::PermissionsStore(err.to_string()))?;
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|err| ConsoleError::PermissionsStore(err.to_string()))?;
        }
        std::fs::write(&self.path, text)
            .map_err(|err| ConsoleError::PermissionsStore(err.to_string()))
    }
}
