//! Persistence and fallback behavior of the permissions store.

use amr_console::permissions::{
    admin_permissions, PermissionsConfig, PermissionsStore, Role, TabKey,
};

fn store_in(dir: &tempfile::TempDir) -> PermissionsStore {
    PermissionsStore::at(dir.path().join("permissions.json"))
}

#[test]
fn missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    assert_eq!(store.load(), PermissionsConfig::default());
}

#[test]
fn saved_config_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);

    let mut config = PermissionsConfig::default();
    assert!(config.toggle_tab(Role::Viewer, TabKey::Battery));
    assert!(config.set_download(Role::Operator, true));
    store.save(&config).unwrap();

    assert_eq!(store.load(), config);
}

#[test]
fn save_creates_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let store = PermissionsStore::at(dir.path().join("nested/deeper/permissions.json"));
    store.save(&PermissionsConfig::default()).unwrap();
    assert!(store.path().exists());
}

#[test]
fn malformed_blob_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    std::fs::write(store.path(), "{not json").unwrap();
    assert_eq!(store.load(), PermissionsConfig::default());
}

#[test]
fn partial_blob_falls_back_per_role() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    std::fs::write(
        store.path(),
        r#"{"version":1,"operator":{"tabs":["home","api"],"canControl":false,"canDownload":true}}"#,
    )
    .unwrap();

    let loaded = store.load();
    assert_eq!(loaded.viewer, PermissionsConfig::default().viewer);
    assert_eq!(loaded.operator.tabs, vec![TabKey::Home, TabKey::Api]);
    assert!(!loaded.operator.can_control);
    assert!(loaded.operator.can_download);
}

#[test]
fn version_mismatch_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    std::fs::write(
        store.path(),
        r#"{"version":99,"viewer":{"tabs":["api"],"canControl":true,"canDownload":true}}"#,
    )
    .unwrap();
    assert_eq!(store.load(), PermissionsConfig::default());
}

#[test]
fn admin_permissions_are_fixed_and_not_editable() {
    let mut config = PermissionsConfig::default();
    assert!(!config.toggle_tab(Role::Admin, TabKey::Home));
    assert!(!config.set_control(Role::Admin, false));
    assert!(!config.set_download(Role::Admin, false));

    let admin = config.effective(Role::Admin);
    assert_eq!(admin, admin_permissions());
    assert_eq!(admin.tabs.len(), TabKey::ALL.len());
    assert!(admin.can_control);
    assert!(admin.can_download);
}

#[test]
fn removing_the_last_tab_is_rejected() {
    let mut config = PermissionsConfig::default();
    assert!(config.toggle_tab(Role::Viewer, TabKey::Robot));
    assert!(config.toggle_tab(Role::Viewer, TabKey::Map));
    assert_eq!(config.viewer.tabs, vec![TabKey::Home]);
    assert!(!config.toggle_tab(Role::Viewer, TabKey::Home));
    assert_eq!(config.viewer.tabs, vec![TabKey::Home]);
}

#[test]
fn toggled_tabs_keep_display_order() {
    let mut config = PermissionsConfig::default();
    assert!(config.toggle_tab(Role::Viewer, TabKey::Api));
    assert!(config.toggle_tab(Role::Viewer, TabKey::Job));
    assert_eq!(
        config.viewer.tabs,
        vec![TabKey::Home, TabKey::Robot, TabKey::Job, TabKey::Map, TabKey::Api]
    );
}

#[test]
fn defaults_match_role_expectations() {
    let config = PermissionsConfig::default();
    assert!(config.viewer.allows(TabKey::Home));
    assert!(!config.viewer.allows(TabKey::Api));
    assert!(!config.viewer.can_control);

    assert!(config.operator.allows(TabKey::Wireless));
    assert!(!config.operator.allows(TabKey::Api));
    assert!(config.operator.can_control);
    assert!(!config.operator.can_download);
}
