//! Integration tests for the configuration system

use super::test_utils::{global_config_file, with_xdg_env, NatroFixture};
use fieldswap::config::ConfigLoader;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_global_config_is_loaded() {
    let test_dir = TempDir::new().unwrap();
    let workspace = TempDir::new().unwrap();

    let config = with_xdg_env(&test_dir, || {
        let global = global_config_file(&test_dir);
        std::fs::create_dir_all(global.parent().unwrap()).unwrap();
        std::fs::write(&global, "[natro]\nroot = \"/global/natro\"\n").unwrap();

        assert_eq!(ConfigLoader::xdg_config_path(), Some(global));
        ConfigLoader::load(workspace.path()).unwrap()
    });

    assert_eq!(config.natro.root, Some(PathBuf::from("/global/natro")));
}

#[test]
fn test_workspace_config_overrides_global_config() {
    let test_dir = TempDir::new().unwrap();
    let workspace = TempDir::new().unwrap();

    let config = with_xdg_env(&test_dir, || {
        let global = global_config_file(&test_dir);
        std::fs::create_dir_all(global.parent().unwrap()).unwrap();
        std::fs::write(
            &global,
            "[natro]\nroot = \"/global/natro\"\n[key]\nname = \"f5\"\n",
        )
        .unwrap();

        let config_dir = workspace.path().join("config");
        std::fs::create_dir_all(&config_dir).unwrap();
        std::fs::write(
            config_dir.join("config.toml"),
            "[natro]\nroot = \"/workspace/natro\"\n",
        )
        .unwrap();

        ConfigLoader::load(workspace.path()).unwrap()
    });

    assert_eq!(config.natro.root, Some(PathBuf::from("/workspace/natro")));
    assert_eq!(config.key.name, "f5");
}

#[test]
fn test_load_without_any_config_uses_defaults() {
    let test_dir = TempDir::new().unwrap();
    let workspace = TempDir::new().unwrap();

    let config = with_xdg_env(&test_dir, || ConfigLoader::load(workspace.path()).unwrap());

    assert!(config.natro.root.is_none());
    assert_eq!(config.key.name, "f3");
    assert!(config.key.enabled);
    assert!(config.natro.resolve_paths().is_err());
}

#[test]
fn test_config_file_paths_feed_the_switch() {
    let fixture = NatroFixture::new();
    let config_dir = TempDir::new().unwrap();
    let config_file = config_dir.path().join("fieldswap.toml");
    std::fs::write(
        &config_file,
        format!(
            "[natro]\ncurrent_config = {:?}\nfield_config = {:?}\n",
            fixture.nm_config_path().to_string_lossy(),
            fixture.field_config_path().to_string_lossy()
        ),
    )
    .unwrap();

    let config = ConfigLoader::load_from_file(&config_file).unwrap();
    let paths = config.natro.resolve_paths().unwrap();
    assert_eq!(paths.current_config, fixture.nm_config_path());
    assert_eq!(paths.field_config, fixture.field_config_path());
}
