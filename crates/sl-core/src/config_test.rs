use super::*;
use tempfile::TempDir;

#[test]
fn test_load_minimal_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("starlift.yml");
    std::fs::write(&path, "name: northwind").unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.name, "northwind");
    assert_eq!(config.version, "1.0.0");
    assert_eq!(config.raw_dir, "data/raw");
    assert_eq!(config.staging_dir, "data/staging");
    assert_eq!(config.warehouse_dir, "data/warehouse");
}

#[test]
fn test_load_full_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("starlift.yml");
    std::fs::write(
        &path,
        r#"
name: northwind
version: 2.0.0
raw_dir: extracts
staging_dir: cleaned
warehouse_dir: dw
"#,
    )
    .unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.version, "2.0.0");
    assert_eq!(config.raw_dir, "extracts");
    assert_eq!(config.staging_dir, "cleaned");
    assert_eq!(config.warehouse_dir, "dw");
}

#[test]
fn test_load_missing_file() {
    let dir = TempDir::new().unwrap();
    let result = Config::load(&dir.path().join("starlift.yml"));
    assert!(matches!(result, Err(CoreError::ConfigNotFound { .. })));
}

#[test]
fn test_load_from_dir_prefers_yml() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("starlift.yml"), "name: from-yml").unwrap();
    std::fs::write(dir.path().join("starlift.yaml"), "name: from-yaml").unwrap();

    let config = Config::load_from_dir(dir.path()).unwrap();
    assert_eq!(config.name, "from-yml");
}

#[test]
fn test_load_from_dir_falls_back_to_yaml() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("starlift.yaml"), "name: from-yaml").unwrap();

    let config = Config::load_from_dir(dir.path()).unwrap();
    assert_eq!(config.name, "from-yaml");
}

#[test]
fn test_empty_name_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("starlift.yml");
    std::fs::write(&path, "name: \"\"").unwrap();

    let result = Config::load(&path);
    assert!(matches!(result, Err(CoreError::ConfigInvalid { .. })));
}

#[test]
fn test_empty_dir_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("starlift.yml");
    std::fs::write(&path, "name: northwind\nraw_dir: \"\"").unwrap();

    let result = Config::load(&path);
    assert!(matches!(result, Err(CoreError::ConfigInvalid { .. })));
}

#[test]
fn test_unknown_field_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("starlift.yml");
    std::fs::write(&path, "name: northwind\nbogus: true").unwrap();

    assert!(Config::load(&path).is_err());
}

#[test]
fn test_paths_absolute() {
    let config = Config {
        name: "northwind".to_string(),
        version: default_version(),
        raw_dir: "data/raw".to_string(),
        staging_dir: "data/staging".to_string(),
        warehouse_dir: "data/warehouse".to_string(),
    };

    let root = Path::new("/project");
    assert_eq!(config.raw_dir_absolute(root), Path::new("/project/data/raw"));
    assert_eq!(
        config.staging_dir_absolute(root),
        Path::new("/project/data/staging")
    );
    assert_eq!(
        config.warehouse_dir_absolute(root),
        Path::new("/project/data/warehouse")
    );
}
