//! Загрузка настроек из файла и переменных окружения.

use std::{env, fs};

use nbtree::{
    codec::CompressionLevel, config::CompressionSetting, logging::LogFormat, CompressionKind,
    Endian, NbtError, Settings,
};
use serial_test::serial;

const VARS: [&str; 6] = [
    "NBTREE_ENDIAN",
    "NBTREE_MAX_DEPTH",
    "NBTREE_COMPRESSION",
    "NBTREE_LEVEL",
    "NBTREE_LOGGING__LEVEL",
    "NBTREE_LOGGING__FORMAT",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_defaults() {
    clear_env();
    let settings = Settings::load().unwrap();
    assert_eq!(settings.endian, Endian::Big);
    assert_eq!(settings.max_depth, 512);
    assert_eq!(settings.compression, CompressionSetting::Gzip);
    assert_eq!(settings.level, None);

    let options = settings.codec_options().unwrap();
    assert_eq!(options.compression, Some(CompressionKind::Gzip));
    assert_eq!(options.level, CompressionLevel::Default);
}

#[test]
#[serial]
fn test_env_overrides() {
    clear_env();
    env::set_var("NBTREE_ENDIAN", "little");
    env::set_var("NBTREE_MAX_DEPTH", "64");
    env::set_var("NBTREE_COMPRESSION", "none");
    env::set_var("NBTREE_LOGGING__FORMAT", "json");

    let settings = Settings::load();
    clear_env();
    let settings = settings.unwrap();

    assert_eq!(settings.endian, Endian::Little);
    assert_eq!(settings.max_depth, 64);
    assert_eq!(settings.logging.format, LogFormat::Json);
    let options = settings.codec_options().unwrap();
    assert_eq!(options.compression, None);
}

#[test]
#[serial]
fn test_file_then_env() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("codec.toml");
    fs::write(
        &path,
        r#"
endian = "little"
compression = "zlib"
level = 9

[logging]
level = "debug"
"#,
    )
    .unwrap();

    env::set_var("NBTREE_LEVEL", "1");
    let settings = Settings::load_from(&path);
    clear_env();
    let settings = settings.unwrap();

    assert_eq!(settings.endian, Endian::Little);
    assert_eq!(settings.level, Some(1));
    assert_eq!(settings.logging.level, "debug");
    let options = settings.codec_options().unwrap();
    assert_eq!(options.compression, Some(CompressionKind::Zlib));
    assert_eq!(options.level, CompressionLevel::Level(1));
}

#[test]
#[serial]
fn test_invalid_values() {
    clear_env();
    env::set_var("NBTREE_LEVEL", "42");
    let settings = Settings::load();
    clear_env();
    let err = settings.unwrap().codec_options().unwrap_err();
    assert!(matches!(err, NbtError::InvalidConfig { .. }));

    env::set_var("NBTREE_ENDIAN", "middle");
    let result = Settings::load();
    clear_env();
    assert!(result.is_err());
}

#[test]
#[serial]
fn test_missing_explicit_file() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    assert!(Settings::load_from(dir.path().join("absent.toml")).is_err());
}
