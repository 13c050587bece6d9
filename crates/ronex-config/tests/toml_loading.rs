//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for sandboxed files and env vars.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use ronex_config::{ConfigError, RonexConfig};

fn jail_figment() -> Figment {
    Figment::from(Serialized::defaults(RonexConfig::default()))
        .merge(Toml::file("config.toml"))
        .merge(Env::prefixed("RONEX_").split("__"))
}

#[test]
fn loads_sections_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[api]
base_url = "https://api.ronex.id"
timeout_secs = 5

[cache]
ttl_secs = 60

[catalog]
item_width = 320.0
item_height = 400.0

[image]
max_edge_px = 1024
jpeg_quality = 70
"#,
        )?;

        let config = RonexConfig::from_figment(jail_figment()).expect("config loads");
        assert_eq!(config.api.base_url, "https://api.ronex.id");
        assert_eq!(config.api.timeout_secs, 5);
        assert_eq!(config.cache.ttl().as_secs(), 60);
        assert!((config.catalog.item_width - 320.0).abs() < f64::EPSILON);
        assert_eq!(config.catalog.windowing_threshold, 8);
        assert_eq!(config.image.max_edge_px, 1024);
        assert_eq!(config.image.jpeg_quality, 70);
        assert_eq!(config.image.max_upload_bytes, 10 * 1024 * 1024);
        Ok(())
    });
}

#[test]
fn env_beats_toml() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[api]\nbase_url = \"https://from-toml.example\"\n")?;
        jail.set_env("RONEX_API__BASE_URL", "https://from-env.example");
        jail.set_env("RONEX_CACHE__TTL_SECS", "15");

        let config = RonexConfig::from_figment(jail_figment()).expect("config loads");
        assert_eq!(config.api.base_url, "https://from-env.example");
        assert_eq!(config.cache.ttl_secs, 15);
        Ok(())
    });
}

#[test]
fn project_local_file_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".ronex")?;
        jail.create_file(".ronex/config.toml", "[cache]\nttl_secs = 42\n")?;

        let config = RonexConfig::load().expect("config loads");
        assert_eq!(config.cache.ttl_secs, 42);
        Ok(())
    });
}

#[test]
fn invalid_quality_fails_validation() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[image]\njpeg_quality = 150\n")?;

        let err = RonexConfig::from_figment(jail_figment()).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { ref field, .. } if field == "image.jpeg_quality"
        ));
        Ok(())
    });
}

#[test]
fn malformed_value_is_a_figment_error() {
    Jail::expect_with(|jail| {
        jail.set_env("RONEX_API__TIMEOUT_SECS", "soon");

        let err = RonexConfig::from_figment(jail_figment()).unwrap_err();
        assert!(matches!(err, ConfigError::Figment(_)));
        Ok(())
    });
}
