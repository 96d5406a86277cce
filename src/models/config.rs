//! Configuration model loaded from external sources.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::CLIENTS_STORAGE_KEY;

/// Which user-visible notifications the services layer emits.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct NotificationPrefs {
    /// Process updates: checklist stages, completion, retrieval changes.
    #[serde(default = "enabled")]
    pub notif_pembaruan_proses: bool,
    /// Saved client notes.
    #[serde(default = "enabled")]
    pub notif_catatan_baru: bool,
    /// Account activity; kept for backup compatibility, unused by the core.
    #[serde(default = "enabled")]
    pub notif_aktivitas_akun: bool,
}

impl Default for NotificationPrefs {
    fn default() -> Self {
        Self {
            notif_pembaruan_proses: true,
            notif_catatan_baru: true,
            notif_aktivitas_akun: true,
        }
    }
}

fn enabled() -> bool {
    true
}

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across workflows, passed in explicitly at
/// construction rather than read ad hoc.
pub struct AppConfig {
    /// Persistence key the client collection is stored under.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    #[serde(default)]
    pub notifications: NotificationPrefs,
}

fn default_storage_key() -> String {
    CLIENTS_STORAGE_KEY.to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            notifications: NotificationPrefs::default(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from an optional YAML file with `APP_`-prefixed
    /// environment overrides.
    pub fn load(config_file: Option<&str>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();
        if let Some(path) = config_file {
            builder = builder.add_source(File::with_name(path));
        }
        builder
            .add_source(Environment::with_prefix("APP"))
            .build()?
            .try_deserialize()
    }
}
