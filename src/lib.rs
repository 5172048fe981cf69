use crate::error::{Error, Result};
use std::{env, path::PathBuf, time::Duration};

pub mod champion;
pub mod data;
pub mod downloader;
pub mod endpoint;
pub mod error;
pub mod icons;
pub mod version;

#[cfg(test)]
pub(crate) mod mock;

pub const DDRAGON_URL: &str = "https://ddragon.leagueoflegends.com";
pub const DEFAULT_LOCALE: &str = "pt_BR";
pub const DEFAULT_ICONS_DIR: &str = "assets/champions/icons";

/// Where to fetch Data Dragon content from and where to put the icons
#[derive(Clone, Debug)]
pub struct DataDragon {
    pub base_url: String,
    pub locale: String,
    pub icons_dir: PathBuf,

    /// No timeout when `None`, a stalled request then blocks the run
    pub timeout: Option<Duration>,
}

impl Default for DataDragon {
    fn default() -> Self {
        Self {
            base_url: DDRAGON_URL.to_string(),
            locale: DEFAULT_LOCALE.to_string(),
            icons_dir: PathBuf::from(DEFAULT_ICONS_DIR),
            timeout: None,
        }
    }
}

impl DataDragon {
    pub fn new(base_url: String, locale: String, icons_dir: PathBuf) -> Self {
        Self {
            base_url,
            locale,
            icons_dir,
            timeout: None,
        }
    }

    /// Default configuration with `DDRAGON_BASE_URL`, `DDRAGON_LOCALE`,
    /// `DDRAGON_ICONS_DIR` and `DDRAGON_TIMEOUT_SECS` applied on top
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut app = Self::default();

        if let Some(base_url) = lookup("DDRAGON_BASE_URL") {
            app.base_url = base_url;
        }
        if let Some(locale) = lookup("DDRAGON_LOCALE") {
            app.locale = locale;
        }
        if let Some(dir) = lookup("DDRAGON_ICONS_DIR") {
            app.icons_dir = PathBuf::from(dir);
        }
        if let Some(secs) = lookup("DDRAGON_TIMEOUT_SECS") {
            let secs = secs.trim().parse::<u64>().map_err(|_| {
                Error::Config(format!("DDRAGON_TIMEOUT_SECS is not a number: {}", secs))
            })?;
            app.timeout = Some(Duration::from_secs(secs));
        }

        Ok(app)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub(crate) fn http_client(&self) -> Result<reqwest::Client> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(builder.build()?)
    }
}
