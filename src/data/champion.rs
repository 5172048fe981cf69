use super::image::Image;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// `champion.json` of one version and locale
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct ChampionManifest {
    #[serde(rename = "type", default)]
    pub t: String,
    #[serde(default)]
    pub format: String,
    #[serde(default)]
    pub version: String,
    pub data: HashMap<String, Champion>,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default)]
pub struct Champion {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub title: String,
    pub image: Option<Image>,
}

impl Champion {
    /// Icon file name, `key` is only used to name the champion in the error
    pub fn icon_file(&self, key: &str) -> Result<&str> {
        self.image
            .as_ref()
            .and_then(|image| image.full.as_deref())
            .ok_or_else(|| Error::MissingIcon(key.to_string()))
    }
}
