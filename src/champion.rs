use crate::{
    data::champion::{Champion, ChampionManifest},
    downloader::get_json,
    endpoint::Endpoint,
    error::Result,
};
use reqwest::Client;
use std::collections::HashMap;

/// Champion key to metadata, taken from the `data` field of `champion.json`
pub async fn champions(
    client: &Client,
    base_url: &str,
    version: &str,
    locale: &str,
) -> Result<HashMap<String, Champion>> {
    let url = Endpoint::Champions { version, locale }.url(base_url);
    let manifest: ChampionManifest = get_json(client, &url).await?;
    Ok(manifest.data)
}
