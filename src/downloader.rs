use crate::error::Result;
use futures::StreamExt;
use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::{fs::File, io::Write, path::Path};

/// GET `url` and decode the body as json, any non 2xx status is an error
pub async fn get_json<T: DeserializeOwned>(client: &Client, url: &str) -> Result<T> {
    debug!("GET {}", url);
    let response = client.get(url).send().await?.error_for_status()?;
    let body = response.bytes().await?;
    Ok(serde_json::from_slice(&body)?)
}

/// Stream `url` into `path` and return the number of bytes written.
///
/// The file is only created once the server answered with a success
/// status, and is truncated if it already exists.
pub async fn download_file(client: &Client, url: &str, path: &Path) -> Result<u64> {
    debug!("GET {}", url);
    let response = client.get(url).send().await?.error_for_status()?;

    let mut file = File::create(path)?;
    let mut written: u64 = 0;
    let mut stream = response.bytes_stream();

    while let Some(item) = stream.next().await {
        let chunk = item?;
        file.write_all(&chunk)?;
        written += chunk.len() as u64;
    }
    file.flush()?;

    debug!("wrote {} bytes to {}", written, path.display());
    Ok(written)
}
