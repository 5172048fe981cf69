use crate::{
    downloader::get_json,
    endpoint::Endpoint,
    error::{Error, Result},
};
use reqwest::Client;

/// First entry of `versions.json`, which Data Dragon orders newest first.
/// No semantic version comparison is done.
pub async fn latest_version(client: &Client, base_url: &str) -> Result<String> {
    let versions: Vec<String> = get_json(client, &Endpoint::Versions.url(base_url)).await?;
    versions.into_iter().next().ok_or(Error::NoVersion)
}

#[cfg(test)]
mod test {
    use super::latest_version;
    use crate::{
        error::Error,
        mock::{unreachable_url, MockServer, Reply},
    };
    use reqwest::Client;

    #[tokio::test]
    async fn takes_first_entry() {
        let server = MockServer::start(vec![(
            "/api/versions.json",
            Reply::ok(r#"["14.1.1", "14.0.1"]"#),
        )])
        .await;

        let version = latest_version(&Client::new(), &server.url()).await.unwrap();
        assert_eq!(version, "14.1.1");
    }

    #[tokio::test]
    async fn empty_list() {
        let server = MockServer::start(vec![("/api/versions.json", Reply::ok("[]"))]).await;
        let res = latest_version(&Client::new(), &server.url()).await;
        assert!(matches!(res, Err(Error::NoVersion)));
    }

    #[tokio::test]
    async fn network_error() {
        let res = latest_version(&Client::new(), &unreachable_url()).await;
        assert!(matches!(res, Err(Error::Reqwest(_))));
    }

    #[tokio::test]
    async fn server_error() {
        let server = MockServer::start(vec![("/api/versions.json", Reply::status(503))]).await;
        let res = latest_version(&Client::new(), &server.url()).await;
        assert!(res.is_err());
    }
}
