use crate::{
    champion::champions,
    data::champion::Champion,
    downloader::download_file,
    endpoint::Endpoint,
    error::{Error, Result},
    version::latest_version,
    DataDragon,
};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, error, info, warn};
use reqwest::Client;
use std::{
    collections::HashMap,
    ffi::OsStr,
    fs::{self, create_dir_all},
    io,
    path::{self, Path, PathBuf},
};

/// Outcome of one `IconDownloader::run`
#[derive(Debug, Default, PartialEq)]
pub struct DownloadReport {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,

    /// Keys of the champions whose icon could not be saved
    pub failures: Vec<String>,

    /// Absolute path of the icons folder
    pub output_dir: PathBuf,
}

/// Downloads every champion icon of the latest Data Dragon version,
/// one request at a time.
///
/// # Example
/// ```no_run
/// # async fn icons() -> champion_icons::error::Result<()> {
/// use champion_icons::{icons::IconDownloader, DataDragon};
///
/// let report = IconDownloader::new(DataDragon::default())?.run().await?;
/// println!("{} icons saved", report.succeeded);
/// # Ok(())
/// # }
/// ```
pub struct IconDownloader {
    app: DataDragon,
    client: Client,
}

impl IconDownloader {
    pub fn new(app: DataDragon) -> Result<Self> {
        let client = app.http_client()?;
        Ok(Self { app, client })
    }

    pub fn create_directories(&self) -> Result<()> {
        create_dir_all(&self.app.icons_dir)?;
        Ok(())
    }

    pub async fn get_latest_version(&self) -> Result<String> {
        latest_version(&self.client, &self.app.base_url).await
    }

    pub async fn get_champions_data(&self, version: &str) -> Result<HashMap<String, Champion>> {
        champions(&self.client, &self.app.base_url, version, &self.app.locale).await
    }

    /// Save the icon as `<icons_dir>/<image_name>`, replacing any previous file
    pub async fn download_champion_icon(
        &self,
        name: &str,
        image_name: &str,
        version: &str,
    ) -> Result<u64> {
        if Path::new(image_name).file_name() != Some(OsStr::new(image_name)) {
            return Err(Error::Other(format!(
                "refusing icon file name {:?} of {}",
                image_name, name
            )));
        }

        let url = Endpoint::ChampionIcon {
            version,
            image: image_name,
        }
        .url(&self.app.base_url);
        download_file(&self.client, &url, &self.app.icons_dir.join(image_name)).await
    }

    /// Only directory creation, version lookup and manifest lookup (including
    /// an empty manifest) fail the run. Icons that can't be downloaded are counted in the report.
    pub async fn run(&self) -> Result<DownloadReport> {
        println!("Starting champion icon download...");

        self.create_directories().map_err(|err| {
            error!("can't create {}: {}", self.app.icons_dir.display(), err);
            err
        })?;

        let version = self.get_latest_version().await.map_err(|err| {
            error!("latest version lookup failed: {}", err);
            err
        })?;
        info!("latest Data Dragon version is {}", version);
        println!("Using Data Dragon version {}", version);

        let champions = self.get_champions_data(&version).await.map_err(|err| {
            error!("champion manifest lookup failed: {}", err);
            err
        })?;
        if champions.is_empty() {
            error!("champion manifest of {} is empty", version);
            return Err(Error::NoChampion);
        }

        let total = champions.len();
        info!("{} champions in the {} manifest", total, self.app.locale);
        println!("\nDownloading {} champion icons...", total);

        let pb = ProgressBar::new(total as u64);
        pb.set_style(
            ProgressStyle::with_template("{msg:>14} [{bar:40.cyan/blue}] {pos}/{len}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("=> "),
        );

        let mut report = DownloadReport {
            total,
            ..Default::default()
        };

        for (name, champion) in &champions {
            pb.set_message(name.clone());

            let res = match champion.icon_file(name) {
                Ok(image_name) => self.download_champion_icon(name, image_name, &version).await,
                Err(err) => Err(err),
            };

            match res {
                Ok(size) => {
                    debug!("{}: {} bytes", name, size);
                    report.succeeded += 1;
                }
                Err(err) => {
                    warn!("icon of {} failed: {}", name, err);
                    pb.suspend(|| eprintln!("[Error] can't download icon of {}: {}", name, err));
                    report.failures.push(name.clone());
                }
            }

            pb.inc(1);
        }
        pb.finish_and_clear();

        report.failed = report.failures.len();
        report.output_dir = absolute_dir(&self.app.icons_dir)?;

        println!("\nDownload finished!");
        println!("Total champions: {}", report.total);
        println!("Successful downloads: {}", report.succeeded);
        println!("Failures: {}", report.failed);
        println!("\nIcons saved to: {}", report.output_dir.display());

        Ok(report)
    }
}

fn absolute_dir(dir: &Path) -> io::Result<PathBuf> {
    fs::canonicalize(dir).or_else(|_| path::absolute(dir))
}
