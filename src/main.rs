use champion_icons::{icons::IconDownloader, DataDragon};
use std::process::exit;

#[tokio::main]
async fn main() {
    let downloader = match DataDragon::from_env().and_then(IconDownloader::new) {
        Ok(downloader) => downloader,
        Err(err) => {
            println!("[Error] {}", err);
            exit(1);
        }
    };

    // Icon failures are part of the report, only setup failures end up here
    if let Err(err) = downloader.run().await {
        println!("[Error] {}. Aborting.", err);
        exit(1);
    }
}
