#[derive(Debug)]
pub enum Endpoint<'a> {
    Versions,
    Champions { version: &'a str, locale: &'a str },
    ChampionIcon { version: &'a str, image: &'a str },
}

impl Endpoint<'_> {
    pub fn url(&self, base_url: &str) -> String {
        let base = base_url.trim_end_matches('/');
        match self {
            Endpoint::Versions => format!("{}/api/versions.json", base),
            Endpoint::Champions { version, locale } => {
                format!("{}/cdn/{}/data/{}/champion.json", base, version, locale)
            }
            Endpoint::ChampionIcon { version, image } => {
                format!("{}/cdn/{}/img/champion/{}", base, version, image)
            }
        }
    }
}
