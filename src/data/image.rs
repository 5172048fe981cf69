use serde::{Deserialize, Serialize};

/// Image reference of a Data Dragon entry
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct Image {
    /// File name of the standalone icon (ex: Aatrox.png)
    pub full: Option<String>,

    pub sprite: Option<String>,
    pub group: Option<String>,
    pub x: Option<u32>,
    pub y: Option<u32>,
    pub w: Option<u32>,
    pub h: Option<u32>,
}
