//! HTTP access to the game-data mirrors
//!
//! Everything that touches the network goes through [`HttpSource`]:
//! - `UreqSource` for real blocking requests
//! - `MockSource` (tests only) serving canned bodies and counting requests

mod ureq_source;

#[cfg(test)]
mod mock;

#[cfg(test)]
pub use mock::MockSource;
pub use ureq_source::UreqSource;

use serde::de::DeserializeOwned;
use thiserror::Error;

/// Root of the raw game-data mirror, one directory per locale
pub const GAME_DATA_BASE: &str = "https://raw.githubusercontent.com/Kengxxiao/ArknightsGameData/master";

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("{url} returned status {status}")]
    Status { url: String, status: u16 },

    #[error("Request to {url} failed: {message}")]
    Transport { url: String, message: String },

    #[error("IO error reading {url}: {source}")]
    Io {
        url: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON from {url}: {source}")]
    Json {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// A blocking source of response bodies
pub trait HttpSource {
    /// GET `url` and return the body of a success response
    ///
    /// Non-success statuses are reported as [`FetchError::Status`].
    fn get(&self, url: &str) -> Result<Vec<u8>, FetchError>;

    /// GET `url` and parse the body as JSON
    fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError>
    where
        Self: Sized,
    {
        let body = self.get(url)?;
        serde_json::from_slice(&body).map_err(|source| FetchError::Json {
            url: url.to_string(),
            source,
        })
    }
}

/// Game server region, which selects the locale directory of the mirror
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Server {
    Cn,
    En,
}

impl Server {
    pub const fn locale(self) -> &'static str {
        match self {
            Server::Cn => "zh_CN",
            Server::En => "en_US",
        }
    }
}

/// Game-data tables the pipeline reads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameTable {
    Characters,
    Building,
    Constants,
}

impl GameTable {
    pub const fn file_name(self) -> &'static str {
        match self {
            GameTable::Characters => "character_table.json",
            GameTable::Building => "building_data.json",
            GameTable::Constants => "gamedata_const.json",
        }
    }

    /// Full mirror URL of this table for the given server
    pub fn url(self, server: Server) -> String {
        format!(
            "{}/{}/gamedata/excel/{}",
            GAME_DATA_BASE,
            server.locale(),
            self.file_name()
        )
    }
}
