use std::fmt;

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tabled::Tabled;
use thiserror::Error;

/// Credentials for the Spotify Web API, supplied out of band through the
/// environment. Passed by reference into every service call; there is no
/// process-global authentication state.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub token: String,
    pub user_id: String,
}

/// An `(artist, title)` pair extracted from the tracklist page, not yet
/// matched against the Spotify catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackRef {
    pub artist: String,
    pub title: String,
}

#[derive(Tabled)]
pub struct TracklistTableRow {
    #[tabled(rename = "#")]
    pub position: usize,
    pub artist: String,
    pub title: String,
}

#[derive(Tabled)]
pub struct UnresolvedTableRow {
    pub artist: String,
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistRequest {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistResponse {
    pub uri: String,
}

/// Search response body. Spotify reports request-level failures inside the
/// body as an `error` object rather than through the HTTP status alone, so
/// both shapes are optional and classified after deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub tracks: Option<TracksPage>,
    pub error: Option<ApiErrorBody>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TracksPage {
    pub items: Vec<FoundTrack>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoundTrack {
    pub uri: String,
    pub name: String,
    pub artists: Vec<FoundArtist>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoundArtist {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub status: u16,
    pub message: String,
}

/// The pipeline stage an external call belongs to. Carried inside
/// `ServiceError` so failures report where in the run they happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    PageFetch,
    CreatePlaylist,
    Search,
    AppendTracks,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::PageFetch => "tracklist page fetch",
            Stage::CreatePlaylist => "playlist creation",
            Stage::Search => "track search",
            Stage::AppendTracks => "track append",
        };
        write!(f, "{}", name)
    }
}

/// Errors from the outbound HTTP calls of the pipeline.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Network-level failure or an undecodable body.
    #[error("{stage}: {source}")]
    Transport {
        stage: Stage,
        source: reqwest::Error,
    },

    /// A non-success HTTP response, reported with the raw body.
    #[error("{stage} failed with status {status}: {body}")]
    Status {
        stage: Stage,
        status: StatusCode,
        body: String,
    },

    /// A search response whose body carried an `error` object.
    #[error("search error for \"{artist} - {title}\": {message}")]
    Api {
        artist: String,
        title: String,
        message: String,
    },
}

impl ServiceError {
    pub fn transport(stage: Stage, source: reqwest::Error) -> Self {
        ServiceError::Transport { stage, source }
    }
}

/// Outcome of resolving a whole tracklist. `resolved` and `unresolved`
/// preserve encounter order; `halted` carries the error that stopped
/// resolution early in strict mode, with the other two fields holding
/// whatever had been accumulated up to that point.
#[derive(Debug)]
pub struct Resolution {
    pub resolved: Vec<String>,
    pub unresolved: Vec<TrackRef>,
    pub halted: Option<ServiceError>,
}
