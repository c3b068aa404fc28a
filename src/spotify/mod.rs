//! # Spotify Integration Module
//!
//! This module is the integration layer between the CLI and the Spotify
//! Web API. It covers the two API surfaces the pipeline needs:
//!
//! - [`playlist`] - playlist creation and chunked track appends
//! - [`search`] - per-track catalog search and the resolution loop
//!
//! ## Authentication
//!
//! All calls take an explicit [`Credentials`](crate::types::Credentials)
//! reference carrying the bearer token and user ID; there is no shared
//! client state. Token acquisition is out of scope — the token arrives
//! through the environment (see [`config`](crate::config)).
//!
//! ## Error handling
//!
//! Every call returns a `Result` with a
//! [`ServiceError`](crate::types::ServiceError) naming the failing stage.
//! Playlist creation and appends treat any non-success response as fatal
//! and surface the raw body. Search failures are per-item: the resolver
//! either halts early with partial results (strict, the default) or skips
//! the item and continues (lenient). There are no automatic retries;
//! transient failures are the caller's responsibility.
//!
//! ## API coverage
//!
//! - `POST /users/{user_id}/playlists` - create a playlist
//! - `GET /search?q=track:{title}%20artist:{artist}&type=track&limit=7`
//! - `POST /playlists/{playlist_id}/tracks?uris=...` - append tracks

use reqwest::Response;

use crate::types::{ServiceError, Stage};

pub mod playlist;
pub mod search;

/// Maps a non-success response to a stage error carrying the raw body.
pub(crate) async fn ensure_success(
    stage: Stage,
    response: Response,
) -> Result<Response, ServiceError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(ServiceError::Status {
        stage,
        status,
        body,
    })
}
