use reqwest::Client;

use crate::{
    config,
    spotify::ensure_success,
    types::{CreatePlaylistRequest, CreatePlaylistResponse, Credentials, ServiceError, Stage},
};

// Spotify caps a single append request at 100 track URIs.
pub const APPEND_CHUNK_SIZE: usize = 100;

/// Creates an empty playlist for the credential's user and returns the
/// service-assigned playlist ID.
///
/// The ID is the trailing segment of the composite `uri` field in the
/// response (`spotify:playlist:<id>`). A non-success response or a body
/// that does not decode is a creation error carrying the HTTP status and
/// the raw body.
pub async fn create(creds: &Credentials, name: String) -> Result<String, ServiceError> {
    let client = Client::new();
    let api_url = format!(
        "{uri}/users/{user}/playlists",
        uri = &config::spotify_apiurl(),
        user = creds.user_id
    );

    let request = CreatePlaylistRequest { name };
    let response = client
        .post(&api_url)
        .bearer_auth(&creds.token)
        .json(&request)
        .send()
        .await
        .map_err(|e| ServiceError::transport(Stage::CreatePlaylist, e))?;
    let response = ensure_success(Stage::CreatePlaylist, response).await?;

    let body = response
        .json::<CreatePlaylistResponse>()
        .await
        .map_err(|e| ServiceError::transport(Stage::CreatePlaylist, e))?;

    let id = body.uri.rsplit(':').next().unwrap_or(&body.uri).to_string();
    Ok(id)
}

/// Appends resolved track URIs to a playlist.
///
/// URIs go into the `uris` query parameter as a comma-joined,
/// percent-encoded list, in batches of at most [`APPEND_CHUNK_SIZE`] per
/// request. The response body is not consumed; only the status matters.
pub async fn add_tracks(
    creds: &Credentials,
    playlist_id: &str,
    uris: &[String],
) -> Result<(), ServiceError> {
    let client = Client::new();

    for chunk in uris.chunks(APPEND_CHUNK_SIZE) {
        let joined = chunk.join(",");
        let api_url = format!(
            "{uri}/playlists/{id}/tracks?uris={uris}",
            uri = &config::spotify_apiurl(),
            id = playlist_id,
            uris = urlencoding::encode(&joined)
        );

        let response = client
            .post(&api_url)
            .bearer_auth(&creds.token)
            .send()
            .await
            .map_err(|e| ServiceError::transport(Stage::AppendTracks, e))?;
        ensure_success(Stage::AppendTracks, response).await?;
    }

    Ok(())
}
