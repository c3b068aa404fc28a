//! Configuration management for the tracklist-to-Spotify CLI.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and `.env` files. The configuration system follows
//! a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)

use std::{env, path::PathBuf};

use crate::types::Credentials;

/// Loads environment variables from a `.env` file in the local data
/// directory.
///
/// Creates the directory structure if needed and loads variables from
/// `tracklistify/.env` under the platform-specific local data directory
/// (`~/.local/share` on Linux, `~/Library/Application Support` on macOS,
/// `%LOCALAPPDATA%` on Windows). A missing file is not an error; values
/// may come straight from the process environment instead.
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("tracklistify/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Returns the Spotify Web API base URL.
///
/// Reads `SPOTIFY_API_URL`, falling back to the public endpoint when the
/// variable is not set.
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL").unwrap_or_else(|_| "https://api.spotify.com/v1".to_string())
}

/// Builds the credentials passed into every Spotify call.
///
/// Reads the bearer token from `SPOTIFY_API_TOKEN` and the account from
/// `SPOTIFY_USER_ID`. Both are supplied out of band; token acquisition and
/// refresh are outside the scope of this tool.
pub fn credentials() -> Result<Credentials, String> {
    let token =
        env::var("SPOTIFY_API_TOKEN").map_err(|_| "SPOTIFY_API_TOKEN must be set".to_string())?;
    let user_id =
        env::var("SPOTIFY_USER_ID").map_err(|_| "SPOTIFY_USER_ID must be set".to_string())?;
    Ok(Credentials { token, user_id })
}
