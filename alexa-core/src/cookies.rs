//! Browser cookie file loading
//!
//! Authentication uses session cookies exported from a logged-in browser as
//! a JSON array of objects (`name`, `value`, `domain`, `path`, plus fields
//! we ignore). Entries missing a name or value are skipped with a warning
//! rather than failing the whole load.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{ApiError, ApiResult};

/// One cookie as found in a browser JSON export.
#[derive(Debug, Clone, Deserialize)]
pub struct BrowserCookie {
    pub name: String,
    pub value: String,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
}

/// Raw entry before validation; exports sometimes contain partial records.
#[derive(Debug, Deserialize)]
struct RawCookie {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    value: Option<String>,
    #[serde(default)]
    domain: Option<String>,
    #[serde(default)]
    path: Option<String>,
}

impl BrowserCookie {
    /// Render as a `Set-Cookie`-style string for a reqwest cookie jar.
    pub fn set_cookie_string(&self) -> String {
        let mut s = format!("{}={}", self.name, self.value);
        if let Some(domain) = &self.domain {
            s.push_str("; Domain=");
            s.push_str(domain);
        }
        if let Some(path) = &self.path {
            s.push_str("; Path=");
            s.push_str(path);
        }
        s
    }
}

/// Load cookies from a JSON export file, dropping incomplete entries.
pub fn load_cookies(path: &Path) -> ApiResult<Vec<BrowserCookie>> {
    let path_str = path.display().to_string();

    let raw = fs::read_to_string(path).map_err(|source| ApiError::CookieFile {
        path: path_str.clone(),
        source,
    })?;

    let entries: Vec<RawCookie> =
        serde_json::from_str(&raw).map_err(|source| ApiError::CookieFormat {
            path: path_str.clone(),
            source,
        })?;

    let mut cookies = Vec::with_capacity(entries.len());
    for entry in entries {
        match (entry.name, entry.value) {
            (Some(name), Some(value)) if !name.is_empty() && !value.is_empty() => {
                cookies.push(BrowserCookie {
                    name,
                    value,
                    domain: entry.domain,
                    path: entry.path,
                });
            }
            (name, _) => {
                warn!(name = ?name, "Skipping cookie entry with missing or empty name/value");
            }
        }
    }

    debug!(count = cookies.len(), file = %path_str, "Loaded cookies from JSON export");
    Ok(cookies)
}
