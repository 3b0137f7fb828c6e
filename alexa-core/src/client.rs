//! HTTP implementation of [`ShoppingListApi`]
//!
//! A blocking reqwest client carrying the browser session cookies and the
//! mobile-app headers the Alexa endpoints expect. Strictly sequential: one
//! in-flight request at a time, no retries.

use std::sync::Arc;

use reqwest::blocking::Client;
use reqwest::cookie::Jar;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, DNT, UPGRADE_INSECURE_REQUESTS, USER_AGENT};
use reqwest::Url;
use serde_json::{json, Value};
use tracing::{debug, info, warn};

use crate::api::ShoppingListApi;
use crate::config::ApiConfig;
use crate::cookies::load_cookies;
use crate::error::{ApiError, ApiResult};
use crate::item::ShoppingItem;

// The endpoints reject desktop user agents; this is the PitanguiBridge
// string the Alexa iOS app sends.
const MOBILE_USER_AGENT: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 13_5_1 like Mac OS X) \
     AppleWebKit/605.1.15 (KHTML, like Gecko) Mobile/15E148 \
     PitanguiBridge/2.2.345247.0-[HARDWARE=iPhone10_4][SOFTWARE=13.5.1]";

/// Shopping list client authenticated with browser session cookies.
pub struct AlexaClient {
    http: Client,
    config: ApiConfig,
}

impl AlexaClient {
    /// Build a client from configuration, loading the cookie file into the
    /// request jar. Fails if the cookie file is unreadable or the base URL
    /// does not parse.
    pub fn from_config(config: ApiConfig) -> ApiResult<Self> {
        let base: Url = config.base_url.parse().map_err(|e| ApiError::InvalidBaseUrl {
            url: config.base_url.clone(),
            reason: format!("{}", e),
        })?;

        let jar = Arc::new(Jar::default());
        // A missing cookie file is not fatal at startup; every request will
        // fail with an auth error until it appears and the server restarts.
        let cookies = match load_cookies(&config.cookie_path) {
            Ok(cookies) => cookies,
            Err(e @ ApiError::CookieFile { .. }) => {
                warn!(error = %e, "Proceeding without session cookies");
                Vec::new()
            }
            Err(e) => return Err(e),
        };
        for cookie in &cookies {
            jar.add_cookie_str(&cookie.set_cookie_string(), &base);
        }
        info!(count = cookies.len(), "Session cookies loaded into jar");

        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(MOBILE_USER_AGENT));
        headers.insert(ACCEPT, HeaderValue::from_static("*/*"));
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("*"));
        headers.insert(DNT, HeaderValue::from_static("1"));
        headers.insert(UPGRADE_INSECURE_REQUESTS, HeaderValue::from_static("1"));

        let http = Client::builder()
            .default_headers(headers)
            .cookie_provider(jar)
            .build()?;

        Ok(Self { http, config })
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }
}

/// Pull the item array out of the list response. The payload is an object
/// keyed by list handle; the items live under the first value that is an
/// object containing a `listItems` array.
fn extract_list_items(body: &Value) -> ApiResult<Vec<ShoppingItem>> {
    let object = body.as_object().ok_or_else(|| ApiError::UnexpectedResponse {
        reason: "list payload is not a JSON object".to_string(),
    })?;

    for value in object.values() {
        if let Some(items) = value.get("listItems") {
            return serde_json::from_value(items.clone()).map_err(|e| {
                ApiError::UnexpectedResponse {
                    reason: format!("malformed listItems array: {}", e),
                }
            });
        }
    }

    Err(ApiError::UnexpectedResponse {
        reason: "no listItems key found in response".to_string(),
    })
}

impl ShoppingListApi for AlexaClient {
    fn fetch_items(&self) -> ApiResult<Vec<ShoppingItem>> {
        let url = self.config.list_items_url();
        debug!(%url, "Fetching shopping list");

        let body: Value = self
            .http
            .get(&url)
            .send()?
            .error_for_status()?
            .json()?;

        let items = extract_list_items(&body)?;
        debug!(count = items.len(), "Fetched shopping list snapshot");
        Ok(items)
    }

    fn add_item(&self, value: &str) -> ApiResult<()> {
        info!(item = %value, "Adding item to shopping list");
        // The service types shopping entries as TASK.
        let payload = json!({ "value": value, "type": "TASK" });

        self.http
            .post(self.config.add_item_url())
            .json(&payload)
            .send()?
            .error_for_status()?;
        Ok(())
    }

    fn delete_item(&self, item: &ShoppingItem) -> ApiResult<()> {
        let id = item.id.as_deref().ok_or_else(|| ApiError::MissingItemId {
            value: item.value.clone(),
        })?;
        info!(item = %item.value, %id, "Deleting shopping list item");

        // The delete endpoint wants the full item echoed back as the body.
        self.http
            .delete(self.config.delete_item_url())
            .json(item)
            .send()?
            .error_for_status()?;
        Ok(())
    }

    fn set_completed(&self, item: &ShoppingItem, completed: bool) -> ApiResult<()> {
        let id = item.id.as_deref().ok_or_else(|| ApiError::MissingItemId {
            value: item.value.clone(),
        })?;
        info!(item = %item.value, %id, completed, "Updating item completion state");
        let mut payload = item.clone();
        payload.completed = completed;

        self.http
            .put(self.config.update_item_url())
            .json(&payload)
            .send()?
            .error_for_status()?;
        Ok(())
    }
}
