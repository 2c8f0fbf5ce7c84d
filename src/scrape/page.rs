//! Single-page fetch

use reqwest::blocking::Client;
use reqwest::StatusCode;

use crate::Result;

/// Fetch one stat page.
///
/// Returns the body on HTTP 200 and `None` on any other status. A non-200
/// response is the pagination end condition, not an error; there is no way
/// to tell a true end of pages from a transient server failure here, so
/// the status is logged for inspection under verbose logging.
pub fn fetch_page(client: &Client, url: &str) -> Result<Option<String>> {
    let response = client.get(url).send()?;
    let status = response.status();
    if status != StatusCode::OK {
        log::debug!("{} returned {}, ending pagination", url, status);
        return Ok(None);
    }
    Ok(Some(response.text()?))
}
