use roster_common::{parse_character_page, Character, FetchError};
use tracing::{debug, info};

/// Build the listing request, adding `?status=` when a filter is given
pub fn character_list_request(
    client: &reqwest::Client,
    base_url: &str,
    status: Option<&str>,
) -> Result<reqwest::Request, FetchError> {
    let mut builder = client.get(base_url);
    if let Some(status) = status {
        builder = builder.query(&[("status", status)]);
    }
    builder
        .build()
        .map_err(|e| FetchError::Network(format!("Invalid request: {e}")))
}

/// Fetch one page of characters from the listing endpoint
pub async fn fetch_characters(
    base_url: &str,
    status: Option<&str>,
) -> Result<Vec<Character>, FetchError> {
    let client = reqwest::Client::new();
    let request = character_list_request(&client, base_url, status)?;
    debug!("Fetching characters from {}", request.url());

    let resp = client
        .execute(request)
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    let status = resp.status();
    let body = resp
        .text()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    let characters = character_list_response(status, &body)?;
    info!("Fetched {} characters", characters.len());
    Ok(characters)
}

/// Interpret a listing response: non-2xx is a status error, otherwise the
/// body is decoded as a character page.
pub fn character_list_response(
    status: reqwest::StatusCode,
    body: &str,
) -> Result<Vec<Character>, FetchError> {
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }
    parse_character_page(body)
}
