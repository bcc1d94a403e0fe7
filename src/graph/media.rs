use super::client::{GraphClient, redact};
use crate::error::FetchError;
use serde::Deserialize;

const LOG_TARGET: &str = "     graph";

/// Fields requested for every media item in the listing.
pub const MEDIA_FIELDS: &str = "caption,owner,media_type,timestamp,media_url,thumbnail_url,video_duration";

/// Items per listing page; the graph API default.
pub const DEFAULT_PAGE_SIZE: u32 = 25;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MediaType {
    Video,
    Image,
    CarouselAlbum,
    #[serde(other)]
    Other,
}

/// One post from the account's media listing
#[derive(Debug, Clone, Deserialize)]
pub struct MediaItem {
    pub id: String,
    pub media_type: MediaType,
    pub caption: Option<String>,
    pub timestamp: Option<String>,
    pub media_url: Option<String>,
    pub thumbnail_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MediaPage {
    data: Vec<MediaItem>,
    #[serde(default)]
    paging: Option<Paging>,
}

#[derive(Debug, Deserialize)]
struct Paging {
    #[serde(default)]
    next: Option<String>,
}

/// Fetch the media listing of `account_id`.
///
/// With `paginate` unset only the first page is returned. Otherwise the `paging.next`
/// cursor is followed until the API stops returning one. Items keep the order the API
/// returned them in. Any failing page aborts the whole listing.
pub async fn fetch_media(
    client: &GraphClient,
    access_token: &str,
    account_id: &str,
    paginate: bool,
    page_size: u32,
) -> Result<Vec<MediaItem>, FetchError> {
    if access_token.is_empty() {
        return Err(FetchError::MissingArgument("access_token"));
    }

    if account_id.is_empty() {
        return Err(FetchError::MissingArgument("account_id"));
    }

    let limit = page_size.to_string();
    let first_page = client
        .endpoint(
            &format!("{account_id}/media"),
            &[("fields", MEDIA_FIELDS), ("access_token", access_token), ("limit", &limit)],
        )
        .map_err(|source| FetchError::Request {
            resource: "media page 1".to_string(),
            source,
        })?;

    let mut all_items = Vec::new();
    let mut next_url = Some(first_page.to_string());
    let mut page_num = 0u32;

    while let Some(url) = next_url.take() {
        page_num += 1;

        let page: MediaPage = client.get_json(&url).await.map_err(|source| FetchError::Request {
            resource: format!("media page {page_num} ({})", redact(&url)),
            source,
        })?;

        log::debug!(target: LOG_TARGET, "Media page {page_num} returned {} items", page.data.len());
        all_items.extend(page.data);

        if !paginate {
            break;
        }

        next_url = page.paging.and_then(|paging| paging.next);
    }

    log::info!(target: LOG_TARGET, "Fetched {} media items across {page_num} page(s)", all_items.len());
    Ok(all_items)
}
