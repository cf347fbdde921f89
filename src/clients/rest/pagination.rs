//! Cursor pagination from the `Link` response header.
//!
//! Shopify's REST API paginates with a header of the form
//!
//! ```text
//! <https://shop/admin/api/2024-10/products.json?limit=10&page_info=abc>; rel="next", <...>; rel="previous"
//! ```
//!
//! [`parse_link_header`] splits it into [`ParsedLink`]s and
//! [`PageInfo::reconstruct`] turns those back into relative requests that
//! can be replayed through the same client.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::clients::path::strip_rest_path;
use crate::clients::{ApiSurfaceType, Query};

static LINK_ENTRY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<([^<]+)>; rel="([^"]+)""#).expect("link entry pattern is valid")
});

const PAGE_INFO_PARAM: &str = "page_info";

/// One `<url>; rel="..."` entry of a `Link` header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedLink {
    /// The absolute URL between the angle brackets.
    pub url: String,
    /// The relation, lowercased.
    pub rel: String,
}

/// Splits a raw `Link` header into its entries.
///
/// Entries that don't match `<url>; rel="name"` are skipped. Order is
/// preserved.
///
/// ```rust
/// use shopify_rest_core::clients::rest::parse_link_header;
///
/// let links = parse_link_header(r#"<https://a/x.json?page_info=1>; rel="Next", garbage"#);
/// assert_eq!(links.len(), 1);
/// assert_eq!(links[0].rel, "next");
/// assert!(parse_link_header("").is_empty());
/// ```
#[must_use]
pub fn parse_link_header(raw: &str) -> Vec<ParsedLink> {
    if raw.is_empty() {
        return Vec::new();
    }

    raw.split(", ")
        .filter_map(|entry| {
            let Some(captures) = LINK_ENTRY.captures(entry) else {
                tracing::trace!("Skipping malformed Link header entry: {}", entry);
                return None;
            };
            Some(ParsedLink {
                url: captures[1].to_string(),
                rel: captures[2].to_ascii_lowercase(),
            })
        })
        .collect()
}

/// A relative request that fetches one page.
///
/// `path` has the same form a caller passes to
/// [`RestClient::get`](crate::clients::RestClient::get), so the descriptor
/// can be replayed directly.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestDescriptor {
    /// Relative resource path, e.g. `products`.
    pub path: String,
    /// Decoded query parameters of the page URL.
    pub query: Query,
}

/// Navigation state for a paginated REST response.
///
/// Serializable, so a cursor can be stored and resumed later.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    /// The `limit` of the originating request, if it had one.
    pub limit: Option<String>,
    /// Field list carried by the page links.
    pub fields: Option<Vec<String>>,
    /// Absolute URL of the previous page.
    pub previous_page_url: Option<String>,
    /// Absolute URL of the next page.
    pub next_page_url: Option<String>,
    /// Request for the previous page.
    pub prev_page: Option<RequestDescriptor>,
    /// Request for the next page.
    pub next_page: Option<RequestDescriptor>,
}

impl PageInfo {
    /// Builds pagination state from the original query and the parsed links.
    ///
    /// Only `next` and `previous` links that carry a `page_info` parameter
    /// and whose path belongs to `surface` become page descriptors. A
    /// `page_info` link on a foreign path keeps its `*_page_url` but gets no
    /// descriptor. When a page URL repeats a query key, the first occurrence
    /// wins.
    #[must_use]
    pub fn reconstruct(original_query: &Query, links: &[ParsedLink], surface: ApiSurfaceType) -> Self {
        let mut info = Self {
            limit: original_query.get("limit").cloned(),
            ..Self::default()
        };

        for link in links {
            let Ok(url) = Url::parse(&link.url) else {
                tracing::trace!("Skipping Link entry with unparseable URL: {}", link.url);
                continue;
            };
            let query = decode_query(&url);

            if info.fields.is_none() {
                info.fields = query
                    .get("fields")
                    .filter(|fields| !fields.is_empty())
                    .map(|fields| fields.split(',').map(String::from).collect());
            }

            if !query.contains_key(PAGE_INFO_PARAM) {
                continue;
            }
            // A foreign path still records the raw URL, just no replayable request.
            let descriptor = match strip_rest_path(surface, url.path()) {
                Ok(Some(path)) => Some(RequestDescriptor { path, query }),
                _ => {
                    tracing::trace!("Link path is outside the REST prefix: {}", url.path());
                    None
                }
            };

            match link.rel.as_str() {
                "previous" => {
                    info.previous_page_url = Some(link.url.clone());
                    info.prev_page = descriptor;
                }
                "next" => {
                    info.next_page_url = Some(link.url.clone());
                    info.next_page = descriptor;
                }
                _ => {}
            }
        }

        info
    }

    /// Returns `true` if there is a next page.
    #[must_use]
    pub const fn has_next_page(&self) -> bool {
        self.next_page.is_some()
    }

    /// Returns `true` if there is a previous page.
    #[must_use]
    pub const fn has_prev_page(&self) -> bool {
        self.prev_page.is_some()
    }
}

fn decode_query(url: &Url) -> Query {
    let mut query = Query::new();
    for (key, value) in url.query_pairs() {
        query
            .entry(key.into_owned())
            .or_insert_with(|| value.into_owned());
    }
    query
}
