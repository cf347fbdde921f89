//! Session values carrying a per-merchant access token.
//!
//! How sessions are stored or looked up is up to the application. The
//! clients only read the shop and access token from a [`Session`].

use crate::config::ShopDomain;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An authenticated session for one shop.
///
/// # Example
///
/// ```rust
/// use shopify_rest_core::{Session, ShopDomain};
///
/// let session = Session::new(
///     "offline_my-store.myshopify.com".to_string(),
///     ShopDomain::new("my-store").unwrap(),
///     "access-token".to_string(),
///     false,
///     None,
/// );
///
/// assert!(session.is_active());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Session {
    /// Unique identifier for this session.
    pub id: String,

    /// The shop this session is for.
    pub shop: ShopDomain,

    /// The access token for API authentication.
    #[serde(default)]
    pub access_token: String,

    /// Whether this is an online (user-specific) session.
    pub is_online: bool,

    /// When this session expires, if applicable.
    pub expires: Option<DateTime<Utc>>,
}

impl Session {
    /// Creates a new session.
    #[must_use]
    pub const fn new(
        id: String,
        shop: ShopDomain,
        access_token: String,
        is_online: bool,
        expires: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            shop,
            access_token,
            is_online,
            expires,
        }
    }

    /// Returns the access token, or `None` when it is empty.
    #[must_use]
    pub fn access_token(&self) -> Option<&str> {
        Some(self.access_token.as_str()).filter(|token| !token.is_empty())
    }

    /// Returns `true` if this session has expired.
    ///
    /// Sessions without an expiration time never expire.
    #[must_use]
    pub fn expired(&self) -> bool {
        self.expires.is_some_and(|expires| Utc::now() > expires)
    }

    /// Returns `true` if this session has a token and has not expired.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.access_token().is_some() && !self.expired()
    }
}

// Verify Session is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Session>();
};
