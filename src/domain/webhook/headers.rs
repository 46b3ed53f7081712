//! Delivery header resolution.
//!
//! Senders use one of two equivalent header families: the branded
//! `svix-*` trio or the generic `webhook-*` trio. The branded family wins
//! when both are complete.

use std::collections::HashMap;
use std::hash::BuildHasher;

use http::HeaderMap;

use super::errors::WebhookError;

/// Read-only, case-insensitive view over request headers.
pub trait HeaderSource {
    /// Returns the value of `name` (lower-case) if present and valid text.
    fn header(&self, name: &str) -> Option<&str>;
}

impl HeaderSource for HeaderMap {
    fn header(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(|v| v.to_str().ok())
    }
}

impl<S: BuildHasher> HeaderSource for HashMap<String, String, S> {
    fn header(&self, name: &str) -> Option<&str> {
        self.get(name)
            .or_else(|| {
                self.iter()
                    .find(|(key, _)| key.eq_ignore_ascii_case(name))
                    .map(|(_, value)| value)
            })
            .map(String::as_str)
    }
}

impl<T: HeaderSource + ?Sized> HeaderSource for &T {
    fn header(&self, name: &str) -> Option<&str> {
        (**self).header(name)
    }
}

/// Names of one header family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderFamily {
    pub id: &'static str,
    pub timestamp: &'static str,
    pub signature: &'static str,
}

pub const BRANDED_HEADERS: HeaderFamily = HeaderFamily {
    id: "svix-id",
    timestamp: "svix-timestamp",
    signature: "svix-signature",
};

pub const GENERIC_HEADERS: HeaderFamily = HeaderFamily {
    id: "webhook-id",
    timestamp: "webhook-timestamp",
    signature: "webhook-signature",
};

impl HeaderFamily {
    fn lookup<'a, H: HeaderSource + ?Sized>(&self, headers: &'a H) -> Option<DeliveryHeaders<'a>> {
        Some(DeliveryHeaders {
            id: headers.header(self.id)?,
            timestamp: headers.header(self.timestamp)?,
            signature: headers.header(self.signature)?,
        })
    }
}

/// The id/timestamp/signature trio of one delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeliveryHeaders<'a> {
    pub id: &'a str,
    pub timestamp: &'a str,
    pub signature: &'a str,
}

impl<'a> DeliveryHeaders<'a> {
    /// Picks the first complete header family.
    ///
    /// # Errors
    ///
    /// Returns `WebhookError::MissingHeaders` if neither family is complete.
    /// Members are never mixed across families.
    pub fn resolve<H: HeaderSource + ?Sized>(headers: &'a H) -> Result<Self, WebhookError> {
        [BRANDED_HEADERS, GENERIC_HEADERS]
            .iter()
            .find_map(|family| family.lookup(headers))
            .ok_or(WebhookError::MissingHeaders)
    }
}
