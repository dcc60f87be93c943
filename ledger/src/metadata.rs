//! # Token Metadata URIs
//!
//! Resolution rule: if token `id` has a non-empty per-token URI, the result
//! is `base_uri + token_uri`; otherwise it is the default URI. No
//! `{id}` substitution happens here, clients do that.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::METADATA_NAMESPACE;
use crate::event::Event;
use crate::host::Host;
use crate::storage::Namespaced;
use crate::types::TokenId;

/// URI storage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataLayout {
    /// Returned for ids without a per-token URI.
    pub default_uri: String,
    /// Prefix for per-token URIs.
    pub base_uri: String,
    /// Per-token URI suffixes.
    pub token_uris: HashMap<TokenId, String>,
}

impl Namespaced for MetadataLayout {
    const NAMESPACE: &'static str = METADATA_NAMESPACE;
}

impl MetadataLayout {
    /// Resolves the URI of token `id`.
    pub fn uri(&self, id: TokenId) -> String {
        match self.token_uris.get(&id) {
            Some(token_uri) if !token_uri.is_empty() => format!("{}{}", self.base_uri, token_uri),
            _ => self.default_uri.clone(),
        }
    }
}

/// `uri(id)`.
pub fn uri(host: &Host, id: TokenId) -> String {
    host.storage().metadata.uri(id)
}

/// Replaces the default URI.
pub fn set_default_uri(host: &mut Host, uri: impl Into<String>) {
    let uri = uri.into();
    debug!(%uri, "default uri set");
    host.storage_mut().metadata.default_uri = uri;
}

/// Replaces the base URI prefix.
pub fn set_base_uri(host: &mut Host, uri: impl Into<String>) {
    let uri = uri.into();
    debug!(%uri, "base uri set");
    host.storage_mut().metadata.base_uri = uri;
}

/// Sets the per-token URI of `id` and emits `Uri` with the resolved value.
/// An empty `token_uri` clears the override.
pub fn set_token_uri(host: &mut Host, id: TokenId, token_uri: impl Into<String>) {
    let token_uri = token_uri.into();
    let metadata = &mut host.storage_mut().metadata;
    if token_uri.is_empty() {
        metadata.token_uris.remove(&id);
    } else {
        metadata.token_uris.insert(id, token_uri);
    }
    let value = metadata.uri(id);
    debug!(%id, %value, "token uri set");
    host.emit(Event::Uri { value, id });
}
