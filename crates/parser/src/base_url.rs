//! Base URL discovery for a collection

use crate::postman::{CollectionItem, RequestItem, RequestSpec};
use crate::url_parts::UrlParts;
use crate::visitor::{walk_items, CollectionVisitor};
use std::ops::ControlFlow;

/// Base URL used when none can be derived from the collection
pub const DEFAULT_BASE_URL: &str = "http://example.com/api";

/// Resolve the server base URL for a collection
///
/// An override is returned verbatim. Otherwise the first request URL in
/// document order decides: its scheme and authority become the base URL,
/// or the default when that URL has no scheme or host. The authority is
/// copied as written, including userinfo and any port.
pub fn extract_base_url(items: &[CollectionItem], user_base_url: Option<&str>) -> String {
    if let Some(base_url) = user_base_url {
        return base_url.to_string();
    }

    first_request_url(items)
        .and_then(|raw| UrlParts::split(&raw).origin())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
}

/// First resolvable request URL, searching folders depth-first
pub fn first_request_url(items: &[CollectionItem]) -> Option<String> {
    let mut finder = FirstUrl(None);
    match walk_items(items, &mut finder) {
        ControlFlow::Break(()) => finder.0,
        ControlFlow::Continue(()) => None,
    }
}

struct FirstUrl(Option<String>);

impl CollectionVisitor for FirstUrl {
    fn on_request(&mut self, item: &RequestItem) -> ControlFlow<()> {
        let raw = match &item.request {
            Some(RequestSpec::Detailed(request)) => request.url.as_ref().and_then(|u| u.raw_url()),
            _ => None,
        };

        match raw {
            Some(raw) => {
                self.0 = Some(raw.to_string());
                ControlFlow::Break(())
            }
            None => ControlFlow::Continue(()),
        }
    }
}
