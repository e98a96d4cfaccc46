//! Shared cache-control policies for page responses.

use actix_web::HttpResponse;
use actix_web::http::header::{CACHE_CONTROL, LOCATION};

/// Post/redirect/get responses must be revalidated so the browser re-fetches
/// the follow-up page instead of showing stale data.
pub const NO_CACHE: &str = "no-cache";

/// Probe responses are never stored.
pub const NO_STORE: &str = "no-store";

/// `303 See Other` to `location`, marked `no-cache`.
pub fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((LOCATION, location))
        .insert_header((CACHE_CONTROL, NO_CACHE))
        .finish()
}
