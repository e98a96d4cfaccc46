//! HTML views rendered with minijinja.
//!
//! Templates are embedded at compile time and parsed once per process. The
//! `.html` suffix turns on minijinja's HTML auto-escaping for every value a
//! controller hands over.

use std::sync::OnceLock;

use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use minijinja::Environment;
use serde::Serialize;
use tracing::error;

const TEMPLATES: &[(&str, &str)] = &[
    ("layout.html", include_str!("../../../templates/layout.html")),
    ("not_found.html", include_str!("../../../templates/not_found.html")),
    ("error.html", include_str!("../../../templates/error.html")),
    ("users/list.html", include_str!("../../../templates/users/list.html")),
    ("users/detail.html", include_str!("../../../templates/users/detail.html")),
    ("users/form.html", include_str!("../../../templates/users/form.html")),
    ("users/entries.html", include_str!("../../../templates/users/entries.html")),
    ("guestbooks/list.html", include_str!("../../../templates/guestbooks/list.html")),
    ("guestbooks/detail.html", include_str!("../../../templates/guestbooks/detail.html")),
    ("guestbooks/form.html", include_str!("../../../templates/guestbooks/form.html")),
];

static VIEWS: OnceLock<Environment<'static>> = OnceLock::new();

fn environment() -> &'static Environment<'static> {
    VIEWS.get_or_init(|| {
        let mut env = Environment::new();
        for (name, source) in TEMPLATES {
            // Templates are compile-time constants; a parse failure surfaces
            // as a missing template on first render and in the view tests.
            if let Err(err) = env.add_template(name, source) {
                error!(template = name, error = %err, "template failed to parse");
            }
        }
        env
    })
}

/// Render a template into a string.
///
/// # Errors
/// Returns the minijinja error when the template is missing or fails to
/// render the supplied context.
pub fn render<S: Serialize>(name: &str, ctx: S) -> Result<String, minijinja::Error> {
    environment().get_template(name)?.render(ctx)
}

/// Render a template into an HTML response with the given status.
///
/// Rendering failures are logged and answered with a bare 500 so a broken
/// template never panics a worker.
pub fn page<S: Serialize>(status: StatusCode, name: &str, ctx: S) -> HttpResponse {
    match render(name, ctx) {
        Ok(body) => HttpResponse::build(status)
            .content_type(ContentType::html())
            .body(body),
        Err(err) => {
            error!(template = name, error = %err, "template render failed");
            HttpResponse::InternalServerError()
                .content_type(ContentType::plaintext())
                .body("Internal server error")
        }
    }
}
