//! Guestbook entry pages.
//!
//! ```text
//! GET  /guestbooks              list every entry
//! GET  /guestbooks/new          empty form with an author select
//! POST /guestbooks/new          create, then 303 to /guestbooks
//! GET  /guestbooks/{id}         entry detail
//! POST /guestbooks/{id}         delete, then 303 to /guestbooks
//! GET  /guestbooks/update/{id}  prefilled edit form
//! POST /guestbooks/update/{id}  update, then 303 to /guestbooks/{id}
//! ```
//!
//! Every form needs the user list for its author select, so a form re-render
//! after a failed submit fetches it again.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, get, post, web};
use futures_util::future::try_join;
use minijinja::context;
use tracing::{info, warn};

use super::cache_control::see_other;
use super::error::{PageResult, not_found_page};
use super::forms::{FormError, GuestbookForm};
use super::notice::{Notice, NoticeQuery};
use super::state::HttpState;
use super::views;
use crate::domain::{GuestbookId, GuestbookPayload, UserWithGuestbookCount};

const GUESTBOOK_NOT_FOUND: &str = "Guestbook not found";

struct FormView {
    title: &'static str,
    submit: &'static str,
    id: Option<String>,
}

impl FormView {
    fn create() -> Self {
        Self {
            title: "Create New Guestbook",
            submit: "Create",
            id: None,
        }
    }

    fn update(raw_id: &str) -> Self {
        Self {
            title: "Edit Guestbook",
            submit: "Save",
            id: Some(raw_id.to_owned()),
        }
    }

    fn render(
        self,
        users: &[UserWithGuestbookCount],
        form: &GuestbookForm,
        error: Option<FormError>,
    ) -> HttpResponse {
        let status = error.as_ref().map_or(StatusCode::OK, FormError::status);
        views::page(
            status,
            "guestbooks/form.html",
            context! {
                title => self.title,
                submit => self.submit,
                id => self.id,
                users,
                form,
                error => error.as_ref().map(FormError::message),
            },
        )
    }

    /// Re-render after a failed submit. When the author list itself cannot be
    /// fetched the form still renders, with an empty select.
    async fn rerender(
        self,
        state: &HttpState,
        form: &GuestbookForm,
        error: FormError,
    ) -> HttpResponse {
        let users = state.users.list_users().await.unwrap_or_else(|err| {
            warn!(error = %err, "author list unavailable for form re-render");
            Vec::new()
        });
        self.render(&users, form, Some(error))
    }
}

#[get("/guestbooks")]
pub async fn list_guestbooks(
    state: web::Data<HttpState>,
    query: web::Query<NoticeQuery>,
) -> PageResult<HttpResponse> {
    let entries = state.guestbooks.list_guestbooks().await?;
    Ok(views::page(
        StatusCode::OK,
        "guestbooks/list.html",
        context! { entries, notice => query.message() },
    ))
}

#[get("/guestbooks/new")]
pub async fn new_guestbook_form(state: web::Data<HttpState>) -> PageResult<HttpResponse> {
    let users = state.users.list_users().await?;
    Ok(FormView::create().render(&users, &GuestbookForm::default(), None))
}

/// Create an entry from the submitted form.
#[post("/guestbooks/new")]
pub async fn create_guestbook(
    state: web::Data<HttpState>,
    form: web::Form<GuestbookForm>,
) -> HttpResponse {
    let form = form.into_inner();
    let payload = match GuestbookPayload::try_from_parts(&form.message, form.author()) {
        Ok(payload) => payload,
        Err(err) => return FormView::create().rerender(&state, &form, err.into()).await,
    };
    match state.guestbooks.create_guestbook_entry(&payload).await {
        Ok(record) => {
            info!(guestbook_id = %record.id, user_id = %record.user_id, "guestbook entry created");
            see_other(&Notice::GuestbookCreated.location("/guestbooks"))
        }
        Err(err) => {
            warn!(error = %err, "guestbook entry creation failed");
            FormView::create()
                .rerender(&state, &form, FormError::from(&err))
                .await
        }
    }
}

#[get("/guestbooks/{id}")]
pub async fn guestbook_detail(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    query: web::Query<NoticeQuery>,
) -> PageResult<HttpResponse> {
    let Ok(id) = path.parse::<GuestbookId>() else {
        return Ok(not_found_page(GUESTBOOK_NOT_FOUND));
    };
    let entry = state.guestbooks.get_guestbook(id).await?;
    Ok(views::page(
        StatusCode::OK,
        "guestbooks/detail.html",
        context! { entry, notice => query.message() },
    ))
}

#[post("/guestbooks/{id}")]
pub async fn delete_guestbook(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> PageResult<HttpResponse> {
    let Ok(id) = path.parse::<GuestbookId>() else {
        return Ok(not_found_page(GUESTBOOK_NOT_FOUND));
    };
    state.guestbooks.delete_guestbook_entry(id).await?;
    info!(guestbook_id = %id, "guestbook entry deleted");
    Ok(see_other(&Notice::GuestbookDeleted.location("/guestbooks")))
}

/// Edit form: the author list and the entry are fetched concurrently.
#[get("/guestbooks/update/{id}")]
pub async fn edit_guestbook_form(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> PageResult<HttpResponse> {
    let Ok(id) = path.parse::<GuestbookId>() else {
        return Ok(not_found_page(GUESTBOOK_NOT_FOUND));
    };
    let (users, entry) =
        try_join(state.users.list_users(), state.guestbooks.get_guestbook(id)).await?;
    let form = GuestbookForm {
        message: entry.message,
        user_id: entry.user_id.to_string(),
    };
    Ok(FormView::update(&id.to_string()).render(&users, &form, None))
}

/// Apply the submitted form to an existing entry.
#[post("/guestbooks/update/{id}")]
pub async fn update_guestbook(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    form: web::Form<GuestbookForm>,
) -> HttpResponse {
    let raw_id = path.into_inner();
    let form = form.into_inner();
    let view = FormView::update(raw_id.trim());
    let payload = match GuestbookPayload::try_from_parts(&form.message, form.author()) {
        Ok(payload) => payload,
        Err(err) => return view.rerender(&state, &form, err.into()).await,
    };
    let Ok(id) = raw_id.parse::<GuestbookId>() else {
        return view
            .rerender(&state, &form, FormError::invalid_id("guestbook"))
            .await;
    };
    match state.guestbooks.update_guestbook_entry(id, &payload).await {
        Ok(record) => {
            info!(guestbook_id = %record.id, "guestbook entry updated");
            see_other(&Notice::GuestbookUpdated.location(&format!("/guestbooks/{id}")))
        }
        Err(err) => {
            warn!(error = %err, guestbook_id = %id, "guestbook entry update failed");
            view.rerender(&state, &form, FormError::from(&err)).await
        }
    }
}
