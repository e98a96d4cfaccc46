//! User pages.
//!
//! ```text
//! GET  /users                  list with entry counts and the most active user
//! GET  /users/new              empty creation form
//! POST /users/new              create, then 303 to /users
//! GET  /users/{id}             detail with the user's entries
//! POST /users/{id}             delete user and entries, then 303 to /users
//! GET  /users/update/{id}      prefilled edit form
//! POST /users/update/{id}      update, then 303 to /users/{id}
//! GET  /users/{id}/guestbooks  entries written by one user
//! ```

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, get, post, web};
use futures_util::future::join;
use minijinja::context;
use tracing::{info, warn};

use super::cache_control::see_other;
use super::error::{PageResult, not_found_page};
use super::forms::{FormError, UserForm};
use super::notice::{Notice, NoticeQuery};
use super::state::HttpState;
use super::views;
use crate::domain::{UserId, UserPayload};

const USER_NOT_FOUND: &str = "User not found";

/// Create or edit mode of the shared user form.
struct FormView {
    title: &'static str,
    submit: &'static str,
    id: Option<String>,
}

impl FormView {
    fn create() -> Self {
        Self {
            title: "Create New User",
            submit: "Create",
            id: None,
        }
    }

    fn update(raw_id: &str) -> Self {
        Self {
            title: "Edit User",
            submit: "Save",
            id: Some(raw_id.to_owned()),
        }
    }

    fn render(self, form: &UserForm, error: Option<FormError>) -> HttpResponse {
        let status = error.as_ref().map_or(StatusCode::OK, FormError::status);
        views::page(
            status,
            "users/form.html",
            context! {
                title => self.title,
                submit => self.submit,
                id => self.id,
                form,
                error => error.as_ref().map(FormError::message),
            },
        )
    }
}

/// List every user with their entry count.
///
/// The most-active-user banner is best effort: a failure there is logged and
/// the list still renders.
#[get("/users")]
pub async fn list_users(
    state: web::Data<HttpState>,
    query: web::Query<NoticeQuery>,
) -> PageResult<HttpResponse> {
    let (users, top_user) = join(state.users.list_users(), state.users.top_user()).await;
    let users = users?;
    let top_user = top_user.unwrap_or_else(|err| {
        warn!(error = %err, "most active user unavailable");
        None
    });
    Ok(views::page(
        StatusCode::OK,
        "users/list.html",
        context! { users, top_user, notice => query.message() },
    ))
}

#[get("/users/new")]
pub async fn new_user_form() -> HttpResponse {
    FormView::create().render(&UserForm::default(), None)
}

/// Create a user from the submitted form.
#[post("/users/new")]
pub async fn create_user(state: web::Data<HttpState>, form: web::Form<UserForm>) -> HttpResponse {
    let form = form.into_inner();
    let payload = match UserPayload::try_from_parts(&form.username, &form.email) {
        Ok(payload) => payload,
        Err(err) => return FormView::create().render(&form, Some(err.into())),
    };
    match state.users.create_user(&payload).await {
        Ok(user) => {
            info!(user_id = %user.id, "user created");
            see_other(&Notice::UserCreated.location("/users"))
        }
        Err(err) => {
            warn!(error = %err, "user creation failed");
            FormView::create().render(&form, Some(FormError::from(&err)))
        }
    }
}

/// Show one user together with their entries.
#[get("/users/{id}")]
pub async fn user_detail(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    query: web::Query<NoticeQuery>,
) -> PageResult<HttpResponse> {
    let Ok(id) = path.parse::<UserId>() else {
        return Ok(not_found_page(USER_NOT_FOUND));
    };
    let user = state.users.get_user(id).await?;
    Ok(views::page(
        StatusCode::OK,
        "users/detail.html",
        context! { user, notice => query.message() },
    ))
}

/// Delete a user; the backend removes their entries too.
#[post("/users/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> PageResult<HttpResponse> {
    let Ok(id) = path.parse::<UserId>() else {
        return Ok(not_found_page(USER_NOT_FOUND));
    };
    state.users.delete_user(id).await?;
    info!(user_id = %id, "user deleted");
    Ok(see_other(&Notice::UserDeleted.location("/users")))
}

#[get("/users/update/{id}")]
pub async fn edit_user_form(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> PageResult<HttpResponse> {
    let Ok(id) = path.parse::<UserId>() else {
        return Ok(not_found_page(USER_NOT_FOUND));
    };
    let user = state.users.get_user(id).await?;
    let form = UserForm {
        username: user.username,
        email: user.email,
    };
    Ok(FormView::update(&id.to_string()).render(&form, None))
}

/// Apply the submitted form to an existing user.
#[post("/users/update/{id}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    form: web::Form<UserForm>,
) -> HttpResponse {
    let raw_id = path.into_inner();
    let form = form.into_inner();
    let view = FormView::update(raw_id.trim());
    let payload = match UserPayload::try_from_parts(&form.username, &form.email) {
        Ok(payload) => payload,
        Err(err) => return view.render(&form, Some(err.into())),
    };
    let Ok(id) = raw_id.parse::<UserId>() else {
        return view.render(&form, Some(FormError::invalid_id("user")));
    };
    match state.users.update_user(id, &payload).await {
        Ok(user) => {
            info!(user_id = %user.id, "user updated");
            see_other(&Notice::UserUpdated.location(&format!("/users/{id}")))
        }
        Err(err) => {
            warn!(error = %err, user_id = %id, "user update failed");
            view.render(&form, Some(FormError::from(&err)))
        }
    }
}

/// Entries written by one user.
#[get("/users/{id}/guestbooks")]
pub async fn user_guestbooks(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> PageResult<HttpResponse> {
    let Ok(user_id) = path.parse::<UserId>() else {
        return Ok(not_found_page(USER_NOT_FOUND));
    };
    let entries = state.guestbooks.list_guestbooks_for_user(user_id).await?;
    Ok(views::page(
        StatusCode::OK,
        "users/entries.html",
        context! { user_id, entries },
    ))
}
