//! User page handlers.
//!
//! Each handler maps one route onto one repository operation and renders a
//! page, a redirect, or an error. Validation failures never leave the
//! handler: the form is re-rendered with an inline message and HTTP 200.

use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};

use crate::api::dto::UserForm;
use crate::api::views::{self, FormContext};
use crate::error::AppResult;
use crate::state::AppState;

/// GET / - Landing page with the create form.
///
/// Renders no data, but still establishes the database connection so a
/// broken store surfaces here instead of on first submit.
pub async fn index(State(state): State<AppState>) -> AppResult<Html<String>> {
    state.db.ensure_connected().await?;
    Ok(Html(views::index_page(&FormContext::default())))
}

/// GET /read - List all users.
pub async fn read(State(state): State<AppState>) -> AppResult<Html<String>> {
    let users = state.services.users.list_users().await?;
    Ok(Html(views::list_page(&users)))
}

/// POST /create - Create a user from the submitted form.
///
/// Missing name or email re-renders the form with the submitted values and
/// an inline error. On success, redirects to the list page.
pub async fn create(
    State(state): State<AppState>,
    Form(payload): Form<UserForm>,
) -> AppResult<Response> {
    if let Some(error) = payload.first_error() {
        let page = views::index_page(&payload.context_with_error(&error));
        return Ok(Html(page).into_response());
    }

    let id = state.services.users.create_user(payload.into_new_user()).await?;
    tracing::info!(user_id = %id, "User created");

    Ok(Redirect::to("/read").into_response())
}

/// GET /edit/{id} - Edit form for an existing user.
///
/// Responds 404 when the id matches no user.
pub async fn edit_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Html<String>> {
    let user = state.services.users.get_user(&id).await?;
    Ok(Html(views::edit_page(&id, &FormContext::from_user(&user))))
}

/// POST /update/{id} - Replace a user's fields.
///
/// Missing name or email re-renders the edit form with the submitted
/// values and an inline error. A nonexistent id is a no-op; either way the
/// success path redirects to the list page.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(payload): Form<UserForm>,
) -> AppResult<Response> {
    if let Some(error) = payload.first_error() {
        let page = views::edit_page(&id, &payload.context_with_error(&error));
        return Ok(Html(page).into_response());
    }

    state
        .services
        .users
        .update_user(&id, payload.into_update_user())
        .await?;
    tracing::info!(user_id = %id, "User updated");

    Ok(Redirect::to("/read").into_response())
}

/// GET /delete/{id} - Delete a user.
///
/// Deleting an absent id is a no-op, so repeating the request is safe.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Redirect> {
    state.services.users.delete_user(&id).await?;
    tracing::info!(user_id = %id, "User deleted");

    Ok(Redirect::to("/read"))
}
