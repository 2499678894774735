use axum::extract::{Path, State};
use axum::{Extension, Json};

use service::booking::domain::{BookingInput, BookingWithPlace, CancelReceipt, SessionUser};

use crate::auth::ServerState;
use crate::errors::ApiError;

#[utoipa::path(post, path = "/account/bookings", tag = "bookings", request_body = crate::openapi::BookingRequest, responses((status = 200, description = "Created"), (status = 400, description = "Bad Request"), (status = 401, description = "Unauthorized")))]
pub async fn create_booking(
    State(state): State<ServerState>,
    Extension(user): Extension<SessionUser>,
    Json(input): Json<BookingInput>,
) -> Result<Json<models::booking::Model>, ApiError> {
    let created = state.bookings.book(Some(&user), input).await?;
    Ok(Json(created))
}

#[utoipa::path(get, path = "/account/bookings", tag = "bookings", responses((status = 200, description = "OK"), (status = 401, description = "Unauthorized")))]
pub async fn list_bookings(
    State(state): State<ServerState>,
    Extension(user): Extension<SessionUser>,
) -> Result<Json<Vec<BookingWithPlace>>, ApiError> {
    let bookings = state.bookings.list(Some(&user)).await?;
    Ok(Json(bookings))
}

#[utoipa::path(delete, path = "/account/bookings/{id}", tag = "bookings", params(("id" = String, Path, description = "Booking id")), responses((status = 200, description = "Canceled"), (status = 400, description = "Bad Request"), (status = 401, description = "Unauthorized"), (status = 404, description = "Not Found")))]
pub async fn cancel_booking(
    State(state): State<ServerState>,
    Extension(user): Extension<SessionUser>,
    Path(id): Path<String>,
) -> Result<Json<CancelReceipt>, ApiError> {
    let receipt = state.bookings.cancel(Some(&user), &id).await?;
    Ok(Json(receipt))
}
