use chrono::NaiveDate;
use utoipa::OpenApi;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(utoipa::ToSchema)]
pub struct BookingRequest {
    pub place_id: Uuid,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: i32,
    pub price: i32,
    pub name: String,
    pub phone: String,
}

#[derive(utoipa::ToSchema)]
pub struct CancelResponse { pub success: bool, pub message: String }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::bookings::create_booking,
        crate::routes::bookings::list_bookings,
        crate::routes::bookings::cancel_booking,
    ),
    components(
        schemas(
            HealthResponse,
            BookingRequest,
            CancelResponse,
        )
    ),
    tags(
        (name = "health"),
        (name = "bookings")
    )
)]
pub struct ApiDoc;
