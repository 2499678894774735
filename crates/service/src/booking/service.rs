use std::sync::Arc;

use tracing::{info, instrument};
use uuid::Uuid;

use super::domain::{BookingInput, BookingWithPlace, CancelReceipt, SessionUser};
use super::errors::BookingError;
use super::repository::BookingRepository;

/// Booking business service independent of web framework
pub struct BookingService<R: BookingRepository> {
    repo: Arc<R>,
}

impl<R: BookingRepository> BookingService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Create a booking for the authenticated caller.
    ///
    /// # Examples
    /// ```
    /// use service::booking::{service::BookingService, repository::mock::MockBookingRepository};
    /// use service::booking::domain::{BookingInput, SessionUser};
    /// use std::sync::Arc;
    /// let repo = Arc::new(MockBookingRepository::default());
    /// let svc = BookingService::new(repo);
    /// let user = SessionUser { id: uuid::Uuid::new_v4(), email: "guest@example.com".into() };
    /// let input = BookingInput {
    ///     place_id: uuid::Uuid::new_v4(),
    ///     check_in: chrono::NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
    ///     check_out: chrono::NaiveDate::from_ymd_opt(2024, 5, 5).unwrap(),
    ///     guests: 2,
    ///     price: 480,
    ///     name: "Guest".into(),
    ///     phone: "+3805550101".into(),
    /// };
    /// let created = tokio_test::block_on(svc.book(Some(&user), input)).unwrap();
    /// assert_eq!(created.user_id, user.id);
    /// ```
    #[instrument(skip(self, user, input), fields(place_id = %input.place_id))]
    pub async fn book(
        &self,
        user: Option<&SessionUser>,
        input: BookingInput,
    ) -> Result<models::booking::Model, BookingError> {
        let user = user.ok_or(BookingError::Unauthenticated)?;
        if input.check_in >= input.check_out {
            return Err(BookingError::Validation("check-in date must be before check-out date".into()));
        }
        let created = self.repo.create(user.id, &input).await?;
        info!(booking_id = %created.id, user_id = %user.id, place_id = %created.place_id, "booking_created");
        Ok(created)
    }

    /// All bookings owned by the caller, each with its place expanded inline,
    /// ordered newest-created first.
    #[instrument(skip(self, user))]
    pub async fn list(&self, user: Option<&SessionUser>) -> Result<Vec<BookingWithPlace>, BookingError> {
        let user = user.ok_or(BookingError::Unauthenticated)?;
        self.repo.list_for_user(user.id).await
    }

    /// Cancel a booking owned by the caller. The identifier format is checked
    /// before the repository is consulted.
    ///
    /// # Examples
    /// ```
    /// use service::booking::{service::BookingService, repository::mock::MockBookingRepository};
    /// use service::booking::domain::SessionUser;
    /// use std::sync::Arc;
    /// let svc = BookingService::new(Arc::new(MockBookingRepository::default()));
    /// let user = SessionUser { id: uuid::Uuid::new_v4(), email: "guest@example.com".into() };
    /// let err = tokio_test::block_on(svc.cancel(Some(&user), "not-a-uuid")).unwrap_err();
    /// assert_eq!(err.code(), 2002);
    /// ```
    #[instrument(skip(self, user, booking_id), fields(booking_id = %booking_id))]
    pub async fn cancel(
        &self,
        user: Option<&SessionUser>,
        booking_id: &str,
    ) -> Result<CancelReceipt, BookingError> {
        let user = user.ok_or(BookingError::Unauthenticated)?;
        let id = Uuid::parse_str(booking_id)
            .map_err(|_| BookingError::Validation("invalid booking id".into()))?;

        let booking = self.repo.find_by_id(id).await?.ok_or(BookingError::NotFound)?;
        if booking.user_id != user.id {
            return Err(BookingError::Unauthorized);
        }

        self.repo.delete(id).await?;
        info!(booking_id = %id, user_id = %user.id, "booking_canceled");
        Ok(CancelReceipt { success: true, message: "Booking successfully canceled".into() })
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use uuid::Uuid;

    use super::*;
    use crate::booking::repository::mock::MockBookingRepository;

    fn guest() -> SessionUser {
        SessionUser { id: Uuid::new_v4(), email: "guest@example.com".into() }
    }

    fn input(place_id: Uuid, check_in: (i32, u32, u32), check_out: (i32, u32, u32)) -> BookingInput {
        BookingInput {
            place_id,
            check_in: NaiveDate::from_ymd_opt(check_in.0, check_in.1, check_in.2).unwrap(),
            check_out: NaiveDate::from_ymd_opt(check_out.0, check_out.1, check_out.2).unwrap(),
            guests: 2,
            price: 480,
            name: "Guest".into(),
            phone: "+3805550101".into(),
        }
    }

    fn place(id: Uuid) -> models::place::Model {
        models::place::Model {
            id,
            owner_id: Uuid::new_v4(),
            title: "Harbour Loft".into(),
            address: "2 Main St".into(),
            price_per_night: 90,
            created_at: chrono::Utc::now().into(),
        }
    }

    fn service() -> (Arc<MockBookingRepository>, BookingService<MockBookingRepository>) {
        let repo = Arc::new(MockBookingRepository::default());
        (repo.clone(), BookingService::new(repo))
    }

    #[tokio::test]
    async fn book_requires_authenticated_user() {
        let (_repo, svc) = service();
        let err = svc.book(None, input(Uuid::new_v4(), (2024, 5, 1), (2024, 5, 5))).await.unwrap_err();
        assert!(matches!(err, BookingError::Unauthenticated));
    }

    #[tokio::test]
    async fn book_rejects_reversed_and_equal_dates() {
        let (_repo, svc) = service();
        let user = guest();
        let err = svc.book(Some(&user), input(Uuid::new_v4(), (2024, 5, 5), (2024, 5, 1))).await.unwrap_err();
        assert!(matches!(err, BookingError::Validation(_)));
        let err = svc.book(Some(&user), input(Uuid::new_v4(), (2024, 5, 1), (2024, 5, 1))).await.unwrap_err();
        assert!(matches!(err, BookingError::Validation(_)));
    }

    #[tokio::test]
    async fn book_persists_valid_input() {
        let (_repo, svc) = service();
        let user = guest();
        let place_id = Uuid::new_v4();
        let created = svc.book(Some(&user), input(place_id, (2024, 5, 1), (2024, 5, 5))).await.unwrap();
        assert_eq!(created.user_id, user.id);
        assert_eq!(created.place_id, place_id);

        let listed = svc.list(Some(&user)).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].booking.id, created.id);
    }

    #[tokio::test]
    async fn list_is_scoped_to_caller_and_newest_first() {
        let (repo, svc) = service();
        let alice = guest();
        let carol = guest();
        let place_id = Uuid::new_v4();
        repo.insert_place(place(place_id));

        let first = svc.book(Some(&alice), input(place_id, (2024, 5, 1), (2024, 5, 5))).await.unwrap();
        let second = svc.book(Some(&alice), input(place_id, (2024, 6, 1), (2024, 6, 3))).await.unwrap();
        svc.book(Some(&carol), input(place_id, (2024, 7, 1), (2024, 7, 2))).await.unwrap();

        let listed = svc.list(Some(&alice)).await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].booking.id, second.id);
        assert_eq!(listed[1].booking.id, first.id);
        assert!(listed.iter().all(|b| b.booking.user_id == alice.id));
        assert_eq!(listed[0].place.as_ref().map(|p| p.id), Some(place_id));
        assert_eq!(listed[0].place.as_ref().map(|p| p.title.clone()), Some("Harbour Loft".to_string()));
    }

    #[tokio::test]
    async fn cancel_requires_owner_and_deletes_for_owner() {
        let (repo, svc) = service();
        let alice = guest();
        let carol = guest();
        let created = svc.book(Some(&alice), input(Uuid::new_v4(), (2024, 5, 1), (2024, 5, 5))).await.unwrap();

        let err = svc.cancel(Some(&carol), &created.id.to_string()).await.unwrap_err();
        assert!(matches!(err, BookingError::Unauthorized));
        assert!(repo.find_by_id(created.id).await.unwrap().is_some());

        let receipt = svc.cancel(Some(&alice), &created.id.to_string()).await.unwrap();
        assert!(receipt.success);
        assert!(svc.list(Some(&alice)).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn cancel_unknown_id_is_not_found() {
        let (_repo, svc) = service();
        let err = svc.cancel(Some(&guest()), &Uuid::new_v4().to_string()).await.unwrap_err();
        assert!(matches!(err, BookingError::NotFound));
    }

    #[tokio::test]
    async fn cancel_malformed_id_fails_before_any_lookup() {
        let (repo, svc) = service();
        let err = svc.cancel(Some(&guest()), "not-a-uuid").await.unwrap_err();
        assert!(matches!(err, BookingError::Validation(_)));
        assert_eq!(repo.find_calls(), 0);
    }

    #[tokio::test]
    async fn list_and_cancel_require_authenticated_user() {
        let (_repo, svc) = service();
        let err = svc.list(None).await.unwrap_err();
        assert!(matches!(err, BookingError::Unauthenticated));
        let err = svc.cancel(None, &Uuid::new_v4().to_string()).await.unwrap_err();
        assert!(matches!(err, BookingError::Unauthenticated));
    }
}
