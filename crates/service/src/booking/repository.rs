use async_trait::async_trait;
use uuid::Uuid;

use super::domain::{BookingInput, BookingWithPlace};
use super::errors::BookingError;

/// Repository abstraction for booking persistence.
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Persist one booking as a single insert.
    async fn create(&self, user_id: Uuid, input: &BookingInput) -> Result<models::booking::Model, BookingError>;

    /// All bookings owned by the user, place expanded, newest-created first.
    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<BookingWithPlace>, BookingError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<models::booking::Model>, BookingError>;

    async fn delete(&self, id: Uuid) -> Result<(), BookingError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockBookingRepository {
        bookings: Mutex<Vec<(u64, models::booking::Model)>>, // (insertion seq, row)
        places: Mutex<HashMap<Uuid, models::place::Model>>,  // key: place id
        seq: AtomicU64,
        finds: AtomicUsize,
    }

    impl MockBookingRepository {
        pub fn insert_place(&self, place: models::place::Model) {
            self.places.lock().unwrap().insert(place.id, place);
        }

        /// Number of `find_by_id` calls observed so far.
        pub fn find_calls(&self) -> usize {
            self.finds.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl BookingRepository for MockBookingRepository {
        async fn create(&self, user_id: Uuid, input: &BookingInput) -> Result<models::booking::Model, BookingError> {
            let row = models::booking::Model {
                id: Uuid::new_v4(),
                user_id,
                place_id: input.place_id,
                check_in: input.check_in,
                check_out: input.check_out,
                guests: input.guests,
                price: input.price,
                name: input.name.clone(),
                phone: input.phone.clone(),
                created_at: chrono::Utc::now().into(),
            };
            let seq = self.seq.fetch_add(1, Ordering::SeqCst);
            self.bookings.lock().unwrap().push((seq, row.clone()));
            Ok(row)
        }

        async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<BookingWithPlace>, BookingError> {
            let places = self.places.lock().unwrap();
            let mut rows: Vec<(u64, models::booking::Model)> = self
                .bookings
                .lock()
                .unwrap()
                .iter()
                .filter(|(_, b)| b.user_id == user_id)
                .cloned()
                .collect();
            // Insertion sequence stands in for created_at; newest first.
            rows.sort_by(|a, b| b.0.cmp(&a.0));
            Ok(rows
                .into_iter()
                .map(|(_, b)| {
                    let place = places.get(&b.place_id).cloned();
                    BookingWithPlace { booking: b, place }
                })
                .collect())
        }

        async fn find_by_id(&self, id: Uuid) -> Result<Option<models::booking::Model>, BookingError> {
            self.finds.fetch_add(1, Ordering::SeqCst);
            Ok(self
                .bookings
                .lock()
                .unwrap()
                .iter()
                .find(|(_, b)| b.id == id)
                .map(|(_, b)| b.clone()))
        }

        async fn delete(&self, id: Uuid) -> Result<(), BookingError> {
            self.bookings.lock().unwrap().retain(|(_, b)| b.id != id);
            Ok(())
        }
    }
}
