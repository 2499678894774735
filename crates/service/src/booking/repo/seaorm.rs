use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};
use uuid::Uuid;

use models::{booking, place};

use crate::booking::domain::{BookingInput, BookingWithPlace};
use crate::booking::errors::BookingError;
use crate::booking::repository::BookingRepository;

/// SeaORM-backed repository implementation.
pub struct SeaOrmBookingRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl BookingRepository for SeaOrmBookingRepository {
    async fn create(&self, user_id: Uuid, input: &BookingInput) -> Result<booking::Model, BookingError> {
        let am = booking::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            place_id: Set(input.place_id),
            check_in: Set(input.check_in),
            check_out: Set(input.check_out),
            guests: Set(input.guests),
            price: Set(input.price),
            name: Set(input.name.clone()),
            phone: Set(input.phone.clone()),
            created_at: Set(Utc::now().into()),
        };
        am.insert(&self.db).await.map_err(|e| BookingError::Repository(e.to_string()))
    }

    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<BookingWithPlace>, BookingError> {
        let rows = booking::Entity::find()
            .filter(booking::Column::UserId.eq(user_id))
            .find_also_related(place::Entity)
            .order_by_desc(booking::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| BookingError::Repository(e.to_string()))?;
        Ok(rows
            .into_iter()
            .map(|(b, p)| BookingWithPlace { booking: b, place: p })
            .collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<booking::Model>, BookingError> {
        booking::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| BookingError::Repository(e.to_string()))
    }

    async fn delete(&self, id: Uuid) -> Result<(), BookingError> {
        booking::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| BookingError::Repository(e.to_string()))?;
        Ok(())
    }
}
