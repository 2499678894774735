use anyhow::Result;
use chrono::NaiveDate;
use migration::MigratorTrait;
use sea_orm::{ActiveModelTrait, EntityTrait, Set};
use uuid::Uuid;

use crate::db::connect;
use crate::{booking, place, user};

/// Full chain: user -> place -> booking, relation loading, cascade delete.
#[tokio::test]
async fn test_booking_chain_and_relations() -> Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }

    let db = connect().await?;
    migration::Migrator::up(&db, None).await?;

    let email = format!("host_{}@example.com", Uuid::new_v4());
    let test_user = user::create(&db, &email, "Host").await?;
    let test_place = place::create(&db, test_user.id, "Sea View Flat", "1 Harbour Rd", 120).await?;

    let bk = booking::ActiveModel {
        id: Set(Uuid::new_v4()),
        user_id: Set(test_user.id),
        place_id: Set(test_place.id),
        check_in: Set(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()),
        check_out: Set(NaiveDate::from_ymd_opt(2024, 5, 5).unwrap()),
        guests: Set(2),
        price: Set(480),
        name: Set("Guest".into()),
        phone: Set("+3805550101".into()),
        created_at: Set(chrono::Utc::now().into()),
    };
    let test_booking = bk.insert(&db).await?;

    // Relation loading: booking row must resolve to its place
    let found = booking::Entity::find_by_id(test_booking.id)
        .find_also_related(place::Entity)
        .one(&db)
        .await?;
    let (found_booking, found_place) = found.expect("booking exists");
    assert_eq!(found_booking.user_id, test_user.id);
    assert_eq!(found_place.as_ref().map(|p| p.id), Some(test_place.id));
    assert_eq!(found_place.map(|p| p.title), Some("Sea View Flat".to_string()));

    // Cascade: deleting the user removes dependent rows
    user::hard_delete(&db, test_user.id).await?;
    let gone = booking::Entity::find_by_id(test_booking.id).one(&db).await?;
    assert!(gone.is_none());
    let place_gone = place::Entity::find_by_id(test_place.id).one(&db).await?;
    assert!(place_gone.is_none());

    Ok(())
}

#[tokio::test]
async fn test_user_create_validation() -> Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }

    let db = connect().await?;
    migration::Migrator::up(&db, None).await?;

    assert!(user::create(&db, "not-an-email", "Name").await.is_err());
    assert!(user::create(&db, "a@b.com", "  ").await.is_err());
    Ok(())
}
