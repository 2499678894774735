use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Place: index on owner_id
        manager
            .create_index(
                Index::create()
                    .name("idx_place_owner")
                    .table(Place::Table)
                    .col(Place::OwnerId)
                    .to_owned(),
            )
            .await?;

        // Booking: index on user_id for per-user listing
        manager
            .create_index(
                Index::create()
                    .name("idx_booking_user")
                    .table(Booking::Table)
                    .col(Booking::UserId)
                    .to_owned(),
            )
            .await?;

        // Booking: index on created_at for newest-first ordering
        manager
            .create_index(
                Index::create()
                    .name("idx_booking_created")
                    .table(Booking::Table)
                    .col(Booking::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_place_owner").table(Place::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_booking_user").table(Booking::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_booking_created").table(Booking::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Place { Table, OwnerId }

#[derive(DeriveIden)]
enum Booking { Table, UserId, CreatedAt }
