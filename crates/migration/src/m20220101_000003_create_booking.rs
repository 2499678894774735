use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Booking::Table)
                    .if_not_exists()
                    .col(uuid(Booking::Id).primary_key())
                    .col(uuid(Booking::UserId).not_null())
                    .col(uuid(Booking::PlaceId).not_null())
                    .col(date(Booking::CheckIn).not_null())
                    .col(date(Booking::CheckOut).not_null())
                    .col(integer(Booking::Guests).not_null())
                    .col(integer(Booking::Price).not_null())
                    .col(string_len(Booking::Name, 255).not_null())
                    .col(string_len(Booking::Phone, 32).not_null())
                    .col(timestamp_with_time_zone(Booking::CreatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_user")
                            .from(Booking::Table, Booking::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_place")
                            .from(Booking::Table, Booking::PlaceId)
                            .to(Place::Table, Place::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Booking::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Booking { Table, Id, UserId, PlaceId, CheckIn, CheckOut, Guests, Price, Name, Phone, CreatedAt }

#[derive(DeriveIden)]
enum User { Table, Id }

#[derive(DeriveIden)]
enum Place { Table, Id }
