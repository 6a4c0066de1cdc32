use sea_orm_migration::prelude::*;

use super::m20241027_000001_create_orders_table::Orders;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OrderLines::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(OrderLines::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(OrderLines::OrderId).integer().not_null())
                    .col(ColumnDef::new(OrderLines::Gtin).string().null())
                    .col(ColumnDef::new(OrderLines::Description).string().not_null())
                    .col(ColumnDef::new(OrderLines::Quantity).integer().not_null())
                    .col(
                        ColumnDef::new(OrderLines::MerchantProductNo)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(OrderLines::ChannelProductNo)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(OrderLines::StockLocationId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(OrderLines::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(OrderLines::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_lines_order_id")
                            .from(OrderLines::Table, OrderLines::OrderId)
                            .to(Orders::Table, Orders::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Lookups by merchant product number back the stock update route.
        manager
            .create_index(
                Index::create()
                    .name("idx_order_lines_merchant_product_no")
                    .table(OrderLines::Table)
                    .col(OrderLines::MerchantProductNo)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OrderLines::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum OrderLines {
    Table,
    Id,
    OrderId,
    Gtin,
    Description,
    Quantity,
    MerchantProductNo,
    ChannelProductNo,
    StockLocationId,
    CreatedAt,
    UpdatedAt,
}
