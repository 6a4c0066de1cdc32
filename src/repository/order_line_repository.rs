use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};

use crate::{
    entity::order_lines::{
        ActiveModel as OrderLineActive, Column as OrderLineCol, Entity as OrderLines,
        Model as OrderLineModel,
    },
    gateway::RawOrderLine,
    models::ProductSales,
};

/// Line fields as the store sees them. `(order, description, gtin)` is the
/// natural key; the remaining fields are overwritten on refresh.
#[derive(Debug, Clone, Copy)]
pub struct OrderLineRecord<'a> {
    pub gtin: Option<&'a str>,
    pub description: &'a str,
    pub quantity: i32,
    pub merchant_product_no: &'a str,
    pub channel_product_no: &'a str,
    pub stock_location_id: i32,
}

impl<'a> From<&'a RawOrderLine> for OrderLineRecord<'a> {
    fn from(line: &'a RawOrderLine) -> Self {
        Self {
            gtin: line.gtin.as_deref(),
            description: &line.description,
            quantity: line.quantity,
            merchant_product_no: &line.merchant_product_no,
            channel_product_no: &line.channel_product_no,
            stock_location_id: line.stock_location.id,
        }
    }
}

pub async fn upsert_order_line<C: ConnectionTrait>(
    db: &C,
    order_id: i32,
    record: OrderLineRecord<'_>,
) -> Result<OrderLineModel, DbErr> {
    let now = Utc::now();
    // NULL never compares equal, so a missing GTIN has to match with IS NULL.
    let gtin_matches = match record.gtin {
        Some(gtin) => OrderLineCol::Gtin.eq(gtin),
        None => OrderLineCol::Gtin.is_null(),
    };

    let existing = OrderLines::find()
        .filter(
            Condition::all()
                .add(OrderLineCol::OrderId.eq(order_id))
                .add(OrderLineCol::Description.eq(record.description))
                .add(gtin_matches),
        )
        .one(db)
        .await?;

    match existing {
        Some(line) => {
            let mut active: OrderLineActive = line.into();
            active.quantity = Set(record.quantity);
            active.merchant_product_no = Set(record.merchant_product_no.to_string());
            active.channel_product_no = Set(record.channel_product_no.to_string());
            active.stock_location_id = Set(record.stock_location_id);
            active.updated_at = Set(now.into());
            active.update(db).await
        }
        None => {
            OrderLineActive {
                id: NotSet,
                order_id: Set(order_id),
                gtin: Set(record.gtin.map(str::to_string)),
                description: Set(record.description.to_string()),
                quantity: Set(record.quantity),
                merchant_product_no: Set(record.merchant_product_no.to_string()),
                channel_product_no: Set(record.channel_product_no.to_string()),
                stock_location_id: Set(record.stock_location_id),
                created_at: Set(now.into()),
                updated_at: Set(now.into()),
            }
            .insert(db)
            .await
        }
    }
}

pub async fn top_selling_products<C: ConnectionTrait>(
    db: &C,
    limit: u64,
) -> Result<Vec<ProductSales>, DbErr> {
    OrderLines::find()
        .select_only()
        .column(OrderLineCol::Gtin)
        .column(OrderLineCol::Description)
        .column_as(OrderLineCol::Quantity.sum(), "total_quantity_sold")
        .group_by(OrderLineCol::Gtin)
        .group_by(OrderLineCol::Description)
        .order_by_desc(OrderLineCol::Quantity.sum())
        .limit(limit)
        .into_model::<ProductSales>()
        .all(db)
        .await
}

pub async fn find_by_merchant_product_no<C: ConnectionTrait>(
    db: &C,
    merchant_product_no: &str,
) -> Result<Option<OrderLineModel>, DbErr> {
    OrderLines::find()
        .filter(OrderLineCol::MerchantProductNo.eq(merchant_product_no))
        .order_by_asc(OrderLineCol::Id)
        .one(db)
        .await
}

pub async fn lines_for_order<C: ConnectionTrait>(
    db: &C,
    order_id: i32,
) -> Result<Vec<OrderLineModel>, DbErr> {
    OrderLines::find()
        .filter(OrderLineCol::OrderId.eq(order_id))
        .order_by_asc(OrderLineCol::Id)
        .all(db)
        .await
}

pub async fn count_order_lines<C: ConnectionTrait>(db: &C) -> Result<u64, DbErr> {
    OrderLines::find().count(db).await
}
