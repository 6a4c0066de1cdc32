use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, Set,
};

use crate::entity::orders::{ActiveModel as OrderActive, Column as OrderCol, Entity as Orders, Model as OrderModel};

pub async fn upsert_order<C: ConnectionTrait>(
    db: &C,
    channel_order_no: &str,
    status: &str,
) -> Result<OrderModel, DbErr> {
    let now = Utc::now();
    let existing = find_by_channel_order_no(db, channel_order_no).await?;

    match existing {
        Some(order) => {
            let mut active: OrderActive = order.into();
            active.status = Set(status.to_string());
            active.updated_at = Set(now.into());
            active.update(db).await
        }
        None => {
            OrderActive {
                id: NotSet,
                channel_order_no: Set(channel_order_no.to_string()),
                status: Set(status.to_string()),
                created_at: Set(now.into()),
                updated_at: Set(now.into()),
            }
            .insert(db)
            .await
        }
    }
}

pub async fn find_by_channel_order_no<C: ConnectionTrait>(
    db: &C,
    channel_order_no: &str,
) -> Result<Option<OrderModel>, DbErr> {
    Orders::find()
        .filter(OrderCol::ChannelOrderNo.eq(channel_order_no))
        .one(db)
        .await
}

pub async fn count_orders<C: ConnectionTrait>(db: &C) -> Result<u64, DbErr> {
    Orders::find().count(db).await
}

/// Deletes the order; its lines go with it through the cascading foreign key.
pub async fn delete_order<C: ConnectionTrait>(db: &C, id: i32) -> Result<u64, DbErr> {
    let result = Orders::delete_by_id(id).exec(db).await?;
    Ok(result.rows_affected)
}
