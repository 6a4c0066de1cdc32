mod common;

use channel_order_sync::{models::ProductSales, services::order_line_service};
use common::{seed_order, setup_state, unreachable_url};

fn totals(products: &[ProductSales]) -> Vec<i64> {
    products.iter().map(|p| p.total_quantity_sold).collect()
}

#[tokio::test]
async fn returns_the_five_best_sellers_in_descending_order() -> anyhow::Result<()> {
    let state = setup_state(&unreachable_url().await).await?;
    seed_order(
        &state,
        "T-1",
        &[
            (Some("1"), "Product 1", 5),
            (Some("2"), "Product 2", 10),
            (Some("3"), "Product 3", 15),
            (Some("4"), "Product 4", 20),
            (Some("5"), "Product 5", 25),
            (Some("6"), "Product 6", 30),
        ],
    )
    .await?;

    let products = order_line_service::top_selling_products(&state, 5).await?;

    assert_eq!(totals(&products), vec![30, 25, 20, 15, 10]);
    assert_eq!(products[0].gtin.as_deref(), Some("6"));
    assert_eq!(products[0].description, "Product 6");
    Ok(())
}

#[tokio::test]
async fn empty_store_yields_an_empty_list() -> anyhow::Result<()> {
    let state = setup_state(&unreachable_url().await).await?;

    let products = order_line_service::top_selling_products(&state, 5).await?;

    assert!(products.is_empty());
    Ok(())
}

#[tokio::test]
async fn quantities_sharing_gtin_and_description_are_summed() -> anyhow::Result<()> {
    let state = setup_state(&unreachable_url().await).await?;
    // One order cannot hold two lines with the same key, so spread them.
    seed_order(&state, "S-1", &[(Some("111"), "Product 1", 5)]).await?;
    seed_order(&state, "S-2", &[(Some("111"), "Product 1", 10)]).await?;

    let products = order_line_service::top_selling_products(&state, 5).await?;

    assert_eq!(
        products,
        vec![ProductSales {
            gtin: Some("111".into()),
            description: "Product 1".into(),
            total_quantity_sold: 15,
        }]
    );
    Ok(())
}

#[tokio::test]
async fn negative_and_zero_quantities_count_as_they_are() -> anyhow::Result<()> {
    let state = setup_state(&unreachable_url().await).await?;
    seed_order(
        &state,
        "R-1",
        &[
            (Some("1"), "Returned", -5),
            (Some("2"), "Nothing sold", 0),
            (Some("3"), "Sold", 3),
        ],
    )
    .await?;
    seed_order(&state, "R-2", &[(Some("3"), "Sold", -1)]).await?;

    let products = order_line_service::top_selling_products(&state, 5).await?;

    assert_eq!(totals(&products), vec![2, 0, -5]);
    assert_eq!(products[2].description, "Returned");
    Ok(())
}

#[tokio::test]
async fn groups_split_on_description_and_merge_missing_gtins() -> anyhow::Result<()> {
    let state = setup_state(&unreachable_url().await).await?;
    seed_order(
        &state,
        "G-1",
        &[
            (Some("555"), "Red shirt", 4),
            (Some("555"), "Blue shirt", 2),
            (None, "Gift wrap", 1),
        ],
    )
    .await?;
    seed_order(&state, "G-2", &[(None, "Gift wrap", 6)]).await?;

    let products = order_line_service::top_selling_products(&state, 5).await?;

    assert_eq!(products.len(), 3);
    assert_eq!(
        products[0],
        ProductSales {
            gtin: None,
            description: "Gift wrap".into(),
            total_quantity_sold: 7,
        }
    );
    assert_eq!(totals(&products), vec![7, 4, 2]);
    Ok(())
}

#[tokio::test]
async fn limit_bounds_the_result() -> anyhow::Result<()> {
    let state = setup_state(&unreachable_url().await).await?;
    seed_order(
        &state,
        "L-1",
        &[(Some("1"), "A", 1), (Some("2"), "B", 2), (Some("3"), "C", 3)],
    )
    .await?;

    let products = order_line_service::top_selling_products(&state, 2).await?;

    assert_eq!(totals(&products), vec![3, 2]);
    Ok(())
}
