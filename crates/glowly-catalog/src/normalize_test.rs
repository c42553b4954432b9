use super::*;

// -----------------------------------------------------------------------
// normalize_product
// -----------------------------------------------------------------------

fn make_catalog_product(price: f64, rating: f64, discount_percentage: f64) -> CatalogProduct {
    CatalogProduct {
        id: 3,
        title: "Powder Canister".to_owned(),
        price,
        description: "Fine setting powder.".to_owned(),
        category: "beauty".to_owned(),
        thumbnail: "https://cdn.dummyjson.com/3/thumbnail.png".to_owned(),
        images: vec!["https://cdn.dummyjson.com/3/1.png".to_owned()],
        rating,
        stock: 59,
        discount_percentage,
        tags: vec!["beauty".to_owned(), "face powder".to_owned()],
    }
}

#[test]
fn normalize_product_copies_identity_fields() {
    let normalized = normalize_product(make_catalog_product(14.99, 4.64, 0.0));
    assert_eq!(normalized.id, 3);
    assert_eq!(normalized.title, "Powder Canister");
    assert_eq!(normalized.category, "beauty");
    assert_eq!(normalized.image, "https://cdn.dummyjson.com/3/thumbnail.png");
    assert_eq!(normalized.images.len(), 1);
}

#[test]
fn normalize_product_rounds_rating_to_one_decimal() {
    let normalized = normalize_product(make_catalog_product(14.99, 4.64, 0.0));
    assert!((normalized.rating.rate - 4.6).abs() < 1e-9);
}

#[test]
fn normalize_product_clamps_out_of_range_rating() {
    let normalized = normalize_product(make_catalog_product(14.99, 7.2, 0.0));
    assert!((normalized.rating.rate - 5.0).abs() < 1e-9);
}

#[test]
fn normalize_product_count_is_stock_times_twelve() {
    let normalized = normalize_product(make_catalog_product(14.99, 4.64, 0.0));
    assert_eq!(normalized.rating.count, 59 * 12);
}

#[test]
fn normalize_product_no_original_price_without_discount() {
    let normalized = normalize_product(make_catalog_product(14.99, 4.64, 0.0));
    assert!(normalized.original_price.is_none());
}

#[test]
fn normalize_product_reconstructs_original_price() {
    let normalized = normalize_product(make_catalog_product(75.0, 4.0, 25.0));
    assert_eq!(normalized.original_price, Some(100.0));
}

#[test]
fn normalize_product_rounds_original_price_to_cents() {
    // 9.99 / 0.9 = 11.1
    let normalized = normalize_product(make_catalog_product(9.99, 4.0, 10.0));
    assert_eq!(normalized.original_price, Some(11.1));

    // 19.99 / (1 - 0.0717) = 21.5340...
    let normalized = normalize_product(make_catalog_product(19.99, 4.0, 7.17));
    assert_eq!(normalized.original_price, Some(21.53));
}

#[test]
fn normalize_product_drops_original_price_that_rounds_to_price() {
    let normalized = normalize_product(make_catalog_product(1.0, 4.0, 0.01));
    assert!(normalized.original_price.is_none());
}

#[test]
fn normalize_product_drops_original_price_for_total_discount() {
    let normalized = normalize_product(make_catalog_product(5.0, 4.0, 100.0));
    assert!(normalized.original_price.is_none());
}

#[test]
fn normalize_product_original_price_always_above_price() {
    for discount in [0.5, 1.0, 3.15, 12.5, 19.99, 20.0, 45.0, 99.0] {
        for price in [0.0, 0.01, 1.0, 8.99, 14.99, 129.99] {
            let normalized = normalize_product(make_catalog_product(price, 4.0, discount));
            if let Some(original) = normalized.original_price {
                assert!(
                    original > normalized.price,
                    "discount {discount} price {price} gave original {original}"
                );
            }
        }
    }
}

// -----------------------------------------------------------------------
// badge precedence
// -----------------------------------------------------------------------

#[test]
fn badge_hot_deal_at_twenty_percent() {
    let normalized = normalize_product(make_catalog_product(10.0, 4.9, 20.0));
    assert_eq!(normalized.badge, Some(Badge::HotDeal));
}

#[test]
fn badge_new_when_tagged_and_not_hot_deal() {
    let mut product = make_catalog_product(10.0, 4.9, 19.99);
    product.tags.push("new".to_owned());
    let normalized = normalize_product(product);
    assert_eq!(normalized.badge, Some(Badge::New));
}

#[test]
fn badge_new_requires_exact_tag() {
    let mut product = make_catalog_product(10.0, 4.0, 5.0);
    product.tags = vec!["new arrivals".to_owned()];
    let normalized = normalize_product(product);
    assert!(normalized.badge.is_none());
}

#[test]
fn badge_bestseller_from_rating() {
    let normalized = normalize_product(make_catalog_product(10.0, 4.8, 5.0));
    assert_eq!(normalized.badge, Some(Badge::Bestseller));
}

#[test]
fn badge_none_below_all_thresholds() {
    let normalized = normalize_product(make_catalog_product(10.0, 4.79, 5.0));
    assert!(normalized.badge.is_none());
}

// -----------------------------------------------------------------------
// featured flag
// -----------------------------------------------------------------------

#[test]
fn featured_at_threshold() {
    assert!(normalize_product(make_catalog_product(10.0, 4.7, 0.0)).featured);
}

#[test]
fn not_featured_below_threshold() {
    assert!(!normalize_product(make_catalog_product(10.0, 4.69, 0.0)).featured);
}

#[test]
fn sparse_record_normalizes_to_zeroed_product() {
    let raw: CatalogProduct = serde_json::from_str(r#"{"id": 42}"#).unwrap();
    let normalized = normalize_product(raw);
    assert_eq!(normalized.id, 42);
    assert!(normalized.price.abs() < f64::EPSILON);
    assert!(normalized.original_price.is_none());
    assert!(normalized.badge.is_none());
    assert!(!normalized.featured);
    assert_eq!(normalized.rating.count, 0);
}
