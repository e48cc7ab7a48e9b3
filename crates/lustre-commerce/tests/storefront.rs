//! End-to-end storefront tests against on-disk storage.
//!
//! These run with the library compiled as a normal dependency, so they bring
//! their own order gateway instead of the simulated one.

use async_trait::async_trait;
use lustre_cache::Cache;
use lustre_commerce::cart::{CART_STORAGE_KEY, LineItem};
use lustre_commerce::checkout::{
    CheckoutFlow, OrderConfirmation, OrderGateway, OrderRequest, PaymentMethod, ShippingAddress,
};
use lustre_commerce::prelude::*;
use lustre_commerce::wishlist::WISHLIST_STORAGE_KEY;

/// Accepts every order immediately.
struct InstantGateway;

#[async_trait]
impl OrderGateway for InstantGateway {
    async fn submit(&self, request: &OrderRequest) -> Result<OrderConfirmation, CommerceError> {
        Ok(OrderConfirmation::accept(request))
    }
}

fn open(dir: &std::path::Path) -> Storefront {
    let cache = Cache::open_dir(dir).unwrap();
    Storefront::open(Catalog::jewellery().unwrap(), cache)
}

fn address() -> ShippingAddress {
    ShippingAddress {
        name: "Meera Iyer".to_string(),
        phone: "9123456780".to_string(),
        email: "meera@example.in".to_string(),
        street: "4 Marine Drive".to_string(),
        city: "Mumbai".to_string(),
        state: "Maharashtra".to_string(),
        pincode: "400020".to_string(),
    }
}

#[test]
fn test_cart_and_wishlist_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();

    {
        let mut store = open(dir.path());
        store.add_to_cart_by_id(&ProductId::new("1"), 1).unwrap();
        store.add_to_cart_by_id(&ProductId::new("1"), 2).unwrap();
        store.add_to_cart_by_id(&ProductId::new("7"), 1).unwrap();
        store.toggle_wishlist_by_id(&ProductId::new("3")).unwrap();
        store.toggle_wishlist_by_id(&ProductId::new("4")).unwrap();
    }

    let store = open(dir.path());
    let cart = store.cart();
    assert_eq!(cart.items().len(), 2);
    assert_eq!(cart.get(&ProductId::new("1")).unwrap().quantity, 3);
    assert_eq!(cart.total_items(), 4);
    assert_eq!(cart.total_price(), 24999 * 3 + 3999);

    let saved: Vec<&str> = store.wishlist().items().iter().map(|p| p.id.as_str()).collect();
    assert_eq!(saved, vec!["3", "4"]);
}

#[test]
fn test_stored_format_is_plain_json_arrays() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = open(dir.path());
    store.add_to_cart_by_id(&ProductId::new("2"), 2).unwrap();
    store.add_to_wishlist_by_id(&ProductId::new("9")).unwrap();

    let raw = std::fs::read_to_string(dir.path().join("cart.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value[0]["quantity"], 2);
    assert_eq!(value[0]["product"]["id"], "2");
    assert_eq!(value[0]["product"]["originalPrice"], 11999);

    let cache = Cache::open_dir(dir.path()).unwrap();
    let items: Vec<LineItem> = cache.get(CART_STORAGE_KEY).unwrap().unwrap();
    assert_eq!(items, store.cart().items());
    let saved: Vec<Product> = cache.get(WISHLIST_STORAGE_KEY).unwrap().unwrap();
    assert_eq!(saved.len(), 1);
}

#[test]
fn test_corrupt_files_start_empty() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("cart.json"), "{ not json").unwrap();
    std::fs::write(dir.path().join("wishlist.json"), "[1, 2, 3]").unwrap();

    let mut store = open(dir.path());
    assert!(store.cart().is_empty());
    assert!(store.wishlist().is_empty());

    store.add_to_cart_by_id(&ProductId::new("5"), 1).unwrap();
    assert_eq!(open(dir.path()).cart().total_items(), 1);
}

#[test]
fn test_listing_from_query_string() {
    let dir = tempfile::tempdir().unwrap();
    let store = open(dir.path());

    let criteria = FilterCriteria::from_query("?filter=new&sort=price-low");
    let ids: Vec<&str> = store.browse(&criteria).iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["5", "2", "10"]);

    let criteria = FilterCriteria::from_query("metal=silver&maxPrice=10000")
        .with_sort(SortKey::Rating);
    let listed = store.browse(&criteria);
    assert!(listed.iter().all(|p| p.metal_type == "Silver" && p.price <= 10000));
    assert!(listed.windows(2).all(|w| w[0].rating >= w[1].rating));
}

#[tokio::test]
async fn test_checkout_empties_persisted_cart() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = open(dir.path());
    store.add_to_cart_by_id(&ProductId::new("11"), 1).unwrap();

    let mut flow = CheckoutFlow::new();
    flow.submit_address(address()).unwrap();
    flow.select_payment(PaymentMethod::Wallet).unwrap();

    let confirmation = flow
        .place_order(store.cart_mut(), &InstantGateway)
        .await
        .unwrap();

    // Subtotals above 999 ship free.
    assert_eq!(confirmation.pricing.subtotal.amount, 1999);
    assert_eq!(confirmation.pricing.delivery_fee.amount, 0);
    assert_eq!(confirmation.pricing.total.amount, 1999);
    assert_eq!(confirmation.order_id.as_str().len(), 10);
    assert!(confirmation.order_id.as_str().starts_with("FJ"));

    assert!(open(dir.path()).cart().is_empty());
}

fn toe_ring(price: i64) -> Product {
    Product {
        id: ProductId::new("toe-ring"),
        name: "Plain Silver Toe Ring".to_string(),
        price,
        original_price: None,
        image: "toe-ring.jpg".to_string(),
        images: None,
        category: CategoryId::new("anklets"),
        subcategory: None,
        rating: 4.1,
        reviews: 12,
        description: "Adjustable toe ring.".to_string(),
        material: "925 Sterling Silver".to_string(),
        metal_type: "Silver".to_string(),
        weight: None,
        is_new: false,
        is_best_seller: false,
        in_stock: true,
    }
}

#[tokio::test]
async fn test_checkout_charges_delivery_at_threshold() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = Catalog::new(Vec::new(), vec![toe_ring(333)]).unwrap();
    let mut store = Storefront::open(catalog, Cache::open_dir(dir.path()).unwrap());
    store.add_to_cart_by_id(&ProductId::new("toe-ring"), 3).unwrap();

    let mut flow = CheckoutFlow::new();
    flow.submit_address(address()).unwrap();
    flow.select_payment(PaymentMethod::Upi).unwrap();

    let confirmation = flow
        .place_order(store.cart_mut(), &InstantGateway)
        .await
        .unwrap();

    // 999 is not above the threshold, so delivery is charged.
    assert_eq!(confirmation.pricing.subtotal.amount, 999);
    assert_eq!(confirmation.pricing.delivery_fee.amount, 99);
    assert_eq!(confirmation.pricing.total.amount, 1098);
    assert_eq!(confirmation.total_items, 3);
    assert!(store.cart().is_empty());
}
