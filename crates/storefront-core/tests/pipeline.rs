/// End-to-end tests for the query pipeline and session transitions.
///
/// These drive the public API only: load a catalog from JSON, dispatch view
/// messages, and check the visible list and detail overlay.
use std::collections::BTreeSet;

use storefront_core::prelude::*;

const SHOES_AND_HATS: &str = r#"[
    {"id": 1, "name": "Red Shoe", "price": 50, "yulduz": 800, "color": ["red"]},
    {"id": 2, "name": "Blue Hat", "price": 150, "stars": 900, "color": ["blue"]}
]"#;

fn storefront(json: &str) -> Storefront {
    let catalog = Catalog::from_json_str(json).unwrap();
    Storefront::new(catalog, DisplayConfig::default())
}

fn visible_names(s: &Storefront) -> Vec<String> {
    s.visible_products().map(|p| p.name.clone()).collect()
}

#[test]
fn price_range_keeps_only_affordable_products() {
    let mut s = storefront(SHOES_AND_HATS);
    s.dispatch(ViewMsg::SetPriceRange(PriceRange::new(0.0, 100.0)));
    assert_eq!(visible_names(&s), vec!["Red Shoe"]);
    assert_eq!(s.results().summary(), "Showing 1 of 2 products");
}

#[test]
fn price_high_sort_orders_descending() {
    let mut s = storefront(SHOES_AND_HATS);
    s.dispatch(ViewMsg::SetSort(SortMode::PriceHigh));
    assert_eq!(visible_names(&s), vec!["Blue Hat", "Red Shoe"]);
}

#[test]
fn colorless_product_excluded_by_color_filter() {
    let mut s = storefront(
        r#"[
            {"id": "a", "name": "Plain Mug", "price": 10},
            {"id": "b", "name": "Red Mug", "price": 12, "color": ["red"]}
        ]"#,
    );
    s.dispatch(ViewMsg::ToggleColor("red".into()));
    assert_eq!(visible_names(&s), vec!["Red Mug"]);
}

#[test]
fn no_matches_yields_empty_list() {
    let mut s = storefront(SHOES_AND_HATS);
    s.dispatch(ViewMsg::SetSearch("umbrella".into()));
    assert!(s.results().is_empty());
    assert_eq!(s.results().summary(), "Showing 0 of 2 products");
}

#[test]
fn reopening_starts_fresh() {
    let mut s = storefront(
        r#"[
            {"id": "x", "name": "Camera", "price": 500, "img": ["x0", "x1", "x2"]},
            {"id": "y", "name": "Tripod", "price": 80, "img": ["y0", "y1"]}
        ]"#,
    );
    s.dispatch(ViewMsg::Select(ProductId::new("x")));
    s.dispatch(ViewMsg::ShowImage(2));
    s.dispatch(ViewMsg::QuantityInput("4".into()));
    s.dispatch(ViewMsg::Close);
    s.dispatch(ViewMsg::Select(ProductId::new("y")));

    let detail = s.detail().unwrap();
    assert_eq!(detail.name, "Tripod");
    assert_eq!(detail.image_index, 0);
    assert_eq!(detail.main_image, "y0");
    assert_eq!(detail.quantity, 1);
}

#[test]
fn quantity_never_drops_below_one() {
    let mut s = storefront(SHOES_AND_HATS);
    s.dispatch(ViewMsg::Select(ProductId::new("1")));
    s.dispatch(ViewMsg::DecrementQuantity);
    s.dispatch(ViewMsg::QuantityInput("-3".into()));
    s.dispatch(ViewMsg::QuantityInput("not a number".into()));
    assert_eq!(s.state().quantity, 1);
    assert!(!s.detail().unwrap().can_decrement);
}

#[test]
fn buy_now_reports_selected_quantity() {
    let mut s = storefront(SHOES_AND_HATS);
    s.dispatch(ViewMsg::Select(ProductId::new("2")));
    s.dispatch(ViewMsg::IncrementQuantity);
    s.dispatch(ViewMsg::IncrementQuantity);
    match s.dispatch(ViewMsg::BuyNow) {
        ViewEffect::Purchase(intent) => {
            assert_eq!(intent.kind, PurchaseKind::BuyNow);
            assert_eq!(intent.product_id.as_str(), "2");
            assert_eq!(intent.quantity, 3);
        }
        other => panic!("expected purchase, got {:?}", other),
    }
}

#[test]
fn filtered_list_is_subset_satisfying_every_filter() {
    let catalog = Catalog::bundled().unwrap();
    let mut colors = BTreeSet::new();
    colors.insert("silver".to_string());
    colors.insert("black".to_string());

    let mut filters = FilterCriteria::new()
        .with_price_range(PriceRange::new(100.0, 2000.0))
        .with_min_rating(300.0);
    filters.colors = colors.clone();
    let query = SearchQuery::new().with_filters(filters).with_sort(SortMode::Rating);

    let results = query.run(&catalog);
    assert_eq!(results.total, catalog.len());
    assert!(results.len() <= catalog.len());

    for product in &results.items {
        assert!(catalog.get(&product.id).is_some());
        assert!(product.price >= 100.0 && product.price <= 2000.0);
        assert!(product.rating >= 300.0);
        assert!(product.colors.iter().any(|c| colors.contains(c)));
    }

    for pair in results.items.windows(2) {
        assert!(pair[0].rating >= pair[1].rating);
    }
}

#[test]
fn every_sort_mode_is_a_permutation_of_the_filtered_set() {
    let catalog = Catalog::bundled().unwrap();
    let mut baseline: Vec<String> = SearchQuery::new()
        .run(&catalog)
        .items
        .iter()
        .map(|p| p.id.to_string())
        .collect();
    baseline.sort();

    for sort in SortMode::ALL {
        let mut ids: Vec<String> = SearchQuery::new()
            .with_sort(sort)
            .run(&catalog)
            .items
            .iter()
            .map(|p| p.id.to_string())
            .collect();
        ids.sort();
        assert_eq!(ids, baseline, "sort {:?}", sort);
    }
}

#[test]
fn bundled_catalog_renders_cards() {
    let s = Storefront::new(Catalog::bundled().unwrap(), DisplayConfig::default());
    let cards = s.cards();
    assert_eq!(cards.len(), s.catalog().len());
    assert!(cards.iter().all(|c| c.stars <= 5));
    assert!(cards.iter().any(|c| c.image_is_placeholder));
}
