//! A browsing session: catalog, view state and the derived product list.

use crate::catalog::{Catalog, Product};
use crate::config::DisplayConfig;
use crate::ids::ProductId;
use crate::search::SearchResults;
use crate::view::{CardView, DetailView, ViewEffect, ViewMsg, ViewState};
use tracing::debug;

/// One shopper's session over a shared catalog.
///
/// The visible list is a pure function of the catalog and the query inputs
/// in [`ViewState`]; it is recomputed in full whenever one of them changes.
#[derive(Debug, Clone)]
pub struct Storefront {
    catalog: Catalog,
    state: ViewState,
    display: DisplayConfig,
    visible: SearchResults<ProductId>,
}

impl Storefront {
    /// Start a session with default view state.
    pub fn new(catalog: Catalog, display: DisplayConfig) -> Self {
        Self::with_state(catalog, display, ViewState::default())
    }

    /// Start a session from an existing view state.
    ///
    /// The state is normalized against `catalog` first; see
    /// [`ViewState::normalize`].
    pub fn with_state(catalog: Catalog, display: DisplayConfig, mut state: ViewState) -> Self {
        state.normalize(&catalog);
        let mut storefront = Self {
            catalog,
            state,
            display,
            visible: SearchResults::empty(),
        };
        storefront.recompute();
        storefront
    }

    /// Apply an input event and return its effect.
    pub fn dispatch(&mut self, msg: ViewMsg) -> ViewEffect {
        let effect = self.state.update(msg, &self.catalog);
        if effect == ViewEffect::Recompute {
            self.recompute();
        }
        effect
    }

    fn recompute(&mut self) {
        let results = self.state.query().run(&self.catalog);
        self.visible = results.map(|p| p.id.clone());
        debug!(
            visible = self.visible.len(),
            total = self.visible.total,
            "visible list recomputed"
        );
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn display(&self) -> &DisplayConfig {
        &self.display
    }

    /// Ids of the visible products, in display order.
    pub fn results(&self) -> &SearchResults<ProductId> {
        &self.visible
    }

    /// Visible products, in display order.
    pub fn visible_products(&self) -> impl Iterator<Item = &Product> + '_ {
        self.visible.items.iter().filter_map(|id| self.catalog.get(id))
    }

    /// Cards for the visible products.
    pub fn cards(&self) -> Vec<CardView> {
        self.visible_products()
            .map(|p| CardView::from_product(p, &self.display))
            .collect()
    }

    /// The product in the open detail overlay.
    pub fn selected_product(&self) -> Option<&Product> {
        self.state.selected.as_ref().and_then(|id| self.catalog.get(id))
    }

    /// The detail overlay, if open.
    pub fn detail(&self) -> Option<DetailView> {
        self.selected_product().map(|p| {
            DetailView::new(p, self.state.image_index, self.state.quantity, &self.display)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{PriceRange, SortMode};

    fn storefront() -> Storefront {
        let catalog = Catalog::from_products(vec![
            Product::new("1", "Red Shoe", 50.0).with_rating(800.0).with_colors(["red"]),
            Product::new("2", "Blue Hat", 150.0).with_rating(900.0).with_colors(["blue"]),
            Product::new("3", "Green Scarf", 20.0).with_rating(300.0),
        ]);
        Storefront::new(catalog, DisplayConfig::default())
    }

    fn visible_ids(s: &Storefront) -> Vec<&str> {
        s.results().items.iter().map(|id| id.as_str()).collect()
    }

    #[test]
    fn test_initial_list_is_whole_catalog() {
        let s = storefront();
        assert_eq!(visible_ids(&s), vec!["1", "2", "3"]);
        assert_eq!(s.results().summary(), "Showing 3 of 3 products");
    }

    #[test]
    fn test_dispatch_recomputes() {
        let mut s = storefront();
        s.dispatch(ViewMsg::SetPriceRange(PriceRange::new(0.0, 100.0)));
        assert_eq!(visible_ids(&s), vec!["1", "3"]);
        s.dispatch(ViewMsg::SetSort(SortMode::PriceLow));
        assert_eq!(visible_ids(&s), vec!["3", "1"]);
        s.dispatch(ViewMsg::ClearFilters);
        assert_eq!(visible_ids(&s), vec!["3", "1", "2"]);
    }

    #[test]
    fn test_cards_follow_visible_order() {
        let mut s = storefront();
        s.dispatch(ViewMsg::SetSort(SortMode::Name));
        let names: Vec<String> = s.cards().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Blue Hat", "Green Scarf", "Red Shoe"]);
    }

    #[test]
    fn test_detail_tracks_selection() {
        let mut s = storefront();
        assert!(s.detail().is_none());
        s.dispatch(ViewMsg::Select(ProductId::new("2")));
        s.dispatch(ViewMsg::IncrementQuantity);
        let detail = s.detail().unwrap();
        assert_eq!(detail.name, "Blue Hat");
        assert_eq!(detail.quantity, 2);
        s.dispatch(ViewMsg::Close);
        assert!(s.detail().is_none());
    }

    #[test]
    fn test_selection_survives_filtering_out() {
        let mut s = storefront();
        s.dispatch(ViewMsg::Select(ProductId::new("2")));
        s.dispatch(ViewMsg::SetSearch("shoe".into()));
        assert_eq!(visible_ids(&s), vec!["1"]);
        assert_eq!(s.selected_product().map(|p| p.name.as_str()), Some("Blue Hat"));
    }

    #[test]
    fn test_restored_state_is_applied() {
        let state = ViewState {
            search: "hat".into(),
            ..ViewState::default()
        };
        let s = Storefront::with_state(storefront().catalog().clone(), DisplayConfig::default(), state);
        assert_eq!(visible_ids(&s), vec!["2"]);
    }

    #[test]
    fn test_restored_state_is_normalized() {
        let state: ViewState =
            serde_json::from_str(r#"{"selected": "ghost", "image_index": 9, "quantity": 0}"#).unwrap();
        let mut s = Storefront::with_state(storefront().catalog().clone(), DisplayConfig::default(), state);
        assert!(!s.state().is_open());
        assert_eq!(s.state().quantity, 1);
        assert_eq!(s.dispatch(ViewMsg::BuyNow), ViewEffect::None);

        let state: ViewState = serde_json::from_str(r#"{"selected": "2", "quantity": 0}"#).unwrap();
        let mut s = Storefront::with_state(storefront().catalog().clone(), DisplayConfig::default(), state);
        assert_eq!(s.detail().map(|d| d.quantity), Some(1));
        match s.dispatch(ViewMsg::BuyNow) {
            ViewEffect::Purchase(intent) => assert_eq!(intent.quantity, 1),
            other => panic!("expected purchase, got {:?}", other),
        }
    }
}
