//! Application components.

use leptos::prelude::*;
use leptos_meta::*;
use storefront_core::catalog::Catalog;
use storefront_core::search::{color_facets, PricePreset, SortMode, NO_RESULTS_MESSAGE};
use storefront_core::view::{
    CardView, DetailView, PurchaseIntent, Storefront, Swatch, ViewEffect, ViewMsg, MAX_STARS,
};
use storefront_core::DisplayConfig;
use storefront_render::STOREFRONT_STYLES;

// ============================================================================
// Session Context
// ============================================================================

/// The session signal and the last purchase action, shared by every
/// component through context.
#[derive(Clone, Copy)]
struct Store {
    session: RwSignal<Storefront>,
    last_purchase: RwSignal<Option<PurchaseIntent>>,
}

impl Store {
    fn dispatch(&self, msg: ViewMsg) {
        let mut effect = ViewEffect::None;
        self.session.update(|s| effect = s.dispatch(msg));
        if let ViewEffect::Purchase(intent) = effect {
            self.last_purchase.set(Some(intent));
        }
    }

    fn with<R>(&self, f: impl FnOnce(&Storefront) -> R) -> R {
        self.session.with(f)
    }
}

fn use_store() -> Store {
    expect_context::<Store>()
}

// ============================================================================
// App Component
// ============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let catalog = match Catalog::bundled() {
        Ok(catalog) => catalog,
        Err(e) => {
            return view! {
                <Title text="Product Store"/>
                <p class="load-error">"Failed to load products: " {e.to_string()}</p>
            }
            .into_any();
        }
    };

    let store = Store {
        session: RwSignal::new(Storefront::new(catalog, DisplayConfig::default())),
        last_purchase: RwSignal::new(None),
    };
    provide_context(store);

    view! {
        <Title text="Product Store"/>
        <Meta name="description" content="Discover amazing products at great prices"/>
        <Style>{STOREFRONT_STYLES}</Style>

        <Header/>
        <div class="container">
            <Toolbar/>
            <ResultsSummary/>
            <ProductGrid/>
        </div>
        <ProductDetailModal/>
    }
    .into_any()
}

// ============================================================================
// Layout Components
// ============================================================================

#[component]
fn Header() -> impl IntoView {
    view! {
        <header class="site-header">
            <div class="container">
                <h1 class="site-title">"Product Store"</h1>
                <p class="site-tagline">"Discover amazing products at great prices"</p>
            </div>
        </header>
    }
}

#[component]
fn Toolbar() -> impl IntoView {
    let store = use_store();

    let search = move || store.with(|s| s.state().search.clone());
    let sort = move || store.with(|s| s.state().sort);
    let preset = move || store.with(|s| PricePreset::matching(&s.state().filters.price_range));
    let single_color = move || {
        store.with(|s| {
            let colors = &s.state().filters.colors;
            (colors.len() == 1).then(|| colors.iter().next().cloned()).flatten()
        })
    };
    let facets = move || store.with(|s| color_facets(s.catalog(), &s.state().filters));

    view! {
        <section class="toolbar">
            <div class="toolbar-form">
                <div class="toolbar-search">
                    <input
                        type="text"
                        placeholder="Search products..."
                        aria-label="Search products"
                        prop:value=search
                        on:input=move |ev| store.dispatch(ViewMsg::SetSearch(event_target_value(&ev)))
                    />
                </div>

                <select
                    aria-label="Sort"
                    on:change=move |ev| {
                        store.dispatch(ViewMsg::SetSort(SortMode::from_key(&event_target_value(&ev))))
                    }
                >
                    {SortMode::ALL
                        .into_iter()
                        .map(|mode| {
                            view! {
                                <option value=mode.as_str() prop:selected=move || sort() == mode>
                                    {mode.display_name()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>

                <select
                    aria-label="Price range"
                    on:change=move |ev| {
                        let preset = PricePreset::from_key(&event_target_value(&ev)).unwrap_or_default();
                        store.dispatch(ViewMsg::SetPriceRange(preset.range()))
                    }
                >
                    {PricePreset::ALL
                        .into_iter()
                        .map(|p| {
                            view! {
                                <option value=p.as_str() prop:selected=move || preset() == Some(p)>
                                    {p.display_name()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>

                <select
                    aria-label="Color"
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        let colors = if value == "all" {
                            Default::default()
                        } else {
                            std::iter::once(value).collect()
                        };
                        store.dispatch(ViewMsg::SetColors(colors))
                    }
                >
                    <option value="all" prop:selected=move || single_color().is_none()>"All Colors"</option>
                    {move || {
                        facets()
                            .into_iter()
                            .map(|facet| {
                                let value = facet.value.clone();
                                let selected = single_color().as_deref() == Some(value.as_str());
                                view! {
                                    <option value=value prop:selected=selected>
                                        {facet.value}
                                    </option>
                                }
                            })
                            .collect_view()
                    }}
                </select>
            </div>
        </section>
    }
}

#[component]
fn ResultsSummary() -> impl IntoView {
    let store = use_store();
    view! {
        <div class="results-summary">
            <p>{move || store.with(|s| s.results().summary())}</p>
        </div>
    }
}

// ============================================================================
// Product Components
// ============================================================================

#[component]
fn ProductGrid() -> impl IntoView {
    let store = use_store();
    let is_empty = move || store.with(|s| s.results().is_empty());

    view! {
        <Show
            when=move || !is_empty()
            fallback=|| view! {
                <section class="product-grid-empty">
                    <p>{NO_RESULTS_MESSAGE}</p>
                </section>
            }
        >
            <section class="product-grid">
                <For
                    each=move || store.with(|s| s.cards())
                    key=|card| card.id.clone()
                    children=|card| view! { <ProductCard card=card/> }
                />
            </section>
        </Show>
    }
}

#[component]
fn ProductCard(card: CardView) -> impl IntoView {
    let store = use_store();
    let id = card.id.clone();
    let extra = card.extra_colors_label();

    view! {
        <article class="product-card">
            <div class="product-card-media">
                <img src=card.image alt=card.name.clone() loading="lazy"/>
                {card.discount_badge.map(|badge| view! { <span class="discount-badge">{badge}</span> })}
            </div>
            <div class="product-card-body">
                <h3 class="product-name">{card.name}</h3>
                <p class="product-description">{card.description}</p>
                <Stars filled=card.stars/>
                <div class="product-price">
                    <span class="price-current">{card.price}</span>
                    {card.original_price.map(|p| view! { <span class="price-original">{p}</span> })}
                </div>
                <div class="product-swatches">
                    {card.swatches.into_iter().map(|s| view! { <SwatchDot swatch=s large=false/> }).collect_view()}
                    {extra.map(|label| view! { <span class="swatch-more">{label}</span> })}
                </div>
                <button
                    class="view-details"
                    on:click=move |_| store.dispatch(ViewMsg::Select(id.clone()))
                >
                    "View Details"
                </button>
            </div>
        </article>
    }
}

#[component]
fn Stars(filled: u8) -> impl IntoView {
    let filled = filled.min(MAX_STARS);
    view! {
        <div class="stars">
            {(0..MAX_STARS)
                .map(|i| {
                    if i < filled {
                        view! { <span class="star full">"★"</span> }.into_any()
                    } else {
                        view! { <span class="star empty">"☆"</span> }.into_any()
                    }
                })
                .collect_view()}
            <span class="star-count">"(" {filled} ")"</span>
        </div>
    }
}

#[component]
fn SwatchDot(swatch: Swatch, large: bool) -> impl IntoView {
    let class = if large { "swatch swatch-large" } else { "swatch" };
    view! {
        <span
            class=class
            style=format!("background-color: {}", swatch.css)
            title=swatch.label
        ></span>
    }
}

// ============================================================================
// Detail Overlay
// ============================================================================

#[component]
fn ProductDetailModal() -> impl IntoView {
    let store = use_store();
    move || {
        store
            .with(|s| s.detail())
            .map(|detail| view! { <DetailPanel detail=detail/> })
    }
}

#[component]
fn DetailPanel(detail: DetailView) -> impl IntoView {
    let store = use_store();
    let last_purchase = store.last_purchase;
    let id = detail.id.clone();

    let navigation = detail.show_navigation.then(|| {
        view! {
            <button
                class="gallery-prev"
                aria-label="Previous image"
                disabled=!detail.has_prev
                on:click=move |_| store.dispatch(ViewMsg::PrevImage)
            >
                "‹"
            </button>
            <button
                class="gallery-next"
                aria-label="Next image"
                disabled=!detail.has_next
                on:click=move |_| store.dispatch(ViewMsg::NextImage)
            >
                "›"
            </button>
        }
    });

    let thumbnails = (!detail.thumbnails.is_empty()).then(|| {
        view! {
            <div class="gallery-thumbnails">
                {detail
                    .thumbnails
                    .into_iter()
                    .map(|t| {
                        let index = t.index;
                        view! {
                            <span
                                class=if t.active { "thumbnail active" } else { "thumbnail" }
                                on:click=move |_| store.dispatch(ViewMsg::ShowImage(index))
                            >
                                <img src=t.src alt=""/>
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
        }
    });

    let colors = (!detail.swatches.is_empty()).then(|| {
        view! {
            <div class="detail-colors">
                <span class="detail-label">"Available Colors:"</span>
                <div class="detail-swatches">
                    {detail
                        .swatches
                        .into_iter()
                        .map(|s| view! { <SwatchDot swatch=s large=true/> })
                        .collect_view()}
                </div>
            </div>
        }
    });

    let discount = detail.discount.map(|d| {
        view! {
            <span class="price-original">{d.original_price}</span>
            <span class="discount-pill">{d.badge}</span>
        }
    });

    let purchase_note = move || {
        last_purchase
            .get()
            .filter(|intent| intent.product_id == id)
            .map(|intent| {
                view! {
                    <p class="purchase-note">
                        {intent.kind.label()} ": " {intent.quantity} " item(s)"
                    </p>
                }
            })
    };

    view! {
        <div class="detail-overlay">
            <div class="detail-panel" role="dialog" aria-modal="true">
                <button
                    class="detail-close"
                    aria-label="Close"
                    on:click=move |_| store.dispatch(ViewMsg::Close)
                >
                    "×"
                </button>
                <div class="detail-grid">
                    <div class="detail-gallery">
                        <div class="gallery-main">
                            <img src=detail.main_image alt=detail.name.clone()/>
                            {navigation}
                        </div>
                        {thumbnails}
                    </div>
                    <div class="detail-info">
                        <div class="detail-rating">
                            <Stars filled=detail.stars/>
                            <span class="detail-reviews">{detail.rating_text}</span>
                        </div>
                        <h2 class="detail-name">{detail.name}</h2>
                        <p class="detail-description">{detail.description}</p>
                        {colors}
                        <div class="detail-price">
                            <span class="price-current">{detail.price}</span>
                            {discount}
                        </div>
                        <div class="detail-actions">
                            <div class="qty-stepper">
                                <button
                                    class="qty-btn"
                                    aria-label="Decrease quantity"
                                    disabled=!detail.can_decrement
                                    on:click=move |_| store.dispatch(ViewMsg::DecrementQuantity)
                                >
                                    "-"
                                </button>
                                <input
                                    type="number"
                                    min="1"
                                    aria-label="Quantity"
                                    prop:value=detail.quantity.to_string()
                                    on:change=move |ev| {
                                        store.dispatch(ViewMsg::QuantityInput(event_target_value(&ev)))
                                    }
                                />
                                <button
                                    class="qty-btn"
                                    aria-label="Increase quantity"
                                    on:click=move |_| store.dispatch(ViewMsg::IncrementQuantity)
                                >
                                    "+"
                                </button>
                            </div>
                            <div class="detail-buttons">
                                <button class="btn-cart" on:click=move |_| store.dispatch(ViewMsg::AddToCart)>
                                    "ADD TO CART"
                                </button>
                                <button class="btn-buy" on:click=move |_| store.dispatch(ViewMsg::BuyNow)>
                                    "BUY NOW"
                                </button>
                            </div>
                            {purchase_note}
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
