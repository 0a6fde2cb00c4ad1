//! Page stylesheet.

pub const STOREFRONT_STYLES: &str = r##"
:root {
    --primary: #2563eb;
    --primary-hover: #1d4ed8;
    --accent: #f97316;
    --accent-hover: #ea580c;
    --bg: #f9fafb;
    --card-bg: #ffffff;
    --text: #1f2937;
    --text-muted: #6b7280;
    --border: #d1d5db;
    --star: #facc15;
    --badge: #ef4444;
}

* { box-sizing: border-box; margin: 0; padding: 0; }

body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    background: var(--bg);
    color: var(--text);
    line-height: 1.5;
}

.container, main {
    max-width: 1280px;
    margin: 0 auto;
    padding: 1.5rem 1rem;
}

.site-header {
    background: var(--card-bg);
    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
}

.site-title { font-size: 1.875rem; font-weight: 700; }
.site-tagline { color: var(--text-muted); margin-top: 0.25rem; }

.toolbar {
    background: var(--card-bg);
    border-radius: 8px;
    box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1);
    padding: 1rem;
    margin-bottom: 1.5rem;
}

.toolbar-form {
    display: grid;
    grid-template-columns: repeat(4, 1fr);
    gap: 1rem;
}

.toolbar-form input,
.toolbar-form select {
    width: 100%;
    padding: 0.5rem 1rem;
    border: 1px solid var(--border);
    border-radius: 8px;
    font-size: 1rem;
}

.results-summary { color: var(--text-muted); margin-bottom: 1rem; }

.product-grid {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
    gap: 1.5rem;
}

.product-grid-empty {
    text-align: center;
    padding: 3rem 0;
    color: var(--text-muted);
    font-size: 1.125rem;
}

.product-card {
    background: var(--card-bg);
    border-radius: 8px;
    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.08);
    transition: box-shadow 0.3s;
    display: flex;
    flex-direction: column;
}

.product-card:hover { box-shadow: 0 10px 15px rgba(0, 0, 0, 0.12); }

.product-card-media { position: relative; }

.product-card-media img {
    width: 100%;
    height: 12rem;
    object-fit: cover;
    border-radius: 8px 8px 0 0;
}

.discount-badge {
    position: absolute;
    top: 0.5rem;
    right: 0.5rem;
    background: var(--badge);
    color: white;
    padding: 0.25rem 0.5rem;
    font-size: 0.75rem;
    border-radius: 4px;
}

.product-card-body { padding: 1rem; display: flex; flex-direction: column; gap: 0.5rem; }
.product-name { font-weight: 600; }
.product-description { font-size: 0.875rem; color: var(--text-muted); }

.stars { display: flex; align-items: center; color: var(--star); }
.star.empty { color: var(--border); }
.star-count { margin-left: 0.25rem; font-size: 0.875rem; color: var(--text-muted); }

.price-current { font-size: 1.125rem; font-weight: 700; color: var(--primary); }
.price-original { color: #9ca3af; text-decoration: line-through; margin-left: 0.5rem; }

.product-swatches, .detail-swatches { display: flex; flex-wrap: wrap; gap: 0.25rem; align-items: center; }

.swatch {
    display: inline-block;
    width: 1rem;
    height: 1rem;
    border-radius: 9999px;
    border: 1px solid var(--border);
}

.swatch-large { width: 2rem; height: 2rem; border-width: 2px; }
.swatch-more { font-size: 0.75rem; color: var(--text-muted); }

.view-details {
    display: block;
    text-align: center;
    background: var(--primary);
    color: white;
    padding: 0.5rem;
    border-radius: 4px;
    text-decoration: none;
}

.view-details:hover { background: var(--primary-hover); }

.detail-overlay {
    position: fixed;
    inset: 0;
    background: rgba(0, 0, 0, 0.5);
    display: flex;
    align-items: center;
    justify-content: center;
    padding: 1rem;
    z-index: 50;
}

.detail-panel {
    background: var(--card-bg);
    border-radius: 8px;
    max-width: 56rem;
    width: 100%;
    max-height: 90vh;
    overflow-y: auto;
    padding: 1.5rem;
}

.detail-close {
    float: right;
    font-size: 1.5rem;
    color: var(--text-muted);
    text-decoration: none;
}

.detail-grid {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 1.5rem;
    margin-top: 1rem;
}

.gallery-main { position: relative; margin-bottom: 1rem; }

.gallery-main img {
    width: 100%;
    height: 24rem;
    object-fit: cover;
    border-radius: 8px;
}

.gallery-prev, .gallery-next {
    position: absolute;
    top: 50%;
    transform: translateY(-50%);
    background: white;
    border-radius: 9999px;
    padding: 0.25rem 0.75rem;
    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.15);
    text-decoration: none;
    color: var(--text);
}

.gallery-prev { left: 0.5rem; }
.gallery-next { right: 0.5rem; }
.gallery-prev.disabled, .gallery-next.disabled { opacity: 0.4; }

.gallery-thumbnails { display: flex; gap: 0.5rem; }

.thumbnail img {
    width: 4rem;
    height: 4rem;
    object-fit: cover;
    border-radius: 4px;
    border: 2px solid #e5e7eb;
}

.thumbnail.active img { border-color: var(--primary); }

.detail-rating { display: flex; align-items: center; gap: 0.5rem; margin-bottom: 0.5rem; }
.detail-reviews { font-size: 0.875rem; color: var(--text-muted); }
.detail-name { font-size: 1.5rem; font-weight: 600; margin-bottom: 1rem; }
.detail-description { color: var(--text-muted); margin-bottom: 1rem; }
.detail-label { display: block; font-size: 0.875rem; color: var(--text-muted); margin-bottom: 0.5rem; }
.detail-colors { margin-bottom: 1rem; }

.detail-price { display: flex; align-items: center; gap: 1rem; margin-bottom: 1.5rem; }
.detail-price .price-current { font-size: 1.875rem; font-weight: 600; }

.discount-pill {
    background: var(--star);
    color: black;
    font-size: 0.875rem;
    padding: 0.25rem 0.5rem;
    border-radius: 4px;
}

.detail-actions { display: flex; flex-direction: column; gap: 1rem; }

.qty-stepper {
    display: inline-flex;
    align-items: center;
    border: 1px solid var(--border);
    border-radius: 4px;
    width: max-content;
}

.qty-btn { padding: 0.5rem 0.75rem; text-decoration: none; color: var(--text); }
.qty-btn.disabled { color: var(--border); }
.qty-stepper input { width: 4rem; text-align: center; border: 0; padding: 0.5rem 0; }

.detail-buttons { display: flex; gap: 1rem; }

.btn-cart, .btn-buy {
    color: white;
    border: none;
    padding: 0.5rem 1.5rem;
    border-radius: 4px;
    cursor: pointer;
}

.btn-cart { background: var(--accent); }
.btn-cart:hover { background: var(--accent-hover); }
.btn-buy { background: #ea580c; }
.btn-buy:hover { background: #c2410c; }

@media (max-width: 768px) {
    .toolbar-form, .detail-grid { grid-template-columns: 1fr; }
}
"##;
