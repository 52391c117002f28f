//! Plain-text rendering of the product grid for the terminal.

use std::fmt::Write as _;

use catalog::{KeyValueStore, SortMode, Storefront};

const LIKED: &str = "♥";
const NOT_LIKED: &str = "♡";

/// Render the current page: header, products, and pagination controls.
pub fn render_page<S: KeyValueStore>(storefront: &Storefront<S>) -> String {
    let mut out = String::new();
    let state = storefront.view_state();
    let view = storefront.view();

    if state.wishlist_only {
        out.push_str("Wishlist\n");
    }
    let _ = write!(out, "{}", view.summary);
    if state.sort != SortMode::Default {
        let _ = write!(out, "  (sorted {})", state.sort.label());
    }
    out.push('\n');

    if storefront.is_loading() {
        out.push_str("Loading…\n");
        return out;
    }

    for product in &view.items {
        let marker = if storefront.is_liked(&product.id) { LIKED } else { NOT_LIKED };
        let _ = write!(out, "{marker} [{}] {}", product.id, product.name);
        if let Some(price) = &product.price_text {
            let _ = write!(out, "  {price}");
        }
        out.push('\n');
    }

    let prev = if view.has_previous { "←" } else { " " };
    let next = if view.has_next { "→" } else { " " };
    let _ = writeln!(out, "{prev} page {} of {} {next}", view.page, view.total_pages);
    out
}

/// Render the result of toggling `id`.
pub fn render_toggle<S: KeyValueStore>(storefront: &Storefront<S>, id: &str) -> String {
    if let Some(message) = storefront.notice().message() {
        return format!("{message}\n");
    }
    let name = storefront.catalog().find(id).map_or(id, |p| p.name.as_str());
    if storefront.is_liked(id) {
        format!("{name} added to wishlist (not in catalog)\n")
    } else {
        format!("{name} removed from wishlist\n")
    }
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
