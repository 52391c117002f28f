//! One-shot "added to wishlist" notice.

use crate::product::Product;

/// Holds the product from the most recent add while the notice is open.
/// A newer add replaces it; there is no queue.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WishlistNotice {
    product: Option<Product>,
}

impl WishlistNotice {
    pub fn open(&mut self, product: Product) {
        self.product = Some(product);
    }

    pub fn dismiss(&mut self) {
        self.product = None;
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.product.is_some()
    }

    #[must_use]
    pub fn product(&self) -> Option<&Product> {
        self.product.as_ref()
    }

    /// Message line shown in the notice body.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        self.product.as_ref().map(|p| format!("{} added to wishlist!", p.name))
    }
}
