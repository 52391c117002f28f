//! Sort, filter, and pagination state plus the pure page derivation.
//!
//! DESIGN
//! ======
//! `ViewState` transitions are plain value methods so the pagination state
//! machine can be tested without a store or catalog. `derive_view` borrows
//! from the catalog; nothing here allocates product copies.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::product::Product;
use crate::wishlist::Wishlist;

/// Products shown per page.
pub const PAGE_SIZE: usize = 16;

/// Tri-state sort selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortMode {
    /// Catalog order.
    #[default]
    #[serde(rename = "default")]
    Default,
    /// Name A→Z.
    #[serde(rename = "az")]
    NameAsc,
    /// Name Z→A.
    #[serde(rename = "za")]
    NameDesc,
}

impl SortMode {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::NameAsc => "az",
            Self::NameDesc => "za",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::NameAsc => "Name A→Z",
            Self::NameDesc => "Name Z→A",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "default" => Ok(Self::Default),
            "az" => Ok(Self::NameAsc),
            "za" => Ok(Self::NameDesc),
            other => Err(format!("unknown sort mode '{other}' (expected 'default', 'az' or 'za')")),
        }
    }
}

/// User-controlled view settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewState {
    pub sort: SortMode,
    /// 1-based page number.
    pub page: usize,
    pub wishlist_only: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self { sort: SortMode::Default, page: 1, wishlist_only: false }
    }
}

impl ViewState {
    /// Change sort order and return to the first page.
    #[must_use]
    pub fn with_sort(self, sort: SortMode) -> Self {
        Self { sort, page: 1, ..self }
    }

    /// Toggle the wishlist filter and return to the first page.
    #[must_use]
    pub fn with_wishlist_only(self, wishlist_only: bool) -> Self {
        Self { wishlist_only, page: 1, ..self }
    }

    /// Jump to `page`, floored at 1. Pages past the end are kept as-is.
    #[must_use]
    pub fn with_page(self, page: usize) -> Self {
        Self { page: page.max(1), ..self }
    }

    #[must_use]
    pub fn previous_page(self) -> Self {
        Self { page: self.page.saturating_sub(1).max(1), ..self }
    }

    #[must_use]
    pub fn next_page(self, total_pages: usize) -> Self {
        if self.page >= total_pages {
            return self;
        }
        Self { page: self.page + 1, ..self }
    }
}

/// "Showing first–last of total results" numbers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResultSummary {
    pub first: usize,
    pub last: usize,
    pub total: usize,
}

impl fmt::Display for ResultSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Showing {}–{} of {} results", self.first, self.last, self.total)
    }
}

/// The rendered page: filtered, sorted, and sliced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DerivedView<'a> {
    pub items: Vec<&'a Product>,
    pub summary: ResultSummary,
    pub page: usize,
    pub total_pages: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

/// `max(1, ceil(len / page_size))`.
#[must_use]
pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size).max(1)
}

/// Derive the visible page using [`PAGE_SIZE`].
#[must_use]
pub fn derive_view<'a>(catalog: &'a [Product], view: &ViewState, wishlist: &Wishlist) -> DerivedView<'a> {
    derive_view_with_page_size(catalog, view, wishlist, PAGE_SIZE)
}

/// Derive the visible page for an arbitrary page size.
///
/// # Panics
///
/// Panics if `page_size` is zero.
#[must_use]
pub fn derive_view_with_page_size<'a>(
    catalog: &'a [Product],
    view: &ViewState,
    wishlist: &Wishlist,
    page_size: usize,
) -> DerivedView<'a> {
    assert!(page_size > 0, "page size must be positive");

    let mut products: Vec<&Product> = if view.wishlist_only {
        catalog.iter().filter(|p| wishlist.contains(&p.id)).collect()
    } else {
        catalog.iter().collect()
    };

    match view.sort {
        SortMode::Default => {}
        SortMode::NameAsc => products.sort_by(|a, b| locale_cmp(&a.name, &b.name)),
        SortMode::NameDesc => products.sort_by(|a, b| locale_cmp(&b.name, &a.name)),
    }

    let total = products.len();
    let total_pages = total_pages(total, page_size);
    let page = view.page.max(1);
    let start = (page - 1).saturating_mul(page_size);
    let end = start.saturating_add(page_size).min(total);
    let items = if start < total { products[start..end].to_vec() } else { Vec::new() };

    DerivedView {
        items,
        summary: ResultSummary { first: if total == 0 { 0 } else { start + 1 }, last: end, total },
        page,
        total_pages,
        has_previous: page > 1,
        has_next: page < total_pages,
    }
}

/// Name ordering in the manner of a default-locale collator.
///
/// Compares letters with accents and case folded away, then unaccented
/// before accented, then lowercase before uppercase, then raw text.
#[must_use]
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| a.nfd().flat_map(char::to_lowercase).cmp(b.nfd().flat_map(char::to_lowercase)))
        .then_with(|| case_order(a, b))
        .then_with(|| a.cmp(b))
}

fn base_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().filter(|c| !is_combining_mark(*c)).flat_map(char::to_lowercase)
}

fn case_order(a: &str, b: &str) -> Ordering {
    for (ca, cb) in a.nfd().zip(b.nfd()) {
        if ca == cb {
            continue;
        }
        match (ca.is_lowercase(), cb.is_lowercase()) {
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            _ => break,
        }
    }
    Ordering::Equal
}
