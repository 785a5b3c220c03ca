//! The stages that narrow the enriched products down to the ones shown.
//!
//! Every stage keeps the relative order of its input. [`visible`] runs the
//! stages in the fixed order user, categories, search.

use crate::{
    data::{product::EnrichedProduct, user::User},
    selection::CategorySelection,
};

/// Keeps the products owned by `user`, or everything if no user is selected.
/// Products without a resolved owner never match a selected user.
pub fn by_user<'a>(
    products: impl IntoIterator<Item = &'a EnrichedProduct>,
    user: Option<&User>,
) -> Vec<&'a EnrichedProduct> {
    match user {
        Some(user) => products.into_iter().filter(|product| product.is_owned_by(user)).collect(),
        None => products.into_iter().collect(),
    }
}

/// Keeps the products whose category title is selected. An empty selection
/// keeps everything; a non-empty one drops products without a category.
pub fn by_categories<'a>(
    products: impl IntoIterator<Item = &'a EnrichedProduct>,
    selection: &CategorySelection,
) -> Vec<&'a EnrichedProduct> {
    if selection.is_empty() {
        return products.into_iter().collect();
    }

    products
        .into_iter()
        .filter(|product| product.category_title().is_some_and(|title| selection.contains(title)))
        .collect()
}

/// Keeps the products whose name contains the search text, ignoring case and
/// any whitespace around the search text.
pub fn by_search<'a>(
    products: impl IntoIterator<Item = &'a EnrichedProduct>,
    search: &str,
) -> Vec<&'a EnrichedProduct> {
    let needle = normalize(search);
    if needle.is_empty() {
        return products.into_iter().collect();
    }

    products.into_iter().filter(|product| normalize(product.name()).contains(&needle)).collect()
}

fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Runs all three stages over `baseline`.
pub fn visible<'a>(
    baseline: &'a [EnrichedProduct],
    user: Option<&User>,
    selection: &CategorySelection,
    search: &str,
) -> Vec<&'a EnrichedProduct> {
    let owned = by_user(baseline, user);
    let categorized = by_categories(owned, selection);
    by_search(categorized, search)
}
