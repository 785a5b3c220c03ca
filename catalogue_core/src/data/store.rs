use std::collections::HashSet;

use super::{
    category::{Category, CategoryId},
    product::{EnrichedProduct, Product},
    user::{User, UserId},
};
use crate::join;

/// The reference collections the catalogue is built from. Once constructed,
/// the collections are never modified.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct ReferenceData {
    users: Vec<User>,
    categories: Vec<Category>,
    products: Vec<Product>,
}

impl ReferenceData {
    pub fn new(users: Vec<User>, categories: Vec<Category>, products: Vec<Product>) -> Self {
        warn_duplicate_titles(&categories);
        tracing::debug!(
            users = users.len(),
            categories = categories.len(),
            products = products.len(),
            "loaded reference data"
        );

        ReferenceData { users, categories, products }
    }

    /// Users in the order they were loaded.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn find_user(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    pub fn find_category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|category| category.id == id)
    }

    /// Joins every product with its category and owner. See [`join::join`].
    pub fn enrich(&self) -> Vec<EnrichedProduct> {
        join::join(&self.products, &self.categories, &self.users)
    }
}

fn warn_duplicate_titles(categories: &[Category]) {
    let mut seen_titles = HashSet::new();
    for category in categories {
        if !seen_titles.insert(category.title.as_str()) {
            // selection by title cannot tell these apart
            tracing::warn!(title = %category.title, "duplicate category title");
        }
    }
}
