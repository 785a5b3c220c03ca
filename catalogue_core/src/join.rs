//! Resolution of the references between products, categories and users.

use crate::data::{
    category::Category,
    product::{EnrichedProduct, Product},
    user::User,
};

/// Pairs every product with its category and the category's owner.
///
/// The output has one entry per product, in the same order as `products`.
/// References that cannot be resolved become `None` rather than an error: a
/// product whose category is missing has neither a category nor a user, and
/// the owner is only looked up once a category was found. When several
/// records share an ID, the first one wins.
pub fn join(products: &[Product], categories: &[Category], users: &[User]) -> Vec<EnrichedProduct> {
    products
        .iter()
        .map(|product| {
            let category =
                categories.iter().find(|category| category.id == product.category_id).cloned();
            let user = category
                .as_ref()
                .and_then(|category| users.iter().find(|user| user.id == category.owner_id))
                .cloned();

            EnrichedProduct { product: product.clone(), category, user }
        })
        .collect()
}
