use std::fmt;

use serde::{Deserialize, Serialize};

use super::{
    category::{Category, CategoryId},
    user::User,
};

#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, PartialEq, Eq, Hash, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Not guaranteed to refer to an existing category.
    pub category_id: CategoryId,
}

impl Product {
    pub fn new(id: u64, name: impl Into<String>, category_id: u64) -> Self {
        Product { id: ProductId(id), name: name.into(), category_id: CategoryId(category_id) }
    }
}

/// A product together with the records it refers to, resolved once when the
/// reference data is joined.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Serialize, Deserialize)]
pub struct EnrichedProduct {
    #[serde(flatten)]
    pub product: Product,
    /// None if the product's category ID does not match any category.
    pub category: Option<Category>,
    /// The owner of `category`. None if the category is None or its owner
    /// does not match any user; never Some while `category` is None.
    pub user: Option<User>,
}

impl EnrichedProduct {
    pub fn id(&self) -> ProductId {
        self.product.id
    }

    pub fn name(&self) -> &str {
        &self.product.name
    }

    pub fn category_title(&self) -> Option<&str> {
        self.category.as_ref().map(|category| category.title.as_str())
    }

    pub fn is_owned_by(&self, user: &User) -> bool {
        self.user.as_ref().is_some_and(|owner| owner.id == user.id)
    }
}
