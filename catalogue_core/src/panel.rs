//! What a renderer needs to draw the catalogue page: the filter controls and
//! the rows of the product table.

use serde::Serialize;

use crate::{
    data::{
        category::Category,
        product::{EnrichedProduct, ProductId},
        user::{Sex, User},
    },
    view::CatalogueView,
};

/// The text colour used for a user's name.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Link,
    Danger,
}

impl From<Sex> for Tone {
    fn from(sex: Sex) -> Self {
        match sex {
            Sex::Male => Tone::Link,
            Sex::Female => Tone::Danger,
        }
    }
}

/// One row of the product table. Fields derived from a reference that could
/// not be resolved are None and should be left blank.
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct ProductRow {
    pub id: ProductId,
    pub name: String,
    /// e.g. "🍞 - Grocery"
    pub category_label: Option<String>,
    pub user_name: Option<String>,
    pub user_tone: Option<Tone>,
}

impl From<&EnrichedProduct> for ProductRow {
    fn from(product: &EnrichedProduct) -> Self {
        ProductRow {
            id: product.id(),
            name: product.name().to_owned(),
            category_label: product.category.as_ref().map(Category::label),
            user_name: product.user.as_ref().map(|user| user.name.clone()),
            user_tone: product.user.as_ref().map(|user| user.sex.into()),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct UserTab {
    pub user: User,
    pub active: bool,
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct CategoryChip {
    pub category: Category,
    pub selected: bool,
}

/// The state of every filter control, plus the rows to show below them.
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct FilterPanel {
    /// Whether the "All" user tab is highlighted, i.e. no user is selected.
    pub all_users_active: bool,
    /// One tab per user, in reference data order.
    pub user_tabs: Vec<UserTab>,
    pub search: String,
    /// Whether the button that clears the search text is shown.
    pub show_clear_search: bool,
    /// Whether the "All" category button is drawn outlined, i.e. some
    /// category is selected.
    pub all_categories_outlined: bool,
    /// One chip per category, in reference data order.
    pub category_chips: Vec<CategoryChip>,
    /// When true, show a "no products matching selected criteria" message
    /// instead of `rows`.
    pub is_empty_result: bool,
    pub rows: Vec<ProductRow>,
}

impl FilterPanel {
    pub fn from_view(view: &CatalogueView) -> Self {
        let reference = view.reference();
        let selected_user = view.selected_user();
        let selected_categories = view.selected_categories();
        let visible = view.visible();

        FilterPanel {
            all_users_active: selected_user.is_none(),
            user_tabs: reference
                .users()
                .iter()
                .map(|user| UserTab {
                    user: user.clone(),
                    active: selected_user.is_some_and(|selected| selected.id == user.id),
                })
                .collect(),
            search: view.search().to_owned(),
            show_clear_search: !visible.is_search_empty,
            all_categories_outlined: !selected_categories.is_empty(),
            category_chips: reference
                .categories()
                .iter()
                .map(|category| CategoryChip {
                    category: category.clone(),
                    selected: selected_categories.contains(&category.title),
                })
                .collect(),
            is_empty_result: visible.is_empty_result,
            rows: visible.products.into_iter().map(ProductRow::from).collect(),
        }
    }
}
