use std::rc::Rc;

use crate::{
    data::{category::Category, product::EnrichedProduct, store::ReferenceData, user::User},
    filter,
    selection::CategorySelection,
};

/// Holds what the user has selected in the catalogue and derives the products
/// to show from it.
///
/// Every state transition takes effect immediately: the next call to
/// [`CatalogueView::visible`] always sees it.
#[derive(Debug, Clone)]
pub struct CatalogueView {
    reference: Rc<ReferenceData>,
    /// Every product joined with its category and owner, in load order.
    /// Computed once on construction.
    all_products: Rc<[EnrichedProduct]>,
    /// The products currently treated as "all products". This is either
    /// `all_products` or the subset owned by the user that was selected last.
    baseline: Vec<EnrichedProduct>,
    selected_user: Option<User>,
    selected_categories: CategorySelection,
    search: String,
}

/// The result of running the filters over the current selection.
#[derive(Debug, PartialEq, Eq)]
pub struct Visible<'a> {
    pub products: Vec<&'a EnrichedProduct>,
    /// Whether nothing matched, in which case a "no matching products"
    /// message is shown instead of the product table.
    pub is_empty_result: bool,
    /// Whether the raw search text is empty. Whitespace-only search text is
    /// not empty, even though it matches every product.
    pub is_search_empty: bool,
}

impl CatalogueView {
    pub fn new(reference: Rc<ReferenceData>) -> Self {
        let all_products: Rc<[EnrichedProduct]> = reference.enrich().into();
        CatalogueView {
            baseline: all_products.to_vec(),
            all_products,
            reference,
            selected_user: None,
            selected_categories: CategorySelection::new(),
            search: String::new(),
        }
    }

    pub fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    pub fn all_products(&self) -> &[EnrichedProduct] {
        &self.all_products
    }

    pub fn baseline(&self) -> &[EnrichedProduct] {
        &self.baseline
    }

    pub fn selected_user(&self) -> Option<&User> {
        self.selected_user.as_ref()
    }

    pub fn selected_categories(&self) -> &CategorySelection {
        &self.selected_categories
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// Selects `user` and narrows the baseline to the products they own.
    /// The narrowing always starts from the full product list, so selecting a
    /// different user replaces the previous narrowing.
    pub fn select_user(&mut self, user: &User) {
        tracing::debug!(user = user.id.0, "selecting user");
        self.baseline = filter::by_user(self.all_products.iter(), Some(user))
            .into_iter()
            .cloned()
            .collect();
        self.selected_user = Some(user.clone());
    }

    pub fn clear_user_selection(&mut self) {
        tracing::debug!("clearing user selection");
        self.selected_user = None;
        self.restore_baseline();
    }

    /// Adds the category's title to the selected categories, or removes it if
    /// it is already selected.
    pub fn toggle_category(&mut self, category: &Category) {
        tracing::debug!(title = %category.title, "toggling category");
        self.selected_categories.toggle(category);
    }

    /// Deselects all categories and restores the baseline to every product.
    ///
    /// Note that this also undoes the narrowing from a selected user, while
    /// the user itself stays selected: every product becomes visible again
    /// even though [`CatalogueView::selected_user`] still returns the user.
    pub fn clear_category_selection(&mut self) {
        tracing::debug!("clearing category selection");
        self.selected_categories.clear();
        self.restore_baseline();
    }

    /// Replaces the search text. The text is kept as typed; trimming and case
    /// folding only happen when filtering.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    pub fn clear_search(&mut self) {
        self.search.clear();
    }

    /// Clears the category selection, the user selection and the search text,
    /// in that order.
    pub fn reset_all(&mut self) {
        self.clear_category_selection();
        self.clear_user_selection();
        self.clear_search();
    }

    /// Runs the category and search filters over the baseline. The user
    /// filter is not run again here; it was applied to the baseline when the
    /// user was selected.
    pub fn visible(&self) -> Visible<'_> {
        let products =
            filter::visible(&self.baseline, None, &self.selected_categories, &self.search);
        Visible {
            is_empty_result: products.is_empty(),
            is_search_empty: self.search.is_empty(),
            products,
        }
    }

    fn restore_baseline(&mut self) {
        self.baseline = self.all_products.to_vec();
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        data::{product::Product, user::Sex},
        fixtures,
    };

    fn view() -> CatalogueView {
        CatalogueView::new(Rc::new(fixtures::bundled().unwrap()))
    }

    fn names(visible: &Visible) -> Vec<String> {
        visible.products.iter().map(|product| product.name().to_owned()).collect()
    }

    fn user(view: &CatalogueView, name: &str) -> User {
        view.reference().users().iter().find(|user| user.name == name).unwrap().clone()
    }

    fn category(view: &CatalogueView, title: &str) -> Category {
        let categories = view.reference().categories();
        categories.iter().find(|category| category.title == title).unwrap().clone()
    }

    #[test]
    fn initial_view_shows_everything() {
        let view = view();
        let visible = view.visible();
        assert_eq!(visible.products.len(), 9);
        assert!(!visible.is_empty_result);
        assert!(visible.is_search_empty);
        assert_eq!(view.baseline(), view.all_products());
    }

    #[test]
    fn select_user_narrows_baseline() {
        let mut view = view();
        let anna = user(&view, "Anna");
        view.select_user(&anna);

        assert_eq!(view.selected_user(), Some(&anna));
        assert_eq!(names(&view.visible()), vec!["Bread", "Eggs", "Sugar", "Banana", "Apples"]);
        assert!(view.baseline().iter().all(|product| product.is_owned_by(&anna)));

        let roma = user(&view, "Roma");
        view.select_user(&roma);
        assert_eq!(names(&view.visible()), vec!["Milk", "Beer"]);
    }

    #[test]
    fn user_without_products_gives_empty_result() {
        let mut view = view();
        let john = user(&view, "John");
        view.select_user(&john);

        let visible = view.visible();
        assert!(visible.products.is_empty());
        assert!(visible.is_empty_result);
        assert!(view.baseline().is_empty());
    }

    #[test]
    fn toggle_is_visible_immediately() {
        let mut view = view();
        let drinks = category(&view, "Drinks");

        view.toggle_category(&drinks);
        assert_eq!(names(&view.visible()), vec!["Milk", "Beer"]);

        let fruits = category(&view, "Fruits");
        view.toggle_category(&fruits);
        assert_eq!(names(&view.visible()), vec!["Milk", "Banana", "Beer", "Apples"]);

        view.toggle_category(&drinks);
        assert_eq!(names(&view.visible()), vec!["Banana", "Apples"]);
        assert_eq!(view.selected_categories().titles(), ["Fruits"]);
    }

    #[test]
    fn clear_categories_keeps_user_but_restores_baseline() {
        let mut view = view();
        let anna = user(&view, "Anna");
        view.select_user(&anna);
        view.toggle_category(&category(&view, "Grocery"));
        assert_eq!(names(&view.visible()), vec!["Bread", "Eggs", "Sugar"]);

        view.clear_category_selection();
        assert!(view.selected_categories().is_empty());
        assert_eq!(view.selected_user(), Some(&anna));
        assert_eq!(view.baseline(), view.all_products());
        // anna's tab stays active while all products are shown
        let visible = view.visible();
        assert_eq!(visible.products.len(), 9);
        assert_eq!(names(&visible), names(&CatalogueView::new(view.reference.clone()).visible()));
    }

    #[test]
    fn clear_categories_widens_user_narrowing() {
        let mut view = view();
        let anna = user(&view, "Anna");
        view.select_user(&anna);
        assert_eq!(view.visible().products.len(), 5);

        view.clear_category_selection();
        assert_eq!(view.selected_user(), Some(&anna));
        assert_eq!(view.visible().products.len(), 9);

        // selecting again narrows from the full list
        view.select_user(&anna);
        assert_eq!(names(&view.visible()), vec!["Bread", "Eggs", "Sugar", "Banana", "Apples"]);
    }

    #[test]
    fn clear_user_restores_everything() {
        let mut view = view();
        view.select_user(&user(&view, "Max"));
        assert_eq!(names(&view.visible()), vec!["Jacket", "Socks"]);

        view.clear_user_selection();
        assert_eq!(view.selected_user(), None);
        assert_eq!(view.visible().products.len(), 9);
    }

    #[test]
    fn search_is_trimmed_and_case_folded() {
        let mut view = view();
        view.set_search("  bAn ");
        let visible = view.visible();
        assert_eq!(names(&visible), vec!["Banana"]);
        assert!(!visible.is_search_empty);

        view.set_search("   ");
        let visible = view.visible();
        assert_eq!(visible.products.len(), 9);
        assert!(!visible.is_search_empty);

        view.set_search("caviar");
        assert!(view.visible().is_empty_result);

        view.clear_search();
        assert_eq!(view.search(), "");
        assert!(view.visible().is_search_empty);
    }

    #[test]
    fn reset_all_shows_full_baseline() {
        let mut view = view();
        view.select_user(&user(&view, "Anna"));
        view.toggle_category(&category(&view, "Drinks"));
        view.set_search("xyz");
        assert!(view.visible().is_empty_result);

        view.reset_all();
        let visible = view.visible();
        let all: Vec<_> = view.all_products().iter().collect();
        assert_eq!(visible.products, all);
        assert!(!visible.is_empty_result);
        assert!(visible.is_search_empty);
        assert_eq!(view.selected_user(), None);
        assert!(view.selected_categories().is_empty());
    }

    #[test]
    fn broken_references_are_shown_unfiltered() {
        let reference = ReferenceData::new(
            vec![User::new(1, "Roma", Sex::Male)],
            vec![Category::new(1, "Drinks", "🍺", 1)],
            vec![Product::new(1, "Milk", 1), Product::new(2, "Ghost", 404)],
        );
        let mut view = CatalogueView::new(Rc::new(reference));
        assert_eq!(names(&view.visible()), vec!["Milk", "Ghost"]);

        view.toggle_category(&Category::new(1, "Drinks", "🍺", 1));
        assert_eq!(names(&view.visible()), vec!["Milk"]);
    }
}
