use serde::{Deserialize, Serialize};

use crate::data::category::Category;

/// The titles of the categories currently selected as filters, in the order
/// they were selected.
#[derive(Debug, Default, PartialEq, Eq, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategorySelection {
    titles: Vec<String>,
}

impl CategorySelection {
    pub fn new() -> Self {
        CategorySelection::default()
    }

    /// Selects the category if it is not selected, otherwise deselects it.
    /// Toggling the same category twice leaves the selection exactly as it
    /// was.
    pub fn toggle(&mut self, category: &Category) {
        self.toggle_title(&category.title);
    }

    pub fn toggle_title(&mut self, title: &str) {
        if let Some(index) = self.titles.iter().position(|selected| selected == title) {
            // `remove` rather than `swap_remove` so the remaining titles keep
            // their relative order
            self.titles.remove(index);
        } else {
            self.titles.push(title.to_owned());
        }
    }

    pub fn contains(&self, title: &str) -> bool {
        self.titles.iter().any(|selected| selected == title)
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn clear(&mut self) {
        self.titles.clear();
    }

    pub fn titles(&self) -> &[String] {
        &self.titles
    }
}

impl<S: Into<String>> FromIterator<S> for CategorySelection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut selection = CategorySelection::new();
        for title in iter {
            let title = title.into();
            if !selection.contains(&title) {
                selection.titles.push(title);
            }
        }
        selection
    }
}
