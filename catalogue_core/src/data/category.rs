use std::fmt;

use serde::{Deserialize, Serialize};

use super::user::UserId;

#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub u64);

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, PartialEq, Eq, Hash, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    /// The name shown on the category's filter button, e.g. "Grocery". Also
    /// the key under which the category is selected, so it is expected to be
    /// unique among all categories.
    pub title: String,
    /// A single glyph displayed before the title.
    pub icon: String,
    /// The user responsible for this category. Not guaranteed to refer to an
    /// existing user.
    pub owner_id: UserId,
}

impl Category {
    pub fn new(id: u64, title: impl Into<String>, icon: impl Into<String>, owner_id: u64) -> Self {
        Category {
            id: CategoryId(id),
            title: title.into(),
            icon: icon.into(),
            owner_id: UserId(owner_id),
        }
    }

    /// The label shown in a product row, e.g. "🍞 - Grocery".
    pub fn label(&self) -> String {
        format!("{} - {}", self.icon, self.title)
    }
}
