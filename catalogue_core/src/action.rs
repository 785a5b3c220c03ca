use serde::{Deserialize, Serialize};

use crate::{
    data::{category::CategoryId, user::UserId},
    error::{CatalogueError, CatalogueResult},
    view::CatalogueView,
};

/// A user action on the catalogue's filter controls, as dispatched by a
/// presentation layer.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    SelectUser { user: UserId },
    ClearUserSelection,
    ToggleCategory { category: CategoryId },
    ClearCategorySelection,
    SetSearch { text: String },
    ClearSearch,
    ResetAll,
}

impl Action {
    /// Performs the action on `view`. Fails without modifying `view` if the
    /// action refers to a user or category that is not in the view's
    /// reference data.
    pub fn apply(&self, view: &mut CatalogueView) -> CatalogueResult<()> {
        match self {
            Action::SelectUser { user } => {
                let user = view
                    .reference()
                    .find_user(*user)
                    .cloned()
                    .ok_or(CatalogueError::UnknownUser(*user))?;
                view.select_user(&user);
            }
            Action::ClearUserSelection => view.clear_user_selection(),
            Action::ToggleCategory { category } => {
                let category = view
                    .reference()
                    .find_category(*category)
                    .cloned()
                    .ok_or(CatalogueError::UnknownCategory(*category))?;
                view.toggle_category(&category);
            }
            Action::ClearCategorySelection => view.clear_category_selection(),
            Action::SetSearch { text } => view.set_search(text.as_str()),
            Action::ClearSearch => view.clear_search(),
            Action::ResetAll => view.reset_all(),
        }
        Ok(())
    }
}

/// Applies all the given actions to `view` in order. If one of them fails,
/// `view` is put back into the state it was in before the first action, and
/// the error is returned along with the index of the failing action.
pub fn apply_all<'a, I>(view: &mut CatalogueView, actions: I) -> Result<(), (CatalogueError, usize)>
where
    I: IntoIterator<Item = &'a Action>,
{
    let snapshot = view.clone();
    for (i, action) in actions.into_iter().enumerate() {
        if let Err(err) = action.apply(view) {
            *view = snapshot;
            return Err((err, i));
        }
    }
    Ok(())
}
