//! The data and filtering core of a single-page product catalogue.
//!
//! Reference data (users, categories, products) is loaded once, joined into
//! [`EnrichedProduct`]s, and narrowed by a [`CatalogueView`] according to the
//! selections a presentation layer makes.

pub mod action;
pub mod config;
pub mod data;
pub mod error;
pub mod filter;
pub mod fixtures;
pub mod join;
pub mod panel;
pub mod selection;
pub mod view;

pub use action::Action;
pub use config::{CatalogueConfig, FixtureSource};
pub use data::{
    category::{Category, CategoryId},
    product::{EnrichedProduct, Product, ProductId},
    store::ReferenceData,
    user::{Sex, User, UserId},
};
pub use error::{CatalogueError, CatalogueResult};
pub use selection::CategorySelection;
pub use view::{CatalogueView, Visible};
