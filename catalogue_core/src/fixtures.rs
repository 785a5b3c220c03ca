//! Loading of reference data from JSON fixture files.
//!
//! Each collection is a JSON array of records shaped like
//! `{"id": 1, "title": "Grocery", "icon": "🍞", "ownerId": 2}`.

use std::{fs, path::Path};

use serde::de::DeserializeOwned;

use crate::{
    config::{CatalogueConfig, FixtureSource},
    data::store::ReferenceData,
    error::{CatalogueError, CatalogueResult},
};

const BUNDLED_USERS: &str = include_str!("../fixtures/users.json");
const BUNDLED_CATEGORIES: &str = include_str!("../fixtures/categories.json");
const BUNDLED_PRODUCTS: &str = include_str!("../fixtures/products.json");

pub const USERS_FILE: &str = "users.json";
pub const CATEGORIES_FILE: &str = "categories.json";
pub const PRODUCTS_FILE: &str = "products.json";

/// Loads the reference data from wherever `config` points.
pub fn load(config: &CatalogueConfig) -> CatalogueResult<ReferenceData> {
    match &config.fixture_source {
        FixtureSource::Bundled => bundled(),
        FixtureSource::Directory(dir) => from_dir(dir),
    }
}

/// The fixture set compiled into the crate: 4 users, 5 categories and 9
/// products.
pub fn bundled() -> CatalogueResult<ReferenceData> {
    from_json_strs(BUNDLED_USERS, BUNDLED_CATEGORIES, BUNDLED_PRODUCTS)
}

pub fn from_json_strs(
    users: &str,
    categories: &str,
    products: &str,
) -> CatalogueResult<ReferenceData> {
    Ok(ReferenceData::new(
        parse("users", users)?,
        parse("categories", categories)?,
        parse("products", products)?,
    ))
}

/// Reads `users.json`, `categories.json` and `products.json` from `dir`.
pub fn from_dir(dir: &Path) -> CatalogueResult<ReferenceData> {
    tracing::debug!(dir = %dir.display(), "loading fixtures");
    let read = |file: &str| {
        let path = dir.join(file);
        fs::read_to_string(&path).map_err(|source| CatalogueError::Io { path, source })
    };

    from_json_strs(&read(USERS_FILE)?, &read(CATEGORIES_FILE)?, &read(PRODUCTS_FILE)?)
}

fn parse<T: DeserializeOwned>(collection: &'static str, json: &str) -> CatalogueResult<Vec<T>> {
    serde_json::from_str(json).map_err(|source| CatalogueError::Json { collection, source })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::data::{
        category::{Category, CategoryId},
        product::{Product, ProductId},
        user::{Sex, User, UserId},
    };

    #[test]
    fn bundled_fixtures_load() {
        let data = bundled().unwrap();
        assert_eq!(data.users().len(), 4);
        assert_eq!(data.categories().len(), 5);
        assert_eq!(data.products().len(), 9);

        assert_eq!(data.users()[1], User::new(2, "Anna", Sex::Female));
        assert_eq!(data.categories()[0], Category::new(1, "Grocery", "🍞", 2));
        assert_eq!(data.products()[8], Product::new(9, "Apples", 3));
    }

    #[test]
    fn bundled_fixtures_fully_resolve() {
        let data = bundled().unwrap();
        for product in data.enrich() {
            assert!(product.category.is_some(), "{} has no category", product.name());
            assert!(product.user.is_some(), "{} has no owner", product.name());
        }
    }

    #[test]
    fn parses_camel_case_fields() {
        let data = from_json_strs(
            r#"[{"id": 2, "name": "Anna", "sex": "f"}]"#,
            r#"[{"id": 1, "title": "Grocery", "icon": "🍞", "ownerId": 2}]"#,
            r#"[{"id": 1, "name": "Bread", "categoryId": 1}]"#,
        )
        .unwrap();

        assert_eq!(data.users()[0].id, UserId(2));
        assert_eq!(data.categories()[0].owner_id, UserId(2));
        assert_eq!(data.products()[0].id, ProductId(1));
        assert_eq!(data.products()[0].category_id, CategoryId(1));
    }

    #[test]
    fn reports_which_collection_is_malformed() {
        let err = from_json_strs("[]", r#"[{"id": 1, "title": "Grocery"}]"#, "[]").unwrap_err();
        assert!(matches!(err, CatalogueError::Json { collection: "categories", .. }));

        let err = from_json_strs("[]", "[]", "not json").unwrap_err();
        assert!(matches!(err, CatalogueError::Json { collection: "products", .. }));

        let err =
            from_json_strs(r#"[{"id": 1, "name": "Roma", "sex": "x"}]"#, "[]", "[]").unwrap_err();
        assert!(matches!(err, CatalogueError::Json { collection: "users", .. }));
    }

    #[test]
    fn loads_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(USERS_FILE), r#"[{"id": 1, "name": "Roma", "sex": "m"}]"#)
            .unwrap();
        fs::write(
            dir.path().join(CATEGORIES_FILE),
            r#"[{"id": 2, "title": "Drinks", "icon": "🍺", "ownerId": 1}]"#,
        )
        .unwrap();
        fs::write(dir.path().join(PRODUCTS_FILE), r#"[{"id": 1, "name": "Milk", "categoryId": 2}]"#)
            .unwrap();

        let config =
            CatalogueConfig { fixture_source: FixtureSource::Directory(dir.path().to_path_buf()) };
        let data = load(&config).unwrap();
        let joined = data.enrich();
        assert_eq!(joined.len(), 1);
        assert_eq!(joined[0].user.as_ref().map(|user| user.name.as_str()), Some("Roma"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(USERS_FILE), "[]").unwrap();

        let err = from_dir(dir.path()).unwrap_err();
        match err {
            CatalogueError::Io { path, .. } => assert_eq!(path, dir.path().join(CATEGORIES_FILE)),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn load_bundled_by_default() {
        assert_eq!(load(&CatalogueConfig::default()).unwrap(), bundled().unwrap());
    }
}
