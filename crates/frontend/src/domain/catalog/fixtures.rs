//! Статичные справочные данные каталога.
//!
//! В реальной системе эти коллекции приходили бы с сервера; здесь они
//! вкомпилированы как JSON и разбираются один раз при первом обращении.

use contracts::domain::catalog::{Catalog, Category, Product, User};
use once_cell::sync::Lazy;

static CATALOG: Lazy<Catalog> = Lazy::new(|| {
    let users: Vec<User> =
        serde_json::from_str(include_str!("data/users.json")).expect("users.json is well-formed");
    let categories: Vec<Category> = serde_json::from_str(include_str!("data/categories.json"))
        .expect("categories.json is well-formed");
    let products: Vec<Product> = serde_json::from_str(include_str!("data/products.json"))
        .expect("products.json is well-formed");

    Catalog::new(users, categories, products)
});

pub fn catalog() -> &'static Catalog {
    &CATALOG
}
