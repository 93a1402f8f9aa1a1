use crate::domain::catalog::{Category, CategoryId, Product, User, UserId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Неизменяемый набор справочных данных каталога.
///
/// Загружается один раз при старте приложения; дальше меняется только
/// производное (отображаемое) подмножество товаров, сами коллекции никогда.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    pub users: Vec<User>,
    pub categories: Vec<Category>,
    pub products: Vec<Product>,
}

impl Catalog {
    pub fn new(users: Vec<User>, categories: Vec<Category>, products: Vec<Product>) -> Self {
        Self {
            users,
            categories,
            products,
        }
    }

    /// Найти пользователя по ID
    pub fn user(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    /// Найти категорию по ID
    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|category| category.id == id)
    }

    /// Категория товара. Битая ссылка даёт `None`, не ошибку.
    pub fn category_of(&self, product: &Product) -> Option<&Category> {
        self.category(product.category_id)
    }

    /// Владелец товара через его категорию. `None` если любая из двух
    /// ссылок не разрешается.
    pub fn owner_of(&self, product: &Product) -> Option<&User> {
        self.category_of(product)
            .and_then(|category| self.user(category.owner_id))
    }

    /// Валидация ссылочной целостности
    pub fn validate(&self) -> Result<(), String> {
        if let Some(id) = first_duplicate(self.users.iter().map(|user| user.id.value())) {
            return Err(format!("Duplicate user id: {}", id));
        }
        if let Some(id) = first_duplicate(self.categories.iter().map(|category| category.id.value()))
        {
            return Err(format!("Duplicate category id: {}", id));
        }
        if let Some(id) = first_duplicate(self.products.iter().map(|product| product.id.value())) {
            return Err(format!("Duplicate product id: {}", id));
        }

        for category in &self.categories {
            if self.user(category.owner_id).is_none() {
                return Err(format!(
                    "Category {} references missing owner {}",
                    category.id.value(),
                    category.owner_id.value()
                ));
            }
        }
        for product in &self.products {
            if self.category(product.category_id).is_none() {
                return Err(format!(
                    "Product {} references missing category {}",
                    product.id.value(),
                    product.category_id.value()
                ));
            }
        }

        Ok(())
    }
}

fn first_duplicate(mut ids: impl Iterator<Item = u32>) -> Option<u32> {
    let mut seen = HashSet::new();
    ids.find(|id| !seen.insert(*id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{ProductId, Sex};

    fn user(id: u32, name: &str, sex: Sex) -> User {
        User {
            id: UserId::new(id),
            name: name.to_string(),
            sex,
        }
    }

    fn category(id: u32, title: &str, owner: u32) -> Category {
        Category {
            id: CategoryId::new(id),
            title: title.to_string(),
            icon: "📦".to_string(),
            owner_id: UserId::new(owner),
        }
    }

    fn product(id: u32, name: &str, category: u32) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            category_id: CategoryId::new(category),
        }
    }

    fn sample() -> Catalog {
        Catalog::new(
            vec![user(1, "Max", Sex::Male), user(2, "Anna", Sex::Female)],
            vec![category(1, "Fruits", 1), category(2, "Drinks", 2)],
            vec![
                product(1, "Apple", 1),
                product(2, "Cola", 2),
                product(3, "Mystery", 99),
            ],
        )
    }

    #[test]
    fn test_lookups_by_id() {
        let catalog = sample();
        assert_eq!(catalog.user(UserId::new(2)).unwrap().name, "Anna");
        assert_eq!(catalog.category(CategoryId::new(1)).unwrap().title, "Fruits");
        assert!(catalog.user(UserId::new(99)).is_none());
        assert!(catalog.category(CategoryId::new(99)).is_none());
    }

    #[test]
    fn test_category_of_resolves_or_degrades() {
        let catalog = sample();
        let apple = &catalog.products[0];
        let mystery = &catalog.products[2];

        assert_eq!(catalog.category_of(apple).unwrap().title, "Fruits");
        assert!(catalog.category_of(mystery).is_none());
    }

    #[test]
    fn test_owner_of_resolves_through_category() {
        let catalog = sample();
        let apple = &catalog.products[0];
        let cola = &catalog.products[1];
        let mystery = &catalog.products[2];

        assert_eq!(catalog.owner_of(apple).unwrap().name, "Max");
        assert_eq!(catalog.owner_of(cola).unwrap().name, "Anna");
        assert!(catalog.owner_of(mystery).is_none());
    }

    #[test]
    fn test_owner_of_degrades_on_missing_user() {
        let catalog = Catalog::new(
            vec![],
            vec![category(1, "Orphaned", 7)],
            vec![product(1, "Apple", 1)],
        );
        assert!(catalog.owner_of(&catalog.products[0]).is_none());
    }

    #[test]
    fn test_validate_accepts_consistent_data() {
        let catalog = Catalog::new(
            vec![user(1, "Max", Sex::Male)],
            vec![category(1, "Fruits", 1)],
            vec![product(1, "Apple", 1)],
        );
        assert_eq!(catalog.validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_dangling_references() {
        let dangling_owner = Catalog::new(vec![], vec![category(1, "Fruits", 7)], vec![]);
        assert!(dangling_owner.validate().unwrap_err().contains("missing owner"));

        let dangling_category = sample();
        assert!(dangling_category
            .validate()
            .unwrap_err()
            .contains("missing category"));
    }

    #[test]
    fn test_validate_rejects_duplicate_ids() {
        let catalog = Catalog::new(
            vec![user(1, "Max", Sex::Male), user(1, "Anna", Sex::Female)],
            vec![],
            vec![],
        );
        assert_eq!(catalog.validate(), Err("Duplicate user id: 1".to_string()));
    }
}
