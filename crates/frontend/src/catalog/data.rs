//! Статический каталог витрины.
//!
//! Данные собираются один раз при первом обращении; поиск товара по id
//! идёт через индекс, а не перебором категорий.

use contracts::catalog::{Category, Product, Review, Subcategory};
use once_cell::sync::Lazy;
use std::collections::HashMap;

static CATALOG: Lazy<Catalog> = Lazy::new(Catalog::seed);

pub struct Catalog {
    categories: Vec<Category>,
    subcategories: HashMap<String, Vec<Subcategory>>,
    products_by_category: HashMap<String, Vec<Product>>,
    by_id: HashMap<String, Product>,
    featured_ids: Vec<&'static str>,
    reviews: Vec<Review>,
}

impl Catalog {
    pub fn get() -> &'static Catalog {
        &CATALOG
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category_by_id(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|category| category.id == id)
    }

    pub fn subcategories_of(&self, category_id: &str) -> &[Subcategory] {
        self.subcategories
            .get(category_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn products_in_category(&self, category_id: &str) -> &[Product] {
        self.products_by_category
            .get(category_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn product_by_id(&self, id: &str) -> Option<&Product> {
        self.by_id.get(id)
    }

    /// «Выбор покупателей» на главной.
    pub fn featured(&self) -> Vec<&Product> {
        self.featured_ids
            .iter()
            .filter_map(|id| self.by_id.get(*id))
            .collect()
    }

    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    fn seed() -> Catalog {
        let categories = vec![
            category("consoles", "Игровые приставки", "console.png"),
            category("laptops", "Ноутбуки", "laptop.png"),
            category("phones", "Телефоны", "phone.png"),
            category("tablets", "Планшеты", "tablet.png"),
        ];

        let mut subcategories = HashMap::new();
        subcategories.insert(
            "consoles".to_string(),
            vec![
                subcategory("xbox", "Xbox", "xbox-x.png"),
                subcategory("ps", "Sony PlayStation", "console.png"),
            ],
        );

        let mut products_by_category = HashMap::new();
        products_by_category.insert(
            "consoles".to_string(),
            vec![
                product("xbox-series-x", "Xbox Series X 1TB", 69_000, "xbox-x.png", 5.0, true),
                product("xbox-series-s", "Xbox Series S 512GB", 39_000, "xbox-s.png", 5.0, true),
            ],
        );
        products_by_category.insert(
            "laptops".to_string(),
            vec![
                product(
                    "macbook-air-13",
                    "Ноутбук Apple MacBook Air 13 M2",
                    95_000,
                    "macbook-air.png",
                    4.8,
                    true,
                ),
                product(
                    "lenovo-ideapad-3",
                    "Ноутбук Lenovo IdeaPad 3",
                    42_000,
                    "ideapad.png",
                    4.5,
                    false,
                ),
            ],
        );
        products_by_category.insert(
            "phones".to_string(),
            vec![
                product(
                    "iphone-15",
                    "Смартфон Apple iPhone 15 128GB",
                    79_000,
                    "iphone-15.png",
                    4.9,
                    true,
                ),
                product(
                    "galaxy-s24",
                    "Смартфон Samsung Galaxy S24",
                    66_990,
                    "galaxy-s24.png",
                    4.7,
                    true,
                ),
            ],
        );
        products_by_category.insert(
            "tablets".to_string(),
            vec![
                product("ipad-10", "Планшет Apple iPad 10.9", 45_000, "ipad-10.png", 4.8, true),
                product(
                    "galaxy-tab-s9",
                    "Планшет Samsung Galaxy Tab S9",
                    59_000,
                    "galaxy-tab-s9.png",
                    4.6,
                    false,
                ),
            ],
        );

        let by_id = products_by_category
            .values()
            .flatten()
            .map(|p| (p.id.clone(), p.clone()))
            .collect();

        let reviews = vec![
            review("Пользователь", 5, "Рекомендую, все отлично"),
            review("Пользователь", 5, ""),
            review("Пользователь", 4, ""),
        ];

        Catalog {
            categories,
            subcategories,
            products_by_category,
            by_id,
            featured_ids: vec!["xbox-series-x", "xbox-series-s"],
            reviews,
        }
    }
}

fn category(id: &str, name: &str, image: &str) -> Category {
    Category {
        id: id.into(),
        name: name.into(),
        image: image.into(),
    }
}

fn subcategory(id: &str, name: &str, image: &str) -> Subcategory {
    Subcategory {
        id: id.into(),
        name: name.into(),
        image: image.into(),
    }
}

fn product(id: &str, title: &str, price: u64, image: &str, rating: f32, in_stock: bool) -> Product {
    Product {
        id: id.into(),
        title: title.into(),
        price,
        image: image.into(),
        rating,
        in_stock,
    }
}

fn review(author: &str, rating: u8, text: &str) -> Review {
    Review {
        author: author.into(),
        rating,
        text: text.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_product_is_reachable_by_id() {
        let catalog = Catalog::get();
        for category in catalog.categories() {
            for product in catalog.products_in_category(&category.id) {
                let found = catalog.product_by_id(&product.id);
                assert_eq!(found, Some(product));
            }
        }
    }

    #[test]
    fn unknown_ids_are_none_not_a_panic() {
        let catalog = Catalog::get();
        assert_eq!(catalog.product_by_id("no-such-product"), None);
        assert_eq!(catalog.category_by_id("no-such-category"), None);
        assert!(catalog.products_in_category("no-such-category").is_empty());
        assert!(catalog.subcategories_of("no-such-category").is_empty());
    }

    #[test]
    fn featured_products_resolve_from_the_index() {
        let featured = Catalog::get().featured();
        let ids: Vec<&str> = featured.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["xbox-series-x", "xbox-series-s"]);
    }

    #[test]
    fn consoles_have_subcategories() {
        let subs = Catalog::get().subcategories_of("consoles");
        assert_eq!(subs.len(), 2);
        assert_eq!(subs[0].id, "xbox");
    }

    #[test]
    fn ratings_stay_in_range() {
        let catalog = Catalog::get();
        for category in catalog.categories() {
            for product in catalog.products_in_category(&category.id) {
                assert!((0.0..=5.0).contains(&product.rating), "{}", product.id);
            }
        }
    }
}
