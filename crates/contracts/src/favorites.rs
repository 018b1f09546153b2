use crate::catalog::Product;
use serde::{Deserialize, Serialize};

/// Снимок товара в момент добавления в избранное.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoriteEntry {
    pub id: String,
    pub title: String,
    pub image: String,
    pub price: u64,
    pub rating: f32,
    #[serde(rename = "inStock")]
    pub in_stock: bool,
}

impl FavoriteEntry {
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            title: product.title.clone(),
            image: product.image.clone(),
            price: product.price,
            rating: product.rating,
            in_stock: product.in_stock,
        }
    }
}

// Страница избранного показывает снимки теми же карточками, что и каталог.
impl From<FavoriteEntry> for Product {
    fn from(entry: FavoriteEntry) -> Self {
        Product {
            id: entry.id,
            title: entry.title,
            image: entry.image,
            price: entry.price,
            rating: entry.rating,
            in_stock: entry.in_stock,
        }
    }
}
