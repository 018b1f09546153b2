use serde::{Deserialize, Serialize};

/// Карточка товара из статического каталога. Приложение её не меняет.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub title: String,
    /// Цена в целых рублях.
    pub price: u64,
    pub image: String,
    /// Оценка покупателей, от 0 до 5.
    pub rating: f32,
    #[serde(rename = "inStock")]
    pub in_stock: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subcategory {
    pub id: String,
    pub name: String,
    pub image: String,
}

/// Отзыв о товаре. Пустой текст допустим — карточка рендерится без тела.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub author: String,
    pub rating: u8,
    pub text: String,
}
