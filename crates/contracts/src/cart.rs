use crate::catalog::Product;
use serde::{Deserialize, Serialize};

/// Одна позиция корзины: товар и накопленное количество.
///
/// Инварианты: на каждый товар не больше одной позиции, `count >= 1`
/// пока позиция существует.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: String,
    pub title: String,
    pub image: String,
    pub price: u64,
    pub count: u32,
}

impl CartLine {
    /// Снимок товара в момент первого добавления, количество 1.
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            title: product.title.clone(),
            image: product.image.clone(),
            price: product.price,
            count: 1,
        }
    }

    pub fn line_total(&self) -> u64 {
        self.price * u64::from(self.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_total_multiplies_price_by_count() {
        let line = CartLine {
            id: "xbox-series-x".into(),
            title: "Xbox Series X 1TB".into(),
            image: "xbox-x.png".into(),
            price: 69_000,
            count: 3,
        };
        assert_eq!(line.line_total(), 207_000);
    }

    #[test]
    fn from_product_starts_with_count_one() {
        let product = Product {
            id: "xbox-series-s".into(),
            title: "Xbox Series S 512GB".into(),
            price: 39_000,
            image: "xbox-s.png".into(),
            rating: 5.0,
            in_stock: true,
        };
        let line = CartLine::from_product(&product);
        assert_eq!(line.count, 1);
        assert_eq!(line.id, product.id);
        assert_eq!(line.price, product.price);
    }
}
