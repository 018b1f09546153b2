pub mod cart;
pub mod favorites;

pub use cart::{use_cart, CartStore};
pub use favorites::{use_favorites, FavoritesStore};
