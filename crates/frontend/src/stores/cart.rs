use contracts::cart::CartLine;
use contracts::checkout::pricing;
use leptos::prelude::*;

/// Содержимое корзины: не больше одной позиции на товар, `count >= 1`
/// у каждой позиции, порядок — порядок первого добавления.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartState {
    lines: Vec<CartLine>,
}

impl CartState {
    /// Повторное добавление того же товара увеличивает количество;
    /// новый товар встаёт в конец списка с количеством 1. Операция
    /// тотальна, ошибок нет.
    pub fn add(&mut self, line: CartLine) {
        if let Some(existing) = self.lines.iter_mut().find(|l| l.id == line.id) {
            existing.count += 1;
        } else {
            self.lines.push(CartLine { count: 1, ..line });
        }
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Суммарное количество товаров (для бейджа на нижней навигации).
    pub fn total_count(&self) -> u32 {
        self.lines.iter().map(|line| line.count).sum()
    }

    pub fn subtotal(&self) -> u64 {
        pricing::subtotal(&self.lines)
    }
}

/// Хэндл корзины. Создаётся один раз при старте приложения и живёт в
/// контексте; страницы мутируют корзину только через него.
#[derive(Clone, Copy)]
pub struct CartStore(RwSignal<CartState>);

impl CartStore {
    pub fn new() -> Self {
        Self(RwSignal::new(CartState::default()))
    }

    pub fn add(&self, line: CartLine) {
        log::debug!("cart: add '{}'", line.id);
        self.0.update(|state| state.add(line));
    }

    pub fn lines(&self) -> Vec<CartLine> {
        self.0.with(|state| state.lines().to_vec())
    }

    pub fn is_empty(&self) -> bool {
        self.0.with(CartState::is_empty)
    }

    pub fn total_count(&self) -> u32 {
        self.0.with(CartState::total_count)
    }

    pub fn subtotal(&self) -> u64 {
        self.0.with(CartState::subtotal)
    }
}

pub fn use_cart() -> CartStore {
    use_context::<CartStore>().expect("CartStore provider not found")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(id: &str, price: u64) -> CartLine {
        CartLine {
            id: id.into(),
            title: id.into(),
            image: format!("{id}.png"),
            price,
            count: 1,
        }
    }

    #[test]
    fn adding_twice_accumulates_into_one_line() {
        let mut cart = CartState::default();
        cart.add(line("xbox-series-x", 69_000));
        cart.add(line("xbox-series-x", 69_000));

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].count, 2);
    }

    #[test]
    fn distinct_products_get_their_own_lines_in_insertion_order() {
        let mut cart = CartState::default();
        cart.add(line("xbox-series-x", 69_000));
        cart.add(line("iphone-15", 79_000));
        cart.add(line("xbox-series-x", 69_000));

        let ids: Vec<&str> = cart.lines().iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["xbox-series-x", "iphone-15"]);
    }

    #[test]
    fn incoming_count_is_ignored_on_first_insert() {
        let mut cart = CartState::default();
        let mut seed = line("xbox-series-x", 69_000);
        seed.count = 7;
        cart.add(seed);
        assert_eq!(cart.lines()[0].count, 1);
    }

    #[test]
    fn totals_follow_the_lines() {
        let mut cart = CartState::default();
        assert!(cart.is_empty());
        assert_eq!(cart.subtotal(), 0);

        cart.add(line("a", 1000));
        cart.add(line("a", 1000));
        cart.add(line("b", 500));

        assert!(!cart.is_empty());
        assert_eq!(cart.total_count(), 3);
        assert_eq!(cart.subtotal(), 2500);
    }
}
