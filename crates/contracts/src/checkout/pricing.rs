use crate::cart::CartLine;
use crate::checkout::delivery::{delivery_cost, DeliveryCost, DeliveryId};

/// Сумма по позициям корзины, в целых рублях.
pub fn subtotal(lines: &[CartLine]) -> u64 {
    lines.iter().map(CartLine::line_total).sum()
}

/// Итог по заказу для выбранного способа доставки.
///
/// `total` отсутствует, когда стоимость доставки не определена: сумму
/// нельзя дорисовать из `Unresolved`, витрина показывает «Уточняется».
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderTotal {
    pub subtotal: u64,
    pub delivery: DeliveryCost,
    pub total: Option<u64>,
}

impl OrderTotal {
    pub fn is_pending(&self) -> bool {
        self.total.is_none()
    }
}

pub fn order_total(lines: &[CartLine], delivery: DeliveryId) -> OrderTotal {
    let subtotal = subtotal(lines);
    let cost = delivery_cost(delivery);
    OrderTotal {
        subtotal,
        delivery: cost,
        total: cost.resolved().map(|amount| subtotal + amount),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(id: &str, price: u64, count: u32) -> CartLine {
        CartLine {
            id: id.into(),
            title: id.into(),
            image: format!("{id}.png"),
            price,
            count,
        }
    }

    #[test]
    fn subtotal_sums_price_times_count() {
        let lines = vec![line("a", 1000, 2), line("b", 500, 1)];
        assert_eq!(subtotal(&lines), 2500);
    }

    #[test]
    fn subtotal_of_empty_cart_is_zero() {
        assert_eq!(subtotal(&[]), 0);
    }

    #[test]
    fn total_is_subtotal_plus_delivery_for_every_resolvable_id() {
        let lines = vec![line("a", 1000, 2), line("b", 500, 1)];
        for id in DeliveryId::ALL {
            let totals = order_total(&lines, id);
            assert_eq!(totals.subtotal, 2500);
            match delivery_cost(id).resolved() {
                Some(amount) => assert_eq!(totals.total, Some(2500 + amount)),
                None => assert_eq!(totals.total, None),
            }
        }
    }

    #[test]
    fn free_delivery_leaves_total_equal_to_subtotal() {
        let lines = vec![line("a", 66_990, 1)];
        let totals = order_total(&lines, DeliveryId::Mkad);
        assert_eq!(totals.total, Some(66_990));
    }

    #[test]
    fn provisional_delivery_adds_its_lower_bound() {
        let lines = vec![line("a", 66_990, 1)];
        let totals = order_total(&lines, DeliveryId::OutMkad);
        assert_eq!(totals.delivery, DeliveryCost::FromAmount(1000));
        assert_eq!(totals.total, Some(67_990));
    }

    #[test]
    fn unresolved_delivery_keeps_total_pending() {
        let lines = vec![line("a", 66_990, 1)];
        let totals = order_total(&lines, DeliveryId::Yandex);
        assert!(totals.is_pending());
        assert_eq!(totals.subtotal, 66_990);
    }
}
