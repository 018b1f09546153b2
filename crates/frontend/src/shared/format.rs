//! Форматирование цен для витрины.

use contracts::checkout::delivery::DeliveryCost;
use contracts::checkout::pricing::OrderTotal;

/// Целое с пробелами-разделителями тысяч: 1234567 -> "1 234 567".
pub fn format_int(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

/// 66990 -> "66 990 руб."
pub fn format_price(value: u64) -> String {
    format!("{} руб.", format_int(value))
}

/// Ценник способа доставки в списке выбора. Неопределённая стоимость
/// никогда не рисуется нулём.
pub fn format_delivery_cost(cost: DeliveryCost) -> String {
    match cost {
        DeliveryCost::Amount(amount) => format_price(amount),
        DeliveryCost::FromAmount(amount) => format!("от {}", format_price(amount)),
        DeliveryCost::Unresolved => "Уточняется".to_string(),
    }
}

/// Строка «Доставка» в сводке заказа: бесплатная показывается словом.
pub fn format_delivery_summary(cost: DeliveryCost) -> String {
    match cost {
        DeliveryCost::Amount(0) => "Бесплатно".to_string(),
        other => format_delivery_cost(other),
    }
}

/// Строка «Итого» в сводке заказа.
pub fn format_order_total(totals: &OrderTotal) -> String {
    match totals.total {
        Some(total) => format_price(total),
        None => "Уточняется".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::cart::CartLine;
    use contracts::checkout::delivery::DeliveryId;
    use contracts::checkout::pricing::order_total;

    #[test]
    fn groups_digits_by_three() {
        assert_eq!(format_int(0), "0");
        assert_eq!(format_int(999), "999");
        assert_eq!(format_int(66_990), "66 990");
        assert_eq!(format_int(1_234_567), "1 234 567");
    }

    #[test]
    fn price_carries_the_currency_suffix() {
        assert_eq!(format_price(66_990), "66 990 руб.");
        assert_eq!(format_price(0), "0 руб.");
    }

    #[test]
    fn delivery_cost_labels_match_the_storefront() {
        assert_eq!(format_delivery_cost(DeliveryCost::Amount(0)), "0 руб.");
        assert_eq!(
            format_delivery_cost(DeliveryCost::FromAmount(1000)),
            "от 1 000 руб."
        );
        assert_eq!(format_delivery_cost(DeliveryCost::Unresolved), "Уточняется");
    }

    #[test]
    fn summary_shows_free_delivery_as_a_word() {
        assert_eq!(format_delivery_summary(DeliveryCost::Amount(0)), "Бесплатно");
        assert_eq!(
            format_delivery_summary(DeliveryCost::FromAmount(1000)),
            "от 1 000 руб."
        );
        assert_eq!(
            format_delivery_summary(DeliveryCost::Unresolved),
            "Уточняется"
        );
    }

    #[test]
    fn pending_total_is_never_a_number() {
        let lines = vec![CartLine {
            id: "a".into(),
            title: "a".into(),
            image: "a.png".into(),
            price: 66_990,
            count: 1,
        }];
        let totals = order_total(&lines, DeliveryId::Yandex);
        assert_eq!(format_order_total(&totals), "Уточняется");
    }
}
