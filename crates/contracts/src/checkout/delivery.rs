use serde::{Deserialize, Serialize};
use std::fmt;

/// Способ доставки. Строковые идентификаторы стабильны: они попадают
/// в разметку и в черновик заказа.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryId {
    Mkad,
    OutMkad,
    Pickup,
    Yandex,
    Cdek,
}

impl DeliveryId {
    pub const ALL: [DeliveryId; 5] = [
        DeliveryId::Mkad,
        DeliveryId::OutMkad,
        DeliveryId::Pickup,
        DeliveryId::Yandex,
        DeliveryId::Cdek,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryId::Mkad => "mkad",
            DeliveryId::OutMkad => "out_mkad",
            DeliveryId::Pickup => "pickup",
            DeliveryId::Yandex => "yandex",
            DeliveryId::Cdek => "cdek",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.as_str() == value)
    }
}

impl fmt::Display for DeliveryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Один пункт списка способов доставки на странице оформления.
#[derive(Debug, Clone, Copy)]
pub struct DeliveryOption {
    pub id: DeliveryId,
    pub label: &'static str,
    pub note: Option<&'static str>,
}

pub static DELIVERY_OPTIONS: [DeliveryOption; 5] = [
    DeliveryOption {
        id: DeliveryId::Mkad,
        label: "Доставка курьером в пределах МКАД",
        note: None,
    },
    DeliveryOption {
        id: DeliveryId::OutMkad,
        label: "Доставка курьером за МКАД",
        note: Some("Точная сумма будет рассчитана менеджером"),
    },
    DeliveryOption {
        id: DeliveryId::Pickup,
        label: "Самовывоз",
        note: None,
    },
    DeliveryOption {
        id: DeliveryId::Yandex,
        label: "ЯндексДоставка (ПВЗ)",
        note: None,
    },
    DeliveryOption {
        id: DeliveryId::Cdek,
        label: "СДЭК (ПВЗ)",
        note: None,
    },
];

impl DeliveryOption {
    pub fn for_id(id: DeliveryId) -> &'static DeliveryOption {
        DELIVERY_OPTIONS
            .iter()
            .find(|option| option.id == id)
            .expect("every DeliveryId has an entry in DELIVERY_OPTIONS")
    }
}

/// Стоимость доставки.
///
/// `Unresolved` никогда не показывается как бесплатная доставка: итог
/// заказа в этом случае не вычисляется, а витрина пишет «Уточняется».
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeliveryCost {
    /// Посчитанная сумма; 0 означает «бесплатно».
    Amount(u64),
    /// Нижняя граница, точную сумму называет менеджер.
    FromAmount(u64),
    /// Значение не определено, требуется ручное уточнение.
    Unresolved,
}

impl DeliveryCost {
    /// Числовая часть стоимости, если она есть.
    pub fn resolved(&self) -> Option<u64> {
        match self {
            DeliveryCost::Amount(amount) | DeliveryCost::FromAmount(amount) => Some(*amount),
            DeliveryCost::Unresolved => None,
        }
    }

    pub fn is_free(&self) -> bool {
        matches!(self, DeliveryCost::Amount(0))
    }
}

pub fn delivery_cost(id: DeliveryId) -> DeliveryCost {
    match id {
        DeliveryId::Mkad | DeliveryId::Pickup | DeliveryId::Cdek => DeliveryCost::Amount(0),
        DeliveryId::OutMkad => DeliveryCost::FromAmount(1000),
        DeliveryId::Yandex => DeliveryCost::Unresolved,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip_through_strings() {
        for id in DeliveryId::ALL {
            assert_eq!(DeliveryId::parse(id.as_str()), Some(id));
        }
        assert_eq!(DeliveryId::parse("dhl"), None);
    }

    #[test]
    fn serde_uses_snake_case_ids() {
        let json = serde_json::to_string(&DeliveryId::OutMkad).unwrap();
        assert_eq!(json, "\"out_mkad\"");
        let back: DeliveryId = serde_json::from_str("\"cdek\"").unwrap();
        assert_eq!(back, DeliveryId::Cdek);
    }

    #[test]
    fn courier_inside_mkad_pickup_and_cdek_are_free() {
        assert!(delivery_cost(DeliveryId::Mkad).is_free());
        assert!(delivery_cost(DeliveryId::Pickup).is_free());
        assert!(delivery_cost(DeliveryId::Cdek).is_free());
    }

    #[test]
    fn courier_outside_mkad_starts_at_1000() {
        assert_eq!(
            delivery_cost(DeliveryId::OutMkad),
            DeliveryCost::FromAmount(1000)
        );
    }

    #[test]
    fn yandex_cost_stays_unresolved() {
        let cost = delivery_cost(DeliveryId::Yandex);
        assert_eq!(cost, DeliveryCost::Unresolved);
        assert_eq!(cost.resolved(), None);
        assert!(!cost.is_free());
    }

    #[test]
    fn every_id_has_an_option_row() {
        for id in DeliveryId::ALL {
            assert_eq!(DeliveryOption::for_id(id).id, id);
        }
    }
}
