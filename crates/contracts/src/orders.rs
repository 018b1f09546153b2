use crate::cart::CartLine;
use crate::checkout::delivery::DeliveryId;
use crate::checkout::validation::{validate, CheckoutForm, FormField};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Снимок заказа, который уходит в точку отправки.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDraft {
    pub lines: Vec<CartLine>,
    pub form: CheckoutForm,
    pub delivery: DeliveryId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderReceipt {
    pub order_id: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    #[error("корзина пуста")]
    EmptyCart,
    #[error("не заполнены обязательные поля")]
    Invalid { missing: Vec<FormField> },
}

/// Точка отправки заказа. Транспорт не фиксируется: реальная
/// реализация повезёт черновик на бэкенд, локальная — нет.
pub trait SubmitOrder {
    fn submit(&self, draft: &OrderDraft) -> Result<OrderReceipt, SubmitError>;
}

/// Локальная заглушка: проверяет черновик и выдаёт номер заказа,
/// никуда его не отправляя.
pub struct LocalSubmitter;

impl SubmitOrder for LocalSubmitter {
    fn submit(&self, draft: &OrderDraft) -> Result<OrderReceipt, SubmitError> {
        if draft.lines.is_empty() {
            return Err(SubmitError::EmptyCart);
        }
        let report = validate(&draft.form, draft.delivery);
        if !report.is_valid() {
            return Err(SubmitError::Invalid {
                missing: report.missing,
            });
        }
        Ok(OrderReceipt {
            order_id: Uuid::new_v4().to_string(),
            created_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> OrderDraft {
        OrderDraft {
            lines: vec![CartLine {
                id: "xbox-series-x".into(),
                title: "Xbox Series X 1TB".into(),
                image: "xbox-x.png".into(),
                price: 69_000,
                count: 1,
            }],
            form: CheckoutForm {
                name: "Иванов Иван".into(),
                phone: "9991234567".into(),
                address: "Москва, ул. Ленина, 1".into(),
                zip: "101000".into(),
                ..CheckoutForm::default()
            },
            delivery: DeliveryId::Mkad,
        }
    }

    #[test]
    fn valid_draft_gets_an_order_id() {
        let receipt = LocalSubmitter.submit(&draft()).unwrap();
        assert!(!receipt.order_id.is_empty());
    }

    #[test]
    fn consecutive_orders_get_distinct_ids() {
        let first = LocalSubmitter.submit(&draft()).unwrap();
        let second = LocalSubmitter.submit(&draft()).unwrap();
        assert_ne!(first.order_id, second.order_id);
    }

    #[test]
    fn empty_cart_is_rejected() {
        let mut draft = draft();
        draft.lines.clear();
        assert_eq!(LocalSubmitter.submit(&draft), Err(SubmitError::EmptyCart));
    }

    #[test]
    fn missing_required_fields_are_rejected_with_the_field_list() {
        let mut draft = draft();
        draft.form.zip = String::new();
        match LocalSubmitter.submit(&draft) {
            Err(SubmitError::Invalid { missing }) => {
                assert_eq!(missing, vec![FormField::Zip]);
            }
            other => panic!("expected Invalid, got {other:?}"),
        }
    }

    #[test]
    fn pickup_needs_no_address() {
        let mut draft = draft();
        draft.delivery = DeliveryId::Pickup;
        draft.form.address = String::new();
        draft.form.zip = String::new();
        assert!(LocalSubmitter.submit(&draft).is_ok());
    }
}
