use crate::checkout::delivery::DeliveryId;
use serde::{Deserialize, Serialize};

/// Поля формы оформления заказа.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    Name,
    Email,
    Phone,
    Address,
    Zip,
    Comment,
}

impl FormField {
    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Ф.И.О.",
            FormField::Email => "E-mail",
            FormField::Phone => "Мобильный телефон",
            FormField::Address => "Адрес доставки",
            FormField::Zip => "Индекс",
            FormField::Comment => "Комментарий к заказу",
        }
    }
}

/// Черновик формы. Живёт только пока открыта страница оформления.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckoutForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub zip: String,
    pub comment: String,
}

impl CheckoutForm {
    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Phone => &self.phone,
            FormField::Address => &self.address,
            FormField::Zip => &self.zip,
            FormField::Comment => &self.comment,
        }
    }

    pub fn set_field(&mut self, field: FormField, value: String) {
        match field {
            FormField::Name => self.name = value,
            FormField::Email => self.email = value,
            FormField::Phone => self.phone = value,
            FormField::Address => self.address = value,
            FormField::Zip => self.zip = value,
            FormField::Comment => self.comment = value,
        }
    }

    fn is_blank(&self, field: FormField) -> bool {
        self.field(field).trim().is_empty()
    }
}

/// Обязательные поля для способа доставки. Порядок стабильный: имя,
/// телефон, адрес, индекс — в нём же поля попадают в отчёт валидации.
pub fn required_fields(delivery: DeliveryId) -> &'static [FormField] {
    use FormField::{Address, Name, Phone, Zip};
    match delivery {
        DeliveryId::Mkad => &[Name, Phone, Address, Zip],
        DeliveryId::OutMkad | DeliveryId::Yandex | DeliveryId::Cdek => &[Name, Phone, Address],
        DeliveryId::Pickup => &[Name, Phone],
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    pub missing: Vec<FormField>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.missing.is_empty()
    }

    pub fn is_missing(&self, field: FormField) -> bool {
        self.missing.contains(&field)
    }
}

pub fn validate(form: &CheckoutForm, delivery: DeliveryId) -> ValidationReport {
    ValidationReport {
        missing: required_fields(delivery)
            .iter()
            .copied()
            .filter(|field| form.is_blank(*field))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> CheckoutForm {
        CheckoutForm {
            name: "Иванов Иван".into(),
            email: "ivanov@example.com".into(),
            phone: "9991234567".into(),
            address: "Москва, ул. Ленина, 1".into(),
            zip: "101000".into(),
            comment: String::new(),
        }
    }

    #[test]
    fn courier_inside_mkad_requires_address_and_zip() {
        assert_eq!(
            required_fields(DeliveryId::Mkad),
            &[
                FormField::Name,
                FormField::Phone,
                FormField::Address,
                FormField::Zip
            ]
        );
    }

    #[test]
    fn pickup_requires_only_name_and_phone() {
        assert_eq!(
            required_fields(DeliveryId::Pickup),
            &[FormField::Name, FormField::Phone]
        );
    }

    #[test]
    fn pvz_methods_require_address_without_zip() {
        for id in [DeliveryId::OutMkad, DeliveryId::Yandex, DeliveryId::Cdek] {
            assert_eq!(
                required_fields(id),
                &[FormField::Name, FormField::Phone, FormField::Address]
            );
        }
    }

    #[test]
    fn missing_fields_are_reported_in_stable_order() {
        let form = CheckoutForm {
            phone: "9991234567".into(),
            ..CheckoutForm::default()
        };
        let report = validate(&form, DeliveryId::Mkad);
        assert!(!report.is_valid());
        assert_eq!(
            report.missing,
            vec![FormField::Name, FormField::Address, FormField::Zip]
        );
    }

    #[test]
    fn whitespace_only_values_count_as_missing() {
        let mut form = filled_form();
        form.name = "   ".into();
        let report = validate(&form, DeliveryId::Pickup);
        assert_eq!(report.missing, vec![FormField::Name]);
    }

    #[test]
    fn filled_form_passes_for_every_delivery() {
        let form = filled_form();
        for id in DeliveryId::ALL {
            assert!(validate(&form, id).is_valid(), "delivery {id}");
        }
    }

    #[test]
    fn email_and_comment_are_never_required() {
        let mut form = filled_form();
        form.email = String::new();
        form.comment = String::new();
        for id in DeliveryId::ALL {
            assert!(validate(&form, id).is_valid());
        }
    }
}
