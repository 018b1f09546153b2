use contracts::cart::CartLine;
use contracts::checkout::delivery::DeliveryId;
use contracts::checkout::validation::{validate, CheckoutForm, FormField, ValidationReport};
use contracts::orders::{OrderDraft, SubmitError, SubmitOrder};

/// Шаги оформления: выбор доставки, заполнение формы, заказ оформлен.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckoutStep {
    SelectingDelivery,
    FillingForm,
    Submitted { order_id: String },
}

/// Состояние страницы оформления. Живёт, пока открыта страница;
/// никуда не сохраняется.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutState {
    pub form: CheckoutForm,
    pub delivery: DeliveryId,
    pub step: CheckoutStep,
    /// Отчёт последней валидации; `None`, пока отправку не пробовали.
    pub report: Option<ValidationReport>,
}

impl Default for CheckoutState {
    fn default() -> Self {
        Self {
            form: CheckoutForm::default(),
            delivery: DeliveryId::Mkad,
            step: CheckoutStep::SelectingDelivery,
            report: None,
        }
    }
}

impl CheckoutState {
    /// Выбор способа доставки переводит к заполнению формы. Если отчёт
    /// валидации уже показан, он пересчитывается под новый набор
    /// обязательных полей.
    pub fn select_delivery(&mut self, id: DeliveryId) {
        self.delivery = id;
        if self.step == CheckoutStep::SelectingDelivery {
            self.step = CheckoutStep::FillingForm;
        }
        self.refresh_report();
    }

    pub fn set_field(&mut self, field: FormField, value: String) {
        self.form.set_field(field, value);
        self.refresh_report();
    }

    /// Ошибка поля показывается только после первой попытки отправки.
    pub fn field_error(&self, field: FormField) -> Option<&'static str> {
        match &self.report {
            Some(report) if report.is_missing(field) => Some("Обязательное поле"),
            _ => None,
        }
    }

    pub fn submitted_order_id(&self) -> Option<String> {
        match &self.step {
            CheckoutStep::Submitted { order_id } => Some(order_id.clone()),
            _ => None,
        }
    }

    /// Валидация и отправка через переданную точку отправки.
    pub fn submit(
        &mut self,
        lines: &[CartLine],
        submitter: &impl SubmitOrder,
    ) -> Result<(), SubmitError> {
        let report = validate(&self.form, self.delivery);
        self.report = Some(report.clone());
        if !report.is_valid() {
            return Err(SubmitError::Invalid {
                missing: report.missing,
            });
        }

        let draft = OrderDraft {
            lines: lines.to_vec(),
            form: self.form.clone(),
            delivery: self.delivery,
        };
        let receipt = submitter.submit(&draft)?;
        log::info!("order submitted: {}", receipt.order_id);
        self.step = CheckoutStep::Submitted {
            order_id: receipt.order_id,
        };
        Ok(())
    }

    fn refresh_report(&mut self) {
        if self.report.is_some() {
            self.report = Some(validate(&self.form, self.delivery));
        }
    }
}
