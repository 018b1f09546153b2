pub mod delivery;
pub mod pricing;
pub mod validation;

pub use delivery::{delivery_cost, DeliveryCost, DeliveryId, DeliveryOption, DELIVERY_OPTIONS};
pub use pricing::{order_total, subtotal, OrderTotal};
pub use validation::{required_fields, validate, CheckoutForm, FormField, ValidationReport};
