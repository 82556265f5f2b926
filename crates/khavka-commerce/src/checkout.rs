//! Checkout form state and validation.
//!
//! Validation runs only on submit; editing a field optimistically clears
//! that field's error without re-validating the others. Submission goes
//! through iff the error map comes back empty.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

/// How the order will be paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    /// Cash on delivery.
    Cash,
    /// Card, paid online.
    CardOnline,
    /// Card, paid to the courier's terminal.
    CardTerminal,
}

impl PaymentMethod {
    /// All methods, in form order.
    pub const ALL: [PaymentMethod; 3] = [
        PaymentMethod::Cash,
        PaymentMethod::CardOnline,
        PaymentMethod::CardTerminal,
    ];

    /// Form wire value.
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "cash",
            PaymentMethod::CardOnline => "card_online",
            PaymentMethod::CardTerminal => "card_terminal",
        }
    }

    /// Display name shown in the select.
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Готівкою при отриманні",
            PaymentMethod::CardOnline => "Карткою онлайн",
            PaymentMethod::CardTerminal => "Карткою кур'єру",
        }
    }
}

impl FromStr for PaymentMethod {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cash" => Ok(PaymentMethod::Cash),
            "card_online" => Ok(PaymentMethod::CardOnline),
            "card_terminal" => Ok(PaymentMethod::CardTerminal),
            _ => Err(CommerceError::UnknownPaymentMethod(s.to_string())),
        }
    }
}

/// When the order should arrive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeliveryTime {
    /// As soon as possible.
    Asap,
    /// Within one hour.
    WithinHour,
    /// Within two hours.
    WithinTwoHours,
    /// A customer-specified time.
    Custom,
}

impl DeliveryTime {
    /// All options, in form order.
    pub const ALL: [DeliveryTime; 4] = [
        DeliveryTime::Asap,
        DeliveryTime::WithinHour,
        DeliveryTime::WithinTwoHours,
        DeliveryTime::Custom,
    ];

    /// Form wire value.
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryTime::Asap => "asap",
            DeliveryTime::WithinHour => "1h",
            DeliveryTime::WithinTwoHours => "2h",
            DeliveryTime::Custom => "custom",
        }
    }

    /// Display name shown in the select.
    pub fn label(&self) -> &'static str {
        match self {
            DeliveryTime::Asap => "Якнайшвидше",
            DeliveryTime::WithinHour => "Протягом 1 години",
            DeliveryTime::WithinTwoHours => "Протягом 2 годин",
            DeliveryTime::Custom => "Вказати час",
        }
    }
}

impl FromStr for DeliveryTime {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asap" => Ok(DeliveryTime::Asap),
            "1h" => Ok(DeliveryTime::WithinHour),
            "2h" => Ok(DeliveryTime::WithinTwoHours),
            "custom" => Ok(DeliveryTime::Custom),
            _ => Err(CommerceError::UnknownDeliveryTime(s.to_string())),
        }
    }
}

/// Fields of the checkout form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FormField {
    Name,
    Phone,
    Address,
    PaymentMethod,
    DeliveryTime,
    Comments,
}

impl FormField {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Phone => "phone",
            FormField::Address => "address",
            FormField::PaymentMethod => "payment_method",
            FormField::DeliveryTime => "delivery_time",
            FormField::Comments => "comments",
        }
    }
}

/// Field-level error messages keyed by field; passing fields are absent.
pub type ErrorMap = BTreeMap<FormField, String>;

/// Raw checkout form state.
///
/// Field values are kept as the strings the form controls produce; the
/// enumerated fields are parsed during validation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CheckoutForm {
    pub name: String,
    pub phone: String,
    pub address: String,
    pub payment_method: String,
    pub delivery_time: String,
    pub comments: String,
    errors: ErrorMap,
}

impl CheckoutForm {
    /// Fresh, empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a field value by key; the counterpart to [`CheckoutForm::set`].
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Phone => &self.phone,
            FormField::Address => &self.address,
            FormField::PaymentMethod => &self.payment_method,
            FormField::DeliveryTime => &self.delivery_time,
            FormField::Comments => &self.comments,
        }
    }

    /// Write a field value, clearing only that field's error.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Name => self.name = value,
            FormField::Phone => self.phone = value,
            FormField::Address => self.address = value,
            FormField::PaymentMethod => self.payment_method = value,
            FormField::DeliveryTime => self.delivery_time = value,
            FormField::Comments => self.comments = value,
        }
        self.errors.remove(&field);
    }

    /// Re-run validation over all fields. Returns whether the form passed.
    pub fn run_validation(&mut self) -> bool {
        self.errors = validate(self);
        self.errors.is_empty()
    }

    /// The current error for a field, if any.
    pub fn error(&self, field: FormField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// The whole error map.
    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }
}

/// Validate a form, producing an error message for every failing field.
///
/// Pure: reads the field values only. `name` and `comments` never fail.
pub fn validate(form: &CheckoutForm) -> ErrorMap {
    let mut errors = ErrorMap::new();

    if form.phone.is_empty() {
        errors.insert(
            FormField::Phone,
            "Номер телефону є обов'язковим.".to_string(),
        );
    } else if !is_valid_phone(&form.phone) {
        errors.insert(
            FormField::Phone,
            "Введіть номер у форматі +380xxxxxxxxx.".to_string(),
        );
    }

    if form.address.trim().is_empty() {
        errors.insert(
            FormField::Address,
            "Адреса доставки є обов'язковою.".to_string(),
        );
    }

    if form.payment_method.parse::<PaymentMethod>().is_err() {
        errors.insert(
            FormField::PaymentMethod,
            "Будь ласка, оберіть спосіб оплати.".to_string(),
        );
    }

    if form.delivery_time.parse::<DeliveryTime>().is_err() {
        errors.insert(
            FormField::DeliveryTime,
            "Будь ласка, оберіть час доставки.".to_string(),
        );
    }

    errors
}

/// A Ukrainian mobile number: "+380" followed by exactly nine digits.
fn is_valid_phone(phone: &str) -> bool {
    let Some(rest) = phone.strip_prefix("+380") else {
        return false;
    };
    rest.len() == 9 && rest.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> CheckoutForm {
        let mut form = CheckoutForm::new();
        form.set(FormField::Phone, "+380501234567");
        form.set(FormField::Address, "м. Київ, вул. Хрещатик, 24");
        form.set(FormField::PaymentMethod, "cash");
        form.set(FormField::DeliveryTime, "asap");
        form
    }

    #[test]
    fn test_valid_form_passes() {
        let mut form = valid_form();
        assert!(form.run_validation());
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_phone_missing_vs_malformed() {
        let mut form = valid_form();
        form.set(FormField::Phone, "");
        let errors = validate(&form);
        assert_eq!(
            errors.get(&FormField::Phone).unwrap(),
            "Номер телефону є обов'язковим."
        );

        form.set(FormField::Phone, "0501234567");
        let errors = validate(&form);
        assert_eq!(
            errors.get(&FormField::Phone).unwrap(),
            "Введіть номер у форматі +380xxxxxxxxx."
        );
    }

    #[test]
    fn test_phone_format_edge_cases() {
        assert!(is_valid_phone("+380501234567"));
        assert!(!is_valid_phone("+38050123456")); // eight digits
        assert!(!is_valid_phone("+3805012345678")); // ten digits
        assert!(!is_valid_phone("+38050123456a"));
        assert!(!is_valid_phone("380501234567"));
    }

    #[test]
    fn test_address_whitespace_only_fails() {
        let mut form = valid_form();
        form.set(FormField::Address, "   ");
        let errors = validate(&form);
        assert!(errors.contains_key(&FormField::Address));
    }

    #[test]
    fn test_selects_must_come_from_enumerated_set() {
        let mut form = valid_form();
        form.set(FormField::PaymentMethod, "crypto");
        form.set(FormField::DeliveryTime, "");
        let errors = validate(&form);
        assert!(errors.contains_key(&FormField::PaymentMethod));
        assert!(errors.contains_key(&FormField::DeliveryTime));
    }

    #[test]
    fn test_name_and_comments_are_optional() {
        let mut form = valid_form();
        form.set(FormField::Name, "");
        form.set(FormField::Comments, "");
        assert!(validate(&form).is_empty());
    }

    #[test]
    fn test_editing_clears_only_own_error() {
        let mut form = CheckoutForm::new();
        assert!(!form.run_validation());
        assert_eq!(form.errors().len(), 4);

        form.set(FormField::Phone, "+380501234567");
        assert!(form.error(FormField::Phone).is_none());
        // Other errors stay untouched until the next submit.
        assert!(form.error(FormField::Address).is_some());
        assert!(form.error(FormField::PaymentMethod).is_some());
        assert!(form.error(FormField::DeliveryTime).is_some());
    }

    #[test]
    fn test_value_mirrors_set() {
        let mut form = CheckoutForm::new();
        for field in [FormField::Name, FormField::Phone, FormField::Comments] {
            form.set(field, field.as_str());
            assert_eq!(form.value(field), field.as_str());
        }
    }

    #[test]
    fn test_wire_values_roundtrip() {
        for m in PaymentMethod::ALL {
            assert_eq!(m.as_str().parse::<PaymentMethod>(), Ok(m));
        }
        for t in DeliveryTime::ALL {
            assert_eq!(t.as_str().parse::<DeliveryTime>(), Ok(t));
        }
    }
}
