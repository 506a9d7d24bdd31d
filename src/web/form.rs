use serde::Deserialize;

use crate::domain::{CustomerInfo, PaymentMethod};

/// Fields posted by the checkout form.
///
/// `phone`, `street`, `house_number` and `city` are required: a payload
/// without them is rejected by the form extractor. The page marks the same
/// inputs `required`.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutForm {
    pub phone: String,
    pub street: String,
    pub house_number: String,
    #[serde(default)]
    pub flat_number: String,
    pub city: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub comments: String,
    /// Present (`"True"`) only when the checkbox is ticked.
    #[serde(rename = "remember-data", default)]
    pub remember_data: Option<String>,
    #[serde(default)]
    pub payment_method: PaymentMethod,
}

impl CheckoutForm {
    pub fn remember(&self) -> bool {
        self.remember_data.is_some()
    }

    pub fn into_parts(self) -> (CustomerInfo, PaymentMethod) {
        let remember = self.remember();
        let customer = CustomerInfo {
            phone: self.phone,
            street: self.street,
            house_number: self.house_number,
            flat_number: self.flat_number,
            city: self.city,
            email: self.email,
            comments: self.comments,
            remember,
        };
        (customer, self.payment_method)
    }
}
