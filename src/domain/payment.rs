use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[default]
    #[serde(rename = "blik")]
    Blik,
    #[serde(rename = "cash")]
    CashOnDelivery,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 2] = [PaymentMethod::Blik, PaymentMethod::CashOnDelivery];

    /// Value carried by the `payment_method` form field.
    pub fn form_value(self) -> &'static str {
        match self {
            PaymentMethod::Blik => "blik",
            PaymentMethod::CashOnDelivery => "cash",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PaymentMethod::Blik => "BLIK",
            PaymentMethod::CashOnDelivery => "Gotówka przy odbiorze",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
