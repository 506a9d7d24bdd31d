use serde::{Deserialize, Serialize};

/// Contact and delivery data of the customer.
///
/// Every field may be empty: that is the first-visit state, not an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomerInfo {
    pub phone: String,
    pub street: String,
    pub house_number: String,
    pub flat_number: String,
    pub city: String,
    pub email: String,
    pub comments: String,
    /// Whether the customer asked for this data to be prefilled next time.
    #[serde(rename = "remember_data")]
    pub remember: bool,
}

impl CustomerInfo {
    /// `"Polna 5/12"`, or `"Polna 5"` without a flat number.
    pub fn street_line(&self) -> String {
        if self.flat_number.is_empty() {
            format!("{} {}", self.street, self.house_number)
        } else {
            format!("{} {}/{}", self.street, self.house_number, self.flat_number)
        }
    }
}
