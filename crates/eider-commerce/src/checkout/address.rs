//! Address types.

use crate::ids::AddressId;
use serde::{Deserialize, Serialize};

/// A delivery address.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Address {
    /// Address ID (None for unsaved addresses).
    pub id: Option<AddressId>,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Address line 1.
    pub address1: String,
    /// Address line 2 (apt, floor, etc.).
    pub address2: Option<String>,
    /// City.
    pub city: String,
    /// Postal/ZIP code.
    pub zip: String,
    /// Country name.
    pub country: String,
    /// Country code (e.g., "RS").
    pub country_code: String,
    /// Phone number.
    pub phone: Option<String>,
}

impl Address {
    /// Create a new address.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        address1: impl Into<String>,
        city: impl Into<String>,
        zip: impl Into<String>,
        country: impl Into<String>,
        country_code: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            address1: address1.into(),
            address2: None,
            city: city.into(),
            zip: zip.into(),
            country: country.into(),
            country_code: country_code.into(),
            phone: None,
        }
    }

    /// Get full name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Format as single line.
    pub fn one_line(&self) -> String {
        let mut parts = vec![self.address1.clone()];
        if let Some(ref addr2) = self.address2 {
            parts.push(addr2.clone());
        }
        parts.push(self.city.clone());
        parts.push(self.zip.clone());
        parts.push(self.country_code.clone());
        parts.join(", ")
    }

    /// Format as multi-line.
    pub fn multi_line(&self) -> String {
        let mut lines = vec![self.full_name(), self.address1.clone()];
        if let Some(ref addr2) = self.address2 {
            lines.push(addr2.clone());
        }
        lines.push(format!("{} {}", self.zip, self.city));
        lines.push(self.country.clone());
        lines.join("\n")
    }

    /// Check if address is complete enough for delivery.
    pub fn is_complete(&self) -> bool {
        !self.first_name.is_empty()
            && !self.last_name.is_empty()
            && !self.address1.is_empty()
            && !self.city.is_empty()
            && !self.zip.is_empty()
            && !self.country_code.is_empty()
    }
}

impl Default for Address {
    fn default() -> Self {
        Self {
            id: None,
            first_name: String::new(),
            last_name: String::new(),
            address1: String::new(),
            address2: None,
            city: String::new(),
            zip: String::new(),
            country: String::new(),
            country_code: String::new(),
            phone: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_creation() {
        let addr = Address::new(
            "Mila",
            "Petrovic",
            "Bulevar kralja Aleksandra 73",
            "Beograd",
            "11000",
            "Serbia",
            "RS",
        );
        assert_eq!(addr.full_name(), "Mila Petrovic");
        assert!(addr.is_complete());
    }

    #[test]
    fn test_incomplete_address() {
        let addr = Address::default();
        assert!(!addr.is_complete());
    }

    #[test]
    fn test_address_formatting() {
        let addr = Address::new(
            "Mila",
            "Petrovic",
            "Bulevar kralja Aleksandra 73",
            "Beograd",
            "11000",
            "Serbia",
            "RS",
        );

        assert!(addr.one_line().contains("Beograd"));
        assert!(addr.multi_line().contains("11000 Beograd"));
    }
}
