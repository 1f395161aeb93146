//! Customer form boundary
//!
//! Validation of customer details happens here, before the update
//! command is dispatched; the store never re-validates. A complete
//! order requires all three fields to be non-empty.

use serde::Deserialize;
use shared::order::CustomerUpdate;
use thiserror::Error;

/// Form validation error, surfaced inline to the user
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("name is required")]
    NameRequired,
    #[error("phone is required")]
    PhoneRequired,
    #[error("address is required")]
    AddressRequired,
}

/// Raw customer form input
#[derive(Debug, Clone, Deserialize, Default)]
pub struct CustomerForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
}

impl CustomerForm {
    /// Validate all fields are non-empty (after trimming)
    pub fn validate(&self) -> Result<(), FormError> {
        if self.name.trim().is_empty() {
            return Err(FormError::NameRequired);
        }
        if self.phone.trim().is_empty() {
            return Err(FormError::PhoneRequired);
        }
        if self.address.trim().is_empty() {
            return Err(FormError::AddressRequired);
        }
        Ok(())
    }

    /// Validate and convert into a full customer update
    pub fn into_update(self) -> Result<CustomerUpdate, FormError> {
        self.validate()?;
        Ok(CustomerUpdate {
            name: Some(self.name.trim().to_string()),
            phone: Some(self.phone.trim().to_string()),
            address: Some(self.address.trim().to_string()),
        })
    }
}
