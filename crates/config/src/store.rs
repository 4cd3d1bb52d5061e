//! Store identity and the fixed informational text blocks

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreInfoError {
    #[error("Failed to read store info file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse store info file: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("Store info field '{0}' must not be empty")]
    EmptyField(&'static str),
}

/// Brand identity plus the answers to the location / hours / contact
/// questions. Loaded once; the response engine and the fallback prompt both
/// read from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreInfo {
    pub name: String,
    pub tagline: String,
    pub address: String,
    pub hours: String,
    pub phone: String,
    pub whatsapp: String,
    pub email: String,
}

impl Default for StoreInfo {
    fn default() -> Self {
        Self {
            name: "TantuShree".to_string(),
            tagline: "Traditional wear, woven with care".to_string(),
            address: "212 Gariahat Road, Kolkata 700019, West Bengal".to_string(),
            hours: "Open every day, 10:00 AM to 9:00 PM".to_string(),
            phone: "+91 98300 12345".to_string(),
            whatsapp: "+91 98300 12345".to_string(),
            email: "hello@tantushree.in".to_string(),
        }
    }
}

impl StoreInfo {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, StoreInfoError> {
        let raw = std::fs::read_to_string(path)?;
        let info: StoreInfo = serde_yaml::from_str(&raw)?;
        info.validate()?;
        Ok(info)
    }

    pub fn validate(&self) -> Result<(), StoreInfoError> {
        if self.name.is_empty() {
            return Err(StoreInfoError::EmptyField("name"));
        }
        if self.address.is_empty() {
            return Err(StoreInfoError::EmptyField("address"));
        }
        if self.hours.is_empty() {
            return Err(StoreInfoError::EmptyField("hours"));
        }
        if self.phone.is_empty() {
            return Err(StoreInfoError::EmptyField("phone"));
        }
        Ok(())
    }

    /// Fixed reply for location questions.
    pub fn location_text(&self) -> String {
        format!(
            "📍 You'll find {} at {}. Ashben kintu, dekha hobe!",
            self.name, self.address
        )
    }

    /// Fixed reply for opening-hours questions.
    pub fn hours_text(&self) -> String {
        format!("🕙 {}. Jekono somoy chole ashun!", self.hours)
    }

    /// Fixed reply for contact questions.
    pub fn contact_text(&self) -> String {
        format!(
            "📞 Call us at {} or WhatsApp {}. Email: {}",
            self.phone, self.whatsapp, self.email
        )
    }
}
