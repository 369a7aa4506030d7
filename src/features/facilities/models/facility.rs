use serde::{Deserialize, Serialize};

use crate::features::regions::models::Coordinate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dispensary {
    pub id: u32,
    pub title: String,
    pub subtitle: String,
    pub address: String,
    pub address_note: Option<String>,
    pub hours: String,
    pub phones: Option<Vec<String>>,
    pub coords: Option<Coordinate>,
}

/// One step of the polyclinic test sequence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolyclinicTest {
    pub step: u32,
    pub name: String,
    pub location: String,
    pub tag: String,
    /// Restricted schedule, highlighted by the client
    pub special: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conclusion {
    pub location: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub description: String,
    pub phone: Option<String>,
    /// Telegram username without the leading `@`
    pub telegram: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

/// Procedural checklist for one district
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacilityData {
    pub district_name: String,
    pub region_name: String,
    /// False for records borrowed from the template
    pub verified: bool,
    pub dispensaries: Vec<Dispensary>,
    pub polyclinic_tests: Vec<PolyclinicTest>,
    pub conclusion: Conclusion,
    pub contact: Contact,
    pub faq: Vec<FaqItem>,
}

impl FacilityData {
    /// Copy of this record relabelled for another district and marked unverified
    pub fn unverified_for(&self, district_name: &str, region_name: &str) -> Self {
        Self {
            district_name: district_name.to_string(),
            region_name: region_name.to_string(),
            verified: false,
            ..self.clone()
        }
    }
}
