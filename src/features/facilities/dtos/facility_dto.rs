use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::facilities::models::{
    Conclusion, Contact, Dispensary, FacilityData, FaqItem, PolyclinicTest,
};
use crate::features::regions::models::Coordinate;
use crate::shared::constants::{UNVERIFIED_BADGE_LABEL, VERIFIED_BADGE_LABEL};

/// Response DTO for a district's examination checklist
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FacilityResponseDto {
    /// Echo of the requested region; lets a client drop superseded responses
    pub region_key: String,
    /// Echo of the requested district code
    pub district_code: String,
    pub district_name: String,
    pub region_name: String,
    pub verified: bool,
    /// Badge text shown next to the district name
    pub verification_label: String,
    pub dispensaries: Vec<DispensaryDto>,
    pub polyclinic_tests: Vec<PolyclinicTestDto>,
    pub conclusion: ConclusionDto,
    pub contact: ContactDto,
    pub faq: Vec<FaqItemDto>,
}

impl FacilityResponseDto {
    pub fn new(region_key: String, district_code: String, data: FacilityData) -> Self {
        let verification_label = if data.verified {
            VERIFIED_BADGE_LABEL
        } else {
            UNVERIFIED_BADGE_LABEL
        };

        Self {
            region_key,
            district_code,
            district_name: data.district_name,
            region_name: data.region_name,
            verified: data.verified,
            verification_label: verification_label.to_string(),
            dispensaries: data.dispensaries.into_iter().map(Into::into).collect(),
            polyclinic_tests: data.polyclinic_tests.into_iter().map(Into::into).collect(),
            conclusion: data.conclusion.into(),
            contact: data.contact.into(),
            faq: data.faq.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DispensaryDto {
    pub id: u32,
    pub title: String,
    pub subtitle: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_note: Option<String>,
    pub hours: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phones: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coords: Option<Coordinate>,
    /// `tel:` link for the first phone number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub call_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub map_url: Option<String>,
}

impl From<Dispensary> for DispensaryDto {
    fn from(d: Dispensary) -> Self {
        let call_url = d
            .phones
            .as_ref()
            .and_then(|phones| phones.first())
            .map(|phone| format!("tel:{}", phone));
        let map_url = d
            .coords
            .map(|c| format!("https://maps.google.com/?q={},{}", c.lat, c.lng));

        Self {
            id: d.id,
            title: d.title,
            subtitle: d.subtitle,
            address: d.address,
            address_note: d.address_note,
            hours: d.hours,
            phones: d.phones,
            coords: d.coords,
            call_url,
            map_url,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PolyclinicTestDto {
    pub step: u32,
    pub name: String,
    pub location: String,
    pub tag: String,
    pub special: bool,
}

impl From<PolyclinicTest> for PolyclinicTestDto {
    fn from(t: PolyclinicTest) -> Self {
        Self {
            step: t.step,
            name: t.name,
            location: t.location,
            tag: t.tag,
            special: t.special,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConclusionDto {
    pub location: String,
    pub description: String,
}

impl From<Conclusion> for ConclusionDto {
    fn from(c: Conclusion) -> Self {
        Self {
            location: c.location,
            description: c.description,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactDto {
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telegram: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telegram_url: Option<String>,
}

impl From<Contact> for ContactDto {
    fn from(c: Contact) -> Self {
        let telegram_url = c
            .telegram
            .as_ref()
            .map(|handle| format!("https://t.me/{}", handle));

        Self {
            name: c.name,
            description: c.description,
            phone: c.phone,
            telegram: c.telegram,
            telegram_url,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FaqItemDto {
    pub question: String,
    pub answer: String,
}

impl From<FaqItem> for FaqItemDto {
    fn from(f: FaqItem) -> Self {
        Self {
            question: f.question,
            answer: f.answer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::facilities::data::mirobod;

    #[test]
    fn test_links_are_derived() {
        let dto = FacilityResponseDto::new(
            "toshkent_shahar".to_string(),
            "mirabad".to_string(),
            mirobod(),
        );

        assert_eq!(dto.verification_label, VERIFIED_BADGE_LABEL);
        assert_eq!(dto.dispensaries[0].call_url.as_deref(), Some("tel:71-291-47-80"));
        assert_eq!(
            dto.dispensaries[1].map_url.as_deref(),
            Some("https://maps.google.com/?q=41.2809,69.2954")
        );
        assert_eq!(dto.dispensaries[3].call_url, None);
        assert_eq!(dto.contact.telegram_url.as_deref(), Some("https://t.me/MN_889G"));
    }

    #[test]
    fn test_unverified_label() {
        let data = mirobod().unverified_for("Urgut", "Samarqand viloyati");
        let dto = FacilityResponseDto::new("samarqand".to_string(), "urgut".to_string(), data);
        assert_eq!(dto.verification_label, UNVERIFIED_BADGE_LABEL);
    }
}
