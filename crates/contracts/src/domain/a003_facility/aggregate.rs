use serde::{Deserialize, Serialize};

use crate::shared::validation::{is_filled, Validate};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Facility {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub facility_type: String,
    pub available: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FacilityDto {
    pub name: String,
    #[serde(rename = "type")]
    pub facility_type: String,
    pub available: bool,
}

impl FacilityDto {
    pub fn into_facility(self, id: i64) -> Facility {
        Facility {
            id,
            name: self.name.trim().to_string(),
            facility_type: self.facility_type.trim().to_string(),
            available: self.available,
        }
    }
}

impl Validate for FacilityDto {
    fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if !is_filled(&self.name) {
            missing.push("name");
        }
        if !is_filled(&self.facility_type) {
            missing.push("type");
        }
        missing
    }
}
