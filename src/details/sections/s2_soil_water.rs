//! S2: Soil and Water
//!
//! Data Sources:
//! - `soil_type`, `soil_health`
//! - `water_requirement` (shown as stored, e.g. "450-700 mm")
//! - `water_management`

use crate::store::CropRecord;

/// Generate the S2 Soil and Water section.
pub fn generate(record: &CropRecord) -> String {
    let mut sections = Vec::new();
    sections.push("## Soil and Water".to_string());

    sections.push(String::new());
    sections.push("### Soil".to_string());
    sections.push(format!("**Soil Type**: {}", record.soil_type));
    sections.push(String::new());
    sections.push(format!("**Soil Health**: {}", record.soil_health));

    sections.push(String::new());
    sections.push("### Water".to_string());
    sections.push(format!("**Seasonal Requirement**: {}", record.water_requirement));
    sections.push(String::new());
    sections.push(format!("**Water Management**: {}", record.water_management));

    sections.join("\n")
}
