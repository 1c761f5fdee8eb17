//! S3: Crop Rotation
//!
//! Lists rotation partners in stored order. Partner names are free text and
//! only match a guide entry when spelled exactly as the store key
//! ("Carrots" does not link to "Carrot").

use serde::Serialize;

use crate::store::{CropRecord, CropStore};

/// A rotation partner, with whether the guide has an entry for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RotationPartner {
    pub name: String,
    pub in_guide: bool,
}

/// Resolve rotation partners against the store, if one is given.
pub fn rotation_partners(record: &CropRecord, store: Option<&CropStore>) -> Vec<RotationPartner> {
    record
        .rotation_strategies
        .iter()
        .map(|name| RotationPartner {
            name: name.clone(),
            in_guide: store.map(|s| s.contains(name)).unwrap_or(false),
        })
        .collect()
}

/// Generate the S3 Crop Rotation section.
pub fn generate(record: &CropRecord, store: Option<&CropStore>) -> String {
    let mut sections = Vec::new();
    sections.push("## Crop Rotation".to_string());
    sections.push(String::new());
    sections.push(
        "*Rotating with different crop families breaks pest cycles and rebuilds soil fertility between seasons.*"
            .to_string(),
    );

    sections.push(String::new());
    sections.push("**Rotate With**:".to_string());
    for (i, partner) in rotation_partners(record, store).iter().enumerate() {
        if partner.in_guide {
            sections.push(format!("{}. **{}** (see guide entry)", i + 1, partner.name));
        } else {
            sections.push(format!("{}. {}", i + 1, partner.name));
        }
    }

    sections.join("\n")
}
