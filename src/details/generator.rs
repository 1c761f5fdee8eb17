//! Crop Details Generator
//!
//! Main entry point for generating crop details articles.
//! Orchestrates the four sections (S1-S4) into one markdown document.
//!
//! Public API (consumed by api_server.rs and the crop_details binary):
//! - DetailsGenerator::new() -> Self
//! - DetailsGenerator::generate(name, record, store) -> String

use chrono::Utc;

use crate::details::sections::{s1_cultivation, s2_soil_water, s3_rotation, s4_yield_trend};
use crate::store::{CropRecord, CropStore};

/// Crop details generator - stateless markdown generator.
pub struct DetailsGenerator;

impl DetailsGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Generate a complete details article for a crop.
    ///
    /// # Arguments
    /// * `name` - Crop name as stored (e.g., "Rice")
    /// * `record` - The crop's reference record
    /// * `store` - Optional store, used to mark rotation partners with their own entry
    pub fn generate(&self, name: &str, record: &CropRecord, store: Option<&CropStore>) -> String {
        let sections = [
            s1_cultivation::generate(record),
            s2_soil_water::generate(record),
            s3_rotation::generate(record, store),
            s4_yield_trend::generate(&record.past_yields),
        ];

        let mut result = generate_frontmatter(name);
        result.push_str("\n\n");
        result.push_str(&format!("# {}", name));
        result.push_str("\n\n");
        result.push_str(&sections.join("\n\n---\n\n"));
        result
    }
}

impl Default for DetailsGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Generate YAML frontmatter with metadata.
fn generate_frontmatter(name: &str) -> String {
    let now = Utc::now().format("%Y-%m-%dT%H:%M:%SZ");

    format!(
        r#"---
crop: "{}"
generated: "{}"
version: "1.0"
---"#,
        yaml_escape(name), now
    )
}

/// Escape a value for a double-quoted YAML scalar.
fn yaml_escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
