//! S1: Cultivation
//!
//! Data Sources:
//! - `process`: comma-separated cultivation steps
//! - `optimal_period`: sowing/harvest window

use crate::store::CropRecord;

/// Generate the S1 Cultivation section.
pub fn generate(record: &CropRecord) -> String {
    let mut sections = Vec::new();
    sections.push("## Cultivation".to_string());
    sections.push(String::new());
    sections.push(format!("**Growing Season**: {}", record.optimal_period));

    let steps = cultivation_steps(&record.process);
    sections.push(String::new());
    sections.push("**Cultivation Process**:".to_string());
    if steps.len() > 1 {
        for (i, step) in steps.iter().enumerate() {
            sections.push(format!("{}. {}", i + 1, step));
        }
    } else {
        sections.push(record.process.clone());
    }

    sections.join("\n")
}

/// Split the free-text process into steps.
///
/// "Soil tillage, sowing seeds, irrigation, and harvesting." →
/// ["Soil tillage", "Sowing seeds", "Irrigation", "Harvesting"]
pub fn cultivation_steps(process: &str) -> Vec<String> {
    process
        .trim()
        .trim_end_matches('.')
        .split(',')
        .map(|s| s.trim())
        .map(|s| s.strip_prefix("and ").unwrap_or(s).trim())
        .filter(|s| !s.is_empty())
        .map(capitalize)
        .collect()
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cultivation_steps() {
        let steps = cultivation_steps("Soil tillage, sowing seeds, irrigation, and harvesting.");
        assert_eq!(steps, vec!["Soil tillage", "Sowing seeds", "Irrigation", "Harvesting"]);
    }

    #[test]
    fn test_single_step_process_kept_verbatim() {
        let record = CropRecord {
            process: "Broadcast seed.".to_string(),
            optimal_period: "March".to_string(),
            soil_type: "Loam".to_string(),
            rotation_strategies: vec!["Beans".to_string()],
            soil_health: "Add compost.".to_string(),
            water_management: "Water weekly.".to_string(),
            water_requirement: "300-400 mm".to_string(),
            past_yields: vec![1.0],
        };

        assert_eq!(cultivation_steps(&record.process), vec!["Broadcast seed"]);

        let md = generate(&record);
        assert!(md.contains("**Cultivation Process**:\nBroadcast seed."));
        assert!(!md.contains("1. "));
    }
}
