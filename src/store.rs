//! Crop Reference Store
//!
//! Immutable crop-name → `CropRecord` mapping plus the lookup accessor.
//!
//! The store is an ordinary value: build it once (usually with
//! `CropStore::builtin()`) and hand `&CropStore` or `Arc<CropStore>` to
//! whatever needs lookups. There are no insert/update/delete operations.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::catalog::CATALOG;
use crate::error::StoreError;

/// Agronomic facts for one crop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropRecord {
    /// Cultivation steps, free text
    pub process: String,

    /// Sowing/harvesting window, e.g. "June to November"
    pub optimal_period: String,

    pub soil_type: String,

    /// Companion/rotation crop names. Plain strings, not keys into the store.
    pub rotation_strategies: Vec<String>,

    pub soil_health: String,
    pub water_management: String,

    /// Range with unit, e.g. "450-700 mm". Kept as text.
    pub water_requirement: String,

    /// Yield observations in recorded order. No years are attached.
    pub past_yields: Vec<f64>,
}

impl CropRecord {
    /// Check the record's fields, naming `crop` in any error.
    fn validate(&self, crop: &str) -> Result<(), StoreError> {
        let text_fields = [
            ("process", &self.process),
            ("optimal_period", &self.optimal_period),
            ("soil_type", &self.soil_type),
            ("soil_health", &self.soil_health),
            ("water_management", &self.water_management),
            ("water_requirement", &self.water_requirement),
        ];

        for (field, value) in text_fields {
            if value.trim().is_empty() {
                return Err(StoreError::MissingField {
                    crop: crop.to_string(),
                    field,
                });
            }
        }

        if self.rotation_strategies.is_empty()
            || self.rotation_strategies.iter().any(|s| s.trim().is_empty())
        {
            return Err(StoreError::EmptyRotation(crop.to_string()));
        }

        if self.past_yields.is_empty() || self.past_yields.iter().any(|y| !y.is_finite()) {
            return Err(StoreError::InvalidYields(crop.to_string()));
        }

        Ok(())
    }
}

/// A record together with its crop name (for listings and JSON output).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CropEntry<'a> {
    pub name: &'a str,
    #[serde(flatten)]
    pub record: &'a CropRecord,
}

/// The reference store.
#[derive(Debug, Clone)]
pub struct CropStore {
    records: FxHashMap<String, CropRecord>,
    /// Names in the order they were supplied (selection controls list these)
    order: Vec<String>,
}

impl CropStore {
    /// Build the store from the built-in crop catalog.
    pub fn builtin() -> Result<Self, StoreError> {
        let store = Self::from_records(
            CATALOG.iter().map(|entry| (entry.name, entry.to_record())),
        )?;
        tracing::debug!("Built crop store with {} crops", store.len());
        Ok(store)
    }

    /// Build a store from `(name, record)` pairs.
    ///
    /// Rejects empty or duplicate names and records with empty fields.
    pub fn from_records<I, S>(records: I) -> Result<Self, StoreError>
    where
        I: IntoIterator<Item = (S, CropRecord)>,
        S: Into<String>,
    {
        let mut map = FxHashMap::default();
        let mut order = Vec::new();

        for (name, record) in records {
            let name: String = name.into();
            if name.is_empty() {
                return Err(StoreError::EmptyName);
            }
            if map.contains_key(&name) {
                return Err(StoreError::DuplicateCrop(name));
            }
            record.validate(&name)?;

            order.push(name.clone());
            map.insert(name, record);
        }

        Ok(Self { records: map, order })
    }

    /// Exact, case-sensitive lookup. `None` when the crop is unknown.
    pub fn lookup(&self, name: &str) -> Option<&CropRecord> {
        self.records.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    /// Crop names in catalog order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// All entries in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = CropEntry<'_>> {
        self.order.iter().filter_map(|name| {
            self.records.get(name).map(|record| CropEntry {
                name: name.as_str(),
                record,
            })
        })
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> CropRecord {
        CropRecord {
            process: "Sow, weed, harvest.".to_string(),
            optimal_period: "March to May".to_string(),
            soil_type: "Loam".to_string(),
            rotation_strategies: vec!["Beans".to_string()],
            soil_health: "Add compost.".to_string(),
            water_management: "Water weekly.".to_string(),
            water_requirement: "300-400 mm".to_string(),
            past_yields: vec![1.0, 2.0],
        }
    }

    #[test]
    fn test_builtin_rice() {
        let store = CropStore::builtin().unwrap();
        let rice = store.lookup("Rice").unwrap();
        assert_eq!(rice.soil_type, "Clayey soil with good water retention");
        assert_eq!(rice.past_yields, vec![3.2, 3.5, 3.8, 3.6, 4.0]);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let store = CropStore::builtin().unwrap();
        assert!(store.lookup("rice").is_none());
        assert!(store.lookup("RICE").is_none());
        assert!(store.lookup(" Rice").is_none());
    }

    #[test]
    fn test_lookup_unknown() {
        let store = CropStore::builtin().unwrap();
        assert!(store.lookup("Kale").is_none());
        assert!(store.lookup("").is_none());
    }

    #[test]
    fn test_from_records_rejects_duplicates() {
        let err = CropStore::from_records(vec![
            ("Leek", sample_record()),
            ("Leek", sample_record()),
        ])
        .unwrap_err();
        assert_eq!(err, StoreError::DuplicateCrop("Leek".to_string()));
    }

    #[test]
    fn test_from_records_rejects_empty_name() {
        let err = CropStore::from_records(vec![("", sample_record())]).unwrap_err();
        assert_eq!(err, StoreError::EmptyName);
    }

    #[test]
    fn test_from_records_rejects_empty_field() {
        let mut record = sample_record();
        record.water_requirement = "  ".to_string();
        let err = CropStore::from_records(vec![("Leek", record)]).unwrap_err();
        assert_eq!(
            err,
            StoreError::MissingField { crop: "Leek".to_string(), field: "water_requirement" }
        );
    }

    #[test]
    fn test_from_records_rejects_bad_yields() {
        let mut record = sample_record();
        record.past_yields.clear();
        assert!(matches!(
            CropStore::from_records(vec![("Leek", record.clone())]),
            Err(StoreError::InvalidYields(_))
        ));

        record.past_yields = vec![1.0, f64::NAN];
        assert!(matches!(
            CropStore::from_records(vec![("Leek", record)]),
            Err(StoreError::InvalidYields(_))
        ));
    }

    #[test]
    fn test_from_records_rejects_empty_rotation() {
        let mut record = sample_record();
        record.rotation_strategies.clear();
        assert_eq!(
            CropStore::from_records(vec![("Leek", record)]).unwrap_err(),
            StoreError::EmptyRotation("Leek".to_string())
        );
    }

    #[test]
    fn test_names_keep_supplied_order() {
        let store = CropStore::from_records(vec![
            ("Leek", sample_record()),
            ("Celery", sample_record()),
            ("Asparagus", sample_record()),
        ])
        .unwrap();
        let names: Vec<&str> = store.names().collect();
        assert_eq!(names, vec!["Leek", "Celery", "Asparagus"]);
        assert_eq!(store.iter().count(), 3);
    }

    #[test]
    fn test_entry_serializes_flat() {
        let record = sample_record();
        let entry = CropEntry { name: "Leek", record: &record };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["name"], "Leek");
        assert_eq!(json["soil_type"], "Loam");
        assert_eq!(json["past_yields"][1], 2.0);
    }
}
