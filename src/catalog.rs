//! Built-in Crop Catalog
//!
//! The literal crop table the reference store is built from. Entries are
//! `'static` so the table lives in the binary's read-only data; the store
//! copies them into owned `CropRecord`s once at startup.

use crate::store::CropRecord;

/// One row of the embedded catalog.
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry {
    pub name: &'static str,
    pub process: &'static str,
    pub optimal_period: &'static str,
    pub soil_type: &'static str,
    pub rotation_strategies: &'static [&'static str],
    pub soil_health: &'static str,
    pub water_management: &'static str,
    pub water_requirement: &'static str,
    pub past_yields: &'static [f64],
}

impl CatalogEntry {
    pub fn to_record(&self) -> CropRecord {
        CropRecord {
            process: self.process.to_string(),
            optimal_period: self.optimal_period.to_string(),
            soil_type: self.soil_type.to_string(),
            rotation_strategies: self.rotation_strategies.iter().map(|s| s.to_string()).collect(),
            soil_health: self.soil_health.to_string(),
            water_management: self.water_management.to_string(),
            water_requirement: self.water_requirement.to_string(),
            past_yields: self.past_yields.to_vec(),
        }
    }
}

// ============================================================================
// EMBEDDED CROP TABLE
// Yields are in recorded order; units differ between grain, vegetable and
// cane crops and are not stated.
// ============================================================================

pub static CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        name: "Rice",
        process: "Land preparation, transplanting seedlings, water management, harvesting.",
        optimal_period: "June to November",
        soil_type: "Clayey soil with good water retention",
        rotation_strategies: &["Lentil", "Chickpea", "Mustard"],
        soil_health: "Incorporate green manure crops like Sesbania to enhance nitrogen content.",
        water_management: "Maintain 5 cm of standing water during vegetative growth.",
        water_requirement: "450-700 mm",
        past_yields: &[3.2, 3.5, 3.8, 3.6, 4.0],
    },
    CatalogEntry {
        name: "Wheat",
        process: "Soil tillage, sowing seeds, irrigation, and harvesting.",
        optimal_period: "November to April",
        soil_type: "Well-drained loamy soil",
        rotation_strategies: &["Mustard", "Pea", "Sunflower"],
        soil_health: "Rotate with legumes to improve soil fertility.",
        water_management: "Irrigate at crown root initiation, tillering, flowering, and grain filling stages.",
        water_requirement: "400-500 mm",
        past_yields: &[3.2, 3.5, 3.8, 4.0, 4.2, 4.5],
    },
    CatalogEntry {
        name: "Maize",
        process: "Land preparation, seed sowing, fertilization, and harvesting.",
        optimal_period: "June to October",
        soil_type: "Well-drained fertile soil",
        rotation_strategies: &["Soybean", "Blackgram", "Pea"],
        soil_health: "Use cover crops like clover to prevent soil erosion.",
        water_management: "Ensure adequate moisture during tasseling and silking stages.",
        water_requirement: "500-800 mm",
        past_yields: &[2.8, 3.0, 3.3, 3.5, 3.7, 4.0],
    },
    CatalogEntry {
        name: "Cotton",
        process: "Seed sowing, thinning, weeding, fertilization, and harvesting.",
        optimal_period: "April to September",
        soil_type: "Loamy soil with good drainage",
        rotation_strategies: &["Groundnut", "Soybean", "Maize"],
        soil_health: "Incorporate organic matter to maintain soil structure.",
        water_management: "Requires regular irrigation, especially during flowering and boll formation.",
        water_requirement: "700-1300 mm",
        past_yields: &[1.5, 1.7, 1.8, 2.0, 2.1, 2.3],
    },
    CatalogEntry {
        name: "Sugarcane",
        process: "Land preparation, sett planting, fertilization, irrigation, and harvesting.",
        optimal_period: "October to March",
        soil_type: "Deep, well-drained loamy soil",
        rotation_strategies: &["Pulses", "Vegetables", "Legumes"],
        soil_health: "Use trash mulching to conserve moisture and improve organic matter.",
        water_management: "Requires frequent irrigation; avoid waterlogging.",
        water_requirement: "1500-2500 mm",
        past_yields: &[65.0, 68.0, 70.0, 72.0, 75.0, 78.0],
    },
    CatalogEntry {
        name: "Carrot",
        process: "Seed sowing, thinning, weeding, and harvesting.",
        optimal_period: "October to December",
        soil_type: "Loose, sandy loam soil",
        rotation_strategies: &["Onions", "Garlic", "Tomato"],
        soil_health: "Maintain soil pH between 6.0 and 6.8 for optimal growth.",
        water_management: "Keep soil consistently moist; avoid waterlogging.",
        water_requirement: "350-500 mm",
        past_yields: &[20.0, 22.0, 24.0, 26.0, 28.0, 30.0],
    },
    CatalogEntry {
        name: "Beetroot",
        process: "Seed sowing, thinning, weeding, and harvesting.",
        optimal_period: "September to November",
        soil_type: "Well-drained loamy soil",
        rotation_strategies: &["Cabbage", "Lettuce", "Onion"],
        soil_health: "Incorporate compost to enhance soil fertility.",
        water_management: "Regular watering is essential; avoid drought stress.",
        water_requirement: "400-600 mm",
        past_yields: &[18.0, 19.0, 20.0, 21.0, 22.0, 23.0],
    },
    CatalogEntry {
        name: "Watermelon",
        process: "Seed sowing, vine training, weeding, and harvesting.",
        optimal_period: "January to March",
        soil_type: "Sandy loam soil with good drainage",
        rotation_strategies: &["Maize", "Sunflower", "Soybean"],
        soil_health: "Maintain soil pH between 6.0 and 7.5.",
        water_management: "Requires ample water during fruit development.",
        water_requirement: "600-800 mm",
        past_yields: &[25.0, 26.0, 28.0, 30.0, 32.0, 35.0],
    },
    CatalogEntry {
        name: "Tomato",
        process: "Seedling preparation, transplanting, staking, pruning, and harvesting.",
        optimal_period: "February to April",
        soil_type: "Well-drained sandy loam soil with rich organic matter",
        rotation_strategies: &["Carrots", "Onions", "Legumes"],
        soil_health: "Incorporate compost to improve soil structure and fertility.",
        water_management: "Regular watering; avoid wetting foliage to prevent diseases.",
        water_requirement: "400-600 mm",
        past_yields: &[35.0, 38.0, 40.0, 42.0, 45.0, 48.0],
    },
    CatalogEntry {
        name: "Onion",
        process: "Seed sowing, transplanting, weeding, and harvesting.",
        optimal_period: "November to February",
        soil_type: "Fertile, well-drained loamy soil",
        rotation_strategies: &["Carrots", "Lettuce", "Beetroot"],
        soil_health: "Maintain soil pH between 6.0 and 7.0.",
        water_management: "Consistent moisture is crucial; avoid water stress.",
        water_requirement: "350-550 mm",
        past_yields: &[25.0, 27.0, 28.0, 30.0, 32.0, 35.0],
    },
    CatalogEntry {
        name: "Garlic",
        process: "Clove planting, weeding, fertilization, and harvesting.",
        optimal_period: "October to December",
        soil_type: "Well-drained loamy soil with high organic matter",
        rotation_strategies: &["Tomatoes", "Peppers", "Eggplant"],
        soil_health: "Incorporate well-rotted manure to enhance fertility.",
        water_management: "Regular watering; reduce moisture as bulbs mature.",
        water_requirement: "400-600 mm",
        past_yields: &[10.0, 11.0, 12.0, 13.0, 14.0, 15.0],
    },
    CatalogEntry {
        name: "Cabbage",
        process: "Seedling preparation, transplanting, weeding, and harvesting.",
        optimal_period: "September to November",
        soil_type: "Fertile, well-drained loamy soil",
        rotation_strategies: &["Peas", "Beans", "Carrots"],
        soil_health: "Maintain soil pH between 6.5 and 7.5.",
        water_management: "Requires consistent moisture; mulch to conserve water.",
        water_requirement: "350-500 mm",
        past_yields: &[30.0, 32.0, 34.0, 36.0, 38.0, 40.0],
    },
    CatalogEntry {
        name: "Cauliflower",
        process: "Seedling preparation, transplanting, weeding, and harvesting.",
        optimal_period: "October to December",
        soil_type: "Well-drained loamy soil rich in organic matter",
        rotation_strategies: &["Tomatoes", "Lettuce", "Carrots"],
        soil_health: "Use compost and organic matter to improve soil structure.",
        water_management: "Regular watering to keep soil moist but not waterlogged.",
        water_requirement: "400-600 mm",
        past_yields: &[28.0, 29.0, 30.0, 31.0, 32.0, 34.0],
    },
    CatalogEntry {
        name: "Pumpkin",
        process: "Direct seed sowing, vine training, fertilization, and harvesting.",
        optimal_period: "February to April",
        soil_type: "Well-drained sandy loam soil with rich organic matter",
        rotation_strategies: &["Corn", "Beans", "Sunflowers"],
        soil_health: "Use mulch to retain moisture and control weeds.",
        water_management: "Requires frequent watering during fruit development.",
        water_requirement: "500-800 mm",
        past_yields: &[15.0, 16.0, 18.0, 20.0, 22.0, 24.0],
    },
    CatalogEntry {
        name: "Chickpea",
        process: "Soil preparation, direct seed sowing, weeding, and harvesting.",
        optimal_period: "October to November",
        soil_type: "Well-drained sandy loam soil",
        rotation_strategies: &["Maize", "Mustard", "Wheat"],
        soil_health: "Fixes nitrogen in the soil, improving fertility.",
        water_management: "Minimal irrigation required; avoid waterlogging.",
        water_requirement: "300-400 mm",
        past_yields: &[1.8, 2.0, 2.2, 2.5, 2.7, 3.0],
    },
    CatalogEntry {
        name: "Blackgram",
        process: "Land preparation, seed sowing, weeding, and harvesting.",
        optimal_period: "June to July",
        soil_type: "Fertile, well-drained loamy soil",
        rotation_strategies: &["Rice", "Wheat", "Maize"],
        soil_health: "Incorporate legume residues to improve soil nitrogen levels.",
        water_management: "Requires moderate watering; avoid excess moisture.",
        water_requirement: "350-500 mm",
        past_yields: &[1.2, 1.3, 1.5, 1.6, 1.7, 1.9],
    },
    CatalogEntry {
        name: "Pigeon Peas",
        process: "Direct seed sowing, weeding, fertilization, and harvesting.",
        optimal_period: "June to July",
        soil_type: "Well-drained sandy loam soil",
        rotation_strategies: &["Maize", "Wheat", "Rice"],
        soil_health: "Enhances soil fertility by fixing nitrogen.",
        water_management: "Requires deep watering at flowering and pod formation stages.",
        water_requirement: "500-700 mm",
        past_yields: &[2.5, 2.6, 2.8, 3.0, 3.2, 3.5],
    },
    CatalogEntry {
        name: "Soybean",
        process: "Land preparation, seed sowing, weeding, and harvesting.",
        optimal_period: "June to July",
        soil_type: "Well-drained fertile loamy soil",
        rotation_strategies: &["Maize", "Wheat", "Sunflower"],
        soil_health: "Fixes nitrogen in the soil, improving fertility.",
        water_management: "Requires consistent moisture; avoid waterlogging.",
        water_requirement: "500-700 mm",
        past_yields: &[2.8, 3.0, 3.3, 3.5, 3.7, 4.0],
    },
    CatalogEntry {
        name: "Mustard",
        process: "Soil tillage, direct seed sowing, fertilization, and harvesting.",
        optimal_period: "September to October",
        soil_type: "Well-drained loamy soil",
        rotation_strategies: &["Wheat", "Peas", "Lentils"],
        soil_health: "Use organic compost to improve soil fertility.",
        water_management: "Requires moderate irrigation at flowering and seed formation stages.",
        water_requirement: "350-500 mm",
        past_yields: &[1.5, 1.6, 1.8, 2.0, 2.1, 2.3],
    },
    CatalogEntry {
        name: "Groundnut",
        process: "Land preparation, seed sowing, weeding, and harvesting.",
        optimal_period: "June to July",
        soil_type: "Sandy loam soil with good drainage",
        rotation_strategies: &["Wheat", "Maize", "Pulses"],
        soil_health: "Incorporate crop residues to improve organic matter.",
        water_management: "Requires irrigation during flowering and pod development.",
        water_requirement: "500-700 mm",
        past_yields: &[2.5, 2.7, 2.9, 3.0, 3.2, 3.5],
    },
    CatalogEntry {
        name: "Peas",
        process: "Soil preparation, seed sowing, staking, and harvesting.",
        optimal_period: "October to December",
        soil_type: "Well-drained loamy soil",
        rotation_strategies: &["Carrots", "Lettuce", "Cabbage"],
        soil_health: "Improves soil nitrogen content through symbiotic fixation.",
        water_management: "Regular watering is essential, especially during flowering.",
        water_requirement: "350-500 mm",
        past_yields: &[20.0, 21.0, 22.0, 23.0, 24.0, 26.0],
    },
    CatalogEntry {
        name: "Potato",
        process: "Soil tillage, seed tuber planting, earthing up, and harvesting.",
        optimal_period: "October to December",
        soil_type: "Sandy loam soil rich in organic matter",
        rotation_strategies: &["Peas", "Carrots", "Cabbage"],
        soil_health: "Use well-rotted compost to enrich soil fertility.",
        water_management: "Requires frequent irrigation; avoid waterlogging.",
        water_requirement: "500-800 mm",
        past_yields: &[35.0, 38.0, 40.0, 42.0, 45.0, 48.0],
    },
    CatalogEntry {
        name: "Sunflower",
        process: "Seed sowing, fertilization, weeding, and harvesting.",
        optimal_period: "February to March",
        soil_type: "Well-drained loamy soil",
        rotation_strategies: &["Wheat", "Maize", "Soybean"],
        soil_health: "Use crop residues to maintain soil organic matter.",
        water_management: "Requires irrigation during flowering and seed filling.",
        water_requirement: "400-600 mm",
        past_yields: &[1.8, 2.0, 2.2, 2.3, 2.5, 2.7],
    },
];
