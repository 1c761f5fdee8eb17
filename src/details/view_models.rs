//! View Models for the Crop Details API
//!
//! Structured data types for JSON API responses.

use serde::Serialize;

use crate::details::sections::s3_rotation::RotationPartner;
use crate::details::sections::s4_yield_trend::YieldTrend;

/// Complete details page for one crop
#[derive(Debug, Clone, Serialize)]
pub struct CropDetailsView {
    pub name: String,
    pub cultivation: CultivationView,
    pub soil_water: SoilWaterView,
    pub rotation: Vec<RotationPartner>,
    pub yields: YieldView,
}

// ============================================================================
// S1: Cultivation
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct CultivationView {
    pub optimal_period: String,
    pub process: String,
    pub steps: Vec<String>,
}

// ============================================================================
// S2: Soil and Water
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct SoilWaterView {
    pub soil_type: String,
    pub soil_health: String,
    pub water_requirement: String,
    pub water_management: String,
}

// ============================================================================
// S4: Past Yield Trends
// ============================================================================

/// One plotted point; `index` is 1-based position in the recorded series
#[derive(Debug, Clone, Copy, Serialize)]
pub struct YieldPoint {
    pub index: usize,
    pub value: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct YieldView {
    pub points: Vec<YieldPoint>,
    pub sparkline: String,
    pub trend: Option<YieldTrend>,
}
