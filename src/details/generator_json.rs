//! Crop Details Generator (JSON)
//!
//! Builds a `CropDetailsView` from a record, for the API and `--json` CLI output.

use crate::details::sections::s1_cultivation::cultivation_steps;
use crate::details::sections::s3_rotation::rotation_partners;
use crate::details::sections::s4_yield_trend::{sparkline, YieldTrend};
use crate::details::view_models::{
    CropDetailsView, CultivationView, SoilWaterView, YieldPoint, YieldView,
};
use crate::store::{CropRecord, CropStore};

/// Generate the details view for a crop.
///
/// `store` is only used to mark rotation partners that have their own entry.
pub fn generate_details_data(
    name: &str,
    record: &CropRecord,
    store: Option<&CropStore>,
) -> CropDetailsView {
    let cultivation = CultivationView {
        optimal_period: record.optimal_period.clone(),
        process: record.process.clone(),
        steps: cultivation_steps(&record.process),
    };

    let soil_water = SoilWaterView {
        soil_type: record.soil_type.clone(),
        soil_health: record.soil_health.clone(),
        water_requirement: record.water_requirement.clone(),
        water_management: record.water_management.clone(),
    };

    let points = record
        .past_yields
        .iter()
        .enumerate()
        .map(|(i, &value)| YieldPoint { index: i + 1, value })
        .collect();

    let yields = YieldView {
        points,
        sparkline: sparkline(&record.past_yields),
        trend: YieldTrend::from_yields(&record.past_yields),
    };

    CropDetailsView {
        name: name.to_string(),
        cultivation,
        soil_water,
        rotation: rotation_partners(record, store),
        yields,
    }
}
