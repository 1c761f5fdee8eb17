//! Crop details section modules.

pub mod s1_cultivation;
pub mod s2_soil_water;
pub mod s3_rotation;
pub mod s4_yield_trend;
