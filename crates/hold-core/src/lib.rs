pub mod angles;
pub mod drift;
pub mod engine;
pub mod error;
pub mod format;
pub mod geometry;
pub mod heading;
pub mod input;
pub mod models;
pub mod rules;
pub mod timing;
pub mod wind;

pub use engine::compute_hold;
pub use error::{HoldError, Result};
pub use format::HoldDisplay;
pub use geometry::{Gate, GateMarker, HoldGeometry, PatternSegment, Point, WindArrow};
pub use input::{parse_wind, InputField, RawInputs};
pub use models::{
    AltitudeBand, ClockFactor, DriftResult, HoldInputs, HoldSolution, OutboundCorrection,
    TimingResult, WindVector,
};
pub use rules::{FactorTable, HoldRules};
pub use wind::RoundedWind;
