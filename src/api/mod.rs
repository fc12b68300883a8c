mod config;
mod emission;
mod engine;
mod json_contract;
mod plan;
mod sparkline;
mod validation;

pub use config::{BarOptions, SparklineConfig, SparklineStyle, SparklineVariant};
pub use emission::{BarEmission, DrawEmission, LineEmission, emit_frame};
pub use engine::SparklineEngine;
pub use json_contract::{DRAW_PLAN_JSON_SCHEMA_V1, DrawPlanJsonContractV1};
pub use plan::{DrawPlan, PlotShape};
pub use sparkline::Sparkline;
