use serde::{Deserialize, Serialize};

use crate::error::{SparklineError, SparklineResult};

use super::{DrawPlan, SparklineConfig};

pub const DRAW_PLAN_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawPlanJsonContractV1 {
    pub schema_version: u32,
    pub plan: DrawPlan,
}

impl SparklineConfig {
    /// Parses and validates a configuration document.
    ///
    /// Missing fields take their defaults; unknown fields are rejected.
    pub fn from_json_str(input: &str) -> SparklineResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            SparklineError::InvalidConfig(format!("failed to parse sparkline config json: {e}"))
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> SparklineResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            SparklineError::InvalidData(format!("failed to serialize sparkline config: {e}"))
        })
    }
}

impl DrawPlan {
    pub fn to_json_contract_v1_pretty(&self) -> SparklineResult<String> {
        let payload = DrawPlanJsonContractV1 {
            schema_version: DRAW_PLAN_JSON_SCHEMA_V1,
            plan: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            SparklineError::InvalidData(format!("failed to serialize draw plan contract v1: {e}"))
        })
    }

    /// Accepts either a bare plan or a versioned v1 contract payload.
    pub fn from_json_compat_str(input: &str) -> SparklineResult<Self> {
        if let Ok(plan) = serde_json::from_str::<DrawPlan>(input) {
            return Ok(plan);
        }
        let payload: DrawPlanJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            SparklineError::InvalidData(format!("failed to parse draw plan json payload: {e}"))
        })?;
        if payload.schema_version != DRAW_PLAN_JSON_SCHEMA_V1 {
            return Err(SparklineError::InvalidData(format!(
                "unsupported draw plan schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.plan)
    }
}
