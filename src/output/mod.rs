pub mod plan_writer;

use std::sync::Mutex;

use crate::error::{HouseLightsError, Result};
use crate::types::LightingPlan;

pub use plan_writer::JsonPlanWriter;

/// Receives finished plans and instantiates them in a scene.
///
/// Shared across the parallel batch runner, so implementations must be
/// `Sync` and take `&self`.
pub trait LightSink: Sync {
    fn compose(&self, plan: &LightingPlan) -> Result<()>;
}

/// Keeps every plan in memory.
#[derive(Debug, Default)]
pub struct CollectingSink {
    plans: Mutex<Vec<LightingPlan>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collected plans, sorted by house so parallel runs compare stably.
    pub fn into_plans(self) -> Vec<LightingPlan> {
        let mut plans = self
            .plans
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        plans.sort_by(|a, b| a.house.cmp(&b.house));
        plans
    }
}

impl LightSink for CollectingSink {
    fn compose(&self, plan: &LightingPlan) -> Result<()> {
        self.plans
            .lock()
            .map_err(|_| HouseLightsError::Output("plan collector lock poisoned".into()))?
            .push(plan.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(house: &str) -> LightingPlan {
        LightingPlan {
            house: house.into(),
            scale: 1.0,
            lights: vec![],
            ambient: vec![],
        }
    }

    #[test]
    fn collecting_sink_sorts_by_house() {
        let sink = CollectingSink::new();
        sink.compose(&plan("b")).unwrap();
        sink.compose(&plan("a")).unwrap();
        let houses: Vec<_> = sink.into_plans().into_iter().map(|p| p.house).collect();
        assert_eq!(houses, vec!["a", "b"]);
    }
}
