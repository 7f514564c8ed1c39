//! 計劃政策與變數邊界

use duckfish_core::{to_f64, DuckfishError, Result, ScenarioParameters, UpdatedAssumptions};
use serde::{Deserialize, Serialize};

/// 單一變數的區間 [lower, upper]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VariableBounds {
    pub lower: f64,
    pub upper: f64,
}

impl VariableBounds {
    pub fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    /// 是否包含 value（容許浮點誤差）
    pub fn contains(&self, value: f64, tolerance: f64) -> bool {
        value >= self.lower - tolerance && value <= self.upper + tolerance
    }

    /// 區間內最小的整數
    pub fn min_integer(&self) -> f64 {
        self.lower.ceil()
    }
}

/// 兩種產品的邊界
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProductBounds {
    pub ducks: VariableBounds,
    pub fish: VariableBounds,
}

impl ProductBounds {
    fn checked(ducks: VariableBounds, fish: VariableBounds) -> Result<Self> {
        for (name, bounds) in [("ducks", ducks), ("fish", fish)] {
            if bounds.lower > bounds.upper {
                return Err(DuckfishError::InfeasiblePlan(format!(
                    "{} 的下限 {} 大於上限 {}",
                    name, bounds.lower, bounds.upper
                )));
            }
        }
        Ok(Self { ducks, fish })
    }
}

/// 計劃政策
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PlanningPolicy {
    /// 初始假設：鴨子 ∈ [0, 鴨子時間上限]，魚 ∈ [0, 魚時間上限]
    Baseline,
    /// 更新假設：鴨子 ∈ [0, max_ducks]，魚 ∈ [min_fish, 魚時間上限]
    Updated(UpdatedAssumptions),
}

impl PlanningPolicy {
    /// 以預設更新假設建立更新政策
    pub fn updated() -> Self {
        PlanningPolicy::Updated(UpdatedAssumptions::default())
    }

    pub fn name(&self) -> &'static str {
        match self {
            PlanningPolicy::Baseline => "baseline",
            PlanningPolicy::Updated(_) => "updated",
        }
    }

    /// 計算變數邊界
    pub fn bounds(&self, params: &ScenarioParameters) -> Result<ProductBounds> {
        let time_for_ducks = to_f64(params.time_for_ducks, "time_for_ducks")?;
        let time_for_fish = to_f64(params.time_for_fish, "time_for_fish")?;

        match self {
            PlanningPolicy::Baseline => ProductBounds::checked(
                VariableBounds::new(0.0, time_for_ducks),
                VariableBounds::new(0.0, time_for_fish),
            ),
            PlanningPolicy::Updated(assumptions) => ProductBounds::checked(
                VariableBounds::new(0.0, to_f64(assumptions.max_ducks, "max_ducks")?),
                VariableBounds::new(to_f64(assumptions.min_fish, "min_fish")?, time_for_fish),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_baseline_bounds() {
        let bounds = PlanningPolicy::Baseline
            .bounds(&ScenarioParameters::default())
            .unwrap();

        assert_eq!(bounds.ducks, VariableBounds::new(0.0, 400.0));
        assert_eq!(bounds.fish, VariableBounds::new(0.0, 300.0));
    }

    #[test]
    fn test_updated_bounds() {
        let bounds = PlanningPolicy::updated()
            .bounds(&ScenarioParameters::default())
            .unwrap();

        assert_eq!(bounds.ducks, VariableBounds::new(0.0, 150.0));
        assert_eq!(bounds.fish, VariableBounds::new(50.0, 300.0));
    }

    #[test]
    fn test_crossed_bounds_are_infeasible() {
        let params = ScenarioParameters::default().with_time_for_fish(Decimal::from(40));

        assert!(matches!(
            PlanningPolicy::updated().bounds(&params),
            Err(DuckfishError::InfeasiblePlan(_))
        ));
    }

    #[test]
    fn test_contains_with_tolerance() {
        let bounds = VariableBounds::new(50.0, 300.0);

        assert!(bounds.contains(49.9999999, 1e-6));
        assert!(!bounds.contains(49.0, 1e-6));
        assert_eq!(VariableBounds::new(49.5, 60.0).min_integer(), 50.0);
    }
}
