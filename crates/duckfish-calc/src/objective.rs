//! 目標函數與飼料限制

use duckfish_core::{to_f64, ProductMix, Result, ScenarioParameters};

/// 目標方向
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectiveSense {
    /// 最大化（sign = 1）
    Maximize,
    /// 最小化形式（sign = -1），供最小化求解器使用
    Minimize,
}

impl ObjectiveSense {
    pub fn sign(self) -> f64 {
        match self {
            ObjectiveSense::Maximize => 1.0,
            ObjectiveSense::Minimize => -1.0,
        }
    }
}

/// 利潤模型（情境參數的浮點係數）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfitModel {
    pub profit_per_duck: f64,
    pub profit_per_fish: f64,
    pub pellets_per_duck: f64,
    pub pellets_per_fish: f64,
    pub pellet_supply: f64,
}

impl ProfitModel {
    /// 從情境參數建立
    pub fn from_scenario(params: &ScenarioParameters) -> Result<Self> {
        params.validate()?;

        Ok(Self {
            profit_per_duck: to_f64(params.profit_per_duck, "profit_per_duck")?,
            profit_per_fish: to_f64(params.profit_per_fish, "profit_per_fish")?,
            pellets_per_duck: to_f64(params.pellets_per_duck, "pellets_per_duck")?,
            pellets_per_fish: to_f64(params.pellets_per_fish, "pellets_per_fish")?,
            pellet_supply: to_f64(params.pellet_supply, "pellet_supply")?,
        })
    }

    /// 目標函數：sign × (鴨子 × 單位利潤 + 魚 × 單位利潤)
    pub fn objective(&self, x: ProductMix, sense: ObjectiveSense) -> f64 {
        sense.sign() * self.profit(x)
    }

    /// 組合的總利潤
    pub fn profit(&self, x: ProductMix) -> f64 {
        x.ducks * self.profit_per_duck + x.fish * self.profit_per_fish
    }

    /// 飼料限制：供應量 − 消耗量，可行時 ≥ 0
    pub fn constraint(&self, x: ProductMix) -> f64 {
        self.pellet_supply - self.pellets_used(x)
    }

    /// 組合消耗的飼料
    pub fn pellets_used(&self, x: ProductMix) -> f64 {
        x.ducks * self.pellets_per_duck + x.fish * self.pellets_per_fish
    }

    /// 是否滿足飼料限制（容許浮點誤差）
    pub fn satisfies_supply(&self, x: ProductMix, tolerance: f64) -> bool {
        self.constraint(x) >= -tolerance
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn model() -> ProfitModel {
        ProfitModel::from_scenario(&ScenarioParameters::default()).unwrap()
    }

    #[rstest]
    #[case(0.0, 0.0, 0.0)]
    #[case(100.0, 100.0, 900.0)]
    #[case(400.0, 80.0, 2320.0)]
    #[case(150.0, 280.0, 1870.0)]
    fn test_objective_is_linear(#[case] ducks: f64, #[case] fish: f64, #[case] expected: f64) {
        let model = model();
        let x = ProductMix::new(ducks, fish);

        assert_eq!(model.objective(x, ObjectiveSense::Maximize), expected);
        assert_eq!(model.objective(x, ObjectiveSense::Minimize), -expected);
    }

    #[test]
    fn test_constraint_formula() {
        let model = model();

        // 50000 - (100*100 + 100*125) = 27500
        assert_eq!(model.constraint(ProductMix::new(100.0, 100.0)), 27500.0);
        assert_eq!(model.pellets_used(ProductMix::new(400.0, 80.0)), 50000.0);
    }

    #[test]
    fn test_constraint_is_zero_at_supply_line_endpoints() {
        let model = model();

        // 只生產鴨子：50000 / 100 = 500
        assert_eq!(model.constraint(ProductMix::new(500.0, 0.0)), 0.0);
        // 只生產魚：50000 / 125 = 400
        assert_eq!(model.constraint(ProductMix::new(0.0, 400.0)), 0.0);
    }

    #[test]
    fn test_satisfies_supply() {
        let model = model();

        assert!(model.satisfies_supply(ProductMix::new(400.0, 80.0), 1e-6));
        assert!(!model.satisfies_supply(ProductMix::new(400.0, 81.0), 1e-6));
    }

    #[test]
    fn test_invalid_scenario_is_rejected() {
        let params = ScenarioParameters::default()
            .with_pellets_per_unit(rust_decimal::Decimal::ZERO, rust_decimal::Decimal::ONE);

        assert!(ProfitModel::from_scenario(&params).is_err());
    }
}
