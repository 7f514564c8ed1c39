//! 產品組合求解器

use duckfish_calc::{ObjectiveSense, ProfitModel};
use duckfish_core::{
    from_f64, to_f64, DuckfishError, ProductMix, ProductionPlan, Result, ScenarioParameters,
};
use good_lp::{
    constraint, default_solver, variable, variables, Expression, Solution, SolverModel,
};

use crate::bounds::{PlanningPolicy, ProductBounds};
use crate::OptimizationResult;

/// 可行性檢查的浮點容差
const TOLERANCE: f64 = 1e-6;

/// 產品組合最佳化器
pub struct ProductMixOptimizer;

impl ProductMixOptimizer {
    /// 求解最大利潤
    ///
    /// 以 sign = -1 的目標函數交給最小化求解器，結果四捨五入為整數後
    /// 寫回新的情境參數。求解器失敗、連續解違反邊界或飼料限制時回傳錯誤。
    pub fn solve(
        params: &ScenarioParameters,
        policy: PlanningPolicy,
    ) -> Result<OptimizationResult> {
        let model = ProfitModel::from_scenario(params)?;
        let bounds = policy.bounds(params)?;

        let initial_guess = ProductMix::new(
            to_f64(params.ducks_to_produce, "ducks_to_produce")?,
            to_f64(params.fish_to_produce, "fish_to_produce")?,
        );

        tracing::info!(
            "開始求解（{}）：鴨子 ∈ [{}, {}]，魚 ∈ [{}, {}]",
            policy.name(),
            bounds.ducks.lower,
            bounds.ducks.upper,
            bounds.fish.lower,
            bounds.fish.upper
        );
        tracing::debug!(
            "初始猜測：鴨子 {}，魚 {}，利潤 {}",
            initial_guess.ducks,
            initial_guess.fish,
            model.profit(initial_guess)
        );

        let continuous = Self::solve_lp(&model, &bounds)?;
        Self::check_feasible(&model, &bounds, continuous)?;

        let mut messages = Vec::new();
        let (rounded, rounded_down) = Self::round_plan(&model, &bounds, continuous)?;

        // 總利潤取最小化目標值的相反數
        let total_profit = if rounded_down {
            messages.push(format!(
                "四捨五入後違反飼料限制，改為無條件捨去：鴨子 {}，魚 {}",
                rounded.ducks, rounded.fish
            ));
            model.profit(rounded)
        } else {
            -model.objective(continuous, ObjectiveSense::Minimize)
        };

        let plan = ProductionPlan::new(
            from_f64(rounded.ducks, "ducks")?,
            from_f64(rounded.fish, "fish")?,
            from_f64(total_profit.round(), "total_profit")?,
        )
        .with_rounded_down(rounded_down);

        tracing::info!(
            "求解完成（{}）：鴨子 {}，魚 {}，總利潤 {}",
            policy.name(),
            plan.ducks,
            plan.fish,
            plan.total_profit
        );

        Ok(OptimizationResult {
            policy,
            scenario: params.with_plan(&plan),
            plan,
            continuous,
            messages,
        })
    }

    /// 線性規劃求解（連續解）
    fn solve_lp(model: &ProfitModel, bounds: &ProductBounds) -> Result<ProductMix> {
        let mut vars = variables!();
        let ducks = vars.add(variable().min(bounds.ducks.lower).max(bounds.ducks.upper));
        let fish = vars.add(variable().min(bounds.fish.lower).max(bounds.fish.upper));

        let sign = ObjectiveSense::Minimize.sign();
        let objective: Expression =
            (sign * model.profit_per_duck) * ducks + (sign * model.profit_per_fish) * fish;

        let pellets_per_duck = model.pellets_per_duck;
        let pellets_per_fish = model.pellets_per_fish;
        let pellet_supply = model.pellet_supply;

        let solution = vars
            .minimise(objective)
            .using(default_solver)
            .with(constraint!(
                pellets_per_duck * ducks + pellets_per_fish * fish <= pellet_supply
            ))
            .solve()
            .map_err(|e| DuckfishError::OptimizationFailed(e.to_string()))?;

        let result = ProductMix::new(solution.value(ducks), solution.value(fish));
        tracing::debug!("連續解：鴨子 {}，魚 {}", result.ducks, result.fish);

        if !(result.ducks.is_finite() && result.fish.is_finite()) {
            return Err(DuckfishError::OptimizationFailed(format!(
                "求解器回傳非有限值：{:?}",
                result
            )));
        }

        Ok(result)
    }

    /// 檢查連續解是否在邊界內且滿足飼料限制
    fn check_feasible(model: &ProfitModel, bounds: &ProductBounds, x: ProductMix) -> Result<()> {
        if !bounds.ducks.contains(x.ducks, TOLERANCE) || !bounds.fish.contains(x.fish, TOLERANCE) {
            return Err(DuckfishError::InfeasiblePlan(format!(
                "解超出邊界：鴨子 {}，魚 {}",
                x.ducks, x.fish
            )));
        }

        if !model.satisfies_supply(x, TOLERANCE) {
            return Err(DuckfishError::InfeasiblePlan(format!(
                "解違反飼料限制：剩餘 {}",
                model.constraint(x)
            )));
        }

        Ok(())
    }

    /// 四捨五入為整數；若因此違反限制則改為捨去（不低於下限）
    fn round_plan(
        model: &ProfitModel,
        bounds: &ProductBounds,
        continuous: ProductMix,
    ) -> Result<(ProductMix, bool)> {
        let rounded = ProductMix::new(continuous.ducks.round(), continuous.fish.round());
        if Self::is_integer_feasible(model, bounds, rounded) {
            return Ok((rounded, false));
        }

        let floored = ProductMix::new(
            continuous.ducks.floor().max(bounds.ducks.min_integer()),
            continuous.fish.floor().max(bounds.fish.min_integer()),
        );
        tracing::warn!(
            "四捨五入解 ({}, {}) 不可行，改用 ({}, {})",
            rounded.ducks,
            rounded.fish,
            floored.ducks,
            floored.fish
        );

        if Self::is_integer_feasible(model, bounds, floored) {
            Ok((floored, true))
        } else {
            Err(DuckfishError::InfeasiblePlan(format!(
                "找不到可行的整數計劃：鴨子 {}，魚 {}",
                continuous.ducks, continuous.fish
            )))
        }
    }

    fn is_integer_feasible(model: &ProfitModel, bounds: &ProductBounds, x: ProductMix) -> bool {
        bounds.ducks.contains(x.ducks, 0.0)
            && bounds.fish.contains(x.fish, 0.0)
            && model.satisfies_supply(x, 0.0)
    }
}
