//! 報表使用的入口函數
//!
//! 每個函數都以明確傳入的情境參數計算，求解結果以新的情境參數回傳，
//! 不修改呼叫者持有的參數。

use duckfish_calc::{FeasibleRegion, SalesReader};
use duckfish_chart::{ProfitChart, SalesChart, DEFAULT_SIZE};
use duckfish_core::{Result, ResultTriple, SalesHistory, ScenarioParameters, UpdatedAssumptions};
use duckfish_optimizer::{OptimizationResult, PlanningPolicy, ProductMixOptimizer};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// 基準圖檔名
pub const BASELINE_CHART: &str = "maximal_profit.svg";
/// 更新計劃圖檔名
pub const UPDATED_CHART: &str = "updated_plan.svg";
/// 歷史銷售圖檔名
pub const SALES_CHART: &str = "historical_sales.svg";

/// 計算可行域邊界
pub fn compute_feasible_region(params: &ScenarioParameters) -> Result<FeasibleRegion> {
    FeasibleRegion::compute(params)
}

/// 以初始假設求解
pub fn compute_baseline_optimum(params: &ScenarioParameters) -> Result<OptimizationResult> {
    ProductMixOptimizer::solve(params, PlanningPolicy::Baseline)
}

/// 以更新假設求解
pub fn compute_updated_optimum(
    params: &ScenarioParameters,
    assumptions: UpdatedAssumptions,
) -> Result<OptimizationResult> {
    ProductMixOptimizer::solve(params, PlanningPolicy::Updated(assumptions))
}

/// 求解初始假設並繪製最大利潤圖
pub fn render_baseline_chart(params: &ScenarioParameters, path: &Path) -> Result<OptimizationResult> {
    let result = compute_baseline_optimum(params)?;
    ProfitChart::from_scenario(&result.scenario)?.render_svg(path, DEFAULT_SIZE)?;
    Ok(result)
}

/// 求解更新假設並繪製最大利潤圖
pub fn render_updated_chart(
    params: &ScenarioParameters,
    assumptions: UpdatedAssumptions,
    path: &Path,
) -> Result<OptimizationResult> {
    let result = compute_updated_optimum(params, assumptions)?;
    ProfitChart::from_scenario(&result.scenario)?.render_svg(path, DEFAULT_SIZE)?;
    Ok(result)
}

/// 讀取歷史銷售並繪圖
pub fn render_historical_sales_chart(input: &Path, path: &Path) -> Result<SalesHistory> {
    let history = SalesReader::read(input)?;
    SalesChart::new(&history)?.render_svg(path, DEFAULT_SIZE)?;
    Ok(history)
}

/// 初始假設的 [鴨子, 魚, 總利潤]
pub fn baseline_result_triple(params: &ScenarioParameters) -> Result<ResultTriple> {
    compute_baseline_optimum(params)?.plan.triple()
}

/// 更新假設的 [鴨子, 魚, 總利潤]
pub fn updated_result_triple(
    params: &ScenarioParameters,
    assumptions: UpdatedAssumptions,
) -> Result<ResultTriple> {
    compute_updated_optimum(params, assumptions)?.plan.triple()
}

/// 報表產出摘要
#[derive(Debug, Clone, Serialize)]
pub struct ReportSummary {
    pub baseline: ResultTriple,
    pub updated: ResultTriple,
    pub figures: Vec<PathBuf>,
}

/// 產出報表所需的全部圖檔與結果
///
/// 依序：基準圖、更新計劃圖、歷史銷售圖。任何一步失敗即中止。
pub fn generate_report(
    params: &ScenarioParameters,
    assumptions: UpdatedAssumptions,
    sales_input: &Path,
    out_dir: &Path,
) -> Result<ReportSummary> {
    tracing::info!("產出報表圖檔至 {}", out_dir.display());
    std::fs::create_dir_all(out_dir)?;

    let baseline_path = out_dir.join(BASELINE_CHART);
    let baseline = render_baseline_chart(params, &baseline_path)?;

    let updated_path = out_dir.join(UPDATED_CHART);
    let updated = render_updated_chart(&baseline.scenario, assumptions, &updated_path)?;

    let sales_path = out_dir.join(SALES_CHART);
    render_historical_sales_chart(sales_input, &sales_path)?;

    Ok(ReportSummary {
        baseline: baseline.plan.triple()?,
        updated: updated.plan.triple()?,
        figures: vec![baseline_path, updated_path, sales_path],
    })
}
