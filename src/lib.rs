//! # Duckfish
//!
//! 鴨子與魚的產品組合規劃：最大利潤求解、可行域圖與歷史銷售圖

pub mod logging;
pub mod report;

pub use duckfish_calc::{FeasibleRegion, FillCurve, ProfitModel, SalesReader};
pub use duckfish_chart::{ProfitChart, SalesChart};
pub use duckfish_core::{
    DuckfishError, ProductMix, ProductionPlan, Result, ResultTriple, SalesHistory,
    ScenarioParameters, UpdatedAssumptions,
};
pub use duckfish_optimizer::{OptimizationResult, PlanningPolicy, ProductMixOptimizer};
pub use report::{
    baseline_result_triple, compute_baseline_optimum, compute_feasible_region,
    compute_updated_optimum, generate_report, render_baseline_chart,
    render_historical_sales_chart, render_updated_chart, updated_result_triple, ReportSummary,
};
