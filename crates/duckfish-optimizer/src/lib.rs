//! # Duckfish Optimizer
//!
//! 產品組合最佳化（線性規劃求解）

pub mod bounds;
pub mod solver;

// Re-export 主要類型
pub use bounds::{PlanningPolicy, ProductBounds, VariableBounds};
pub use solver::ProductMixOptimizer;

use duckfish_core::{ProductMix, ProductionPlan, ScenarioParameters};

/// 優化結果
#[derive(Debug, Clone)]
pub struct OptimizationResult {
    /// 使用的計劃政策
    pub policy: PlanningPolicy,

    /// 寫回求解結果後的情境參數
    pub scenario: ScenarioParameters,

    /// 四捨五入後的生產計劃
    pub plan: ProductionPlan,

    /// 求解器回傳的連續解
    pub continuous: ProductMix,

    /// 優化信息
    pub messages: Vec<String>,
}

impl OptimizationResult {
    /// 添加信息
    pub fn add_message(&mut self, message: String) {
        self.messages.push(message);
    }
}
