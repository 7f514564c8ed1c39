//! # Duckfish Core
//!
//! 核心資料模型與類型定義

pub mod plan;
pub mod sales;
pub mod scenario;

// Re-export 主要類型
pub use plan::{ProductMix, ProductionPlan, ResultTriple};
pub use sales::{SalesHistory, SalesRecord};
pub use scenario::{ScenarioParameters, UpdatedAssumptions};

/// 規劃錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum DuckfishError {
    #[error("無效的參數: {0}")]
    InvalidParameter(String),

    #[error("最佳化失敗: {0}")]
    OptimizationFailed(String),

    #[error("求解結果不可行: {0}")]
    InfeasiblePlan(String),

    #[error("退化的幾何邊界: {0}")]
    DegenerateGeometry(String),

    #[error("計算錯誤: {0}")]
    CalculationError(String),

    #[error("找不到銷售資料檔: {0}")]
    SalesFileNotFound(String),

    #[error("銷售資料格式錯誤（第 {row} 列）: {message}")]
    MalformedSalesFile { row: usize, message: String },

    #[error("I/O 錯誤: {0}")]
    Io(#[from] std::io::Error),

    #[error("圖表繪製錯誤: {0}")]
    Render(String),

    #[error("配置錯誤: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, DuckfishError>;

/// `Decimal` 轉 `f64`（求解器與幾何運算使用浮點）
pub fn to_f64(value: rust_decimal::Decimal, what: &str) -> Result<f64> {
    use rust_decimal::prelude::ToPrimitive;

    value
        .to_f64()
        .ok_or_else(|| DuckfishError::CalculationError(format!("{} 無法轉換為浮點數: {}", what, value)))
}

/// `f64` 轉 `Decimal`，非有限值視為計算錯誤
pub fn from_f64(value: f64, what: &str) -> Result<rust_decimal::Decimal> {
    if !value.is_finite() {
        return Err(DuckfishError::CalculationError(format!(
            "{} 不是有限值: {}",
            what, value
        )));
    }

    rust_decimal::Decimal::from_f64_retain(value)
        .ok_or_else(|| DuckfishError::CalculationError(format!("{} 超出數值範圍: {}", what, value)))
}
