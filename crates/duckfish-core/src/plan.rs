//! 生產計劃模型

use chrono::{DateTime, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{DuckfishError, Result};

/// 求解空間中的產品組合向量（鴨子, 魚）
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ProductMix {
    pub ducks: f64,
    pub fish: f64,
}

impl ProductMix {
    pub fn new(ducks: f64, fish: f64) -> Self {
        Self { ducks, fish }
    }
}

/// 生產計劃（求解結果，已四捨五入為整數）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductionPlan {
    /// 計劃ID
    pub id: Uuid,

    /// 鴨子產量
    pub ducks: Decimal,

    /// 魚產量
    pub fish: Decimal,

    /// 總利潤
    pub total_profit: Decimal,

    /// 求解時間
    pub solved_at: DateTime<Utc>,

    /// 是否因四捨五入違反飼料限制而改為無條件捨去
    pub rounded_down: bool,
}

impl ProductionPlan {
    /// 創建新的生產計劃
    pub fn new(ducks: Decimal, fish: Decimal, total_profit: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            ducks,
            fish,
            total_profit,
            solved_at: Utc::now(),
            rounded_down: false,
        }
    }

    /// 建構器模式：標記為捨去調整
    pub fn with_rounded_down(mut self, rounded_down: bool) -> Self {
        self.rounded_down = rounded_down;
        self
    }

    /// 是否與另一計劃的數量相同（忽略 ID 與時間）
    pub fn same_quantities(&self, other: &ProductionPlan) -> bool {
        self.ducks == other.ducks
            && self.fish == other.fish
            && self.total_profit == other.total_profit
    }

    /// 轉為 [鴨子, 魚, 總利潤] 三元組
    pub fn triple(&self) -> Result<ResultTriple> {
        let to_int = |value: Decimal, what: &str| {
            value.round().to_i64().ok_or_else(|| {
                DuckfishError::CalculationError(format!("{} 超出整數範圍: {}", what, value))
            })
        };

        Ok(ResultTriple([
            to_int(self.ducks, "ducks")?,
            to_int(self.fish, "fish")?,
            to_int(self.total_profit, "total_profit")?,
        ]))
    }
}

/// 報表使用的結果三元組 [鴨子, 魚, 總利潤]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultTriple(pub [i64; 3]);

impl ResultTriple {
    pub fn ducks(&self) -> i64 {
        self.0[0]
    }

    pub fn fish(&self) -> i64 {
        self.0[1]
    }

    pub fn total_profit(&self) -> i64 {
        self.0[2]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_plan() {
        let plan = ProductionPlan::new(Decimal::from(400), Decimal::from(80), Decimal::from(2320));

        assert_eq!(plan.ducks, Decimal::from(400));
        assert!(!plan.rounded_down);
        assert_eq!(plan.triple().unwrap(), ResultTriple([400, 80, 2320]));
    }

    #[test]
    fn test_same_quantities_ignores_identity() {
        let a = ProductionPlan::new(Decimal::from(150), Decimal::from(280), Decimal::from(1870));
        let b = ProductionPlan::new(Decimal::from(150), Decimal::from(280), Decimal::from(1870));

        assert_ne!(a.id, b.id);
        assert!(a.same_quantities(&b));
    }

    #[test]
    fn test_triple_serializes_as_array() {
        let triple = ResultTriple([150, 280, 1870]);
        let json = serde_json::to_string(&triple).unwrap();

        assert_eq!(json, "[150,280,1870]");
        assert_eq!(triple.ducks(), 150);
        assert_eq!(triple.fish(), 280);
        assert_eq!(triple.total_profit(), 1870);
    }
}
