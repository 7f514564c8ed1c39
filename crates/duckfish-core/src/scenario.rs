//! 情境參數模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::{DuckfishError, ProductionPlan, Result};

/// 情境參數（產能、單位成本/利潤、目前的生產計劃）
///
/// 所有欄位皆有預設值，JSON 配置檔只需覆寫需要變動的欄位。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioParameters {
    /// 鴨子的生產時間上限（件）
    pub time_for_ducks: Decimal,

    /// 魚的生產時間上限（件）
    pub time_for_fish: Decimal,

    /// 鴨子生產目標（求解後覆寫）
    pub ducks_to_produce: Decimal,

    /// 魚生產目標（求解後覆寫）
    pub fish_to_produce: Decimal,

    /// 每隻鴨子消耗的飼料顆粒
    pub pellets_per_duck: Decimal,

    /// 每條魚消耗的飼料顆粒
    pub pellets_per_fish: Decimal,

    /// 飼料顆粒總供應量
    pub pellet_supply: Decimal,

    /// 每隻鴨子利潤
    pub profit_per_duck: Decimal,

    /// 每條魚利潤
    pub profit_per_fish: Decimal,

    /// 最近一次計算的總利潤
    pub total_profit: Decimal,
}

impl Default for ScenarioParameters {
    fn default() -> Self {
        Self {
            time_for_ducks: Decimal::from(400),
            time_for_fish: Decimal::from(300),
            ducks_to_produce: Decimal::from(100),
            fish_to_produce: Decimal::from(100),
            pellets_per_duck: Decimal::from(100),
            pellets_per_fish: Decimal::from(125),
            pellet_supply: Decimal::from(50000),
            profit_per_duck: Decimal::from(5),
            profit_per_fish: Decimal::from(4),
            total_profit: Decimal::from(900),
        }
    }
}

impl ScenarioParameters {
    /// 從 JSON 字串載入（未提供的欄位使用預設值）
    pub fn from_json_str(json: &str) -> Result<Self> {
        let params: Self = serde_json::from_str(json)
            .map_err(|e| DuckfishError::Config(format!("情境參數解析失敗: {}", e)))?;
        params.validate()?;
        Ok(params)
    }

    /// 從 JSON 檔案載入
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            DuckfishError::Config(format!("無法讀取情境檔 {}: {}", path.display(), e))
        })?;
        Self::from_json_str(&content)
    }

    /// 建構器模式：設置鴨子的時間上限
    pub fn with_time_for_ducks(mut self, capacity: Decimal) -> Self {
        self.time_for_ducks = capacity;
        self
    }

    /// 建構器模式：設置魚的時間上限
    pub fn with_time_for_fish(mut self, capacity: Decimal) -> Self {
        self.time_for_fish = capacity;
        self
    }

    /// 建構器模式：設置每單位飼料消耗
    pub fn with_pellets_per_unit(mut self, per_duck: Decimal, per_fish: Decimal) -> Self {
        self.pellets_per_duck = per_duck;
        self.pellets_per_fish = per_fish;
        self
    }

    /// 建構器模式：設置飼料總供應量
    pub fn with_pellet_supply(mut self, supply: Decimal) -> Self {
        self.pellet_supply = supply;
        self
    }

    /// 建構器模式：設置單位利潤
    pub fn with_profit_per_unit(mut self, per_duck: Decimal, per_fish: Decimal) -> Self {
        self.profit_per_duck = per_duck;
        self.profit_per_fish = per_fish;
        self
    }

    /// 建構器模式：設置生產目標（求解初始猜測）
    pub fn with_production_targets(mut self, ducks: Decimal, fish: Decimal) -> Self {
        self.ducks_to_produce = ducks;
        self.fish_to_produce = fish;
        self
    }

    /// 寫回求解結果，回傳新的情境參數
    pub fn with_plan(&self, plan: &ProductionPlan) -> Self {
        Self {
            ducks_to_produce: plan.ducks,
            fish_to_produce: plan.fish,
            total_profit: plan.total_profit,
            ..self.clone()
        }
    }

    /// 驗證參數
    ///
    /// 每單位飼料消耗必須為正（幾何邊界會以之為除數），
    /// 其餘容量、供應量與利潤不得為負。
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("pellets_per_duck", self.pellets_per_duck),
            ("pellets_per_fish", self.pellets_per_fish),
        ];
        for (name, value) in positive {
            if value <= Decimal::ZERO {
                return Err(DuckfishError::InvalidParameter(format!(
                    "{} 必須大於 0，實際為 {}",
                    name, value
                )));
            }
        }

        let non_negative = [
            ("time_for_ducks", self.time_for_ducks),
            ("time_for_fish", self.time_for_fish),
            ("pellet_supply", self.pellet_supply),
            ("profit_per_duck", self.profit_per_duck),
            ("profit_per_fish", self.profit_per_fish),
            ("ducks_to_produce", self.ducks_to_produce),
            ("fish_to_produce", self.fish_to_produce),
        ];
        for (name, value) in non_negative {
            if value < Decimal::ZERO {
                return Err(DuckfishError::InvalidParameter(format!(
                    "{} 不得為負，實際為 {}",
                    name, value
                )));
            }
        }

        Ok(())
    }

    /// 以飼料供應量計算最多可生產的鴨子數
    pub fn max_ducks_by_pellets(&self) -> Result<Decimal> {
        self.pellet_supply
            .checked_div(self.pellets_per_duck)
            .ok_or_else(|| DuckfishError::InvalidParameter("pellets_per_duck 為 0".to_string()))
    }

    /// 以飼料供應量計算最多可生產的魚數
    pub fn max_fish_by_pellets(&self) -> Result<Decimal> {
        self.pellet_supply
            .checked_div(self.pellets_per_fish)
            .ok_or_else(|| DuckfishError::InvalidParameter("pellets_per_fish 為 0".to_string()))
    }
}

/// 更新後的業務假設（更新計劃的變數邊界）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdatedAssumptions {
    /// 鴨子產量上限
    pub max_ducks: Decimal,

    /// 魚產量下限
    pub min_fish: Decimal,
}

impl Default for UpdatedAssumptions {
    fn default() -> Self {
        Self {
            max_ducks: Decimal::from(150),
            min_fish: Decimal::from(50),
        }
    }
}
