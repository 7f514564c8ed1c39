//! 歷史銷售資料模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 單期銷售紀錄
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    /// 期間標籤（如月份）
    pub label: String,

    /// 魚銷售
    pub fish: Decimal,

    /// 鴨子銷售
    pub duck: Decimal,

    /// 總銷售
    pub total: Decimal,
}

/// 歷史銷售（依檔案列序）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SalesHistory {
    pub records: Vec<SalesRecord>,
}

impl SalesHistory {
    pub fn new(records: Vec<SalesRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// x 軸刻度標籤
    pub fn labels(&self) -> Vec<String> {
        self.records.iter().map(|r| r.label.clone()).collect()
    }

    /// 魚銷售序列（列索引, 數值）
    pub fn fish_series(&self) -> Vec<(usize, Decimal)> {
        self.series(|r| r.fish)
    }

    /// 鴨子銷售序列
    pub fn duck_series(&self) -> Vec<(usize, Decimal)> {
        self.series(|r| r.duck)
    }

    /// 總銷售序列
    pub fn total_series(&self) -> Vec<(usize, Decimal)> {
        self.series(|r| r.total)
    }

    /// 所有序列中的最大值
    pub fn max_value(&self) -> Decimal {
        self.records
            .iter()
            .flat_map(|r| [r.fish, r.duck, r.total])
            .max()
            .unwrap_or(Decimal::ZERO)
    }

    fn series<F>(&self, pick: F) -> Vec<(usize, Decimal)>
    where
        F: Fn(&SalesRecord) -> Decimal,
    {
        self.records
            .iter()
            .enumerate()
            .map(|(idx, record)| (idx, pick(record)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(label: &str, fish: i64, duck: i64) -> SalesRecord {
        SalesRecord {
            label: label.to_string(),
            fish: Decimal::from(fish),
            duck: Decimal::from(duck),
            total: Decimal::from(fish + duck),
        }
    }

    #[test]
    fn test_series_are_indexed_by_row() {
        let history = SalesHistory::new(vec![record("Jan", 10, 20), record("Feb", 15, 25)]);

        assert_eq!(history.labels(), vec!["Jan".to_string(), "Feb".to_string()]);
        assert_eq!(
            history.fish_series(),
            vec![(0, Decimal::from(10)), (1, Decimal::from(15))]
        );
        assert_eq!(history.duck_series()[1], (1, Decimal::from(25)));
        assert_eq!(history.total_series()[0], (0, Decimal::from(30)));
        assert_eq!(history.max_value(), Decimal::from(40));
    }

    #[test]
    fn test_empty_history() {
        let history = SalesHistory::default();

        assert!(history.is_empty());
        assert_eq!(history.max_value(), Decimal::ZERO);
    }
}
