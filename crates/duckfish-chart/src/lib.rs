//! # Duckfish Charts
//!
//! 可行域/最大利潤圖與歷史銷售圖（SVG 輸出）

pub mod profit;
pub mod sales;

// Re-export 主要類型
pub use profit::ProfitChart;
pub use sales::SalesChart;

use duckfish_core::{DuckfishError, Result};
use plotters::style::RGBColor;
use std::path::Path;

/// 預設圖片尺寸（像素）
pub const DEFAULT_SIZE: (u32, u32) = (960, 720);

/// 線條配色
pub(crate) const LINE_BLUE: RGBColor = RGBColor(31, 119, 180);
pub(crate) const LINE_ORANGE: RGBColor = RGBColor(255, 127, 14);
pub(crate) const LINE_GREEN: RGBColor = RGBColor(44, 160, 44);
pub(crate) const MARKER_RED: RGBColor = RGBColor(214, 39, 40);
pub(crate) const FILL_GREEN: RGBColor = RGBColor(0, 128, 0);

pub(crate) fn render_error<E: std::fmt::Display>(err: E) -> DuckfishError {
    DuckfishError::Render(err.to_string())
}

/// 確保輸出目錄存在
pub(crate) fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

/// 座標軸上限：留 10% 邊界，且不為 0
pub(crate) fn axis_max(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value * 1.1
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_max() {
        assert!((axis_max(500.0) - 550.0).abs() < 1e-9);
        assert_eq!(axis_max(0.0), 1.0);
        assert_eq!(axis_max(f64::NAN), 1.0);
    }

    #[test]
    fn test_ensure_parent_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("figures").join("chart.svg");

        ensure_parent_dir(&path).unwrap();
        assert!(dir.path().join("figures").is_dir());
    }
}
