//! 歷史銷售圖

use duckfish_core::{to_f64, DuckfishError, Result, SalesHistory};
use plotters::coord::Shift;
use plotters::prelude::*;
use rust_decimal::Decimal;
use std::path::Path;

use crate::{axis_max, ensure_parent_dir, render_error, LINE_BLUE, LINE_GREEN, LINE_ORANGE};

/// 歷史銷售圖：魚、鴨子、總銷售三條折線，x 軸以期間標籤為刻度
#[derive(Debug, Clone)]
pub struct SalesChart {
    pub labels: Vec<String>,
    pub fish: Vec<(i32, f64)>,
    pub duck: Vec<(i32, f64)>,
    pub total: Vec<(i32, f64)>,
    y_max: f64,
}

impl SalesChart {
    /// 由歷史銷售建立；沒有資料時回傳錯誤
    pub fn new(history: &SalesHistory) -> Result<Self> {
        if history.is_empty() {
            return Err(DuckfishError::Render("歷史銷售沒有資料，無法繪圖".to_string()));
        }

        Ok(Self {
            labels: history.labels(),
            fish: convert_series(history.fish_series(), "fish sales")?,
            duck: convert_series(history.duck_series(), "duck sales")?,
            total: convert_series(history.total_series(), "total sales")?,
            y_max: to_f64(history.max_value(), "max sales")?,
        })
    }

    /// 輸出 SVG 檔
    pub fn render_svg(&self, path: &Path, size: (u32, u32)) -> Result<()> {
        ensure_parent_dir(path)?;
        let root = SVGBackend::new(path, size).into_drawing_area();
        self.draw(&root).map_err(render_error)?;

        tracing::info!("歷史銷售圖已輸出: {}", path.display());
        Ok(())
    }

    /// 輸出 SVG 字串
    pub fn render_svg_string(&self, size: (u32, u32)) -> Result<String> {
        let mut buffer = String::new();
        {
            let root = SVGBackend::with_string(&mut buffer, size).into_drawing_area();
            self.draw(&root).map_err(render_error)?;
        }
        Ok(buffer)
    }

    fn last_index(&self) -> i32 {
        // 只有一期時仍保留寬度
        (self.fish.len() as i32 - 1).max(1)
    }

    /// 繪製到任意後端
    pub fn draw<DB: DrawingBackend>(
        &self,
        root: &DrawingArea<DB, Shift>,
    ) -> std::result::Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
        root.fill(&WHITE)?;

        let mut chart = ChartBuilder::on(root)
            .margin(20)
            .set_label_area_size(LabelAreaPosition::Left, 70)
            .set_label_area_size(LabelAreaPosition::Bottom, 50)
            .build_cartesian_2d(0..self.last_index(), 0.0..axis_max(self.y_max))?;

        let labels = &self.labels;
        chart
            .configure_mesh()
            .x_desc("Month")
            .y_desc("Sales")
            .x_labels(labels.len())
            .x_label_formatter(&|idx| {
                usize::try_from(*idx)
                    .ok()
                    .and_then(|i| labels.get(i))
                    .cloned()
                    .unwrap_or_default()
            })
            .draw()?;

        let series = [
            (&self.fish, "fish sales", LINE_BLUE),
            (&self.duck, "duck sales", LINE_ORANGE),
            (&self.total, "total sales", LINE_GREEN),
        ];
        for (points, label, color) in series {
            chart
                .draw_series(LineSeries::new(points.iter().copied(), color.stroke_width(2)))?
                .label(label)
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK.mix(0.3))
            .draw()?;

        root.present()?;
        Ok(())
    }
}

fn convert_series(series: Vec<(usize, Decimal)>, what: &str) -> Result<Vec<(i32, f64)>> {
    series
        .into_iter()
        .map(|(idx, value)| {
            let x = i32::try_from(idx).map_err(|_| {
                DuckfishError::CalculationError(format!("{} 列數過多: {}", what, idx))
            })?;
            Ok((x, to_f64(value, what)?))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use duckfish_core::SalesRecord;

    fn history() -> SalesHistory {
        let record = |label: &str, fish: i64, duck: i64| SalesRecord {
            label: label.to_string(),
            fish: Decimal::from(fish),
            duck: Decimal::from(duck),
            total: Decimal::from(fish + duck),
        };
        SalesHistory::new(vec![
            record("Jan", 1200, 1500),
            record("Feb", 1100, 1650),
            record("Mar", 1300, 1400),
        ])
    }

    #[test]
    fn test_chart_series() {
        let chart = SalesChart::new(&history()).unwrap();

        assert_eq!(chart.labels, vec!["Jan", "Feb", "Mar"]);
        assert_eq!(chart.fish[2], (2, 1300.0));
        assert_eq!(chart.duck[1], (1, 1650.0));
        assert_eq!(chart.total[0], (0, 2700.0));
        assert_eq!(chart.last_index(), 2);
    }

    #[test]
    fn test_svg_contains_series_and_ticks() {
        let chart = SalesChart::new(&history()).unwrap();
        let svg = chart.render_svg_string(crate::DEFAULT_SIZE).unwrap();

        for label in ["fish sales", "duck sales", "total sales", "Feb"] {
            assert!(svg.contains(label), "missing label {}", label);
        }
    }

    #[test]
    fn test_empty_history_fails() {
        assert!(matches!(
            SalesChart::new(&SalesHistory::default()),
            Err(DuckfishError::Render(_))
        ));
    }
}
