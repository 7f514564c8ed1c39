//! 可行域與最大利潤圖

use duckfish_calc::{FeasibleRegion, FillCurve, LineSegment};
use duckfish_core::{to_f64, Result, ScenarioParameters};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;

use crate::{
    axis_max, ensure_parent_dir, render_error, FILL_GREEN, LINE_BLUE, LINE_GREEN, LINE_ORANGE,
    MARKER_RED,
};

/// 最大利潤圖：三條邊界線、可行域填色與最佳解標記
#[derive(Debug, Clone)]
pub struct ProfitChart {
    pub region: FeasibleRegion,
    pub fill: FillCurve,
    /// 最佳解（魚, 鴨子）
    pub solution: (f64, f64),
}

impl ProfitChart {
    /// 以情境參數（已寫回求解結果）建立
    pub fn from_scenario(params: &ScenarioParameters) -> Result<Self> {
        let region = FeasibleRegion::compute(params)?;
        let fill = FillCurve::compute(&region)?;
        let solution = (
            to_f64(params.fish_to_produce, "fish_to_produce")?,
            to_f64(params.ducks_to_produce, "ducks_to_produce")?,
        );

        Ok(Self {
            region,
            fill,
            solution,
        })
    }

    /// 輸出 SVG 檔
    pub fn render_svg(&self, path: &Path, size: (u32, u32)) -> Result<()> {
        ensure_parent_dir(path)?;
        let root = SVGBackend::new(path, size).into_drawing_area();
        self.draw(&root).map_err(render_error)?;

        tracing::info!("最大利潤圖已輸出: {}", path.display());
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

    fn x_max(&self) -> f64 {
        axis_max(self.region.max_x().max(self.solution.0))
    }

    fn y_max(&self) -> f64 {
        axis_max(self.region.max_y().max(self.solution.1))
    }

    /// 繪製到任意後端
    pub fn draw<DB: DrawingBackend>(
        &self,
        root: &DrawingArea<DB, Shift>,
    ) -> std::result::Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
        root.fill(&WHITE)?;

        let mut chart = ChartBuilder::on(root)
            .margin(20)
            .set_label_area_size(LabelAreaPosition::Left, 60)
            .set_label_area_size(LabelAreaPosition::Bottom, 50)
            .build_cartesian_2d(0.0..self.x_max(), 0.0..self.y_max())?;

        chart
            .configure_mesh()
            .x_desc("Fishes")
            .y_desc("Ducks")
            .x_label_formatter(&|v| format!("{:.0}", v))
            .y_label_formatter(&|v| format!("{:.0}", v))
            .draw()?;

        // 可行域填色（先畫，避免蓋住邊界線）
        chart.draw_series(AreaSeries::new(
            self.fill.points.iter().copied(),
            0.0,
            FILL_GREEN.mix(0.2),
        ))?;

        let boundaries: [(LineSegment, &str, RGBColor); 3] = [
            (self.region.pellet_supply, "pellet supply", LINE_BLUE),
            (self.region.fish_time_cap, "number of fish", LINE_ORANGE),
            (self.region.duck_time_cap, "number of ducks", LINE_GREEN),
        ];
        for (segment, label, color) in boundaries {
            chart
                .draw_series(LineSeries::new(
                    [
                        (segment.start.x, segment.start.y),
                        (segment.end.x, segment.end.y),
                    ],
                    color.stroke_width(2),
                ))?
                .label(label)
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
        }

        chart
            .draw_series(std::iter::once(Circle::new(
                self.solution,
                5,
                MARKER_RED.filled(),
            )))?
            .label("maximum profit")
            .legend(|(x, y)| Circle::new((x + 10, y), 5, MARKER_RED.filled()));

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

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn solved_scenario() -> ScenarioParameters {
        ScenarioParameters::default()
            .with_production_targets(Decimal::from(400), Decimal::from(80))
    }

    #[test]
    fn test_chart_from_scenario() {
        let chart = ProfitChart::from_scenario(&solved_scenario()).unwrap();

        assert_eq!(chart.solution, (80.0, 400.0));
        assert_eq!(chart.fill.points.len(), 31);
        assert!((chart.x_max() - 440.0).abs() < 1e-9);
        assert!((chart.y_max() - 550.0).abs() < 1e-9);
    }

    #[test]
    fn test_svg_contains_labels() {
        let chart = ProfitChart::from_scenario(&solved_scenario()).unwrap();
        let svg = chart.render_svg_string(crate::DEFAULT_SIZE).unwrap();

        assert!(svg.contains("<svg"));
        for label in [
            "Fishes",
            "Ducks",
            "pellet supply",
            "number of fish",
            "number of ducks",
            "maximum profit",
        ] {
            assert!(svg.contains(label), "missing label {}", label);
        }
    }

    #[test]
    fn test_render_svg_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("baseline.svg");
        let chart = ProfitChart::from_scenario(&solved_scenario()).unwrap();

        chart.render_svg(&path, (640, 480)).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("maximum profit"));
    }

    #[test]
    fn test_degenerate_region_fails() {
        let params = solved_scenario().with_pellet_supply(Decimal::ZERO);

        assert!(ProfitChart::from_scenario(&params).is_err());
    }
}
