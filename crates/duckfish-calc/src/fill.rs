//! 可行域填色曲線

use duckfish_core::{DuckfishError, Result};

use crate::geometry::FeasibleRegion;

/// 預設取樣間距
pub const DEFAULT_STEP: f64 = 10.0;

/// 可行域上緣：y = min(飼料線(x), 鴨子時間上限)
#[derive(Debug, Clone, PartialEq)]
pub struct FillCurve {
    pub points: Vec<(f64, f64)>,
}

impl FillCurve {
    /// 以預設間距取樣
    pub fn compute(region: &FeasibleRegion) -> Result<Self> {
        Self::compute_with_step(region, DEFAULT_STEP)
    }

    /// x 從 0 取樣到（魚時間上限 + step）之前
    pub fn compute_with_step(region: &FeasibleRegion, step: f64) -> Result<Self> {
        if !(step.is_finite() && step > 0.0) {
            return Err(DuckfishError::InvalidParameter(format!(
                "取樣間距必須為正，實際為 {}",
                step
            )));
        }

        let line = region.pellet_supply.line();
        if line.is_vertical() {
            return Err(DuckfishError::DegenerateGeometry(
                "飼料耗盡線兩端點 x 座標重合，無法計算斜率".to_string(),
            ));
        }

        let cap = region.duck_cap();
        let end = region.fish_cap() + step;

        let mut points = Vec::new();
        let mut idx: u32 = 0;
        loop {
            let x = f64::from(idx) * step;
            if x >= end {
                break;
            }
            let y = line.y_at(x)?.min(cap);
            points.push((x, y));
            idx += 1;
        }

        tracing::debug!("填色曲線取樣 {} 點，上限 {}", points.len(), cap);

        Ok(Self { points })
    }

    pub fn xs(&self) -> Vec<f64> {
        self.points.iter().map(|(x, _)| *x).collect()
    }

    pub fn ys(&self) -> Vec<f64> {
        self.points.iter().map(|(_, y)| *y).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use duckfish_core::ScenarioParameters;
    use rust_decimal::Decimal;

    #[test]
    fn test_default_fill_curve() {
        let region = FeasibleRegion::compute(&ScenarioParameters::default()).unwrap();
        let curve = FillCurve::compute(&region).unwrap();

        // 0, 10, ..., 300
        assert_eq!(curve.points.len(), 31);
        assert_eq!(curve.points[0], (0.0, 400.0));
        // 飼料線在 x = 80 時為 400，之後低於上限
        assert_eq!(curve.points[8], (80.0, 400.0));
        assert_eq!(curve.points[9], (90.0, 387.5));
        assert_eq!(curve.points[30], (300.0, 125.0));
        assert!(curve.ys().iter().all(|y| *y <= 400.0));
    }

    #[test]
    fn test_non_multiple_cap_extends_past_cap() {
        let params = ScenarioParameters::default().with_time_for_fish(Decimal::from(305));
        let region = FeasibleRegion::compute(&params).unwrap();
        let curve = FillCurve::compute(&region).unwrap();

        assert_eq!(curve.xs().last().copied(), Some(310.0));
    }

    #[test]
    fn test_degenerate_line_is_an_error() {
        let params = ScenarioParameters::default().with_pellet_supply(Decimal::ZERO);
        let region = FeasibleRegion::compute(&params).unwrap();

        assert!(matches!(
            FillCurve::compute(&region),
            Err(DuckfishError::DegenerateGeometry(_))
        ));
    }

    #[test]
    fn test_invalid_step() {
        let region = FeasibleRegion::compute(&ScenarioParameters::default()).unwrap();

        assert!(FillCurve::compute_with_step(&region, 0.0).is_err());
        assert!(FillCurve::compute_with_step(&region, f64::NAN).is_err());
    }
}
