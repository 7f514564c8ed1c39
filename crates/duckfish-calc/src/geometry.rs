//! 可行域邊界幾何
//!
//! 座標系為（魚, 鴨子）：x 軸是魚的數量，y 軸是鴨子的數量。

use duckfish_core::{to_f64, DuckfishError, Result, ScenarioParameters};

/// 平面上的點（x = 魚, y = 鴨子）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// 兩端點線段
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub start: Point,
    pub end: Point,
}

impl LineSegment {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// 兩端點的 x 座標
    pub fn xs(&self) -> [f64; 2] {
        [self.start.x, self.end.x]
    }

    /// 兩端點的 y 座標
    pub fn ys(&self) -> [f64; 2] {
        [self.start.y, self.end.y]
    }

    /// 通過兩端點的直線
    pub fn line(&self) -> BoundaryLine {
        BoundaryLine::through(self.start, self.end)
    }
}

/// 通過兩點的直線
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoundaryLine {
    /// y = slope · x + intercept
    Sloped { slope: f64, intercept: f64 },
    /// x = 常數（兩點 x 座標相同）
    Vertical { x: f64 },
}

impl BoundaryLine {
    /// 兩點式求斜率與截距；x 座標重合時回傳鉛直線
    pub fn through(a: Point, b: Point) -> Self {
        let dx = a.x - b.x;
        if dx.abs() <= f64::EPSILON {
            return BoundaryLine::Vertical { x: a.x };
        }

        BoundaryLine::Sloped {
            slope: (a.y - b.y) / dx,
            intercept: (a.x * b.y - b.x * a.y) / dx,
        }
    }

    /// 給定 x 求 y
    pub fn y_at(&self, x: f64) -> Result<f64> {
        match *self {
            BoundaryLine::Sloped { slope, intercept } => Ok(slope * x + intercept),
            BoundaryLine::Vertical { x: vertical_x } => Err(DuckfishError::DegenerateGeometry(
                format!("鉛直線 x = {} 無法以 x 求值", vertical_x),
            )),
        }
    }

    pub fn is_vertical(&self) -> bool {
        matches!(self, BoundaryLine::Vertical { .. })
    }
}

/// 可行域的三條邊界線
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeasibleRegion {
    /// 飼料耗盡線：(供應/每魚飼料, 0) → (0, 供應/每鴨飼料)
    pub pellet_supply: LineSegment,

    /// 魚的時間上限：x = time_for_fish
    pub fish_time_cap: LineSegment,

    /// 鴨子的時間上限：y = time_for_ducks
    pub duck_time_cap: LineSegment,
}

impl FeasibleRegion {
    /// 由情境參數計算邊界線
    pub fn compute(params: &ScenarioParameters) -> Result<Self> {
        params.validate()?;

        let max_ducks = to_f64(params.max_ducks_by_pellets()?, "max_ducks_by_pellets")?;
        let max_fish = to_f64(params.max_fish_by_pellets()?, "max_fish_by_pellets")?;
        let time_for_fish = to_f64(params.time_for_fish, "time_for_fish")?;
        let time_for_ducks = to_f64(params.time_for_ducks, "time_for_ducks")?;

        tracing::debug!(
            "可行域邊界：飼料可供鴨子 {} 隻或魚 {} 條，時間上限 鴨子 {} / 魚 {}",
            max_ducks,
            max_fish,
            time_for_ducks,
            time_for_fish
        );

        Ok(Self {
            pellet_supply: LineSegment::new(Point::new(max_fish, 0.0), Point::new(0.0, max_ducks)),
            fish_time_cap: LineSegment::new(
                Point::new(time_for_fish, 0.0),
                Point::new(time_for_fish, max_ducks),
            ),
            duck_time_cap: LineSegment::new(
                Point::new(0.0, time_for_ducks),
                Point::new(max_fish, time_for_ducks),
            ),
        })
    }

    /// 六個端點座標（三條線段 × 兩端點）
    pub fn coordinates(&self) -> [(f64, f64); 6] {
        let segments = [self.pellet_supply, self.fish_time_cap, self.duck_time_cap];
        let mut coords = [(0.0, 0.0); 6];
        for (idx, segment) in segments.iter().enumerate() {
            coords[idx * 2] = (segment.start.x, segment.start.y);
            coords[idx * 2 + 1] = (segment.end.x, segment.end.y);
        }
        coords
    }

    /// 鴨子時間上限（水平線的 y）
    pub fn duck_cap(&self) -> f64 {
        self.duck_time_cap.start.y
    }

    /// 魚時間上限（鉛直線的 x）
    pub fn fish_cap(&self) -> f64 {
        self.fish_time_cap.start.x
    }

    /// 所有端點中最大的 x
    pub fn max_x(&self) -> f64 {
        self.coordinates()
            .iter()
            .map(|(x, _)| *x)
            .fold(0.0, f64::max)
    }

    /// 所有端點中最大的 y
    pub fn max_y(&self) -> f64 {
        self.coordinates()
            .iter()
            .map(|(_, y)| *y)
            .fold(0.0, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_default_region() {
        let region = FeasibleRegion::compute(&ScenarioParameters::default()).unwrap();

        assert_eq!(region.pellet_supply.xs(), [400.0, 0.0]);
        assert_eq!(region.pellet_supply.ys(), [0.0, 500.0]);
        assert_eq!(region.fish_time_cap.xs(), [300.0, 300.0]);
        assert_eq!(region.fish_time_cap.ys(), [0.0, 500.0]);
        assert_eq!(region.duck_time_cap.xs(), [0.0, 400.0]);
        assert_eq!(region.duck_time_cap.ys(), [400.0, 400.0]);
    }

    #[test]
    fn test_coordinates_are_six_pairs() {
        let region = FeasibleRegion::compute(&ScenarioParameters::default()).unwrap();

        assert_eq!(
            region.coordinates(),
            [
                (400.0, 0.0),
                (0.0, 500.0),
                (300.0, 0.0),
                (300.0, 500.0),
                (0.0, 400.0),
                (400.0, 400.0),
            ]
        );
        assert_eq!(region.max_x(), 400.0);
        assert_eq!(region.max_y(), 500.0);
        assert_eq!(region.duck_cap(), 400.0);
        assert_eq!(region.fish_cap(), 300.0);
    }

    #[test]
    fn test_pellet_line_through_endpoints() {
        let region = FeasibleRegion::compute(&ScenarioParameters::default()).unwrap();
        let line = region.pellet_supply.line();

        assert_eq!(
            line,
            BoundaryLine::Sloped {
                slope: -1.25,
                intercept: 500.0
            }
        );
        assert_eq!(line.y_at(400.0).unwrap(), 0.0);
        assert_eq!(line.y_at(0.0).unwrap(), 500.0);
    }

    #[test]
    fn test_zero_supply_gives_vertical_line() {
        let params = ScenarioParameters::default().with_pellet_supply(Decimal::ZERO);
        let region = FeasibleRegion::compute(&params).unwrap();
        let line = region.pellet_supply.line();

        assert!(line.is_vertical());
        assert!(matches!(
            line.y_at(10.0),
            Err(DuckfishError::DegenerateGeometry(_))
        ));
    }

    #[test]
    fn test_invalid_pellets_rejected() {
        let params = ScenarioParameters::default()
            .with_pellets_per_unit(Decimal::from(100), Decimal::ZERO);

        assert!(matches!(
            FeasibleRegion::compute(&params),
            Err(DuckfishError::InvalidParameter(_))
        ));
    }
}
