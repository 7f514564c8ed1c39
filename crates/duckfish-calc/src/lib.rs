//! # Duckfish Calculation Engine
//!
//! 目標函數、可行域幾何與歷史銷售讀取

pub mod fill;
pub mod geometry;
pub mod history;
pub mod objective;

// Re-export 主要類型
pub use fill::FillCurve;
pub use geometry::{BoundaryLine, FeasibleRegion, LineSegment, Point};
pub use history::SalesReader;
pub use objective::{ObjectiveSense, ProfitModel};
