pub mod arcs;
pub mod chart;
pub mod gamma;
pub mod scale;
pub mod surface;

pub use chart::{plan, ChartConfig, ChartPlan, SmithChart};
pub use surface::{GroupId, PathId, StrokeStyle, Surface, SurfaceArc, Sweep};
