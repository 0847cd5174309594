/// Handle to a grouping container on the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroupId(pub usize);

/// Handle to a path element on the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PathId(pub usize);

/// Direction an arc is swept from its start angle to its end angle.
///
/// Angles follow the surface convention: y grows downward and positive
/// angles advance clockwise on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sweep {
    Clockwise,
    Anticlockwise,
}

/// A circular arc in surface coordinates, ready to draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceArc {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub sweep: Sweep,
}

/// Stroke attributes for a path element. Chart paths are never filled.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeStyle {
    pub color: String,
    pub width: f64,
}

/// The 2-D vector drawing surface the chart renders onto.
///
/// The chart only issues these calls and never inspects the surface, so
/// any scene-graph backend (retained SVG, immediate canvas, a recording
/// stub in tests) can stand behind it. A group created with `parent =
/// None` attaches to the surface root.
pub trait Surface {
    /// Resize the visible viewport box to `width` x `height` surface units.
    fn set_viewport(&mut self, width: f64, height: f64);

    /// Append a nested grouping container.
    fn add_group(&mut self, parent: Option<GroupId>) -> GroupId;

    /// Offset a group's coordinate origin.
    fn set_translation(&mut self, group: GroupId, dx: f64, dy: f64);

    /// Append an empty path element to a group.
    fn add_path(&mut self, group: GroupId) -> PathId;

    /// Detach and destroy a path element.
    fn remove_path(&mut self, path: PathId);

    /// Replace a path's geometry with a circular arc.
    fn set_arc(&mut self, path: PathId, arc: &SurfaceArc);

    /// Replace a path's geometry with a straight line segment.
    fn set_line(&mut self, path: PathId, x1: f64, y1: f64, x2: f64, y2: f64);

    /// Set a path's visual attributes.
    fn set_stroke(&mut self, path: PathId, style: &StrokeStyle);
}
