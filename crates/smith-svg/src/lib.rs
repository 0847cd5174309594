pub mod error;

use log::debug;
use std::collections::HashMap;
use std::f64::consts::{PI, TAU};

use smith_chart::surface::{GroupId, PathId, StrokeStyle, Surface, SurfaceArc, Sweep};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Node {
    Group(usize),
    Path(usize),
}

#[derive(Debug, Default)]
struct Group {
    translate: (f64, f64),
    children: Vec<Node>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum PathData {
    Arc(SurfaceArc),
    Line { x1: f64, y1: f64, x2: f64, y2: f64 },
}

#[derive(Debug, Clone)]
struct PathElement {
    parent: usize,
    data: Option<PathData>,
    style: Option<StrokeStyle>,
}

/// Retained scene-graph surface that serializes to an SVG document.
///
/// Groups and paths keep their insertion order, which becomes document
/// order (and therefore paint order) in the rendered SVG.
#[derive(Debug)]
pub struct SvgSurface {
    next_id: usize,
    viewport: (f64, f64),
    root: Vec<Node>,
    groups: HashMap<usize, Group>,
    paths: HashMap<usize, PathElement>,
}

impl Default for SvgSurface {
    fn default() -> Self {
        Self {
            next_id: 0,
            viewport: (1.0, 1.0),
            root: Vec::new(),
            groups: HashMap::new(),
            paths: HashMap::new(),
        }
    }
}

impl SvgSurface {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&mut self) -> usize {
        self.next_id += 1;
        self.next_id
    }

    /// Serialize the scene to an SVG document.
    pub fn render(&self) -> String {
        debug!(
            "rendering {} paths in {} groups",
            self.paths.len(),
            self.groups.len()
        );
        let (w, h) = self.viewport;
        let mut out = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" preserveAspectRatio=\"xMinYMin meet\" viewBox=\"0 0 {} {}\">\n",
            fmt(w),
            fmt(h)
        );
        for node in &self.root {
            self.render_node(node, &mut out, 1);
        }
        out.push_str("</svg>\n");
        out
    }

    fn render_node(&self, node: &Node, out: &mut String, depth: usize) {
        let indent = "  ".repeat(depth);
        match node {
            Node::Group(id) => {
                let group = match self.groups.get(id) {
                    Some(g) => g,
                    None => return,
                };
                let (dx, dy) = group.translate;
                if dx == 0.0 && dy == 0.0 {
                    out.push_str(&format!("{indent}<g>\n"));
                } else {
                    out.push_str(&format!(
                        "{indent}<g transform=\"translate({}, {})\">\n",
                        fmt(dx),
                        fmt(dy)
                    ));
                }
                for child in &group.children {
                    self.render_node(child, out, depth + 1);
                }
                out.push_str(&format!("{indent}</g>\n"));
            }
            Node::Path(id) => {
                let path = match self.paths.get(id) {
                    Some(p) => p,
                    None => return,
                };
                let data = match &path.data {
                    Some(d) => d,
                    None => return,
                };
                let d = match data {
                    PathData::Arc(arc) => arc_path_data(arc),
                    PathData::Line { x1, y1, x2, y2 } => {
                        format!("M {} {} L {} {}", fmt(*x1), fmt(*y1), fmt(*x2), fmt(*y2))
                    }
                };
                match &path.style {
                    Some(style) => out.push_str(&format!(
                        "{indent}<path d=\"{d}\" stroke=\"{}\" stroke-width=\"{}\" fill=\"none\"/>\n",
                        style.color,
                        fmt(style.width)
                    )),
                    None => out.push_str(&format!("{indent}<path d=\"{d}\" fill=\"none\"/>\n")),
                }
            }
        }
    }

    fn attach(&mut self, parent: Option<usize>, node: Node) {
        match parent {
            Some(gid) => {
                if let Some(group) = self.groups.get_mut(&gid) {
                    group.children.push(node);
                }
            }
            None => self.root.push(node),
        }
    }
}

impl Surface for SvgSurface {
    fn set_viewport(&mut self, width: f64, height: f64) {
        self.viewport = (width, height);
    }

    fn add_group(&mut self, parent: Option<GroupId>) -> GroupId {
        let id = self.next_id();
        self.groups.insert(id, Group::default());
        self.attach(parent.map(|g| g.0), Node::Group(id));
        GroupId(id)
    }

    fn set_translation(&mut self, group: GroupId, dx: f64, dy: f64) {
        if let Some(g) = self.groups.get_mut(&group.0) {
            g.translate = (dx, dy);
        }
    }

    fn add_path(&mut self, group: GroupId) -> PathId {
        let id = self.next_id();
        self.paths.insert(
            id,
            PathElement {
                parent: group.0,
                data: None,
                style: None,
            },
        );
        self.attach(Some(group.0), Node::Path(id));
        PathId(id)
    }

    fn remove_path(&mut self, path: PathId) {
        if let Some(p) = self.paths.remove(&path.0) {
            if let Some(group) = self.groups.get_mut(&p.parent) {
                group.children.retain(|n| *n != Node::Path(path.0));
            }
        }
    }

    fn set_arc(&mut self, path: PathId, arc: &SurfaceArc) {
        if let Some(p) = self.paths.get_mut(&path.0) {
            p.data = Some(PathData::Arc(*arc));
        }
    }

    fn set_line(&mut self, path: PathId, x1: f64, y1: f64, x2: f64, y2: f64) {
        if let Some(p) = self.paths.get_mut(&path.0) {
            p.data = Some(PathData::Line { x1, y1, x2, y2 });
        }
    }

    fn set_stroke(&mut self, path: PathId, style: &StrokeStyle) {
        if let Some(p) = self.paths.get_mut(&path.0) {
            p.style = Some(style.clone());
        }
    }
}

/// Format a coordinate with six decimal places, trailing zeros trimmed.
fn fmt(v: f64) -> String {
    let s = format!("{v:.6}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

/// Convert a center-parameterized arc to SVG endpoint parameterization.
///
/// Sweeps follow canvas semantics: a clockwise arc advances from the start
/// angle by a positive delta in `[0, 2π)`, an anticlockwise arc by a
/// negative delta in `(−2π, 0]`. A span of a full turn or more emits two
/// half-circle arcs, since the endpoint form cannot express a closed
/// circle.
fn arc_path_data(arc: &SurfaceArc) -> String {
    let SurfaceArc {
        cx,
        cy,
        radius: r,
        start_angle,
        end_angle,
        sweep,
    } = *arc;

    let point = |angle: f64| (cx + r * angle.cos(), cy + r * angle.sin());
    let (x0, y0) = point(start_angle);
    let raw = end_angle - start_angle;

    if raw.abs() >= TAU - 1e-12 {
        let (x1, y1) = point(start_angle + PI);
        let sf = match sweep {
            Sweep::Clockwise => 1,
            Sweep::Anticlockwise => 0,
        };
        return format!(
            "M {} {} A {} {} 0 1 {sf} {} {} A {} {} 0 1 {sf} {} {}",
            fmt(x0),
            fmt(y0),
            fmt(r),
            fmt(r),
            fmt(x1),
            fmt(y1),
            fmt(r),
            fmt(r),
            fmt(x0),
            fmt(y0)
        );
    }

    let delta = match sweep {
        Sweep::Clockwise => raw.rem_euclid(TAU),
        Sweep::Anticlockwise => -((-raw).rem_euclid(TAU)),
    };
    let (x1, y1) = point(start_angle + delta);
    let large_arc = i32::from(delta.abs() > PI);
    let sweep_flag = i32::from(delta > 0.0);

    format!(
        "M {} {} A {} {} 0 {large_arc} {sweep_flag} {} {}",
        fmt(x0),
        fmt(y0),
        fmt(r),
        fmt(r),
        fmt(x1),
        fmt(y1)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use smith_chart::{ChartConfig, SmithChart};

    fn arc(start_angle: f64, end_angle: f64, sweep: Sweep) -> SurfaceArc {
        SurfaceArc {
            cx: 0.0,
            cy: 0.0,
            radius: 1.0,
            start_angle,
            end_angle,
            sweep,
        }
    }

    #[test]
    fn test_quarter_circle_clockwise() {
        let d = arc_path_data(&arc(0.0, PI / 2.0, Sweep::Clockwise));
        assert_eq!(d, "M 1 0 A 1 1 0 0 1 0 1");
    }

    #[test]
    fn test_quarter_circle_anticlockwise() {
        let d = arc_path_data(&arc(0.0, -PI / 2.0, Sweep::Anticlockwise));
        assert_eq!(d, "M 1 0 A 1 1 0 0 0 0 -1");
    }

    #[test]
    fn test_sweep_crosses_the_long_way() {
        // Clockwise from 0 to -pi/2 has to travel three quarters around.
        let d = arc_path_data(&arc(0.0, -PI / 2.0, Sweep::Clockwise));
        assert_eq!(d, "M 1 0 A 1 1 0 1 1 0 -1");
    }

    #[test]
    fn test_full_circle_emits_two_arcs() {
        let d = arc_path_data(&arc(0.0, -TAU, Sweep::Anticlockwise));
        assert_eq!(d.matches(" A ").count(), 2);
        assert!(d.starts_with("M 1 0 A 1 1 0 1 0 -1 0"));
    }

    #[test]
    fn test_fmt_trims_zeros() {
        assert_eq!(fmt(0.75), "0.75");
        assert_eq!(fmt(1.0), "1");
        assert_eq!(fmt(0.005), "0.005");
        assert_eq!(fmt(-0.5), "-0.5");
        assert_eq!(fmt(-1e-17), "0");
    }

    #[test]
    fn test_render_scene_tree() {
        let mut surface = SvgSurface::new();
        let root = surface.add_group(None);
        surface.set_translation(root, 0.1, 0.2);
        let path = surface.add_path(root);
        surface.set_line(path, 0.0, 0.5, 1.0, 0.5);
        surface.set_stroke(
            path,
            &StrokeStyle {
                color: "#0f0f0f".to_string(),
                width: 0.005,
            },
        );

        let svg = surface.render();
        assert!(svg.contains("viewBox=\"0 0 1 1\""));
        assert!(svg.contains("translate(0.1, 0.2)"));
        assert!(svg.contains("d=\"M 0 0.5 L 1 0.5\""));
        assert!(svg.contains("stroke=\"#0f0f0f\""));
        assert!(svg.contains("stroke-width=\"0.005\""));
        assert!(svg.contains("fill=\"none\""));
    }

    #[test]
    fn test_remove_path_detaches() {
        let mut surface = SvgSurface::new();
        let root = surface.add_group(None);
        let path = surface.add_path(root);
        surface.set_line(path, 0.0, 0.0, 1.0, 1.0);
        surface.remove_path(path);
        assert!(!surface.render().contains("<path"));
    }

    #[test]
    fn test_paths_without_geometry_are_skipped() {
        let mut surface = SvgSurface::new();
        let root = surface.add_group(None);
        surface.add_path(root);
        assert!(!surface.render().contains("<path"));
    }

    #[test]
    fn test_default_chart_renders() {
        let mut chart = SmithChart::new(SvgSurface::new(), ChartConfig::default());
        chart.update();
        let svg = chart.surface().render();

        assert!(svg.contains("viewBox=\"0 0 1.1 1.1\""));
        assert!(svg.contains("translate(0.05, 0.05)"));
        // 6 real + 12 imaginary arcs + outer circle + axis line.
        assert_eq!(svg.matches("<path").count(), 20);
        assert!(!svg.contains("NaN"));
        assert!(!svg.contains("inf"));
    }
}
