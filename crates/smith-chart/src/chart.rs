use log::{debug, warn};
use serde::Serialize;
use std::f64::consts::TAU;

use crate::arcs::{self, ArcSegment, BOUNDARY_REACTANCE};
use crate::scale::ChartScales;
use crate::surface::{GroupId, PathId, StrokeStyle, Surface, SurfaceArc, Sweep};

/// Stroke width shared by every chart curve, in surface units.
const STROKE_WIDTH: f64 = 0.005;

/// Chart configuration. Setters on [`SmithChart`] mutate this; geometry is
/// read from it only when `update()` runs. Values are not validated —
/// degenerate numbers flow into degenerate geometry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartConfig {
    pub margin: f64,
    pub real_values: Vec<f64>,
    pub imag_values: Vec<f64>,
    pub real_color: String,
    pub imag_color: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            margin: 0.05,
            real_values: vec![0.2, 0.5, 1.0, 2.0, 5.0, 10.0],
            imag_values: vec![0.2, 0.5, 1.0, 2.0, 5.0, 10.0],
            real_color: "#0f0f0f".to_string(),
            imag_color: "#0f0f0f".to_string(),
        }
    }
}

/// Declarative redraw plan: every configured arc in gamma-plane
/// coordinates, before viewport scaling. Recomputed from scratch on each
/// `update()` and never cached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPlan {
    pub real: Vec<ArcSegment>,
    pub imag_positive: Vec<ArcSegment>,
    pub imag_negative: Vec<ArcSegment>,
}

/// Compute the redraw plan for a configuration.
///
/// Pure: this is the whole geometry side of `update()`. Each resistance
/// value yields one arc spanning the full chart; each reactance value
/// yields a positive arc and a mirrored negative one.
pub fn plan(config: &ChartConfig) -> ChartPlan {
    let real = config
        .real_values
        .iter()
        .map(|&r| arcs::resistance_arc(r, BOUNDARY_REACTANCE, -BOUNDARY_REACTANCE))
        .collect();
    let imag_positive = config
        .imag_values
        .iter()
        .map(|&x| arcs::reactance_arc(x, 0.0, BOUNDARY_REACTANCE))
        .collect();
    let imag_negative = config
        .imag_values
        .iter()
        .map(|&x| arcs::reactance_arc(-x, 0.0, BOUNDARY_REACTANCE))
        .collect();
    ChartPlan {
        real,
        imag_positive,
        imag_negative,
    }
}

/// Element counts from one enter/update/exit pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct JoinStats {
    created: usize,
    updated: usize,
    removed: usize,
}

/// Position-keyed enter/update/exit join of a rendered path list against a
/// new arc list: shared positions update in place, positions past the old
/// length create paths, old positions past the new length are removed.
fn join<S: Surface>(
    surface: &mut S,
    group: GroupId,
    paths: &mut Vec<PathId>,
    arcs: &[SurfaceArc],
    style: &StrokeStyle,
) -> JoinStats {
    let stats = JoinStats {
        created: arcs.len().saturating_sub(paths.len()),
        updated: paths.len().min(arcs.len()),
        removed: paths.len().saturating_sub(arcs.len()),
    };

    if arcs.len() < paths.len() {
        for path in paths.split_off(arcs.len()) {
            surface.remove_path(path);
        }
    }
    while paths.len() < arcs.len() {
        paths.push(surface.add_path(group));
    }
    for (path, arc) in paths.iter().zip(arcs) {
        surface.set_arc(*path, arc);
        surface.set_stroke(*path, style);
    }

    stats
}

/// The chart model: owns the configuration and the rendered scene, and
/// reconciles one against the other on [`SmithChart::update`].
pub struct SmithChart<S: Surface> {
    surface: S,
    config: ChartConfig,
    scales: ChartScales,
    root: GroupId,
    real_group: GroupId,
    imag_pos_group: GroupId,
    imag_neg_group: GroupId,
    outer_circle: PathId,
    axis_line: PathId,
    real_paths: Vec<PathId>,
    imag_pos_paths: Vec<PathId>,
    imag_neg_paths: Vec<PathId>,
}

impl<S: Surface> SmithChart<S> {
    pub fn new(mut surface: S, config: ChartConfig) -> Self {
        let root = surface.add_group(None);
        let real_group = surface.add_group(Some(root));
        let imag_pos_group = surface.add_group(Some(root));
        let imag_neg_group = surface.add_group(Some(root));
        let outer_circle = surface.add_path(root);
        let axis_line = surface.add_path(root);

        let mut chart = Self {
            surface,
            config,
            scales: ChartScales::default(),
            root,
            real_group,
            imag_pos_group,
            imag_neg_group,
            outer_circle,
            axis_line,
            real_paths: Vec::new(),
            imag_pos_paths: Vec::new(),
            imag_neg_paths: Vec::new(),
        };
        let margin = chart.config.margin;
        chart.set_margin(margin);
        chart
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Resize the viewport box and reposition the chart origin. Unlike the
    /// other setters this takes effect immediately, without `update()`.
    pub fn set_margin(&mut self, margin: f64) {
        self.config.margin = margin;
        let extent = 1.0 + 2.0 * margin;
        self.surface.set_viewport(extent, extent);
        self.surface.set_translation(self.root, margin, margin);
    }

    pub fn set_real_line_values(&mut self, values: Vec<f64>) {
        self.config.real_values = values;
    }

    pub fn set_imag_line_values(&mut self, values: Vec<f64>) {
        self.config.imag_values = values;
    }

    pub fn set_real_line_color(&mut self, color: impl Into<String>) {
        self.config.real_color = color.into();
    }

    pub fn set_imag_line_color(&mut self, color: impl Into<String>) {
        self.config.imag_color = color.into();
    }

    /// Recompute geometry from the current configuration and reconcile the
    /// rendered scene against it. Idempotent for an unchanged config.
    pub fn update(&mut self) {
        let plan = plan(&self.config);

        let real_style = StrokeStyle {
            color: self.config.real_color.clone(),
            width: STROKE_WIDTH,
        };
        let imag_style = StrokeStyle {
            color: self.config.imag_color.clone(),
            width: STROKE_WIDTH,
        };

        let real_arcs = self.to_surface(&plan.real, Sweep::Anticlockwise);
        let imag_pos_arcs = self.to_surface(&plan.imag_positive, Sweep::Anticlockwise);
        // The mirrored family sweeps the other way.
        let imag_neg_arcs = self.to_surface(&plan.imag_negative, Sweep::Clockwise);

        let real_stats = join(
            &mut self.surface,
            self.real_group,
            &mut self.real_paths,
            &real_arcs,
            &real_style,
        );
        let pos_stats = join(
            &mut self.surface,
            self.imag_pos_group,
            &mut self.imag_pos_paths,
            &imag_pos_arcs,
            &imag_style,
        );
        let neg_stats = join(
            &mut self.surface,
            self.imag_neg_group,
            &mut self.imag_neg_paths,
            &imag_neg_arcs,
            &imag_style,
        );
        debug!("update: real {real_stats:?}, imag+ {pos_stats:?}, imag- {neg_stats:?}");

        // Fixed reference curves, redrawn on every call.
        let outer = SurfaceArc {
            cx: self.scales.x.map(0.0),
            cy: self.scales.y.map(0.0),
            radius: self.scales.radius.map(1.0),
            start_angle: self.scales.angle.map(0.0),
            end_angle: self.scales.angle.map(TAU),
            sweep: Sweep::Anticlockwise,
        };
        self.surface.set_arc(self.outer_circle, &outer);
        self.surface.set_stroke(self.outer_circle, &real_style);

        self.surface.set_line(
            self.axis_line,
            self.scales.x.map(-1.0),
            self.scales.y.map(0.0),
            self.scales.x.map(1.0),
            self.scales.y.map(0.0),
        );
        self.surface.set_stroke(self.axis_line, &imag_style);
    }

    fn to_surface(&self, segments: &[ArcSegment], sweep: Sweep) -> Vec<SurfaceArc> {
        segments
            .iter()
            .map(|seg| {
                if !seg.is_finite() {
                    warn!("non-finite arc geometry: {seg:?}");
                }
                SurfaceArc {
                    cx: self.scales.x.map(seg.cx),
                    cy: self.scales.y.map(seg.cy),
                    radius: self.scales.radius.map(seg.radius),
                    start_angle: self.scales.angle.map(seg.angle1),
                    end_angle: self.scales.angle.map(seg.angle2),
                    sweep,
                }
            })
            .collect()
    }
}
