//! Rotating point-cloud globe with depth-sorted rendering.

use std::f32::consts::TAU;

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::api::animator::{Animator, TickContext};
use crate::core::rng::Rng;
use crate::error::EngineError;
use crate::render::color::Color;
use crate::render::surface::DrawSurface;

/// Tuning for the point-cloud globe.
/// Fields omitted from a tuning blob fall back to the stock constants.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct PointSphereConfig {
    /// Point population, constant for the life of the sphere.
    pub count: usize,
    /// Sphere radius, shared by every point.
    pub radius: f32,
    /// Rotation accumulated per tick, in radians.
    pub spin_rate: f32,
    /// Two points within this 3D distance get a connecting line.
    pub link_distance: f32,
    /// Base link alpha, scaled by depth.
    pub link_alpha: f32,
    pub link_width: f32,
    /// Point radius at the nearest depth.
    pub point_size: f32,
    /// Floor on point alpha so far points never vanish entirely.
    pub min_alpha: f32,
    /// Screen-space center of the projection.
    pub center: (f32, f32),
    pub color: Color,
}

impl Default for PointSphereConfig {
    fn default() -> Self {
        Self {
            count: 500,
            radius: 150.0,
            spin_rate: 0.005,
            link_distance: 80.0,
            link_alpha: 0.3,
            link_width: 1.0,
            point_size: 2.0,
            min_alpha: 0.1,
            center: (200.0, 200.0),
            color: Color::ACCENT,
        }
    }
}

/// One point on the sphere surface.
///
/// Angles are fixed at creation; only the rotation offset shared by the whole
/// sphere, added at projection time, ever advances.
#[derive(Debug, Clone, Copy)]
pub struct SpherePoint {
    pub theta: f32,
    pub phi: f32,
}

impl SpherePoint {
    /// Rigid rotation about the polar axis, then 3D coordinates.
    pub fn project(&self, radius: f32, offset: f32) -> Vec3 {
        let sin_phi = self.phi.sin();
        Vec3::new(
            radius * sin_phi * (self.theta + offset).cos(),
            radius * sin_phi * (self.theta + offset).sin(),
            radius * self.phi.cos(),
        )
    }
}

/// Fixed set of points uniformly distributed over a sphere surface, rotating
/// about the polar axis and rendered with a painter's-algorithm depth sort.
pub struct PointSphere {
    config: PointSphereConfig,
    points: Vec<SpherePoint>,
    offset: f32,
}

impl PointSphere {
    pub fn new(config: PointSphereConfig, seed: u64) -> Result<Self, EngineError> {
        if config.count == 0 {
            return Err(EngineError::EmptyPopulation {
                what: "sphere point",
            });
        }
        let mut rng = Rng::new(seed);
        let points = (0..config.count)
            .map(|_| SpherePoint {
                theta: rng.range(0.0, TAU),
                // Inverse-CDF transform for uniform surface density; a
                // uniform phi would cluster points at the poles.
                phi: (2.0 * rng.next_f32() - 1.0).acos(),
            })
            .collect();
        Ok(Self {
            config,
            points,
            offset: 0.0,
        })
    }

    pub fn points(&self) -> &[SpherePoint] {
        &self.points
    }

    /// Accumulated rotation, wrapped to [0, 2π).
    pub fn rotation_offset(&self) -> f32 {
        self.offset
    }

    /// Accumulate rotation. Wrapping is numeric hygiene only; the trig at
    /// projection time is periodic anyway.
    pub fn advance(&mut self, delta_angle: f32) {
        self.offset = (self.offset + delta_angle) % TAU;
    }

    /// Normalized depth in [0, 1]: 0 at the far pole, 1 at the near pole.
    fn depth_scale(&self, z: f32) -> f32 {
        (z + self.config.radius) / (2.0 * self.config.radius)
    }
}

impl Animator for PointSphere {
    fn step(&mut self, _ctx: &TickContext) {
        self.advance(self.config.spin_rate);
    }

    fn render(&mut self, surface: &mut dyn DrawSurface) {
        surface.clear();

        let cfg = &self.config;
        let center = Vec2::new(cfg.center.0, cfg.center.1);

        let mut projected: Vec<Vec3> = self
            .points
            .iter()
            .map(|p| p.project(cfg.radius, self.offset))
            .collect();
        // Painter's algorithm: farthest first so nearer geometry occludes.
        projected.sort_by(|a, b| a.z.total_cmp(&b.z));

        // Links first so points read on top of them.
        for i in 0..projected.len() {
            for j in (i + 1)..projected.len() {
                let distance = projected[i].distance(projected[j]);
                if distance < cfg.link_distance {
                    // j sorts nearer than i; its depth drives the fade.
                    let alpha = self.depth_scale(projected[j].z).max(0.0) * cfg.link_alpha;
                    surface.stroke_line(
                        center + projected[i].truncate(),
                        center + projected[j].truncate(),
                        cfg.color.with_alpha(alpha),
                        cfg.link_width,
                    );
                }
            }
        }

        for p in &projected {
            let scale = self.depth_scale(p.z);
            surface.fill_circle(
                center + p.truncate(),
                cfg.point_size * scale,
                cfg.color.with_alpha(scale.max(cfg.min_alpha)),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::viewport::Viewport;
    use crate::render::surface::{DrawCommand, PrimitiveBuffer};

    fn tick_context() -> TickContext {
        TickContext {
            viewport: Viewport::new(400.0, 400.0).unwrap(),
            pointer: None,
            emphasis: false,
            ticks: 1,
        }
    }

    fn sphere() -> PointSphere {
        PointSphere::new(PointSphereConfig::default(), 42).unwrap()
    }

    #[test]
    fn zero_count_is_rejected() {
        let config = PointSphereConfig {
            count: 0,
            ..Default::default()
        };
        assert!(PointSphere::new(config, 1).is_err());
    }

    #[test]
    fn projection_preserves_radius() {
        let sphere = sphere();
        for offset in [0.0, 0.7, 3.9, 100.0] {
            for point in sphere.points() {
                let p = point.project(150.0, offset);
                assert!(
                    (p.length() - 150.0).abs() < 1e-3,
                    "|p| = {} at offset {}",
                    p.length(),
                    offset
                );
            }
        }
    }

    #[test]
    fn spin_accumulates_and_wraps() {
        let mut sphere = sphere();
        let ctx = tick_context();
        for _ in 0..1000 {
            sphere.step(&ctx);
        }
        assert!(
            (sphere.rotation_offset() - 5.0).abs() < 1e-3,
            "offset: {}",
            sphere.rotation_offset()
        );

        for _ in 0..1000 {
            sphere.step(&ctx);
        }
        // 10 rad wraps past 2π
        assert!(sphere.rotation_offset() < TAU);
        assert!((sphere.rotation_offset() - (10.0 % TAU)).abs() < 1e-3);
    }

    #[test]
    fn z_stays_within_radius_after_many_steps() {
        let mut sphere = sphere();
        let ctx = tick_context();
        for _ in 0..1000 {
            sphere.step(&ctx);
        }
        for point in sphere.points() {
            let p = point.project(150.0, sphere.rotation_offset());
            assert!(p.z.abs() <= 150.0 + 1e-3, "z: {}", p.z);
        }
    }

    #[test]
    fn phi_spread_is_not_pole_clustered() {
        // With the inverse-CDF transform, cos(phi) is uniform on [-1, 1], so
        // the band |cos(phi)| < 0.5 should hold about half the points.
        let sphere = sphere();
        let in_band = sphere
            .points()
            .iter()
            .filter(|p| p.phi.cos().abs() < 0.5)
            .count();
        let fraction = in_band as f32 / sphere.points().len() as f32;
        assert!(
            (0.4..0.6).contains(&fraction),
            "equatorial band fraction: {}",
            fraction
        );
    }

    #[test]
    fn points_render_in_non_decreasing_depth_order() {
        let mut sphere = sphere();
        let mut buf = PrimitiveBuffer::new();
        sphere.render(&mut buf);

        // Point radius is monotone in depth, so the trailing run of circles
        // must come out with non-decreasing radii.
        let radii: Vec<f32> = buf
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Circle { radius, .. } => Some(*radius),
                _ => None,
            })
            .collect();
        assert_eq!(radii.len(), 500);
        for pair in radii.windows(2) {
            assert!(pair[0] <= pair[1] + 1e-6, "depth order violated");
        }
    }

    #[test]
    fn links_emit_in_non_decreasing_depth_order() {
        let mut sphere = sphere();
        sphere.step(&tick_context());
        let mut buf = PrimitiveBuffer::new();
        sphere.render(&mut buf);

        // Rebuild the sorted projection to recover each link's sorted-earlier
        // endpoint; `from` is always that endpoint, and the recomputation is
        // bit-identical, so an exact screen-position match finds its z.
        let cfg = PointSphereConfig::default();
        let center = Vec2::new(cfg.center.0, cfg.center.1);
        let mut projected: Vec<Vec3> = sphere
            .points()
            .iter()
            .map(|p| p.project(cfg.radius, sphere.rotation_offset()))
            .collect();
        projected.sort_by(|a, b| a.z.total_cmp(&b.z));

        let z_of = |screen: Vec2| -> f32 {
            projected
                .iter()
                .find(|p| center + p.truncate() == screen)
                .expect("link endpoint is not a projected point")
                .z
        };

        let mut previous = f32::NEG_INFINITY;
        let mut links = 0;
        for command in buf.commands() {
            if let DrawCommand::Line { from, .. } = command {
                let z = z_of(*from);
                assert!(z >= previous, "link emitted out of depth order");
                previous = z;
                links += 1;
            }
        }
        assert!(links > 0, "default sphere must produce links");
    }

    #[test]
    fn point_alpha_is_floored() {
        let mut sphere = sphere();
        let mut buf = PrimitiveBuffer::new();
        sphere.render(&mut buf);
        for command in buf.commands() {
            if let DrawCommand::Circle { color, .. } = command {
                assert!(color.a >= 0.1 - 1e-6, "alpha below floor: {}", color.a);
                assert!(color.a <= 1.0 + 1e-6);
            }
        }
    }

    #[test]
    fn lines_precede_points() {
        let mut sphere = sphere();
        let mut buf = PrimitiveBuffer::new();
        sphere.render(&mut buf);
        let first_circle = buf
            .commands()
            .iter()
            .position(|c| matches!(c, DrawCommand::Circle { .. }))
            .unwrap();
        let last_line = buf
            .commands()
            .iter()
            .rposition(|c| matches!(c, DrawCommand::Line { .. }))
            .unwrap();
        assert!(last_line < first_circle);
    }
}
