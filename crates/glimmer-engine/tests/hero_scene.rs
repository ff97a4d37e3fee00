//! End-to-end checks driving the public API the way a host would.

use glam::Vec2;
use glimmer_engine::{
    encode_commands, DrawCommand, LayerId, Mote, ParticleField, ParticleFieldConfig, PointSphere,
    PointSphereConfig, Stage, TickContext, Viewport,
};

fn ctx(viewport: Viewport) -> TickContext {
    TickContext {
        viewport,
        pointer: None,
        emphasis: false,
        ticks: 1,
    }
}

#[test]
fn particle_wrap_end_to_end() {
    use glimmer_engine::Animator;

    let viewport = Viewport::new(800.0, 600.0).unwrap();
    let mut field = ParticleField::new(ParticleFieldConfig::default(), viewport, 42).unwrap();
    assert_eq!(field.motes().len(), 100);

    field.motes_mut()[0] = Mote {
        pos: Vec2::new(799.6, 300.0),
        vel: Vec2::new(0.8, 0.0),
        size: 1.0,
        opacity: 0.5,
    };
    field.step(&ctx(viewport));

    let pos = field.motes()[0].pos;
    assert!((pos.x - 0.4).abs() < 1e-4, "wrapped to {}", pos.x);
    assert_eq!(pos.y, 300.0);
}

#[test]
fn globe_rotation_end_to_end() {
    let config = PointSphereConfig {
        count: 500,
        radius: 150.0,
        ..Default::default()
    };
    let mut sphere = PointSphere::new(config, 42).unwrap();

    for _ in 0..1000 {
        sphere.advance(0.005);
    }
    assert!(
        (sphere.rotation_offset() - 5.0).abs() < 1e-3,
        "accumulated offset: {}",
        sphere.rotation_offset()
    );
    for point in sphere.points() {
        let p = point.project(150.0, sphere.rotation_offset());
        assert!(p.z.abs() <= 150.0 + 1e-3);
        assert!((p.length() - 150.0).abs() < 1e-3, "radius drifted");
    }
}

#[test]
fn stage_drives_cursor_toward_pointer() {
    let viewport = Viewport::new(800.0, 600.0).unwrap();
    let mut stage = Stage::hero_scene(viewport, 42).unwrap();
    stage.pointer_moved(400.0, 300.0);

    for _ in 0..120 {
        stage.tick();
    }

    // The cursor layer's dot marker is its last recorded circle.
    let dot_center = stage
        .commands(LayerId(2))
        .iter()
        .rev()
        .find_map(|c| match c {
            DrawCommand::Circle { center, .. } => Some(*center),
            _ => None,
        })
        .expect("cursor layer drew no markers");
    assert!(dot_center.distance(Vec2::new(400.0, 300.0)) < 1.0);
}

#[test]
fn cancelled_stage_freezes_its_frames() {
    let viewport = Viewport::new(800.0, 600.0).unwrap();
    let mut stage = Stage::hero_scene(viewport, 42).unwrap();
    stage.tick();
    let frozen: Vec<DrawCommand> = stage.commands(LayerId(0)).to_vec();

    stage.cancel_handle().cancel();
    assert!(!stage.tick());
    assert_eq!(stage.commands(LayerId(0)), frozen.as_slice());
}

#[test]
fn frames_encode_for_the_host() {
    let viewport = Viewport::new(800.0, 600.0).unwrap();
    let mut stage = Stage::hero_scene(viewport, 42).unwrap();
    stage.tick();

    for i in 0..stage.layer_count() {
        let mut wire = Vec::new();
        let written = encode_commands(stage.commands(LayerId(i)), &mut wire);
        assert!(written > 0, "layer {} produced an empty frame", i);
        assert_eq!(wire[0], 0.0, "frames start with a clear record");
    }
}
