// Host-side tests for the frame tick and the renderers, using `DrawList` as
// the surface.

use glam::Vec2;
use pointer_fx::core::constants::*;
use pointer_fx::core::*;

const DT: f32 = 1.0 / 60.0;

fn scene() -> Scene {
    Scene::new(FxConfig::default(), 800.0, 600.0)
}

fn moved(x: f32, y: f32) -> InputEvent {
    InputEvent::Moved(PointerSample::new(x, y, 0.0))
}

fn is_fill(c: &DrawCommand) -> bool {
    matches!(c, DrawCommand::FillCircle { .. })
}

fn is_arc(c: &DrawCommand) -> bool {
    matches!(c, DrawCommand::Arc { .. })
}

fn is_line(c: &DrawCommand) -> bool {
    matches!(c, DrawCommand::Line { .. })
}

#[test]
fn tick_drains_queue_in_arrival_order() {
    let mut s = scene();
    let mut q = InputQueue::new();
    q.push(InputEvent::Hovered(HoverTarget::Interactive));
    q.push(InputEvent::Hovered(HoverTarget::Text));
    assert_eq!(q.len(), 2);
    s.tick(&mut q, DT);
    assert!(q.is_empty());
    assert_eq!(s.cursor().state(), InteractionState::TextHover);
    assert_eq!(s.frames(), 1);
}

#[test]
fn resize_is_applied_before_the_step() {
    let mut s = scene();
    let mut q = InputQueue::new();
    q.push(InputEvent::Resized {
        width: 300.0,
        height: 200.0,
    });
    s.tick(&mut q, DT);
    assert_eq!(s.field().bounds(), Vec2::new(300.0, 200.0));
    assert_eq!(s.field().len(), FIELD_PARTICLE_COUNT);
    for p in s.field().particles() {
        assert!(p.origin.x < 300.0 && p.origin.y < 200.0);
    }
}

#[test]
fn pointer_moves_reach_cursor_and_field() {
    let mut s = scene();
    let mut q = InputQueue::new();
    q.push(moved(120.0, 80.0));
    s.tick(&mut q, DT);
    assert_eq!(s.cursor().pointer(), Some(Vec2::new(120.0, 80.0)));
    assert_eq!(s.field().pointer(), Vec2::new(120.0, 80.0));

    q.push(InputEvent::Left);
    s.tick(&mut q, DT);
    assert_eq!(s.field().pointer(), Vec2::from_array(FIELD_SENTINEL));
    assert!(!s.cursor().is_visible());
}

#[test]
fn frame_interval_is_clamped() {
    let mut s = scene();
    let mut q = InputQueue::new();
    q.push(InputEvent::LoadingChanged(true));

    // A long stall only advances the spinner by the clamped interval
    s.tick(&mut q, 5.0);
    let expected = MAX_FRAME_DT_SEC * LOADING_DEG_PER_SEC;
    assert!((s.cursor().loading_rotation_deg() - expected).abs() < 1e-3);

    s.tick(&mut q, f32::NAN);
    s.tick(&mut q, -1.0);
    s.tick(&mut q, f32::INFINITY);
    assert!((s.cursor().loading_rotation_deg() - expected).abs() < 1e-3);
}

#[test]
fn render_is_pure_and_repeatable() {
    let mut s = scene();
    let mut q = InputQueue::new();
    q.push(moved(400.0, 300.0));
    q.push(InputEvent::Clicked {
        position: Vec2::new(400.0, 300.0),
        interactive: true,
    });
    for _ in 0..10 {
        s.tick(&mut q, DT);
    }

    let mut field_a = DrawList::new();
    let mut cursor_a = DrawList::new();
    s.render(Some(&mut field_a), Some(&mut cursor_a));
    let mut field_b = DrawList::new();
    let mut cursor_b = DrawList::new();
    s.render(Some(&mut field_b), Some(&mut cursor_b));

    assert_eq!(field_a, field_b);
    assert_eq!(cursor_a, cursor_b);
    assert_eq!(s.frames(), 10);

    // Rendering into a used list replaces the previous frame
    s.render(Some(&mut field_a), Some(&mut cursor_a));
    assert_eq!(field_a, field_b);
    assert_eq!(cursor_a.commands()[0], DrawCommand::Clear);
}

#[test]
fn untouched_field_draws_only_cores() {
    let s = scene();
    let mut list = DrawList::new();
    s.render::<DrawList, DrawList>(Some(&mut list), None);
    assert_eq!(list.commands()[0], DrawCommand::Clear);
    assert_eq!(list.count(is_fill), FIELD_PARTICLE_COUNT);
    assert_eq!(list.count(is_line), 0);
    assert_eq!(list.commands().len(), FIELD_PARTICLE_COUNT + 1);
}

#[test]
fn cursor_is_not_drawn_before_first_sample() {
    let mut s = scene();
    let mut q = InputQueue::new();
    s.tick(&mut q, DT);
    let mut list = DrawList::new();
    s.render::<DrawList, DrawList>(None, Some(&mut list));
    assert_eq!(list.commands(), &[DrawCommand::Clear]);
}

#[test]
fn cursor_draws_dot_and_ring_once_visible() {
    let mut s = scene();
    let mut q = InputQueue::new();
    q.push(moved(100.0, 100.0));
    for _ in 0..30 {
        s.tick(&mut q, DT);
    }
    let mut list = DrawList::new();
    s.render::<DrawList, DrawList>(None, Some(&mut list));
    assert_eq!(list.count(is_fill), 1);
    assert_eq!(
        list.count(|c| matches!(c, DrawCommand::StrokeCircle { .. })),
        1
    );
    assert_eq!(list.count(is_arc), 0);
}

#[test]
fn loading_draws_spinner_arcs() {
    let mut s = scene();
    let mut q = InputQueue::new();
    q.push(moved(100.0, 100.0));
    q.push(InputEvent::LoadingChanged(true));
    for _ in 0..10 {
        s.tick(&mut q, DT);
    }
    let mut list = DrawList::new();
    s.render::<DrawList, DrawList>(None, Some(&mut list));
    assert_eq!(list.count(is_arc), 2);
}

#[test]
fn click_effects_are_drawn_even_when_cursor_is_hidden() {
    let mut s = scene();
    let mut q = InputQueue::new();
    q.push(InputEvent::Clicked {
        position: Vec2::new(50.0, 50.0),
        interactive: true,
    });
    s.tick(&mut q, DT);
    let mut list = DrawList::new();
    s.render::<DrawList, DrawList>(None, Some(&mut list));
    assert_eq!(list.count(is_fill), BURST_PARTICLE_COUNT);
    assert_eq!(
        list.count(|c| matches!(c, DrawCommand::StrokeCircle { .. })),
        1
    );
}

#[test]
fn disabled_layers_are_skipped() {
    let config = FxConfig {
        show_cursor: false,
        show_field: false,
        ..FxConfig::default()
    };
    let s = Scene::new(config, 800.0, 600.0);
    let mut field = DrawList::new();
    let mut cursor = DrawList::new();
    s.render(Some(&mut field), Some(&mut cursor));
    assert!(field.commands().is_empty());
    assert!(cursor.commands().is_empty());
}

#[test]
fn same_seed_gives_same_field() {
    let a = scene();
    let b = scene();
    assert_eq!(a.field().particles(), b.field().particles());
}

#[test]
fn resize_during_simulation_reseeds_inside_new_viewport() {
    let mut s = scene();
    let mut q = InputQueue::new();
    for i in 0..60 {
        q.push(moved(100.0 + 10.0 * i as f32, 300.0));
        s.tick(&mut q, DT);
    }
    q.push(moved(150.0, 100.0));
    q.push(InputEvent::Resized {
        width: 400.0,
        height: 200.0,
    });
    s.tick(&mut q, DT);

    assert_eq!(s.field().len(), FIELD_PARTICLE_COUNT);
    for p in s.field().particles() {
        assert!(p.origin.x >= 0.0 && p.origin.x < 400.0);
        assert!(p.origin.y >= 0.0 && p.origin.y < 200.0);
        // One step since the reseed: still close to the rest position
        assert!(p.position.distance(p.origin) < 1.0);
    }
}
