//! Camera domain: tests for the bounded follow.

use bevy::prelude::*;

use super::clamp_view_center;

fn world() -> Rect {
    Rect::new(0.0, 0.0, 100.0, 50.0)
}

#[test]
fn test_view_follows_target_inside_world() {
    let center = clamp_view_center(Vec2::new(50.0, 25.0), Vec2::new(10.0, 5.0), world());
    assert_eq!(center, Vec2::new(50.0, 25.0));
}

#[test]
fn test_view_clamps_at_min_edges() {
    let center = clamp_view_center(Vec2::new(3.0, 1.0), Vec2::new(10.0, 5.0), world());
    assert_eq!(center, Vec2::new(10.0, 5.0));
}

#[test]
fn test_view_clamps_at_max_edges() {
    let center = clamp_view_center(Vec2::new(98.0, 49.0), Vec2::new(10.0, 5.0), world());
    assert_eq!(center, Vec2::new(90.0, 45.0));
}

#[test]
fn test_axes_clamp_independently() {
    let center = clamp_view_center(Vec2::new(98.0, 25.0), Vec2::new(10.0, 5.0), world());
    assert_eq!(center, Vec2::new(90.0, 25.0));
}

#[test]
fn test_oversized_view_aligns_to_min_edge() {
    let center = clamp_view_center(Vec2::new(50.0, 25.0), Vec2::new(80.0, 5.0), world());
    assert_eq!(center.x, 80.0);
}
