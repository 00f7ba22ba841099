//! Shape generation for 2D primitives
//!
//! Everything tessellates to triangle lists in screen pixels; [`to_clip`]
//! maps them to normalized device coordinates for upload.

use glam::Vec2;
use std::f32::consts::PI;

use super::scene::{Frame, Shape};
use super::vertex::Vertex;

/// Segments used for orb and arrow circles
pub const CIRCLE_SEGMENTS: u32 = 24;

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Diamond with corners `radius` above, right of, below and left of `center`
pub fn diamond(center: Vec2, radius: f32, color: [f32; 4]) -> Vec<Vertex> {
    let top = center - Vec2::new(0.0, radius);
    let right = center + Vec2::new(radius, 0.0);
    let bottom = center + Vec2::new(0.0, radius);
    let left = center - Vec2::new(radius, 0.0);

    vec![
        Vertex::new(top.x, top.y, color),
        Vertex::new(right.x, right.y, color),
        Vertex::new(bottom.x, bottom.y, color),
        Vertex::new(bottom.x, bottom.y, color),
        Vertex::new(left.x, left.y, color),
        Vertex::new(top.x, top.y, color),
    ]
}

/// Axis-aligned filled rectangle
pub fn rect(min: Vec2, size: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    let max = min + size;
    vec![
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(max.x, max.y, color),
    ]
}

/// Rectangle border as four edge strips
pub fn outline(min: Vec2, size: Vec2, thickness: f32, color: [f32; 4]) -> Vec<Vertex> {
    let t = thickness.min(size.x / 2.0).min(size.y / 2.0);
    let inner_h = size.y - 2.0 * t;

    let mut vertices = Vec::with_capacity(24);
    vertices.extend(rect(min, Vec2::new(size.x, t), color));
    vertices.extend(rect(min + Vec2::new(0.0, size.y - t), Vec2::new(size.x, t), color));
    vertices.extend(rect(min + Vec2::new(0.0, t), Vec2::new(t, inner_h), color));
    vertices.extend(rect(min + Vec2::new(size.x - t, t), Vec2::new(t, inner_h), color));
    vertices
}

pub fn tessellate(shape: &Shape) -> Vec<Vertex> {
    match *shape {
        Shape::Circle {
            center,
            radius,
            color,
        } => circle(center, radius, color, CIRCLE_SEGMENTS),
        Shape::Diamond {
            center,
            radius,
            color,
        } => diamond(center, radius, color),
        Shape::Rect { min, size, color } => rect(min, size, color),
        Shape::Outline {
            min,
            size,
            thickness,
            color,
        } => outline(min, size, thickness, color),
    }
}

/// All shapes of a frame in draw order. Labels are left to the text backend.
pub fn frame_vertices(frame: &Frame) -> Vec<Vertex> {
    frame.shapes.iter().flat_map(tessellate).collect()
}

/// Map pixel coordinates (origin top-left, y down) to clip space
pub fn to_clip(vertices: &mut [Vertex], screen_size: Vec2) {
    for v in vertices {
        v.position = [
            v.position[0] / screen_size.x * 2.0 - 1.0,
            1.0 - v.position[1] / screen_size.y * 2.0,
        ];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: [f32; 4] = [1.0; 4];

    #[test]
    fn test_circle_vertex_count() {
        assert_eq!(circle(Vec2::ZERO, 10.0, WHITE, 12).len(), 36);
    }

    #[test]
    fn test_diamond_corners() {
        let v = diamond(Vec2::new(50.0, 50.0), 15.0, WHITE);
        assert_eq!(v.len(), 6);
        assert_eq!(v[0].position, [50.0, 35.0]);
        assert_eq!(v[1].position, [65.0, 50.0]);
        assert_eq!(v[2].position, [50.0, 65.0]);
        assert_eq!(v[4].position, [35.0, 50.0]);
    }

    #[test]
    fn test_outline_is_four_strips() {
        assert_eq!(outline(Vec2::ZERO, Vec2::new(200.0, 100.0), 2.0, WHITE).len(), 24);
    }

    #[test]
    fn test_frame_vertices_in_order() {
        let frame = Frame {
            shapes: vec![
                Shape::Rect {
                    min: Vec2::ZERO,
                    size: Vec2::ONE,
                    color: WHITE,
                },
                Shape::Diamond {
                    center: Vec2::ZERO,
                    radius: 1.0,
                    color: WHITE,
                },
            ],
            labels: Vec::new(),
        };
        assert_eq!(frame_vertices(&frame).len(), 12);
    }

    #[test]
    fn test_to_clip_corners() {
        let mut v = rect(Vec2::ZERO, Vec2::new(800.0, 600.0), WHITE);
        to_clip(&mut v, Vec2::new(800.0, 600.0));
        assert_eq!(v[0].position, [-1.0, 1.0]);
        assert_eq!(v[5].position, [1.0, -1.0]);
    }
}
