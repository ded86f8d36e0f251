//! macroquad host for the section-plane clipping core.

use macroquad::models::{Mesh, Vertex, draw_mesh};
use macroquad::prelude::*;
use nalgebra::{Point3, Vector3};
use section_planes::{BoundingBox, PlaneIndicator};

pub mod clip;
pub mod panel;

pub use clip::{CpuClipPort, Polygon, clip_to_planes};
pub use panel::ControlPanel;

/// A face of the demo model with its base color.
#[derive(Debug, Clone)]
pub struct Face {
    pub polygon: Polygon,
    pub color: Color,
}

/// Generates the 6 faces of an axis-aligned box, wound counter-clockwise
/// when viewed from outside.
pub fn box_faces(min: Point3<f32>, max: Point3<f32>, color: Color) -> Vec<Face> {
    let corner = |x: bool, y: bool, z: bool| {
        Point3::new(
            if x { max.x } else { min.x },
            if y { max.y } else { min.y },
            if z { max.z } else { min.z },
        )
    };
    let quads = [
        [(false, false, true), (true, false, true), (true, true, true), (false, true, true)],
        [(true, false, false), (false, false, false), (false, true, false), (true, true, false)],
        [(false, false, false), (false, false, true), (false, true, true), (false, true, false)],
        [(true, false, true), (true, false, false), (true, true, false), (true, true, true)],
        [(false, true, true), (true, true, true), (true, true, false), (false, true, false)],
        [(false, false, false), (true, false, false), (true, false, true), (false, false, true)],
    ];

    quads
        .iter()
        .map(|quad| Face {
            polygon: Polygon::new(quad.iter().map(|&(x, y, z)| corner(x, y, z)).collect()),
            color,
        })
        .collect()
}

/// A stand-in anatomy: a translucent-looking shell with two "organs" inside,
/// so sections reveal something.
pub fn generate_model(bounds: &BoundingBox) -> Vec<Face> {
    let center = bounds.center();
    let size = bounds.size();
    let inner = |offset: Vector3<f32>, scale: f32| {
        let half = size * (scale / 2.0);
        (center + offset - half, center + offset + half)
    };

    let mut faces = box_faces(bounds.min(), bounds.max(), Color::from_rgba(232, 190, 172, 255));
    let (min, max) = inner(Vector3::new(0.0, size.y * 0.18, 0.0), 0.35);
    faces.extend(box_faces(min, max, Color::from_rgba(190, 40, 60, 255)));
    let (min, max) = inner(Vector3::new(size.x * 0.12, -size.y * 0.2, 0.0), 0.3);
    faces.extend(box_faces(min, max, Color::from_rgba(120, 70, 40, 255)));
    faces
}

fn to_vec3(p: Point3<f32>) -> Vec3 {
    vec3(p.x, p.y, p.z)
}

/// Fixed directional light, so faces read as solid.
fn shade(color: Color, normal: Option<Vector3<f32>>) -> Color {
    let light = Vector3::new(0.4, 0.8, 0.45).normalize();
    let lambert = normal.map_or(1.0, |n| n.dot(&light).abs());
    let k = 0.35 + 0.65 * lambert;
    Color::new(color.r * k, color.g * k, color.b * k, color.a)
}

/// Draws a convex polygon by fan triangulation.
pub fn draw_polygon(polygon: &Polygon, color: Color) {
    let verts = polygon.vertices();
    if verts.len() < 3 {
        return;
    }

    let vertices = verts
        .iter()
        .map(|p| Vertex::new2(to_vec3(*p), vec2(0.0, 0.0), color))
        .collect();
    let indices = (1..verts.len() as u16 - 1)
        .flat_map(|i| [0, i, i + 1])
        .collect();

    draw_mesh(&Mesh {
        vertices,
        indices,
        texture: None,
    });
}

/// Draws the visible part of every model face under the port's clipping.
pub fn draw_model(model: &[Face], port: &CpuClipPort) {
    for face in model {
        if let Some(visible) = port.clip(&face.polygon) {
            draw_polygon(&visible, shade(face.color, face.polygon.unit_normal()));
        }
    }
}

/// Draws the translucent guide quad of an active plane with a solid outline.
pub fn draw_indicator(indicator: &PlaneIndicator) {
    let [r, g, b] = indicator.color();
    let rectangle = indicator.rectangle();
    let corners = rectangle.vertices();

    draw_polygon(
        &Polygon::new(corners.to_vec()),
        shade(Color::from_rgba(r, g, b, 56), rectangle.unit_normal()),
    );
    for i in 0..4 {
        draw_line_3d(
            to_vec3(corners[i]),
            to_vec3(corners[(i + 1) % 4]),
            Color::from_rgba(r, g, b, 220),
        );
    }
}

/// Simple orbit camera for 3D scene navigation.
pub struct OrbitCamera {
    pub distance: f32,
    pub yaw: f32,
    pub pitch: f32,
    pub target: Vec3,
    /// Multiplier for scroll wheel zoom
    pub zoom_speed: f32,
    pub min_distance: f32,
    pub max_distance: f32,
}

impl OrbitCamera {
    pub fn new(distance: f32, yaw: f32, pitch: f32) -> Self {
        Self {
            distance,
            yaw,
            pitch,
            target: Vec3::ZERO,
            zoom_speed: 0.5,
            min_distance: 2.0,
            max_distance: 20.0,
        }
    }

    /// Sets the zoom configuration (speed and distance limits).
    pub fn with_zoom(mut self, speed: f32, min: f32, max: f32) -> Self {
        self.zoom_speed = speed;
        self.min_distance = min;
        self.max_distance = max;
        self
    }

    /// Points the camera at the center of the model bounds.
    pub fn looking_at(mut self, bounds: &BoundingBox) -> Self {
        self.target = to_vec3(bounds.center());
        self
    }

    /// Mouse drag orbits, scroll zooms, arrow keys orbit.
    pub fn update(&mut self) {
        if is_mouse_button_down(MouseButton::Left) {
            let delta = mouse_delta_position();
            self.yaw -= delta.x * 2.0;
            self.pitch -= delta.y * 2.0;
        }

        let step = 0.02;
        if is_key_down(KeyCode::Left) {
            self.yaw += step;
        }
        if is_key_down(KeyCode::Right) {
            self.yaw -= step;
        }
        if is_key_down(KeyCode::Up) {
            self.pitch += step;
        }
        if is_key_down(KeyCode::Down) {
            self.pitch -= step;
        }
        self.pitch = self.pitch.clamp(-1.5, 1.5);

        self.distance = (self.distance - mouse_wheel().1 * self.zoom_speed)
            .clamp(self.min_distance, self.max_distance);
    }

    pub fn position(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        self.target
            + self.distance * vec3(cos_pitch * sin_yaw, sin_pitch, cos_pitch * cos_yaw)
    }

    pub fn to_camera3d(&self) -> Camera3D {
        Camera3D {
            position: self.position(),
            up: Vec3::Y,
            target: self.target,
            ..Default::default()
        }
    }
}
