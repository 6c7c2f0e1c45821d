//! Per-frame vertex/index batching
//!
//! A [`GeometryBatch`] collects deduplicated vertices and triangle indices
//! for one frame, is handed to a [`FrameSink`], and is cleared right after
//! the draw. Positions are stored in normalized device coordinates.

use crate::color::Color;
use crate::sink::FrameSink;
use crate::viewport::{RadiusScale, Viewport};
use gravity_physics::Vector2;
use std::collections::HashMap;
use std::f64::consts::TAU;

/// Default number of wedges per tessellated circle
pub const CIRCLE_SEGMENTS: u32 = 40;

/// Vertex format with device-space position and RGB color
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vertex {
    pub pos: [f32; 2],
    pub color: [f32; 3],
}

impl Vertex {
    pub fn new(pos: Vector2, color: Color) -> Self {
        Self {
            pos: [pos.x as f32, pos.y as f32],
            color: color.to_array(),
        }
    }

    /// Bit-exact identity used for deduplication; -0.0 folds into 0.0
    fn key(&self) -> [u32; 5] {
        let bits = |v: f32| (v + 0.0).to_bits();
        [
            bits(self.pos[0]),
            bits(self.pos[1]),
            bits(self.color[0]),
            bits(self.color[1]),
            bits(self.color[2]),
        ]
    }
}

#[derive(Clone, Debug, Default)]
pub struct GeometryBatch {
    vertices: Vec<Vertex>,
    indices: Vec<u32>,
    lookup: HashMap<[u32; 5], u32>,
    viewport: Viewport,
    radius_scale: RadiusScale,
}

impl GeometryBatch {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            ..Default::default()
        }
    }

    pub fn with_radius_scale(mut self, radius_scale: RadiusScale) -> Self {
        self.radius_scale = radius_scale;
        self
    }

    /// Takes effect for geometry added after the call
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Index of an identical vertex already in the batch, or of the newly
    /// appended one
    pub fn add_vertex(&mut self, vertex: Vertex) -> u32 {
        if let Some(&index) = self.lookup.get(&vertex.key()) {
            return index;
        }
        self.push_vertex(vertex)
    }

    /// Append without looking for duplicates
    pub fn add_new_vertex(&mut self, vertex: Vertex) -> u32 {
        self.push_vertex(vertex)
    }

    fn push_vertex(&mut self, vertex: Vertex) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(vertex);
        // First occurrence wins for later lookups
        self.lookup.entry(vertex.key()).or_insert(index);
        index
    }

    pub fn add_index(&mut self, index: u32) {
        debug_assert!(
            (index as usize) < self.vertices.len(),
            "index {} out of range for {} vertices",
            index,
            self.vertices.len()
        );
        self.indices.push(index);
    }

    fn add_triangle_indices(&mut self, a: u32, b: u32, c: u32) {
        self.add_index(a);
        self.add_index(b);
        self.add_index(c);
    }

    /// Filled triangle with corners given in world coordinates
    pub fn add_triangle(&mut self, p1: Vector2, p2: Vector2, p3: Vector2, color: Color) {
        let a = self.add_vertex(Vertex::new(self.viewport.to_device(p1), color));
        let b = self.add_vertex(Vertex::new(self.viewport.to_device(p2), color));
        let c = self.add_vertex(Vertex::new(self.viewport.to_device(p3), color));
        self.add_triangle_indices(a, b, c);
    }

    /// Filled circle as a fan of `segments` equal wedges around `center`
    ///
    /// Rim vertices start at angle 0 and proceed counter-clockwise; the last
    /// wedge closes on the first rim vertex. Each wedge is emitted as
    /// (center, previous rim, current rim). Fewer than 3 segments draws
    /// nothing.
    pub fn add_circle(&mut self, center: Vector2, radius: f64, color: Color, segments: u32) {
        if segments < 3 {
            return;
        }

        let center = self.viewport.to_device(center);
        let extent = self.viewport.radius_extent(radius, self.radius_scale);
        let segment_angle = TAU / segments as f64;

        let rim = |segment: u32| {
            let angle = segment_angle * segment as f64;
            center + Vector2::new(angle.cos(), angle.sin()) * extent
        };

        let center_vertex = self.add_vertex(Vertex::new(center, color));
        let start_vertex = self.add_vertex(Vertex::new(rim(0), color));

        let mut prev_vertex = start_vertex;
        for segment in 1..=segments {
            let new_vertex = if segment == segments {
                start_vertex
            } else {
                self.add_vertex(Vertex::new(rim(segment), color))
            };

            self.add_triangle_indices(center_vertex, prev_vertex, new_vertex);
            prev_vertex = new_vertex;
        }
    }

    /// Empty both buffers; the viewport and radius scale are kept
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
        self.lookup.clear();
    }

    /// Hand the finished batch to `sink`, then clear it for the next frame
    pub fn submit<S: FrameSink + ?Sized>(&mut self, sink: &mut S) {
        sink.draw(&self.vertices, &self.indices);
        self.clear();
    }
}
