use glam::Vec2;

use crate::Config;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn from_min_size(min: Vec2, size: Vec2) -> Self {
        Self {
            min,
            max: min + size,
        }
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// Strict overlap test: boxes that only touch along an edge do not intersect
    pub fn intersects(&self, other: &Aabb) -> bool {
        !(self.max.x <= other.min.x
            || other.max.x <= self.min.x
            || self.max.y <= other.min.y
            || other.max.y <= self.min.y)
    }
}

/// Playing field: a bounded rectangle with a goal mouth carved into each end
#[derive(Debug, Clone, Copy)]
pub struct Field {
    pub width: f32,
    pub height: f32,
    pub goal_band_height: f32,
    pub goal_depth: f32,
}

impl Field {
    pub fn new(config: &Config) -> Self {
        Self {
            width: config.field_width,
            height: config.field_height,
            goal_band_height: config.goal_band_height,
            goal_depth: config.goal_depth,
        }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Vertical span (top, bottom) of the goal mouth at both ends
    pub fn goal_band(&self) -> (f32, f32) {
        let top = self.height / 2.0 - self.goal_band_height / 2.0;
        (top, top + self.goal_band_height)
    }

    /// Does the vertical span [top, bottom] reach into the goal mouth?
    pub fn in_goal_band(&self, top: f32, bottom: f32) -> bool {
        let (band_top, band_bottom) = self.goal_band();
        bottom >= band_top && top <= band_bottom
    }

    /// Clamp a box's top-left corner so the whole box stays on the field
    pub fn clamp_box(&self, min: Vec2, size: Vec2) -> Vec2 {
        Vec2::new(
            min.x.clamp(0.0, (self.width - size.x).max(0.0)),
            min.y.clamp(0.0, (self.height - size.y).max(0.0)),
        )
    }
}

impl Default for Field {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
