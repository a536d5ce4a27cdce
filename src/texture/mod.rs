//! Texture projection state and the alignment operations on faces.

mod align;
mod cloud;

use std::collections::HashMap;
use std::hash::BuildHasher;

pub use cloud::{Cloud, PointCloud};

use crate::math::{try_normalize, Vector3};

/// Pixel dimensions of a resolved texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureSize {
    pub width: u32,
    pub height: u32,
}

impl TextureSize {
    /// Creates a size.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// A size usable as a divisor: both dimensions non-zero.
    #[must_use]
    pub fn is_usable(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Resolves texture names to their pixel size.
pub trait TextureLookup {
    /// Returns the size of the named texture, or `None` if it is unknown.
    fn resolve(&self, name: &str) -> Option<TextureSize>;
}

impl<S: BuildHasher> TextureLookup for HashMap<String, TextureSize, S> {
    fn resolve(&self, name: &str) -> Option<TextureSize> {
        self.get(name).copied()
    }
}

/// Which edge of the texture to snap to a point cloud.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoxAlignMode {
    Left,
    Right,
    Center,
    Top,
    Bottom,
}

/// The projection of a named texture onto a face.
///
/// `u_axis` and `v_axis` are unit vectors. Scales are never zero; a negative
/// scale mirrors the texture. Shifts are in texture pixels and `rotation` in
/// degrees.
#[derive(Debug, Clone, PartialEq)]
pub struct TextureReference {
    pub(crate) name: String,
    pub(crate) size: Option<TextureSize>,
    pub(crate) u_axis: Vector3,
    pub(crate) v_axis: Vector3,
    pub(crate) x_scale: f64,
    pub(crate) y_scale: f64,
    pub(crate) x_shift: f64,
    pub(crate) y_shift: f64,
    pub(crate) rotation: f64,
}

impl TextureReference {
    /// An unresolved reference with unit scale, no shift and X/-Z axes.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size: None,
            u_axis: Vector3::x(),
            v_axis: -Vector3::z(),
            x_scale: 1.0,
            y_scale: 1.0,
            x_shift: 0.0,
            y_shift: 0.0,
            rotation: 0.0,
        }
    }

    /// Sets the resolved size.
    #[must_use]
    pub fn with_size(mut self, size: TextureSize) -> Self {
        self.size = size.is_usable().then_some(size);
        self
    }

    /// Sets both scales. Zero components are replaced by 1.
    #[must_use]
    pub fn with_scale(mut self, x_scale: f64, y_scale: f64) -> Self {
        self.x_scale = nonzero_or_one(x_scale);
        self.y_scale = nonzero_or_one(y_scale);
        self
    }

    /// Sets both shifts.
    #[must_use]
    pub fn with_shift(mut self, x_shift: f64, y_shift: f64) -> Self {
        self.x_shift = x_shift;
        self.y_shift = y_shift;
        self
    }

    /// Sets the projection axes. Axes that cannot be normalised, or that are
    /// parallel, leave the current axes in place.
    #[must_use]
    pub fn with_axes(mut self, u_axis: Vector3, v_axis: Vector3) -> Self {
        if let (Some(u), Some(v)) = (try_normalize(&u_axis), try_normalize(&v_axis)) {
            if try_normalize(&u.cross(&v)).is_some() {
                self.u_axis = u;
                self.v_axis = v;
            }
        }
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The resolved size, or `None` while the texture is unresolved.
    #[must_use]
    pub fn size(&self) -> Option<TextureSize> {
        self.size
    }

    #[must_use]
    pub fn u_axis(&self) -> &Vector3 {
        &self.u_axis
    }

    #[must_use]
    pub fn v_axis(&self) -> &Vector3 {
        &self.v_axis
    }

    #[must_use]
    pub fn x_scale(&self) -> f64 {
        self.x_scale
    }

    #[must_use]
    pub fn y_scale(&self) -> f64 {
        self.y_scale
    }

    #[must_use]
    pub fn x_shift(&self) -> f64 {
        self.x_shift
    }

    #[must_use]
    pub fn y_shift(&self) -> f64 {
        self.y_shift
    }

    /// Rotation in degrees, as last set.
    #[must_use]
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Normal of the texture plane, `u × v`, or `None` for parallel axes.
    #[must_use]
    pub fn normal(&self) -> Option<Vector3> {
        try_normalize(&self.u_axis.cross(&self.v_axis))
    }

    /// Width and height as floats, when resolved.
    pub(crate) fn dimensions(&self) -> Option<(f64, f64)> {
        self.size
            .map(|s| (f64::from(s.width), f64::from(s.height)))
    }
}

fn nonzero_or_one(value: f64) -> f64 {
    if value == 0.0 {
        1.0
    } else {
        value
    }
}
