use tracing::trace;

use crate::error::{OperationError, Result};
use crate::geometry::{Axis, Plane};
use crate::math::{rotate_about_axis, try_normalize, Point3, Vector3, TOLERANCE};
use crate::topology::Face;

use super::{BoxAlignMode, PointCloud, TextureLookup, TextureReference};

/// World-aligned texture axes for a plane whose normal is closest to `axis`.
fn world_axes(axis: Axis) -> (Vector3, Vector3) {
    let u = if axis == Axis::X {
        Vector3::y()
    } else {
        Vector3::x()
    };
    (u, world_v_axis(axis))
}

fn world_v_axis(axis: Axis) -> Vector3 {
    if axis == Axis::Z {
        -Vector3::y()
    } else {
        -Vector3::z()
    }
}

/// Reduces a shift into `(-size / 2, size / 2]`.
fn wrap_shift(shift: f64, size: f64) -> f64 {
    let wrapped = shift % size;
    if wrapped <= -size / 2.0 {
        wrapped + size
    } else if wrapped > size / 2.0 {
        wrapped - size
    } else {
        wrapped
    }
}

/// Signed angle rotating `from` onto `to` about `axis`.
fn signed_angle(from: &Vector3, to: &Vector3, axis: &Vector3) -> f64 {
    from.cross(to).dot(axis).atan2(from.dot(to))
}

fn rotate_point_about_line(point: &Point3, pivot: &Point3, axis: &Vector3, angle: f64) -> Point3 {
    pivot + rotate_about_axis(&(point - pivot), axis, angle)
}

/// Minimum and maximum of a non-empty sequence.
fn min_max(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    values.into_iter().fold(None, |acc, x| match acc {
        None => Some((x, x)),
        Some((lo, hi)) => Some((lo.min(x), hi.max(x))),
    })
}

impl Face {
    /// Looks up the texture size and recomputes texture coordinates.
    ///
    /// An unknown name leaves the texture unresolved.
    pub fn resolve_texture(&mut self, lookup: &dyn TextureLookup) {
        self.texture.size = lookup
            .resolve(&self.texture.name)
            .filter(super::TextureSize::is_usable);
        self.calculate_texture_coordinates();
    }

    /// Forgets the resolved texture size, zeroing texture coordinates.
    pub fn clear_texture_size(&mut self) {
        self.texture.size = None;
        self.calculate_texture_coordinates();
    }

    /// Replaces the texture projection and recomputes texture coordinates.
    pub fn set_texture(&mut self, texture: TextureReference) {
        self.texture = texture;
        self.calculate_texture_coordinates();
    }

    /// Sets both texture scales.
    ///
    /// # Errors
    ///
    /// Returns an error if either scale is zero.
    pub fn set_texture_scale(&mut self, x_scale: f64, y_scale: f64) -> Result<()> {
        if x_scale == 0.0 || y_scale == 0.0 {
            return Err(OperationError::InvalidInput("texture scale must be non-zero".into()).into());
        }
        self.texture.x_scale = x_scale;
        self.texture.y_scale = y_scale;
        self.calculate_texture_coordinates();
        Ok(())
    }

    /// Sets both texture shifts.
    pub fn set_texture_shift(&mut self, x_shift: f64, y_shift: f64) {
        self.texture.x_shift = x_shift;
        self.texture.y_shift = y_shift;
        self.calculate_texture_coordinates();
    }

    /// Projects every vertex onto the texture axes.
    ///
    /// `u = (p · u_axis) / (width · x_scale) + x_shift / width`, and likewise
    /// for `v`. Without a resolved texture every coordinate is zero.
    pub fn calculate_texture_coordinates(&mut self) {
        let Some((width, height)) = self.texture.dimensions() else {
            for vertex in &mut self.vertices {
                vertex.u = 0.0;
                vertex.v = 0.0;
            }
            return;
        };

        let tex = &self.texture;
        for vertex in &mut self.vertices {
            let p = &vertex.position.coords;
            vertex.u = p.dot(&tex.u_axis) / (width * tex.x_scale) + tex.x_shift / width;
            vertex.v = p.dot(&tex.v_axis) / (height * tex.y_scale) + tex.y_shift / height;
        }
    }

    /// Points the texture axes along the world axes best matching the face.
    pub fn align_texture_to_world(&mut self) {
        let (u, v) = world_axes(self.plane.closest_axis());
        self.texture.u_axis = u;
        self.texture.v_axis = v;
        self.texture.rotation = 0.0;
        self.calculate_texture_coordinates();
    }

    /// Lays the texture axes in the face plane.
    ///
    /// `u` is derived from the world `v` candidate first and `v` from `u`, so
    /// the texture never ends up facing away from the normal.
    pub fn align_texture_to_face(&mut self) {
        let normal = *self.plane.normal();
        let temp_v = world_v_axis(self.plane.closest_axis());
        if let Some(u) = try_normalize(&temp_v.cross(&normal)) {
            if let Some(v) = try_normalize(&normal.cross(&u)) {
                self.texture.u_axis = u;
                self.texture.v_axis = v;
            }
        }
        self.texture.rotation = 0.0;
        self.calculate_texture_coordinates();
    }

    /// Continues the texture of `reference` across the edge the two face
    /// planes share.
    ///
    /// The reference axes are folded about the common edge onto this face,
    /// and the shifts adjusted so both textures agree along that edge. For
    /// parallel planes the axes are copied unchanged. Scale is always copied.
    pub fn align_texture_with_face(&mut self, reference: &Face) {
        let source = &reference.texture;
        let mut u = source.u_axis;
        let mut v = source.v_axis;
        // Points where the reference texture coordinates are zero.
        let mut u_origin = Point3::from(-u * source.x_shift * source.x_scale);
        let mut v_origin = Point3::from(-v * source.y_shift * source.y_scale);

        let edge = reference.plane.normal().cross(self.plane.normal());
        if let Ok(edge_plane) = Plane::new(edge, 0.0) {
            if let (Some(pivot), Some(tex_normal)) = (
                Plane::intersect_three(&reference.plane, &self.plane, &edge_plane),
                source.normal(),
            ) {
                let facing = if tex_normal.dot(reference.plane.normal()) < 0.0 {
                    -1.0
                } else {
                    1.0
                };
                let from = try_normalize(&edge_plane.project_vector(&tex_normal));
                let to = try_normalize(&edge_plane.project_vector(&(self.plane.normal() * facing)));

                if let (Some(from), Some(to)) = (from, to) {
                    let axis = edge_plane.normal();
                    let angle = signed_angle(&from, &to, axis);
                    u = rotate_about_axis(&u, axis, angle);
                    v = rotate_about_axis(&v, axis, angle);
                    u_origin = rotate_point_about_line(&u_origin, &pivot, axis, angle);
                    v_origin = rotate_point_about_line(&v_origin, &pivot, axis, angle);
                }
            }
        }

        let tex = &mut self.texture;
        tex.rotation = 0.0;
        tex.u_axis = try_normalize(&u).unwrap_or(u);
        tex.v_axis = try_normalize(&v).unwrap_or(v);
        tex.x_shift = -tex.u_axis.dot(&u_origin.coords) / source.x_scale;
        tex.y_shift = -tex.v_axis.dot(&v_origin.coords) / source.y_scale;
        tex.x_scale = source.x_scale;
        tex.y_scale = source.y_scale;

        self.minimise_texture_shift_values();
        self.calculate_texture_coordinates();
    }

    /// Wraps the shifts into `(-width / 2, width / 2]` and
    /// `(-height / 2, height / 2]`.
    pub fn minimise_texture_shift_values(&mut self) {
        let Some((width, height)) = self.texture.dimensions() else {
            trace!(texture = %self.texture.name, "shift minimisation skipped: texture unresolved");
            return;
        };
        self.texture.x_shift = wrap_shift(self.texture.x_shift, width);
        self.texture.y_shift = wrap_shift(self.texture.y_shift, height);
        self.calculate_texture_coordinates();
    }

    /// Scales and shifts the texture so one copy exactly spans the cloud.
    ///
    /// An axis along which the cloud has no extent keeps its scale and shift.
    pub fn fit_texture_to_point_cloud(&mut self, cloud: &dyn PointCloud) {
        let Some((width, height)) = self.texture.dimensions() else {
            trace!(texture = %self.texture.name, "texture fit skipped: texture unresolved");
            return;
        };
        let points = cloud.extreme_points();
        let tex = &mut self.texture;

        if let Some((min_u, max_u)) = min_max(points.iter().map(|p| p.coords.dot(&tex.u_axis))) {
            if max_u - min_u > TOLERANCE {
                tex.x_scale = (max_u - min_u) / width;
                tex.x_shift = -min_u / tex.x_scale;
            }
        }
        if let Some((min_v, max_v)) = min_max(points.iter().map(|p| p.coords.dot(&tex.v_axis))) {
            if max_v - min_v > TOLERANCE {
                tex.y_scale = (max_v - min_v) / height;
                tex.y_shift = -min_v / tex.y_scale;
            }
        }

        self.minimise_texture_shift_values();
        self.calculate_texture_coordinates();
    }

    /// Shifts the texture so the chosen texture edge lines up with the edge
    /// of the cloud.
    ///
    /// `Left` and `Right` only move the X shift, `Top` and `Bottom` only the
    /// Y shift; `Center` moves both.
    pub fn align_texture_with_point_cloud(&mut self, cloud: &dyn PointCloud, mode: BoxAlignMode) {
        let Some((width, height)) = self.texture.dimensions() else {
            trace!(texture = %self.texture.name, "texture align skipped: texture unresolved");
            return;
        };
        let points = cloud.extreme_points();
        let tex = &mut self.texture;
        let us = min_max(points.iter().map(|p| p.coords.dot(&tex.u_axis) / tex.x_scale));
        let vs = min_max(points.iter().map(|p| p.coords.dot(&tex.v_axis) / tex.y_scale));
        let (Some((min_u, max_u)), Some((min_v, max_v))) = (us, vs) else {
            return;
        };

        match mode {
            BoxAlignMode::Left => tex.x_shift = -min_u,
            BoxAlignMode::Right => tex.x_shift = -max_u + width,
            BoxAlignMode::Center => {
                tex.x_shift = -(min_u + max_u) / 2.0 + width / 2.0;
                tex.y_shift = -(min_v + max_v) / 2.0 + height / 2.0;
            }
            BoxAlignMode::Top => tex.y_shift = -min_v,
            BoxAlignMode::Bottom => tex.y_shift = -max_v + height,
        }

        self.minimise_texture_shift_values();
        self.calculate_texture_coordinates();
    }

    /// Rotates the texture to an absolute angle in degrees about its own
    /// normal.
    pub fn set_texture_rotation(&mut self, degrees: f64) {
        let tex = &mut self.texture;
        let delta = (tex.rotation - degrees).to_radians();
        let axis = tex.v_axis.cross(&tex.u_axis);
        tex.u_axis = rotate_about_axis(&tex.u_axis, &axis, delta).normalize();
        tex.v_axis = rotate_about_axis(&tex.v_axis, &axis, delta).normalize();
        tex.rotation = degrees;
        self.calculate_texture_coordinates();
    }
}
