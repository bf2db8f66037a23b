//! Physics type re-exports and boundary conversions
//!
//! The core mathematical types used throughout the demos, re-exported from
//! the glam library, plus the glam <-> nalgebra conversions used where poses
//! cross into rapier.

use nalgebra as na;

pub use glam::{Quat, Vec3};

/// Build a rapier isometry from a glam position and rotation.
pub fn to_isometry(position: Vec3, rotation: Quat) -> na::Isometry3<f32> {
    na::Isometry3::from_parts(
        na::Translation3::new(position.x, position.y, position.z),
        na::UnitQuaternion::from_quaternion(na::Quaternion::new(
            rotation.w, rotation.x, rotation.y, rotation.z,
        )),
    )
}

/// Split a rapier isometry into a glam position and rotation.
pub fn from_isometry(iso: &na::Isometry3<f32>) -> (Vec3, Quat) {
    let t = &iso.translation;
    let q = iso.rotation.into_inner().coords;
    (Vec3::new(t.x, t.y, t.z), Quat::from_xyzw(q.x, q.y, q.z, q.w))
}

/// glam vector to nalgebra vector.
pub fn to_vector(v: Vec3) -> na::Vector3<f32> {
    na::Vector3::new(v.x, v.y, v.z)
}

/// nalgebra vector to glam vector.
pub fn from_vector(v: &na::Vector3<f32>) -> Vec3 {
    Vec3::new(v.x, v.y, v.z)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_isometry_round_trip() {
        let position = Vec3::new(1.5, -2.0, 3.25);
        let rotation = Quat::from_euler(glam::EulerRot::XYZ, 0.4, -1.1, 2.0);

        let iso = to_isometry(position, rotation);
        let (p, q) = from_isometry(&iso);

        assert!((p - position).length() < 1e-5);
        // Quaternions double-cover rotations; compare via the dot product
        assert!(q.dot(rotation).abs() > 1.0 - 1e-5);
    }

    #[test]
    fn test_identity_pose() {
        let iso = to_isometry(Vec3::ZERO, Quat::IDENTITY);
        let (p, q) = from_isometry(&iso);
        assert_eq!(p, Vec3::ZERO);
        assert!((q.w - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_rotation_agrees_with_glam() {
        // The same rotation applied on both sides of the boundary must move
        // a point to the same place.
        let rotation = Quat::from_rotation_y(std::f32::consts::FRAC_PI_2);
        let iso = to_isometry(Vec3::ZERO, rotation);

        let p_na = iso.transform_point(&na::Point3::new(1.0, 0.0, 0.0));
        let p_glam = rotation * Vec3::new(1.0, 0.0, 0.0);

        assert!((p_na.x - p_glam.x).abs() < 1e-5);
        assert!((p_na.y - p_glam.y).abs() < 1e-5);
        assert!((p_na.z - p_glam.z).abs() < 1e-5);
    }

    #[test]
    fn test_vector_round_trip() {
        let v = Vec3::new(-7.0, 0.5, 12.0);
        assert_eq!(from_vector(&to_vector(v)), v);
    }
}
