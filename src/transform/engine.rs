//! Pose to homogeneous-transform computation.
//!
//! Pure functions, no state. The rotation is composed from explicit
//! elementary matrices rather than a combined closed form so the numeric
//! results match the reference computation exactly: Rx/Ry/Rz are built from
//! the angles in radians and multiplied as Rz · Ry · Rx (intrinsic X-Y-Z).

use nalgebra::{Matrix3, Matrix4, Vector3};

use crate::models::Pose;

/// Build the 3×3 rotation matrix for roll/pitch/yaw given in degrees.
///
/// Roll rotates about X, pitch about Y, yaw about Z, right-handed. The
/// composition order is fixed: `R = Rz(yaw) * Ry(pitch) * Rx(roll)`.
///
/// NaN or infinite angles propagate into the result; there are no error
/// conditions.
pub fn rotation_matrix(roll_deg: f64, pitch_deg: f64, yaw_deg: f64) -> Matrix3<f64> {
    let roll = roll_deg.to_radians();
    let pitch = pitch_deg.to_radians();
    let yaw = yaw_deg.to_radians();

    let rx = Matrix3::new(
        1.0, 0.0, 0.0,
        0.0, roll.cos(), -roll.sin(),
        0.0, roll.sin(), roll.cos(),
    );

    let ry = Matrix3::new(
        pitch.cos(), 0.0, pitch.sin(),
        0.0, 1.0, 0.0,
        -pitch.sin(), 0.0, pitch.cos(),
    );

    let rz = Matrix3::new(
        yaw.cos(), -yaw.sin(), 0.0,
        yaw.sin(), yaw.cos(), 0.0,
        0.0, 0.0, 1.0,
    );

    rz * ry * rx
}

/// Compute the 4×4 homogeneous transformation matrix for a pose.
///
/// The rotation block sits in the top-left 3×3, the translation in the
/// top-right column; the bottom row is exactly `(0, 0, 0, 1)`.
pub fn compute_transform(pose: &Pose) -> Matrix4<f64> {
    let rotation = rotation_matrix(pose.roll, pose.pitch, pose.yaw);

    let mut transform = Matrix4::identity();
    transform.fixed_view_mut::<3, 3>(0, 0).copy_from(&rotation);
    transform
        .fixed_view_mut::<3, 1>(0, 3)
        .copy_from(&Vector3::new(pose.x, pose.y, pose.z));
    transform
}
