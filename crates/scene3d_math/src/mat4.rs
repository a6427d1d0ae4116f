//! 4x4 homogeneous matrices for 3D placement
//!
//! Matrices are stored column-major (`m[column][row]`), the same layout the
//! rest of the crate multiplies with. The scene document wants them flattened
//! row by row, which is what [`to_row_major`] produces.

use crate::Vec3;

/// 4x4 matrix type (column-major)
pub type Mat4 = [[f64; 4]; 4];

/// Identity matrix
pub const IDENTITY: Mat4 = [
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0, 1.0],
];

/// Convert an angle in degrees to radians
#[inline]
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * std::f64::consts::PI / 180.0
}

/// Create a rotation matrix in the plane spanned by two axes.
///
/// Rotates axis `p1` toward axis `p2` by `angle` radians.
///
/// # Arguments
/// * `angle` - Rotation angle in radians
/// * `p1`, `p2` - Indices of the axes forming the rotation plane (0=X, 1=Y, 2=Z)
///
/// # Example
/// ```
/// use scene3d_math::mat4::plane_rotation;
/// // Rotation about X turns Y toward Z
/// let m = plane_rotation(0.5, 1, 2);
/// ```
pub fn plane_rotation(angle: f64, p1: usize, p2: usize) -> Mat4 {
    let cs = angle.cos();
    let sn = angle.sin();

    let mut m = IDENTITY;

    m[p1][p1] = cs;
    m[p2][p2] = cs;
    m[p1][p2] = sn;
    m[p2][p1] = -sn;

    m
}

/// Rotation about the X axis (the YZ plane), angle in degrees
pub fn rotation_x(degrees: f64) -> Mat4 {
    plane_rotation(degrees_to_radians(degrees), 1, 2)
}

/// Rotation about the Y axis (the ZX plane), angle in degrees
pub fn rotation_y(degrees: f64) -> Mat4 {
    plane_rotation(degrees_to_radians(degrees), 2, 0)
}

/// Rotation about the Z axis (the XY plane), angle in degrees
pub fn rotation_z(degrees: f64) -> Mat4 {
    plane_rotation(degrees_to_radians(degrees), 0, 1)
}

/// Pure translation matrix
pub fn translation(offset: Vec3) -> Mat4 {
    let mut m = IDENTITY;
    m[3][0] = offset.x;
    m[3][1] = offset.y;
    m[3][2] = offset.z;
    m
}

/// Multiply two 4x4 matrices: result = a * b
///
/// In column-major convention, this applies b first, then a.
#[allow(clippy::needless_range_loop)]
pub fn mul(a: Mat4, b: Mat4) -> Mat4 {
    let mut result = [[0.0f64; 4]; 4];

    for i in 0..4 {
        for j in 0..4 {
            for k in 0..4 {
                result[i][j] += a[k][j] * b[i][k];
            }
        }
    }

    result
}

/// Transform a point (w = 1) by a 4x4 matrix
pub fn transform_point(m: Mat4, p: Vec3) -> Vec3 {
    Vec3::new(
        m[0][0] * p.x + m[1][0] * p.y + m[2][0] * p.z + m[3][0],
        m[0][1] * p.x + m[1][1] * p.y + m[2][1] * p.z + m[3][1],
        m[0][2] * p.x + m[1][2] * p.y + m[2][2] * p.z + m[3][2],
    )
}

/// Flatten to 16 entries, row by row
pub fn to_row_major(m: Mat4) -> [f64; 16] {
    let mut out = [0.0; 16];
    for row in 0..4 {
        for col in 0..4 {
            out[row * 4 + col] = m[col][row];
        }
    }
    out
}

/// Transpose a matrix
pub fn transpose(m: Mat4) -> Mat4 {
    [
        [m[0][0], m[1][0], m[2][0], m[3][0]],
        [m[0][1], m[1][1], m[2][1], m[3][1]],
        [m[0][2], m[1][2], m[2][2], m[3][2]],
        [m[0][3], m[1][3], m[2][3], m[3][3]],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    fn vec_approx_eq(a: Vec3, b: Vec3) -> bool {
        approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z)
    }

    fn rows_approx_eq(a: [f64; 16], b: [f64; 16]) -> bool {
        a.iter().zip(b.iter()).all(|(x, y)| approx_eq(*x, *y))
    }

    #[test]
    fn test_identity() {
        let p = Vec3::new(1.0, 2.0, 3.0);
        assert!(vec_approx_eq(transform_point(IDENTITY, p), p));
    }

    #[test]
    fn test_translation_row_major_layout() {
        let m = translation(Vec3::new(4.0, 5.0, 6.0));
        assert_eq!(
            to_row_major(m),
            [1.0, 0.0, 0.0, 4.0, 0.0, 1.0, 0.0, 5.0, 0.0, 0.0, 1.0, 6.0, 0.0, 0.0, 0.0, 1.0]
        );
    }

    #[test]
    fn test_rotation_x_layout() {
        let (s, c) = degrees_to_radians(30.0).sin_cos();
        let expected = [1.0, 0.0, 0.0, 0.0, 0.0, c, -s, 0.0, 0.0, s, c, 0.0, 0.0, 0.0, 0.0, 1.0];
        assert!(rows_approx_eq(to_row_major(rotation_x(30.0)), expected));
    }

    #[test]
    fn test_rotation_y_layout() {
        let (s, c) = degrees_to_radians(30.0).sin_cos();
        let expected = [c, 0.0, s, 0.0, 0.0, 1.0, 0.0, 0.0, -s, 0.0, c, 0.0, 0.0, 0.0, 0.0, 1.0];
        assert!(rows_approx_eq(to_row_major(rotation_y(30.0)), expected));
    }

    #[test]
    fn test_rotation_z_layout() {
        let (s, c) = degrees_to_radians(30.0).sin_cos();
        let expected = [c, -s, 0.0, 0.0, s, c, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0];
        assert!(rows_approx_eq(to_row_major(rotation_z(30.0)), expected));
    }

    #[test]
    fn test_right_handed_quarter_turns() {
        // X about Z -> Y, Y about X -> Z, Z about Y -> X
        assert!(vec_approx_eq(transform_point(rotation_z(90.0), Vec3::X), Vec3::Y));
        assert!(vec_approx_eq(transform_point(rotation_x(90.0), Vec3::Y), Vec3::Z));
        assert!(vec_approx_eq(transform_point(rotation_y(90.0), Vec3::Z), Vec3::X));
    }

    #[test]
    fn test_mul_applies_right_operand_first() {
        let m = mul(translation(Vec3::new(10.0, 0.0, 0.0)), rotation_z(90.0));
        // Rotate X to Y, then shift along X
        let result = transform_point(m, Vec3::X);
        assert!(vec_approx_eq(result, Vec3::new(10.0, 1.0, 0.0)), "got {:?}", result);
    }

    #[test]
    fn test_transpose_of_rotation_is_inverse() {
        let r = rotation_y(37.0);
        let product = mul(transpose(r), r);
        assert!(rows_approx_eq(to_row_major(product), to_row_major(IDENTITY)));
    }
}
