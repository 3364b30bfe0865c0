//! Forward kinematics of a serial arm with revolute joints.
type Vec3 = [f32; 3];
type Mat3 = [[f32; 3]; 3];

const IDENTITY: Mat3 = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];

/// Rotation axis of a joint.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum JointAxis {
    /// About the local Y axis, moving the arm in its XZ plane.
    Pitch,

    /// About the local X axis.
    Yaw,
}

fn rotation(axis: JointAxis, q: f32) -> Mat3 {
    let (s, c) = q.sin_cos();
    match axis {
        JointAxis::Pitch => [[c, 0.0, s], [0.0, 1.0, 0.0], [-s, 0.0, c]],
        JointAxis::Yaw => [[1.0, 0.0, 0.0], [0.0, c, -s], [0.0, s, c]],
    }
}

fn matmul(a: &Mat3, b: &Mat3) -> Mat3 {
    let mut m = [[0.0; 3]; 3];
    for i in 0..3 {
        for j in 0..3 {
            m[i][j] = (0..3).map(|k| a[i][k] * b[k][j]).sum();
        }
    }
    m
}

/// Positions of the end of every link, the last one being the end-effector.
///
/// Each link extends along the local Z axis after the rotation of its joint.
pub(crate) fn link_positions(
    base: &Vec3,
    axes: &[JointAxis],
    lengths: &[f32],
    q: &[f32],
) -> Vec<Vec3> {
    let mut r = IDENTITY;
    let mut p = *base;
    axes.iter()
        .zip(lengths.iter())
        .zip(q.iter())
        .map(|((axis, l), q)| {
            r = matmul(&r, &rotation(*axis, *q));
            for i in 0..3 {
                p[i] += r[i][2] * l;
            }
            p
        })
        .collect()
}

pub(crate) fn distance(a: &[f32], b: &[f32]) -> f32 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f32>()
        .sqrt()
}

#[cfg(test)]
mod test {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn close(a: &Vec3, b: &Vec3) -> bool {
        distance(a, b) < 1e-5
    }

    #[test]
    fn test_upright() {
        let axes = [JointAxis::Pitch, JointAxis::Yaw];
        let ps = link_positions(&[0.0, 0.0, 0.0], &axes, &[0.5, 0.5], &[0.0, 0.0]);
        assert!(close(&ps[0], &[0.0, 0.0, 0.5]));
        assert!(close(&ps[1], &[0.0, 0.0, 1.0]));
    }

    #[test]
    fn test_pitch_bends_towards_x() {
        let axes = [JointAxis::Pitch, JointAxis::Pitch];
        let ps = link_positions(&[0.0, 0.0, 0.0], &axes, &[0.5, 0.5], &[FRAC_PI_2, 0.0]);
        assert!(close(&ps[1], &[1.0, 0.0, 0.0]));

        let ps = link_positions(&[0.0, 0.0, 0.0], &axes, &[0.5, 0.5], &[0.0, FRAC_PI_2]);
        assert!(close(&ps[1], &[0.5, 0.0, 0.5]));
    }

    #[test]
    fn test_yaw_bends_towards_minus_y() {
        let axes = [JointAxis::Yaw];
        let ps = link_positions(&[1.0, 1.0, 1.0], &axes, &[1.0], &[FRAC_PI_2]);
        assert!(close(&ps[0], &[1.0, 0.0, 1.0]));
    }

    #[test]
    fn test_reach_is_bounded() {
        let axes = [JointAxis::Pitch, JointAxis::Yaw, JointAxis::Pitch];
        let ps = link_positions(&[0.0; 3], &axes, &[0.3, 0.3, 0.4], &[0.7, -1.2, 0.4]);
        assert!(distance(&ps[2], &[0.0; 3]) <= 1.0 + 1e-5);
    }
}
