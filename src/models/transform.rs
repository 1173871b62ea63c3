//! # 坐标变换
//!
//! 绕坐标轴旋转的 3x3 变换矩阵，用于在渲染前调整分子朝向。
//!
//! ## 依赖关系
//! - 被 `models/molecule.rs` 和 `commands/render.rs` 使用
//! - 无外部模块依赖

/// 3x3 变换矩阵，行主序
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct XformMatrix(pub [[f64; 3]; 3]);

impl XformMatrix {
    pub fn identity() -> Self {
        XformMatrix([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]])
    }

    /// 绕 x 轴旋转（角度单位：度）
    pub fn x_rotation(deg: f64) -> Self {
        let (s, c) = deg.to_radians().sin_cos();
        XformMatrix([[1.0, 0.0, 0.0], [0.0, c, -s], [0.0, s, c]])
    }

    /// 绕 y 轴旋转
    pub fn y_rotation(deg: f64) -> Self {
        let (s, c) = deg.to_radians().sin_cos();
        XformMatrix([[c, 0.0, s], [0.0, 1.0, 0.0], [-s, 0.0, c]])
    }

    /// 绕 z 轴旋转
    pub fn z_rotation(deg: f64) -> Self {
        let (s, c) = deg.to_radians().sin_cos();
        XformMatrix([[c, -s, 0.0], [s, c, 0.0], [0.0, 0.0, 1.0]])
    }

    /// 先施加 `self`，再施加 `next`
    pub fn then(&self, next: &XformMatrix) -> XformMatrix {
        let a = next.0;
        let b = self.0;
        let mut m = [[0.0; 3]; 3];
        for (i, row) in m.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = (0..3).map(|k| a[i][k] * b[k][j]).sum();
            }
        }
        XformMatrix(m)
    }

    pub fn apply(&self, v: [f64; 3]) -> [f64; 3] {
        let m = self.0;
        [
            m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
            m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
            m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
        ]
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }
}

impl Default for XformMatrix {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_vec_eq(a: [f64; 3], b: [f64; 3]) {
        for i in 0..3 {
            assert!((a[i] - b[i]).abs() < 1e-9, "{:?} != {:?}", a, b);
        }
    }

    #[test]
    fn test_x_rotation_quarter_turn() {
        let v = XformMatrix::x_rotation(90.0).apply([0.0, 1.0, 0.0]);
        assert_vec_eq(v, [0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_y_rotation_quarter_turn() {
        let v = XformMatrix::y_rotation(90.0).apply([0.0, 0.0, 1.0]);
        assert_vec_eq(v, [1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_z_rotation_quarter_turn() {
        let v = XformMatrix::z_rotation(90.0).apply([1.0, 0.0, 0.0]);
        assert_vec_eq(v, [0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_full_turn_is_identity() {
        let v = XformMatrix::y_rotation(360.0).apply([0.3, -1.2, 2.5]);
        assert_vec_eq(v, [0.3, -1.2, 2.5]);
    }

    #[test]
    fn test_then_applies_in_order() {
        // x 轴先绕 z 转到 y，再绕 x 转到 z
        let m = XformMatrix::z_rotation(90.0).then(&XformMatrix::x_rotation(90.0));
        assert_vec_eq(m.apply([1.0, 0.0, 0.0]), [0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_identity() {
        assert!(XformMatrix::default().is_identity());
        assert!(!XformMatrix::z_rotation(10.0).is_identity());
    }
}
