use quadrille_common::Size;

/// Row-major 4×4 projection from target-local pixel coordinates to
/// normalized device coordinates.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ProjectionMatrix(pub [[f32; 4]; 4]);

impl ProjectionMatrix {
    /// Orthographic projection over `[0, width] × [0, height]`.
    pub fn ortho(size: Size<u32>) -> Self {
        let width = size.width as f32;
        let height = size.height as f32;
        ProjectionMatrix([
            [2.0 / width, 0.0, 0.0, -1.0],
            [0.0, 2.0 / height, 0.0, -1.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Mirror the vertical axis, keeping the logical `height` rows anchored
    /// at the top of the `padded_height` canvas.
    ///
    /// Negating the scale alone mirrors about the center of the padded
    /// canvas; the added translation of `2 * height / padded_height` moves
    /// the logical region back to the top edge.
    pub fn flipped_y(mut self, height: u32, padded_height: u32) -> Self {
        self.0[1][1] *= -1.0;
        self.0[1][3] += 2.0 * height as f32 / padded_height as f32;
        self
    }

    /// Column-major `[f32; 16]` layout, as GL uniforms expect.
    pub fn to_gl(&self) -> [f32; 16] {
        let mut out = [0.0f32; 16];
        for column in 0..4 {
            for row in 0..4 {
                out[row + column * 4] = self.0[row][column];
            }
        }
        out
    }
}
