/// A 2×3 affine transform over destination positions, row-major with an
/// implicit `[0, 0, 1]` bottom row.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GeometryMatrix {
    pub elements: [[f32; 3]; 2],
}

impl GeometryMatrix {
    pub const IDENTITY: GeometryMatrix = GeometryMatrix {
        elements: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
    };

    pub fn translation(tx: f32, ty: f32) -> Self {
        GeometryMatrix {
            elements: [[1.0, 0.0, tx], [0.0, 1.0, ty]],
        }
    }

    pub fn scaling(sx: f32, sy: f32) -> Self {
        GeometryMatrix {
            elements: [[sx, 0.0, 0.0], [0.0, sy, 0.0]],
        }
    }

    /// Counterclockwise rotation by `theta` radians about the origin.
    pub fn rotation(theta: f32) -> Self {
        let (sin, cos) = theta.sin_cos();
        GeometryMatrix {
            elements: [[cos, -sin, 0.0], [sin, cos, 0.0]],
        }
    }

    /// The transform that applies `self` first, then `other`.
    pub fn concat(self, other: GeometryMatrix) -> GeometryMatrix {
        let a = other.elements;
        let b = self.elements;
        let mut elements = [[0.0f32; 3]; 2];
        for (i, row) in elements.iter_mut().enumerate() {
            for (j, element) in row.iter_mut().enumerate() {
                *element = a[i][0] * b[0][j] + a[i][1] * b[1][j];
            }
            row[2] += a[i][2];
        }
        GeometryMatrix { elements }
    }

    pub fn apply(&self, x: f32, y: f32) -> (f32, f32) {
        let e = &self.elements;
        (
            e[0][0] * x + e[0][1] * y + e[0][2],
            e[1][0] * x + e[1][1] * y + e[1][2],
        )
    }
}

impl Default for GeometryMatrix {
    fn default() -> Self {
        GeometryMatrix::IDENTITY
    }
}
