/// A 4×5 transform over RGBA values, row-major with an implicit
/// `[0, 0, 0, 0, 1]` bottom row. The fifth column translates.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorMatrix {
    pub elements: [[f32; 5]; 4],
}

impl ColorMatrix {
    pub const IDENTITY: ColorMatrix = ColorMatrix {
        elements: [
            [1.0, 0.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 0.0, 1.0, 0.0],
        ],
    };

    pub fn scaling(r: f32, g: f32, b: f32, a: f32) -> Self {
        ColorMatrix {
            elements: [
                [r, 0.0, 0.0, 0.0, 0.0],
                [0.0, g, 0.0, 0.0, 0.0],
                [0.0, 0.0, b, 0.0, 0.0],
                [0.0, 0.0, 0.0, a, 0.0],
            ],
        }
    }

    pub fn translation(r: f32, g: f32, b: f32, a: f32) -> Self {
        ColorMatrix {
            elements: [
                [1.0, 0.0, 0.0, 0.0, r],
                [0.0, 1.0, 0.0, 0.0, g],
                [0.0, 0.0, 1.0, 0.0, b],
                [0.0, 0.0, 0.0, 1.0, a],
            ],
        }
    }

    /// Collapse RGB to luma, leaving alpha untouched.
    pub fn monochrome() -> Self {
        const R: f32 = 6968.0 / 32768.0;
        const G: f32 = 23434.0 / 32768.0;
        const B: f32 = 2366.0 / 32768.0;
        ColorMatrix {
            elements: [
                [R, G, B, 0.0, 0.0],
                [R, G, B, 0.0, 0.0],
                [R, G, B, 0.0, 0.0],
                [0.0, 0.0, 0.0, 1.0, 0.0],
            ],
        }
    }

    /// The transform that applies `self` first, then `other`.
    pub fn concat(self, other: ColorMatrix) -> ColorMatrix {
        let a = other.elements;
        let b = self.elements;
        let mut elements = [[0.0f32; 5]; 4];
        for (i, row) in elements.iter_mut().enumerate() {
            for (j, element) in row.iter_mut().enumerate() {
                *element = (0..4).map(|k| a[i][k] * b[k][j]).sum();
            }
            row[4] += a[i][4];
        }
        ColorMatrix { elements }
    }

    pub fn apply(&self, color: [f32; 4]) -> [f32; 4] {
        let mut out = [0.0f32; 4];
        for (i, channel) in out.iter_mut().enumerate() {
            let row = &self.elements[i];
            *channel = (0..4).map(|k| row[k] * color[k]).sum::<f32>() + row[4];
        }
        out
    }
}

impl Default for ColorMatrix {
    fn default() -> Self {
        ColorMatrix::IDENTITY
    }
}
