/// A rectangular region.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Rect<T> {
    pub x: T,
    pub y: T,
    pub width: T,
    pub height: T,
}

impl<T> Rect<T> {
    pub fn new(x: T, y: T, width: T, height: T) -> Self {
        Rect {
            x,
            y,
            width,
            height,
        }
    }
}

/// A source rectangle within a texture paired with the destination offset it
/// is drawn at.
///
/// Parts referencing the same texture batch into a single draw call; parts
/// later in the batch draw over earlier ones where they overlap.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TexturePart {
    pub dest_x: i32,
    pub dest_y: i32,
    pub source: Rect<i32>,
}
