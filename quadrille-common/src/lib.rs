//! Vocabulary types shared by quadrille runtimes, independent of any GPU API.

pub mod matrix;

mod rect;

pub use rect::{Rect, TexturePart};

use num_traits::AsPrimitive;

/// A width and height pair.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Size<T> {
    pub width: T,
    pub height: T,
}

impl<T> Size<T> {
    pub fn new(width: T, height: T) -> Self {
        Size { width, height }
    }
}

impl<T> Size<T>
where
    T: Copy + 'static,
{
    /// Numeric cast of both dimensions.
    pub fn cast<U>(self) -> Size<U>
    where
        T: AsPrimitive<U>,
        U: Copy + 'static,
    {
        Size {
            width: self.width.as_(),
            height: self.height.as_(),
        }
    }
}

impl Size<u32> {
    /// The smallest size with power-of-two dimensions that holds `self`,
    /// with a floor of one texel per dimension.
    ///
    /// This is the padding rule for GPU texture allocation. Backends with
    /// native non-power-of-two support can pass sizes that are already
    /// padded, in which case this is the identity.
    pub fn adjusted_for_texture(self) -> Size<u32> {
        Size {
            width: self.width.next_power_of_two(),
            height: self.height.next_power_of_two(),
        }
    }
}
