use crate::gl::GlApi;
use quadrille_common::Size;

/// A native texture handle with the dimensions it was allocated at.
///
/// The texture itself is owned elsewhere; targets only sample from it.
pub struct GlImage<A: GlApi> {
    pub handle: A::Texture,
    pub size: Size<u32>,
}

impl<A: GlApi> Clone for GlImage<A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A: GlApi> Copy for GlImage<A> {}
