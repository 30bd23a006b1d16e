mod context;

#[cfg(test)]
pub(crate) mod recording;

pub use context::GlowContext;

use crate::error::Result;
use crate::quad::TextureQuad;
use quadrille_common::matrix::{ColorMatrix, GeometryMatrix};
use quadrille_common::Size;
use std::fmt::Debug;

/// Completeness of the currently bound framebuffer.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FramebufferStatus {
    Complete,
    /// The raw status code reported by the driver.
    Incomplete(u32),
}

impl FramebufferStatus {
    pub fn is_complete(self) -> bool {
        self == FramebufferStatus::Complete
    }
}

/// The raster API consumed by render targets.
///
/// Only sequencing is part of this contract; which concrete calls and enum
/// values an implementation maps these operations to is its own business.
/// All methods issue immediate-mode commands on the calling thread.
pub trait GlApi {
    /// Opaque framebuffer handle. Must compare equal for the same GPU
    /// object so binding can be deduplicated.
    type Framebuffer: Copy + PartialEq + Debug;
    /// Opaque texture handle.
    type Texture: Copy + Debug;

    /// The framebuffer the driver currently has bound.
    ///
    /// Queried once when a [`RenderContext`](crate::RenderContext) is
    /// created; afterwards the binding is tracked in software.
    fn bound_framebuffer(&self) -> Self::Framebuffer;

    fn create_framebuffer(&self) -> Result<Self::Framebuffer>;

    fn bind_framebuffer(&self, framebuffer: Self::Framebuffer);

    /// Attach `texture` as the color attachment of the bound framebuffer.
    fn attach_texture(&self, texture: Self::Texture);

    /// Completeness of the bound framebuffer.
    fn framebuffer_status(&self) -> FramebufferStatus;

    fn delete_framebuffer(&self, framebuffer: Self::Framebuffer);

    /// Set the viewport to `[0, 0, size.width, size.height]`.
    fn set_viewport(&self, size: Size<u32>);

    /// Source-over blending for color; destination alpha is kept.
    fn enable_alpha_blending(&self);

    /// Clear the color buffer of the bound framebuffer to `color` (RGBA).
    fn clear(&self, color: [f32; 4]);

    /// Finish submitting all pending commands.
    fn flush(&self);
}

/// The draw submission collaborator.
///
/// An implementation binds whatever program and vertex state it needs and
/// must leave the bound framebuffer untouched. The transform matrices are
/// copied per call and not retained.
pub trait QuadProgram<A: GlApi> {
    fn draw_texture(
        &mut self,
        texture: A::Texture,
        projection: &[f32; 16],
        quads: &[TextureQuad],
        geometry: &GeometryMatrix,
        color: &ColorMatrix,
    );
}
