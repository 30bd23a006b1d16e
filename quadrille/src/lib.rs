#![forbid(missing_docs)]
//! Batched textured-quad render targets for OpenGL.
//!
//! quadrille is the render-target layer of a 2D pipeline: it owns
//! framebuffer lifecycle and binding state, derives per-target projection
//! matrices (compensating for power-of-two texture padding and for the
//! vertical-axis mismatch between the default framebuffer and offscreen
//! texture targets), and expands texture parts into batched quad geometry.
//! Texture allocation and shader programs stay with the caller.
//!
//! ## Usage
//! Wrap a `glow` context in a [`runtime::gl::GlowContext`] and build one
//! [`runtime::gl::RenderContext`] from it on the thread owning the GL
//! context. The framebuffer bound at that moment becomes the on-screen
//! target via [`runtime::gl::RenderTarget::from_bound`]; offscreen targets
//! render into caller-allocated textures. `fill` and `draw_texture` bind
//! lazily, and switching targets flushes pending draws so they land in
//! submission order.

pub use quadrille_common::{Rect, Size, TexturePart};

/// Geometry and color transforms applied per draw call.
pub mod matrix {
    pub use quadrille_common::matrix::*;
}

/// Runtimes executing draws on a GPU surface.
#[cfg(feature = "runtime")]
pub mod runtime {
    /// Render target runtime for OpenGL 3.3+.
    #[cfg(feature = "gl")]
    pub mod gl {
        pub use quadrille_runtime_gl::*;
    }
}
