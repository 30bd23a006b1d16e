//! Render targets for OpenGL.
//!
//! This crate owns framebuffer lifecycle and binding state, derives
//! per-target projection matrices (including the vertical flip between the
//! default framebuffer and offscreen texture targets), and expands texture
//! parts into batched quad geometry. Shader programs and textures belong to
//! the caller; draws are handed off through [`QuadProgram`].

mod binding;
mod error;
mod framebuffer;
mod gl;
mod projection;
mod quad;
mod render_target;
mod texture;

pub use binding::RenderContext;
pub use error::{RenderError, Result};
pub use framebuffer::{FramebufferOwnership, GlFramebuffer};
pub use gl::{FramebufferStatus, GlApi, GlowContext, QuadProgram};
pub use projection::ProjectionMatrix;
pub use quad::{texture_quads, TextureQuad, TexturedVertex};
pub use render_target::RenderTarget;
pub use texture::GlImage;
