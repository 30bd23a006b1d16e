use crate::error::{RenderError, Result};
use crate::gl::{FramebufferStatus, GlApi};
use glow::HasContext;
use quadrille_common::Size;
use std::num::NonZeroU32;
use std::sync::Arc;

/// [`GlApi`] over a live [`glow::Context`].
///
/// Every raw GL call in the crate lives here. The context must be current
/// on the calling thread for the whole lifetime of this value.
pub struct GlowContext {
    ctx: Arc<glow::Context>,
}

impl GlowContext {
    pub fn new(ctx: Arc<glow::Context>) -> Self {
        GlowContext { ctx }
    }

    /// The underlying context, for collaborators issuing their own calls.
    pub fn context(&self) -> &Arc<glow::Context> {
        &self.ctx
    }
}

impl GlApi for GlowContext {
    type Framebuffer = Option<glow::Framebuffer>;
    type Texture = glow::Texture;

    fn bound_framebuffer(&self) -> Self::Framebuffer {
        let raw = unsafe { self.ctx.get_parameter_i32(glow::FRAMEBUFFER_BINDING) };
        NonZeroU32::new(raw as u32).map(glow::NativeFramebuffer)
    }

    fn create_framebuffer(&self) -> Result<Self::Framebuffer> {
        let framebuffer = unsafe {
            self.ctx
                .create_framebuffer()
                .map_err(RenderError::FramebufferInit)?
        };
        Ok(Some(framebuffer))
    }

    fn bind_framebuffer(&self, framebuffer: Self::Framebuffer) {
        unsafe {
            self.ctx.bind_framebuffer(glow::FRAMEBUFFER, framebuffer);
        }
    }

    fn attach_texture(&self, texture: Self::Texture) {
        unsafe {
            self.ctx.framebuffer_texture_2d(
                glow::FRAMEBUFFER,
                glow::COLOR_ATTACHMENT0,
                glow::TEXTURE_2D,
                Some(texture),
                0,
            );
        }
    }

    fn framebuffer_status(&self) -> FramebufferStatus {
        let status = unsafe { self.ctx.check_framebuffer_status(glow::FRAMEBUFFER) };
        if status == glow::FRAMEBUFFER_COMPLETE {
            FramebufferStatus::Complete
        } else {
            FramebufferStatus::Incomplete(status)
        }
    }

    fn delete_framebuffer(&self, framebuffer: Self::Framebuffer) {
        if let Some(framebuffer) = framebuffer {
            unsafe {
                self.ctx.delete_framebuffer(framebuffer);
            }
        }
    }

    fn set_viewport(&self, size: Size<u32>) {
        unsafe {
            self.ctx
                .viewport(0, 0, size.width as i32, size.height as i32);
        }
    }

    fn enable_alpha_blending(&self) {
        unsafe {
            self.ctx.enable(glow::BLEND);
            self.ctx.blend_func_separate(
                glow::SRC_ALPHA,
                glow::ONE_MINUS_SRC_ALPHA,
                glow::ZERO,
                glow::ONE,
            );
        }
    }

    fn clear(&self, color: [f32; 4]) {
        unsafe {
            self.ctx
                .clear_color(color[0], color[1], color[2], color[3]);
            self.ctx.clear(glow::COLOR_BUFFER_BIT);
        }
    }

    fn flush(&self) {
        unsafe {
            self.ctx.flush();
        }
    }
}
