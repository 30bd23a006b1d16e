use crate::binding::RenderContext;
use crate::error::{RenderError, Result};
use crate::gl::{FramebufferStatus, GlApi};
use log::debug;

/// Whether a framebuffer handle is released on dispose.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FramebufferOwnership {
    /// Created for an offscreen target; deleted exactly once on dispose.
    Owned,
    /// The pre-existing default framebuffer; never deleted here.
    Borrowed,
}

/// A GPU framebuffer handle together with its ownership.
pub struct GlFramebuffer<A: GlApi> {
    handle: A::Framebuffer,
    ownership: FramebufferOwnership,
}

impl<A: GlApi> std::fmt::Debug for GlFramebuffer<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlFramebuffer")
            .field("handle", &self.handle)
            .field("ownership", &self.ownership)
            .finish()
    }
}

impl<A: GlApi> GlFramebuffer<A> {
    /// Wrap the framebuffer that was bound when `ctx` was created.
    pub(crate) fn wrap_default(ctx: &RenderContext<A>) -> Self {
        GlFramebuffer {
            handle: ctx.default_framebuffer(),
            ownership: FramebufferOwnership::Borrowed,
        }
    }

    /// Create a framebuffer with `texture` as its color attachment.
    ///
    /// The new framebuffer is validated for completeness and cleared to
    /// opaque black. The previous binding is restored before returning,
    /// also when validation fails; on failure the fresh framebuffer is
    /// deleted before the error surfaces.
    pub(crate) fn offscreen(ctx: &mut RenderContext<A>, texture: A::Texture) -> Result<Self> {
        let handle = ctx.api().create_framebuffer()?;

        let status = {
            let scope = ctx.bind_scoped(handle);
            scope.api().attach_texture(texture);
            let status = scope.api().framebuffer_status();
            if status.is_complete() {
                // targets are opaque surfaces; fresh ones start as solid black
                scope.api().clear([0.0, 0.0, 0.0, 1.0]);
            }
            status
        };

        if let FramebufferStatus::Incomplete(code) = status {
            ctx.api().delete_framebuffer(handle);
            return Err(RenderError::FramebufferIncomplete(code));
        }

        debug!("created offscreen framebuffer {handle:?}");
        Ok(GlFramebuffer {
            handle,
            ownership: FramebufferOwnership::Owned,
        })
    }

    pub(crate) fn handle(&self) -> A::Framebuffer {
        self.handle
    }

    pub fn ownership(&self) -> FramebufferOwnership {
        self.ownership
    }

    /// Release the framebuffer.
    ///
    /// Errors on a borrowed handle: the default framebuffer outlives this
    /// component and must not be deleted through it. If the handle is
    /// currently bound, the default framebuffer is bound first so the
    /// tracked binding never dangles.
    pub(crate) fn dispose(self, ctx: &mut RenderContext<A>) -> Result<()> {
        if self.ownership == FramebufferOwnership::Borrowed {
            return Err(RenderError::BorrowedFramebuffer);
        }
        if ctx.bound() == self.handle {
            let default = ctx.default_framebuffer();
            ctx.bind(default);
        }
        debug!("deleting framebuffer {:?}", self.handle);
        ctx.api().delete_framebuffer(self.handle);
        Ok(())
    }
}
