use crate::gl::GlApi;
use log::debug;

/// Explicit model of the process-wide framebuffer binding.
///
/// The driver is queried exactly once, at construction; afterwards every
/// binding change flows through this object, so the current framebuffer is
/// always known without further driver round trips. One `RenderContext`
/// exists per GL context, threaded `&mut` through all target operations.
pub struct RenderContext<A: GlApi> {
    api: A,
    bound: A::Framebuffer,
    default: A::Framebuffer,
}

impl<A: GlApi> RenderContext<A> {
    /// Wrap `api`, snapshotting the framebuffer bound right now as both the
    /// current and the default binding.
    pub fn new(api: A) -> Self {
        let bound = api.bound_framebuffer();
        debug!("render context created, default framebuffer {bound:?}");
        RenderContext {
            api,
            bound,
            default: bound,
        }
    }

    /// The raster API this context drives.
    pub fn api(&self) -> &A {
        &self.api
    }

    /// The framebuffer that was bound when this context was created.
    pub fn default_framebuffer(&self) -> A::Framebuffer {
        self.default
    }

    pub(crate) fn bound(&self) -> A::Framebuffer {
        self.bound
    }

    pub(crate) fn bind(&mut self, framebuffer: A::Framebuffer) {
        self.api.bind_framebuffer(framebuffer);
        self.bound = framebuffer;
    }

    /// Bind `framebuffer` until the returned guard drops; the previous
    /// binding is restored on every exit path.
    pub(crate) fn bind_scoped(&mut self, framebuffer: A::Framebuffer) -> ScopedBind<'_, A> {
        let previous = self.bound;
        self.bind(framebuffer);
        ScopedBind {
            previous,
            ctx: self,
        }
    }
}

pub(crate) struct ScopedBind<'a, A: GlApi> {
    ctx: &'a mut RenderContext<A>,
    previous: A::Framebuffer,
}

impl<A: GlApi> ScopedBind<'_, A> {
    pub(crate) fn api(&self) -> &A {
        &self.ctx.api
    }
}

impl<A: GlApi> Drop for ScopedBind<'_, A> {
    fn drop(&mut self) {
        self.ctx.bind(self.previous);
    }
}
