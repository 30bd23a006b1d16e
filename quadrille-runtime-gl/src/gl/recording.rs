//! Call-recording stand-in for [`GlApi`], for sequencing tests.

use crate::error::Result;
use crate::gl::{FramebufferStatus, GlApi};
use quadrille_common::Size;
use std::cell::{Cell, RefCell};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum GlCall {
    CreateFramebuffer(u32),
    BindFramebuffer(u32),
    AttachTexture(u32),
    CheckStatus,
    DeleteFramebuffer(u32),
    SetViewport(Size<u32>),
    EnableAlphaBlending,
    Clear([f32; 4]),
    Flush,
}

/// Records every call instead of touching a GPU. Framebuffer handles are
/// sequential integers, `0` standing in for the default framebuffer, and
/// completeness reports whatever the test configures.
pub(crate) struct RecordingContext {
    calls: RefCell<Vec<GlCall>>,
    next_framebuffer: Cell<u32>,
    status: Cell<FramebufferStatus>,
    initially_bound: u32,
}

impl RecordingContext {
    pub(crate) fn new() -> Self {
        Self::bound_to(0)
    }

    pub(crate) fn bound_to(framebuffer: u32) -> Self {
        RecordingContext {
            calls: RefCell::new(Vec::new()),
            next_framebuffer: Cell::new(1),
            status: Cell::new(FramebufferStatus::Complete),
            initially_bound: framebuffer,
        }
    }

    pub(crate) fn fail_completeness(&self, code: u32) {
        self.status.set(FramebufferStatus::Incomplete(code));
    }

    pub(crate) fn calls(&self) -> Vec<GlCall> {
        self.calls.borrow().clone()
    }

    /// Drain the log, so follow-up assertions start from a clean slate.
    pub(crate) fn take_calls(&self) -> Vec<GlCall> {
        self.calls.borrow_mut().drain(..).collect()
    }

    fn record(&self, call: GlCall) {
        self.calls.borrow_mut().push(call);
    }
}

impl GlApi for RecordingContext {
    type Framebuffer = u32;
    type Texture = u32;

    fn bound_framebuffer(&self) -> u32 {
        self.initially_bound
    }

    fn create_framebuffer(&self) -> Result<u32> {
        let handle = self.next_framebuffer.get();
        self.next_framebuffer.set(handle + 1);
        self.record(GlCall::CreateFramebuffer(handle));
        Ok(handle)
    }

    fn bind_framebuffer(&self, framebuffer: u32) {
        self.record(GlCall::BindFramebuffer(framebuffer));
    }

    fn attach_texture(&self, texture: u32) {
        self.record(GlCall::AttachTexture(texture));
    }

    fn framebuffer_status(&self) -> FramebufferStatus {
        self.record(GlCall::CheckStatus);
        self.status.get()
    }

    fn delete_framebuffer(&self, framebuffer: u32) {
        self.record(GlCall::DeleteFramebuffer(framebuffer));
    }

    fn set_viewport(&self, size: Size<u32>) {
        self.record(GlCall::SetViewport(size));
    }

    fn enable_alpha_blending(&self) {
        self.record(GlCall::EnableAlphaBlending);
    }

    fn clear(&self, color: [f32; 4]) {
        self.record(GlCall::Clear(color));
    }

    fn flush(&self) {
        self.record(GlCall::Flush);
    }
}
