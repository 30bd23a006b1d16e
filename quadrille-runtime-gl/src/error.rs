use thiserror::Error;

/// Failure modes of render target operations.
///
/// Every variant signals a configuration or usage defect; nothing here is
/// retryable.
#[derive(Error, Debug)]
pub enum RenderError {
    /// The driver could not allocate a framebuffer object.
    #[error("fbo initialization error: {0}")]
    FramebufferInit(String),
    /// A framebuffer failed completeness validation after binding.
    #[error("framebuffer incomplete: {0:#06x}")]
    FramebufferIncomplete(u32),
    /// Dispose was called on a target that does not own its framebuffer.
    #[error("framebuffer is not owned by this target")]
    BorrowedFramebuffer,
}

/// Result type for render target operations.
pub type Result<T> = std::result::Result<T, RenderError>;
