use crate::binding::RenderContext;
use crate::error::{RenderError, Result};
use crate::framebuffer::GlFramebuffer;
use crate::gl::{FramebufferStatus, GlApi, QuadProgram};
use crate::projection::ProjectionMatrix;
use crate::quad::texture_quads;
use crate::texture::GlImage;
use log::trace;
use quadrille_common::matrix::{ColorMatrix, GeometryMatrix};
use quadrille_common::{Size, TexturePart};

/// A destination surface for draw commands, backed by one framebuffer.
///
/// `size` is the logical extent the caller draws into; the GPU allocation
/// behind it may be padded to power-of-two dimensions, which the projection
/// compensates for.
pub struct RenderTarget<A: GlApi> {
    framebuffer: GlFramebuffer<A>,
    size: Size<u32>,
    flip_y: bool,
}

impl<A: GlApi> RenderTarget<A> {
    /// Wrap the framebuffer that was bound at context creation as the
    /// on-screen target.
    ///
    /// Content presented through the default framebuffer has its vertical
    /// axis opposite to texture sampling, so this target flips Y.
    pub fn from_bound(ctx: &RenderContext<A>, size: Size<u32>) -> Self {
        RenderTarget {
            framebuffer: GlFramebuffer::wrap_default(ctx),
            size,
            flip_y: true,
        }
    }

    /// Create an offscreen target rendering into `texture`.
    ///
    /// The texture stays owned by the caller and must outlive the target.
    /// The target must be disposed by its owner when no longer needed.
    pub fn offscreen(
        ctx: &mut RenderContext<A>,
        texture: A::Texture,
        size: Size<u32>,
    ) -> Result<Self> {
        let framebuffer = GlFramebuffer::offscreen(ctx, texture)?;
        Ok(RenderTarget {
            framebuffer,
            size,
            flip_y: false,
        })
    }

    pub fn size(&self) -> Size<u32> {
        self.size
    }

    pub fn flip_y(&self) -> bool {
        self.flip_y
    }

    /// Make this target the active framebuffer, with its viewport and
    /// blend mode set.
    ///
    /// A no-op when the target is already bound: repeated draws to one
    /// target issue no redundant driver calls. Switching targets flushes
    /// pending commands first, so draws land in submission order across
    /// targets. A target whose framebuffer fails completeness validation
    /// is a fatal configuration defect, reported as
    /// [`RenderError::FramebufferIncomplete`].
    pub fn ensure_bound(&self, ctx: &mut RenderContext<A>) -> Result<()> {
        if ctx.bound() == self.framebuffer.handle() {
            return Ok(());
        }

        ctx.api().flush();
        trace!("switching to framebuffer {:?}", self.framebuffer.handle());
        ctx.bind(self.framebuffer.handle());
        if let FramebufferStatus::Incomplete(code) = ctx.api().framebuffer_status() {
            return Err(RenderError::FramebufferIncomplete(code));
        }

        ctx.api().enable_alpha_blending();
        ctx.api().set_viewport(self.size.adjusted_for_texture());
        Ok(())
    }

    /// Clear the whole target to the given color, fully opaque.
    ///
    /// Alpha is always forced to `1.0`: a target is an opaque surface, and
    /// partial alpha on one would make downstream compositing ambiguous.
    pub fn fill(&self, ctx: &mut RenderContext<A>, red: u8, green: u8, blue: u8) -> Result<()> {
        self.ensure_bound(ctx)?;
        const MAX: f32 = u8::MAX as f32;
        ctx.api().clear([
            f32::from(red) / MAX,
            f32::from(green) / MAX,
            f32::from(blue) / MAX,
            1.0,
        ]);
        Ok(())
    }

    /// Projection from this target's pixel space to normalized device
    /// coordinates, over the padded canvas.
    pub fn projection_matrix(&self) -> ProjectionMatrix {
        let padded = self.size.adjusted_for_texture();
        let matrix = ProjectionMatrix::ortho(padded);
        if self.flip_y {
            matrix.flipped_y(self.size.height, padded.height)
        } else {
            matrix
        }
    }

    /// Draw `parts` of `image` into this target through `program`.
    ///
    /// Quads are built against the texture's dimensions, not the target's.
    /// The texture behind `image` must not be the one backing this target;
    /// sampling and rendering the same texture in one draw is undefined.
    pub fn draw_texture<P: QuadProgram<A>>(
        &self,
        ctx: &mut RenderContext<A>,
        program: &mut P,
        image: &GlImage<A>,
        parts: &[TexturePart],
        geometry: &GeometryMatrix,
        color: &ColorMatrix,
    ) -> Result<()> {
        self.ensure_bound(ctx)?;
        let projection = self.projection_matrix();
        let quads = texture_quads(parts, image.size);
        program.draw_texture(image.handle, &projection.to_gl(), &quads, geometry, color);
        Ok(())
    }

    /// Release the framebuffer owned by this target.
    ///
    /// Only offscreen targets own one; disposing the on-screen target is
    /// an error. Consuming `self` makes any later use impossible.
    pub fn dispose(self, ctx: &mut RenderContext<A>) -> Result<()> {
        self.framebuffer.dispose(ctx)
    }
}

#[cfg(test)]
mod test {
    use super::RenderTarget;
    use crate::binding::RenderContext;
    use crate::error::RenderError;
    use crate::gl::recording::{GlCall, RecordingContext};
    use crate::gl::QuadProgram;
    use crate::quad::TextureQuad;
    use crate::texture::GlImage;
    use quadrille_common::matrix::{ColorMatrix, GeometryMatrix};
    use quadrille_common::{Rect, Size, TexturePart};

    #[derive(Default)]
    struct RecordingProgram {
        draws: Vec<(u32, [f32; 16], Vec<TextureQuad>)>,
    }

    impl QuadProgram<RecordingContext> for RecordingProgram {
        fn draw_texture(
            &mut self,
            texture: u32,
            projection: &[f32; 16],
            quads: &[TextureQuad],
            _geometry: &GeometryMatrix,
            _color: &ColorMatrix,
        ) {
            self.draws.push((texture, *projection, quads.to_vec()));
        }
    }

    fn offscreen_target(
        ctx: &mut RenderContext<RecordingContext>,
        size: Size<u32>,
    ) -> RenderTarget<RecordingContext> {
        let target = RenderTarget::offscreen(ctx, 42, size).unwrap();
        ctx.api().take_calls();
        target
    }

    #[test]
    fn binding_twice_issues_the_sequence_once() {
        let mut ctx = RenderContext::new(RecordingContext::new());
        let target = offscreen_target(&mut ctx, Size::new(100, 50));

        target.ensure_bound(&mut ctx).unwrap();
        assert_eq!(
            ctx.api().take_calls(),
            vec![
                GlCall::Flush,
                GlCall::BindFramebuffer(1),
                GlCall::CheckStatus,
                GlCall::EnableAlphaBlending,
                GlCall::SetViewport(Size::new(128, 64)),
            ]
        );

        target.ensure_bound(&mut ctx).unwrap();
        assert!(ctx.api().calls().is_empty());
    }

    #[test]
    fn switching_targets_flushes_before_rebinding() {
        let mut ctx = RenderContext::new(RecordingContext::new());
        let a = offscreen_target(&mut ctx, Size::new(32, 32));
        let b = offscreen_target(&mut ctx, Size::new(32, 32));

        a.ensure_bound(&mut ctx).unwrap();
        ctx.api().take_calls();
        b.ensure_bound(&mut ctx).unwrap();

        let calls = ctx.api().calls();
        let flush = calls.iter().position(|c| *c == GlCall::Flush).unwrap();
        let bind = calls
            .iter()
            .position(|c| matches!(c, GlCall::BindFramebuffer(_)))
            .unwrap();
        assert!(flush < bind);
    }

    #[test]
    fn incomplete_framebuffer_on_bind_is_fatal() {
        let mut ctx = RenderContext::new(RecordingContext::new());
        let target = offscreen_target(&mut ctx, Size::new(32, 32));

        ctx.api().fail_completeness(0x8cd6);
        let err = target.ensure_bound(&mut ctx).unwrap_err();
        assert!(matches!(err, RenderError::FramebufferIncomplete(0x8cd6)));
    }

    #[test]
    fn fill_forces_opaque_alpha() {
        let mut ctx = RenderContext::new(RecordingContext::new());
        let target = offscreen_target(&mut ctx, Size::new(64, 64));

        target.fill(&mut ctx, 255, 0, 0).unwrap();
        let calls = ctx.api().calls();
        assert_eq!(calls.last(), Some(&GlCall::Clear([1.0, 0.0, 0.0, 1.0])));
    }

    #[test]
    fn on_screen_target_flips_offscreen_does_not() {
        let mut ctx = RenderContext::new(RecordingContext::new());
        let screen = RenderTarget::from_bound(&ctx, Size::new(100, 50));
        let offscreen = offscreen_target(&mut ctx, Size::new(100, 50));

        assert!(screen.flip_y());
        assert!(!offscreen.flip_y());

        let flipped = screen.projection_matrix();
        assert_eq!(flipped.0[1][1], -2.0 / 64.0);
        assert_eq!(flipped.0[1][3], -1.0 + 1.5625);

        let straight = offscreen.projection_matrix();
        assert_eq!(straight.0[1][1], 2.0 / 64.0);
        assert_eq!(straight.0[1][3], -1.0);
    }

    #[test]
    fn draw_texture_builds_quads_against_the_texture_size() {
        let mut ctx = RenderContext::new(RecordingContext::new());
        let target = offscreen_target(&mut ctx, Size::new(100, 50));
        let mut program = RecordingProgram::default();
        let image = GlImage::<RecordingContext> {
            handle: 7,
            size: Size::new(16, 16),
        };
        let parts = [TexturePart {
            dest_x: 0,
            dest_y: 0,
            source: Rect::new(0, 0, 8, 8),
        }];

        target
            .draw_texture(
                &mut ctx,
                &mut program,
                &image,
                &parts,
                &GeometryMatrix::IDENTITY,
                &ColorMatrix::IDENTITY,
            )
            .unwrap();

        let (texture, projection, quads) = &program.draws[0];
        assert_eq!(*texture, 7);
        assert_eq!(*projection, target.projection_matrix().to_gl());
        assert_eq!(quads.len(), 1);
        // UVs divide by the 16-texel texture, not the 128-texel canvas
        assert_eq!(quads[0].vertices[3].uv, [0.5, 0.5]);
    }

    #[test]
    fn draws_to_the_same_target_bind_once() {
        let mut ctx = RenderContext::new(RecordingContext::new());
        let target = offscreen_target(&mut ctx, Size::new(64, 64));

        target.fill(&mut ctx, 0, 0, 0).unwrap();
        ctx.api().take_calls();
        target.fill(&mut ctx, 10, 20, 30).unwrap();

        let calls = ctx.api().calls();
        assert_eq!(calls.len(), 1);
        assert!(matches!(calls[0], GlCall::Clear(_)));
    }

    #[test]
    fn dispose_consumes_only_owned_targets() {
        let mut ctx = RenderContext::new(RecordingContext::new());
        let screen = RenderTarget::from_bound(&ctx, Size::new(64, 64));
        let offscreen = offscreen_target(&mut ctx, Size::new(64, 64));

        assert!(matches!(
            screen.dispose(&mut ctx),
            Err(RenderError::BorrowedFramebuffer)
        ));
        assert!(offscreen.dispose(&mut ctx).is_ok());
    }
}
