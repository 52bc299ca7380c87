use canvas::surface::CLEAR_COLOR;
use canvas::{RenderCommand, RenderFrame};

/// Alpha of the per-frame fade wash.
pub const FADE_ALPHA: f32 = 0.15;

/// Motion-trail backdrop.
///
/// Washes the whole surface with a translucent coat of the backdrop color
/// instead of clearing, so the previous frame bleeds through and moving dots
/// leave fading trails.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BackdropLayer {
    pub fade: f32,
}

impl Default for BackdropLayer {
    fn default() -> Self {
        Self { fade: FADE_ALPHA }
    }
}

impl BackdropLayer {
    pub fn emit(&self, out: &mut RenderFrame) {
        out.push(RenderCommand::Overlay {
            color: CLEAR_COLOR.with_alpha(self.fade),
        });
    }
}
