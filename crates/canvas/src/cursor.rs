/// Pointer affordance the host should show over the canvas.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum CursorStyle {
    #[default]
    Default,
    Pointer,
}
