/// Drawable area in physical pixels, origin at the bottom-left as GL expects.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns `(x, y, width, height)` as `glViewport` arguments.
    ///
    /// Dimensions beyond `i32::MAX` saturate instead of wrapping negative.
    pub fn gl_rect(self) -> (i32, i32, i32, i32) {
        let w = i32::try_from(self.width).unwrap_or(i32::MAX);
        let h = i32::try_from(self.height).unwrap_or(i32::MAX);
        (0, 0, w, h)
    }
}
