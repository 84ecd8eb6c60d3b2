/// Arena bounds and step limits.

#[derive(Debug, Clone, Copy)]
pub struct ArenaTuning {
    /// Arena width in pixels.
    pub width: f32,

    /// Arena height in pixels.
    pub height: f32,

    /// Largest delta (seconds) a single step will integrate.
    ///
    /// Oversized frames are clamped so fast entities cannot skip past each other.
    pub max_step_seconds: f32,
}

impl Default for ArenaTuning {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            max_step_seconds: 0.1,
        }
    }
}
