use raylib::core::color::Color;
use crate::utils::{approx_eq, lerp_f32};

/// Normalized RGBA color, each channel in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::new(1.0, 1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Blends this color towards `target` in place. The factor is clamped to
    /// [0, 1], so overshooting past the target in one step is not possible.
    pub fn lerp(&mut self, target: Rgba, t: f32) {
        let t = t.clamp(0.0, 1.0);
        self.r = lerp_f32(self.r, target.r, t);
        self.g = lerp_f32(self.g, target.g, t);
        self.b = lerp_f32(self.b, target.b, t);
        self.a = lerp_f32(self.a, target.a, t);
        self.clamp();
    }

    /// True when every channel is within `delta` of the other color's.
    pub fn approx_eq(&self, other: &Rgba, delta: f32) -> bool {
        approx_eq(self.r, other.r, delta)
            && approx_eq(self.g, other.g, delta)
            && approx_eq(self.b, other.b, delta)
            && approx_eq(self.a, other.a, delta)
    }

    fn clamp(&mut self) {
        self.r = self.r.clamp(0.0, 1.0);
        self.g = self.g.clamp(0.0, 1.0);
        self.b = self.b.clamp(0.0, 1.0);
        self.a = self.a.clamp(0.0, 1.0);
    }
}

impl From<Rgba> for Color {
    fn from(c: Rgba) -> Self {
        Color {
            r: (c.r.clamp(0.0, 1.0) * 255.0).round() as u8,
            g: (c.g.clamp(0.0, 1.0) * 255.0).round() as u8,
            b: (c.b.clamp(0.0, 1.0) * 255.0).round() as u8,
            a: (c.a.clamp(0.0, 1.0) * 255.0).round() as u8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_moves_halfway() {
        let mut color = Rgba::new(0.0, 0.0, 0.0, 1.0);
        color.lerp(Rgba::new(1.0, 0.5, 0.0, 1.0), 0.5);
        assert_eq!(color, Rgba::new(0.5, 0.25, 0.0, 1.0));
    }

    #[test]
    fn lerp_clamps_the_factor() {
        let mut color = Rgba::new(0.2, 0.4, 0.6, 1.0);
        let target = Rgba::new(1.0, 0.0, 0.0, 1.0);
        color.lerp(target, 3.0);
        assert_eq!(color, target);

        let mut color = Rgba::new(0.2, 0.4, 0.6, 1.0);
        color.lerp(target, -1.0);
        assert_eq!(color, Rgba::new(0.2, 0.4, 0.6, 1.0));
    }

    #[test]
    fn approx_eq_requires_every_channel() {
        let a = Rgba::new(0.5, 0.5, 0.5, 1.0);
        assert!(a.approx_eq(&Rgba::new(0.55, 0.45, 0.5, 0.95), 0.1));
        assert!(!a.approx_eq(&Rgba::new(0.5, 0.5, 0.8, 1.0), 0.1));
    }

    #[test]
    fn converts_to_raylib_color() {
        let color: Color = Rgba::WHITE.into();
        assert_eq!(color, Color { r: 255, g: 255, b: 255, a: 255 });

        let color: Color = Rgba::new(0.0, 0.5, 1.0, 1.0).into();
        assert_eq!(color, Color { r: 0, g: 128, b: 255, a: 255 });
    }
}
