use rand::Rng;
use crate::color::Rgba;

// Function to pick a random color from the predefined list
pub fn random_color(rng: &mut impl Rng, colors: &[Rgba]) -> Option<Rgba> {
    if colors.is_empty() {
        None
    } else {
        let index = rng.gen_range(0..colors.len());
        Some(colors[index])
    }
}

// Linear interpolation for f32
pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

// Approximate equality with a tolerance
pub fn approx_eq(a: f32, b: f32, delta: f32) -> bool {
    (a - b).abs() <= delta
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn random_color_returns_none_for_empty_list() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(random_color(&mut rng, &[]), None);
    }

    #[test]
    fn random_color_picks_a_member() {
        let colors = [
            Rgba::new(1.0, 0.0, 0.0, 1.0),
            Rgba::new(0.0, 1.0, 0.0, 1.0),
            Rgba::new(0.0, 0.0, 1.0, 1.0),
        ];
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..20 {
            let picked = random_color(&mut rng, &colors).unwrap();
            assert!(colors.contains(&picked));
        }
    }

    #[test]
    fn lerp_f32_endpoints_and_midpoint() {
        assert_eq!(lerp_f32(0.0, 2.0, 0.0), 0.0);
        assert_eq!(lerp_f32(0.0, 2.0, 0.5), 1.0);
        assert_eq!(lerp_f32(0.0, 2.0, 1.0), 2.0);
    }

    #[test]
    fn approx_eq_is_inclusive_at_the_tolerance() {
        assert!(approx_eq(0.5, 0.6, 0.1));
        assert!(approx_eq(0.6, 0.5, 0.1));
        assert!(!approx_eq(0.5, 0.65, 0.1));
    }
}
