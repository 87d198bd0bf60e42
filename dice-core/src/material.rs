/// Surface colors and Phong materials
use rand::Rng;

/// RGB color with components in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Color from a 0xRRGGBB literal
    pub fn from_hex(hex: u32) -> Self {
        let channel = |shift: u32| ((hex >> shift) & 0xff) as f32 / 255.0;
        Self::new(channel(16), channel(8), channel(0))
    }

    /// Hue wraps around [0, 1); saturation and lightness are clamped to [0, 1]
    pub fn from_hsl(hue: f32, saturation: f32, lightness: f32) -> Self {
        let h = hue.rem_euclid(1.0);
        let s = saturation.clamp(0.0, 1.0);
        let l = lightness.clamp(0.0, 1.0);

        if s == 0.0 {
            return Self::new(l, l, l);
        }

        let p = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let q = 2.0 * l - p;

        Self::new(
            hue_to_rgb(q, p, h + 1.0 / 3.0),
            hue_to_rgb(q, p, h),
            hue_to_rgb(q, p, h - 1.0 / 3.0),
        )
    }

    pub fn scale(self, factor: f32) -> Self {
        Self::new(self.r * factor, self.g * factor, self.b * factor)
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    /// Clamp and quantize to 8-bit channels
    pub fn to_rgb8(self) -> [u8; 3] {
        self.to_array().map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8)
    }
}

fn hue_to_rgb(p: f32, q: f32, t: f32) -> f32 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * 6.0 * (2.0 / 3.0 - t)
    } else {
        p
    }
}

/// Phong surface: diffuse color plus a faint specular highlight
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub color: Color,
    pub specular: Color,
    pub shininess: f32,
    /// Hue the color was generated from
    pub hue: f32,
}

impl Material {
    pub const SATURATION: f32 = 1.0;
    pub const LIGHTNESS: f32 = 0.5;

    /// Fully saturated, mid-lightness material of the given hue
    pub fn from_hue(hue: f32) -> Self {
        Self {
            color: Color::from_hsl(hue, Self::SATURATION, Self::LIGHTNESS),
            specular: Color::from_hex(0x111111),
            shininess: 30.0,
            hue,
        }
    }

    /// Material with a hue drawn uniformly from [0, 1)
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::from_hue(rng.gen::<f32>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn assert_color(actual: Color, expected: Color) {
        let diff = (actual.r - expected.r).abs()
            + (actual.g - expected.g).abs()
            + (actual.b - expected.b).abs();
        assert!(diff < 1e-5, "{actual:?} != {expected:?}");
    }

    #[test]
    fn test_hsl_primaries() {
        assert_color(Color::from_hsl(0.0, 1.0, 0.5), Color::new(1.0, 0.0, 0.0));
        assert_color(Color::from_hsl(1.0 / 3.0, 1.0, 0.5), Color::new(0.0, 1.0, 0.0));
        assert_color(Color::from_hsl(2.0 / 3.0, 1.0, 0.5), Color::new(0.0, 0.0, 1.0));
        assert_color(Color::from_hsl(0.5, 1.0, 0.5), Color::new(0.0, 1.0, 1.0));
    }

    #[test]
    fn test_hsl_edges() {
        // Hue wraps, saturation zero is grey, lightness is clamped
        assert_color(Color::from_hsl(1.0, 1.0, 0.5), Color::from_hsl(0.0, 1.0, 0.5));
        assert_color(Color::from_hsl(-0.25, 1.0, 0.5), Color::from_hsl(0.75, 1.0, 0.5));
        assert_color(Color::from_hsl(0.3, 0.0, 0.25), Color::new(0.25, 0.25, 0.25));
        assert_color(Color::from_hsl(0.3, 1.0, 2.0), Color::WHITE);
    }

    #[test]
    fn test_hex() {
        assert_color(Color::from_hex(0xffffff), Color::WHITE);
        assert_color(Color::from_hex(0x000000), Color::BLACK);
        assert_eq!(Color::from_hex(0x111111).to_rgb8(), [0x11, 0x11, 0x11]);
    }

    #[test]
    fn test_random_material_is_saturated() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..32 {
            let material = Material::random(&mut rng);
            assert!((0.0..1.0).contains(&material.hue));

            // Full saturation at lightness 0.5: one channel at 1, one at 0
            let channels = material.color.to_array();
            let max = channels.iter().cloned().fold(f32::MIN, f32::max);
            let min = channels.iter().cloned().fold(f32::MAX, f32::min);
            assert!((max - 1.0).abs() < 1e-5);
            assert!(min.abs() < 1e-5);
        }
    }

    #[test]
    fn test_random_hue_is_uniform() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut buckets = [0u32; 10];
        let draws = 10_000;
        for _ in 0..draws {
            let hue = Material::random(&mut rng).hue;
            buckets[((hue * 10.0) as usize).min(9)] += 1;
        }
        for count in buckets {
            // Expected 1000 per bucket; allow generous slack
            assert!((850..1150).contains(&count), "bucket count {count}");
        }
    }

    #[test]
    fn test_independent_draws() {
        let mut rng = StdRng::seed_from_u64(1);
        let a = Material::random(&mut rng);
        let b = Material::random(&mut rng);
        assert_ne!(a.hue, b.hue);
    }
}
