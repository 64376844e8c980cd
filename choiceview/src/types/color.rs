#[derive(Debug, Clone, PartialEq, Default)]
pub enum Color {
    /// No paint at all. A transparent background leaves whatever is already
    /// in the buffer untouched.
    #[default]
    Transparent,
    Rgb {
        r: u8,
        g: u8,
        b: u8,
    },
    Oklch {
        l: f32,
        c: f32,
        h: f32,
    },
    Derived {
        base: Box<Color>,
        ops: Vec<ColorOp>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ColorOp {
    Lighten(f32),
    Darken(f32),
    Mix(Color, f32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb { r, g, b }
    }

    pub const fn oklch(l: f32, c: f32, h: f32) -> Self {
        Self::Oklch { l, c, h }
    }

    pub fn lighten(self, amount: f32) -> Self {
        self.with_op(ColorOp::Lighten(amount))
    }

    pub fn darken(self, amount: f32) -> Self {
        self.with_op(ColorOp::Darken(amount))
    }

    /// Blend toward `other`. `amount` 0.0 keeps self, 1.0 yields `other`.
    pub fn mix(self, other: Color, amount: f32) -> Self {
        self.with_op(ColorOp::Mix(other, amount))
    }

    fn with_op(self, op: ColorOp) -> Self {
        match self {
            Self::Derived { base, mut ops } => {
                ops.push(op);
                Self::Derived { base, ops }
            }
            other => Self::Derived {
                base: Box::new(other),
                ops: vec![op],
            },
        }
    }

    pub fn is_transparent(&self) -> bool {
        match self {
            Self::Transparent => true,
            Self::Derived { base, .. } => base.is_transparent(),
            _ => false,
        }
    }

    /// Resolve to a concrete RGB value. `None` means transparent.
    pub fn to_rgb(&self) -> Option<Rgb> {
        match self {
            Self::Transparent => None,
            Self::Rgb { r, g, b } => Some(Rgb::new(*r, *g, *b)),
            Self::Oklch { l, c, h } => Some(oklch_to_rgb(*l, *c, *h)),
            Self::Derived { base, ops } => {
                let base = base.to_rgb()?;
                let mut lch = rgb_to_oklch(base);
                for op in ops {
                    match op {
                        ColorOp::Lighten(amount) => {
                            lch.0 = (lch.0 + amount).clamp(0.0, 1.0);
                        }
                        ColorOp::Darken(amount) => {
                            lch.0 = (lch.0 - amount).clamp(0.0, 1.0);
                        }
                        ColorOp::Mix(other, amount) => {
                            // Mixing with transparent is a no-op.
                            if let Some(other) = other.to_rgb() {
                                let o = rgb_to_oklch(other);
                                lch.0 = lch.0 * (1.0 - amount) + o.0 * amount;
                                lch.1 = lch.1 * (1.0 - amount) + o.1 * amount;
                                let mut diff = o.2 - lch.2;
                                if diff > 180.0 {
                                    diff -= 360.0;
                                } else if diff < -180.0 {
                                    diff += 360.0;
                                }
                                lch.2 = (lch.2 + diff * amount).rem_euclid(360.0);
                            }
                        }
                    }
                }
                Some(oklch_to_rgb(lch.0, lch.1, lch.2))
            }
        }
    }
}

fn oklch_to_rgb(l: f32, c: f32, h: f32) -> Rgb {
    use palette::{IntoColor, Oklch, Srgb};

    let oklch = Oklch::new(l, c, h);
    let srgb: Srgb = oklch.into_color();
    let (r, g, b) = srgb.into_format::<u8>().into_components();
    Rgb::new(r, g, b)
}

fn rgb_to_oklch(rgb: Rgb) -> (f32, f32, f32) {
    use palette::{IntoColor, Oklch, Srgb};

    let srgb = Srgb::new(rgb.r, rgb.g, rgb.b).into_format::<f32>();
    let oklch: Oklch = srgb.into_color();
    (
        oklch.l,
        oklch.chroma,
        oklch.hue.into_positive_degrees(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transparent_resolves_to_none() {
        assert_eq!(Color::Transparent.to_rgb(), None);
        assert!(Color::Transparent.lighten(0.5).to_rgb().is_none());
    }

    #[test]
    fn lighten_raises_lightness() {
        let base = Color::rgb(80, 80, 80).to_rgb().unwrap();
        let lighter = Color::rgb(80, 80, 80).lighten(0.3).to_rgb().unwrap();
        assert!(lighter.r > base.r);
    }

    #[test]
    fn mix_full_amount_matches_other() {
        let mixed = Color::rgb(255, 0, 0)
            .mix(Color::rgb(0, 0, 255), 1.0)
            .to_rgb()
            .unwrap();
        assert!(mixed.b > 200 && mixed.r < 60);
    }
}
