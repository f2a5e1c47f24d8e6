/// Straight-alpha color with 8-bit channels and a 0..1 alpha.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0.0);

    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }
}

/// Light/dark signal read from the host every tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark_flag(is_dark: bool) -> Self {
        if is_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub dot_rest: Rgba,
    pub dot_distorted: Rgba,
    /// Particle fill; alpha is replaced per particle.
    pub particle: Rgba,
    pub glow_inner: Rgba,
    pub glow_outer: Rgba,
}

const WHITE: Rgba = Rgba::new(255, 255, 255, 1.0);
const BLACK: Rgba = Rgba::new(0, 0, 0, 1.0);

pub const DARK_PALETTE: Palette = Palette {
    dot_rest: WHITE.with_alpha(0.35),
    dot_distorted: WHITE.with_alpha(0.45),
    particle: WHITE,
    glow_inner: WHITE.with_alpha(0.03),
    glow_outer: Rgba::TRANSPARENT,
};

pub const LIGHT_PALETTE: Palette = Palette {
    dot_rest: BLACK.with_alpha(0.35),
    dot_distorted: BLACK.with_alpha(0.48),
    particle: BLACK,
    glow_inner: BLACK.with_alpha(0.02),
    glow_outer: Rgba::TRANSPARENT,
};

impl Palette {
    pub fn for_theme(theme: Theme) -> &'static Palette {
        match theme {
            Theme::Dark => &DARK_PALETTE,
            Theme::Light => &LIGHT_PALETTE,
        }
    }
}
