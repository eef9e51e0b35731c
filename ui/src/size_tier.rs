//! Viewport width tiers and the layout values derived from them.

/// Named width bands. Boundaries are the breakpoints the layouts use.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum SizeTier {
    /// < 430
    Narrow,
    /// < 640
    Phone,
    /// < 768
    Phablet,
    /// < 860
    SmallTablet,
    /// < 1024
    Tablet,
    /// < 1512
    Laptop,
    /// < 1728
    Desktop,
    /// < 1920
    LargeDesktop,
    /// < 2560
    FullHd,
    Ultrawide,
}

impl SizeTier {
    pub fn from_width(width: u32) -> Self {
        match width {
            0..=429 => Self::Narrow,
            430..=639 => Self::Phone,
            640..=767 => Self::Phablet,
            768..=859 => Self::SmallTablet,
            860..=1023 => Self::Tablet,
            1024..=1511 => Self::Laptop,
            1512..=1727 => Self::Desktop,
            1728..=1919 => Self::LargeDesktop,
            1920..=2559 => Self::FullHd,
            _ => Self::Ultrawide,
        }
    }
}

/// Viewport the views render for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
}

impl Viewport {
    pub const DESKTOP: Viewport = Viewport { width: 1440 };
    pub const MOBILE: Viewport = Viewport { width: 390 };

    pub fn new(width: u32) -> Self {
        Self { width }
    }

    pub fn tier(&self) -> SizeTier {
        SizeTier::from_width(self.width)
    }

    pub fn is_mobile(&self) -> bool {
        self.width < 768
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Headline {
    Headline1,
    Headline2,
}

/// Layout of the landing-page hero block.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeroLayout {
    pub image_size: u32,
    pub padding_x: f64,
    pub headline: Headline,
    pub font_size: Option<u32>,
    pub image_right: f64,
}

impl HeroLayout {
    pub fn for_viewport(viewport: Viewport) -> Self {
        let w = viewport.width;
        let image_size = match w {
            0..=639 => 300,
            640..=859 => 400,
            _ => 600,
        };
        let padding_x = match w {
            0..=639 => 3.0,
            640..=1511 => 9.375,
            1512..=1727 => 14.0,
            1728..=1919 => 27.375,
            1920..=2559 => 39.375,
            _ => 49.25,
        };
        let size = f64::from(image_size);
        let width = f64::from(w);
        let image_right = match w {
            0..=860 => -(size / 4.0),
            861..=1440 => -(size / 15.0),
            1441..=1728 => width / 20.0,
            _ => width / 11.0,
        };
        Self {
            image_size,
            padding_x,
            headline: if w < 860 {
                Headline::Headline2
            } else {
                Headline::Headline1
            },
            font_size: (w < 430).then_some(50),
            image_right,
        }
    }
}

/// The "Voting power:" label next to the chip.
pub fn shows_chip_label(viewport: Viewport) -> bool {
    viewport.width >= 1024
}

/// Width of the update-metadata card.
pub fn metadata_page_width(viewport: Viewport) -> &'static str {
    match viewport.width {
        0..=767 => "auto",
        768..=1023 => "60vw",
        _ => "45vw",
    }
}
