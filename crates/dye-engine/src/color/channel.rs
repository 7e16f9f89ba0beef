//! Dye channels and the color classifier.
//!
//! A color is *pure* when it is a single primary, two equal primaries with
//! the third at zero, or a grey. Pure colors belong to one of seven
//! channels and carry an intensity (their brightest component). Everything
//! else, and black, classifies as [`Channel::None`].

use std::fmt;

use super::pixel::Rgb;

/// One of the eight classification tags a color can fall into.
///
/// Declaration order matters: the classifier indexes [`Channel::PURE`] with
/// the bit mask `r | g << 1 | b << 2`, and maps iterate in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Channel {
    /// Red
    R,
    /// Green
    G,
    /// Yellow (red + green)
    Y,
    /// Blue
    B,
    /// Magenta (red + blue)
    M,
    /// Cyan (green + blue)
    C,
    /// White (red + green + blue, i.e. any grey)
    W,
    /// Not a pure dyeable color.
    ///
    /// Still usable as a map key: a palette assigned here recolors every
    /// impure color.
    None,
}

impl Channel {
    /// The seven pure channels, indexed by `mask - 1`.
    pub const PURE: [Channel; 7] = [
        Channel::R,
        Channel::G,
        Channel::Y,
        Channel::B,
        Channel::M,
        Channel::C,
        Channel::W,
    ];

    /// Resolve a channel from its descriptor name.
    ///
    /// The single letters `R G Y B M C W` are case-sensitive. The tag name
    /// `NONE` and every unrecognised token map to [`Channel::None`].
    ///
    /// ```
    /// use dye_engine::Channel;
    ///
    /// assert_eq!(Channel::from_letter("M"), Channel::M);
    /// assert_eq!(Channel::from_letter("m"), Channel::None);
    /// assert_eq!(Channel::from_letter("RG"), Channel::None);
    /// ```
    pub fn from_letter(name: &str) -> Channel {
        match name {
            "R" => Channel::R,
            "G" => Channel::G,
            "Y" => Channel::Y,
            "B" => Channel::B,
            "M" => Channel::M,
            "C" => Channel::C,
            "W" => Channel::W,
            _ => Channel::None,
        }
    }

    /// The descriptor letter for this channel, `None` for [`Channel::None`].
    pub const fn letter(self) -> Option<char> {
        match self {
            Channel::R => Some('R'),
            Channel::G => Some('G'),
            Channel::Y => Some('Y'),
            Channel::B => Some('B'),
            Channel::M => Some('M'),
            Channel::C => Some('C'),
            Channel::W => Some('W'),
            Channel::None => None,
        }
    }

    /// The full-saturation color this channel stands for.
    pub const fn color(self) -> Option<Rgb> {
        match self {
            Channel::R => Some(Rgb::new(255, 0, 0)),
            Channel::G => Some(Rgb::new(0, 255, 0)),
            Channel::Y => Some(Rgb::new(255, 255, 0)),
            Channel::B => Some(Rgb::new(0, 0, 255)),
            Channel::M => Some(Rgb::new(255, 0, 255)),
            Channel::C => Some(Rgb::new(0, 255, 255)),
            Channel::W => Some(Rgb::new(255, 255, 255)),
            Channel::None => None,
        }
    }

    /// Classify a color into its channel and intensity.
    ///
    /// The intensity is the largest component. Black is `(None, 0)`; an
    /// impure color is `(None, max)` so a palette on [`Channel::None`] can
    /// still use it.
    ///
    /// ```
    /// use dye_engine::{Channel, Rgb};
    ///
    /// assert_eq!(Channel::classify(Rgb::new(200, 0, 0)), (Channel::R, 200));
    /// assert_eq!(Channel::classify(Rgb::new(0, 150, 150)), (Channel::C, 150));
    /// assert_eq!(Channel::classify(Rgb::new(90, 90, 90)), (Channel::W, 90));
    /// assert_eq!(Channel::classify(Rgb::new(10, 20, 0)), (Channel::None, 20));
    /// ```
    pub fn classify(color: Rgb) -> (Channel, u8) {
        let Rgb { r, g, b } = color;
        let cmax = r.max(g).max(b);
        if cmax == 0 {
            return (Channel::None, 0);
        }

        let cmin = r.min(g).min(b);
        let (max, min) = (cmax as u16, cmin as u16);
        let sum = r as u16 + g as u16 + b as u16;

        if min != max && (min != 0 || (sum != max && sum != 2 * max)) {
            return (Channel::None, cmax);
        }

        let mask = (r != 0) as usize | ((g != 0) as usize) << 1 | ((b != 0) as usize) << 2;
        (Channel::PURE[mask - 1], cmax)
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = [0u8; 4];
        f.pad(match self.letter() {
            Some(letter) => &*letter.encode_utf8(&mut buf),
            None => "NONE",
        })
    }
}
