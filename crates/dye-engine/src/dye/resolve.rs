//! Combined `NAME|CHANNELSPEC` resolution.
//!
//! Sprite references carry the channels they need after a `|`, e.g.
//! `"hair.png|R;W"`. The actual gradients come from a second descriptor,
//! whose bare segments are assigned to those channels in order.

use std::collections::VecDeque;

use super::descriptor::{parse_palettes_into, PaletteMap};
use super::dye::Dye;
use super::error::DescriptorError;
use crate::color::Channel;
use crate::palette::{split_fields, Palette};

/// An image name with its dye split off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDye {
    /// The name with any `|...` suffix removed
    pub name: String,
    /// The dye assembled from the suffix and the palette string
    pub dye: Dye,
}

/// Resolve an image name carrying a channel spec against a palette string.
///
/// The name is split at its first `|`. Each `;`-separated segment after it
/// is either a bare channel name, which is queued, or `LETTER:COLORLIST`,
/// which is assigned immediately (an empty color list stores an empty
/// palette). `palette_string` is then parsed with the channel-map grammar
/// against the queued channels.
///
/// Without a `|` the queue is empty, so `palette_string` must name every
/// channel explicitly.
///
/// # Errors
///
/// [`DescriptorError::QueueUnderflow`] if `palette_string` has more bare
/// segments than the name queued channels for.
///
/// # Example
///
/// ```
/// use dye_engine::{resolve_dyes, Channel, Rgb};
///
/// let resolved = resolve_dyes("hair.png|W;R", "#ffffff;#ff0000,#880000").unwrap();
///
/// assert_eq!(resolved.name, "hair.png");
/// let white = resolved.dye.palette(Channel::W).unwrap();
/// assert_eq!(white.colors(), &[Rgb::new(255, 255, 255)]);
/// assert_eq!(resolved.dye.palette(Channel::R).unwrap().len(), 2);
/// ```
pub fn resolve_dyes(name: &str, palette_string: &str) -> Result<ResolvedDye, DescriptorError> {
    let mut palettes = PaletteMap::new();
    let mut channels = VecDeque::new();

    let name = match name.split_once('|') {
        Some((base, spec)) => {
            for segment in split_fields(spec, ';') {
                match segment.split_once(':') {
                    Some((letter, colors)) => {
                        palettes.insert(Channel::from_letter(letter), Palette::parse(colors));
                    }
                    None => channels.push_back(Channel::from_letter(segment)),
                }
            }
            base
        }
        None => name,
    };

    parse_palettes_into(palette_string, &mut palettes, &mut channels)?;

    if !channels.is_empty() {
        tracing::debug!(name, unused = ?channels, "Channels left without palette data");
    }

    Ok(ResolvedDye {
        name: name.to_string(),
        dye: Dye::new(palettes),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plain_name_with_explicit_palettes() {
        let resolved = resolve_dyes("body.png", "R:#ff0000").unwrap();
        assert_eq!(resolved.name, "body.png");
        assert_eq!(resolved.dye, Dye::parse("R:#ff0000").unwrap());
    }

    #[test]
    fn test_plain_name_rejects_bare_palettes() {
        assert!(resolve_dyes("body.png", "#ff0000").is_err());
    }

    #[test]
    fn test_empty_inputs() {
        let resolved = resolve_dyes("", "").unwrap();
        assert_eq!(resolved.name, "");
        assert!(resolved.dye.is_empty());
    }

    #[test]
    fn test_queued_channels_take_bare_palettes_in_order() {
        let resolved = resolve_dyes("shirt.png|G;B;Y", "#001100;#000011;#111100").unwrap();
        let dye = resolved.dye;
        assert_eq!(dye.palette(Channel::G).unwrap().colors(), &[Rgb::new(0, 0x11, 0)]);
        assert_eq!(dye.palette(Channel::B).unwrap().colors(), &[Rgb::new(0, 0, 0x11)]);
        assert_eq!(dye.palette(Channel::Y).unwrap().colors(), &[Rgb::new(0x11, 0x11, 0)]);
    }

    #[test]
    fn test_explicit_segments_in_palette_string_skip_queue() {
        let resolved = resolve_dyes("a.png|R", "W:#ffffff;#ff0000").unwrap();
        let dye = resolved.dye;
        assert_eq!(dye.palette(Channel::W).unwrap().colors(), &[Rgb::new(255, 255, 255)]);
        assert_eq!(dye.palette(Channel::R).unwrap().colors(), &[Rgb::new(255, 0, 0)]);
    }

    #[test]
    fn test_explicit_segments_in_name_resolve_immediately() {
        let resolved = resolve_dyes("a.png|C:#00ffff;R", "#ff0000").unwrap();
        let dye = resolved.dye;
        assert_eq!(dye.palette(Channel::C).unwrap().colors(), &[Rgb::new(0, 255, 255)]);
        assert_eq!(dye.palette(Channel::R).unwrap().colors(), &[Rgb::new(255, 0, 0)]);
    }

    #[test]
    fn test_palette_string_overrides_name_palette() {
        let resolved = resolve_dyes("a.png|R:#ff0000", "R:#00ff00").unwrap();
        assert_eq!(
            resolved.dye.palette(Channel::R).unwrap().colors(),
            &[Rgb::new(0, 255, 0)]
        );
    }

    #[test]
    fn test_explicit_empty_segment_in_name_stores_empty_palette() {
        let resolved = resolve_dyes("a.png|R:", "").unwrap();
        let palette = resolved.dye.palette(Channel::R).unwrap();
        assert!(palette.is_empty());
    }

    #[test]
    fn test_more_palettes_than_channels_fails() {
        let result = resolve_dyes("a.png|R", "#ff0000;#00ff00");
        assert_eq!(
            result,
            Err(DescriptorError::QueueUnderflow {
                data: "#ff0000;#00ff00".to_string()
            })
        );
    }

    #[test]
    fn test_fewer_palettes_than_channels_is_fine() {
        let resolved = resolve_dyes("a.png|R;G;B", "#ff0000").unwrap();
        assert_eq!(resolved.dye.palettes().len(), 1);
        assert!(resolved.dye.palette(Channel::R).is_some());
    }

    #[test]
    fn test_split_on_first_pipe_only() {
        let resolved = resolve_dyes("a.png|R|G", "#ff0000").unwrap();
        assert_eq!(resolved.name, "a.png");
        // "R|G" is not a channel letter, so the queue holds NONE
        assert!(resolved.dye.palette(Channel::None).is_some());
    }

    #[test]
    fn test_empty_channel_spec_queues_none() {
        let resolved = resolve_dyes("a.png|", "#123456").unwrap();
        assert_eq!(resolved.name, "a.png");
        assert_eq!(
            resolved.dye.palette(Channel::None).unwrap().colors(),
            &[Rgb::new(0x12, 0x34, 0x56)]
        );
    }
}
