//! Channel-map grammar: `SEGMENT(;SEGMENT)*`.
//!
//! A segment is either `LETTER:COLORLIST`, which assigns that channel, or a
//! bare `COLORLIST`, which takes the next channel from an implicit queue.

use std::collections::{BTreeMap, VecDeque};

use super::error::DescriptorError;
use crate::color::Channel;
use crate::palette::{split_fields, Palette};

/// Palettes keyed by channel, iterated in channel order.
pub type PaletteMap = BTreeMap<Channel, Palette>;

/// Parse a channel-map descriptor into a fresh map.
///
/// Bare segments are an error here, since there is no implicit queue.
///
/// # Errors
///
/// [`DescriptorError::QueueUnderflow`] if any segment lacks a channel
/// letter.
///
/// # Example
///
/// ```
/// use dye_engine::{parse_palettes, Channel, Rgb};
///
/// let map = parse_palettes("R:#ff0000,#880000;G:#00ff00").unwrap();
/// assert_eq!(map[&Channel::R].colors(), &[Rgb::new(255, 0, 0), Rgb::new(136, 0, 0)]);
/// assert_eq!(map[&Channel::G].colors(), &[Rgb::new(0, 255, 0)]);
///
/// assert!(parse_palettes("#ff0000").is_err());
/// ```
pub fn parse_palettes(data: &str) -> Result<PaletteMap, DescriptorError> {
    let mut palettes = PaletteMap::new();
    parse_palettes_into(data, &mut palettes, &mut VecDeque::new())?;
    Ok(palettes)
}

/// Parse a channel-map descriptor into an existing map.
///
/// Segments are handled left to right:
///
/// - `X:colors` assigns channel `X` (unknown letters become
///   [`Channel::None`]), replacing any earlier palette for it.
/// - a bare `colors` segment pops the front of `channels`.
/// - a segment whose color list is empty assigns nothing, though a bare
///   one still consumes its queued channel.
///
/// Trailing empty segments are ignored. An empty `data` leaves both the map
/// and the queue untouched.
///
/// # Errors
///
/// [`DescriptorError::QueueUnderflow`] when a bare segment finds the queue
/// empty. Segments before the failing one have already been applied to
/// `palettes`.
pub fn parse_palettes_into(
    data: &str,
    palettes: &mut PaletteMap,
    channels: &mut VecDeque<Channel>,
) -> Result<(), DescriptorError> {
    if data.is_empty() {
        return Ok(());
    }

    for segment in split_fields(data, ';') {
        let (channel, colors) = match segment.split_once(':') {
            Some((letter, colors)) => (Channel::from_letter(letter), colors),
            None => {
                let channel = channels
                    .pop_front()
                    .ok_or_else(|| DescriptorError::QueueUnderflow {
                        data: data.to_string(),
                    })?;
                (channel, segment)
            }
        };

        if !colors.is_empty() {
            palettes.insert(channel, Palette::parse(colors));
        }
    }

    Ok(())
}
