use dye_engine::{PaletteMap, Rgb};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Serializes a channel map as `{"R": ["#ff0000", ...], ...}`, keyed in
/// channel order (R G Y B M C W NONE) like the text listing.
pub struct PaletteMapView<'a>(pub &'a PaletteMap);

impl Serialize for PaletteMapView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (channel, palette) in self.0 {
            let colors: Vec<String> = palette.colors().iter().map(Rgb::to_string).collect();
            map.serialize_entry(&channel.to_string(), &colors)?;
        }
        map.end()
    }
}
