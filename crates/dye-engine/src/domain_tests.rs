//! Domain-critical regression tests for dye-engine.
//!
//! These tests are designed to catch specific classes of bugs, not just
//! confirm happy paths. Each test documents the regression it guards against.

#[cfg(test)]
mod domain_tests {
    use crate::cache::RecolorCache;
    use crate::color::{Argb, Channel, Rgb};
    use crate::dye::{parse_palettes, Dye};
    use crate::image::ArgbImage;
    use crate::palette::Palette;
    use pretty_assertions::assert_eq;

    fn all_colors_sample() -> ArgbImage {
        // Every 17th value per component, plus a few alpha levels
        let mut pixels = Vec::new();
        for r in (0..=255u32).step_by(17) {
            for g in (0..=255u32).step_by(17) {
                for b in (0..=255u32).step_by(17) {
                    let a = (r + g + b) % 256;
                    pixels.push(a << 24 | r << 16 | g << 8 | b);
                }
            }
        }
        let len = pixels.len();
        ArgbImage::new(len, 1, pixels).unwrap()
    }

    // ========================================================================
    // 1: Classification table
    // ========================================================================

    /// If this breaks, it means: the purity test or the bit mask order
    /// changed, and sprites drawn for one channel are dyed with another
    /// channel's palette.
    #[test]
    fn test_classifier_purity_table() {
        let table = [
            ((255, 0, 0), Channel::R),
            ((0, 255, 0), Channel::G),
            ((0, 0, 255), Channel::B),
            ((255, 255, 0), Channel::Y),
            ((255, 0, 255), Channel::M),
            ((0, 255, 255), Channel::C),
            ((128, 128, 128), Channel::W),
        ];
        for ((r, g, b), expected) in table {
            let (channel, intensity) = Channel::classify(Rgb::new(r, g, b));
            assert_eq!(channel, expected, "({r}, {g}, {b})");
            assert_eq!(intensity, r.max(g).max(b), "({r}, {g}, {b})");
        }

        assert_eq!(Channel::classify(Rgb::new(0, 0, 0)), (Channel::None, 0));
        assert_eq!(Channel::classify(Rgb::new(10, 20, 0)).0, Channel::None);
    }

    // ========================================================================
    // 2: Anchor exactness
    // ========================================================================

    /// If this breaks, it means: the j / i / t arithmetic in
    /// `Palette::resolve` is off by one and artists no longer get their
    /// exact anchor colors at the anchor intensities.
    #[test]
    fn test_palette_exact_anchor_property() {
        let (a, b, c) = (Rgb::new(12, 34, 56), Rgb::new(200, 10, 90), Rgb::new(1, 2, 3));
        let palette = Palette::new(vec![a, b, c]);

        assert_eq!(palette.resolve(85, 255), Some(a.with_alpha(255)));
        assert_eq!(palette.resolve(170, 255), Some(b.with_alpha(255)));
        assert_eq!(palette.resolve(255, 255), Some(c.with_alpha(255)));
        assert_eq!(palette.resolve(0, 255), Some(Argb::new(255, 0, 0, 0)));
        assert_eq!(palette.resolve(0, 9), Some(Argb::new(9, 0, 0, 0)));
    }

    /// If this breaks, it means: interpolation overshoots, e.g. by rounding
    /// up or using the wrong neighbouring anchor.
    #[test]
    fn test_interpolation_never_overshoots() {
        for n in 1..=6usize {
            let colors: Vec<Rgb> = (0..n)
                .map(|k| Rgb::new((k * 97 % 256) as u8, (255 - k * 40) as u8, (k * 51) as u8))
                .collect();
            let palette = Palette::new(colors.clone());

            for intensity in 1..=255u8 {
                let j = intensity as usize * n;
                let i = j / 255;
                let lo = if i == 0 { Rgb::BLACK } else { colors[i - 1] };
                let hi = colors[i.min(n - 1)];
                let out = palette.resolve(intensity, 255).unwrap();
                for (v, x, y) in [(out.r, lo.r, hi.r), (out.g, lo.g, hi.g), (out.b, lo.b, hi.b)] {
                    assert!(
                        x.min(y) <= v && v <= x.max(y),
                        "REGRESSION: n={n} intensity={intensity} value {v} outside [{x}, {y}]"
                    );
                }
            }
        }
    }

    // ========================================================================
    // 3: Identity behaviour
    // ========================================================================

    /// If this breaks, it means: an empty dye touches pixels (for example
    /// normalising alpha) or returns the source buffer instead of a copy.
    #[test]
    fn test_empty_descriptor_round_trip_identity() {
        let source = all_colors_sample();
        let dye = Dye::parse("").unwrap();
        let out = dye.recolor(&source);

        assert_eq!(out, source);
        assert_ne!(out.pixels().as_ptr(), source.pixels().as_ptr());
    }

    /// If this breaks, it means: impure colors leak into a palette even
    /// though the NONE channel has none, or their alpha is rewritten.
    #[test]
    fn test_impure_colors_pass_through_byte_identical() {
        let source = all_colors_sample();
        let dye = Dye::parse("R:#00ff00;G:#0000ff;B:#ff0000;Y:#123456;M:#654321;C:#abcdef;W:#fedcba")
            .unwrap();
        let out = dye.recolor(&source);

        for (&before, &after) in source.pixels().iter().zip(out.pixels()) {
            let (channel, _) = Channel::classify(Argb::from_u32(before).rgb());
            if channel == Channel::None {
                assert_eq!(after, before, "impure {before:08x} was modified");
            }
        }
    }

    // ========================================================================
    // 4: Cache suppression
    // ========================================================================

    /// If this breaks, it means: the cache compares dyes by identity or not
    /// at all, and every text-field submit re-dyes the whole image.
    #[test]
    fn test_cache_suppresses_structurally_equal_dyes() {
        let mut cache = RecolorCache::new(all_colors_sample());

        cache.set_dye(Some(Dye::parse("R:#ff0000,#880000").unwrap()));
        cache.output();
        cache.set_dye(Some(Dye::parse("R:ff0000,880000").unwrap()));
        cache.output();
        assert_eq!(cache.recompute_count(), 1);

        cache.set_dye(Some(Dye::parse("R:#880000").unwrap()));
        assert!(cache.is_stale());
        cache.output();
        assert_eq!(cache.recompute_count(), 2);
    }

    // ========================================================================
    // 5: Descriptor end to end
    // ========================================================================

    /// If this breaks, it means: the descriptor grammar and the dye no
    /// longer agree on which anchors belong to which channel.
    #[test]
    fn test_descriptor_parse_example() {
        let map = parse_palettes("R:#ff0000,#880000;G:#00ff00").unwrap();
        assert_eq!(map[&Channel::R].colors(), &[Rgb::new(255, 0, 0), Rgb::new(136, 0, 0)]);
        assert_eq!(map[&Channel::G].colors(), &[Rgb::new(0, 255, 0)]);

        let dye = Dye::new(map);
        let expected = map_red(200);
        assert_eq!(dye.update(Argb::new(255, 200, 0, 0)), Argb::new(255, expected, 0, 0));

        let blue = Argb::new(255, 0, 0, 200);
        assert_eq!(dye.update(blue), blue);
    }

    /// Interpolation between (255,0,0) and (136,0,0) for a two-anchor palette.
    fn map_red(intensity: u32) -> u8 {
        let j = intensity * 2;
        let t = j % 255;
        (((255 - t) * 255 + t * 136) / 255) as u8
    }

    /// If this breaks, it means: a bare segment silently picks a default
    /// channel instead of failing, and typos recolor the wrong parts.
    #[test]
    fn test_implicit_queue_underflow() {
        assert!(parse_palettes("#ff0000").is_err());
        assert!(Dye::parse("R:#ff0000;#00ff00").is_err());
    }

    // ========================================================================
    // 6: Parallel and sequential recolor agree
    // ========================================================================

    /// If this breaks, it means: pixel order got shuffled when recoloring
    /// across threads.
    #[test]
    fn test_recolor_matches_per_pixel_update() {
        let source = all_colors_sample();
        let dye = Dye::parse("W:#000040,#4040ff,#ffffff;R:#ff8800;NONE:#333333").unwrap();
        let out = dye.recolor(&source);

        for (i, (&before, &after)) in source.pixels().iter().zip(out.pixels()).enumerate() {
            assert_eq!(
                after,
                dye.update(Argb::from_u32(before)).to_u32(),
                "pixel {i} out of place"
            );
        }
    }
}
