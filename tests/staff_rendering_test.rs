/// Integration tests for staff rendering
///
/// Staff-font codepoints: notehead band starts at U+F0001, flat at U+F001A,
/// natural at U+F0033, sharp at U+F004C (offset 1 in each band).
/// Treble clef offsets: C4=4, D4=5, E4=6, F4=7, G4=8, A4=9, B4=10, C5=11, D5=12.

#[cfg(test)]
mod tests {
    use scales_wasm::models::{KeySignature, Note, Scale};
    use scales_wasm::renderers::font_utils::glyph_from_char;
    use scales_wasm::{GlyphBand, StaffGlyph};

    const TREBLE: char = '\u{1D11E}';
    const BASS: char = '\u{1D122}';

    fn key(n: i32) -> KeySignature {
        KeySignature::new(n).unwrap()
    }

    #[test]
    fn test_signature_governs_f_sharp() {
        let signature = key(2);
        let clef = scales_wasm::models::Clef::by_name("treble").unwrap();

        let f_sharp = Note::parse("F#4").unwrap();
        assert_eq!(signature.accidental_mismatch(&f_sharp), Ok(false));
        assert_eq!(
            f_sharp.staff_glyphs(clef, &signature),
            vec![StaffGlyph::notehead(7)]
        );

        let f_natural = Note::parse("F4").unwrap();
        assert_eq!(signature.accidental_mismatch(&f_natural), Ok(true));
        assert_eq!(
            f_natural.staff_glyphs(clef, &signature),
            vec![
                StaffGlyph::new(GlyphBand::Natural, 7),
                StaffGlyph::notehead(7)
            ]
        );
    }

    #[test]
    fn test_d_major_in_its_own_key_has_no_accidentals() {
        let scale = Scale::new("WWHWWWH", "D4", "treble", key(2)).unwrap();
        assert_eq!(
            scale.render_staff().unwrap(),
            format!(
                "{}{}",
                TREBLE,
                "\u{F0005}\u{F0006}\u{F0007}\u{F0008}\u{F0009}\u{F000A}\u{F000B}\u{F000C}"
            )
        );
    }

    #[test]
    fn test_d_major_without_signature_shows_sharps() {
        let scale = Scale::new("WWHWWWH", "D4", "treble", key(0)).unwrap();
        assert_eq!(
            scale.render_staff().unwrap(),
            format!(
                "{}{}",
                TREBLE,
                "\u{F0005}\u{F0006}\u{F0052}\u{F0007}\u{F0008}\u{F0009}\u{F000A}\u{F0056}\u{F000B}\u{F000C}"
            )
        );
    }

    #[test]
    fn test_c_major_against_two_sharps_shows_naturals() {
        let scale = Scale::new("WWHWWWH", "C4", "treble", key(2)).unwrap();
        let glyphs = scale.staff_glyphs();

        assert_eq!(
            glyphs[0],
            vec![StaffGlyph::new(GlyphBand::Natural, 4), StaffGlyph::notehead(4)]
        );
        assert_eq!(glyphs[1], vec![StaffGlyph::notehead(5)]);
        assert_eq!(
            glyphs[3],
            vec![StaffGlyph::new(GlyphBand::Natural, 7), StaffGlyph::notehead(7)]
        );
        assert_eq!(
            glyphs[7],
            vec![StaffGlyph::new(GlyphBand::Natural, 11), StaffGlyph::notehead(11)]
        );
    }

    #[test]
    fn test_naturals_never_drawn_outside_signature() {
        let scale = Scale::new("WHWWHWW", "A3", "treble", key(-1)).unwrap();
        let staff = scale.render_staff().unwrap();

        let naturals = staff
            .chars()
            .filter_map(glyph_from_char)
            .filter(|g| g.band == GlyphBand::Natural)
            .count();
        // One flat governs only B; the single B natural in A minor needs a natural sign
        assert_eq!(naturals, 1);
    }

    #[test]
    fn test_signature_written_after_clef() {
        let scale = Scale::new("WWHWWWH", "D4", "treble", key(2)).unwrap();
        let staff = scale.render_staff_with_signature().unwrap();
        let mut chars = staff.chars();

        assert_eq!(chars.next(), Some(TREBLE));
        assert_eq!(
            chars.next().and_then(glyph_from_char),
            Some(StaffGlyph::new(GlyphBand::Sharp, 14))
        );
        assert_eq!(
            chars.next().and_then(glyph_from_char),
            Some(StaffGlyph::new(GlyphBand::Sharp, 11))
        );
        assert_eq!(
            chars.next().and_then(glyph_from_char),
            Some(StaffGlyph::notehead(5))
        );
    }

    #[test]
    fn test_bass_clef_placement() {
        let scale = Scale::new("WWHWWWH", "C3", "bass", key(0)).unwrap();
        let staff = scale.render_staff().unwrap();

        assert!(staff.starts_with(BASS));
        let offsets: Vec<i32> = staff
            .chars()
            .filter_map(glyph_from_char)
            .map(|g| g.offset)
            .collect();
        assert_eq!(offsets, vec![9, 10, 11, 12, 13, 14, 15, 16]);
    }

    #[test]
    fn test_out_of_range_scale_is_rejected() {
        let scale = Scale::new("WWHWWWH", "C1", "treble", key(0)).unwrap();
        assert!(matches!(
            scale.render_staff(),
            Err(scales_wasm::NotationError::StaffOffsetOutOfRange { .. })
        ));
        assert_eq!(scale.render_plain(), "C D E F G A B C");
    }
}
