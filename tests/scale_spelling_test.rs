/// Integration tests for scale spelling
///
/// Covers letter-name spelling across a full octave, octave rollover at B,
/// and the parse/print round trip of note literals.

#[cfg(test)]
mod tests {
    use scales_wasm::errors::NotationError;
    use scales_wasm::models::{KeySignature, Letter, Note, Scale, ScalePattern, ScaleType};

    fn note(s: &str) -> Note {
        Note::parse(s).unwrap()
    }

    fn sequence(pattern: &str, start: &str) -> Vec<String> {
        Scale::new(pattern, start, "treble", KeySignature::open())
            .unwrap()
            .generate_sequence()
            .iter()
            .map(Note::to_string)
            .collect()
    }

    #[test]
    fn test_c_major_from_c4() {
        assert_eq!(
            sequence("WWHWWWH", "C4"),
            vec!["C4", "D4", "E4", "F4", "G4", "A4", "B4", "C5"]
        );
    }

    #[test]
    fn test_natural_minor_from_a3_closes_on_a4() {
        let notes = sequence("WHWWHWW", "A3");
        assert_eq!(notes.first().map(String::as_str), Some("A3"));
        assert_eq!(notes.last().map(String::as_str), Some("A4"));
        assert_eq!(notes.len(), 8);
    }

    #[test]
    fn test_sharp_keys_spell_with_sharps() {
        assert_eq!(
            sequence("WWHWWWH", "E4"),
            vec!["E4", "F#4", "G#4", "A4", "B4", "C#5", "D#5", "E5"]
        );
    }

    #[test]
    fn test_flat_start_spells_with_flats() {
        assert_eq!(
            sequence("WWHWWWH", "Ab4"),
            vec!["Ab4", "Bb4", "C5", "Db5", "Eb5", "F5", "G5", "Ab5"]
        );
    }

    #[test]
    fn test_every_diatonic_pattern_returns_one_octave_up() {
        let diatonic = ["WWHWWWH", "WHWWHWW", "WHWWH3H", "WHWWWWH", "WHWWWHW", "HWWHWWW"];
        let starts = ["C4", "F#3", "Bb2", "Eb4", "B3", "G#1", "Db5"];

        for pattern in diatonic {
            let pattern = ScalePattern::parse(pattern).unwrap();
            for start in starts {
                let start = note(start);
                let mut current = start;
                for step in pattern.steps() {
                    current = current.up_by(step.half_steps() as i32, pattern.len()).unwrap();
                }
                assert_eq!(
                    current,
                    Note::new(start.letter, start.accidental, start.octave + 1),
                    "{} from {}",
                    pattern,
                    start
                );
            }
        }
    }

    #[test]
    fn test_octave_only_changes_when_leaving_b() {
        for letter in ["A", "B", "C", "D", "E", "F", "G"] {
            for accidental in ["bb", "b", "", "#", "##"] {
                let start = note(&format!("{}{}4", letter, accidental));
                for half_steps in 1..=3 {
                    let next = start.up_by(half_steps, 7).unwrap();
                    let expected = if start.letter == Letter::B { 5 } else { 4 };
                    assert_eq!(next.octave, expected, "{} up {}", start, half_steps);
                    assert_eq!(next.letter, start.letter.next());
                }
            }
        }
    }

    #[test]
    fn test_round_trip_through_transposition() {
        let scale = Scale::new("WHWWH3H", "D4", "bass", KeySignature::open()).unwrap();
        for n in scale.generate_sequence() {
            assert_eq!(Note::parse(&n.to_string()), Ok(n));
        }
    }

    #[test]
    fn test_invalid_pattern_sizes() {
        for pattern in ["WWHWWW", "WWHWWWW", "WWWWWWW", "HHHHHHHHHHH"] {
            assert!(
                matches!(
                    ScalePattern::parse(pattern),
                    Err(NotationError::InvalidScaleSize { .. })
                ),
                "{} should be rejected",
                pattern
            );
        }
    }

    #[test]
    fn test_guess_matches_dealt_scale() {
        let dealt = ScaleType::by_key('3').unwrap();
        let start = dealt.possible_starts[0];
        let scale = dealt.scale(start, scales_wasm::models::ClefKind::Treble, KeySignature::open());

        let right = &ScaleType::by_key('3').unwrap().pattern;
        let wrong = &ScaleType::by_key('2').unwrap().pattern;
        assert!(scale.matches_pattern(right));
        assert!(!scale.matches_pattern(wrong));
    }
}
