//! Glyph metrics for the PDF base-14 Helvetica family.
//!
//! Widths are in 1/1000 em, taken from the Adobe font metric files, and
//! cover the characters the built-in fonts can show under WinAnsiEncoding:
//! printable ASCII, the Latin-1 supplement (U+00A0..=U+00FF) and the
//! handful of extras WinAnsi places at 0x80..=0x9F. Oblique faces share the
//! upright widths.

use crate::domain::report::TextStyle;

const FIRST_PRINTABLE: u32 = 0x20;
const FIRST_LATIN1: u32 = 0xA0;
const FALLBACK_WIDTH: u16 = 556;

#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

/// U+00A0..=U+00FF.
#[rustfmt::skip]
const HELVETICA_LATIN1: [u16; 96] = [
    278, 333, 556, 556, 556, 556, 260, 556, 333, 737, 370, 556, 584, 333, 737, 333,
    400, 584, 333, 333, 333, 556, 537, 278, 333, 333, 365, 556, 834, 834, 834, 611,
    667, 667, 667, 667, 667, 667, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278,
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611,
    556, 556, 556, 556, 556, 556, 889, 500, 556, 556, 556, 556, 278, 278, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 584, 611, 556, 556, 556, 556, 500, 556, 500,
];

#[rustfmt::skip]
const HELVETICA_BOLD_LATIN1: [u16; 96] = [
    278, 333, 556, 556, 556, 556, 280, 556, 333, 737, 370, 556, 584, 333, 737, 333,
    400, 584, 333, 333, 333, 611, 556, 278, 333, 333, 365, 556, 834, 834, 834, 611,
    722, 722, 722, 722, 722, 722, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278,
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611,
    556, 556, 556, 556, 556, 556, 889, 556, 556, 556, 556, 556, 278, 278, 278, 278,
    611, 611, 611, 611, 611, 611, 611, 584, 611, 611, 611, 611, 611, 556, 611, 556,
];

/// WinAnsi 0x80..=0x9F glyphs as `(regular, bold)` widths.
fn winansi_extra_width(ch: char) -> Option<(u16, u16)> {
    let widths = match ch {
        '\u{20ac}' => (556, 556),                           // Euro
        '\u{201a}' | '\u{2018}' | '\u{2019}' => (222, 278), // single quotes
        '\u{201e}' | '\u{201c}' | '\u{201d}' => (333, 500), // double quotes
        '\u{0192}' | '\u{2020}' | '\u{2021}' => (556, 556),
        '\u{2026}' | '\u{2030}' | '\u{2014}' | '\u{2122}' | '\u{0152}' => (1000, 1000),
        '\u{02c6}' | '\u{02dc}' | '\u{2039}' | '\u{203a}' => (333, 333),
        '\u{0160}' | '\u{0178}' => (667, 667),
        '\u{017d}' => (611, 611),
        '\u{0161}' => (500, 556),
        '\u{017e}' => (500, 500),
        '\u{0153}' => (944, 944),
        '\u{2022}' => (350, 350),
        '\u{2013}' => (556, 556),
        _ => return None,
    };
    Some(widths)
}

/// Width of `ch` in the built-in font, or `None` when WinAnsi cannot
/// encode it.
fn encodable_width(ch: char, bold: bool) -> Option<u16> {
    let code = ch as u32;
    let (ascii, latin1) = if bold {
        (&HELVETICA_BOLD, &HELVETICA_BOLD_LATIN1)
    } else {
        (&HELVETICA, &HELVETICA_LATIN1)
    };
    match code {
        FIRST_PRINTABLE..=0x7E => ascii.get((code - FIRST_PRINTABLE) as usize).copied(),
        FIRST_LATIN1..=0xFF => latin1.get((code - FIRST_LATIN1) as usize).copied(),
        _ => winansi_extra_width(ch).map(|(regular, heavy)| if bold { heavy } else { regular }),
    }
}

fn glyph_width(ch: char, bold: bool) -> u16 {
    encodable_width(ch, bold).unwrap_or(FALLBACK_WIDTH)
}

/// Width of `text` in points when set in `style` at `size`.
pub fn text_width(text: &str, style: TextStyle, size: f32) -> f32 {
    let units: u32 = text
        .chars()
        .map(|ch| u32::from(glyph_width(ch, style.bold)))
        .sum();
    units as f32 * size / 1000.0
}

/// Maps text onto the characters the built-in fonts can show.
///
/// WinAnsi characters pass through. A few look-alikes outside it get a
/// stand-in; anything else becomes `?`.
pub fn sanitize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\t' | '\n' | '\r' | '\u{a0}' => out.push(' '),
            _ if encodable_width(ch, false).is_some() => out.push(ch),
            '\u{2032}' => out.push('\''),
            '\u{2033}' => out.push('"'),
            '\u{2010}'..='\u{2012}' | '\u{2015}' | '\u{2212}' => out.push('-'),
            _ => out.push('?'),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn space_is_quarter_em_ish() {
        assert!((text_width(" ", TextStyle::REGULAR, 10.0) - 2.78).abs() < 1e-4);
    }

    #[test]
    fn bold_is_wider_for_lowercase() {
        let regular = text_width("governance", TextStyle::REGULAR, 12.0);
        let bold = text_width("governance", TextStyle::BOLD, 12.0);
        assert!(bold > regular);
    }

    #[test]
    fn italic_matches_regular() {
        assert_eq!(
            text_width("Impact", TextStyle::ITALIC, 10.0),
            text_width("Impact", TextStyle::REGULAR, 10.0)
        );
    }

    #[test]
    fn width_scales_with_size() {
        let small = text_width("AI", TextStyle::REGULAR, 10.0);
        let large = text_width("AI", TextStyle::REGULAR, 20.0);
        assert!((large - 2.0 * small).abs() < 1e-4);
    }

    #[test]
    fn accented_letters_use_their_own_widths() {
        assert_eq!(glyph_width('\u{e9}', false), 556);
        assert_eq!(glyph_width('\u{fc}', true), 611);
        assert_eq!(glyph_width('\u{c9}', false), glyph_width('E', false));
        assert_eq!(glyph_width('\u{c6}', true), 1000);
        assert_eq!(glyph_width('\u{ff}', false), 500);
    }

    #[test]
    fn winansi_extras_use_their_own_widths() {
        assert_eq!(glyph_width('\u{2022}', false), 350);
        assert_eq!(glyph_width('\u{2014}', true), 1000);
        assert_eq!(glyph_width('\u{2019}', false), 222);
        assert_eq!(glyph_width('\u{201c}', true), 500);
    }

    #[test]
    fn sanitize_keeps_winansi_text() {
        assert_eq!(
            sanitize("Conformit\u{e9} & Donn\u{e9}es (Z\u{fc}rich) \u{2013} 5 \u{20ac}"),
            "Conformit\u{e9} & Donn\u{e9}es (Z\u{fc}rich) \u{2013} 5 \u{20ac}"
        );
        assert_eq!(
            sanitize("\u{201c}Don\u{2019}t\u{201d} \u{2014} wait\u{2026} \u{2022} item"),
            "\u{201c}Don\u{2019}t\u{201d} \u{2014} wait\u{2026} \u{2022} item"
        );
    }

    #[test]
    fn sanitize_substitutes_look_alikes_outside_winansi() {
        assert_eq!(sanitize("5\u{2032}11\u{2033}"), "5'11\"");
        assert_eq!(sanitize("a\u{2010}b \u{2212}1"), "a-b -1");
        assert_eq!(sanitize("tab\there\u{a0}now"), "tab here now");
    }

    #[test]
    fn sanitize_marks_unsupported_characters() {
        assert_eq!(sanitize("caf\u{e9} \u{1f600} \u{3b1}"), "caf\u{e9} ? ?");
        assert_eq!(sanitize("plain ASCII ~"), "plain ASCII ~");
    }
}
