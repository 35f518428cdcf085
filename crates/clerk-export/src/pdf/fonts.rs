//! Standard Type1 Times faces: metrics and WinAnsi encoding
//!
//! The three faces are among the standard 14 fonts every PDF reader carries,
//! so nothing is embedded. Widths are in 1/1000 em, taken from the Adobe AFM
//! files for the printable ASCII range.

/// A Times face
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Font {
    /// Times-Roman
    Roman,
    /// Times-Bold
    Bold,
    /// Times-Italic
    Italic,
}

/// Widths of U+0020..=U+007E, Times-Roman
const ROMAN_WIDTHS: [u16; 95] = [
    250, 333, 408, 500, 500, 833, 778, 180, 333, 333, 500, 564, 250, 333, 250, 278, // ' '../
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 278, 278, 564, 564, 564, 444, // 0..?
    921, 722, 667, 667, 722, 611, 556, 722, 722, 333, 389, 722, 611, 889, 722, 722, // @..O
    556, 722, 667, 556, 611, 722, 722, 944, 722, 722, 611, 333, 278, 333, 469, 500, // P.._
    333, 444, 500, 444, 500, 444, 333, 500, 500, 278, 278, 500, 278, 778, 500, 500, // `..o
    500, 500, 333, 389, 278, 500, 500, 722, 500, 500, 444, 480, 200, 480, 541, // p..~
];

/// Widths of U+0020..=U+007E, Times-Bold
const BOLD_WIDTHS: [u16; 95] = [
    250, 333, 555, 500, 500, 1000, 833, 278, 333, 333, 500, 570, 250, 333, 250, 278,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 333, 333, 570, 570, 570, 500,
    930, 722, 667, 722, 722, 667, 611, 778, 778, 389, 500, 778, 667, 944, 722, 778,
    611, 778, 722, 556, 667, 722, 722, 1000, 722, 722, 667, 333, 278, 333, 581, 500,
    333, 500, 556, 444, 556, 444, 333, 500, 556, 278, 333, 556, 278, 833, 556, 500,
    556, 556, 444, 389, 333, 556, 500, 722, 500, 500, 444, 394, 220, 394, 520,
];

/// Widths of U+0020..=U+007E, Times-Italic
const ITALIC_WIDTHS: [u16; 95] = [
    250, 333, 420, 500, 500, 833, 778, 214, 333, 333, 500, 675, 250, 333, 250, 278,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 333, 333, 675, 675, 675, 500,
    920, 611, 611, 667, 722, 611, 611, 722, 722, 333, 444, 667, 556, 833, 667, 722,
    611, 722, 611, 500, 556, 722, 611, 833, 611, 556, 556, 389, 278, 389, 422, 500,
    333, 500, 500, 444, 500, 444, 278, 500, 500, 278, 278, 444, 278, 722, 500, 500,
    500, 500, 389, 389, 278, 500, 444, 667, 444, 444, 389, 400, 275, 400, 541,
];

impl Font {
    /// Every face used in a brief
    pub const ALL: [Font; 3] = [Font::Roman, Font::Bold, Font::Italic];

    /// PostScript name of the face
    pub fn base_name(&self) -> &'static str {
        match self {
            Font::Roman => "Times-Roman",
            Font::Bold => "Times-Bold",
            Font::Italic => "Times-Italic",
        }
    }

    /// Name under which the face is registered in page resources
    pub fn resource_name(&self) -> &'static str {
        match self {
            Font::Roman => "F1",
            Font::Bold => "F2",
            Font::Italic => "F3",
        }
    }

    fn ascii_widths(&self) -> &'static [u16; 95] {
        match self {
            Font::Roman => &ROMAN_WIDTHS,
            Font::Bold => &BOLD_WIDTHS,
            Font::Italic => &ITALIC_WIDTHS,
        }
    }

    /// Advance width of a WinAnsi code in 1/1000 em
    fn code_width(&self, code: u8) -> u16 {
        match code {
            0x20..=0x7E => self.ascii_widths()[(code - 0x20) as usize],
            0x85 | 0x89 | 0x97 => 1000,
            0x91 | 0x92 | 0x8B | 0x9B => 333,
            0x93 | 0x94 => 444,
            0x95 => 350,
            0xA9 | 0xAE => 760,
            _ => 500,
        }
    }

    /// Width of `text` set at `size` points
    pub fn text_width(&self, text: &str, size: f32) -> f32 {
        let units: u32 = text
            .chars()
            .map(|c| u32::from(self.code_width(win_ansi_code(c))))
            .sum();
        units as f32 * size / 1000.0
    }
}

/// WinAnsi code of a character, `?` when it has none
pub fn win_ansi_code(c: char) -> u8 {
    match c {
        ' '..='~' => c as u8,
        '\u{a0}'..='\u{ff}' => c as u32 as u8,
        '\t' => b' ',
        '\u{20ac}' => 0x80,
        '\u{201a}' => 0x82,
        '\u{0192}' => 0x83,
        '\u{201e}' => 0x84,
        '\u{2026}' => 0x85,
        '\u{2020}' => 0x86,
        '\u{2021}' => 0x87,
        '\u{02c6}' => 0x88,
        '\u{2030}' => 0x89,
        '\u{0160}' => 0x8A,
        '\u{2039}' => 0x8B,
        '\u{0152}' => 0x8C,
        '\u{017d}' => 0x8E,
        '\u{2018}' => 0x91,
        '\u{2019}' => 0x92,
        '\u{201c}' => 0x93,
        '\u{201d}' => 0x94,
        '\u{2022}' => 0x95,
        '\u{2013}' => 0x96,
        '\u{2014}' => 0x97,
        '\u{02dc}' => 0x98,
        '\u{2122}' => 0x99,
        '\u{0161}' => 0x9A,
        '\u{203a}' => 0x9B,
        '\u{0153}' => 0x9C,
        '\u{017e}' => 0x9E,
        '\u{0178}' => 0x9F,
        _ => b'?',
    }
}

/// Encode text for a WinAnsi-encoded simple font
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars().map(win_ansi_code).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoding() {
        assert_eq!(encode_win_ansi("Roe v. Wade"), b"Roe v. Wade".to_vec());
        assert_eq!(encode_win_ansi("\u{2013} CASE BRIEF \u{2013}")[0], 0x96);
        assert_eq!(encode_win_ansi("\u{a9}"), vec![0xA9]);
        assert_eq!(encode_win_ansi("\u{4e2d}"), b"?".to_vec());
    }

    #[test]
    fn test_widths() {
        assert_eq!(Font::Roman.text_width(" ", 1000.0), 250.0);
        assert_eq!(Font::Roman.text_width("m", 10.0), 7.78);
        assert!(Font::Bold.text_width("Holding", 12.0) > Font::Roman.text_width("Holding", 12.0));
        assert_eq!(Font::Italic.text_width("", 12.0), 0.0);
    }

    #[test]
    fn test_tables_cover_printable_ascii() {
        for font in Font::ALL {
            assert!(font.text_width("~", 1000.0) > 0.0);
            assert_eq!(font.text_width("0123456789", 1.0), 5.0);
        }
    }
}
