//! Color name resolution.
//!
//! Accepts the same vocabulary a web developer would reach for:
//!
//! - Hex codes: `"#ea2039"` or `"#fff"` (3 or 6 digits)
//! - CSS named colors: `orange`, `dimgray`, `red`, ... (case-insensitive,
//!   `grey` and `gray` spellings are interchangeable)
//!
//! Resolved colors are mapped onto the 256-color ANSI palette, which every
//! terminal that supports color at all understands.
//!
//! # Example
//!
//! ```rust
//! use send_help::paint::Rgb;
//!
//! assert_eq!(Rgb::parse("red"), Some(Rgb(255, 0, 0)));
//! assert_eq!(Rgb::parse("#EA2039"), Some(Rgb(0xea, 0x20, 0x39)));
//! assert_eq!(Rgb::parse("#fff"), Some(Rgb(255, 255, 255)));
//! assert_eq!(Rgb::parse("not-a-color"), None);
//! ```

/// An RGB triplet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Resolves a color name or hex code.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();

        if let Some(hex) = value.strip_prefix('#') {
            return Self::parse_hex(hex);
        }

        Self::parse_named(value)
    }

    /// Parses a hex color code (without the # prefix).
    fn parse_hex(hex: &str) -> Option<Self> {
        if !hex.is_ascii() {
            return None;
        }
        match hex.len() {
            // #rgb -> #rrggbb
            3 => {
                let r = u8::from_str_radix(&hex[0..1], 16).ok()? * 17;
                let g = u8::from_str_radix(&hex[1..2], 16).ok()? * 17;
                let b = u8::from_str_radix(&hex[2..3], 16).ok()? * 17;
                Some(Rgb(r, g, b))
            }
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Rgb(r, g, b))
            }
            _ => None,
        }
    }

    fn parse_named(name: &str) -> Option<Self> {
        let name = name.to_ascii_lowercase().replace("grey", "gray");
        NAMED_COLORS
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|(_, rgb)| *rgb)
    }

    /// Returns the nearest index in the ANSI 256-color palette.
    ///
    /// Grays land on the 24-step grayscale ramp, everything else on the
    /// 6x6x6 color cube.
    pub fn to_ansi256(self) -> u8 {
        let Rgb(r, g, b) = self;
        if r == g && g == b {
            if r < 8 {
                16
            } else if r > 248 {
                231
            } else {
                232 + ((r as u16 - 8) * 24 / 247) as u8
            }
        } else {
            let red = (r as u16 * 5 / 255) as u8;
            let green = (g as u16 * 5 / 255) as u8;
            let blue = (b as u16 * 5 / 255) as u8;
            16 + 36 * red + 6 * green + blue
        }
    }
}

/// The 148 CSS named colors, `gray` spelling only (`grey` is folded on lookup).
const NAMED_COLORS: &[(&str, Rgb)] = &[
    ("aliceblue", Rgb(240, 248, 255)),
    ("antiquewhite", Rgb(250, 235, 215)),
    ("aqua", Rgb(0, 255, 255)),
    ("aquamarine", Rgb(127, 255, 212)),
    ("azure", Rgb(240, 255, 255)),
    ("beige", Rgb(245, 245, 220)),
    ("bisque", Rgb(255, 228, 196)),
    ("black", Rgb(0, 0, 0)),
    ("blanchedalmond", Rgb(255, 235, 205)),
    ("blue", Rgb(0, 0, 255)),
    ("blueviolet", Rgb(138, 43, 226)),
    ("brown", Rgb(165, 42, 42)),
    ("burlywood", Rgb(222, 184, 135)),
    ("cadetblue", Rgb(95, 158, 160)),
    ("chartreuse", Rgb(127, 255, 0)),
    ("chocolate", Rgb(210, 105, 30)),
    ("coral", Rgb(255, 127, 80)),
    ("cornflowerblue", Rgb(100, 149, 237)),
    ("cornsilk", Rgb(255, 248, 220)),
    ("crimson", Rgb(220, 20, 60)),
    ("cyan", Rgb(0, 255, 255)),
    ("darkblue", Rgb(0, 0, 139)),
    ("darkcyan", Rgb(0, 139, 139)),
    ("darkgoldenrod", Rgb(184, 134, 11)),
    ("darkgray", Rgb(169, 169, 169)),
    ("darkgreen", Rgb(0, 100, 0)),
    ("darkkhaki", Rgb(189, 183, 107)),
    ("darkmagenta", Rgb(139, 0, 139)),
    ("darkolivegreen", Rgb(85, 107, 47)),
    ("darkorange", Rgb(255, 140, 0)),
    ("darkorchid", Rgb(153, 50, 204)),
    ("darkred", Rgb(139, 0, 0)),
    ("darksalmon", Rgb(233, 150, 122)),
    ("darkseagreen", Rgb(143, 188, 143)),
    ("darkslateblue", Rgb(72, 61, 139)),
    ("darkslategray", Rgb(47, 79, 79)),
    ("darkturquoise", Rgb(0, 206, 209)),
    ("darkviolet", Rgb(148, 0, 211)),
    ("deeppink", Rgb(255, 20, 147)),
    ("deepskyblue", Rgb(0, 191, 255)),
    ("dimgray", Rgb(105, 105, 105)),
    ("dodgerblue", Rgb(30, 144, 255)),
    ("firebrick", Rgb(178, 34, 34)),
    ("floralwhite", Rgb(255, 250, 240)),
    ("forestgreen", Rgb(34, 139, 34)),
    ("fuchsia", Rgb(255, 0, 255)),
    ("gainsboro", Rgb(220, 220, 220)),
    ("ghostwhite", Rgb(248, 248, 255)),
    ("gold", Rgb(255, 215, 0)),
    ("goldenrod", Rgb(218, 165, 32)),
    ("gray", Rgb(128, 128, 128)),
    ("green", Rgb(0, 128, 0)),
    ("greenyellow", Rgb(173, 255, 47)),
    ("honeydew", Rgb(240, 255, 240)),
    ("hotpink", Rgb(255, 105, 180)),
    ("indianred", Rgb(205, 92, 92)),
    ("indigo", Rgb(75, 0, 130)),
    ("ivory", Rgb(255, 255, 240)),
    ("khaki", Rgb(240, 230, 140)),
    ("lavender", Rgb(230, 230, 250)),
    ("lavenderblush", Rgb(255, 240, 245)),
    ("lawngreen", Rgb(124, 252, 0)),
    ("lemonchiffon", Rgb(255, 250, 205)),
    ("lightblue", Rgb(173, 216, 230)),
    ("lightcoral", Rgb(240, 128, 128)),
    ("lightcyan", Rgb(224, 255, 255)),
    ("lightgoldenrodyellow", Rgb(250, 250, 210)),
    ("lightgray", Rgb(211, 211, 211)),
    ("lightgreen", Rgb(144, 238, 144)),
    ("lightpink", Rgb(255, 182, 193)),
    ("lightsalmon", Rgb(255, 160, 122)),
    ("lightseagreen", Rgb(32, 178, 170)),
    ("lightskyblue", Rgb(135, 206, 250)),
    ("lightslategray", Rgb(119, 136, 153)),
    ("lightsteelblue", Rgb(176, 196, 222)),
    ("lightyellow", Rgb(255, 255, 224)),
    ("lime", Rgb(0, 255, 0)),
    ("limegreen", Rgb(50, 205, 50)),
    ("linen", Rgb(250, 240, 230)),
    ("magenta", Rgb(255, 0, 255)),
    ("maroon", Rgb(128, 0, 0)),
    ("mediumaquamarine", Rgb(102, 205, 170)),
    ("mediumblue", Rgb(0, 0, 205)),
    ("mediumorchid", Rgb(186, 85, 211)),
    ("mediumpurple", Rgb(147, 112, 219)),
    ("mediumseagreen", Rgb(60, 179, 113)),
    ("mediumslateblue", Rgb(123, 104, 238)),
    ("mediumspringgreen", Rgb(0, 250, 154)),
    ("mediumturquoise", Rgb(72, 209, 204)),
    ("mediumvioletred", Rgb(199, 21, 133)),
    ("midnightblue", Rgb(25, 25, 112)),
    ("mintcream", Rgb(245, 255, 250)),
    ("mistyrose", Rgb(255, 228, 225)),
    ("moccasin", Rgb(255, 228, 181)),
    ("navajowhite", Rgb(255, 222, 173)),
    ("navy", Rgb(0, 0, 128)),
    ("oldlace", Rgb(253, 245, 230)),
    ("olive", Rgb(128, 128, 0)),
    ("olivedrab", Rgb(107, 142, 35)),
    ("orange", Rgb(255, 165, 0)),
    ("orangered", Rgb(255, 69, 0)),
    ("orchid", Rgb(218, 112, 214)),
    ("palegoldenrod", Rgb(238, 232, 170)),
    ("palegreen", Rgb(152, 251, 152)),
    ("paleturquoise", Rgb(175, 238, 238)),
    ("palevioletred", Rgb(219, 112, 147)),
    ("papayawhip", Rgb(255, 239, 213)),
    ("peachpuff", Rgb(255, 218, 185)),
    ("peru", Rgb(205, 133, 63)),
    ("pink", Rgb(255, 192, 203)),
    ("plum", Rgb(221, 160, 221)),
    ("powderblue", Rgb(176, 224, 230)),
    ("purple", Rgb(128, 0, 128)),
    ("rebeccapurple", Rgb(102, 51, 153)),
    ("red", Rgb(255, 0, 0)),
    ("rosybrown", Rgb(188, 143, 143)),
    ("royalblue", Rgb(65, 105, 225)),
    ("saddlebrown", Rgb(139, 69, 19)),
    ("salmon", Rgb(250, 128, 114)),
    ("sandybrown", Rgb(244, 164, 96)),
    ("seagreen", Rgb(46, 139, 87)),
    ("seashell", Rgb(255, 245, 238)),
    ("sienna", Rgb(160, 82, 45)),
    ("silver", Rgb(192, 192, 192)),
    ("skyblue", Rgb(135, 206, 235)),
    ("slateblue", Rgb(106, 90, 205)),
    ("slategray", Rgb(112, 128, 144)),
    ("snow", Rgb(255, 250, 250)),
    ("springgreen", Rgb(0, 255, 127)),
    ("steelblue", Rgb(70, 130, 180)),
    ("tan", Rgb(210, 180, 140)),
    ("teal", Rgb(0, 128, 128)),
    ("thistle", Rgb(216, 191, 216)),
    ("tomato", Rgb(255, 99, 71)),
    ("turquoise", Rgb(64, 224, 208)),
    ("violet", Rgb(238, 130, 238)),
    ("wheat", Rgb(245, 222, 179)),
    ("white", Rgb(255, 255, 255)),
    ("whitesmoke", Rgb(245, 245, 245)),
    ("yellow", Rgb(255, 255, 0)),
    ("yellowgreen", Rgb(154, 205, 50)),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_named() {
        assert_eq!(Rgb::parse("orange"), Some(Rgb(255, 165, 0)));
        assert_eq!(Rgb::parse("DimGray"), Some(Rgb(105, 105, 105)));
        assert_eq!(Rgb::parse("dimgrey"), Some(Rgb(105, 105, 105)));
        assert_eq!(Rgb::parse("  red "), Some(Rgb(255, 0, 0)));
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!(Rgb::parse("#ff6b35"), Some(Rgb(255, 107, 53)));
        assert_eq!(Rgb::parse("#f00"), Some(Rgb(255, 0, 0)));
        assert_eq!(Rgb::parse("#ff6b"), None);
        assert_eq!(Rgb::parse("#gggggg"), None);
        assert_eq!(Rgb::parse("#ééé"), None);
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(Rgb::parse("octarine"), None);
        assert_eq!(Rgb::parse(""), None);
    }

    #[test]
    fn test_to_ansi256() {
        assert_eq!(Rgb(255, 0, 0).to_ansi256(), 196);
        assert_eq!(Rgb(0, 255, 0).to_ansi256(), 46);
        assert_eq!(Rgb(0, 0, 0).to_ansi256(), 16);
        assert_eq!(Rgb(255, 255, 255).to_ansi256(), 231);
        // dimgray sits on the grayscale ramp
        assert!(Rgb(105, 105, 105).to_ansi256() >= 232);
    }

    #[test]
    fn test_parse_full_css_vocabulary() {
        assert_eq!(Rgb::parse("beige"), Some(Rgb(245, 245, 220)));
        assert_eq!(Rgb::parse("ivory"), Some(Rgb(255, 255, 240)));
        assert_eq!(Rgb::parse("PapayaWhip"), Some(Rgb(255, 239, 213)));
        assert_eq!(Rgb::parse("lightgoldenrodyellow"), Some(Rgb(250, 250, 210)));
        assert_eq!(Rgb::parse("darkgrey"), Rgb::parse("darkgray"));
        assert_eq!(Rgb::parse("lightslategrey"), Some(Rgb(119, 136, 153)));
        assert_eq!(Rgb::parse("slategrey"), Some(Rgb(112, 128, 144)));
        // 148 CSS names less the 7 `grey` aliases
        assert_eq!(NAMED_COLORS.len(), 141);
    }

    #[test]
    fn test_named_table_is_lowercase_gray_only() {
        for (name, _) in NAMED_COLORS {
            assert_eq!(*name, name.to_ascii_lowercase());
            assert!(!name.contains("grey"), "{name} should use the gray spelling");
        }
    }
}
