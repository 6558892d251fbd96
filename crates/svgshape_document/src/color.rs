//! Parsing of paint and color values.
use phf::phf_map;
use svgshape_parse::{error::Error, Parse, Parser};

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
/// A color, with each component in the range `0.0..=1.0`
pub struct Color {
    /// Red
    pub r: f64,
    /// Green
    pub g: f64,
    /// Blue
    pub b: f64,
    /// Alpha
    pub a: f64,
}

impl Color {
    /// The color of `none`; white, fully transparent
    pub const NONE: Self = Self {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 0.0,
    };

    /// Creates an opaque color from 8-bit components
    pub fn from_rgb8([r, g, b]: [u8; 3]) -> Self {
        Self {
            r: f64::from(r) / 255.0,
            g: f64::from(g) / 255.0,
            b: f64::from(b) / 255.0,
            a: 1.0,
        }
    }

    /// Returns the color as 8-bit components, truncating any fraction
    #[allow(clippy::cast_sign_loss)]
    pub fn to_rgba8(&self) -> [u8; 4] {
        // nudged so components made by `from_rgb8` don't truncate to the value below
        [self.r, self.g, self.b, self.a].map(|c| (c.clamp(0.0, 1.0) * 255.0 + 1e-9) as u8)
    }

    /// Formats the color as `#rrggbb`, ignoring alpha
    pub fn to_hex(&self) -> String {
        let [r, g, b, _] = self.to_rgba8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
/// A parsed `fill`, `stroke` or `color` value
pub enum Paint {
    /// A concrete color, including `none`
    Color(Color),
    /// `currentColor`, to be resolved against the `color` property
    CurrentColor,
}

impl<'input> Parse<'input> for Paint {
    fn parse(input: &mut Parser<'input>) -> Result<Self, Error<'input>> {
        input.skip_whitespace();
        if input.skip_char('#') {
            let digits = input.expect_matches("hex digits", |char| char.is_ascii_hexdigit())?;
            return Ok(Self::Color(Color::from_rgb8(parse_hex(digits)?)));
        }

        let ident = input.expect_ident()?;
        if ident.eq_ignore_ascii_case("rgb") {
            return Ok(Self::Color(Color::from_rgb8(parse_rgb_function(input)?)));
        }
        if ident.eq_ignore_ascii_case("none") {
            return Ok(Self::Color(Color::NONE));
        }
        if ident.eq_ignore_ascii_case("currentColor") {
            return Ok(Self::CurrentColor);
        }
        NAMED_COLORS
            .get(ident.to_ascii_lowercase().as_str())
            .map(|rgb| Self::Color(Color::from_rgb8(*rgb)))
            .ok_or(Error::ExpectedIdent {
                expected: "a color name",
                received: ident,
            })
    }
}

fn parse_hex(digits: &str) -> Result<[u8; 3], Error<'_>> {
    let digit = |index: usize| u8::from_str_radix(&digits[index..=index], 16);
    let channels = match digits.len() {
        3 => [digit(0), digit(1), digit(2)].map(|c| c.map(|c| c * 17)),
        6 => [0, 2, 4].map(|i| u8::from_str_radix(&digits[i..i + 2], 16)),
        _ => {
            return Err(Error::ExpectedMatch {
                expected: "3 or 6 hex digits",
                received: digits,
            })
        }
    };
    let [r, g, b] = channels;
    Ok([
        r.map_err(|_| Error::InvalidNumber)?,
        g.map_err(|_| Error::InvalidNumber)?,
        b.map_err(|_| Error::InvalidNumber)?,
    ])
}

/// Parses the arguments of `rgb(r, g, b)`, where each is an integer or percentage
#[allow(clippy::cast_sign_loss)]
fn parse_rgb_function<'input>(input: &mut Parser<'input>) -> Result<[u8; 3], Error<'input>> {
    input.skip_whitespace();
    input.expect_char('(')?;
    let mut channels = [0; 3];
    for (i, channel) in channels.iter_mut().enumerate() {
        if i > 0 {
            input.skip_separator();
        }
        let mut value = f64::parse(input)?;
        if input.skip_char('%') {
            value = value / 100.0 * 255.0;
        }
        *channel = value.round().clamp(0.0, 255.0) as u8;
    }
    input.skip_whitespace();
    input.expect_char(')')?;
    Ok(channels)
}

/// The named colors of CSS
static NAMED_COLORS: phf::Map<&'static str, [u8; 3]> = phf_map! {
    "aliceblue" => [240, 248, 255],
    "antiquewhite" => [250, 235, 215],
    "aqua" => [0, 255, 255],
    "aquamarine" => [127, 255, 212],
    "azure" => [240, 255, 255],
    "beige" => [245, 245, 220],
    "bisque" => [255, 228, 196],
    "black" => [0, 0, 0],
    "blanchedalmond" => [255, 235, 205],
    "blue" => [0, 0, 255],
    "blueviolet" => [138, 43, 226],
    "brown" => [165, 42, 42],
    "burlywood" => [222, 184, 135],
    "cadetblue" => [95, 158, 160],
    "chartreuse" => [127, 255, 0],
    "chocolate" => [210, 105, 30],
    "coral" => [255, 127, 80],
    "cornflowerblue" => [100, 149, 237],
    "cornsilk" => [255, 248, 220],
    "crimson" => [220, 20, 60],
    "cyan" => [0, 255, 255],
    "darkblue" => [0, 0, 139],
    "darkcyan" => [0, 139, 139],
    "darkgoldenrod" => [184, 134, 11],
    "darkgray" => [169, 169, 169],
    "darkgreen" => [0, 100, 0],
    "darkgrey" => [169, 169, 169],
    "darkkhaki" => [189, 183, 107],
    "darkmagenta" => [139, 0, 139],
    "darkolivegreen" => [85, 107, 47],
    "darkorange" => [255, 140, 0],
    "darkorchid" => [153, 50, 204],
    "darkred" => [139, 0, 0],
    "darksalmon" => [233, 150, 122],
    "darkseagreen" => [143, 188, 143],
    "darkslateblue" => [72, 61, 139],
    "darkslategray" => [47, 79, 79],
    "darkslategrey" => [47, 79, 79],
    "darkturquoise" => [0, 206, 209],
    "darkviolet" => [148, 0, 211],
    "deeppink" => [255, 20, 147],
    "deepskyblue" => [0, 191, 255],
    "dimgray" => [105, 105, 105],
    "dimgrey" => [105, 105, 105],
    "dodgerblue" => [30, 144, 255],
    "firebrick" => [178, 34, 34],
    "floralwhite" => [255, 250, 240],
    "forestgreen" => [34, 139, 34],
    "fuchsia" => [255, 0, 255],
    "gainsboro" => [220, 220, 220],
    "ghostwhite" => [248, 248, 255],
    "gold" => [255, 215, 0],
    "goldenrod" => [218, 165, 32],
    "gray" => [128, 128, 128],
    "grey" => [128, 128, 128],
    "green" => [0, 128, 0],
    "greenyellow" => [173, 255, 47],
    "honeydew" => [240, 255, 240],
    "hotpink" => [255, 105, 180],
    "indianred" => [205, 92, 92],
    "indigo" => [75, 0, 130],
    "ivory" => [255, 255, 240],
    "khaki" => [240, 230, 140],
    "lavender" => [230, 230, 250],
    "lavenderblush" => [255, 240, 245],
    "lawngreen" => [124, 252, 0],
    "lemonchiffon" => [255, 250, 205],
    "lightblue" => [173, 216, 230],
    "lightcoral" => [240, 128, 128],
    "lightcyan" => [224, 255, 255],
    "lightgoldenrodyellow" => [250, 250, 210],
    "lightgray" => [211, 211, 211],
    "lightgreen" => [144, 238, 144],
    "lightgrey" => [211, 211, 211],
    "lightpink" => [255, 182, 193],
    "lightsalmon" => [255, 160, 122],
    "lightseagreen" => [32, 178, 170],
    "lightskyblue" => [135, 206, 250],
    "lightslategray" => [119, 136, 153],
    "lightslategrey" => [119, 136, 153],
    "lightsteelblue" => [176, 196, 222],
    "lightyellow" => [255, 255, 224],
    "lime" => [0, 255, 0],
    "limegreen" => [50, 205, 50],
    "linen" => [250, 240, 230],
    "magenta" => [255, 0, 255],
    "maroon" => [128, 0, 0],
    "mediumaquamarine" => [102, 205, 170],
    "mediumblue" => [0, 0, 205],
    "mediumorchid" => [186, 85, 211],
    "mediumpurple" => [147, 112, 219],
    "mediumseagreen" => [60, 179, 113],
    "mediumslateblue" => [123, 104, 238],
    "mediumspringgreen" => [0, 250, 154],
    "mediumturquoise" => [72, 209, 204],
    "mediumvioletred" => [199, 21, 133],
    "midnightblue" => [25, 25, 112],
    "mintcream" => [245, 255, 250],
    "mistyrose" => [255, 228, 225],
    "moccasin" => [255, 228, 181],
    "navajowhite" => [255, 222, 173],
    "navy" => [0, 0, 128],
    "oldlace" => [253, 245, 230],
    "olive" => [128, 128, 0],
    "olivedrab" => [107, 142, 35],
    "orange" => [255, 165, 0],
    "orangered" => [255, 69, 0],
    "orchid" => [218, 112, 214],
    "palegoldenrod" => [238, 232, 170],
    "palegreen" => [152, 251, 152],
    "paleturquoise" => [175, 238, 238],
    "palevioletred" => [219, 112, 147],
    "papayawhip" => [255, 239, 213],
    "peachpuff" => [255, 218, 185],
    "peru" => [205, 133, 63],
    "pink" => [255, 192, 203],
    "plum" => [221, 160, 221],
    "powderblue" => [176, 224, 230],
    "purple" => [128, 0, 128],
    "rebeccapurple" => [102, 51, 153],
    "red" => [255, 0, 0],
    "rosybrown" => [188, 143, 143],
    "royalblue" => [65, 105, 225],
    "saddlebrown" => [139, 69, 19],
    "salmon" => [250, 128, 114],
    "sandybrown" => [244, 164, 96],
    "seagreen" => [46, 139, 87],
    "seashell" => [255, 245, 238],
    "sienna" => [160, 82, 45],
    "silver" => [192, 192, 192],
    "skyblue" => [135, 206, 235],
    "slateblue" => [106, 90, 205],
    "slategray" => [112, 128, 144],
    "slategrey" => [112, 128, 144],
    "snow" => [255, 250, 250],
    "springgreen" => [0, 255, 127],
    "steelblue" => [70, 130, 180],
    "tan" => [210, 180, 140],
    "teal" => [0, 128, 128],
    "thistle" => [216, 191, 216],
    "tomato" => [255, 99, 71],
    "turquoise" => [64, 224, 208],
    "violet" => [238, 130, 238],
    "wheat" => [245, 222, 179],
    "white" => [255, 255, 255],
    "whitesmoke" => [245, 245, 245],
    "yellow" => [255, 255, 0],
    "yellowgreen" => [154, 205, 50],
};

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn rgba8(value: &str) -> Option<[u8; 4]> {
        match Paint::parse_string(value).ok()? {
            Paint::Color(color) => Some(color.to_rgba8()),
            Paint::CurrentColor => None,
        }
    }

    #[test]
    fn hex() {
        assert_eq!(rgba8("#ff0000"), Some([255, 0, 0, 255]));
        assert_eq!(rgba8("#F00"), Some([255, 0, 0, 255]));
        assert_eq!(rgba8("#1a2b3c"), Some([0x1a, 0x2b, 0x3c, 255]));
        assert_eq!(rgba8("#12345"), None);
        assert_eq!(rgba8("#xyz"), None);
    }

    #[test]
    fn keywords() {
        assert_eq!(rgba8("none"), Some([255, 255, 255, 0]));
        assert_eq!(rgba8("Red"), Some([255, 0, 0, 255]));
        assert_eq!(rgba8("rebeccapurple"), Some([102, 51, 153, 255]));
        assert_eq!(Paint::parse_string("currentColor"), Ok(Paint::CurrentColor));
        assert_eq!(rgba8("url(#gradient)"), None);
        assert_eq!(rgba8("notacolor"), None);
    }

    #[test]
    fn rgb_function() {
        assert_eq!(rgba8("rgb(255, 128, 0)"), Some([255, 128, 0, 255]));
        assert_eq!(rgba8("rgb(100%,0%,50%)"), Some([255, 0, 128, 255]));
        assert_eq!(rgba8("rgb(1, 2)"), None);
    }

    #[test]
    fn hex_output() {
        let color = Color {
            a: 0.5,
            ..Color::from_rgb8([255, 0, 16])
        };
        assert_eq!(color.to_hex(), "#ff0010");
        assert_eq!(color.to_rgba8()[3], 127);
    }
}
