//! Component value classification.
//!
//! The families never parse values into typed quantities; they only need to
//! tell which sub-property a whitespace-separated token belongs to. These
//! predicates work on raw token text.
//!
//! - [CSS Values and Units Level 4](https://www.w3.org/TR/css-values-4/)
//! - [CSS Color Level 4](https://www.w3.org/TR/css-color-4/)
//! - [CSS Backgrounds and Borders Level 3](https://www.w3.org/TR/css-backgrounds-3/)

/// [§ 2.1 Component value combinators](https://www.w3.org/TR/css-values-4/#component-combinators)
///
/// Split a value into its space-separated components. Whitespace inside
/// parentheses or quotes does not split, so `rgb(1, 2, 3)` and
/// `url("a b.png")` stay single tokens.
#[must_use]
pub fn split_values(value: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut depth = 0_usize;
    let mut quote: Option<char> = None;
    let mut start: Option<usize> = None;

    for (offset, character) in value.char_indices() {
        if let Some(open) = quote {
            if character == open {
                quote = None;
            }
            continue;
        }
        match character {
            c if c.is_whitespace() && depth == 0 => {
                if let Some(begin) = start.take() {
                    tokens.push(&value[begin..offset]);
                }
                continue;
            }
            '"' | '\'' => quote = Some(character),
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            _ => {}
        }
        if start.is_none() {
            start = Some(offset);
        }
    }
    if let Some(begin) = start {
        tokens.push(&value[begin..]);
    }
    tokens
}

/// [§ 6 Distance Units](https://www.w3.org/TR/css-values-4/#lengths)
const LENGTH_UNITS: &[&str] = &[
    "px", "cm", "mm", "q", "in", "pt", "pc", "em", "rem", "ex", "rex", "cap", "ch", "ic", "lh",
    "rlh", "vw", "vh", "vi", "vb", "vmin", "vmax",
];

/// Split a leading `<number>` off `token`, returning the remainder.
///
/// "`<number>`: an optional sign, then digits with an optional fractional part."
fn strip_number(token: &str) -> Option<&str> {
    let unsigned = token.strip_prefix(['+', '-']).unwrap_or(token);
    let digits_end = unsigned
        .find(|c: char| !c.is_ascii_digit() && c != '.')
        .unwrap_or(unsigned.len());
    let number = &unsigned[..digits_end];
    let has_digit = number.chars().any(|c| c.is_ascii_digit());
    let single_point = number.matches('.').count() <= 1;
    (has_digit && single_point && !number.ends_with('.')).then(|| &unsigned[digits_end..])
}

/// [§ 6 Distance Units](https://www.w3.org/TR/css-values-4/#lengths)
///
/// A `<length>`: a number followed by a length unit, a unitless zero, or a
/// `calc()` expression.
#[must_use]
pub fn is_length(token: &str) -> bool {
    if token
        .get(..5)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("calc("))
    {
        return token.ends_with(')');
    }
    match strip_number(token) {
        Some("") => token.trim_start_matches(['+', '-', '0', '.']).is_empty(),
        Some(unit) => LENGTH_UNITS
            .iter()
            .any(|known| unit.eq_ignore_ascii_case(known)),
        None => false,
    }
}

/// [§ 5.2 Percentages](https://www.w3.org/TR/css-values-4/#percentages)
///
/// "a `<number>` immediately followed by a percent sign '%'"
#[must_use]
pub fn is_percentage(token: &str) -> bool {
    strip_number(token) == Some("%")
}

/// [§ 4.3 'border-width'](https://www.w3.org/TR/css-backgrounds-3/#border-width)
///
/// `<line-width> = <length [0,∞]> | thin | medium | thick`
#[must_use]
pub fn is_line_width(token: &str) -> bool {
    is_length(token) || matches_keyword(token, &["thin", "medium", "thick"])
}

/// [§ 4.2 'border-style'](https://www.w3.org/TR/css-backgrounds-3/#border-style)
///
/// `<line-style> = none | hidden | dotted | dashed | solid | double | groove | ridge | inset | outset`
#[must_use]
pub fn is_line_style(token: &str) -> bool {
    matches_keyword(
        token,
        &[
            "none", "hidden", "dotted", "dashed", "solid", "double", "groove", "ridge", "inset",
            "outset",
        ],
    )
}

/// [§ 3.4 'background-repeat'](https://www.w3.org/TR/css-backgrounds-3/#background-repeat)
#[must_use]
pub fn is_repeat(token: &str) -> bool {
    matches_keyword(
        token,
        &["repeat", "repeat-x", "repeat-y", "no-repeat", "space", "round"],
    )
}

/// [§ 3.6 'background-position'](https://www.w3.org/TR/css-backgrounds-3/#background-position)
///
/// Keywords, lengths, and percentages.
#[must_use]
pub fn is_position(token: &str) -> bool {
    matches_keyword(token, &["left", "center", "right", "top", "bottom"])
        || is_length(token)
        || is_percentage(token)
}

/// [§ 3.5 'background-attachment'](https://www.w3.org/TR/css-backgrounds-3/#background-attachment)
#[must_use]
pub fn is_attachment(token: &str) -> bool {
    matches_keyword(token, &["scroll", "fixed", "local"])
}

/// [§ 3.3 'background-image'](https://www.w3.org/TR/css-backgrounds-3/#background-image)
///
/// `<bg-image> = <image> | none`; `<image>` covers `url()` and the gradient
/// functions.
#[must_use]
pub fn is_image(token: &str) -> bool {
    if token.eq_ignore_ascii_case("none") {
        return true;
    }
    let Some(open) = token.find('(') else {
        return false;
    };
    let function = token[..open].to_ascii_lowercase();
    token.ends_with(')')
        && (function == "url"
            || function == "image-set"
            || function.ends_with("linear-gradient")
            || function.ends_with("radial-gradient")
            || function.ends_with("conic-gradient"))
}

/// [§ 4 Color syntax](https://www.w3.org/TR/css-color-4/#color-syntax)
///
/// Hex notation, color functions, and named colors.
#[must_use]
pub fn is_color(token: &str) -> bool {
    if let Some(hex) = token.strip_prefix('#') {
        // [§ 5.2 The RGB hexadecimal notations](https://www.w3.org/TR/css-color-4/#hex-notation)
        //
        // "The syntax of a <hex-color> is a <hash-token> token whose value
        // consists of 3, 4, 6, or 8 hexadecimal digits."
        return matches!(hex.len(), 3 | 4 | 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit());
    }
    if let Some(open) = token.find('(') {
        let function = token[..open].to_ascii_lowercase();
        return token.ends_with(')') && COLOR_FUNCTIONS.contains(&function.as_str());
    }
    matches_keyword(token, NAMED_COLORS)
        || matches_keyword(token, &["transparent", "currentcolor"])
}

/// [§ 4.1 Color functions](https://www.w3.org/TR/css-color-4/#color-syntax)
const COLOR_FUNCTIONS: &[&str] = &[
    "rgb", "rgba", "hsl", "hsla", "hwb", "lab", "lch", "oklab", "oklch", "color", "color-mix",
];

/// [§ 6.1 Named Colors](https://www.w3.org/TR/css-color-4/#named-colors)
const NAMED_COLORS: &[&str] = &[
    "aliceblue", "antiquewhite", "aqua", "aquamarine", "azure", "beige", "bisque", "black",
    "blanchedalmond", "blue", "blueviolet", "brown", "burlywood", "cadetblue", "chartreuse",
    "chocolate", "coral", "cornflowerblue", "cornsilk", "crimson", "cyan", "darkblue", "darkcyan",
    "darkgoldenrod", "darkgray", "darkgreen", "darkgrey", "darkkhaki", "darkmagenta",
    "darkolivegreen", "darkorange", "darkorchid", "darkred", "darksalmon", "darkseagreen",
    "darkslateblue", "darkslategray", "darkslategrey", "darkturquoise", "darkviolet", "deeppink",
    "deepskyblue", "dimgray", "dimgrey", "dodgerblue", "firebrick", "floralwhite", "forestgreen",
    "fuchsia", "gainsboro", "ghostwhite", "gold", "goldenrod", "gray", "green", "greenyellow",
    "grey", "honeydew", "hotpink", "indianred", "indigo", "ivory", "khaki", "lavender",
    "lavenderblush", "lawngreen", "lemonchiffon", "lightblue", "lightcoral", "lightcyan",
    "lightgoldenrodyellow", "lightgray", "lightgreen", "lightgrey", "lightpink", "lightsalmon",
    "lightseagreen", "lightskyblue", "lightslategray", "lightslategrey", "lightsteelblue",
    "lightyellow", "lime", "limegreen", "linen", "magenta", "maroon", "mediumaquamarine",
    "mediumblue", "mediumorchid", "mediumpurple", "mediumseagreen", "mediumslateblue",
    "mediumspringgreen", "mediumturquoise", "mediumvioletred", "midnightblue", "mintcream",
    "mistyrose", "moccasin", "navajowhite", "navy", "oldlace", "olive", "olivedrab", "orange",
    "orangered", "orchid", "palegoldenrod", "palegreen", "paleturquoise", "palevioletred",
    "papayawhip", "peachpuff", "peru", "pink", "plum", "powderblue", "purple", "rebeccapurple",
    "red", "rosybrown", "royalblue", "saddlebrown", "salmon", "sandybrown", "seagreen", "seashell",
    "sienna", "silver", "skyblue", "slateblue", "slategray", "slategrey", "snow", "springgreen",
    "steelblue", "tan", "teal", "thistle", "tomato", "turquoise", "violet", "wheat", "white",
    "whitesmoke", "yellow", "yellowgreen",
];

/// CSS keywords are ASCII case-insensitive.
fn matches_keyword(token: &str, keywords: &[&str]) -> bool {
    keywords
        .iter()
        .any(|keyword| token.eq_ignore_ascii_case(keyword))
}
