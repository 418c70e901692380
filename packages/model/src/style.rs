//! Typed style properties.
//!
//! Property keys arrive from saved documents in two spellings: camelCase
//! (`backgroundColor`) and hyphenated (`max-width`). Both resolve to the same
//! [`StyleProperty`]; anything unrecognized is kept verbatim as
//! [`StyleProperty::Custom`].

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Grouping used by the property panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PropertyCategory {
    Font,
    Color,
    Dimension,
    Padding,
    Margin,
    Display,
    Border,
    Other,
}

impl PropertyCategory {
    pub const ALL: [PropertyCategory; 8] = [
        PropertyCategory::Font,
        PropertyCategory::Color,
        PropertyCategory::Dimension,
        PropertyCategory::Padding,
        PropertyCategory::Margin,
        PropertyCategory::Display,
        PropertyCategory::Border,
        PropertyCategory::Other,
    ];

    pub fn title(self) -> &'static str {
        match self {
            PropertyCategory::Font => "Font",
            PropertyCategory::Color => "Color",
            PropertyCategory::Dimension => "Width & height",
            PropertyCategory::Padding => "Padding",
            PropertyCategory::Margin => "Margin",
            PropertyCategory::Display => "Display",
            PropertyCategory::Border => "Border",
            PropertyCategory::Other => "Other",
        }
    }

    /// Known properties in this category, in panel order.
    pub fn properties(self) -> impl Iterator<Item = StyleProperty> {
        StyleProperty::KNOWN
            .iter()
            .filter(move |p| p.category() == Some(self))
            .cloned()
    }
}

macro_rules! style_properties {
    ($( $variant:ident => $key:literal, $css:literal, $category:expr; )*) => {
        /// A CSS property an element can carry.
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum StyleProperty {
            $( $variant, )*
            /// Any property without dedicated metadata.
            Custom(String),
        }

        impl StyleProperty {
            /// Every recognized property, in declaration order.
            pub const KNOWN: &'static [StyleProperty] = &[$( StyleProperty::$variant, )*];

            /// Key used in saved documents.
            pub fn key(&self) -> &str {
                match self {
                    $( StyleProperty::$variant => $key, )*
                    StyleProperty::Custom(key) => key,
                }
            }

            pub fn category(&self) -> Option<PropertyCategory> {
                match self {
                    $( StyleProperty::$variant => $category, )*
                    StyleProperty::Custom(_) => None,
                }
            }

            fn known_css_name(&self) -> Option<&'static str> {
                match self {
                    $( StyleProperty::$variant => Some($css), )*
                    StyleProperty::Custom(_) => None,
                }
            }

            fn from_css_name(css: &str) -> Option<StyleProperty> {
                match css {
                    $( $css => Some(StyleProperty::$variant), )*
                    _ => None,
                }
            }
        }
    };
}

use PropertyCategory as Cat;

style_properties! {
    FontFamily => "fontFamily", "font-family", Some(Cat::Font);
    FontSize => "fontSize", "font-size", Some(Cat::Font);
    FontWeight => "fontWeight", "font-weight", Some(Cat::Font);
    LineHeight => "lineHeight", "line-height", Some(Cat::Font);
    TextAlign => "textAlign", "text-align", Some(Cat::Font);
    TextDecoration => "textDecoration", "text-decoration", Some(Cat::Font);
    Color => "color", "color", Some(Cat::Color);
    BackgroundColor => "backgroundColor", "background-color", Some(Cat::Color);
    BorderColor => "borderColor", "border-color", Some(Cat::Color);
    Width => "width", "width", Some(Cat::Dimension);
    Height => "height", "height", Some(Cat::Dimension);
    MaxWidth => "max-width", "max-width", Some(Cat::Dimension);
    MaxHeight => "max-height", "max-height", Some(Cat::Dimension);
    Padding => "padding", "padding", Some(Cat::Padding);
    PaddingInlineStart => "padding-inline-start", "padding-inline-start", Some(Cat::Padding);
    PaddingInlineEnd => "padding-inline-end", "padding-inline-end", Some(Cat::Padding);
    PaddingBlockStart => "padding-block-start", "padding-block-start", Some(Cat::Padding);
    PaddingBlockEnd => "padding-block-end", "padding-block-end", Some(Cat::Padding);
    MarginTop => "marginTop", "margin-top", Some(Cat::Margin);
    MarginBottom => "marginBottom", "margin-bottom", Some(Cat::Margin);
    MarginLeft => "marginLeft", "margin-left", Some(Cat::Margin);
    MarginRight => "marginRight", "margin-right", Some(Cat::Margin);
    Display => "display", "display", Some(Cat::Display);
    Border => "border", "border", Some(Cat::Border);
    BorderRadius => "borderRadius", "border-radius", Some(Cat::Border);
    BorderWidth => "borderWidth", "border-width", Some(Cat::Border);
    BorderStyle => "borderStyle", "border-style", Some(Cat::Border);
    Position => "position", "position", Some(Cat::Other);
    Overflow => "overflow", "overflow", Some(Cat::Other);
    Opacity => "opacity", "opacity", Some(Cat::Other);
    BoxShadow => "boxShadow", "box-shadow", Some(Cat::Other);
    Transform => "transform", "transform", Some(Cat::Other);
    FlexDirection => "flexDirection", "flex-direction", None;
    JustifyContent => "justifyContent", "justify-content", None;
    AlignItems => "alignItems", "align-items", None;
    Transition => "transition", "transition", None;
}

impl StyleProperty {
    /// Resolve a document key in either camelCase or hyphenated form.
    pub fn from_key(key: &str) -> StyleProperty {
        StyleProperty::from_css_name(&to_kebab_case(key))
            .unwrap_or_else(|| StyleProperty::Custom(key.to_string()))
    }

    /// Name as written in a CSS declaration.
    pub fn css_name(&self) -> String {
        match self.known_css_name() {
            Some(name) => name.to_string(),
            None => to_kebab_case(self.key()),
        }
    }

    /// Properties edited with a color picker.
    pub fn is_color(&self) -> bool {
        matches!(
            self,
            StyleProperty::Color | StyleProperty::BackgroundColor | StyleProperty::BorderColor
        )
    }

    /// Unit appended to bare numbers typed into the panel.
    pub fn default_unit(&self) -> Option<&'static str> {
        match self {
            StyleProperty::Width
            | StyleProperty::Height
            | StyleProperty::MaxWidth
            | StyleProperty::MaxHeight
            | StyleProperty::FontSize
            | StyleProperty::Padding
            | StyleProperty::PaddingInlineStart
            | StyleProperty::PaddingInlineEnd
            | StyleProperty::PaddingBlockStart
            | StyleProperty::PaddingBlockEnd
            | StyleProperty::BorderRadius
            | StyleProperty::MarginTop
            | StyleProperty::MarginBottom
            | StyleProperty::MarginLeft
            | StyleProperty::MarginRight
            | StyleProperty::BorderWidth => Some("px"),
            _ => None,
        }
    }

    /// Properties whose panel offers an `auto` toggle.
    pub fn accepts_auto(&self) -> bool {
        matches!(
            self,
            StyleProperty::Width
                | StyleProperty::Height
                | StyleProperty::MaxWidth
                | StyleProperty::MaxHeight
        )
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, StyleProperty::Custom(_))
    }
}

/// `backgroundColor` -> `background-color`. Already hyphenated input passes
/// through apart from lowercasing.
pub fn to_kebab_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for ch in key.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

impl fmt::Display for StyleProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for StyleProperty {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(StyleProperty::from_key(s))
    }
}

impl From<&str> for StyleProperty {
    fn from(key: &str) -> Self {
        StyleProperty::from_key(key)
    }
}

impl Serialize for StyleProperty {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

impl<'de> Deserialize<'de> for StyleProperty {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let key = String::deserialize(deserializer)?;
        Ok(StyleProperty::from_key(&key))
    }
}
