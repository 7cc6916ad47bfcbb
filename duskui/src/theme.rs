//! Fixed dark palette shared by every widget in the toolkit.

/// Opaque 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Named colors for the dark theme.
///
/// The toolkit does not support runtime theming; hosts that want a different
/// look construct their own `Palette` and hand it to the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Default row background (even rows).
    pub grey_background: Color,
    /// Alternate row background (odd rows).
    pub header_background: Color,
    /// Selection background while the widget is focused.
    pub blue_selection: Color,
    /// Selection background while the widget is unfocused.
    pub grey_selection: Color,
    /// Primary label text.
    pub light_text: Color,
    /// Disabled label text.
    pub disabled_text: Color,
    /// Hover accent for interactive glyphs.
    pub blue_highlight: Color,
}

impl Palette {
    pub const fn dark() -> Self {
        Self {
            grey_background: Color::new(60, 63, 65),
            header_background: Color::new(57, 60, 62),
            blue_selection: Color::new(75, 110, 175),
            grey_selection: Color::new(92, 92, 92),
            light_text: Color::new(220, 220, 220),
            disabled_text: Color::new(153, 153, 153),
            blue_highlight: Color::new(104, 151, 187),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::dark()
    }
}
