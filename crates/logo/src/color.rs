/// The eight colors the language can name.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Color {
    Black,
    White,
    Red,
    Green,
    Blue,
    Yellow,
    Gray,
    Magenta,
}

impl Color {
    /// Case-insensitive color-name lookup.
    pub fn lookup(name: &str) -> Option<Color> {
        Some(match name.to_ascii_uppercase().as_str() {
            "BLACK" => Color::Black,
            "WHITE" => Color::White,
            "RED" => Color::Red,
            "GREEN" => Color::Green,
            "BLUE" => Color::Blue,
            "YELLOW" => Color::Yellow,
            "GRAY" => Color::Gray,
            "MAGENTA" => Color::Magenta,
            _ => return None,
        })
    }

    /// Canonical lowercase spelling, as embedded in compiled output.
    pub fn name(self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::White => "white",
            Color::Red => "red",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Yellow => "yellow",
            Color::Gray => "gray",
            Color::Magenta => "magenta",
        }
    }

    /// RGBA value for hosts that push pixels rather than color names.
    pub fn rgba(self) -> [u8; 4] {
        match self {
            Color::Black => [0x00, 0x00, 0x00, 0xff],
            Color::White => [0xff, 0xff, 0xff, 0xff],
            Color::Red => [0xff, 0x00, 0x00, 0xff],
            Color::Green => [0x00, 0xff, 0x00, 0xff],
            Color::Blue => [0x00, 0x00, 0xff, 0xff],
            Color::Yellow => [0xff, 0xff, 0x00, 0xff],
            Color::Gray => [0x88, 0x88, 0x88, 0xff],
            Color::Magenta => [0xff, 0x00, 0xff, 0xff],
        }
    }
}
