//! Keypad input

/// Button grid, row by row
pub const KEYPAD_LAYOUT: [[char; 4]; 4] = [
    ['7', '8', '9', '/'],
    ['4', '5', '6', '*'],
    ['1', '2', '3', '-'],
    ['C', '0', '=', '+'],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Appended to the expression as-is
    Input(char),
    /// Evaluate the expression
    Equals,
    /// Empty the expression
    Clear,
}

impl Key {
    pub fn from_char(ch: char) -> Self {
        match ch {
            '=' => Key::Equals,
            'C' | 'c' => Key::Clear,
            other => Key::Input(other),
        }
    }
}

impl From<char> for Key {
    fn from(ch: char) -> Self {
        Key::from_char(ch)
    }
}
