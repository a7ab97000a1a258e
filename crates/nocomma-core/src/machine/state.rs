// crates/nocomma-core/src/machine/state.rs
//
// Line-position automaton.
//
// BeforeFirstSeparator: start of line until the first TAB.
// AfterFirstSeparator:  after the first TAB until NEWLINE.
//
// Rules, per byte:
// - TAB     -> emit as-is, enter AfterFirstSeparator
// - NEWLINE -> emit as-is, enter BeforeFirstSeparator
// - COMMA   -> emit SPACE if AfterFirstSeparator, else emit as-is
// - other   -> emit as-is

pub const TAB: u8 = b'\t';
pub const NEWLINE: u8 = b'\n';
pub const COMMA: u8 = b',';
pub const SPACE: u8 = b' ';

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LinePosition {
    /// Still inside WORD; commas here are data.
    #[default]
    BeforeFirstSeparator,
    /// Past the first TAB; commas here separate subfields.
    AfterFirstSeparator,
}

impl LinePosition {
    /// Advance by one byte. Returns the next state and the byte to emit.
    #[inline]
    pub fn step(self, b: u8) -> (LinePosition, u8) {
        match b {
            TAB => (LinePosition::AfterFirstSeparator, b),
            NEWLINE => (LinePosition::BeforeFirstSeparator, b),
            COMMA if self.is_after_separator() => (self, SPACE),
            _ => (self, b),
        }
    }

    #[inline]
    pub fn is_after_separator(self) -> bool {
        self == LinePosition::AfterFirstSeparator
    }
}
