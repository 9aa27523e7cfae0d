// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use strum_macros::{EnumIter, FromRepr};

/// Non-printable keys the selector understands.
///
/// Single byte codes carry the byte value of the control character. The arrow keys are
/// composite codes: the bytes of the `CSI` cursor sequence (`ESC [ A`) folded big-endian
/// into one integer, so `ESC [ A` becomes `0x1B5B41`.
///
/// The discriminant is the wire value, which is what [`EscapeCode::from_repr`] matches
/// against when decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromRepr, EnumIter)]
#[repr(u32)]
pub enum EscapeCode {
    Null = 0x00,
    StartOfHeading = 0x01,
    StartOfText = 0x02,
    EndOfText = 0x03,
    EndOfTransmission = 0x04,
    Enquiry = 0x05,
    Acknowledge = 0x06,
    Bell = 0x07,
    Backspace = 0x08,
    Tab = 0x09,
    LineFeed = 0x0A,
    VerticalTab = 0x0B,
    NewPage = 0x0C,
    CarriageReturn = 0x0D,
    ShiftOut = 0x0E,
    ShiftIn = 0x0F,
    DataLinkEscape = 0x10,
    DeviceControl1 = 0x11,
    DeviceControl2 = 0x12,
    DeviceControl3 = 0x13,
    DeviceControl4 = 0x14,
    NegativeAcknowledge = 0x15,
    SynchronousIdle = 0x16,
    EndOfTransmissionBlock = 0x17,
    Cancel = 0x18,
    EndOfMedium = 0x19,
    Substitute = 0x1A,
    Escape = 0x1B,
    FileSeparator = 0x1C,
    GroupSeparator = 0x1D,
    RecordSeparator = 0x1E,
    UnitSeparator = 0x1F,
    Delete = 0x7F,

    ArrowUp = 0x001B_5B41,
    ArrowDown = 0x001B_5B42,
    ArrowRight = 0x001B_5B43,
    ArrowLeft = 0x001B_5B44,
}

impl EscapeCode {
    /// The wire value of this code (see the type level docs).
    #[must_use]
    pub const fn value(self) -> u32 { self as u32 }

    /// `true` for the four composite arrow key codes.
    #[must_use]
    pub const fn is_arrow(self) -> bool {
        matches!(
            self,
            EscapeCode::ArrowUp
                | EscapeCode::ArrowDown
                | EscapeCode::ArrowRight
                | EscapeCode::ArrowLeft
        )
    }
}

/// A single keypress: either a non-printable [`EscapeCode`] or one printable character.
/// Never both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyPress {
    Escape(EscapeCode),
    Character(char),
}

impl KeyPress {
    #[must_use]
    pub fn is_escape(&self) -> bool { matches!(self, KeyPress::Escape(_)) }

    #[must_use]
    pub fn is_character(&self) -> bool { matches!(self, KeyPress::Character(_)) }

    #[must_use]
    pub fn as_escape(&self) -> Option<EscapeCode> {
        match self {
            KeyPress::Escape(code) => Some(*code),
            KeyPress::Character(_) => None,
        }
    }

    #[must_use]
    pub fn as_character(&self) -> Option<char> {
        match self {
            KeyPress::Character(ch) => Some(*ch),
            KeyPress::Escape(_) => None,
        }
    }
}

impl From<EscapeCode> for KeyPress {
    fn from(code: EscapeCode) -> Self { KeyPress::Escape(code) }
}

impl From<char> for KeyPress {
    fn from(ch: char) -> Self { KeyPress::Character(ch) }
}

impl PartialEq<EscapeCode> for KeyPress {
    fn eq(&self, other: &EscapeCode) -> bool { self.as_escape() == Some(*other) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    #[test]
    fn test_escape_code_round_trips_through_repr() {
        for code in EscapeCode::iter() {
            assert_eq!(EscapeCode::from_repr(code.value()), Some(code));
        }
    }

    #[test]
    fn test_arrow_codes_are_folded_csi_bytes() {
        assert_eq!(EscapeCode::ArrowUp.value(), 0x1B5B41);
        assert_eq!(EscapeCode::ArrowLeft.value(), 0x1B5B44);
        assert!(EscapeCode::ArrowDown.is_arrow());
        assert!(!EscapeCode::Escape.is_arrow());
    }

    #[test]
    fn test_key_press_is_never_both() {
        let esc = KeyPress::from(EscapeCode::Tab);
        let ch = KeyPress::from('a');

        assert!(esc.is_escape() && !esc.is_character());
        assert!(ch.is_character() && !ch.is_escape());
        assert_eq!(esc.as_character(), None);
        assert_eq!(ch.as_escape(), None);
    }

    #[test]
    fn test_key_press_equality_compares_tag_and_payload() {
        assert_eq!(KeyPress::Character('a'), KeyPress::Character('a'));
        assert_ne!(KeyPress::Character('a'), KeyPress::Character('b'));
        // Same numeric value, different tag.
        assert_ne!(KeyPress::Character('\t'), KeyPress::Escape(EscapeCode::Tab));
        assert!(KeyPress::Escape(EscapeCode::Tab) == EscapeCode::Tab);
        assert!(KeyPress::Character('\t') != EscapeCode::Tab);
    }
}
