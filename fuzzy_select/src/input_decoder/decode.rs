// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Bytes from one terminal read to a [`KeyPress`].
//!
//! | Input bytes                | Result                                      |
//! |:---------------------------|:--------------------------------------------|
//! | `[]`                       | [`DecodedInput::NoInput`] (end of stream)   |
//! | `[0x20..=0x7E]`            | [`KeyPress::Character`]                     |
//! | `[control byte]`           | [`KeyPress::Escape`] with that byte's value |
//! | `[ESC, ..]` (2 to 4 bytes) | composite [`EscapeCode`] (arrow keys)       |
//! | anything else              | [`DecodedInput::Unrecognized`]              |
//!
//! Multi-byte UTF-8 characters are not decoded. They come back as
//! [`DecodedInput::Unrecognized`] rather than as a guessed character.

use super::{EscapeCode, KeyPress};
use crate::constants::ANSI_ESC;

/// Size of the buffer handed to a single blocking read.
pub const READ_BUFFER_SIZE: usize = 16;

/// Widest escape sequence that fits in an [`EscapeCode`] discriminant.
const ESCAPE_CODE_WIDTH: usize = size_of::<u32>();

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecodedInput {
    Key(KeyPress),
    /// Zero bytes were read: the input stream is closed.
    NoInput,
    /// Bytes arrived but they don't map to a supported key (Home, End, `Alt+x`,
    /// multi-byte UTF-8, etc.).
    Unrecognized,
}

/// Decode the bytes returned by one terminal read.
#[must_use]
pub fn decode_key_press(buffer: &[u8]) -> DecodedInput {
    match buffer {
        [] => DecodedInput::NoInput,
        [byte] => decode_single_byte(*byte),
        [ANSI_ESC, ..] => decode_escape_sequence(buffer),
        _ => DecodedInput::Unrecognized,
    }
}

/// Same set of bytes as C's `isprint` in the "C" locale.
#[must_use]
pub fn is_printable_ascii(byte: u8) -> bool { byte.is_ascii_graphic() || byte == b' ' }

fn decode_single_byte(byte: u8) -> DecodedInput {
    if is_printable_ascii(byte) {
        return DecodedInput::Key(KeyPress::Character(char::from(byte)));
    }
    match EscapeCode::from_repr(u32::from(byte)) {
        Some(code) => DecodedInput::Key(KeyPress::Escape(code)),
        None => DecodedInput::Unrecognized,
    }
}

fn decode_escape_sequence(buffer: &[u8]) -> DecodedInput {
    if buffer.len() > ESCAPE_CODE_WIDTH {
        return DecodedInput::Unrecognized;
    }

    let folded = buffer
        .iter()
        .fold(0_u32, |acc, byte| (acc << 8) | u32::from(*byte));

    match EscapeCode::from_repr(folded) {
        Some(code) if code.is_arrow() => DecodedInput::Key(KeyPress::Escape(code)),
        _ => DecodedInput::Unrecognized,
    }
}
