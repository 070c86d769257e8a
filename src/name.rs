// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Extraction of a single overlay name from a raw submission buffer.

/// Splits one overlay name off the front of a submission buffer.
///
/// The name is everything up to, but not including, the first NUL or newline
/// byte. Returns the name and the number of submission bytes consumed: the
/// name length plus one for the terminator if one was present, otherwise the
/// whole buffer.
#[must_use]
pub fn split_name(buf: &[u8]) -> (&[u8], usize) {
    match buf.iter().position(|&b| b == b'\0' || b == b'\n') {
        Some(end) => (&buf[..end], end + 1),
        None => (buf, buf.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_terminator_takes_whole_buffer() {
        assert_eq!(split_name(b"board-a.dtbo"), (&b"board-a.dtbo"[..], 12));
    }

    #[test]
    fn test_newline_terminator_is_dropped() {
        assert_eq!(split_name(b"board-a.dtbo\n"), (&b"board-a.dtbo"[..], 13));
    }

    #[test]
    fn test_nul_terminator_is_dropped() {
        assert_eq!(split_name(b"board-a.dtbo\0"), (&b"board-a.dtbo"[..], 13));
    }

    #[test]
    fn test_terminator_at_position_zero() {
        assert_eq!(split_name(b"\nboard-a.dtbo"), (&b""[..], 1));
    }

    #[test]
    fn test_stops_at_first_of_multiple_terminators() {
        assert_eq!(split_name(b"a\nb\0c\n"), (&b"a"[..], 2));
        assert_eq!(split_name(b"a\0b\nc\0"), (&b"a"[..], 2));
    }

    #[test]
    fn test_empty_buffer() {
        assert_eq!(split_name(b""), (&b""[..], 0));
    }

    #[test]
    fn test_terminator_in_middle_leaves_rest_unconsumed() {
        let (name, consumed) = split_name(b"first\nsecond");
        assert_eq!(name, b"first");
        assert_eq!(consumed, 6);
    }
}
