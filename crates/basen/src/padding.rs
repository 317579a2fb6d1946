//! Padding policy shared by the encoders that honour `BaseNFlags::ADD_PADDING`.

use crate::constants::PAD;
use crate::DecodeError;

/// Number of pad characters needed to bring `encoded_len` up to a whole
/// multiple of `unit`.
#[inline]
pub fn padding_required(encoded_len: usize, unit: usize) -> usize {
    (unit - encoded_len % unit) % unit
}

/// Appends pad characters to `out` until its length is a multiple of `unit`.
pub fn append_padding(out: &mut String, unit: usize) {
    let count = padding_required(out.len(), unit);
    out.extend(std::iter::repeat(PAD).take(count));
}

/// Removes trailing pad characters from `text`.
///
/// Unpadded input is returned as-is. If padding is present it must complete
/// the final unit exactly: the padded length is a multiple of `unit` and there
/// are fewer than `unit` pad characters.
pub fn strip_padding(text: &str, unit: usize) -> Result<&str, DecodeError> {
    let stripped = text.trim_end_matches(PAD);
    let pad_count = text.len() - stripped.len();
    if pad_count == 0 {
        return Ok(text);
    }
    if pad_count >= unit || text.len() % unit != 0 {
        return Err(DecodeError::InvalidPadding);
    }
    Ok(stripped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padding_required() {
        assert_eq!(padding_required(0, 4), 0);
        assert_eq!(padding_required(14, 4), 2);
        assert_eq!(padding_required(16, 4), 0);
        assert_eq!(padding_required(26, 8), 6);
        assert_eq!(padding_required(22, 11), 0);
    }

    #[test]
    fn test_append_padding() {
        let mut out = String::from("AQIDBAX__vz7-g");
        append_padding(&mut out, 4);
        assert_eq!(out, "AQIDBAX__vz7-g==");
    }

    #[test]
    fn test_strip_padding() {
        assert_eq!(strip_padding("Zg==", 4), Ok("Zg"));
        assert_eq!(strip_padding("Zg", 4), Ok("Zg"));
        assert_eq!(strip_padding("", 4), Ok(""));
        assert_eq!(strip_padding("Zg=", 4), Err(DecodeError::InvalidPadding));
        assert_eq!(strip_padding("====", 4), Err(DecodeError::InvalidPadding));
    }
}
