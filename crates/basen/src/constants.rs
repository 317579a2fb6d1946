/// URL-safe base32 alphabet (digits, then lowercase `a` to `v`).
pub const ALPHABET_BASE32_URL: &str = "0123456789abcdefghijklmnopqrstuv";

/// URL-safe base36 alphabet (digits, then lowercase letters).
pub const ALPHABET_BASE36_URL: &str = "0123456789abcdefghijklmnopqrstuvwxyz";

/// Base62 alphabet (digits, uppercase, lowercase).
pub const ALPHABET_BASE62: &str =
    "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// URL-safe base64 alphabet (uses - and _ instead of + and /).
pub const ALPHABET_BASE64_URL: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// Padding character.
pub const PAD: char = '=';

/// A padded base32url string is a multiple of 8 symbols (5 bytes).
pub const BASE32_PADDING_UNIT: usize = 8;

/// A padded base62 string is a multiple of 11 symbols (8 bytes).
pub const BASE62_PADDING_UNIT: usize = 11;

/// A padded base64url string is a multiple of 4 symbols (3 bytes).
pub const BASE64_PADDING_UNIT: usize = 4;
