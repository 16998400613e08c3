/*!
 Helpers for the text carried inside tokens.
*/

use std::{
    borrow::Cow,
    fmt::{Display, Formatter, Result},
};

/// Text read from a token, with a note of whether bytes had to be replaced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditText {
    /// The decoded text, up to the first NUL
    pub value: String,
    /// `true` if invalid UTF-8 was replaced with `U+FFFD`
    pub repaired: bool,
}

impl AuditText {
    pub fn new(value: String) -> Self {
        Self {
            value,
            repaired: false,
        }
    }

    /// Decode a NUL-terminated span; anything after the first NUL is discarded
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let bytes = match bytes.iter().position(|byte| *byte == 0) {
            Some(nul) => &bytes[..nul],
            None => bytes,
        };
        match String::from_utf8_lossy(bytes) {
            Cow::Borrowed(text) => Self::new(text.to_string()),
            Cow::Owned(text) => Self {
                value: text,
                repaired: true,
            },
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl Display for AuditText {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> Result {
        write!(fmt, "{}", self.value)
    }
}

impl From<&str> for AuditText {
    fn from(value: &str) -> Self {
        Self::new(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use crate::util::text::AuditText;

    #[test]
    fn can_drop_after_nul() {
        let text = AuditText::from_bytes(b"/bin/ls\0garbage");
        assert_eq!(text.as_str(), "/bin/ls");
        assert!(!text.repaired);
    }

    #[test]
    fn can_decode_without_nul() {
        let text = AuditText::from_bytes(b"no terminator");
        assert_eq!(text.as_str(), "no terminator");
    }

    #[test]
    fn can_repair_invalid_utf8() {
        let text = AuditText::from_bytes(&[b'a', 0xff, b'b', 0x00]);
        assert_eq!(text.as_str(), "a\u{FFFD}b");
        assert!(text.repaired);
    }
}
