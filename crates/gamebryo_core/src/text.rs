use std::fmt;

use serde::{Serialize, Serializer};

/// Text as stored in the save: one byte per character, Latin-1 range.
///
/// The bytes are kept exactly as read. Converting them to Unicode needs
/// a code page, which is the caller's choice. Serialization maps each
/// byte to the code point of the same value (ISO-8859-1), so the output is
/// a string that still round-trips to the stored bytes.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Latin1Text(Vec<u8>);

impl Latin1Text {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Decode as ISO-8859-1, one `char` per byte.
    pub fn to_latin1_string(&self) -> String {
        self.0.iter().map(|&b| char::from(b)).collect()
    }
}

impl Serialize for Latin1Text {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_latin1_string())
    }
}

impl From<Vec<u8>> for Latin1Text {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&str> for Latin1Text {
    fn from(value: &str) -> Self {
        Self(value.as_bytes().to_vec())
    }
}

impl PartialEq<str> for Latin1Text {
    fn eq(&self, other: &str) -> bool {
        self.0 == other.as_bytes()
    }
}

impl PartialEq<&str> for Latin1Text {
    fn eq(&self, other: &&str) -> bool {
        self.0 == other.as_bytes()
    }
}

impl PartialEq<[u8]> for Latin1Text {
    fn eq(&self, other: &[u8]) -> bool {
        self.0 == other
    }
}

impl fmt::Debug for Latin1Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.0.escape_ascii())
    }
}
