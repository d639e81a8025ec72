use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::OnceLock;

use rand::Rng;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::TypeError;

/// Byte length of a [`DocumentId`].
pub const ID_LEN: usize = 12;

/// Length of the hex rendering of a [`DocumentId`].
pub const ID_HEX_LEN: usize = ID_LEN * 2;

const COUNTER_MASK: u32 = 0x00ff_ffff;

/// Store-assigned identifier for a persisted document.
///
/// Twelve bytes, rendered as 24 hex characters. A generated id is laid out
/// as a 4-byte big-endian Unix timestamp (seconds), 5 bytes of per-process
/// random material, and a 3-byte big-endian counter.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentId([u8; ID_LEN]);

impl DocumentId {
    /// Generate a fresh identifier.
    pub fn generate() -> Self {
        let seconds = chrono::Utc::now().timestamp() as u32;
        let count = next_count();

        let mut bytes = [0u8; ID_LEN];
        bytes[..4].copy_from_slice(&seconds.to_be_bytes());
        bytes[4..9].copy_from_slice(process_material());
        bytes[9..].copy_from_slice(&count.to_be_bytes()[1..]);
        Self(bytes)
    }

    /// Create a `DocumentId` from raw bytes.
    pub const fn from_raw(bytes: [u8; ID_LEN]) -> Self {
        Self(bytes)
    }

    /// The raw 12-byte value.
    pub fn as_bytes(&self) -> &[u8; ID_LEN] {
        &self.0
    }

    /// Seconds since the Unix epoch encoded in the first four bytes.
    pub fn timestamp(&self) -> u32 {
        u32::from_be_bytes([self.0[0], self.0[1], self.0[2], self.0[3]])
    }

    /// Lowercase hex representation (24 characters).
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse from a 24-character hex string. Either case is accepted.
    pub fn from_hex(s: &str) -> Result<Self, TypeError> {
        if s.len() != ID_HEX_LEN {
            return Err(TypeError::InvalidLength {
                expected: ID_HEX_LEN,
                actual: s.len(),
            });
        }
        let bytes = hex::decode(s).map_err(|e| TypeError::InvalidHex(e.to_string()))?;
        let mut arr = [0u8; ID_LEN];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }

    /// Returns `true` if `s` has the syntax of a document id.
    ///
    /// Purely syntactic: says nothing about whether such a document exists.
    pub fn is_valid(s: &str) -> bool {
        s.len() == ID_HEX_LEN && s.bytes().all(|b| b.is_ascii_hexdigit())
    }
}

fn process_material() -> &'static [u8; 5] {
    static MATERIAL: OnceLock<[u8; 5]> = OnceLock::new();
    MATERIAL.get_or_init(|| rand::thread_rng().gen())
}

fn next_count() -> u32 {
    static COUNTER: OnceLock<AtomicU32> = OnceLock::new();
    let counter =
        COUNTER.get_or_init(|| AtomicU32::new(rand::thread_rng().gen::<u32>() & COUNTER_MASK));
    counter.fetch_add(1, Ordering::Relaxed) & COUNTER_MASK
}

impl fmt::Debug for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DocumentId({})", self.to_hex())
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for DocumentId {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl From<[u8; ID_LEN]> for DocumentId {
    fn from(bytes: [u8; ID_LEN]) -> Self {
        Self(bytes)
    }
}

impl Serialize for DocumentId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for DocumentId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
