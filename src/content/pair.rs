//! Card payloads and matchable pairs.

use serde::{Deserialize, Serialize};

/// What one card face shows. Immutable once constructed.
///
/// Every consumer matches exhaustively on this — there is no "does it have a
/// url?" probing anywhere in the crate.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CardPayload {
    /// A fetchable image asset.
    Image { filename: String, url: String },
    /// Raw, untrusted text (a note, a term, a definition).
    Text { raw: String },
}

impl CardPayload {
    /// Create an image payload.
    #[must_use]
    pub fn image(filename: impl Into<String>, url: impl Into<String>) -> Self {
        Self::Image {
            filename: filename.into(),
            url: url.into(),
        }
    }

    /// Create a text payload.
    #[must_use]
    pub fn text(raw: impl Into<String>) -> Self {
        Self::Text { raw: raw.into() }
    }
}

/// Identity used to decide whether two tiles match.
///
/// Derived from the source filename for image pairs, or supplied/generated
/// for text pairs — never from payload content, which can legitimately
/// repeat across distinct pairs.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PairKey(pub String);

impl PairKey {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PairKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PairKey {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

impl From<String> for PairKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

/// Two payloads forming one matchable pair.
///
/// The two faces may be identical (classic image memory) or different
/// (term/definition decks); matching only ever consults the key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardPair {
    pub key: PairKey,
    pub faces: [CardPayload; 2],
}

impl CardPair {
    /// Create a pair from an explicit key and two faces.
    #[must_use]
    pub fn new(key: impl Into<PairKey>, first: CardPayload, second: CardPayload) -> Self {
        Self {
            key: key.into(),
            faces: [first, second],
        }
    }

    /// Create a classic image pair: both faces show the same asset and the
    /// filename is the pair identity.
    #[must_use]
    pub fn from_image(filename: impl Into<String>, url: impl Into<String>) -> Self {
        let filename = filename.into();
        let url = url.into();
        let face = CardPayload::Image {
            filename: filename.clone(),
            url,
        };
        Self {
            key: PairKey(filename),
            faces: [face.clone(), face],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_pair_key_is_filename() {
        let pair = CardPair::from_image("otter.png", "/collections/animals/images/otter.png");
        assert_eq!(pair.key.as_str(), "otter.png");
        assert_eq!(pair.faces[0], pair.faces[1]);
    }

    #[test]
    fn test_identical_text_different_keys() {
        let a = CardPair::new("note-1", CardPayload::text("hello"), CardPayload::text("hello"));
        let b = CardPair::new("note-2", CardPayload::text("hello"), CardPayload::text("hello"));
        assert_ne!(a.key, b.key);
    }

    #[test]
    fn test_payload_serde_tagging() {
        let payload = CardPayload::image("cat.png", "/img/cat.png");
        let json = serde_json::to_string(&payload).unwrap();
        assert!(json.contains("\"kind\":\"image\""));

        let back: CardPayload = serde_json::from_str(&json).unwrap();
        assert_eq!(payload, back);
    }
}
