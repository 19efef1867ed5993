//! Downloadable-artifact wrapper handed to the save/download collaborator.

use serde::{Deserialize, Serialize};

/// Media type for STL payloads, binary and ASCII alike.
pub const STL_MEDIA_TYPE: &str = "application/sla";

/// Serde helper: raw bytes ↔ base64 string, so artifacts survive the JSON
/// postMessage boundary.
mod base64_bytes {
    use base64::{engine::general_purpose::STANDARD, Engine as _};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        STANDARD.encode(bytes).serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let encoded = String::deserialize(deserializer)?;
        STANDARD.decode(encoded).map_err(serde::de::Error::custom)
    }
}

/// A finished export, ready to hand to the download collaborator unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StlArtifact {
    pub filename: String,
    pub media_type: String,
    #[serde(with = "base64_bytes")]
    pub data: Vec<u8>,
}

impl StlArtifact {
    pub fn new(name: &str, data: Vec<u8>) -> Self {
        Self {
            filename: format!("{name}.stl"),
            media_type: STL_MEDIA_TYPE.to_string(),
            data,
        }
    }

    pub fn byte_len(&self) -> usize {
        self.data.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn artifact_names_and_types() {
        let artifact = StlArtifact::new("shade", vec![1, 2, 3]);
        assert_eq!(artifact.filename, "shade.stl");
        assert_eq!(artifact.media_type, "application/sla");
        assert_eq!(artifact.byte_len(), 3);
    }

    #[test]
    fn json_round_trip_keeps_bytes() {
        let artifact = StlArtifact::new("shade", (0u8..=255).collect());
        let json = serde_json::to_string(&artifact).unwrap();
        // Bytes travel as base64, not as a JSON number array.
        assert!(!json.contains("[0,1,2"));
        let back: StlArtifact = serde_json::from_str(&json).unwrap();
        assert_eq!(back, artifact);
    }
}
