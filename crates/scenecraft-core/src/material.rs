//! Flat-color PBR material record.

use serde::{Deserialize, Serialize};

/// Material parameters for a scene node.
///
/// Color is a hex string (`#RRGGBB`) because that is the wire form the
/// generation collaborator emits; scalar channels are conceptually in
/// [0, 1] but are not clamped here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PbrMaterial {
    pub color: String,
    pub roughness: f32,
    pub metalness: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transparent: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emissive: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wireframe: Option<bool>,
}

impl PbrMaterial {
    /// A matte material with the given color.
    pub fn flat(color: &str) -> Self {
        Self {
            color: color.to_string(),
            roughness: 0.8,
            metalness: 0.1,
            opacity: None,
            transparent: None,
            emissive: None,
            wireframe: None,
        }
    }
}

/// Check that a color string is a `#RRGGBB` or `#RRGGBBAA` hex value.
pub fn is_valid_hex_color(color: &str) -> bool {
    let Some(hex) = color.strip_prefix('#') else {
        return false;
    };
    (hex.len() == 6 || hex.len() == 8) && hex.chars().all(|c| c.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_material() {
        let m = PbrMaterial::flat("#FF5733");
        assert_eq!(m.color, "#FF5733");
        assert!(m.opacity.is_none());
    }

    #[test]
    fn test_hex_validation() {
        assert!(is_valid_hex_color("#FF5733"));
        assert!(is_valid_hex_color("#ff5733aa"));
        assert!(!is_valid_hex_color("FF5733"));
        assert!(!is_valid_hex_color("#FF57"));
        assert!(!is_valid_hex_color("#GG5733"));
    }

    #[test]
    fn test_optionals_off_the_wire() {
        let m = PbrMaterial::flat("#808080");
        let json = serde_json::to_string(&m).unwrap();
        assert!(!json.contains("emissive"));
        assert!(!json.contains("wireframe"));

        let back: PbrMaterial = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
    }
}
