//! Shared domain enumerations aligned with the tokens the page renderer understands.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

const PRIMARY_ELEMENT: &str = "var(--color-primary-element)";
const PRIMARY_ELEMENT_LIGHT: &str = "var(--color-primary-element-light)";
const BACKGROUND_HOVER: &str = "var(--color-background-hover)";

/// Row background token. Serialized as the CSS variable the editor offers, or `""` for none.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RowBackground {
    #[default]
    None,
    Primary,
    PrimaryLight,
    Hover,
    Custom(String),
}

impl RowBackground {
    pub fn as_str(&self) -> &str {
        match self {
            RowBackground::None => "",
            RowBackground::Primary => PRIMARY_ELEMENT,
            RowBackground::PrimaryLight => PRIMARY_ELEMENT_LIGHT,
            RowBackground::Hover => BACKGROUND_HOVER,
            RowBackground::Custom(value) => value.as_str(),
        }
    }

    /// Map a legacy theme class (`primary`, `background`, ...) onto the editor's variable.
    pub fn from_shorthand(value: &str) -> Option<Self> {
        match value {
            "primary" | "success" | "error" => Some(RowBackground::Primary),
            "primary-light" | "warning" => Some(RowBackground::PrimaryLight),
            "background" | "background-dark" => Some(RowBackground::Hover),
            _ => None,
        }
    }
}

impl From<&str> for RowBackground {
    fn from(value: &str) -> Self {
        match value {
            "" => RowBackground::None,
            PRIMARY_ELEMENT => RowBackground::Primary,
            PRIMARY_ELEMENT_LIGHT => RowBackground::PrimaryLight,
            BACKGROUND_HOVER => RowBackground::Hover,
            other => RowBackground::Custom(other.to_string()),
        }
    }
}

impl fmt::Display for RowBackground {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for RowBackground {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for RowBackground {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(RowBackground::from(raw.as_str()))
    }
}

/// How an image fills its box; mirrors CSS `object-fit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ObjectFit {
    #[default]
    Cover,
    Contain,
    Fill,
    ScaleDown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LinkTarget {
    #[default]
    #[serde(rename = "_self")]
    Self_,
    #[serde(rename = "_blank")]
    Blank,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DividerStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn background_round_trips_known_variables() {
        for background in [
            RowBackground::None,
            RowBackground::Primary,
            RowBackground::PrimaryLight,
            RowBackground::Hover,
        ] {
            assert_eq!(RowBackground::from(background.as_str()), background);
        }
    }

    #[test]
    fn unknown_background_is_kept_verbatim() {
        let background = RowBackground::from("#ff00aa");
        assert_eq!(background, RowBackground::Custom("#ff00aa".to_string()));
        assert_eq!(
            serde_json::to_string(&background).expect("serialize"),
            "\"#ff00aa\""
        );
    }

    #[test]
    fn shorthand_maps_to_editor_variables() {
        assert_eq!(
            RowBackground::from_shorthand("success"),
            Some(RowBackground::Primary)
        );
        assert_eq!(
            RowBackground::from_shorthand("warning"),
            Some(RowBackground::PrimaryLight)
        );
        assert_eq!(
            RowBackground::from_shorthand("background-dark"),
            Some(RowBackground::Hover)
        );
        assert_eq!(RowBackground::from_shorthand(PRIMARY_ELEMENT), None);
    }

    #[test]
    fn link_target_uses_html_values() {
        assert_eq!(
            serde_json::to_string(&LinkTarget::Blank).expect("serialize"),
            "\"_blank\""
        );
        assert_eq!(
            serde_json::from_str::<LinkTarget>("\"_self\"").expect("deserialize"),
            LinkTarget::Self_
        );
    }
}
