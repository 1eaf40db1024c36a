use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Event object handed over by the dashboard engine.
///
/// Transforms only touch the fields below; anything else the host put on the
/// event travels through `extra` untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(rename = "textColor", default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<DisplayColor>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blink: Option<bool>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Event {
    pub fn with_payload(payload: impl Into<String>) -> Self {
        Self {
            payload: Some(payload.into()),
            ..Default::default()
        }
    }

    pub fn with_data(data: Value) -> Self {
        Self {
            data: Some(data),
            ..Default::default()
        }
    }

    /// Decoded data, with a JSON `null` counted as absent.
    pub fn present_data(&self) -> Option<&Value> {
        self.data.as_ref().filter(|value| !value.is_null())
    }
}

/// Text colours used by the status widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplayColor {
    #[serde(rename = "#FF0000")]
    Red,
    #[serde(rename = "#9ACD32")]
    YellowGreen,
    #[serde(rename = "#FFFF00")]
    Yellow,
    #[serde(rename = "#696969")]
    DimGray,
}

impl DisplayColor {
    pub fn as_hex(&self) -> &'static str {
        match self {
            DisplayColor::Red => "#FF0000",
            DisplayColor::YellowGreen => "#9ACD32",
            DisplayColor::Yellow => "#FFFF00",
            DisplayColor::DimGray => "#696969",
        }
    }
}

impl std::fmt::Display for DisplayColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_hex())
    }
}
