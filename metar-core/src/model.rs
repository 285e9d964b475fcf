use serde::{Deserialize, Deserializer, Serialize};

/// Payload sent to the decode service.
#[derive(Debug, Clone, Serialize)]
pub struct DecodeRequest {
    pub raw: String,
}

impl DecodeRequest {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }
}

/// Decoded METAR as returned by the service on success.
///
/// Every field is independently optional: a missing key and an explicit
/// `null` both end up as `None` (or an empty `clouds` list).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecodedMetar {
    #[serde(default)]
    pub airport: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub wind_direction: Option<String>,
    #[serde(default)]
    pub wind_speed: Option<String>,
    #[serde(default)]
    pub visibility: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub clouds: Vec<CloudLayer>,
    #[serde(default)]
    pub temperature: Option<String>,
    #[serde(default)]
    pub dew_point: Option<String>,
    #[serde(default)]
    pub pressure: Option<String>,
    #[serde(default)]
    pub tempo_info: Option<String>,
    #[serde(default)]
    pub remarks: Option<String>,
}

/// One reported cloud band, in the order the service listed it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloudLayer {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub height: String,
}

/// Body of a non-success response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResult {
    #[serde(default)]
    pub error: String,
}

/// Returns the value only when it is set and non-empty.
pub fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
