//! Turns a [`DecodedMetar`] into the document shown in the output area.
//!
//! The field order is fixed. Airport and observation time are always
//! emitted; every other field appears only when its value is present
//! (set and non-empty).

use std::fmt;

use crate::model::{DecodedMetar, present};

pub const HEADING: &str = "METAR解析結果";

pub const LABEL_AIRPORT: &str = "空港コード";
pub const LABEL_TIME: &str = "観測時刻";
pub const LABEL_WIND: &str = "風向/風速";
pub const LABEL_VISIBILITY: &str = "視程";
pub const LABEL_CLOUDS: &str = "雲情報";
pub const LABEL_TEMPERATURE: &str = "気温";
pub const LABEL_DEW_POINT: &str = "露点温度";
pub const LABEL_PRESSURE: &str = "気圧";
pub const LABEL_TEMPO: &str = "一時的な天候";
pub const LABEL_REMARKS: &str = "備考";

const CLOUD_LAYER_PREFIX: &str = "雲層";
const NOT_AVAILABLE: &str = "N/A";

/// Rendered result: a heading followed by labeled fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub heading: String,
    pub fields: Vec<Field>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub label: &'static str,
    pub value: FieldValue,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    /// Ordered entries, e.g. `雲層1: FEW 250`.
    List(Vec<String>),
}

impl Document {
    pub fn field(&self, label: &str) -> Option<&FieldValue> {
        self.fields.iter().find(|f| f.label == label).map(|f| &f.value)
    }

    /// HTML fragment for the output container. Values are escaped.
    pub fn to_html(&self) -> String {
        let mut html = format!("<h2>{}</h2><ul>", escape_html(&self.heading));

        for field in &self.fields {
            html.push_str("<li><strong>");
            html.push_str(&escape_html(field.label));
            html.push_str(":</strong>");

            match &field.value {
                FieldValue::Text(text) => {
                    html.push(' ');
                    html.push_str(&escape_html(text));
                }
                FieldValue::List(items) => {
                    html.push_str("<ol>");
                    for item in items {
                        html.push_str("<li>");
                        html.push_str(&escape_html(item));
                        html.push_str("</li>");
                    }
                    html.push_str("</ol>");
                }
            }

            html.push_str("</li>");
        }

        html.push_str("</ul>");
        html
    }
}

/// Plain-text form, one field per line.
impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.heading)?;

        for field in &self.fields {
            match &field.value {
                FieldValue::Text(text) => writeln!(f, "{}: {}", field.label, text)?,
                FieldValue::List(items) => {
                    writeln!(f, "{}:", field.label)?;
                    for item in items {
                        writeln!(f, "  {item}")?;
                    }
                }
            }
        }

        Ok(())
    }
}

/// Build the result document. Pure: same input, same output.
pub fn render(metar: &DecodedMetar) -> Document {
    let mut fields = Vec::new();

    let mut text = |label: &'static str, value: &str| {
        fields.push(Field { label, value: FieldValue::Text(value.to_owned()) });
    };

    text(LABEL_AIRPORT, metar.airport.as_deref().unwrap_or_default());
    text(LABEL_TIME, metar.time.as_deref().unwrap_or_default());

    let direction = present(&metar.wind_direction);
    let speed = present(&metar.wind_speed);
    if direction.is_some() || speed.is_some() {
        let wind = format!(
            "{} / {}",
            direction.unwrap_or(NOT_AVAILABLE),
            speed.unwrap_or(NOT_AVAILABLE)
        );
        text(LABEL_WIND, &wind);
    }

    if let Some(visibility) = present(&metar.visibility) {
        text(LABEL_VISIBILITY, visibility);
    }

    if !metar.clouds.is_empty() {
        let layers = metar
            .clouds
            .iter()
            .enumerate()
            .map(|(i, layer)| {
                format!("{CLOUD_LAYER_PREFIX}{}: {} {}", i + 1, layer.kind, layer.height)
            })
            .collect();
        fields.push(Field { label: LABEL_CLOUDS, value: FieldValue::List(layers) });
    }

    let optional = [
        (LABEL_TEMPERATURE, &metar.temperature),
        (LABEL_DEW_POINT, &metar.dew_point),
        (LABEL_PRESSURE, &metar.pressure),
        (LABEL_TEMPO, &metar.tempo_info),
        (LABEL_REMARKS, &metar.remarks),
    ];
    for (label, value) in optional {
        if let Some(value) = present(value) {
            fields.push(Field { label, value: FieldValue::Text(value.to_owned()) });
        }
    }

    Document { heading: HEADING.to_string(), fields }
}

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
