// Section model - typed dashboard rows parsed from untyped request maps
use super::color::Color;
use super::error::{InvalidModule, SectionError};
use serde::Deserialize;
use serde_json::{Map, Value};

/// One image request. Sections stay raw so that one bad section never
/// rejects the whole request.
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardRequest {
    pub module: String,
    pub title: String,
    #[serde(default)]
    pub sections: Vec<Value>,
}

impl DashboardRequest {
    pub fn new(module: impl Into<String>, title: impl Into<String>, sections: Vec<Value>) -> Self {
        Self {
            module: module.into(),
            title: title.into(),
            sections,
        }
    }

    /// File name the rendered image is stored under.
    pub fn file_name(&self) -> Result<String, InvalidModule> {
        module_file_name(&self.module)
    }
}

/// Maps a module to its image file name. The module has to be a single
/// plain path segment so the image stays inside the output directory.
pub fn module_file_name(module: &str) -> Result<String, InvalidModule> {
    let plain = !module.is_empty()
        && module != "."
        && module != ".."
        && !module.chars().any(|c| matches!(c, '/' | '\\' | '\0'));
    if plain {
        Ok(format!("{module}.jpg"))
    } else {
        Err(InvalidModule(module.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Section {
    Text(TextSection),
    Gauge(GaugeSection),
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextSection {
    pub color: Color,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GaugeSection {
    /// One color per interval between adjacent marks.
    pub colors: Vec<Color>,
    pub value: f64,
    /// Calibration marks in request order; not necessarily sorted.
    pub marks: Vec<f64>,
}

impl Section {
    pub fn parse(raw: &Value) -> Result<Self, SectionError> {
        let fields = raw.as_object().ok_or(SectionError::NotAnObject)?;
        let kind = match fields.get("type") {
            Some(Value::String(kind)) => kind.as_str(),
            Some(_) => {
                return Err(SectionError::InvalidField {
                    key: "type",
                    expected: "a string",
                });
            }
            None => return Err(SectionError::MissingType),
        };

        match kind {
            "text" => Ok(Section::Text(TextSection {
                value: string_field(fields, "value")?.to_string(),
                color: color_field(fields, "color")?,
            })),
            "gauge" => {
                let value = number_field(fields, "value")?;
                let colors = array_field(fields, "color")?
                    .iter()
                    .map(|c| c.as_str().and_then(|s| s.parse().ok()))
                    .collect::<Option<Vec<Color>>>()
                    .ok_or(SectionError::InvalidField {
                        key: "color",
                        expected: "an array of colors",
                    })?;
                let marks = array_field(fields, "range")?
                    .iter()
                    .map(Value::as_f64)
                    .collect::<Option<Vec<f64>>>()
                    .filter(|marks| !marks.is_empty())
                    .ok_or(SectionError::InvalidField {
                        key: "range",
                        expected: "a non-empty array of numbers",
                    })?;
                Ok(Section::Gauge(GaugeSection { colors, value, marks }))
            }
            other => Err(SectionError::UnknownType(other.to_string())),
        }
    }
}

fn field<'a>(fields: &'a Map<String, Value>, key: &'static str) -> Result<&'a Value, SectionError> {
    fields.get(key).ok_or(SectionError::MissingField(key))
}

fn string_field<'a>(fields: &'a Map<String, Value>, key: &'static str) -> Result<&'a str, SectionError> {
    field(fields, key)?.as_str().ok_or(SectionError::InvalidField {
        key,
        expected: "a string",
    })
}

fn number_field(fields: &Map<String, Value>, key: &'static str) -> Result<f64, SectionError> {
    field(fields, key)?.as_f64().ok_or(SectionError::InvalidField {
        key,
        expected: "a number",
    })
}

fn array_field<'a>(fields: &'a Map<String, Value>, key: &'static str) -> Result<&'a [Value], SectionError> {
    field(fields, key)?
        .as_array()
        .map(Vec::as_slice)
        .ok_or(SectionError::InvalidField {
            key,
            expected: "an array",
        })
}

fn color_field(fields: &Map<String, Value>, key: &'static str) -> Result<Color, SectionError> {
    string_field(fields, key)?
        .parse()
        .map_err(|_| SectionError::InvalidField {
            key,
            expected: "a color",
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_text_section() {
        let section = Section::parse(&json!({"type": "text", "color": "#FFFFFF", "value": "hello"}));
        assert_eq!(
            section,
            Ok(Section::Text(TextSection {
                color: Color::WHITE,
                value: "hello".to_string(),
            }))
        );
    }

    #[test]
    fn test_parse_gauge_section() {
        let section = Section::parse(&json!({
            "type": "gauge",
            "color": ["#00FF00", "#FF0000"],
            "value": 42.5,
            "range": [0, 50, 100],
        }))
        .unwrap();

        let Section::Gauge(gauge) = section else {
            panic!("expected a gauge");
        };
        assert_eq!(gauge.value, 42.5);
        assert_eq!(gauge.marks, vec![0.0, 50.0, 100.0]);
        assert_eq!(gauge.colors.len(), 2);
    }

    #[test]
    fn test_missing_fields_are_named() {
        let err = Section::parse(&json!({"type": "text", "color": "#FFFFFF"})).unwrap_err();
        assert_eq!(err, SectionError::MissingField("value"));

        let err = Section::parse(&json!({"type": "gauge", "color": [], "value": 1})).unwrap_err();
        assert_eq!(err, SectionError::MissingField("range"));

        let err = Section::parse(&json!({"color": "#FFFFFF", "value": "x"})).unwrap_err();
        assert_eq!(err, SectionError::MissingType);
    }

    #[test]
    fn test_unknown_type_is_distinct_from_missing_field() {
        let err = Section::parse(&json!({"type": "chart", "value": 1})).unwrap_err();
        assert_eq!(err, SectionError::UnknownType("chart".to_string()));
    }

    #[test]
    fn test_invalid_fields() {
        let err = Section::parse(&json!({"type": "gauge", "color": ["#FFF"], "value": 1, "range": []}))
            .unwrap_err();
        assert_eq!(err.key(), Some("range"));

        let err = Section::parse(&json!({"type": "text", "color": "nope", "value": "x"})).unwrap_err();
        assert_eq!(err.key(), Some("color"));

        assert_eq!(Section::parse(&json!("text")).unwrap_err(), SectionError::NotAnObject);
    }

    #[test]
    fn test_request_deserializes_and_names_file() {
        let request: DashboardRequest = serde_json::from_value(json!({
            "module": "weather",
            "title": "Weather",
            "sections": [{"type": "text", "color": "#FFFFFF", "value": "Sunny"}],
        }))
        .unwrap();
        assert_eq!(request.sections.len(), 1);
        assert_eq!(request.file_name(), Ok("weather.jpg".to_string()));
    }

    #[test]
    fn test_module_file_name_rejects_paths() {
        assert_eq!(module_file_name("quiet_hours"), Ok("quiet_hours.jpg".to_string()));
        assert_eq!(module_file_name("v1.2"), Ok("v1.2.jpg".to_string()));

        for module in ["", ".", "..", "/abs/x", "../x", "a/b", "..\\x", "nul\0"] {
            assert_eq!(
                module_file_name(module),
                Err(InvalidModule(module.to_string())),
                "module {module:?}"
            );
        }
    }
}
