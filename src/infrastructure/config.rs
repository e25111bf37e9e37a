use crate::application::quiet_hours::QuietHours;
use crate::domain::color::Color;
use crate::domain::style::RenderStyle;
use anyhow::{Context, ensure};
use serde::Deserialize;
use std::path::PathBuf;

pub const DEFAULT_WIDTH: i32 = 480;
pub const DEFAULT_LENGTH: i32 = 234;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub canvas: CanvasSettings,
    #[serde(default)]
    pub output: OutputSettings,
    #[serde(default)]
    pub style: StyleSettings,
    #[serde(default)]
    pub quiet_hours: Option<QuietHoursSettings>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    #[serde(default = "default_addr")]
    pub addr: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct CanvasSettings {
    pub width: Option<i32>,
    pub length: Option<i32>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct OutputSettings {
    #[serde(default = "default_dest")]
    pub dest: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct StyleSettings {
    pub title_size: i32,
    pub section_size: i32,
    pub footer_size: i32,
    pub glyph_width: i32,
    pub spacer: i32,
    pub v_spacer: i32,
    pub h_spacer: i32,
    pub text_color: String,
    pub gauge_line_color: String,
    pub gauge_line_width: u32,
    pub gauge_value_stroke: u32,
    pub jpeg_quality: u8,
}

#[derive(Debug, Deserialize, Clone)]
pub struct QuietHoursSettings {
    pub start: u32,
    pub end: u32,
}

fn default_addr() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_dest() -> PathBuf {
    PathBuf::from(".")
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self { addr: default_addr() }
    }
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self { dest: default_dest() }
    }
}

impl Default for StyleSettings {
    fn default() -> Self {
        let style = RenderStyle::default();
        Self {
            title_size: style.title_size,
            section_size: style.section_size,
            footer_size: style.footer_size,
            glyph_width: style.glyph_width,
            spacer: style.spacer,
            v_spacer: style.v_spacer,
            h_spacer: style.h_spacer,
            text_color: style.text_color.to_string(),
            gauge_line_color: style.gauge_line_color.to_string(),
            gauge_line_width: style.gauge_line_width,
            gauge_value_stroke: style.gauge_value_stroke,
            jpeg_quality: style.jpeg_quality,
        }
    }
}

impl AppConfig {
    /// Canvas size; falls back to 480x234 when the file leaves it out.
    pub fn canvas_size(&self) -> (i32, i32) {
        match (self.canvas.width, self.canvas.length) {
            (Some(width), Some(length)) => (width, length),
            _ => {
                tracing::warn!(
                    "Could not load width or length. Defaulting to {}x{}",
                    DEFAULT_WIDTH,
                    DEFAULT_LENGTH
                );
                (DEFAULT_WIDTH, DEFAULT_LENGTH)
            }
        }
    }

    pub fn render_style(&self) -> anyhow::Result<RenderStyle> {
        let (width, height) = self.canvas_size();
        let s = &self.style;
        ensure!(width > 0 && height > 0, "canvas must be non-empty, got {}x{}", width, height);
        ensure!(s.glyph_width > 0, "style.glyph_width must be positive");
        ensure!(
            (1..=100).contains(&s.jpeg_quality),
            "style.jpeg_quality must be within 1..=100"
        );

        Ok(RenderStyle {
            width,
            height,
            title_size: s.title_size,
            section_size: s.section_size,
            footer_size: s.footer_size,
            glyph_width: s.glyph_width,
            spacer: s.spacer,
            v_spacer: s.v_spacer,
            h_spacer: s.h_spacer,
            text_color: parse_color(&s.text_color, "style.text_color")?,
            gauge_line_color: parse_color(&s.gauge_line_color, "style.gauge_line_color")?,
            gauge_line_width: s.gauge_line_width,
            gauge_value_stroke: s.gauge_value_stroke,
            jpeg_quality: s.jpeg_quality,
            ..RenderStyle::default()
        })
    }

    pub fn quiet_hours(&self) -> anyhow::Result<Option<QuietHours>> {
        self.quiet_hours
            .as_ref()
            .map(|q| {
                QuietHours::new(q.start, q.end).with_context(|| {
                    format!("quiet hours must be within 0..24, got {}..{}", q.start, q.end)
                })
            })
            .transpose()
    }
}

fn parse_color(value: &str, key: &str) -> anyhow::Result<Color> {
    value
        .parse()
        .with_context(|| format!("{} is not a color", key))
}

pub fn load_app_config() -> anyhow::Result<AppConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/photo_dash"))
        .add_source(config::Environment::with_prefix("PHOTO_DASH").separator("__"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(toml: &str) -> AppConfig {
        config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_full_config() {
        let config = parse(
            r##"
            [server]
            addr = "127.0.0.1:9000"

            [canvas]
            width = 800
            length = 480

            [output]
            dest = "/srv/photo-dash"

            [style]
            section_size = 18
            text_color = "#EEEEEE"

            [quiet_hours]
            start = 22
            end = 6
            "##,
        );

        assert_eq!(config.server.addr, "127.0.0.1:9000");
        assert_eq!(config.output.dest, PathBuf::from("/srv/photo-dash"));

        let style = config.render_style().unwrap();
        assert_eq!((style.width, style.height), (800, 480));
        assert_eq!(style.section_size, 18);
        assert_eq!(style.title_size, 20);
        assert_eq!(style.text_color, Color::new(0xEE, 0xEE, 0xEE));

        assert_eq!(config.quiet_hours().unwrap(), QuietHours::new(22, 6));
    }

    #[test]
    fn test_missing_canvas_uses_defaults() {
        let config = parse("[canvas]\nwidth = 800\n");
        assert_eq!(config.canvas_size(), (DEFAULT_WIDTH, DEFAULT_LENGTH));
        assert_eq!(config.render_style().unwrap(), RenderStyle::default());
        assert_eq!(config.server.addr, "0.0.0.0:8080");
        assert!(config.quiet_hours().unwrap().is_none());
    }

    #[test]
    fn test_invalid_settings_are_rejected() {
        let config = parse("[style]\ntext_color = \"not-a-color\"\n");
        assert!(config.render_style().is_err());

        let config = parse("[quiet_hours]\nstart = 25\nend = 6\n");
        assert!(config.quiet_hours().is_err());
    }
}
