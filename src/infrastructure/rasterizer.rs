// Rasterizer - executes render instructions onto an RGB canvas
use crate::domain::color::Color;
use crate::domain::instruction::{Anchor, Position, RenderInstruction, Stroke};
use crate::domain::style::{FontRole, RenderStyle};
use embedded_graphics::mono_font::ascii::{FONT_6X10, FONT_10X20};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyle, TextStyleBuilder};
use image::codecs::jpeg::JpegEncoder;
use image::{ImageError, Rgb, RgbImage};
use profont::PROFONT_18_POINT;
use std::convert::Infallible;

/// An `image` buffer that embedded-graphics can draw on. Pixels outside
/// the buffer are dropped.
pub struct Canvas {
    image: RgbImage,
}

impl Canvas {
    /// A black canvas.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbImage::new(width, height),
        }
    }

    pub fn into_image(self) -> RgbImage {
        self.image
    }
}

impl OriginDimensions for Canvas {
    fn size(&self) -> Size {
        Size::new(self.image.width(), self.image.height())
    }
}

impl DrawTarget for Canvas {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let (width, height) = self.image.dimensions();
        for Pixel(coord, color) in pixels {
            let (Ok(x), Ok(y)) = (u32::try_from(coord.x), u32::try_from(coord.y)) else {
                continue;
            };
            if x < width && y < height {
                self.image.put_pixel(x, y, Rgb([color.r(), color.g(), color.b()]));
            }
        }
        Ok(())
    }
}

fn mono_font(font: FontRole) -> &'static MonoFont<'static> {
    match font {
        FontRole::Title => &PROFONT_18_POINT,
        FontRole::Section => &FONT_10X20,
        FontRole::Footer => &FONT_6X10,
    }
}

fn text_style(anchor: Anchor) -> TextStyle {
    let (alignment, baseline) = match anchor {
        Anchor::LeftTop => (Alignment::Left, Baseline::Top),
        Anchor::MiddleTop => (Alignment::Center, Baseline::Top),
        Anchor::RightBaseline => (Alignment::Right, Baseline::Alphabetic),
    };
    TextStyleBuilder::new().alignment(alignment).baseline(baseline).build()
}

fn rgb(color: Color) -> Rgb888 {
    Rgb888::new(color.r, color.g, color.b)
}

fn point(position: Position) -> Point {
    Point::new(position.x, position.y)
}

fn draw_text<D>(
    target: &mut D,
    text: &str,
    position: Point,
    font: &MonoFont<'_>,
    color: Color,
    anchor: Anchor,
    stroke: Option<Stroke>,
) where
    D: DrawTarget<Color = Rgb888>,
{
    let style = text_style(anchor);

    // Outline: stamp the text in the stroke color around the fill.
    if let Some(stroke) = stroke {
        let width = stroke.width as i32;
        let outline = MonoTextStyle::new(font, rgb(stroke.color));
        for dy in -width..=width {
            for dx in -width..=width {
                if dx == 0 && dy == 0 {
                    continue;
                }
                Text::with_text_style(text, position + Point::new(dx, dy), outline, style)
                    .draw(target)
                    .ok();
            }
        }
    }

    Text::with_text_style(text, position, MonoTextStyle::new(font, rgb(color)), style)
        .draw(target)
        .ok();
}

/// Draws each instruction in order onto any RGB draw target.
pub fn draw_instructions<D>(target: &mut D, instructions: &[RenderInstruction])
where
    D: DrawTarget<Color = Rgb888>,
{
    for instruction in instructions {
        match instruction {
            RenderInstruction::Text {
                at,
                text,
                color,
                font,
                anchor,
                stroke,
            } => draw_text(target, text, point(*at), mono_font(*font), *color, *anchor, *stroke),
            RenderInstruction::Rectangle { from, to, fill } => {
                Rectangle::with_corners(point(*from), point(*to))
                    .into_styled(PrimitiveStyle::with_fill(rgb(*fill)))
                    .draw(target)
                    .ok();
            }
            RenderInstruction::Line {
                from,
                to,
                color,
                width,
            } => {
                Line::new(point(*from), point(*to))
                    .into_styled(PrimitiveStyle::with_stroke(rgb(*color), *width))
                    .draw(target)
                    .ok();
            }
        }
    }
}

/// Renders a full image of the configured canvas size.
pub fn rasterize(instructions: &[RenderInstruction], style: &RenderStyle) -> RgbImage {
    let mut canvas = Canvas::new(style.width.max(1) as u32, style.height.max(1) as u32);
    draw_instructions(&mut canvas, instructions);
    canvas.into_image()
}

pub fn encode_jpeg(image: &RgbImage, quality: u8) -> Result<Vec<u8>, ImageError> {
    let mut bytes = Vec::new();
    JpegEncoder::new_with_quality(&mut bytes, quality).encode_image(image)?;
    Ok(bytes)
}
