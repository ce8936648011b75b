use std::fmt::Write;

use crate::error::{ChartError, ChartResult};
use crate::render::{
    CirclePrimitive, LinePrimitive, RectPrimitive, RenderFrame, Renderer, TextHAlign,
    TextPrimitive, TextRole,
};

/// Renders frames into a standalone SVG document.
///
/// Elements carry CSS classes (`axisText active`, `stateCircle`, ...) so a
/// page stylesheet can restyle the chart; inline attributes hold the frame's
/// own colors as a fallback.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    document: String,
}

impl SvgRenderer {
    /// Last rendered document; empty before the first render.
    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }

    #[must_use]
    pub fn into_document(self) -> String {
        self.document
    }

    fn write_frame(frame: &RenderFrame) -> Result<String, std::fmt::Error> {
        let mut out = String::new();
        let (width, height) = (frame.viewport.width, frame.viewport.height);
        write!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
        )?;
        for line in &frame.lines {
            write_line(&mut out, line)?;
        }
        for circle in &frame.circles {
            write_circle(&mut out, circle)?;
        }
        for text in &frame.texts {
            write_text(&mut out, text)?;
        }
        if !frame.overlay_rects.is_empty() || !frame.overlay_texts.is_empty() {
            out.push_str(r#"<g class="overlay">"#);
            for rect in &frame.overlay_rects {
                write_rect(&mut out, rect)?;
            }
            for text in &frame.overlay_texts {
                write_text(&mut out, text)?;
            }
            out.push_str("</g>");
        }
        out.push_str("</svg>");
        Ok(out)
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.document = Self::write_frame(frame)
            .map_err(|err| ChartError::InvalidData(format!("failed to write svg: {err}")))?;
        Ok(())
    }
}

fn write_line(out: &mut String, line: &LinePrimitive) -> std::fmt::Result {
    write!(
        out,
        r#"<line class="axis" x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-opacity="{}" stroke-width="{}" />"#,
        num(line.x1),
        num(line.y1),
        num(line.x2),
        num(line.y2),
        line.color.to_hex(),
        num(line.color.alpha),
        num(line.stroke_width)
    )
}

fn write_circle(out: &mut String, circle: &CirclePrimitive) -> std::fmt::Result {
    write!(
        out,
        r#"<circle class="stateCircle" cx="{}" cy="{}" r="{}" fill="{}" fill-opacity="{}""#,
        num(circle.cx),
        num(circle.cy),
        num(circle.radius),
        circle.fill_color.to_hex(),
        num(circle.fill_color.alpha)
    )?;
    if circle.stroke_width > 0.0 {
        write!(
            out,
            r#" stroke="{}" stroke-width="{}""#,
            circle.stroke_color.to_hex(),
            num(circle.stroke_width)
        )?;
    }
    out.push_str(" />");
    Ok(())
}

fn write_rect(out: &mut String, rect: &RectPrimitive) -> std::fmt::Result {
    write!(
        out,
        r#"<rect class="d3-tip" x="{}" y="{}" width="{}" height="{}" rx="{}" fill="{}" fill-opacity="{}" />"#,
        num(rect.x),
        num(rect.y),
        num(rect.width),
        num(rect.height),
        num(rect.corner_radius),
        rect.fill_color.to_hex(),
        num(rect.fill_color.alpha)
    )
}

fn write_text(out: &mut String, text: &TextPrimitive) -> std::fmt::Result {
    let anchor = match text.h_align {
        TextHAlign::Left => "start",
        TextHAlign::Center => "middle",
        TextHAlign::Right => "end",
    };
    write!(
        out,
        r#"<text class="{}" x="{}" y="{}" font-size="{}" fill="{}" text-anchor="{}""#,
        text_class(text.role),
        num(text.x),
        num(text.y),
        num(text.font_size_px),
        text.color.to_hex(),
        anchor
    )?;
    if text.rotation_deg != 0.0 {
        write!(
            out,
            r#" transform="rotate({} {} {})""#,
            num(text.rotation_deg),
            num(text.x),
            num(text.y)
        )?;
    }
    write!(out, ">{}</text>", escape(&text.text))
}

fn text_class(role: TextRole) -> &'static str {
    match role {
        TextRole::TickLabel => "tick",
        TextRole::AxisLabelActive => "axisText active",
        TextRole::AxisLabelInactive => "axisText inactive",
        TextRole::MarkerLabel => "stateText",
        TextRole::Tooltip => "d3-tip",
    }
}

/// Trims float noise so documents stay diffable.
fn num(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        "0".to_owned()
    } else {
        format!("{rounded}")
    }
}

fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Viewport;
    use crate::render::Color;

    #[test]
    fn escapes_text_and_emits_role_classes() {
        let mut frame = RenderFrame::new(Viewport::new(100, 50));
        frame.texts.push(
            TextPrimitive::new(
                "A&B <C>",
                10.0,
                20.0,
                12.0,
                Color::rgb(0.0, 0.0, 0.0),
                TextHAlign::Center,
            )
            .with_role(TextRole::AxisLabelActive),
        );
        let mut renderer = SvgRenderer::default();
        renderer.render(&frame).expect("render");
        let svg = renderer.document();
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains(r#"class="axisText active""#));
        assert!(svg.contains("A&amp;B &lt;C&gt;"));
        assert!(svg.contains(r#"text-anchor="middle""#));
    }

    #[test]
    fn numbers_are_trimmed() {
        assert_eq!(num(1.0), "1");
        assert_eq!(num(0.1 + 0.2), "0.3");
        assert_eq!(num(-0.0001), "0");
    }
}
