use std::fmt::Write as _;
use std::path::Path;

use crate::error::{ScatterError, ScatterResult};
use crate::render::{Color, FontWeight, RenderFrame, Renderer, TextHAlign};

/// Renderer that serializes frames into an SVG document string.
///
/// The last rendered document is kept so hosts can write it to disk or serve
/// it. [`SvgRenderer::html_fragment`] wraps the SVG in the container element
/// named by the mount selector, which a `ScatterChart` sets from its config.
#[derive(Debug, Default, Clone)]
pub struct SvgRenderer {
    mount_selector: Option<String>,
    document: String,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// SVG markup produced by the last `render` call.
    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }

    /// Last SVG wrapped in a `<div>` addressed by the mount selector, or
    /// `#scatter` before one is mounted.
    ///
    /// `#name` becomes `id="name"` and `.name` becomes `class="name"`.
    pub fn html_fragment(&self) -> ScatterResult<String> {
        let selector = self.mount_selector.as_deref().unwrap_or("#scatter");
        let attribute = mount_attribute(selector)?;
        Ok(format!("<div {attribute}>\n{}</div>\n", self.document))
    }

    /// Writes the last document to `path`, as an HTML fragment when the
    /// extension is `html`.
    pub fn save(&self, path: impl AsRef<Path>) -> ScatterResult<()> {
        let path = path.as_ref();
        let is_html = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("html"));
        let contents = if is_html {
            self.html_fragment()?
        } else {
            self.document.clone()
        };
        std::fs::write(path, contents)?;
        Ok(())
    }

    fn write_frame(frame: &RenderFrame) -> Result<String, std::fmt::Error> {
        let mut out = String::new();
        writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}">"#,
            frame.viewport.width, frame.viewport.height
        )?;

        for line in &frame.lines {
            writeln!(
                out,
                r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}"{} stroke-width="{}"/>"#,
                fmt_num(line.x1),
                fmt_num(line.y1),
                fmt_num(line.x2),
                fmt_num(line.y2),
                line.color.to_hex(),
                opacity_attr("stroke-opacity", line.color),
                fmt_num(line.stroke_width),
            )?;
        }

        for circle in &frame.circles {
            let stroke = match circle.stroke {
                Some(stroke) => format!(
                    r#" stroke="{}" stroke-width="{}""#,
                    stroke.color.to_hex(),
                    fmt_num(stroke.width)
                ),
                None => String::new(),
            };
            writeln!(
                out,
                r#"  <circle cx="{}" cy="{}" r="{}" fill="{}"{}{}/>"#,
                fmt_num(circle.cx),
                fmt_num(circle.cy),
                fmt_num(circle.radius),
                circle.fill.to_hex(),
                opacity_attr("opacity", circle.fill),
                stroke,
            )?;
        }

        for rect in &frame.rects {
            writeln!(
                out,
                r#"  <rect x="{}" y="{}" width="{}" height="{}" rx="{}" fill="{}"{}/>"#,
                fmt_num(rect.x),
                fmt_num(rect.y),
                fmt_num(rect.width),
                fmt_num(rect.height),
                fmt_num(rect.corner_radius),
                rect.fill.to_hex(),
                opacity_attr("fill-opacity", rect.fill),
            )?;
        }

        for text in &frame.texts {
            let anchor = match text.h_align {
                TextHAlign::Left => "start",
                TextHAlign::Center => "middle",
                TextHAlign::Right => "end",
            };
            let mut extra = String::new();
            if let Some(class) = text.class {
                write!(extra, r#" class="{class}""#)?;
            }
            if text.weight == FontWeight::Bold {
                extra.push_str(r#" font-weight="bold""#);
            }
            if text.rotation_deg != 0.0 {
                write!(
                    extra,
                    r#" transform="rotate({} {} {})""#,
                    fmt_num(text.rotation_deg),
                    fmt_num(text.x),
                    fmt_num(text.y)
                )?;
            }
            writeln!(
                out,
                r#"  <text x="{}" y="{}" font-size="{}" fill="{}" text-anchor="{anchor}"{extra}>{}</text>"#,
                fmt_num(text.x),
                fmt_num(text.y),
                fmt_num(text.font_size_px),
                text.color.to_hex(),
                escape_xml(&text.text),
            )?;
        }

        out.push_str("</svg>\n");
        Ok(out)
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ScatterResult<()> {
        frame.validate()?;
        self.document = Self::write_frame(frame)
            .map_err(|err| ScatterError::Serialization(format!("failed to write svg: {err}")))?;
        Ok(())
    }

    fn mount(&mut self, selector: &str) -> ScatterResult<()> {
        mount_attribute(selector)?;
        self.mount_selector = Some(selector.trim().to_owned());
        Ok(())
    }
}

fn mount_attribute(selector: &str) -> ScatterResult<String> {
    let selector = selector.trim();
    let (attribute, name) = if let Some(name) = selector.strip_prefix('#') {
        ("id", name)
    } else if let Some(name) = selector.strip_prefix('.') {
        ("class", name)
    } else {
        return Err(ScatterError::InvalidInput(format!(
            "mount selector `{selector}` must start with `#` or `.`"
        )));
    };

    if name.is_empty()
        || !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ScatterError::InvalidInput(format!(
            "mount selector `{selector}` is not a simple id or class"
        )));
    }
    Ok(format!(r#"{attribute}="{name}""#))
}

fn opacity_attr(name: &str, color: Color) -> String {
    if color.alpha < 1.0 {
        format!(r#" {name}="{}""#, fmt_num(color.alpha))
    } else {
        String::new()
    }
}

/// Compact decimal form: at most three fractional digits, no trailing zeros.
fn fmt_num(value: f64) -> String {
    let text = format!("{value:.3}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" {
        "0".to_owned()
    } else {
        text.to_owned()
    }
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_are_trimmed() {
        assert_eq!(fmt_num(15.0), "15");
        assert_eq!(fmt_num(0.5), "0.5");
        assert_eq!(fmt_num(-0.0001), "0");
        assert_eq!(fmt_num(12.34567), "12.346");
    }

    #[test]
    fn mount_selector_maps_to_attribute() {
        assert_eq!(mount_attribute("#scatter").expect("id"), r#"id="scatter""#);
        assert_eq!(mount_attribute(".scatter").expect("class"), r#"class="scatter""#);
        assert!(mount_attribute("div > p").is_err());
    }
}
