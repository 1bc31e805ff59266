// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG dump of a [`Surface`].

use peniko::Brush;
use strata_core::{MarkPayload, Surface, TextAnchor, TextBaseline};

/// Serializes the marks of `surface` in paint order.
pub(crate) fn surface_to_svg(surface: &Surface) -> String {
    let (width, height) = (surface.width(), surface.height());
    let mut out = String::new();

    out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
    out.push_str(&format!(
        r#"viewBox="0 0 {width} {height}" width="{width}" height="{height}""#
    ));
    out.push_str(r#" font-family="sans-serif">"#);
    out.push('\n');

    for mark in surface.marks() {
        match &mark.payload {
            MarkPayload::Rect(r) => {
                // SVG rejects negative sizes.
                let rect = r.rect.abs();
                out.push_str(&format!(
                    r#"<rect x="{}" y="{}" width="{}" height="{}""#,
                    rect.x0,
                    rect.y0,
                    rect.width(),
                    rect.height(),
                ));
                write_paint_attr(&mut out, "fill", &r.fill);
                out.push_str("/>\n");
            }
            MarkPayload::Text(t) => {
                let baseline = match t.baseline {
                    TextBaseline::Middle => "middle",
                    TextBaseline::Alphabetic => "alphabetic",
                    TextBaseline::Hanging => "hanging",
                };
                out.push_str(&format!(
                    r#"<text x="{}" y="{}" font-size="{}" dominant-baseline="{}""#,
                    t.dx, t.dy, t.font_size, baseline
                ));
                if t.font_weight != 400 {
                    out.push_str(&format!(r#" font-weight="{}""#, t.font_weight));
                }
                out.push_str(&format!(r#" transform="translate({} {})"#, t.pos.x, t.pos.y));
                if t.angle != 0.0 {
                    out.push_str(&format!(" rotate({})", t.angle));
                }
                out.push('"');
                out.push_str(match t.anchor {
                    TextAnchor::Start => r#" text-anchor="start""#,
                    TextAnchor::Middle => r#" text-anchor="middle""#,
                    TextAnchor::End => r#" text-anchor="end""#,
                });
                write_paint_attr(&mut out, "fill", &t.fill);
                out.push('>');
                out.push_str(&escape_xml(&t.text));
                out.push_str("</text>\n");
            }
            MarkPayload::Path(p) => {
                out.push_str(&format!(r#"<path d="{}""#, p.path.to_svg()));
                write_paint_attr(&mut out, "fill", &p.fill);
                if p.stroke_width > 0.0 {
                    write_paint_attr(&mut out, "stroke", &p.stroke);
                    out.push_str(&format!(r#" stroke-width="{}""#, p.stroke_width));
                }
                out.push_str("/>\n");
            }
        }
    }

    out.push_str("</svg>\n");
    out
}

fn svg_paint(brush: &Brush) -> (String, Option<f64>) {
    match brush {
        Brush::Solid(color) => {
            let rgba = color.to_rgba8();
            let fill = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
            let opacity = match rgba.a {
                255 => None,
                0 => return ("none".to_string(), None),
                a => Some(f64::from(a) / 255.0),
            };
            (fill, opacity)
        }
        _ => ("none".to_string(), None),
    }
}

fn write_paint_attr(out: &mut String, name: &str, brush: &Brush) {
    let (value, opacity) = svg_paint(brush);
    out.push_str(&format!(r#" {name}="{value}""#));
    if let Some(o) = opacity {
        out.push_str(&format!(r#" {name}-opacity="{o}""#));
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect};
    use peniko::Color;
    use strata_core::{Mark, MarkId};

    use super::*;

    #[test]
    fn negative_rects_are_normalized() {
        let mut surface = Surface::new(10.0, 10.0);
        surface.push(
            Mark::builder(MarkId::from_raw(1))
                .rect(Rect::new(1.0, 8.0, 3.0, 5.0))
                .fill(Color::from_rgb8(0x31, 0x82, 0xbd))
                .build(),
        );
        let svg = surface_to_svg(&surface);
        assert!(svg.contains(r##"<rect x="1" y="5" width="2" height="3" fill="#3182bd"/>"##));
    }

    #[test]
    fn rotated_text_is_offset_in_its_own_frame() {
        let mut surface = Surface::new(10.0, 10.0);
        surface.push(
            Mark::builder(MarkId::from_raw(1))
                .text(Point::new(4.0, 6.0), "A&B")
                .offset(-8.0, 1.5)
                .angle(-45.0)
                .anchor(TextAnchor::End)
                .build(),
        );
        let svg = surface_to_svg(&surface);
        assert!(svg.contains(r#"x="-8" y="1.5""#), "{svg}");
        assert!(svg.contains(r#"transform="translate(4 6) rotate(-45)""#), "{svg}");
        assert!(svg.contains(">A&amp;B</text>"), "{svg}");
    }
}
