// File: crates/diagram-core/src/canvas.rs
// Summary: Vector canvas trait, an SVG writer behind it, and a recorder for inspection.

use std::fmt::Write as _;
use std::io::{self, Write};

/// Sink for the primitive shapes a renderer emits.
///
/// Coordinates are integer pixels with Y pointing down. Styles are inline
/// `key:value;` declarations; an empty style emits no attribute.
pub trait VectorCanvas {
    fn start(&mut self, width: u32, height: u32) -> io::Result<()>;
    fn line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, style: &str) -> io::Result<()>;
    fn rect(&mut self, x: i32, y: i32, w: i32, h: i32, style: &str) -> io::Result<()>;
    fn text(&mut self, x: i32, y: i32, text: &str, style: &str) -> io::Result<()>;
    fn path(&mut self, data: &str, style: &str) -> io::Result<()>;
    fn circle(&mut self, cx: i32, cy: i32, r: i32, style: &str) -> io::Result<()>;
    /// Open a group whose style is inherited by its children.
    fn group(&mut self, style: &str) -> io::Result<()>;
    fn group_end(&mut self) -> io::Result<()>;
    fn end(&mut self) -> io::Result<()>;
}

/// Writes an SVG document to `W` as calls arrive.
pub struct SvgCanvas<W: Write> {
    out: W,
}

impl<W: Write> SvgCanvas<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn element(&mut self, head: &str, style: &str) -> io::Result<()> {
        if style.is_empty() {
            writeln!(self.out, "<{head} />")
        } else {
            writeln!(self.out, "<{head} style=\"{}\" />", escape(style))
        }
    }
}

impl<W: Write> VectorCanvas for SvgCanvas<W> {
    fn start(&mut self, width: u32, height: u32) -> io::Result<()> {
        writeln!(self.out, "<?xml version=\"1.0\"?>")?;
        writeln!(self.out, "<svg width=\"{width}\" height=\"{height}\"")?;
        writeln!(self.out, "     xmlns=\"http://www.w3.org/2000/svg\"")?;
        writeln!(self.out, "     xmlns:xlink=\"http://www.w3.org/1999/xlink\">")
    }

    fn line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, style: &str) -> io::Result<()> {
        self.element(&format!("line x1=\"{x1}\" y1=\"{y1}\" x2=\"{x2}\" y2=\"{y2}\""), style)
    }

    fn rect(&mut self, x: i32, y: i32, w: i32, h: i32, style: &str) -> io::Result<()> {
        self.element(&format!("rect x=\"{x}\" y=\"{y}\" width=\"{w}\" height=\"{h}\""), style)
    }

    fn text(&mut self, x: i32, y: i32, text: &str, style: &str) -> io::Result<()> {
        if style.is_empty() {
            writeln!(self.out, "<text x=\"{x}\" y=\"{y}\">{}</text>", escape(text))
        } else {
            writeln!(
                self.out,
                "<text x=\"{x}\" y=\"{y}\" style=\"{}\">{}</text>",
                escape(style),
                escape(text)
            )
        }
    }

    fn path(&mut self, data: &str, style: &str) -> io::Result<()> {
        self.element(&format!("path d=\"{}\"", escape(data)), style)
    }

    fn circle(&mut self, cx: i32, cy: i32, r: i32, style: &str) -> io::Result<()> {
        self.element(&format!("circle cx=\"{cx}\" cy=\"{cy}\" r=\"{r}\""), style)
    }

    fn group(&mut self, style: &str) -> io::Result<()> {
        writeln!(self.out, "<g style=\"{}\">", escape(style))
    }

    fn group_end(&mut self) -> io::Result<()> {
        writeln!(self.out, "</g>")
    }

    fn end(&mut self) -> io::Result<()> {
        writeln!(self.out, "</svg>")?;
        self.out.flush()
    }
}

fn escape(input: &str) -> String {
    let mut s = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => s.push_str("&amp;"),
            '<' => s.push_str("&lt;"),
            '>' => s.push_str("&gt;"),
            '"' => s.push_str("&quot;"),
            '\'' => s.push_str("&apos;"),
            c if c.is_control() && c != '\n' && c != '\t' => {
                let _ = write!(s, "&#x{:x};", c as u32);
            }
            c => s.push(c),
        }
    }
    s
}

/// One recorded canvas call.
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    Start { width: u32, height: u32 },
    Line { x1: i32, y1: i32, x2: i32, y2: i32, style: String },
    Rect { x: i32, y: i32, w: i32, h: i32, style: String },
    Text { x: i32, y: i32, text: String, style: String },
    Path { data: String, style: String },
    Circle { cx: i32, cy: i32, r: i32, style: String },
    Group { style: String },
    GroupEnd,
    End,
}

/// Keeps every call in order instead of serializing it.
#[derive(Clone, Debug, Default)]
pub struct RecordingCanvas {
    pub primitives: Vec<Primitive>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> impl Iterator<Item = &Primitive> {
        self.primitives.iter().filter(|p| matches!(p, Primitive::Line { .. }))
    }

    pub fn rects(&self) -> impl Iterator<Item = &Primitive> {
        self.primitives.iter().filter(|p| matches!(p, Primitive::Rect { .. }))
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Path { data, .. } => Some(data.as_str()),
            _ => None,
        })
    }

    pub fn circles(&self) -> impl Iterator<Item = &Primitive> {
        self.primitives.iter().filter(|p| matches!(p, Primitive::Circle { .. }))
    }
}

impl VectorCanvas for RecordingCanvas {
    fn start(&mut self, width: u32, height: u32) -> io::Result<()> {
        self.primitives.push(Primitive::Start { width, height });
        Ok(())
    }

    fn line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, style: &str) -> io::Result<()> {
        self.primitives.push(Primitive::Line { x1, y1, x2, y2, style: style.to_owned() });
        Ok(())
    }

    fn rect(&mut self, x: i32, y: i32, w: i32, h: i32, style: &str) -> io::Result<()> {
        self.primitives.push(Primitive::Rect { x, y, w, h, style: style.to_owned() });
        Ok(())
    }

    fn text(&mut self, x: i32, y: i32, text: &str, style: &str) -> io::Result<()> {
        self.primitives.push(Primitive::Text { x, y, text: text.to_owned(), style: style.to_owned() });
        Ok(())
    }

    fn path(&mut self, data: &str, style: &str) -> io::Result<()> {
        self.primitives.push(Primitive::Path { data: data.to_owned(), style: style.to_owned() });
        Ok(())
    }

    fn circle(&mut self, cx: i32, cy: i32, r: i32, style: &str) -> io::Result<()> {
        self.primitives.push(Primitive::Circle { cx, cy, r, style: style.to_owned() });
        Ok(())
    }

    fn group(&mut self, style: &str) -> io::Result<()> {
        self.primitives.push(Primitive::Group { style: style.to_owned() });
        Ok(())
    }

    fn group_end(&mut self) -> io::Result<()> {
        self.primitives.push(Primitive::GroupEnd);
        Ok(())
    }

    fn end(&mut self) -> io::Result<()> {
        self.primitives.push(Primitive::End);
        Ok(())
    }
}
