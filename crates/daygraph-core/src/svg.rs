// File: crates/daygraph-core/src/svg.rs
// Summary: Minimal SVG element tree with escaping and deterministic serialization.

use std::fmt::Write as _;

#[derive(Clone, Debug)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// One SVG element. Attributes keep insertion order so output is stable.
#[derive(Clone, Debug)]
pub struct Element {
    tag: &'static str,
    attrs: Vec<(&'static str, String)>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self { tag, attrs: Vec::new(), children: Vec::new() }
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    /// Pixel-valued attribute; whole pixels print without a fraction.
    pub fn attr_px(self, name: &'static str, value: f32) -> Self {
        self.attr(name, fmt_px(value))
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    /// Serialize the tree, two-space indented.
    pub fn to_svg(&self) -> String {
        let mut out = String::new();
        self.write(&mut out, 0);
        out
    }

    fn write(&self, out: &mut String, depth: usize) {
        indent(out, depth);
        let _ = write!(out, "<{}", self.tag);
        for (name, value) in &self.attrs {
            let _ = write!(out, " {}=\"{}\"", name, escape(value));
        }
        if self.children.is_empty() {
            out.push_str("/>\n");
            return;
        }
        // Text-only elements stay on one line.
        if self.children.iter().all(|c| matches!(c, Node::Text(_))) {
            out.push('>');
            for c in &self.children {
                if let Node::Text(t) = c {
                    out.push_str(&escape(t));
                }
            }
            let _ = writeln!(out, "</{}>", self.tag);
            return;
        }
        out.push_str(">\n");
        for c in &self.children {
            match c {
                Node::Element(e) => e.write(out, depth + 1),
                Node::Text(t) => {
                    indent(out, depth + 1);
                    out.push_str(&escape(t));
                    out.push('\n');
                }
            }
        }
        indent(out, depth);
        let _ = writeln!(out, "</{}>", self.tag);
    }
}

fn indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str("  ");
    }
}

/// Escape text content and attribute values.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Shortest stable rendering of a pixel coordinate.
pub fn fmt_px(v: f32) -> String {
    if (v - v.round()).abs() < 1e-4 {
        return format!("{}", v.round() as i64);
    }
    let s = format!("{v:.2}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}
