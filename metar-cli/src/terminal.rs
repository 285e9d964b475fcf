use std::io::{self, Write};

use metar_core::{DisplaySurface, Document, OutputFormat};

/// Output area backed by stdout. Each submission prints its content as a
/// fresh block; nothing from an earlier submission is repeated.
#[derive(Debug)]
pub struct TerminalSurface<W> {
    out: W,
    format: OutputFormat,
}

impl TerminalSurface<io::Stdout> {
    pub fn stdout(format: OutputFormat) -> Self {
        Self::new(io::stdout(), format)
    }
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self { out, format }
    }

    fn write_block(&mut self, content: &str) {
        let content = content.trim_end_matches('\n');
        if let Err(err) = writeln!(self.out, "{content}").and_then(|_| self.out.flush()) {
            tracing::error!(error = %err, "failed to write to terminal");
        }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> DisplaySurface for TerminalSurface<W> {
    fn set_text(&mut self, text: &str) {
        self.write_block(text);
    }

    fn set_document(&mut self, document: &Document) {
        let rendered = match self.format {
            OutputFormat::Text => document.to_string(),
            OutputFormat::Html => document.to_html(),
        };
        self.write_block(&rendered);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use metar_core::{DecodedMetar, render};

    fn sample() -> Document {
        render(&DecodedMetar {
            airport: Some("RJTT".into()),
            time: Some("12:00".into()),
            ..Default::default()
        })
    }

    #[test]
    fn text_format_prints_plain_document() {
        let mut surface = TerminalSurface::new(Vec::new(), OutputFormat::Text);
        surface.set_document(&sample());

        let out = String::from_utf8(surface.into_inner()).unwrap();
        assert_eq!(out, "METAR解析結果\n空港コード: RJTT\n観測時刻: 12:00\n");
    }

    #[test]
    fn html_format_prints_fragment() {
        let mut surface = TerminalSurface::new(Vec::new(), OutputFormat::Html);
        surface.set_document(&sample());

        let out = String::from_utf8(surface.into_inner()).unwrap();
        assert!(out.starts_with("<h2>METAR解析結果</h2><ul>"));
        assert!(out.ends_with("</ul>\n"));
    }

    #[test]
    fn messages_printed_verbatim() {
        let mut surface = TerminalSurface::new(Vec::new(), OutputFormat::Html);
        surface.set_text("エラー: invalid METAR format");

        let out = String::from_utf8(surface.into_inner()).unwrap();
        assert_eq!(out, "エラー: invalid METAR format\n");
    }
}
