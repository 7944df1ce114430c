//! Paginated text layout for the PDF export.
//!
//! Lines of 12pt Helvetica are placed top to bottom on A4 pages, starting a
//! new page when the current one is full. Rendering hands the placed lines to
//! `printpdf`. Builtin fonts only cover plain ASCII, so other characters are
//! written as `?`.

use crate::error::{AuditError, Result};
use printpdf::{BuiltinFont, Mm, PdfDocument};

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 10.0;
const LINE_HEIGHT_MM: f32 = 10.0;
const FONT_SIZE_PT: f32 = 12.0;
const PT_TO_MM: f32 = 25.4 / 72.0;
/// Conservative average Helvetica glyph width, in ems.
const AVG_GLYPH_EM: f32 = 0.55;
const LAYER_NAME: &str = "Text";

fn glyph_width_mm() -> f32 {
    FONT_SIZE_PT * AVG_GLYPH_EM * PT_TO_MM
}

/// One line of text at a position measured from the bottom-left page corner.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PlacedLine {
    pub x: f32,
    pub y: f32,
    pub text: String,
}

#[derive(Debug, Clone)]
pub(crate) struct PageLayout {
    pages: Vec<Vec<PlacedLine>>,
    /// Distance from the top edge of the current page to the next line.
    cursor: f32,
}

impl PageLayout {
    pub fn new() -> Self {
        Self {
            pages: vec![Vec::new()],
            cursor: MARGIN_MM,
        }
    }

    pub fn pages(&self) -> &[Vec<PlacedLine>] {
        &self.pages
    }

    /// Characters that fit on one line between the margins.
    pub fn chars_per_line() -> usize {
        ((PAGE_WIDTH_MM - 2.0 * MARGIN_MM) / glyph_width_mm()) as usize
    }

    pub fn centered_line(&mut self, text: &str) {
        let width = text.chars().count() as f32 * glyph_width_mm();
        let x = ((PAGE_WIDTH_MM - width) / 2.0).max(MARGIN_MM);
        self.place(x, text);
    }

    /// Left-aligned text wrapped at word boundaries.
    pub fn paragraph(&mut self, text: &str) {
        for line in wrap(text, Self::chars_per_line()) {
            self.place(MARGIN_MM, &line);
        }
    }

    pub fn gap(&mut self, mm: f32) {
        self.cursor += mm;
    }

    fn place(&mut self, x: f32, text: &str) {
        if self.cursor + LINE_HEIGHT_MM > PAGE_HEIGHT_MM - MARGIN_MM {
            self.pages.push(Vec::new());
            self.cursor = MARGIN_MM;
        }
        // Baseline sits a little below the middle of the line box.
        let glyph_height = FONT_SIZE_PT * PT_TO_MM * 0.7;
        let y = PAGE_HEIGHT_MM - self.cursor - (LINE_HEIGHT_MM + glyph_height) / 2.0;
        if let Some(page) = self.pages.last_mut() {
            page.push(PlacedLine {
                x,
                y,
                text: sanitize(text),
            });
        }
        self.cursor += LINE_HEIGHT_MM;
    }

    /// Render every page into a PDF file.
    pub fn render(&self, title: &str) -> Result<Vec<u8>> {
        let pdf_error = |e: printpdf::Error| AuditError::Pdf(e.to_string());

        let (doc, first_page, first_layer) =
            PdfDocument::new(title, Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), LAYER_NAME);
        let font = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(pdf_error)?;

        for (index, lines) in self.pages.iter().enumerate() {
            let (page, layer) = if index == 0 {
                (first_page, first_layer)
            } else {
                doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), LAYER_NAME)
            };
            let layer = doc.get_page(page).get_layer(layer);
            for line in lines {
                layer.use_text(line.text.as_str(), FONT_SIZE_PT, Mm(line.x), Mm(line.y), &font);
            }
        }

        doc.save_to_bytes().map_err(pdf_error)
    }
}

fn sanitize(text: &str) -> String {
    text.chars()
        .map(|ch| match ch {
            ' '..='~' => ch,
            '\t' | '\n' | '\r' => ' ',
            _ => '?',
        })
        .collect()
}

/// Greedy word wrap; words longer than a line are split.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > width {
            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let rest = word.split_off(width);
            lines.push(word.into_iter().collect());
            word = rest;
        }

        let needed = if current_len == 0 { word.len() } else { current_len + 1 + word.len() };
        if needed > width && current_len > 0 {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.extend(word.iter());
        current_len += word.len();
    }

    if current_len > 0 || lines.is_empty() {
        lines.push(current);
    }
    lines
}
