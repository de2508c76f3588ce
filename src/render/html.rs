//! In-memory surface that records the grid document and serializes it to HTML.
//!
//! Used for server-side rendering, the CLI and tests. Measurements follow
//! what was written: the body viewport is its explicit height, the body
//! table is as tall as the height it was created with.

use crate::error::{GridError, Result};
use crate::header::HeaderRow;
use crate::layout::WidthRule;

use super::markup::{body_rows_html, header_rows_html, no_data_html, width_rules_block};
use super::{classes, BodyHeight, RenderedRow, Surface};

/// Body container content.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BodyContent {
    #[default]
    Empty,
    NoData(String),
    Table {
        height: u32,
        width: Option<i64>,
        rows: Vec<RenderedRow>,
    },
}

/// An installed width rule block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleBlock {
    pub instance_id: String,
    pub rules: Vec<WidthRule>,
}

#[derive(Debug, Clone)]
pub struct HtmlSurface {
    instance_id: Option<String>,
    visible: bool,
    container_width: Option<i64>,
    header_rows: Option<Vec<HeaderRow>>,
    header_width: Option<i64>,
    filler_cell: bool,
    body_height: BodyHeight,
    body: BodyContent,
    style_blocks: Vec<StyleBlock>,
    footer: Option<String>,
    /// Number of rule blocks written so far, for tests of the skip path
    rule_writes: usize,
}

impl HtmlSurface {
    /// A visible surface whose container is `width` pixels wide.
    pub fn new(width: i64) -> Self {
        Self {
            instance_id: None,
            visible: true,
            container_width: Some(width),
            header_rows: None,
            header_width: None,
            filler_cell: false,
            body_height: BodyHeight::Auto,
            body: BodyContent::Empty,
            style_blocks: Vec::new(),
            footer: None,
            rule_writes: 0,
        }
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn set_container_width(&mut self, width: i64) {
        self.container_width = Some(width);
    }

    pub fn instance_id(&self) -> Option<&str> {
        self.instance_id.as_deref()
    }

    pub fn header_rows(&self) -> Option<&[HeaderRow]> {
        self.header_rows.as_deref()
    }

    pub fn header_width(&self) -> Option<i64> {
        self.header_width
    }

    pub fn has_filler_cell(&self) -> bool {
        self.filler_cell
    }

    pub fn body_height(&self) -> BodyHeight {
        self.body_height
    }

    pub fn body(&self) -> &BodyContent {
        &self.body
    }

    /// Rendered body rows, empty when the body holds no table.
    pub fn body_rows(&self) -> &[RenderedRow] {
        match &self.body {
            BodyContent::Table { rows, .. } => rows,
            _ => &[],
        }
    }

    pub fn style_blocks(&self) -> &[StyleBlock] {
        &self.style_blocks
    }

    pub fn rule_writes(&self) -> usize {
        self.rule_writes
    }

    pub fn footer(&self) -> Option<&str> {
        self.footer.as_deref()
    }

    /// Serialize the whole grid.
    pub fn to_html(&self) -> String {
        let mut html = format!("<div class=\"{}\"", classes::ROOT);
        if let Some(id) = &self.instance_id {
            html.push_str(&format!(" id=\"{id}\""));
        }
        html.push('>');

        html.push_str(&format!("<div class=\"{}\">", classes::HEADER));
        if let Some(rows) = &self.header_rows {
            html.push_str(&table_open(None, self.header_width));
            html.push_str(&header_rows_html(rows));
            html.push_str("</tbody></table>");
        }
        if self.filler_cell {
            html.push_str(&format!("<div class=\"{}\"></div>", classes::EMPTY_CELL));
        }
        html.push_str("</div>");

        let height = match self.body_height {
            BodyHeight::Auto => "auto".to_string(),
            BodyHeight::Px(px) => format!("{px}px"),
        };
        html.push_str(&format!(
            "<div class=\"{}\" style=\"height:{height}\">",
            classes::BODY
        ));
        match &self.body {
            BodyContent::Empty => {}
            BodyContent::NoData(text) => html.push_str(&no_data_html(text)),
            BodyContent::Table {
                height,
                width,
                rows,
            } => {
                html.push_str(&table_open(Some(*height), *width));
                html.push_str(&body_rows_html(rows));
                html.push_str("</tbody></table>");
            }
        }
        html.push_str("</div>");

        for block in &self.style_blocks {
            html.push_str(&width_rules_block(&block.instance_id, &block.rules));
        }
        if let Some(footer) = &self.footer {
            html.push_str(&format!("<div class=\"{}\">{footer}</div>", classes::FOOTER));
        }
        html.push_str("</div>");
        html
    }
}

fn table_open(height: Option<u32>, width: Option<i64>) -> String {
    let mut style = String::new();
    if let Some(w) = width {
        style.push_str(&format!("width:{w}px;"));
    }
    if let Some(h) = height {
        style.push_str(&format!("height:{h}px;"));
    }
    if style.is_empty() {
        "<table><tbody>".to_string()
    } else {
        format!("<table style=\"{style}\"><tbody>")
    }
}

impl Surface for HtmlSurface {
    fn mount(&mut self, instance_id: &str) -> Result<()> {
        if self.instance_id.is_none() {
            self.instance_id = Some(instance_id.to_string());
        }
        Ok(())
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn container_width(&self) -> Option<i64> {
        self.container_width
    }

    fn body_viewport_height(&self) -> Option<i64> {
        match self.body_height {
            BodyHeight::Px(px) => Some(i64::from(px)),
            BodyHeight::Auto => Some(self.body_table_height().unwrap_or(0)),
        }
    }

    fn body_table_height(&self) -> Option<i64> {
        match &self.body {
            BodyContent::Table { height, .. } => Some(i64::from(*height)),
            _ => None,
        }
    }

    fn body_table_width(&self) -> Option<i64> {
        match &self.body {
            BodyContent::Table { width, .. } => *width,
            _ => None,
        }
    }

    fn has_width_rules(&self, instance_id: &str) -> bool {
        self.style_blocks
            .iter()
            .any(|block| block.instance_id == instance_id)
    }

    fn ensure_filler_cell(&mut self) -> Result<()> {
        self.filler_cell = true;
        Ok(())
    }

    fn set_table_width(&mut self, width: i64) -> Result<()> {
        if self.header_rows.is_some() {
            self.header_width = Some(width);
        }
        if let BodyContent::Table { width: w, .. } = &mut self.body {
            *w = Some(width);
        }
        Ok(())
    }

    fn remove_width_rules(&mut self) -> Result<()> {
        self.style_blocks.clear();
        Ok(())
    }

    fn inject_width_rules(&mut self, instance_id: &str, rules: &[WidthRule]) -> Result<()> {
        self.style_blocks.push(StyleBlock {
            instance_id: instance_id.to_string(),
            rules: rules.to_vec(),
        });
        self.rule_writes += 1;
        Ok(())
    }

    fn set_header(&mut self, rows: &[HeaderRow]) -> Result<()> {
        self.header_rows = Some(rows.to_vec());
        self.header_width = None;
        Ok(())
    }

    fn reset_body(&mut self, height: BodyHeight) -> Result<()> {
        self.body = BodyContent::Empty;
        self.body_height = height;
        Ok(())
    }

    fn set_body_height(&mut self, height: BodyHeight) -> Result<()> {
        self.body_height = height;
        Ok(())
    }

    fn show_no_data(&mut self, text: &str) -> Result<()> {
        self.body = BodyContent::NoData(text.to_string());
        Ok(())
    }

    fn create_body_table(&mut self, height: u32) -> Result<()> {
        self.body = BodyContent::Table {
            height,
            width: None,
            rows: Vec::new(),
        };
        Ok(())
    }

    fn fill_body(&mut self, rows: &[RenderedRow]) -> Result<()> {
        match &mut self.body {
            BodyContent::Table { rows: current, .. } => {
                current.extend_from_slice(rows);
                Ok(())
            }
            _ => Err(GridError::Surface("body table has not been created".to_string())),
        }
    }

    fn set_footer(&mut self, html: &str) -> Result<()> {
        self.footer = Some(html.to_string());
        Ok(())
    }
}
