//! Browser DOM surface (wasm32 only).
//!
//! Wraps the host element in the grid structure:
//!
//! ```text
//! div.csgrid#<instance>
//! ├── div.csgrid-header > table > tbody
//! ├── div.csgrid-body   > table > tbody   (or div.csgrid-nodata)
//! ├── host element (hidden, tagged csgrid-f)
//! ├── style[csgrid][data-target=<instance>]
//! └── div.csgrid-footer
//! ```

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::error::{GridError, Result};
use crate::header::HeaderRow;
use crate::layout::{parse_leading_int, WidthRule};

use super::markup::{
    body_rows_html, header_rows_html, no_data_html, width_rules_css, STYLE_MARKER_ATTR,
    STYLE_TARGET_ATTR,
};
use super::{classes, BodyHeight, RenderedRow, Surface};

/// Grid parts addressable from JavaScript.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridPart {
    Root,
    Header,
    Body,
    Footer,
}

impl GridPart {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "header" => Some(GridPart::Header),
            "body" => Some(GridPart::Body),
            "footer" => Some(GridPart::Footer),
            "" | "grid" => Some(GridPart::Root),
            _ => None,
        }
    }
}

pub struct DomSurface {
    host: HtmlElement,
    root: Option<HtmlElement>,
    header: Option<HtmlElement>,
    body: Option<HtmlElement>,
    footer: Option<HtmlElement>,
}

fn document_of(el: &HtmlElement) -> Result<Document> {
    el.owner_document()
        .ok_or_else(|| GridError::Surface("host element has no document".to_string()))
}

fn create_html(doc: &Document, tag: &str) -> Result<HtmlElement> {
    doc.create_element(tag)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| GridError::Surface(format!("<{tag}> is not an HTML element")))
}

fn create_div(doc: &Document, class: &str) -> Result<HtmlElement> {
    let el = create_html(doc, "div")?;
    el.set_class_name(class);
    Ok(el)
}

fn computed_px(el: &Element, property: &str) -> Option<i64> {
    let window = web_sys::window()?;
    let style = window.get_computed_style(el).ok()??;
    let value = style.get_property_value(property).ok()?;
    parse_leading_int(&value)
}

fn child_html(parent: &HtmlElement, selector: &str) -> Option<HtmlElement> {
    parent
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

fn not_mounted() -> GridError {
    GridError::Surface("grid structure has not been mounted".to_string())
}

impl DomSurface {
    pub fn new(host: HtmlElement) -> Self {
        Self {
            host,
            root: None,
            header: None,
            body: None,
            footer: None,
        }
    }

    pub fn host(&self) -> &HtmlElement {
        &self.host
    }

    pub fn part(&self, part: GridPart) -> Option<&HtmlElement> {
        match part {
            GridPart::Root => self.root.as_ref(),
            GridPart::Header => self.header.as_ref(),
            GridPart::Body => self.body.as_ref(),
            GridPart::Footer => self.footer.as_ref(),
        }
    }

    fn root(&self) -> Result<&HtmlElement> {
        self.root.as_ref().ok_or_else(not_mounted)
    }

    fn header(&self) -> Result<&HtmlElement> {
        self.header.as_ref().ok_or_else(not_mounted)
    }

    fn body(&self) -> Result<&HtmlElement> {
        self.body.as_ref().ok_or_else(not_mounted)
    }

    fn body_table(&self) -> Option<HtmlElement> {
        child_html(self.body.as_ref()?, ":scope > table")
    }
}

impl Surface for DomSurface {
    fn mount(&mut self, instance_id: &str) -> Result<()> {
        if self.root.is_some() {
            return Ok(());
        }
        let doc = document_of(&self.host)?;
        let root = create_div(&doc, classes::ROOT)?;
        root.set_id(instance_id);
        let header = create_div(&doc, classes::HEADER)?;
        let body = create_div(&doc, classes::BODY)?;
        root.append_child(&header)?;
        root.append_child(&body)?;

        if let Some(parent) = self.host.parent_node() {
            parent.insert_before(&root, self.host.next_sibling().as_ref())?;
        }
        self.host.class_list().add_1(classes::LOADED)?;
        self.host.style().set_property("display", "none")?;
        root.append_child(&self.host)?;

        self.root = Some(root);
        self.header = Some(header);
        self.body = Some(body);
        Ok(())
    }

    fn is_visible(&self) -> bool {
        self.root
            .as_ref()
            .is_some_and(|root| root.offset_width() > 0 || root.offset_height() > 0)
    }

    fn container_width(&self) -> Option<i64> {
        computed_px(self.root.as_ref()?, "width")
    }

    fn body_viewport_height(&self) -> Option<i64> {
        computed_px(self.body.as_ref()?, "height")
    }

    fn body_table_height(&self) -> Option<i64> {
        let table = self.body_table()?;
        let height = table.style().get_property_value("height").ok()?;
        parse_leading_int(&height)
    }

    fn body_table_width(&self) -> Option<i64> {
        computed_px(&self.body_table()?, "width")
    }

    fn has_width_rules(&self, instance_id: &str) -> bool {
        let Some(root) = self.root.as_ref() else {
            return false;
        };
        let selector = format!(":scope > style[{STYLE_TARGET_ATTR}=\"{instance_id}\"]");
        matches!(root.query_selector(&selector), Ok(Some(_)))
    }

    fn ensure_filler_cell(&mut self) -> Result<()> {
        let header = self.header()?;
        let selector = format!(":scope > .{}", classes::EMPTY_CELL);
        if header.query_selector(&selector)?.is_none() {
            let filler = create_div(&document_of(header)?, classes::EMPTY_CELL)?;
            header.append_child(&filler)?;
        }
        Ok(())
    }

    fn set_table_width(&mut self, width: i64) -> Result<()> {
        let value = format!("{width}px");
        if let Some(table) = child_html(self.header()?, ":scope > table") {
            table.style().set_property("width", &value)?;
        }
        if let Some(table) = self.body_table() {
            table.style().set_property("width", &value)?;
        }
        Ok(())
    }

    fn remove_width_rules(&mut self) -> Result<()> {
        let root = self.root()?;
        let selector = format!(":scope > style[{STYLE_MARKER_ATTR}]");
        while let Some(style) = root.query_selector(&selector)? {
            style.remove();
        }
        Ok(())
    }

    fn inject_width_rules(&mut self, instance_id: &str, rules: &[WidthRule]) -> Result<()> {
        let root = self.root()?;
        let style = document_of(root)?.create_element("style")?;
        style.set_attribute("type", "text/css")?;
        style.set_attribute(STYLE_MARKER_ATTR, "true")?;
        style.set_attribute(STYLE_TARGET_ATTR, instance_id)?;
        style.set_text_content(Some(&width_rules_css(instance_id, rules)));
        root.append_child(&style)?;
        Ok(())
    }

    fn set_header(&mut self, rows: &[HeaderRow]) -> Result<()> {
        let header = self.header()?;
        let filler = header
            .query_selector(&format!(":scope > .{}", classes::EMPTY_CELL))?
            .is_some();
        let mut html = format!("<table><tbody>{}</tbody></table>", header_rows_html(rows));
        if filler {
            html.push_str(&format!("<div class=\"{}\"></div>", classes::EMPTY_CELL));
        }
        header.set_inner_html(&html);
        Ok(())
    }

    fn reset_body(&mut self, height: BodyHeight) -> Result<()> {
        self.body()?.set_inner_html("");
        self.set_body_height(height)
    }

    fn set_body_height(&mut self, height: BodyHeight) -> Result<()> {
        let value = match height {
            BodyHeight::Auto => "auto".to_string(),
            BodyHeight::Px(px) => format!("{px}px"),
        };
        self.body()?.style().set_property("height", &value)?;
        Ok(())
    }

    fn show_no_data(&mut self, text: &str) -> Result<()> {
        self.body()?.set_inner_html(&no_data_html(text));
        Ok(())
    }

    fn create_body_table(&mut self, height: u32) -> Result<()> {
        let body = self.body()?;
        let table = create_html(&document_of(body)?, "table")?;
        table.set_inner_html("<tbody></tbody>");
        table.style().set_property("height", &format!("{height}px"))?;
        body.append_child(&table)?;
        Ok(())
    }

    fn fill_body(&mut self, rows: &[RenderedRow]) -> Result<()> {
        let tbody = child_html(self.body()?, ":scope > table > tbody")
            .ok_or_else(|| GridError::Surface("body table has not been created".to_string()))?;
        tbody.set_inner_html(&body_rows_html(rows));
        Ok(())
    }

    fn set_footer(&mut self, html: &str) -> Result<()> {
        if self.footer.is_none() {
            let root = self.root()?;
            let footer = create_div(&document_of(root)?, classes::FOOTER)?;
            root.append_child(&footer)?;
            self.footer = Some(footer);
        }
        if let Some(footer) = &self.footer {
            footer.set_inner_html(html);
        }
        Ok(())
    }
}
