// src/core/html.rs
// Thin helpers over `scraper` so specs can stay declarative about selectors.

use scraper::{ ElementRef, Html, Selector };

use super::sanitize::normalize_ws;

/// Parse a CSS selector. Selectors here are compile-time literals; a bad one is
/// logged and behaves as "matches nothing".
pub fn selector(css: &str) -> Option<Selector> {
    match Selector::parse(css) {
        Ok(sel) => Some(sel),
        Err(e) => {
            loge!("Bad selector {css:?}: {e}");
            None
        }
    }
}

/// Visible text of an element, whitespace collapsed.
pub fn text_of(el: ElementRef<'_>) -> String {
    normalize_ws(&el.text().collect::<String>())
}

/// All elements under `scope` matching `css`, in document order.
pub fn select_all<'a>(scope: ElementRef<'a>, css: &str) -> Vec<ElementRef<'a>> {
    match selector(css) {
        Some(sel) => scope.select(&sel).collect(),
        None => Vec::new(),
    }
}

/// First element under `scope` matching `css`.
pub fn select_first<'a>(scope: ElementRef<'a>, css: &str) -> Option<ElementRef<'a>> {
    let sel = selector(css)?;
    scope.select(&sel).next()
}

/// Text of the first match whose text is non-empty.
pub fn first_text(scope: ElementRef<'_>, css: &str) -> Option<String> {
    select_all(scope, css)
        .into_iter()
        .map(text_of)
        .find(|t| !t.is_empty())
}

/// `content` of `<meta name="...">`, trimmed; `None` when missing or blank.
pub fn meta_content(doc: &Html, name: &str) -> Option<String> {
    let css = format!(r#"meta[name="{name}"]"#);
    let el = select_first(doc.root_element(), &css)?;
    let content = normalize_ws(el.value().attr("content")?);
    (!content.is_empty()).then_some(content)
}
