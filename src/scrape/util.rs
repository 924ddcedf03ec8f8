use once_cell::sync::Lazy;
use scraper::{node::Node, ElementRef, Selector};

pub static SORTABLE_TABLE: Lazy<Selector> =
    Lazy::new(|| Selector::parse("table.wikitable.sortable").unwrap());
pub static TR: Lazy<Selector> = Lazy::new(|| Selector::parse("tr").unwrap());
pub static TH: Lazy<Selector> = Lazy::new(|| Selector::parse("th").unwrap());
pub static MONOSPACE: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"[style*="monospace"]"#).unwrap());

/// Text content with `display:none` subtrees removed and `<br>` as a line break.
pub fn visible_text(el: ElementRef) -> String {
    let mut text = String::new();
    collect_visible(el, &mut text);
    text
}

fn collect_visible(el: ElementRef, text: &mut String) {
    for node in el.children() {
        match node.value() {
            Node::Text(fragment) => text.push_str(fragment),
            Node::Element(_) => {
                let Some(child) = ElementRef::wrap(node) else {
                    continue;
                };
                if child.value().name() == "br" {
                    text.push('\n');
                } else if !is_hidden(child) {
                    collect_visible(child, text);
                }
            }
            _ => {}
        }
    }
}

fn is_hidden(el: ElementRef) -> bool {
    el.value()
        .attr("style")
        .map(|style| style.replace(' ', "").contains("display:none"))
        .unwrap_or(false)
}

/// Direct `td`/`th` children of a table row, in document order.
pub fn row_cells(row: ElementRef) -> Vec<ElementRef> {
    row.children()
        .filter_map(ElementRef::wrap)
        .filter(|el| matches!(el.value().name(), "td" | "th"))
        .collect()
}
