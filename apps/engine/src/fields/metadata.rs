//! Field Metadata Extractor — turns one form control into a `FieldMetadata`
//! snapshot of every textual signal associated with it. Purely observational:
//! the document is only read, never mutated. The one style inspection here is
//! the inline-style check used to decide visibility.

use ego_tree::NodeRef;
use scraper::{node::Node, ElementRef, Html, Selector};
use tracing::debug;

use crate::models::field::FieldMetadata;

/// Control kinds that never take autofill values.
const SKIPPED_TYPES: &[&str] = &["submit", "button", "reset", "image", "file", "hidden"];

/// Identifier tokens that mark a control as off-limits (bot checks, and
/// anything that smells like an authentication secret).
const BLOCKED_TOKENS: &[&str] = &["captcha", "security"];

pub struct MetadataExtractor {
    label_selector: Selector,
    option_selector: Selector,
}

impl MetadataExtractor {
    pub fn new() -> Self {
        Self {
            // Static selectors, infallible to parse.
            label_selector: Selector::parse("label").expect("label selector"),
            option_selector: Selector::parse("option").expect("option selector"),
        }
    }

    /// Builds the metadata snapshot for one control, or `None` when the
    /// control is irrelevant to autofill (hidden, disabled, non-fillable
    /// kind, bot check, or password).
    pub fn extract(&self, document: &Html, element: ElementRef<'_>) -> Option<FieldMetadata> {
        let tag = element.value().name();
        let raw_type = attr(element, "type");
        let control_type = if tag == "input" {
            if raw_type.is_empty() {
                "text".to_string()
            } else {
                raw_type
            }
        } else {
            tag.to_string()
        };

        if control_type == "password" || SKIPPED_TYPES.contains(&control_type.as_str()) {
            return None;
        }
        if element.value().attr("disabled").is_some()
            || element.value().attr("readonly").is_some()
            || is_hidden_in_tree(element)
        {
            return None;
        }

        let id = attr(element, "id");
        let name = attr(element, "name");
        let class_list: Vec<String> = element
            .value()
            .classes()
            .map(|c| c.trim().to_lowercase())
            .collect();
        if is_blocked(&id, &name, &class_list) {
            debug!(id, name, "skipping blocked control");
            return None;
        }

        let (label_text, label_for_field) = self.resolve_label(document, element, &id);

        let data_attrs: Vec<(String, String)> = element
            .value()
            .attrs()
            .filter_map(|(key, value)| {
                key.strip_prefix("data-").map(|stripped| {
                    (stripped.trim().to_lowercase(), value.trim().to_lowercase())
                })
            })
            .collect();

        let options = if tag == "select" {
            element
                .select(&self.option_selector)
                .map(|opt| collect_text(opt))
                .filter(|t| !t.is_empty())
                .collect()
        } else {
            Vec::new()
        };

        Some(FieldMetadata {
            id,
            name,
            control_type,
            placeholder: attr(element, "placeholder"),
            class_list,
            value: attr(element, "value"),
            autocomplete: attr(element, "autocomplete"),
            aria_label: attr(element, "aria-label"),
            aria_labelledby: attr(element, "aria-labelledby"),
            aria_describedby: attr(element, "aria-describedby"),
            title: attr(element, "title"),
            data_attrs,
            label_text,
            label_for_field,
            required: element.value().attr("required").is_some(),
            pattern: attr(element, "pattern"),
            min_length: parse_u32_attr(element, "minlength"),
            max_length: parse_u32_attr(element, "maxlength"),
            min: attr(element, "min"),
            max: attr(element, "max"),
            options,
            adapter_hints: Default::default(),
        })
    }

    /// Label precedence, first match wins:
    /// 1. `label[for=<id>]` — explicit binding, the strong signal.
    /// 2. An ancestor `<label>` wrapping the control.
    /// 3. Nearest preceding visible text: previous siblings of the control,
    ///    then of its parent.
    fn resolve_label(
        &self,
        document: &Html,
        element: ElementRef<'_>,
        id: &str,
    ) -> (String, bool) {
        if !id.is_empty() {
            for label in document.select(&self.label_selector) {
                if label.value().attr("for").map(|f| f.trim().to_lowercase()) == Some(id.to_string())
                {
                    let text = collect_text(label);
                    if !text.is_empty() {
                        return (text, true);
                    }
                }
            }
        }

        for ancestor in element.ancestors() {
            if let Some(ancestor_el) = ElementRef::wrap(ancestor) {
                if ancestor_el.value().name() == "label" {
                    let text = collect_text(ancestor_el);
                    if !text.is_empty() {
                        return (text, false);
                    }
                }
            }
        }

        if let Some(text) = nearest_preceding_text(*element) {
            return (text, false);
        }
        if let Some(parent) = element.parent() {
            if let Some(text) = nearest_preceding_text(parent) {
                return (text, false);
            }
        }

        (String::new(), false)
    }
}

impl Default for MetadataExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Trimmed, lower-cased attribute value, empty when absent.
fn attr(element: ElementRef<'_>, name: &str) -> String {
    element
        .value()
        .attr(name)
        .map(|v| v.trim().to_lowercase())
        .unwrap_or_default()
}

fn parse_u32_attr(element: ElementRef<'_>, name: &str) -> Option<u32> {
    element.value().attr(name).and_then(|v| v.trim().parse().ok())
}

fn is_blocked(id: &str, name: &str, class_list: &[String]) -> bool {
    BLOCKED_TOKENS.iter().any(|token| {
        id.contains(token) || name.contains(token) || class_list.iter().any(|c| c.contains(token))
    })
}

/// A control is invisible when it, or any ancestor container, is hidden —
/// an inactive step of a multi-step form hides the wrapper, not each input.
fn is_hidden_in_tree(element: ElementRef<'_>) -> bool {
    if is_hidden(element) {
        return true;
    }
    element
        .ancestors()
        .filter_map(ElementRef::wrap)
        .any(is_hidden)
}

/// Inline visibility check: `hidden` attribute or a hiding inline style.
/// Computed stylesheet cascade is out of reach here; the live-DOM shell sees
/// the same decision through its style inspection.
fn is_hidden(element: ElementRef<'_>) -> bool {
    if element.value().attr("hidden").is_some() {
        return true;
    }
    match element.value().attr("style") {
        Some(style) => {
            let style: String = style.to_lowercase().chars().filter(|c| !c.is_whitespace()).collect();
            style.contains("display:none") || style.contains("visibility:hidden")
        }
        None => false,
    }
}

/// Descendant text of an element, whitespace-collapsed, trimmed, lower-cased.
fn collect_text(element: ElementRef<'_>) -> String {
    let mut raw = String::new();
    for piece in element.text() {
        raw.push_str(piece);
        raw.push(' ');
    }
    collapse_whitespace(&raw).to_lowercase()
}

/// Walks the previous-sibling chain looking for the first non-empty visible
/// text, skipping elements hidden via inline style.
fn nearest_preceding_text(node: NodeRef<'_, Node>) -> Option<String> {
    for sibling in node.prev_siblings() {
        match sibling.value() {
            Node::Text(text) => {
                let trimmed = collapse_whitespace(text).to_lowercase();
                if !trimmed.is_empty() {
                    return Some(trimmed);
                }
            }
            Node::Element(_) => {
                if let Some(element) = ElementRef::wrap(sibling) {
                    if is_hidden(element) {
                        continue;
                    }
                    let text = collect_text(element);
                    if !text.is_empty() {
                        return Some(text);
                    }
                }
            }
            _ => {}
        }
    }
    None
}

fn collapse_whitespace(input: &str) -> String {
    let mut buf = String::with_capacity(input.len());
    let mut last_space = false;
    for ch in input.chars() {
        if ch.is_whitespace() {
            if !last_space && !buf.is_empty() {
                buf.push(' ');
            }
            last_space = true;
        } else {
            buf.push(ch);
            last_space = false;
        }
    }
    buf.trim().to_string()
}
