//! Default node renderer.
//!
//! The root shows an optional name and an inline preview of its value; every
//! other node shows `name: description`.
//!
//! Control characters in names and strings are escaped so every node stays on
//! one terminal row.

use std::borrow::Cow;

use objview::tree::{Label, NodeProps, NodeRenderer, StyleSlot};
use objview::value::{format_number, Heap, ObjectKind, Value};
use objview::{ChildDescriptor, DataIterator};

/// Properties shown in an inline preview before eliding the rest
pub const MAX_PREVIEW_PROPERTIES: usize = 5;

/// Object label renderer used by `print` and `view`.
#[derive(Debug, Clone, Copy)]
pub struct InspectorLabels {
    unicode: bool,
}

impl InspectorLabels {
    pub fn new(unicode: bool) -> Self {
        Self { unicode }
    }

    fn ellipsis(&self) -> &'static str {
        crate::ui::theme::ellipsis(self.unicode)
    }

    fn function_marker(&self) -> &'static str {
        if self.unicode {
            "ƒ"
        } else {
            "function"
        }
    }

    fn root_label(&self, props: &NodeProps<'_>) -> Label {
        let mut label = Label::new();
        if !props.name.is_empty() {
            label.append(StyleSlot::Name, escape_control(props.name));
            label.append(StyleSlot::Punctuation, ": ");
        }
        label.extend(self.preview(props.heap, props.iterator, props.value));
        label
    }

    fn object_label(&self, props: &NodeProps<'_>) -> Label {
        let name_slot = if props.is_non_enumerable {
            StyleSlot::NonEnumerableName
        } else {
            StyleSlot::Name
        };
        let mut label = Label::plain(name_slot, escape_control(props.name));
        label.append(StyleSlot::Punctuation, ": ");
        label.extend(self.description(props.heap, props.value));
        label
    }

    /// Short one-token description of a value.
    pub fn description(&self, heap: &Heap, value: &Value) -> Label {
        let Value::Object(id) = value else {
            return primitive(value);
        };
        let Some(object) = heap.get(*id) else {
            return Label::plain(StyleSlot::Description, "Object");
        };

        match &object.kind {
            ObjectKind::Plain => Label::plain(
                StyleSlot::Description,
                escape_control(object.class_name().unwrap_or("Object")),
            ),
            ObjectKind::Array(items) => {
                Label::plain(StyleSlot::Description, format!("Array({})", items.len()))
            }
            ObjectKind::Map(entries) => {
                Label::plain(StyleSlot::Description, format!("Map({})", entries.len()))
            }
            ObjectKind::Set(items) => {
                Label::plain(StyleSlot::Description, format!("Set({})", items.len()))
            }
            ObjectKind::Iterable(_) => Label::plain(
                StyleSlot::Description,
                escape_control(object.class_name().unwrap_or("Iterable")),
            ),
            ObjectKind::Function { name } => Label::new()
                .push(StyleSlot::Function, self.function_marker())
                .push(StyleSlot::Function, format!(" {}()", escape_control(name))),
        }
    }

    /// Inline preview: enumerable children one level deep.
    pub fn preview(&self, heap: &Heap, iterator: &DataIterator, value: &Value) -> Label {
        let Value::Object(id) = value else {
            return primitive(value);
        };
        let kind = heap.get(*id).map(|o| &o.kind);

        match kind {
            Some(ObjectKind::Array(items)) => {
                let mut label = Label::plain(StyleSlot::Description, format!("({}) ", items.len()));
                label.append(StyleSlot::Punctuation, "[");
                let mut children = iterator
                    .iterate(heap, value)
                    .filter(|c| !c.is_non_enumerable);
                self.preview_items(&mut label, &mut children, |label, child| {
                    label.extend(self.description(heap, &child.value));
                });
                label.append(StyleSlot::Punctuation, "]");
                label
            }
            Some(ObjectKind::Plain) => {
                let mut label = Label::new();
                if let Some(class_name) = heap.get(*id).and_then(|o| o.class_name()) {
                    if class_name != "Object" {
                        label.append(
                            StyleSlot::Description,
                            format!("{} ", escape_control(class_name)),
                        );
                    }
                }
                label.append(StyleSlot::Punctuation, "{");
                let mut children = iterator
                    .iterate(heap, value)
                    .filter(|c| !c.is_non_enumerable);
                self.preview_items(&mut label, &mut children, |label, child| {
                    label.append(StyleSlot::Name, escape_control(&child.name));
                    label.append(StyleSlot::Punctuation, ": ");
                    label.extend(self.description(heap, &child.value));
                });
                label.append(StyleSlot::Punctuation, "}");
                label
            }
            _ => self.description(heap, value),
        }
    }

    fn preview_items(
        &self,
        label: &mut Label,
        children: &mut dyn Iterator<Item = ChildDescriptor>,
        mut item: impl FnMut(&mut Label, &ChildDescriptor),
    ) {
        for (i, child) in children.enumerate() {
            if i > 0 {
                label.append(StyleSlot::Punctuation, ", ");
            }
            if i == MAX_PREVIEW_PROPERTIES {
                label.append(StyleSlot::Punctuation, self.ellipsis());
                break;
            }
            item(label, &child);
        }
    }
}

impl NodeRenderer for InspectorLabels {
    fn render(&self, props: &NodeProps<'_>) -> Label {
        if props.depth == 0 {
            self.root_label(props)
        } else {
            self.object_label(props)
        }
    }
}

fn primitive(value: &Value) -> Label {
    match value {
        Value::Undefined => Label::plain(StyleSlot::Undefined, "undefined"),
        Value::Null => Label::plain(StyleSlot::Null, "null"),
        Value::Bool(b) => Label::plain(StyleSlot::Boolean, b.to_string()),
        Value::Number(n) => Label::plain(StyleSlot::Number, format_number(*n)),
        Value::String(s) => {
            Label::plain(StyleSlot::String, format!("\"{}\"", escape_control(s)))
        }
        Value::Object(_) => Label::plain(StyleSlot::Description, "Object"),
    }
}

/// Replace control characters with their escaped form (`\n`, `\u{1b}`).
pub fn escape_control(text: &str) -> Cow<'_, str> {
    if !text.chars().any(char::is_control) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        if c.is_control() {
            out.extend(c.escape_debug());
        } else {
            out.push(c);
        }
    }
    Cow::Owned(out)
}
