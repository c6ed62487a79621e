//! Data iterator.
//!
//! Turns any [`Value`] into an ordered, lazily produced sequence of named
//! children. The iterator holds no state between calls: every call to
//! [`DataIterator::iterate`] re-derives the children from the heap.

use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

use crate::value::{Heap, ObjectId, ObjectKind, Value};

/// Name of the synthetic prototype link child.
pub const PROTO_NAME: &str = "__proto__";

/// Display name for the empty property name.
pub const EMPTY_NAME: &str = "\"\"";

/// Key comparator supplied by the embedder.
pub type KeyComparator = Rc<dyn Fn(&str, &str) -> Ordering>;

/// How object keys are ordered.
#[derive(Clone, Default)]
pub enum KeySort {
    /// Host order (integer keys first, then insertion order)
    #[default]
    Insertion,
    /// Alphabetical; arrays keep index order
    Alphabetical,
    /// Caller-supplied comparator, applied to arrays too
    Custom(KeyComparator),
}

impl KeySort {
    pub fn custom(cmp: impl Fn(&str, &str) -> Ordering + 'static) -> Self {
        KeySort::Custom(Rc::new(cmp))
    }
}

impl From<bool> for KeySort {
    fn from(sort: bool) -> Self {
        if sort {
            KeySort::Alphabetical
        } else {
            KeySort::Insertion
        }
    }
}

impl fmt::Debug for KeySort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeySort::Insertion => f.write_str("Insertion"),
            KeySort::Alphabetical => f.write_str("Alphabetical"),
            KeySort::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// One child of an inspected value.
#[derive(Debug, Clone, PartialEq)]
pub struct ChildDescriptor {
    pub name: String,
    pub value: Value,
    pub is_non_enumerable: bool,
}

/// How a value's children are enumerated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    /// Primitive or dangling handle; no children
    Leaf,
    /// Index-ordered property walk
    Array(ObjectId),
    /// Item walk over a map, set or other iterable
    Iterable(ObjectId),
    /// Own property walk over a plain object or function
    Properties(ObjectId),
}

impl ContainerKind {
    pub fn of(heap: &Heap, value: &Value) -> Self {
        let Some(id) = value.as_object() else {
            return ContainerKind::Leaf;
        };
        match heap.get(id).map(|o| &o.kind) {
            None => ContainerKind::Leaf,
            Some(ObjectKind::Array(_)) => ContainerKind::Array(id),
            Some(ObjectKind::Map(_) | ObjectKind::Set(_) | ObjectKind::Iterable(_)) => {
                ContainerKind::Iterable(id)
            }
            Some(ObjectKind::Plain | ObjectKind::Function { .. }) => ContainerKind::Properties(id),
        }
    }
}

/// Child enumeration settings.
#[derive(Debug, Clone, Default)]
pub struct DataIterator {
    pub show_non_enumerable: bool,
    pub sort_object_keys: KeySort,
}

impl DataIterator {
    pub fn new(show_non_enumerable: bool, sort_object_keys: KeySort) -> Self {
        Self {
            show_non_enumerable,
            sort_object_keys,
        }
    }

    /// Lazily enumerate the children of `value`.
    pub fn iterate<'h>(&self, heap: &'h Heap, value: &Value) -> Children<'h> {
        let state = match ContainerKind::of(heap, value) {
            ContainerKind::Leaf => State::Done,
            ContainerKind::Iterable(object) => State::Items { object, index: 0 },
            ContainerKind::Array(object) => self.property_state(heap, object, true),
            ContainerKind::Properties(object) => self.property_state(heap, object, false),
        };

        Children {
            heap,
            state,
            show_non_enumerable: self.show_non_enumerable,
        }
    }

    /// Whether `value` produces at least one child.
    pub fn has_children(&self, heap: &Heap, value: &Value) -> bool {
        self.iterate(heap, value).next().is_some()
    }

    /// First child named `name`, if any.
    pub fn child(&self, heap: &Heap, value: &Value, name: &str) -> Option<ChildDescriptor> {
        self.iterate(heap, value).find(|child| child.name == name)
    }

    fn property_state(&self, heap: &Heap, object: ObjectId, is_array: bool) -> State {
        let mut keys = heap.own_keys(object);
        match &self.sort_object_keys {
            KeySort::Alphabetical if !is_array => keys.sort(),
            KeySort::Custom(cmp) => keys.sort_by(|a, b| cmp(a, b)),
            _ => {}
        }

        let proto_pending = self.show_non_enumerable && !heap.is_prototype_root(object);
        State::Properties {
            object,
            keys: keys.into_iter(),
            proto_pending,
        }
    }
}

enum State {
    Done,
    Items {
        object: ObjectId,
        index: usize,
    },
    Properties {
        object: ObjectId,
        keys: std::vec::IntoIter<String>,
        proto_pending: bool,
    },
}

/// Pull-based sequence of children produced by [`DataIterator::iterate`].
pub struct Children<'h> {
    heap: &'h Heap,
    state: State,
    show_non_enumerable: bool,
}

impl Iterator for Children<'_> {
    type Item = ChildDescriptor;

    fn next(&mut self) -> Option<ChildDescriptor> {
        let heap = self.heap;
        let show_non_enumerable = self.show_non_enumerable;

        match &mut self.state {
            State::Done => None,
            State::Items { object, index } => {
                let child = next_item(heap, *object, *index);
                *index += 1;
                if child.is_none() {
                    self.state = State::Done;
                }
                child
            }
            State::Properties {
                object,
                keys,
                proto_pending,
            } => {
                let object = *object;
                for key in keys.by_ref() {
                    let Some(property) = heap.own_property(object, &key) else {
                        continue;
                    };
                    if !property.enumerable && !show_non_enumerable {
                        continue;
                    }
                    match property.value {
                        Ok(Value::Undefined) if !property.enumerable => continue,
                        Ok(value) => {
                            return Some(ChildDescriptor {
                                name: display_name(key),
                                value,
                                is_non_enumerable: !property.enumerable,
                            })
                        }
                        Err(err) => {
                            tracing::trace!(
                                property = %err.property,
                                reason = %err.reason,
                                "skipping inaccessible property"
                            );
                            continue;
                        }
                    }
                }

                if std::mem::take(proto_pending) {
                    let prototype = heap
                        .get(object)
                        .and_then(|o| o.prototype())
                        .map(Value::Object)
                        .unwrap_or(Value::Null);
                    return Some(ChildDescriptor {
                        name: PROTO_NAME.to_string(),
                        value: prototype,
                        is_non_enumerable: true,
                    });
                }

                self.state = State::Done;
                None
            }
        }
    }
}

fn next_item(heap: &Heap, object: ObjectId, index: usize) -> Option<ChildDescriptor> {
    let kind = &heap.get(object)?.kind;
    let (name, value) = match kind {
        ObjectKind::Map(entries) => {
            let (key, value) = entries.get(index)?;
            (heap.to_key_string(key), value.clone())
        }
        ObjectKind::Set(items) | ObjectKind::Iterable(items) => {
            let item = items.get(index)?;
            match as_pair(heap, item) {
                Some((key, value)) => (heap.to_key_string(key), value.clone()),
                None => (index.to_string(), item.clone()),
            }
        }
        _ => return None,
    };

    Some(ChildDescriptor {
        name,
        value,
        is_non_enumerable: false,
    })
}

/// A 2-element array item, read as `(key, value)`.
fn as_pair<'h>(heap: &'h Heap, item: &Value) -> Option<(&'h Value, &'h Value)> {
    match &heap.get(item.as_object()?)?.kind {
        ObjectKind::Array(items) if items.len() == 2 => Some((&items[0], &items[1])),
        _ => None,
    }
}

fn display_name(key: String) -> String {
    if key.is_empty() {
        EMPTY_NAME.to_string()
    } else {
        key
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Property;

    fn names(iter: &DataIterator, heap: &Heap, value: &Value) -> Vec<String> {
        iter.iterate(heap, value).map(|c| c.name).collect()
    }

    #[test]
    fn primitives_have_no_children() {
        let heap = Heap::new();
        let iter = DataIterator::default();

        for value in [
            Value::Undefined,
            Value::Null,
            Value::Bool(true),
            Value::Number(1.0),
            Value::from("text"),
        ] {
            assert_eq!(iter.iterate(&heap, &value).count(), 0);
            assert!(!iter.has_children(&heap, &value));
        }
    }

    #[test]
    fn plain_object_yields_enumerable_properties_in_order() {
        let mut heap = Heap::new();
        let obj = heap.plain();
        heap.insert(obj, "z", 1);
        heap.insert(obj, "a", 2);
        heap.define(obj, "hidden", Property::hidden(3));

        let iter = DataIterator::default();
        let children: Vec<_> = iter.iterate(&heap, &Value::Object(obj)).collect();

        assert_eq!(
            children,
            vec![
                ChildDescriptor {
                    name: "z".into(),
                    value: Value::from(1),
                    is_non_enumerable: false
                },
                ChildDescriptor {
                    name: "a".into(),
                    value: Value::from(2),
                    is_non_enumerable: false
                },
            ]
        );
    }

    #[test]
    fn alphabetical_sort_applies_to_objects() {
        let mut heap = Heap::new();
        let obj = heap.plain();
        heap.insert(obj, "b", 1);
        heap.insert(obj, "c", 1);
        heap.insert(obj, "a", 1);

        let iter = DataIterator::new(false, KeySort::Alphabetical);
        assert_eq!(names(&iter, &heap, &Value::Object(obj)), vec!["a", "b", "c"]);
    }

    #[test]
    fn alphabetical_sort_skips_arrays() {
        let mut heap = Heap::new();
        let items = (0..12).map(Value::from).collect();
        let arr = heap.array(items);

        let iter = DataIterator::new(false, KeySort::Alphabetical);
        let expected: Vec<String> = (0..12).map(|i| i.to_string()).collect();
        assert_eq!(names(&iter, &heap, &Value::Object(arr)), expected);
    }

    #[test]
    fn custom_comparator_overrides_order() {
        let mut heap = Heap::new();
        let obj = heap.plain();
        heap.insert(obj, "a", 1);
        heap.insert(obj, "c", 1);
        heap.insert(obj, "b", 1);

        let iter = DataIterator::new(false, KeySort::custom(|a, b| b.cmp(a)));
        assert_eq!(names(&iter, &heap, &Value::Object(obj)), vec!["c", "b", "a"]);
    }

    #[test]
    fn custom_comparator_applies_to_arrays() {
        let mut heap = Heap::new();
        let arr = heap.array(vec![Value::from(1), Value::from(2), Value::from(3)]);

        let iter = DataIterator::new(false, KeySort::custom(|a, b| b.cmp(a)));
        assert_eq!(names(&iter, &heap, &Value::Object(arr)), vec!["2", "1", "0"]);
    }

    #[test]
    fn non_enumerable_members_and_prototype_when_requested() {
        let mut heap = Heap::new();
        let obj = heap.plain();
        heap.insert(obj, "visible", 1);
        heap.define(obj, "hidden", Property::hidden(2));

        let iter = DataIterator::new(true, KeySort::Insertion);
        let children: Vec<_> = iter.iterate(&heap, &Value::Object(obj)).collect();

        assert_eq!(children.len(), 3);
        assert_eq!(children[1].name, "hidden");
        assert!(children[1].is_non_enumerable);
        assert_eq!(children[2].name, PROTO_NAME);
        assert_eq!(children[2].value, Value::Object(heap.object_prototype()));
        assert!(children[2].is_non_enumerable);
    }

    #[test]
    fn prototype_root_has_no_prototype_link() {
        let heap = Heap::new();
        let iter = DataIterator::new(true, KeySort::Insertion);
        let root = Value::Object(heap.object_prototype());

        assert!(!names(&iter, &heap, &root).contains(&PROTO_NAME.to_string()));
    }

    #[test]
    fn bare_object_links_to_null_prototype() {
        let mut heap = Heap::new();
        let obj = heap.bare();
        let iter = DataIterator::new(true, KeySort::Insertion);

        let children: Vec<_> = iter.iterate(&heap, &Value::Object(obj)).collect();
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].value, Value::Null);
    }

    #[test]
    fn restricted_properties_are_skipped() {
        let mut heap = Heap::new();
        let f = heap.function("f", 1);
        heap.define(f, "caller", Property::restricted("restricted function property"));
        heap.define(f, "arguments", Property::restricted("restricted function property"));
        heap.insert(f, "meta", "kept");

        let iter = DataIterator::new(true, KeySort::Insertion);
        assert_eq!(
            names(&iter, &heap, &Value::Object(f)),
            vec!["length", "name", "meta", PROTO_NAME]
        );
    }

    #[test]
    fn undefined_non_enumerable_values_are_skipped() {
        let mut heap = Heap::new();
        let obj = heap.plain();
        heap.define(obj, "nothing", Property::hidden(Value::Undefined));
        heap.insert(obj, "explicit", Value::Undefined);

        let iter = DataIterator::new(true, KeySort::Insertion);
        assert_eq!(
            names(&iter, &heap, &Value::Object(obj)),
            vec!["explicit", PROTO_NAME]
        );
    }

    #[test]
    fn array_shows_length_only_with_non_enumerable() {
        let mut heap = Heap::new();
        let arr = heap.array(vec![Value::from("a")]);

        let plain = DataIterator::default();
        assert_eq!(names(&plain, &heap, &Value::Object(arr)), vec!["0"]);

        let all = DataIterator::new(true, KeySort::Insertion);
        assert_eq!(
            names(&all, &heap, &Value::Object(arr)),
            vec!["0", "length", PROTO_NAME]
        );
    }

    #[test]
    fn map_entries_are_named_by_key() {
        let mut heap = Heap::new();
        let map = heap.map(vec![
            (Value::from("k"), Value::from(1)),
            (Value::from(7), Value::from(2)),
        ]);

        let iter = DataIterator::new(true, KeySort::Alphabetical);
        let children: Vec<_> = iter.iterate(&heap, &Value::Object(map)).collect();
        assert_eq!(children.len(), 2);
        assert_eq!(children[0].name, "k");
        assert_eq!(children[1].name, "7");
        assert_eq!(children[1].value, Value::from(2));
    }

    #[test]
    fn set_items_are_named_by_index_unless_pairs() {
        let mut heap = Heap::new();
        let pair = heap.array(vec![Value::from("key"), Value::from("v")]);
        let triple = heap.array(vec![Value::from(1), Value::from(2), Value::from(3)]);
        let set = heap.set(vec![Value::from("x"), Value::Object(pair), Value::Object(triple)]);

        let iter = DataIterator::default();
        assert_eq!(names(&iter, &heap, &Value::Object(set)), vec!["0", "key", "2"]);
    }

    #[test]
    fn empty_property_name_uses_marker() {
        let mut heap = Heap::new();
        let obj = heap.plain();
        heap.insert(obj, "", 1);

        let iter = DataIterator::default();
        assert_eq!(names(&iter, &heap, &Value::Object(obj)), vec![EMPTY_NAME]);
    }

    #[test]
    fn circular_object_terminates() {
        let mut heap = Heap::new();
        let x = heap.plain();
        heap.insert(x, "self", Value::Object(x));

        let iter = DataIterator::default();
        let children: Vec<_> = iter.iterate(&heap, &Value::Object(x)).collect();
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].value, Value::Object(x));

        let again: Vec<_> = iter.iterate(&heap, &children[0].value).collect();
        assert_eq!(again, children);
    }

    #[test]
    fn iteration_is_restartable_and_reflects_mutation() {
        let mut heap = Heap::new();
        let obj = heap.plain();
        heap.insert(obj, "a", 1);

        let iter = DataIterator::default();
        assert_eq!(names(&iter, &heap, &Value::Object(obj)), vec!["a"]);

        heap.insert(obj, "b", 2);
        assert_eq!(names(&iter, &heap, &Value::Object(obj)), vec!["a", "b"]);
    }

    #[test]
    fn child_lookup_by_name() {
        let mut heap = Heap::new();
        let obj = heap.plain();
        heap.insert(obj, "a", 1);

        let iter = DataIterator::default();
        assert_eq!(
            iter.child(&heap, &Value::Object(obj), "a").map(|c| c.value),
            Some(Value::from(1))
        );
        assert!(iter.child(&heap, &Value::Object(obj), "missing").is_none());
    }
}
