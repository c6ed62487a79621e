//! Object arena.
//!
//! The heap owns every object reachable from an inspected value. It mirrors the
//! parts of a dynamic object model the inspector cares about: container kind,
//! ordered own properties with an enumerable flag, properties that refuse to
//! be read, and a single prototype link per object.

use crate::error::AccessError;

use super::{format_number, ObjectId, Value};

/// What kind of container an object is.
#[derive(Debug, Clone, PartialEq)]
pub enum ObjectKind {
    /// Plain object or class instance
    Plain,
    /// Dense array; elements are exposed as index properties
    Array(Vec<Value>),
    /// Callable object
    Function { name: String },
    /// Keyed collection, iterated as `[key, value]` pairs
    Map(Vec<(Value, Value)>),
    /// Collection of items, iterated positionally
    Set(Vec<Value>),
    /// Any other iterable; 2-element array items are treated as pairs
    Iterable(Vec<Value>),
}

/// Storage of a single own property.
#[derive(Debug, Clone, PartialEq)]
pub enum Slot {
    Data(Value),
    /// Reading the property fails with the given reason
    Restricted(String),
}

/// An own property as stored on an object.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub slot: Slot,
    pub enumerable: bool,
}

impl Property {
    /// Enumerable data property
    pub fn data(value: impl Into<Value>) -> Self {
        Self {
            slot: Slot::Data(value.into()),
            enumerable: true,
        }
    }

    /// Non-enumerable data property
    pub fn hidden(value: impl Into<Value>) -> Self {
        Self {
            slot: Slot::Data(value.into()),
            enumerable: false,
        }
    }

    /// Non-enumerable property that fails on access
    pub fn restricted(reason: impl Into<String>) -> Self {
        Self {
            slot: Slot::Restricted(reason.into()),
            enumerable: false,
        }
    }

    /// Read the property value.
    pub fn read(&self, name: &str) -> Result<Value, AccessError> {
        match &self.slot {
            Slot::Data(value) => Ok(value.clone()),
            Slot::Restricted(reason) => Err(AccessError {
                property: name.to_string(),
                reason: reason.clone(),
            }),
        }
    }
}

/// Result of looking up an own property by name.
#[derive(Debug, Clone, PartialEq)]
pub struct OwnProperty {
    pub enumerable: bool,
    pub value: Result<Value, AccessError>,
}

/// A heap object.
#[derive(Debug, Clone, PartialEq)]
pub struct Object {
    pub kind: ObjectKind,
    properties: Vec<(String, Property)>,
    prototype: Option<ObjectId>,
    class_name: Option<String>,
}

impl Object {
    pub fn new(kind: ObjectKind, prototype: Option<ObjectId>) -> Self {
        Self {
            kind,
            properties: Vec::new(),
            prototype,
            class_name: None,
        }
    }

    pub fn prototype(&self) -> Option<ObjectId> {
        self.prototype
    }

    /// Constructor name used for display (`Point`, `Object`, ...)
    pub fn class_name(&self) -> Option<&str> {
        self.class_name.as_deref()
    }

    /// Own properties in storage (insertion) order, excluding array elements.
    pub fn properties(&self) -> &[(String, Property)] {
        &self.properties
    }

    fn property(&self, name: &str) -> Option<&Property> {
        self.properties
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, prop)| prop)
    }

    fn define(&mut self, name: String, property: Property) {
        if let Some(slot) = self.properties.iter_mut().find(|(key, _)| *key == name) {
            slot.1 = property;
        } else {
            self.properties.push((name, property));
        }
    }
}

/// Arena of objects plus the built-in prototype objects.
#[derive(Debug, Clone)]
pub struct Heap {
    objects: Vec<Object>,
    object_prototype: ObjectId,
    function_prototype: ObjectId,
    array_prototype: ObjectId,
}

impl Default for Heap {
    fn default() -> Self {
        Self::new()
    }
}

impl Heap {
    /// Create a heap seeded with the prototype chain roots.
    pub fn new() -> Self {
        let mut heap = Self {
            objects: Vec::new(),
            object_prototype: ObjectId(0),
            function_prototype: ObjectId(0),
            array_prototype: ObjectId(0),
        };

        let mut root = Object::new(ObjectKind::Plain, None);
        root.class_name = Some("Object".to_string());
        heap.object_prototype = heap.alloc(root);

        let function_proto = Object::new(
            ObjectKind::Function {
                name: String::new(),
            },
            Some(heap.object_prototype),
        );
        heap.function_prototype = heap.alloc(function_proto);

        let mut array_proto =
            Object::new(ObjectKind::Array(Vec::new()), Some(heap.object_prototype));
        array_proto.class_name = Some("Array".to_string());
        heap.array_prototype = heap.alloc(array_proto);

        for name in ["constructor", "hasOwnProperty", "toString", "valueOf"] {
            let f = heap.function(if name == "constructor" { "Object" } else { name }, 0);
            heap.define(heap.object_prototype, name, Property::hidden(f));
        }
        for name in ["constructor", "push", "map", "filter"] {
            let f = heap.function(if name == "constructor" { "Array" } else { name }, 1);
            heap.define(heap.array_prototype, name, Property::hidden(f));
        }
        for name in ["apply", "bind", "call"] {
            let f = heap.function(name, 1);
            heap.define(heap.function_prototype, name, Property::hidden(f));
        }

        heap
    }

    /// Store an object and return its handle.
    pub fn alloc(&mut self, object: Object) -> ObjectId {
        self.objects.push(object);
        ObjectId(self.objects.len() - 1)
    }

    pub fn get(&self, id: ObjectId) -> Option<&Object> {
        self.objects.get(id.0)
    }

    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut Object> {
        self.objects.get_mut(id.0)
    }

    /// Number of objects, built-ins included.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// The object at the top of every prototype chain.
    pub fn object_prototype(&self) -> ObjectId {
        self.object_prototype
    }

    pub fn is_prototype_root(&self, id: ObjectId) -> bool {
        id == self.object_prototype
    }

    /// New empty plain object.
    pub fn plain(&mut self) -> ObjectId {
        self.alloc(Object::new(ObjectKind::Plain, Some(self.object_prototype)))
    }

    /// New plain object with no prototype at all.
    pub fn bare(&mut self) -> ObjectId {
        self.alloc(Object::new(ObjectKind::Plain, None))
    }

    /// New plain object tagged with a class name.
    pub fn instance(&mut self, class_name: &str) -> ObjectId {
        let id = self.plain();
        self.set_class_name(id, class_name);
        id
    }

    pub fn array(&mut self, items: Vec<Value>) -> ObjectId {
        self.alloc(Object::new(ObjectKind::Array(items), Some(self.array_prototype)))
    }

    pub fn map(&mut self, entries: Vec<(Value, Value)>) -> ObjectId {
        self.alloc(Object::new(ObjectKind::Map(entries), Some(self.object_prototype)))
    }

    pub fn set(&mut self, items: Vec<Value>) -> ObjectId {
        self.alloc(Object::new(ObjectKind::Set(items), Some(self.object_prototype)))
    }

    pub fn iterable(&mut self, items: Vec<Value>) -> ObjectId {
        self.alloc(Object::new(
            ObjectKind::Iterable(items),
            Some(self.object_prototype),
        ))
    }

    /// New function object with the usual non-enumerable `length` and `name`.
    pub fn function(&mut self, name: &str, arity: usize) -> ObjectId {
        let mut object = Object::new(
            ObjectKind::Function {
                name: name.to_string(),
            },
            Some(self.function_prototype),
        );
        object.define("length".to_string(), Property::hidden(Value::Number(arity as f64)));
        object.define("name".to_string(), Property::hidden(name));
        self.alloc(object)
    }

    /// Define or replace an own property.
    pub fn define(&mut self, id: ObjectId, name: impl Into<String>, property: Property) {
        if let Some(object) = self.get_mut(id) {
            object.define(name.into(), property);
        }
    }

    /// Define or replace an enumerable data property.
    pub fn insert(&mut self, id: ObjectId, name: impl Into<String>, value: impl Into<Value>) {
        self.define(id, name, Property::data(value));
    }

    /// Append an item to an array, set or iterable.
    pub fn push(&mut self, id: ObjectId, value: impl Into<Value>) {
        let value = value.into();
        if let Some(object) = self.get_mut(id) {
            match &mut object.kind {
                ObjectKind::Array(items) | ObjectKind::Set(items) | ObjectKind::Iterable(items) => {
                    items.push(value)
                }
                _ => {}
            }
        }
    }

    pub fn set_prototype(&mut self, id: ObjectId, prototype: Option<ObjectId>) {
        if let Some(object) = self.get_mut(id) {
            object.prototype = prototype;
        }
    }

    pub fn set_class_name(&mut self, id: ObjectId, class_name: &str) {
        if let Some(object) = self.get_mut(id) {
            object.class_name = Some(class_name.to_string());
        }
    }

    /// Own property names in host order.
    ///
    /// Array indices first, then integer-like keys ascending, then the
    /// remaining keys in insertion order. Arrays end with `length`.
    pub fn own_keys(&self, id: ObjectId) -> Vec<String> {
        let Some(object) = self.get(id) else {
            return Vec::new();
        };

        let mut keys = Vec::with_capacity(object.properties.len());
        let elements = match &object.kind {
            ObjectKind::Array(items) => items.len(),
            _ => 0,
        };
        keys.extend((0..elements).map(|i| i.to_string()));

        // Indices inside the element range are already listed.
        let mut indexed: Vec<(u32, &str)> = object
            .properties
            .iter()
            .filter_map(|(key, _)| array_index(key).map(|i| (i, key.as_str())))
            .filter(|(i, _)| *i as usize >= elements)
            .collect();
        indexed.sort_by_key(|(i, _)| *i);
        keys.extend(indexed.into_iter().map(|(_, key)| key.to_string()));
        keys.extend(
            object
                .properties
                .iter()
                .filter(|(key, _)| array_index(key).is_none())
                .map(|(key, _)| key.clone()),
        );

        if matches!(object.kind, ObjectKind::Array(_)) && object.property("length").is_none() {
            keys.push("length".to_string());
        }
        keys
    }

    /// Look up an own property, including array elements and `length`.
    pub fn own_property(&self, id: ObjectId, name: &str) -> Option<OwnProperty> {
        let object = self.get(id)?;

        if let Some(property) = object.property(name) {
            return Some(OwnProperty {
                enumerable: property.enumerable,
                value: property.read(name),
            });
        }

        if let ObjectKind::Array(items) = &object.kind {
            if name == "length" {
                return Some(OwnProperty {
                    enumerable: false,
                    value: Ok(Value::Number(items.len() as f64)),
                });
            }
            let item = array_index(name).and_then(|i| items.get(i as usize))?;
            return Some(OwnProperty {
                enumerable: true,
                value: Ok(item.clone()),
            });
        }

        None
    }

    /// Host string conversion, used to name map entries.
    ///
    /// Arrays join their elements one level deep; nested objects are not
    /// followed, so cyclic arrays cannot recurse.
    pub fn to_key_string(&self, value: &Value) -> String {
        match value {
            Value::Object(id) => match self.get(*id).map(|o| &o.kind) {
                Some(ObjectKind::Array(items)) => items
                    .iter()
                    .map(|item| match item {
                        Value::Undefined | Value::Null => String::new(),
                        Value::Object(_) => "[object Object]".to_string(),
                        primitive => self.to_key_string(primitive),
                    })
                    .collect::<Vec<_>>()
                    .join(","),
                Some(ObjectKind::Function { name }) => format!("function {}() {{}}", name),
                _ => "[object Object]".to_string(),
            },
            Value::Undefined => "undefined".to_string(),
            Value::Null => "null".to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => format_number(*n),
            Value::String(s) => s.clone(),
        }
    }
}

/// Canonical array index (`"0"`, `"17"`, but not `"01"` or `"-1"`).
fn array_index(key: &str) -> Option<u32> {
    if key.is_empty() || (key.len() > 1 && key.starts_with('0')) {
        return None;
    }
    if !key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    key.parse::<u32>().ok().filter(|i| *i != u32::MAX)
}
