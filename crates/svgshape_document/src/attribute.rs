//! Resolved presentation attributes of a path.
use crate::{color::Color, transform::Transform};

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
/// The value of a resolved attribute
pub enum Value {
    /// Any value without a more specific representation
    String(String),
    /// A resolved `fill`, `stroke` or `color`
    Color(Color),
    /// A resolved `transform`
    Transform(Transform),
}

impl Value {
    /// Returns the string, if the value is a string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the color, if the value is a color
    pub fn as_color(&self) -> Option<&Color> {
        match self {
            Self::Color(color) => Some(color),
            _ => None,
        }
    }

    /// Returns the transform, if the value is a transform
    pub fn as_transform(&self) -> Option<&Transform> {
        match self {
            Self::Transform(transform) => Some(transform),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<Color> for Value {
    fn from(value: Color) -> Self {
        Self::Color(value)
    }
}

impl From<Transform> for Value {
    fn from(value: Transform) -> Self {
        Self::Transform(value)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
/// An insertion-ordered map of attribute names to values
pub struct AttributeMap(Vec<(String, Value)>);

impl AttributeMap {
    /// Creates an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value of the attribute
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0
            .iter()
            .find_map(|(key, value)| (key == name).then_some(value))
    }

    /// Returns whether the attribute is present
    pub fn contains_key(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Sets the attribute, keeping it's position if it was already present.
    ///
    /// Returns the previous value
    pub fn insert(&mut self, name: &str, value: impl Into<Value>) -> Option<Value> {
        let value = value.into();
        match self.0.iter_mut().find(|(key, _)| key == name) {
            Some((_, existing)) => Some(std::mem::replace(existing, value)),
            None => {
                self.0.push((name.to_string(), value));
                None
            }
        }
    }

    /// Removes the attribute, returning it's value
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        let index = self.0.iter().position(|(key, _)| key == name)?;
        Some(self.0.remove(index).1)
    }

    /// Iterates over each attribute in order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// The number of attributes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no attributes
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a AttributeMap {
    type Item = (&'a str, &'a Value);
    type IntoIter = Box<dyn Iterator<Item = Self::Item> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

impl<K: AsRef<str>, V: Into<Value>> FromIterator<(K, V)> for AttributeMap {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key.as_ref(), value);
        }
        map
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for AttributeMap {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[test]
fn insertion_order() {
    let mut map = AttributeMap::new();
    map.insert("fill", "red");
    map.insert("stroke", "blue");
    assert_eq!(map.insert("fill", "green"), Some(Value::from("red")));
    assert_eq!(
        map.iter().map(|(key, _)| key).collect::<Vec<_>>(),
        ["fill", "stroke"]
    );
    assert_eq!(map.remove("fill"), Some(Value::from("green")));
    assert!(!map.contains_key("fill"));
    assert_eq!(map.len(), 1);
}
