//! Ordered element storage for RJSON arrays.
//!
//! [`ValueArray`] is a `Vec<Value>` that refuses [`Value::Void`]: pushing Void is a
//! no-op, collecting from an iterator skips Void elements, and a Void written
//! through [`ValueArray::get_mut`] removes the element when the handle is dropped.

use crate::Value;
use std::ops::{Deref, DerefMut};

/// An ordered sequence of RJSON values with no Void elements.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ValueArray(Vec<Value>);

impl ValueArray {
    #[must_use]
    pub fn new() -> Self {
        ValueArray(Vec::new())
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        ValueArray(Vec::with_capacity(capacity))
    }

    /// Appends `value` unless it is Void.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_rjson::{Value, ValueArray};
    ///
    /// let mut array = ValueArray::new();
    /// array.push(Value::from(1));
    /// array.push(Value::Void);
    /// assert_eq!(array.len(), 1);
    /// ```
    pub fn push(&mut self, value: Value) {
        if !value.is_void() {
            self.0.push(value);
        }
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.0.get(index)
    }

    /// Mutable access to an element. If it is Void when the handle is dropped,
    /// the element is removed and later elements shift left.
    pub fn get_mut(&mut self, index: usize) -> Option<ElementMut<'_>> {
        if index < self.0.len() {
            Some(ElementMut {
                elements: &mut self.0,
                index,
            })
        } else {
            None
        }
    }

    /// Removes and returns the element at `index`, shifting later elements left.
    pub fn remove(&mut self, index: usize) -> Option<Value> {
        if index < self.0.len() {
            Some(self.0.remove(index))
        } else {
            None
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.0.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Value] {
        &self.0
    }
}

/// A mutable handle to one [`ValueArray`] element, returned by [`ValueArray::get_mut`].
pub struct ElementMut<'a> {
    elements: &'a mut Vec<Value>,
    index: usize,
}

impl Deref for ElementMut<'_> {
    type Target = Value;

    fn deref(&self) -> &Value {
        &self.elements[self.index]
    }
}

impl DerefMut for ElementMut<'_> {
    fn deref_mut(&mut self) -> &mut Value {
        &mut self.elements[self.index]
    }
}

impl Drop for ElementMut<'_> {
    fn drop(&mut self) {
        if self.elements[self.index].is_void() {
            self.elements.remove(self.index);
        }
    }
}

impl From<Vec<Value>> for ValueArray {
    fn from(values: Vec<Value>) -> Self {
        values.into_iter().collect()
    }
}

impl From<ValueArray> for Vec<Value> {
    fn from(array: ValueArray) -> Self {
        array.0
    }
}

impl IntoIterator for ValueArray {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValueArray {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<Value> for ValueArray {
    fn from_iter<T: IntoIterator<Item = Value>>(iter: T) -> Self {
        ValueArray(iter.into_iter().filter(|value| !value.is_void()).collect())
    }
}

impl Extend<Value> for ValueArray {
    fn extend<T: IntoIterator<Item = Value>>(&mut self, iter: T) {
        for value in iter {
            self.push(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_vec_drops_void() {
        let array = ValueArray::from(vec![Value::Void, Value::Null, Value::Void, Value::True]);
        assert_eq!(array.as_slice(), &[Value::Null, Value::True]);
    }

    #[test]
    fn test_remove_out_of_bounds() {
        let mut array: ValueArray = vec![Value::from(1), Value::from(2)].into();
        assert_eq!(array.remove(5), None);
        assert_eq!(array.remove(0), Some(Value::from(1)));
        assert_eq!(array.len(), 1);
    }

    #[test]
    fn test_void_through_get_mut_removes_element() {
        let mut array: ValueArray = vec![Value::from(1), Value::from(2), Value::from(3)].into();
        if let Some(mut element) = array.get_mut(1) {
            *element = Value::Void;
        }
        assert_eq!(array.as_slice(), &[Value::from(1), Value::from(3)]);

        if let Some(mut element) = array.get_mut(0) {
            *element = Value::Null;
        }
        assert_eq!(array.get(0), Some(&Value::Null));
        assert!(array.get_mut(2).is_none());
    }

    #[test]
    fn test_extend_skips_void() {
        let mut array = ValueArray::new();
        array.extend(vec![Value::from("a"), Value::Void, Value::from("b")]);
        let collected: Vec<_> = array.iter().filter_map(Value::as_str).collect();
        assert_eq!(collected, vec!["a", "b"]);
    }
}
