use std::ops::Index;
use std::slice;

use crate::ustr::UStr;
use crate::Error;

/// A growable, ordered list of [`UStr`] values.
///
/// The list tracks its capacity explicitly and grows only when an insert
/// finds `len() == capacity()`, doubling the capacity (or setting it to 1
/// from 0). Storage for the new capacity is reserved before any element
/// moves, so a failed allocation surfaces as
/// [`Error::AllocationFailed`](crate::Error::AllocationFailed) and leaves the
/// list untouched. Capacity never shrinks; removal only releases the removed
/// element.
///
/// Each element is owned exclusively by the list. Inserting moves a value in;
/// removing moves it back out.
#[derive(Debug)]
pub struct StringList {
    items: Vec<UStr>,
    capacity: usize,
}

impl StringList {
    /// An empty list with no allocated capacity.
    pub fn new() -> Self {
        StringList {
            items: Vec::new(),
            capacity: 0,
        }
    }

    /// An empty list with `capacity` slots allocated up front.
    pub fn with_capacity(capacity: usize) -> Self {
        StringList {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// A list holding copies of `strings`, in order, with
    /// `capacity() == strings.len()`.
    pub fn from_slice(strings: &[UStr]) -> Self {
        let mut list = Self::with_capacity(strings.len());
        list.items.extend(strings.iter().cloned());
        list
    }

    /// The number of live elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The number of allocated element slots.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn get(&self, index: usize) -> Option<&UStr> {
        self.items.get(index)
    }

    pub fn iter(&self) -> slice::Iter<'_, UStr> {
        self.items.iter()
    }

    /// Inserts `value` at `index`, shifting the elements at `[index, len)`
    /// one slot right. `index` may equal `len()`, which appends.
    ///
    /// Fails with `IndexOutOfRange` past the end and `AllocationFailed` if
    /// the list needed to grow and couldn't; the list is unchanged either
    /// way.
    pub fn insert(&mut self, index: usize, value: UStr) -> Result<(), Error> {
        if index > self.items.len() {
            return Err(Error::IndexOutOfRange);
        }
        self.grow_for_insert()?;
        self.items.insert(index, value);
        Ok(())
    }

    /// Appends `value` at the end of the list.
    pub fn push(&mut self, value: UStr) -> Result<(), Error> {
        let end = self.items.len();
        self.insert(end, value)
    }

    // Doubles the capacity (1 from 0) when the list is full. The reservation
    // happens before any mutation, so failure leaves the list as it was.
    fn grow_for_insert(&mut self) -> Result<(), Error> {
        if self.items.len() == self.capacity {
            let new_capacity = if self.capacity == 0 {
                1
            } else {
                self.capacity * 2
            };
            self.items
                .try_reserve_exact(new_capacity - self.items.len())?;
            self.capacity = new_capacity;
        }
        Ok(())
    }

    /// Removes and returns the element at `index`, shifting the elements at
    /// `[index + 1, len)` one slot left. Dropping the returned value
    /// releases it.
    ///
    /// Fails with `IndexOutOfRange` if `index >= len()`; the list is
    /// unchanged.
    pub fn remove(&mut self, index: usize) -> Result<UStr, Error> {
        if index >= self.items.len() {
            return Err(Error::IndexOutOfRange);
        }
        Ok(self.items.remove(index))
    }

    /// Splits `source` into the substrings between non-overlapping
    /// occurrences of `separator`, scanning left to right and matching
    /// byte-for-byte. The scan always advances past a consumed separator, so
    /// consecutive separators produce empty elements and a trailing
    /// separator produces a final empty element.
    ///
    /// An empty separator yields a one-element list holding a copy of the
    /// whole input. Only allocation can fail.
    pub fn split(source: &UStr, separator: &UStr) -> Result<StringList, Error> {
        let mut list = StringList::with_capacity(1);
        let bytes = source.as_bytes();
        let sep = separator.as_bytes();

        if sep.is_empty() {
            list.push(source.clone())?;
            return Ok(list);
        }

        let mut start = 0;
        let mut pos = 0;
        while pos + sep.len() <= bytes.len() {
            if bytes[pos..].starts_with(sep) {
                list.push(UStr::from_bytes(&bytes[start..pos]))?;
                pos += sep.len();
                start = pos;
            } else {
                pos += 1;
            }
        }
        // The final segment: everything after the last separator, or the
        // whole input if none matched.
        list.push(UStr::from_bytes(&bytes[start..]))?;
        Ok(list)
    }

    /// Joins the elements in order, inserting one copy of `separator`
    /// between each adjacent pair. An empty list yields the empty string; a
    /// single element comes back as a plain copy.
    pub fn join(&self, separator: &UStr) -> UStr {
        match self.items.as_slice() {
            [] => UStr::new(),
            [only] => only.clone(),
            items => {
                let total = items.iter().map(UStr::len_bytes).sum::<usize>()
                    + separator.len_bytes() * (items.len() - 1);
                let mut bytes = Vec::with_capacity(total);
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        bytes.extend_from_slice(separator.as_bytes());
                    }
                    bytes.extend_from_slice(item.as_bytes());
                }
                UStr::from_vec(bytes)
            }
        }
    }

    #[cfg(test)]
    fn check(&self) {
        assert!(self.items.len() <= self.capacity);
        assert!(self.items.capacity() >= self.capacity);
    }
}

impl Default for StringList {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for StringList {
    // Hand-rolled so the clone carries the same logical capacity, not just
    // enough room for the live elements.
    fn clone(&self) -> Self {
        let mut items = Vec::with_capacity(self.capacity);
        items.extend(self.items.iter().cloned());
        StringList {
            items,
            capacity: self.capacity,
        }
    }
}

impl PartialEq for StringList {
    // Capacity is a storage detail; equality is over the elements.
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl Eq for StringList {}

impl Index<usize> for StringList {
    type Output = UStr;

    fn index(&self, index: usize) -> &UStr {
        &self.items[index]
    }
}

impl<'a> IntoIterator for &'a StringList {
    type Item = &'a UStr;
    type IntoIter = slice::Iter<'a, UStr>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
