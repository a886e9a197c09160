use std::{fmt, iter, slice, vec};

/// A vector that has at least 1 element.
///
/// Every path command carries at least one argument group; repetitions of
/// the command without its letter land in `rest`.
#[derive(Debug, Clone, PartialEq)]
pub struct OneVec<T> {
    /// The first, required element in the `OneVec`.
    pub first: T,
    /// The second and subsequent elements in this `OneVec` (all optional).
    pub rest: Vec<T>,
}

impl<T> OneVec<T> {
    /// Create a `OneVec` from a single element.
    pub fn single(val: T) -> Self {
        Self {
            first: val,
            rest: vec![],
        }
    }

    /// Create a `OneVec` from a `Vec`, or `None` if it is empty.
    pub fn from_vec(mut v: Vec<T>) -> Option<Self> {
        if v.is_empty() {
            return None;
        }
        let first = v.remove(0);
        Some(OneVec { first, rest: v })
    }

    /// Append an element.
    pub fn push(&mut self, val: T) {
        self.rest.push(val);
    }

    /// Iterate over the values in this `OneVec`.
    ///
    /// The iterator is statically guaranteed to produce at least one element.
    pub fn iter(&self) -> iter::Chain<iter::Once<&T>, slice::Iter<'_, T>> {
        self.into_iter()
    }

    /// Splits the `OneVec` into the first element and the rest.
    pub fn split(&self) -> (&T, &[T]) {
        (&self.first, &self.rest)
    }

    /// Write out the vector with spaces between each element.
    pub(crate) fn write_spaced(
        &self,
        mut cb: impl FnMut(&T, &mut fmt::Formatter<'_>) -> fmt::Result,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        cb(&self.first, f)?;
        for v in &self.rest {
            write!(f, " ")?;
            cb(v, f)?;
        }
        Ok(())
    }
}

impl<'a, T> IntoIterator for &'a OneVec<T> {
    type IntoIter = iter::Chain<iter::Once<&'a T>, slice::Iter<'a, T>>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        iter::once(&self.first).chain(&self.rest)
    }
}

impl<T> IntoIterator for OneVec<T> {
    type IntoIter = iter::Chain<iter::Once<T>, vec::IntoIter<T>>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        iter::once(self.first).chain(self.rest)
    }
}

#[cfg(test)]
mod tests {
    use super::OneVec;

    #[test]
    fn from_vec() {
        assert!(OneVec::<u8>::from_vec(vec![]).is_none());
        let v = OneVec::from_vec(vec![1, 2, 3]).unwrap();
        assert_eq!(v.iter().count(), 3);
        assert_eq!(v.split(), (&1, &[2, 3][..]));
        assert_eq!(v.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
    }

    #[test]
    fn push() {
        let mut v = OneVec::single('a');
        v.push('b');
        assert_eq!(v.into_iter().collect::<String>(), "ab");
    }
}
