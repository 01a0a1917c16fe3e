use crate::{
    error::{Error, Result},
    pct_enc::{self, table, Table},
};
use alloc::{collections::BTreeMap, string::String, vec::Vec};
use core::slice;

/// The values of one [`Query`] key, in the order they were encountered.
///
/// # Examples
///
/// ```
/// use canon_uri::{component::QueryValue, error::Error};
///
/// let mut value = QueryValue::from("1");
/// assert_eq!(value.try_to_string()?, "1");
///
/// value.push("2");
/// assert!(value.iter().eq(["1", "2"]));
/// assert_eq!(value.try_to_string(), Err(Error::InvalidContainer));
///
/// assert_eq!(QueryValue::new().try_to_string(), Err(Error::EmptyContainer));
/// # Ok::<_, canon_uri::error::Error>(())
/// ```
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct QueryValue {
    values: Vec<String>,
}

impl QueryValue {
    /// Creates a value list with no values, as for a bare key.
    #[must_use]
    pub const fn new() -> QueryValue {
        QueryValue { values: Vec::new() }
    }

    /// Appends a decoded value.
    pub fn push(&mut self, value: impl Into<String>) {
        self.values.push(value.into());
    }

    /// Returns the number of values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Checks whether there are no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the value at the given index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.values.get(index).map(String::as_str)
    }

    /// Returns an iterator over the values.
    pub fn iter(&self) -> Values<'_> {
        Values {
            inner: self.values.iter(),
        }
    }

    /// Returns the sole value as a string slice.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyContainer`] if there are no values and
    /// [`Error::InvalidContainer`] if there is more than one.
    pub fn as_single(&self) -> Result<&str> {
        match self.values.as_slice() {
            [value] => Ok(value),
            [] => Err(Error::EmptyContainer),
            _ => Err(Error::InvalidContainer),
        }
    }

    /// Returns a copy of the sole value.
    ///
    /// # Errors
    ///
    /// Same as [`as_single`](Self::as_single).
    pub fn try_to_string(&self) -> Result<String> {
        self.as_single().map(String::from)
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        QueryValue {
            values: alloc::vec![value],
        }
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        QueryValue::from(String::from(value))
    }
}

impl<S: Into<String>> FromIterator<S> for QueryValue {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        QueryValue {
            values: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a QueryValue {
    type Item = &'a str;
    type IntoIter = Values<'a>;

    fn into_iter(self) -> Values<'a> {
        self.iter()
    }
}

/// An iterator over the values of a [`QueryValue`].
///
/// This struct is created by [`QueryValue::iter`].
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Values<'a> {
    inner: slice::Iter<'a, String>,
}

impl<'a> Iterator for Values<'a> {
    type Item = &'a str;

    #[inline]
    fn next(&mut self) -> Option<&'a str> {
        self.inner.next().map(String::as_str)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Values<'_> {}

/// A [query] component, as an ordered mapping from decoded keys to their values.
///
/// Keys are unique and kept in insertion order, which is the order used
/// when serializing. Entries are separated by a configurable delimiter,
/// `&` by default.
///
/// Serializing emits a bare key for a key with no values and one
/// `key=value` pair per value otherwise, with the delimiter between
/// every two pairs.
///
/// [query]: https://datatracker.ietf.org/doc/html/rfc2396#section-3.4
///
/// # Examples
///
/// ```
/// use canon_uri::component::Query;
///
/// let query = Query::parse("?a=1&a=2&b")?;
/// assert!(query.get("a").unwrap().iter().eq(["1", "2"]));
/// assert!(query.get("b").unwrap().is_empty());
/// assert_eq!(query.to_string(), "?a=1&a=2&b");
///
/// let query = Query::parse_with_delimiter("x=%C3%A9;y", b';')?;
/// assert_eq!(query.get("x").unwrap().as_single()?, "é");
/// assert_eq!(query.to_string(), "?x=%C3%A9;y");
/// # Ok::<_, canon_uri::error::Error>(())
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Query {
    entries: Vec<(String, QueryValue)>,
    // Position of each key in `entries`.
    index: BTreeMap<String, usize>,
    delimiter: u8,
}

impl Default for Query {
    fn default() -> Self {
        Query::new()
    }
}

// Bytes the encoder leaves as is, plus the key-value separator.
const NON_DELIMITERS: Table = table::UNRESERVED.or(Table::new(b"="));

impl Query {
    /// The default delimiter between entries.
    pub const DEFAULT_DELIMITER: u8 = b'&';

    /// Creates an empty query with the default delimiter.
    #[must_use]
    pub const fn new() -> Query {
        Query::with_delimiter(Query::DEFAULT_DELIMITER)
    }

    /// Checks whether a byte can delimit entries.
    ///
    /// A delimiter must be an ASCII byte that always comes out
    /// percent-encoded inside keys and values, so that the serialized
    /// query splits back into the same entries. This rules out `%`, `=`,
    /// letters, digits and `-_.~`.
    ///
    /// # Examples
    ///
    /// ```
    /// use canon_uri::component::Query;
    ///
    /// assert!(Query::is_valid_delimiter(b'&'));
    /// assert!(Query::is_valid_delimiter(b';'));
    /// assert!(!Query::is_valid_delimiter(b'.'));
    /// assert!(!Query::is_valid_delimiter(b'='));
    /// ```
    #[must_use]
    pub const fn is_valid_delimiter(delimiter: u8) -> bool {
        delimiter.is_ascii() && delimiter != b'%' && !NON_DELIMITERS.allows_ascii(delimiter)
    }

    /// Creates an empty query with the given delimiter.
    ///
    /// # Panics
    ///
    /// Panics if the delimiter is not [valid](Self::is_valid_delimiter).
    #[must_use]
    pub const fn with_delimiter(delimiter: u8) -> Query {
        assert!(
            Query::is_valid_delimiter(delimiter),
            "invalid query delimiter"
        );
        Query {
            entries: Vec::new(),
            index: BTreeMap::new(),
            delimiter,
        }
    }

    /// Parses a query from a string slice with the default delimiter.
    ///
    /// See [`assign`](Self::assign) for the parsing rules.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a key or value fails to [decode](pct_enc::decode).
    pub fn parse(s: &str) -> Result<Query> {
        Query::parse_with_delimiter(s, Query::DEFAULT_DELIMITER)
    }

    /// Parses a query from a string slice with the given delimiter.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a key or value fails to [decode](pct_enc::decode).
    ///
    /// # Panics
    ///
    /// Panics if the delimiter is not [valid](Self::is_valid_delimiter).
    pub fn parse_with_delimiter(s: &str, delimiter: u8) -> Result<Query> {
        let mut query = Query::with_delimiter(delimiter);
        query.assign(s)?;
        Ok(query)
    }

    /// Replaces all entries with those parsed from a string slice.
    ///
    /// A leading `?` is skipped, and the rest is split on the delimiter.
    /// Each entry is split at the first `=` into a key and a value, both
    /// percent-decoded. A value for an existing key is appended to its
    /// values. An entry without `=` is a bare key, which gets no values if
    /// new and leaves the existing values untouched otherwise. Empty entries
    /// are skipped.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a key or value fails to [decode](pct_enc::decode),
    /// in which case the query is left unchanged.
    pub fn assign(&mut self, s: &str) -> Result<()> {
        let mut query = Query::with_delimiter(self.delimiter);
        let s = s.strip_prefix('?').unwrap_or(s);
        for entry in s.split(self.delimiter as char) {
            query.parse_entry(entry)?;
        }
        *self = query;
        Ok(())
    }

    fn parse_entry(&mut self, entry: &str) -> Result<()> {
        if entry.is_empty() {
            return Ok(());
        }

        let (key, value) = match entry.split_once('=') {
            Some((key, value)) => (key, Some(value)),
            None => (entry, None),
        };
        let key = pct_enc::decode(key)?;
        let value = value.map(pct_enc::decode).transpose()?;

        if let Some(values) = self.get_mut(&key) {
            if let Some(value) = value {
                values.push(value);
            }
            return Ok(());
        }

        self.push_entry(key, value.map(QueryValue::from).unwrap_or_default());
        Ok(())
    }

    fn push_entry(&mut self, key: String, value: QueryValue) {
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, value));
    }

    /// Returns the delimiter between entries.
    #[must_use]
    pub fn delimiter(&self) -> u8 {
        self.delimiter
    }

    /// Sets the delimiter between entries.
    ///
    /// # Panics
    ///
    /// Panics if the delimiter is not [valid](Self::is_valid_delimiter).
    pub fn set_delimiter(&mut self, delimiter: u8) {
        assert!(
            Query::is_valid_delimiter(delimiter),
            "invalid query delimiter"
        );
        self.delimiter = delimiter;
    }

    /// Returns the values of a key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        let &i = self.index.get(key)?;
        Some(&self.entries[i].1)
    }

    /// Returns the values of a key, mutably.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut QueryValue> {
        let &i = self.index.get(key)?;
        Some(&mut self.entries[i].1)
    }

    /// Checks whether the query contains a key.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Sets the values of a key, returning the old values if present.
    ///
    /// A new key is placed last; an existing key keeps its position.
    pub fn insert(&mut self, key: impl Into<String>, value: QueryValue) -> Option<QueryValue> {
        let key = key.into();
        match self.get_mut(&key) {
            Some(values) => Some(core::mem::replace(values, value)),
            None => {
                self.push_entry(key, value);
                None
            }
        }
    }

    /// Appends a value to a key, creating the key if absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use canon_uri::component::Query;
    ///
    /// let mut query = Query::new();
    /// query.append("q", "rust uri");
    /// query.append("page", "2");
    /// query.append("q", "parser");
    /// assert_eq!(query.to_string(), "?q=rust%20uri&q=parser&page=2");
    /// ```
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        match self.get_mut(&key) {
            Some(values) => values.push(value),
            None => self.push_entry(key, QueryValue::from(value.into())),
        }
    }

    /// Removes a key, returning its values if present.
    ///
    /// The keys after it move up by one, which takes linear time.
    pub fn remove(&mut self, key: &str) -> Option<QueryValue> {
        let i = self.index.remove(key)?;
        for pos in self.index.values_mut() {
            if *pos > i {
                *pos -= 1;
            }
        }
        Some(self.entries.remove(i).1)
    }

    /// Returns the number of keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Checks whether the query has no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes all entries, keeping the delimiter.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
    }

    /// Returns an iterator over the keys and their values, in insertion order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    /// Returns an iterator over the keys, in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.iter().map(|(k, _)| k)
    }
}

/// An iterator over the entries of a [`Query`].
///
/// This struct is created by [`Query::iter`].
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a> {
    inner: slice::Iter<'a, (String, QueryValue)>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a QueryValue);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k.as_str(), v))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a Query {
    type Item = (&'a str, &'a QueryValue);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}
