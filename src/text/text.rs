use std::borrow::Borrow;
use std::convert::Infallible;
use std::fmt::{self, Debug, Display, Formatter};
use std::iter;
use std::ops::{Add, AddAssign, Deref, Range};
use std::str::FromStr;

use crate::collections::contiguous::Vector;
use crate::collections::ordered::OrderedMap;
use crate::util::error::IndexOutOfBounds;
use crate::util::result::ResultExtension;

/// A growable UTF-8 string, backed by a [`String`].
///
/// Positions passed to and returned from Text's methods are byte offsets, exactly as they are for
/// [`str`], so they must fall on character boundaries. The exceptions are
/// [`char_at`](Text::char_at) and [`set_char_at`](Text::set_char_at), which address characters by
/// their index, and are bounds-checked against [`char_count`](Text::char_count).
///
/// Lengths passed to methods like [`substring`](Text::substring) are clamped to the end of the
/// Text, so `usize::MAX` can be used to mean "everything after `pos`".
///
/// Text dereferences to a [`str`], so the rest of the read-only string API is available directly.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Text {
    pub(crate) inner: String,
}

impl Text {
    /// Creates a new, empty Text.
    pub const fn new() -> Text {
        Text {
            inner: String::new(),
        }
    }

    /// Creates a Text made of `count` copies of `c`.
    ///
    /// # Examples
    /// ```
    /// # use ergo_std::text::Text;
    /// assert_eq!(Text::repeat('h', 3), "hhh");
    /// ```
    pub fn repeat(c: char, count: usize) -> Text {
        iter::repeat_n(c, count).collect()
    }

    /// Returns the contents as a string slice.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Returns a copy of the contents as a [`String`].
    pub fn get_string(&self) -> String {
        self.inner.clone()
    }

    /// Consumes the Text, returning the underlying [`String`].
    pub fn into_string(self) -> String {
        self.inner
    }

    /// Returns the length of the Text in bytes.
    pub fn length(&self) -> usize {
        self.inner.len()
    }

    /// Returns the number of characters in the Text.
    pub fn char_count(&self) -> usize {
        self.inner.chars().count()
    }

    /// Returns true if the Text has a length of 0.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Removes all contents from the Text.
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Returns the character at the provided character index.
    ///
    /// # Panics
    /// Panics if the index is not less than the number of characters.
    #[track_caller]
    pub fn char_at(&self, index: usize) -> char {
        self.try_char_at(index)
            .ok_or_else(|| self.out_of_bounds(index))
            .throw()
    }

    /// Returns the character at the provided character index, or [`None`] if out of bounds.
    pub fn try_char_at(&self, index: usize) -> Option<char> {
        self.inner.chars().nth(index)
    }

    /// Replaces the character at the provided character index with `c`.
    ///
    /// # Panics
    /// Panics if the index is not less than the number of characters.
    ///
    /// # Examples
    /// ```
    /// # use ergo_std::text::Text;
    /// let mut text = Text::from("héllo");
    /// text.set_char_at(1, 'e');
    /// assert_eq!(text, "hello");
    /// ```
    #[track_caller]
    pub fn set_char_at(&mut self, index: usize, c: char) {
        let range = self
            .char_range(index)
            .ok_or_else(|| self.out_of_bounds(index))
            .throw();
        self.inner.replace_range(range, c.encode_utf8(&mut [0; 4]));
    }

    /// Appends `value` to the end of the Text.
    pub fn append<S: AsRef<str>>(&mut self, value: S) {
        self.inner.push_str(value.as_ref());
    }

    /// Appends a single character to the end of the Text.
    pub fn append_char(&mut self, c: char) {
        self.inner.push(c);
    }

    /// Appends `value` to the end of the Text, returning self to allow chaining.
    ///
    /// # Examples
    /// ```
    /// # use ergo_std::text::Text;
    /// let mut text = Text::from("Hello");
    /// text.append_and_return(", ").append_and_return("World!");
    /// assert_eq!(text, "Hello, World!");
    /// ```
    pub fn append_and_return<S: AsRef<str>>(&mut self, value: S) -> &mut Text {
        self.append(value);
        self
    }

    /// Inserts `value` at the byte offset `pos`.
    ///
    /// # Panics
    /// Panics if `pos` is past the end of the Text or not on a character boundary.
    #[track_caller]
    pub fn insert(&mut self, pos: usize, value: &str) {
        self.inner.insert_str(pos, value);
    }

    /// Removes up to `len` bytes starting at `pos`.
    ///
    /// # Panics
    /// Panics if `pos` is past the end of the Text or either end of the removed range isn't on a
    /// character boundary.
    #[track_caller]
    pub fn remove(&mut self, pos: usize, len: usize) {
        let range = self.clamped(pos, len);
        self.inner.replace_range(range, "");
    }

    /// Replaces up to `len` bytes starting at `pos` with `value`.
    ///
    /// # Panics
    /// Panics if `pos` is past the end of the Text or either end of the replaced range isn't on a
    /// character boundary.
    #[track_caller]
    pub fn replace_range(&mut self, pos: usize, len: usize, value: &str) {
        let range = self.clamped(pos, len);
        self.inner.replace_range(range, value);
    }

    /// Replaces every non-overlapping occurrence of `from` with `to`, scanning from the start. An
    /// empty `from` matches nothing.
    ///
    /// # Examples
    /// ```
    /// # use ergo_std::text::Text;
    /// let mut text = Text::from("one fish two fish");
    /// text.replace_all("fish", "cat");
    /// assert_eq!(text, "one cat two cat");
    /// ```
    pub fn replace_all(&mut self, from: &str, to: &str) {
        if !from.is_empty() && self.inner.contains(from) {
            self.inner = self.inner.replace(from, to);
        }
    }

    /// Returns a new Text containing up to `len` bytes starting at `pos`.
    ///
    /// # Panics
    /// Panics if `pos` is past the end of the Text or either end of the range isn't on a character
    /// boundary.
    #[track_caller]
    pub fn substring(&self, pos: usize, len: usize) -> Text {
        Text::from(&self.inner[self.clamped(pos, len)])
    }

    /// Returns the byte offset of the first occurrence of `pattern` at or after `from`.
    pub fn find(&self, pattern: &str, from: usize) -> Option<usize> {
        self.inner.get(from..)?.find(pattern).map(|i| i + from)
    }

    /// Returns the byte offset of the first occurrence of `c` at or after `from`.
    pub fn find_char(&self, c: char, from: usize) -> Option<usize> {
        self.inner.get(from..)?.find(c).map(|i| i + from)
    }

    /// Returns the byte offset of the last occurrence of `pattern`.
    pub fn find_last(&self, pattern: &str) -> Option<usize> {
        self.inner.rfind(pattern)
    }

    /// Returns the byte offset of the last occurrence of `c`.
    pub fn find_last_char(&self, c: char) -> Option<usize> {
        self.inner.rfind(c)
    }

    /// Returns true if `pattern` occurs anywhere in the Text.
    pub fn contains(&self, pattern: &str) -> bool {
        self.inner.contains(pattern)
    }

    /// Returns true if `c` occurs anywhere in the Text.
    pub fn contains_char(&self, c: char) -> bool {
        self.inner.contains(c)
    }

    /// Returns true if the Text begins with `prefix`.
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.inner.starts_with(prefix)
    }

    /// Returns true if the Text ends with `suffix`.
    pub fn ends_with(&self, suffix: &str) -> bool {
        self.inner.ends_with(suffix)
    }

    /// Returns a copy with all ASCII letters converted to upper case. Other characters are left
    /// untouched, so byte offsets remain valid.
    pub fn to_upper_case(&self) -> Text {
        Text::from(self.inner.to_ascii_uppercase())
    }

    /// Returns a copy with all ASCII letters converted to lower case. Other characters are left
    /// untouched, so byte offsets remain valid.
    pub fn to_lower_case(&self) -> Text {
        Text::from(self.inner.to_ascii_lowercase())
    }

    /// Returns a copy without leading or trailing whitespace.
    pub fn trim(&self) -> Text {
        Text::from(self.inner.trim())
    }

    /// Returns a copy without leading whitespace.
    pub fn ltrim(&self) -> Text {
        Text::from(self.inner.trim_start())
    }

    /// Returns a copy without trailing whitespace.
    pub fn rtrim(&self) -> Text {
        Text::from(self.inner.trim_end())
    }

    /// Splits the Text on every occurrence of `delimiter`. Empty segments are kept, so the result
    /// always has one more segment than there are delimiters. An empty delimiter doesn't split.
    ///
    /// # Examples
    /// ```
    /// # use ergo_std::text::Text;
    /// let text = Text::from("a,b,,c");
    /// assert_eq!(text.split(","), ["a", "b", "", "c"]);
    /// ```
    pub fn split(&self, delimiter: &str) -> Vector<Text> {
        self.split_by_token(delimiter, false)
    }

    /// Splits the Text on every occurrence of `token`, optionally trimming each segment.
    pub fn split_by_token(&self, token: &str, apply_trim: bool) -> Vector<Text> {
        let segment = |s: &str| Text::from(if apply_trim { s.trim() } else { s });

        if token.is_empty() {
            return Vector::from([segment(self.inner.as_str())]);
        }

        self.inner.split(token).map(segment).collect()
    }

    /// Parses the Text as a list of key-value pairs.
    ///
    /// The Text is split on `separator_token` and each trimmed segment is split on the first
    /// occurrence of `split_token`, giving a trimmed key and value. A segment which doesn't contain
    /// `split_token` (which is always the case if it is empty) becomes both the key and the value.
    /// Segments that are empty after trimming are skipped in that case. An empty `separator_token`
    /// produces an empty map.
    ///
    /// When a key appears more than once, the last value wins.
    ///
    /// # Examples
    /// ```
    /// # use ergo_std::text::Text;
    /// let text = Text::from("name=John;age=30");
    ///
    /// let map = text.to_map("=", ";");
    /// assert_eq!(map.get_keys(), ["age", "name"]);
    /// assert_eq!(map.get_values(), ["30", "John"]);
    ///
    /// let map = text.to_map("", ";");
    /// assert_eq!(map.get_keys(), ["age=30", "name=John"]);
    ///
    /// assert!(text.to_map("=", "").is_empty());
    /// ```
    pub fn to_map(&self, split_token: &str, separator_token: &str) -> OrderedMap<Text, Text> {
        let mut result = OrderedMap::new();

        if separator_token.is_empty() {
            return result;
        }

        for segment in self.split_by_token(separator_token, true) {
            let pair = match split_token {
                "" => None,
                token => segment.inner.split_once(token),
            };

            match pair {
                Some((key, value)) => {
                    result.insert(Text::from(key.trim()), Text::from(value.trim()));
                },
                None if segment.is_empty() => {
                    log::trace!("Skipping empty segment in {:?}", self.inner);
                },
                None => {
                    result.insert(segment.clone(), segment);
                },
            }
        }

        result
    }

    /// Counts the occurrences of each distinct character.
    ///
    /// # Examples
    /// ```
    /// # use ergo_std::text::Text;
    /// let counts = Text::from("hello").count_characters();
    /// assert_eq!(counts.get_entries(), [('e', 1), ('h', 1), ('l', 2), ('o', 1)]);
    /// ```
    pub fn count_characters(&self) -> OrderedMap<char, usize> {
        let mut counts = OrderedMap::new();
        for c in self.inner.chars() {
            *counts.get_or_insert_default(c) += 1;
        }
        counts
    }

    /// Counts the occurrences of each distinct whitespace-delimited word.
    pub fn get_word_frequencies(&self) -> OrderedMap<Text, usize> {
        let mut counts = OrderedMap::new();
        for word in self.inner.split_whitespace() {
            *counts.get_or_insert_default(Text::from(word)) += 1;
        }
        counts
    }

    /// Splits the Text into a Vector with one single-character Text per character.
    pub fn to_string_vector(&self) -> Vector<Text> {
        self.inner.chars().map(Text::from).collect()
    }

    /// Collects the characters of the Text into a Vector.
    pub fn to_char_vector(&self) -> Vector<char> {
        self.inner.chars().collect()
    }

    /// Returns the byte range of the character at the provided character index.
    fn char_range(&self, index: usize) -> Option<Range<usize>> {
        self.inner
            .char_indices()
            .nth(index)
            .map(|(start, c)| start..start + c.len_utf8())
    }

    /// Returns the range of up to `len` bytes starting at `pos`, clamped to the end of the Text.
    /// The start isn't clamped, so that indexing with a `pos` past the end still panics.
    fn clamped(&self, pos: usize, len: usize) -> Range<usize> {
        let end = pos.saturating_add(len);
        let max = self.inner.len();
        pos..if end > max { max } else { end }
    }

    fn out_of_bounds(&self, index: usize) -> IndexOutOfBounds {
        IndexOutOfBounds {
            index,
            len: self.char_count(),
        }
    }
}

impl Deref for Text {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl AsRef<str> for Text {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl Borrow<str> for Text {
    fn borrow(&self) -> &str {
        &self.inner
    }
}

impl From<&str> for Text {
    fn from(value: &str) -> Self {
        Text {
            inner: String::from(value),
        }
    }
}

impl From<String> for Text {
    fn from(value: String) -> Self {
        Text {
            inner: value,
        }
    }
}

impl From<char> for Text {
    fn from(value: char) -> Self {
        Text {
            inner: String::from(value),
        }
    }
}

impl From<Text> for String {
    fn from(value: Text) -> Self {
        value.inner
    }
}

impl FromStr for Text {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Text::from(s))
    }
}

impl FromIterator<char> for Text {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Text {
            inner: String::from_iter(iter),
        }
    }
}

impl Extend<char> for Text {
    fn extend<I: IntoIterator<Item = char>>(&mut self, iter: I) {
        self.inner.extend(iter);
    }
}

impl<S: AsRef<str>> Add<S> for Text {
    type Output = Text;

    fn add(mut self, rhs: S) -> Self::Output {
        self.append(rhs);
        self
    }
}

impl<S: AsRef<str>> AddAssign<S> for Text {
    fn add_assign(&mut self, rhs: S) {
        self.append(rhs);
    }
}

impl PartialEq<str> for Text {
    fn eq(&self, other: &str) -> bool {
        self.inner == other
    }
}

impl PartialEq<&str> for Text {
    fn eq(&self, other: &&str) -> bool {
        self.inner == *other
    }
}

impl PartialEq<String> for Text {
    fn eq(&self, other: &String) -> bool {
        self.inner == *other
    }
}

impl PartialEq<Text> for &str {
    fn eq(&self, other: &Text) -> bool {
        *self == other.inner
    }
}

impl PartialEq<Text> for String {
    fn eq(&self, other: &Text) -> bool {
        *self == other.inner
    }
}

impl Debug for Text {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(&self.inner, f)
    }
}

impl Display for Text {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.inner, f)
    }
}
