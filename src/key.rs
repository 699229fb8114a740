use std::borrow::Cow;

/// Prefix applied to numeric keys before hashing.
///
/// A number and a string that stringify identically (`42` vs `"42"`) must be
/// tracked independently; the tag keeps their byte representations disjoint.
const NUMERIC_TAG: &str = "fuD4ElwE4r7z";

/// A key accepted by [`HotFilter`](crate::HotFilter).
///
/// The filter never stores keys — only the clamped byte form is hashed, and
/// only transiently.  The variants exist so that keys of different types
/// which would otherwise collide under stringification stay distinct:
/// numeric variants are prefixed with a fixed tag before hashing, text and
/// byte keys pass through unchanged.
///
/// Anything convertible into a `Key` can be passed to
/// [`touch`](crate::HotFilter::touch) and [`get`](crate::HotFilter::get)
/// directly:
///
/// ```
/// use hotfilter::HotFilter;
///
/// let mut filter = HotFilter::new(8, 3).unwrap();
/// filter.touch("session:41");
/// filter.touch(41_i64);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Key<'a> {
    /// Text key; hashed as its UTF-8 bytes, unchanged.
    Text(Cow<'a, str>),
    /// Raw byte key; hashed unchanged.
    Bytes(Cow<'a, [u8]>),
    /// Integer key; clamped to its tagged decimal form.
    Int(i64),
    /// Floating-point key; clamped to its tagged decimal form.
    Float(f64),
}

impl Key<'_> {
    /// The byte representation fed to the position hash.
    ///
    /// Pure: no side effects, identical output for identical input.  Text
    /// and byte keys borrow; numeric keys allocate their tagged decimal
    /// form.
    pub fn clamped(&self) -> Cow<'_, [u8]> {
        match self {
            Key::Text(s) => Cow::Borrowed(s.as_bytes()),
            Key::Bytes(b) => Cow::Borrowed(b.as_ref()),
            Key::Int(n) => Cow::Owned(format!("{NUMERIC_TAG}{n}").into_bytes()),
            Key::Float(x) => Cow::Owned(format!("{NUMERIC_TAG}{x}").into_bytes()),
        }
    }
}

impl<'a> From<&'a str> for Key<'a> {
    fn from(s: &'a str) -> Self {
        Key::Text(Cow::Borrowed(s))
    }
}

impl From<String> for Key<'_> {
    fn from(s: String) -> Self {
        Key::Text(Cow::Owned(s))
    }
}

impl<'a> From<&'a [u8]> for Key<'a> {
    fn from(b: &'a [u8]) -> Self {
        Key::Bytes(Cow::Borrowed(b))
    }
}

impl From<Vec<u8>> for Key<'_> {
    fn from(b: Vec<u8>) -> Self {
        Key::Bytes(Cow::Owned(b))
    }
}

impl From<i64> for Key<'_> {
    fn from(n: i64) -> Self {
        Key::Int(n)
    }
}

impl From<i32> for Key<'_> {
    fn from(n: i32) -> Self {
        Key::Int(n as i64)
    }
}

impl From<u32> for Key<'_> {
    fn from(n: u32) -> Self {
        Key::Int(n as i64)
    }
}

impl From<f64> for Key<'_> {
    fn from(x: f64) -> Self {
        Key::Float(x)
    }
}
