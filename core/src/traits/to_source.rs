use super::writer::Writer;

/// Trait for converting leaf values back to text.
///
/// `ToSource` covers the pieces of output that need no tree context:
/// keywords, punctuation, identifiers and quoted literals. Node renderers
/// combine these with their own traversal.
///
/// # Associated Types
///
/// - [`Writer`]: The writer implementation receiving the output
///
/// # Required Methods
///
/// - `write(&self, writer)`: Write this value to the writer
///
/// # Provided Methods
///
/// - `to_source()`: Convenience method for getting a String
///
/// # Blanket Implementations
///
/// - `Option<T>`: Writes nothing for `None`, delegates for `Some`
/// - `&T`: Delegates to referenced value
pub trait ToSource {
    /// The writer type receiving the output.
    type Writer: Writer;

    /// Write this value to the writer.
    fn write(&self, writer: &mut Self::Writer);

    /// Convert to a source string.
    ///
    /// Creates a default writer, writes to it, and returns the result.
    fn to_source(&self) -> String
    where
        Self::Writer: Default,
    {
        let mut writer = Self::Writer::default();
        self.write(&mut writer);
        writer.into_string()
    }
}

impl<T: ToSource> ToSource for Option<T> {
    type Writer = T::Writer;

    fn write(&self, w: &mut Self::Writer) {
        if let Some(v) = self {
            v.write(w);
        }
    }
}

impl<T: ToSource> ToSource for &T {
    type Writer = T::Writer;

    fn write(&self, w: &mut Self::Writer) {
        (*self).write(w);
    }
}
