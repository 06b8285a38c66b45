/// Wrap-around navigation over an ordered list of menu entries.
///
/// Implementors expose the entry count and the highlighted position; the
/// provided methods supply the cyclic movement so every list screen wraps
/// the same way.
pub trait Navigable {
    /// Returns the number of entries in the list.
    fn item_count(&self) -> usize;

    /// Returns the currently highlighted position.
    fn highlighted(&self) -> usize;

    /// Sets the highlighted position.
    fn set_highlighted(&mut self, index: usize);

    /// Moves the highlight one entry down, wrapping from last to first.
    fn highlight_next(&mut self) {
        let count = self.item_count();
        if count > 0 {
            self.set_highlighted((self.highlighted() + 1) % count);
        }
    }

    /// Moves the highlight one entry up, wrapping from first to last.
    fn highlight_previous(&mut self) {
        let count = self.item_count();
        if count > 0 {
            self.set_highlighted((self.highlighted() + count - 1) % count);
        }
    }
}
