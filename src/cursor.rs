/// A bidirectional position over a sequence that can be saved and restored,
/// which is what a backtracking parser needs.
pub(crate) trait Cursor: Iterator {
    fn peek_next(&self) -> Option<Self::Item>;
    fn pos(&self) -> usize;
    fn set_pos(&mut self, pos: usize);
    fn at_end(&self) -> bool;

    /// Consumes the next item if it satisfies `predicate`.
    fn next_if(&mut self, predicate: impl FnOnce(&Self::Item) -> bool) -> Option<Self::Item> {
        match self.peek_next() {
            Some(item) if predicate(&item) => self.next(),
            _ => None,
        }
    }
}
