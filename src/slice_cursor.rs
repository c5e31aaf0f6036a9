use crate::cursor::Cursor;

pub(crate) struct SliceCursor<'a, T> {
    slice: &'a [T],
    // Index of the item that next() will return; slice.len() once exhausted.
    pos: usize,
}

impl<'a, T> SliceCursor<'a, T> {
    pub fn at_start(slice: &'a [T]) -> Self {
        SliceCursor { slice, pos: 0 }
    }

    /// Items between `start` and the current position.
    pub fn since(&self, start: usize) -> &'a [T] {
        &self.slice[start..self.pos]
    }
}

impl<'a, T> Iterator for SliceCursor<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<Self::Item> {
        let item = self.slice.get(self.pos)?;
        self.pos += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.slice.len() - self.pos;
        (remaining, Some(remaining))
    }
}

impl<'a, T> Cursor for SliceCursor<'a, T> {
    fn peek_next(&self) -> Option<Self::Item> {
        self.slice.get(self.pos)
    }

    fn pos(&self) -> usize {
        self.pos
    }

    fn set_pos(&mut self, pos: usize) {
        assert!(pos <= self.slice.len(), "Position out of bounds");
        self.pos = pos;
    }

    fn at_end(&self) -> bool {
        self.pos == self.slice.len()
    }
}
