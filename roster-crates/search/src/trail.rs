use std::iter::Rev;
use std::ops::Deref;
use std::vec::Drain;

/// A stack of entries divided into checkpoints.
///
/// Going back to a checkpoint removes every entry which was pushed after it, and hands them out
/// newest first so that they can be undone.
#[derive(Clone, Debug)]
pub(crate) struct Trail<T> {
    /// At index i is the length of the trail when checkpoint i + 1 was created.
    delimiters: Vec<usize>,
    entries: Vec<T>,
}

// Implemented by hand to avoid imposing Default on T.
impl<T> Default for Trail<T> {
    fn default() -> Self {
        Trail {
            delimiters: Vec::default(),
            entries: Vec::default(),
        }
    }
}

impl<T> Trail<T> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Trail {
            delimiters: Vec::with_capacity(capacity),
            entries: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn new_checkpoint(&mut self) {
        self.delimiters.push(self.entries.len());
    }

    pub(crate) fn checkpoint(&self) -> usize {
        self.delimiters.len()
    }

    /// Goes back to `checkpoint`, which has to be older than the current one.
    pub(crate) fn synchronise(&mut self, checkpoint: usize) -> Rev<Drain<'_, T>> {
        assert!(
            checkpoint < self.checkpoint(),
            "can only synchronise to an earlier checkpoint"
        );

        let new_len = self.delimiters[checkpoint];
        self.delimiters.truncate(checkpoint);
        self.entries.drain(new_len..).rev()
    }

    pub(crate) fn push(&mut self, entry: T) {
        self.entries.push(entry)
    }
}

impl<T> Deref for Trail<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.entries
    }
}
