//! Equality and ordering of notes by frequency.
//!
//! Frequencies are validated to be finite and positive, so comparing them
//! is a total order and `Eq`/`Ord` are sound.

use std::cmp::Ordering;

use super::Note;

impl PartialEq for Note {
    fn eq(&self, other: &Self) -> bool {
        self.frequency == other.frequency
    }
}

impl Eq for Note {}

impl PartialOrd for Note {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }

    fn lt(&self, other: &Self) -> bool {
        self.frequency < other.frequency
    }

    fn le(&self, other: &Self) -> bool {
        self.frequency <= other.frequency
    }

    fn gt(&self, other: &Self) -> bool {
        self.frequency > other.frequency
    }

    fn ge(&self, other: &Self) -> bool {
        self.frequency >= other.frequency
    }
}

impl Ord for Note {
    fn cmp(&self, other: &Self) -> Ordering {
        self.frequency.total_cmp(&other.frequency)
    }
}
