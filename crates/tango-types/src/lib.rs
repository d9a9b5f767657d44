mod types;

pub use types::{
    COLUMN_COUNT, Column, Difficulty, Passage, Phrase, Segment, VocabEntry,
};
