//! Exports the standard types and functions.
//!
pub use crate::record::{
    Record,
    RecordReader,
};


pub use crate::question::{
    Question,
    QuestionKind,
};


pub use crate::split::{
    entropy,
    information_gain,
    filter,
    partition,
};


pub use crate::tree::{
    // Builder
    DecisionTreeBuilder,
    DecisionTree,
    QuestionOrder,
    DEFAULT_MAX_DEPTH,
    build_tree,

    // Output
    GuessTree,
    Node,
    Answer,
    TreeStats,
};


pub use crate::session::{
    Session,
    Prompt,
};
