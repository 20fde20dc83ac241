//! The question tree: how it is grown and how it is read.

/// Defines the tree builder.
pub mod builder;
/// Defines the ID3 growing procedure.
pub mod dtree;
/// Defines the tree handed to consumers.
pub mod guess_tree;

mod candidates;
mod depth;
mod node;
mod stats;


pub use builder::{DecisionTreeBuilder, DEFAULT_MAX_DEPTH};
pub use candidates::{QuestionOrder, candidate_questions, best_split};
pub use depth::Depth;
pub use dtree::{DecisionTree, build_tree};
pub use guess_tree::GuessTree;
pub use node::{Answer, Node, NOT_FOUND};
pub use stats::TreeStats;
