#![warn(missing_docs)]

//!
//! A crate that grows a question tree for a movie guessing game.
//!
//! Given a set of movies with genres, a release year, and a top-billed
//! cast, the ID3 procedure repeatedly asks the yes/no question of
//! greatest information gain until every leaf names a single movie.
//! The tree memorizes the movies it was grown from;
//! it does not generalize to unseen ones and is never pruned.
//!
//! - Split evaluation
//!     [`split::entropy`], [`split::information_gain`], and
//!     [`split::filter`] score a partition of the movies.
//!
//! - Tree building
//!     [`DecisionTreeBuilder`] configures the depth limit and the
//!     question order, [`DecisionTree::produce`] grows a [`GuessTree`].
//!
//! - Traversal
//!     [`GuessTree`] and [`Node`] are read-only;
//!     [`Session`] walks a tree with a player's answers.
//!
//! # Example
//! ```
//! use guesstree::prelude::*;
//!
//! let records = vec![
//!     Record::new("A").with_genres(["Action"]),
//!     Record::new("B").with_genres(["Comedy"]),
//! ];
//! let tree = build_tree(&records, DEFAULT_MAX_DEPTH);
//! assert_eq!(
//!     tree.root().question(),
//!     Some(&Question::Genre("Action".into())),
//! );
//! ```

pub mod record;
pub mod question;
pub mod split;
pub mod tree;
pub mod session;
pub mod prelude;


pub use record::{Record, RecordReader};
pub use question::{Question, QuestionKind};
pub use split::{Score, Split};
pub use tree::{
    Answer,
    DecisionTree,
    DecisionTreeBuilder,
    GuessTree,
    Node,
    QuestionOrder,
    TreeStats,
    DEFAULT_MAX_DEPTH,
    build_tree,
};
pub use session::{Prompt, Session};
