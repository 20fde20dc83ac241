use tracing::{debug, info};

use std::fmt;

use crate::Record;
use super::{
    builder::DecisionTreeBuilder,
    candidates::{QuestionOrder, best_split},
    depth::Depth,
    guess_tree::GuessTree,
    node::Node,
};


/// The ID3 tree growing algorithm.
///
/// Given a set of movies, [`DecisionTree`] grows a [`GuessTree`]
/// whose leaves each name a single movie.
/// At every node the question of greatest information gain is asked;
/// the recursion stops at a single movie, an empty set,
/// the depth limit, or when no question has positive gain.
/// In the last two cases the leaf names the first remaining movie,
/// so such a leaf may misidentify the other movies that reached it.
///
/// [`DecisionTree`] is constructed
/// by [`DecisionTreeBuilder`](crate::tree::DecisionTreeBuilder).
///
/// # Example
/// ```no_run
/// use guesstree::prelude::*;
///
/// let records = RecordReader::default()
///     .file("movies.json")
///     .read()
///     .unwrap();
///
/// let tree = DecisionTreeBuilder::new(&records)
///     .max_depth(20)
///     .question_order(QuestionOrder::FirstSeen)
///     .build()
///     .produce();
///
/// tree.print_tree();
/// ```
pub struct DecisionTree<'a> {
    records:   &'a [Record],
    max_depth: Depth,
    order:     QuestionOrder,
}


impl<'a> DecisionTree<'a> {
    /// Initialize [`DecisionTree`].
    /// This method is called only via `DecisionTreeBuilder::build`.
    #[inline]
    pub(super) fn new(
        records:   &'a [Record],
        max_depth: Depth,
        order:     QuestionOrder,
    ) -> Self
    {
        Self { records, max_depth, order, }
    }


    /// Grow the tree over the whole record set.
    pub fn produce(&self) -> GuessTree {
        let records = self.records.iter().collect::<Vec<_>>();
        let root = self.grow(&records[..], Depth::ROOT);
        let tree = GuessTree::from(root);

        info!(
            n_records = self.records.len(),
            n_leaves = tree.leaves(),
            depth = tree.depth(),
            "grew question tree"
        );
        tree
    }


    /// Build the subtree for `records` at depth `depth`.
    fn grow(&self, records: &[&Record], depth: Depth) -> Box<Node> {
        let Some(first) = records.first() else {
            return Box::new(Node::not_found());
        };

        if records.len() == 1 {
            return Box::new(Node::leaf(first.title()));
        }

        if depth >= self.max_depth {
            debug!(
                %depth,
                n_records = records.len(),
                guess = first.title(),
                "depth limit reached, guessing the first movie"
            );
            return Box::new(Node::leaf(first.title()));
        }

        let Some(split) = best_split(records, self.order) else {
            debug!(
                %depth,
                n_records = records.len(),
                guess = first.title(),
                "no question separates the movies, guessing the first one"
            );
            return Box::new(Node::leaf(first.title()));
        };

        // If the split has no meaning, construct a leaf node.
        if split.yes.is_empty() || split.no.is_empty() {
            return Box::new(Node::leaf(first.title()));
        }

        debug!(
            %depth,
            question = %split.question,
            gain = split.gain.0,
            n_yes = split.yes.len(),
            n_no = split.no.len(),
            "split"
        );

        // The two subsets are disjoint, so both subtrees grow independently.
        let depth = depth + 1;
        let (yes, no) = rayon::join(
            || self.grow(&split.yes[..], depth),
            || self.grow(&split.no[..], depth),
        );

        Box::new(Node::branch(split.question, yes, no))
    }


    /// Returns the parameters of this algorithm as `(name, value)` pairs.
    pub fn info(&self) -> Vec<(&str, String)> {
        Vec::from([
            ("# of movies", format!("{}", self.records.len())),
            ("Max depth", format!("{}", self.max_depth)),
            ("Question order", format!("{}", self.order)),
        ])
    }
}


/// Grow a tree over `records` with the default question order.
///
/// `max_depth` bounds the number of questions on any path.
/// An empty `records` yields a single "not found" leaf.
pub fn build_tree(records: &[Record], max_depth: usize) -> GuessTree {
    DecisionTreeBuilder::new(records)
        .max_depth(max_depth)
        .build()
        .produce()
}


impl fmt::Display for DecisionTree<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "\
            ----------\n\
            # ID3 Question Tree\n\n\
            - Movies: {}\n\
            - Max depth: {}\n\
            - Question order: {}\
            ",
            self.records.len(),
            self.max_depth,
            self.order,
        )?;

        write!(f, "----------")
    }
}
