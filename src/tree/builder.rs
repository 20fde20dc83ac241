use crate::Record;
use super::{
    candidates::QuestionOrder,
    depth::Depth,
    dtree::DecisionTree,
};


/// The maximal depth set as default.
pub const DEFAULT_MAX_DEPTH: usize = 20;


/// A struct that builds [`DecisionTree`].
/// `DecisionTreeBuilder` keeps parameters for growing the question tree.
///
/// # Example
///
/// ```
/// use guesstree::prelude::*;
///
/// let records = vec![
///     Record::new("Alien").with_genres(["Horror"]),
///     Record::new("Up").with_genres(["Animation"]),
/// ];
/// let tree = DecisionTreeBuilder::new(&records)
///     .max_depth(10)
///     .question_order(QuestionOrder::Lexicographic)
///     .build()
///     .produce();
/// assert_eq!(tree.n_questions(), 1);
/// ```
#[derive(Clone)]
pub struct DecisionTreeBuilder<'a> {
    records:   &'a [Record],
    max_depth: Depth,
    order:     QuestionOrder,
}


impl<'a> DecisionTreeBuilder<'a> {
    /// Construct a new instance of [`DecisionTreeBuilder`].
    /// By default, [`DecisionTreeBuilder`] sets the parameters as follows;
    /// ```text
    /// max_depth: DEFAULT_MAX_DEPTH == 20,
    /// question_order: QuestionOrder::FirstSeen,
    /// ```
    pub fn new(records: &'a [Record]) -> Self {
        let max_depth = Depth::from(DEFAULT_MAX_DEPTH);
        let order = QuestionOrder::default();

        Self { records, max_depth, order, }
    }


    /// Specify the maximal number of questions on a path.
    /// Default maximal depth is `20`.
    /// With `0` the tree is a single leaf.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Depth::from(depth);
        self
    }


    /// Set the order candidate questions are enumerated in.
    /// Default value is `QuestionOrder::FirstSeen`.
    /// See [`QuestionOrder`] for the tie-breaking it implies.
    #[inline]
    pub fn question_order(mut self, order: QuestionOrder) -> Self {
        self.order = order;
        self
    }


    /// Build a [`DecisionTree`].
    /// This method consumes `self`.
    pub fn build(self) -> DecisionTree<'a> {
        DecisionTree::new(self.records, self.max_depth, self.order)
    }
}
