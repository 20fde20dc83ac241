//! One round of the guessing game, driven by a player's answers.
//!
//! The tree itself is read-only; the position and the number of
//! questions asked so far live here.
use crate::{Answer, GuessTree, Node, Question};


/// What the session shows the player next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt<'t> {
    /// Ask this question.
    Question(&'t Question),
    /// Propose this guess.
    Guess(&'t Answer),
}


/// A cursor over a [`GuessTree`].
///
/// # Example
/// ```
/// use guesstree::prelude::*;
///
/// let records = vec![
///     Record::new("Alien").with_genres(["Horror"]),
///     Record::new("Up").with_genres(["Animation"]),
/// ];
/// let tree = build_tree(&records, DEFAULT_MAX_DEPTH);
///
/// let mut session = Session::new(&tree);
/// assert!(matches!(session.prompt(), Prompt::Question(_)));
/// let prompt = session.answer(false);
/// assert_eq!(prompt, Prompt::Guess(&Answer::Title("Up".into())));
/// assert_eq!(session.questions_asked(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Session<'t> {
    root:    &'t Node,
    current: &'t Node,
    asked:   usize,
}


impl<'t> Session<'t> {
    /// Start a session at the root of `tree`.
    pub fn new(tree: &'t GuessTree) -> Self {
        let root = tree.root();
        Self { root, current: root, asked: 0, }
    }


    /// Returns the current prompt.
    pub fn prompt(&self) -> Prompt<'t> {
        match self.current {
            Node::Branch { question, .. } => Prompt::Question(question),
            Node::Leaf { answer } => Prompt::Guess(answer),
        }
    }


    /// Answer the current question and move to the matching child.
    /// At a leaf this does nothing and returns the guess again.
    pub fn answer(&mut self, yes: bool) -> Prompt<'t> {
        let current = self.current;
        if let Node::Branch { yes: y, no: n, .. } = current {
            self.current = if yes { y.as_ref() } else { n.as_ref() };
            self.asked += 1;
        }
        self.prompt()
    }


    /// Returns `true` once a guess is proposed.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.current.is_leaf()
    }


    /// Number of questions answered in this round.
    #[inline]
    pub fn questions_asked(&self) -> usize {
        self.asked
    }


    /// Go back to the root and reset the counter.
    pub fn restart(&mut self) {
        self.current = self.root;
        self.asked = 0;
    }
}
