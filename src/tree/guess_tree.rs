//! Defines the question tree handed to consumers.
use serde::{Serialize, Deserialize};

use std::fmt;
use std::path::Path;
use std::fs::File;
use std::io::prelude::*;

use crate::Record;
use super::{
    node::{Answer, Node},
    stats::TreeStats,
};


/// Question tree produced by [`DecisionTree`](crate::tree::DecisionTree).
/// This struct is just a wrapper of the root [`Node`];
/// it has no mutation API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GuessTree {
    root: Node
}


impl From<Box<Node>> for GuessTree {
    #[inline]
    fn from(root: Box<Node>) -> Self {
        Self { root: *root }
    }
}


impl From<Node> for GuessTree {
    #[inline]
    fn from(root: Node) -> Self {
        Self { root }
    }
}


impl GuessTree {
    /// The root node, where traversal starts.
    #[inline]
    pub fn root(&self) -> &Node {
        &self.root
    }


    /// Answer every question as `record` would and
    /// return the guess at the leaf reached.
    pub fn guess(&self, record: &Record) -> &Answer {
        self.trace(record).0
    }


    /// Returns the leaf reached by `record`
    /// and the number of questions asked on the way.
    pub(crate) fn trace(&self, record: &Record) -> (&Answer, usize) {
        let mut node = &self.root;
        let mut asked = 0;
        loop {
            match node {
                Node::Branch { question, yes, no } => {
                    asked += 1;
                    node = if question.answer(record) { yes.as_ref() } else { no.as_ref() };
                },
                Node::Leaf { answer } => return (answer, asked),
            }
        }
    }


    /// Returns the number of leaves.
    pub fn leaves(&self) -> usize {
        fn count(node: &Node) -> usize {
            match node {
                Node::Branch { yes, no, .. } => count(yes) + count(no),
                Node::Leaf { .. } => 1,
            }
        }
        count(&self.root)
    }


    /// Returns the number of question nodes.
    #[inline]
    pub fn n_questions(&self) -> usize {
        // A strictly binary tree has one more leaf than branches.
        self.leaves() - 1
    }


    /// Returns the largest number of questions on a root-to-leaf path.
    pub fn depth(&self) -> usize {
        fn height(node: &Node) -> usize {
            match node {
                Node::Branch { yes, no, .. } => 1 + height(yes).max(height(no)),
                Node::Leaf { .. } => 0,
            }
        }
        height(&self.root)
    }


    /// Returns the guesses of all leaves, left (yes) to right (no).
    pub fn answers(&self) -> Vec<&Answer> {
        fn collect<'a>(node: &'a Node, out: &mut Vec<&'a Answer>) {
            match node {
                Node::Branch { yes, no, .. } => {
                    collect(yes, out);
                    collect(no, out);
                },
                Node::Leaf { answer } => out.push(answer),
            }
        }
        let mut out = Vec::new();
        collect(&self.root, &mut out);
        out
    }


    /// Summarize how well this tree identifies `records`.
    pub fn stats(&self, records: &[Record]) -> TreeStats {
        TreeStats::new(self, records)
    }


    /// Print the indented tree to stdout, with colors.
    pub fn print_tree(&self) {
        print!("{}", Painted(&self.root));
    }


    /// Write the current tree to a Graphviz dot file.
    #[inline]
    pub fn to_dot_file<P>(&self, path: P) -> std::io::Result<()>
        where P: AsRef<Path>
    {
        let mut f = File::create(path)?;
        f.write_all(b"graph GuessTree {\n")?;

        let info = self.root.to_dot_info(0).0;
        for row in info {
            f.write_all(row.as_bytes())?;
        }

        f.write_all(b"}\n")?;

        Ok(())
    }
}


impl fmt::Display for GuessTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.root.write_tree(f, "", false)
    }
}


/// Colored text form of a subtree.
struct Painted<'a>(&'a Node);


impl fmt::Display for Painted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.write_tree(f, "", true)
    }
}
