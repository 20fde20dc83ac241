//! A node struct used in the question tree.
use colored::Colorize;
use serde::{Serialize, Deserialize};

use std::fmt;

use crate::Question;


/// Text of the leaf reached when no record is left.
pub const NOT_FOUND: &str = "No movie found.";


/// What a leaf guesses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Answer {
    /// The title of a record.
    Title(String),
    /// No record reached this leaf.
    NotFound,
}


impl Answer {
    /// Returns the guessed title, `None` for [`Answer::NotFound`].
    #[inline]
    pub fn title(&self) -> Option<&str> {
        match self {
            Self::Title(title) => Some(title.as_str()),
            Self::NotFound => None,
        }
    }


    /// Returns `true` if this answer names a record.
    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Title(_))
    }
}


impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Title(title) => write!(f, "{title}"),
            Self::NotFound => write!(f, "{NOT_FOUND}"),
        }
    }
}


/// A node of the question tree.
/// Branches own both children exclusively; leaves have none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    /// A node that asks a question and has two children.
    Branch {
        /// The question asked at this node.
        question: Question,
        /// Subtree for the answer "yes".
        yes:      Box<Node>,
        /// Subtree for the answer "no".
        no:       Box<Node>,
    },
    /// A node that makes a guess.
    Leaf {
        /// The guess.
        answer: Answer,
    },
}


impl Node {
    pub(crate) fn branch(question: Question, yes: Box<Node>, no: Box<Node>)
        -> Self
    {
        Self::Branch { question, yes, no, }
    }


    pub(crate) fn leaf<S: Into<String>>(title: S) -> Self {
        Self::Leaf { answer: Answer::Title(title.into()), }
    }


    pub(crate) fn not_found() -> Self {
        Self::Leaf { answer: Answer::NotFound, }
    }


    /// Returns `true` if this node is a leaf.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf { .. })
    }


    /// The guess of a leaf, `None` for a branch.
    #[inline]
    pub fn answer(&self) -> Option<&Answer> {
        match self {
            Self::Leaf { answer } => Some(answer),
            Self::Branch { .. } => None,
        }
    }


    /// The question of a branch, `None` for a leaf.
    #[inline]
    pub fn question(&self) -> Option<&Question> {
        match self {
            Self::Branch { question, .. } => Some(question),
            Self::Leaf { .. } => None,
        }
    }


    /// The "yes" child of a branch, `None` for a leaf.
    #[inline]
    pub fn yes(&self) -> Option<&Node> {
        match self {
            Self::Branch { yes, .. } => Some(yes.as_ref()),
            Self::Leaf { .. } => None,
        }
    }


    /// The "no" child of a branch, `None` for a leaf.
    #[inline]
    pub fn no(&self) -> Option<&Node> {
        match self {
            Self::Branch { no, .. } => Some(no.as_ref()),
            Self::Leaf { .. } => None,
        }
    }


    pub(crate) fn to_dot_info(&self, id: usize) -> (Vec<String>, usize) {
        match self {
            Node::Branch { question, yes, no } => {
                let question = format!(
                    "\tnode_{id} [ label = \"{q}\" ];\n",
                    q = escape(&question.to_string()),
                );

                let yes_id = id + 1;
                let (    yes,  no_id) = yes.to_dot_info(yes_id);
                let (mut no, return_id) = no.to_dot_info(no_id);

                let mut info = yes;
                info.push(question);
                info.append(&mut no);

                let yes_edge = format!(
                    "\tnode_{id} -- node_{yes_id} [ label = \"Yes\" ];\n",
                );
                info.push(yes_edge);
                let no_edge = format!(
                    "\tnode_{id} -- node_{no_id} [ label = \"No\" ];\n",
                );
                info.push(no_edge);

                (info, return_id)
            },
            Node::Leaf { answer } => {
                let info = format!(
                    "\tnode_{id} [ label = \"{a}\", shape = box ];\n",
                    a = escape(&answer.to_string()),
                );

                (vec![info], id + 1)
            }
        }
    }


    /// Writes the indented text form of this subtree.
    pub(crate) fn write_tree<W>(&self, w: &mut W, indent: &str, paint: bool)
        -> fmt::Result
        where W: fmt::Write
    {
        match self {
            Node::Branch { question, yes, no } => {
                let deeper = format!("{indent}    ");
                if paint {
                    writeln!(w, "{indent}{} {question}", "Question:".bold().blue())?;
                    writeln!(w, "{indent}  {}", "--> Yes:".green())?;
                    yes.write_tree(w, &deeper, paint)?;
                    writeln!(w, "{indent}  {}", "--> No:".red())?;
                    no.write_tree(w, &deeper, paint)
                } else {
                    writeln!(w, "{indent}Question: {question}")?;
                    writeln!(w, "{indent}  --> Yes:")?;
                    yes.write_tree(w, &deeper, paint)?;
                    writeln!(w, "{indent}  --> No:")?;
                    no.write_tree(w, &deeper, paint)
                }
            },
            Node::Leaf { answer } => {
                if paint {
                    let answer = answer.to_string();
                    writeln!(w, "{indent}{} {}", "Leaf:".bold(), answer.yellow())
                } else {
                    writeln!(w, "{indent}Leaf: {answer}")
                }
            },
        }
    }
}


fn escape(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}
