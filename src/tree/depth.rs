use serde::{Serialize, Deserialize};

use std::{fmt, ops};


/// Struct `Depth` is the depth of a node, the root being `0`.
/// This is just a wrapper for `usize`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Depth(usize);


impl Depth {
    /// Depth of the root node.
    pub const ROOT: Self = Self(0);
}


impl fmt::Display for Depth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let depth = self.0;
        write!(f, "{depth}")
    }
}


impl From<usize> for Depth {
    fn from(depth: usize) -> Self {
        Self(depth)
    }
}


impl ops::Add<usize> for Depth {
    type Output = Self;
    /// Saturates at `usize::MAX`.
    #[inline]
    fn add(self, other: usize) -> Self::Output {
        Self(self.0.saturating_add(other))
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_add_01() {
        let d1 = Depth::from(3);
        let res = d1 + 1;
        let exp = Depth::from(4);
        assert_eq!(exp, res, "expected {exp:?}, got {res:?}.");
    }

    #[test]
    fn test_depth_add_saturates() {
        let d1 = Depth::from(usize::MAX);
        let res = d1 + 1;
        assert_eq!(res, Depth::from(usize::MAX), "got {res:?}.");
    }

    #[test]
    fn test_depth_cmp_01() {
        let d1 = Depth::from(2);
        let rhs = Depth::from(3);
        let res = d1 < rhs;
        assert!(res, "failed for {d1} < {rhs}. got {res}.");
    }

    #[test]
    fn test_depth_cmp_02() {
        let d1 = Depth::from(2);
        let rhs = Depth::from(2);
        let res = d1 >= rhs;
        assert!(res, "failed for {d1} >= {rhs}. got {res}.");
    }

    #[test]
    fn test_depth_cmp_03() {
        let res = Depth::ROOT < Depth::from(1);
        assert!(res, "failed for root < 1. got {res}.");
    }
}
