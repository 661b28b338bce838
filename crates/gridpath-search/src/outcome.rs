use gridpath_core::Coordinate;

/// How a search run ended. None of these is an error.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// A shortest path, start and end included.
    Found(Vec<Coordinate>),
    /// The frontier ran dry before the end was reached.
    NotFound,
    /// The observer asked the search to stop.
    Cancelled,
}

impl Outcome {
    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// The path, if one was found.
    pub fn path(&self) -> Option<&[Coordinate]> {
        match self {
            Self::Found(p) => Some(p.as_slice()),
            _ => None,
        }
    }

    /// Consume the outcome, keeping only the path.
    pub fn into_path(self) -> Option<Vec<Coordinate>> {
        match self {
            Self::Found(p) => Some(p),
            _ => None,
        }
    }

    /// Number of steps (edges) on the path.
    pub fn steps(&self) -> Option<usize> {
        self.path().map(|p| p.len().saturating_sub(1))
    }
}

/// Counters collected during a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Nodes popped and expanded, start included.
    pub expanded: usize,
    /// Frontier insertions.
    pub pushed: usize,
    /// Peak frontier size, stale entries included.
    pub max_frontier: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        let path = vec![Coordinate::new(0, 0), Coordinate::new(0, 1)];
        let found = Outcome::Found(path.clone());
        assert!(found.is_found());
        assert_eq!(found.path(), Some(path.as_slice()));
        assert_eq!(found.steps(), Some(1));
        assert_eq!(found.into_path(), Some(path));
        assert_eq!(Outcome::NotFound.path(), None);
        assert!(!Outcome::Cancelled.is_found());
    }
}
