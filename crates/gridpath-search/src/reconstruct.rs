use gridpath_core::Coordinate;

use crate::observer::SearchObserver;
use crate::state::SearchState;

/// Walk the predecessor chain back from `end` and return the path in
/// start→end order, both endpoints included.
///
/// `observer.path_step` is called for every cell stepped back to, i.e. every
/// path cell except `end`, from end's predecessor down to the start.
///
/// Terminates because each predecessor link was written with a strictly
/// smaller cost than the node it points from.
pub fn reconstruct<O: SearchObserver + ?Sized>(
    state: &SearchState,
    end: Coordinate,
    observer: &mut O,
) -> Vec<Coordinate> {
    let mut path = vec![end];
    let mut current = end;
    while let Some(prev) = state.came_from(current) {
        observer.path_step(prev);
        path.push(prev);
        current = prev;
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FrontierPolicy;
    use crate::observer::StepRecorder;
    use gridpath_core::Grid;

    #[test]
    fn walks_chain_and_reports_each_step() {
        let grid = Grid::new(3).unwrap();
        let mut s = SearchState::new(&grid);
        let idx = |r, c| grid.index(Coordinate::new(r, c)).unwrap();
        s.seed(idx(0, 0), 4);
        s.relax(idx(0, 0), idx(0, 1), 1, 4, FrontierPolicy::KeepStale);
        s.relax(idx(0, 1), idx(1, 1), 2, 4, FrontierPolicy::KeepStale);
        s.relax(idx(1, 1), idx(2, 1), 3, 4, FrontierPolicy::KeepStale);

        let mut rec = StepRecorder::new();
        let path = reconstruct(&s, Coordinate::new(2, 1), &mut rec);
        assert_eq!(
            path,
            vec![
                Coordinate::new(0, 0),
                Coordinate::new(0, 1),
                Coordinate::new(1, 1),
                Coordinate::new(2, 1),
            ]
        );
        assert_eq!(
            rec.path_steps(),
            vec![
                Coordinate::new(1, 1),
                Coordinate::new(0, 1),
                Coordinate::new(0, 0),
            ]
        );
    }

    #[test]
    fn node_without_predecessor_is_its_own_path() {
        let grid = Grid::new(2).unwrap();
        let s = SearchState::new(&grid);
        let mut rec = StepRecorder::new();
        let path = reconstruct(&s, Coordinate::new(1, 1), &mut rec);
        assert_eq!(path, vec![Coordinate::new(1, 1)]);
        assert!(rec.steps().is_empty());
    }
}
