//! Unit tests for mc-grid.
//!
//! All tests build small hand-made grids; none depend on the RNG.

#[cfg(test)]
mod construction {
    use mc_core::CellPos;
    use crate::{CellKind, Grid, GridError};

    #[test]
    fn new_grid_is_open_with_corner_anchors() {
        let g = Grid::new(4, 6).unwrap();
        assert_eq!((g.rows(), g.cols()), (4, 6));
        assert_eq!(g.start(), CellPos::new(0, 0));
        assert_eq!(g.goal(), CellPos::new(3, 5));
        assert!(g.cells().iter().all(|&k| k == CellKind::Free));
        assert!(g.costs().iter().all(|&c| c == 0));
        assert_eq!(g.max_visits(), 0);
    }

    #[test]
    fn degenerate_dimensions_rejected() {
        assert_eq!(Grid::new(1, 1).unwrap_err(), GridError::Dimensions { rows: 1, cols: 1 });
        assert!(Grid::new(0, 5).is_err());
        assert!(Grid::new(1, 2).is_ok());
    }

    #[test]
    fn default_layout_on_ten_by_ten() {
        let g = Grid::with_default_layout(10, 10).unwrap();
        let obstacles = g.cells().iter().filter(|&&k| k == CellKind::Obstacle).count();
        assert_eq!(obstacles, 13);
        assert_eq!(g.kind(CellPos::new(1, 1)).unwrap(), CellKind::Obstacle);
        assert_eq!(g.kind(CellPos::new(6, 1)).unwrap(), CellKind::Obstacle);
        assert!(g.is_free(g.start()));
        assert!(g.is_free(g.goal()));
    }

    #[test]
    fn default_layout_clipped_to_small_grid() {
        // Only (1,1) and (1,2) fit in 3×3.
        let g = Grid::with_default_layout(3, 3).unwrap();
        let obstacles: Vec<_> = (0..3)
            .flat_map(|r| (0..3).map(move |c| CellPos::new(r, c)))
            .filter(|&p| g.kind(p).unwrap() == CellKind::Obstacle)
            .collect();
        assert_eq!(obstacles, vec![CellPos::new(1, 1), CellPos::new(1, 2)]);
    }

    #[test]
    fn default_layout_never_covers_goal() {
        // Goal of an 8×8 grid is (7,7), which is in the default list.
        let g = Grid::with_default_layout(8, 8).unwrap();
        assert_eq!(g.goal(), CellPos::new(7, 7));
        assert!(g.is_free(g.goal()));
    }
}

#[cfg(test)]
mod edits {
    use mc_core::CellPos;
    use crate::{CellKind, Grid, GridError};

    #[test]
    fn obstacle_on_anchor_is_noop() {
        let mut g = Grid::new(5, 5).unwrap();
        let start = g.start();
        let goal = g.goal();
        assert!(!g.set_obstacle(start, true).unwrap());
        assert!(!g.set_obstacle(goal, true).unwrap());
        assert!(!g.toggle_obstacle(start).unwrap());
        assert!(g.is_free(start));
        assert!(g.is_free(goal));
    }

    #[test]
    fn obstacle_zeroes_cost_and_visits() {
        let mut g = Grid::new(5, 5).unwrap();
        let p = CellPos::new(2, 2);
        g.set_cost(p, 5).unwrap();
        g.record_visit(p);
        g.record_visit(p);
        assert_eq!(g.visits(p).unwrap(), 2);

        assert!(g.set_obstacle(p, true).unwrap());
        assert_eq!(g.kind(p).unwrap(), CellKind::Obstacle);
        assert_eq!(g.cost_dots(p).unwrap(), 0);
        assert_eq!(g.visits(p).unwrap(), 0);

        assert!(g.toggle_obstacle(p).unwrap());
        assert!(g.is_free(p));
    }

    #[test]
    fn cost_is_clamped() {
        let mut g = Grid::new(3, 3).unwrap();
        let p = CellPos::new(0, 1);
        g.set_cost(p, 15).unwrap();
        assert_eq!(g.cost_dots(p).unwrap(), 9);
        g.set_cost(p, -4).unwrap();
        assert_eq!(g.cost_dots(p).unwrap(), 0);
    }

    #[test]
    fn cost_on_obstacle_is_noop() {
        let mut g = Grid::new(3, 3).unwrap();
        let p = CellPos::new(1, 1);
        g.set_obstacle(p, true).unwrap();
        assert!(!g.set_cost(p, 4).unwrap());
        assert_eq!(g.cost_dots(p).unwrap(), 0);
    }

    #[test]
    fn cost_formula() {
        let mut g = Grid::new(3, 3).unwrap();
        let p = CellPos::new(0, 2);
        assert!((g.cost_of(p).unwrap() - 1.0).abs() < 1e-12);
        g.set_cost(p, 9).unwrap();
        assert!((g.cost_of(p).unwrap() - 2.8).abs() < 1e-12);
        g.set_cost(p, 3).unwrap();
        assert!((g.cost_of(p).unwrap() - 1.6).abs() < 1e-12);
    }

    #[test]
    fn path_cost_sums_every_cell() {
        let mut g = Grid::new(1, 3).unwrap();
        g.set_cost(CellPos::new(0, 1), 5).unwrap();
        let path = [CellPos::new(0, 0), CellPos::new(0, 1), CellPos::new(0, 2)];
        assert!((g.path_cost(&path) - 4.0).abs() < 1e-12);
    }

    #[test]
    fn out_of_bounds_is_an_error() {
        let mut g = Grid::new(3, 3).unwrap();
        let bad = CellPos::new(3, 0);
        let err = GridError::OutOfBounds { pos: bad, rows: 3, cols: 3 };
        assert_eq!(g.set_obstacle(bad, true).unwrap_err(), err);
        assert_eq!(g.set_cost(bad, 1).unwrap_err(), err);
        assert_eq!(g.kind(bad).unwrap_err(), err);
        assert!(g.set_start(bad).is_err());
    }
}

#[cfg(test)]
mod anchors {
    use mc_core::CellPos;
    use crate::{Grid, GridError};

    #[test]
    fn start_onto_goal_rejected() {
        let mut g = Grid::new(4, 4).unwrap();
        let goal = g.goal();
        assert!(!g.set_start(goal).unwrap());
        assert_eq!(g.start(), CellPos::new(0, 0));
        let start = g.start();
        assert!(!g.set_goal(start).unwrap());
        assert_eq!(g.goal(), goal);
    }

    #[test]
    fn anchor_onto_obstacle_clears_it() {
        let mut g = Grid::new(4, 4).unwrap();
        let p = CellPos::new(2, 1);
        g.set_obstacle(p, true).unwrap();
        assert!(g.set_goal(p).unwrap());
        assert_eq!(g.goal(), p);
        assert!(g.is_free(p));
    }

    #[test]
    fn set_anchors_conflict() {
        let mut g = Grid::new(4, 4).unwrap();
        let p = CellPos::new(1, 1);
        assert_eq!(g.set_anchors(p, p).unwrap_err(), GridError::AnchorConflict(p));
        g.set_anchors(CellPos::new(3, 0), CellPos::new(0, 3)).unwrap();
        assert_eq!(g.start(), CellPos::new(3, 0));
        assert_eq!(g.goal(), CellPos::new(0, 3));
    }
}

#[cfg(test)]
mod neighbors {
    use mc_core::CellPos;
    use crate::Grid;

    #[test]
    fn corner_has_two_neighbors_in_probe_order() {
        let g = Grid::new(3, 3).unwrap();
        let n = g.open_neighbors(CellPos::new(0, 0));
        // down, then right
        assert_eq!(n.as_slice(), &[CellPos::new(1, 0), CellPos::new(0, 1)]);
    }

    #[test]
    fn center_has_four_and_obstacles_excluded() {
        let mut g = Grid::new(3, 3).unwrap();
        let c = CellPos::new(1, 1);
        assert_eq!(g.open_neighbors(c).len(), 4);
        g.set_obstacle(CellPos::new(0, 1), true).unwrap();
        g.set_obstacle(CellPos::new(1, 2), true).unwrap();
        let n = g.open_neighbors(c);
        assert_eq!(n.as_slice(), &[CellPos::new(2, 1), CellPos::new(1, 0)]);
    }

    #[test]
    fn retain_filters_in_place() {
        let g = Grid::new(3, 3).unwrap();
        let mut n = g.open_neighbors(CellPos::new(1, 1));
        n.retain(|p| p.row == 1);
        assert_eq!(n.as_slice(), &[CellPos::new(1, 0), CellPos::new(1, 2)]);
        n.retain(|_| false);
        assert!(n.is_empty());
    }
}

#[cfg(test)]
mod resize {
    use mc_core::CellPos;
    use crate::{Grid, GridError};

    #[test]
    fn resize_resets_everything() {
        let mut g = Grid::new(4, 4).unwrap();
        g.set_cost(CellPos::new(0, 1), 7).unwrap();
        g.record_visit(CellPos::new(0, 1));
        g.set_anchors(CellPos::new(2, 2), CellPos::new(3, 0)).unwrap();

        assert_eq!(g.resize(6, 7).unwrap(), (6, 7));
        assert_eq!(g.start(), CellPos::new(0, 0));
        assert_eq!(g.goal(), CellPos::new(5, 6));
        assert!(g.costs().iter().all(|&c| c == 0));
        assert_eq!(g.max_visits(), 0);
        assert_eq!(g.cells().len(), 42);
        // Default layout reapplied where it fits.
        assert!(!g.is_free(CellPos::new(1, 1)));
        assert!(!g.is_free(CellPos::new(3, 5)));
    }

    #[test]
    fn resize_clamps_degenerate_requests() {
        let mut g = Grid::new(4, 4).unwrap();
        assert_eq!(g.resize(0, 0).unwrap(), (1, 2));
        assert_ne!(g.start(), g.goal());
        assert_eq!(g.resize(3, 0).unwrap(), (3, 1));
        assert_eq!(g.goal(), CellPos::new(2, 0));
    }

    #[test]
    fn overflowing_area_rejected() {
        let mut g = Grid::new(4, 4).unwrap();
        let huge = usize::MAX / 2;
        assert_eq!(g.resize(huge, 3).unwrap_err(), GridError::Dimensions { rows: huge, cols: 3 });
        // Grid untouched.
        assert_eq!((g.rows(), g.cols()), (4, 4));
        assert_eq!(
            Grid::new(usize::MAX, 2).unwrap_err(),
            GridError::Dimensions { rows: usize::MAX, cols: 2 }
        );
    }
}
