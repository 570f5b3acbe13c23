//! Unit tests for mc-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentId, CellPos};

    #[test]
    fn agent_index_roundtrip() {
        let id = AgentId(7);
        assert_eq!(id.index(), 7);
        assert_eq!(AgentId::try_from(7usize).unwrap(), id);
        assert_eq!(id.to_string(), "AgentId(7)");
    }

    #[test]
    fn cell_flat_index_is_row_major() {
        assert_eq!(CellPos::new(0, 0).index(5), 0);
        assert_eq!(CellPos::new(1, 0).index(5), 5);
        assert_eq!(CellPos::new(2, 3).index(5), 13);
    }

    #[test]
    fn offset_stays_inside_grid() {
        let corner = CellPos::new(0, 0);
        assert_eq!(corner.offset((-1, 0), 3, 3), None);
        assert_eq!(corner.offset((0, -1), 3, 3), None);
        assert_eq!(corner.offset((1, 0), 3, 3), Some(CellPos::new(1, 0)));

        let far = CellPos::new(2, 2);
        assert_eq!(far.offset((1, 0), 3, 3), None);
        assert_eq!(far.offset((0, 1), 3, 3), None);
        assert_eq!(far.offset((0, -1), 3, 3), Some(CellPos::new(2, 1)));
    }

    #[test]
    fn manhattan_distance() {
        assert_eq!(CellPos::new(0, 0).manhattan(CellPos::new(4, 4)), 8);
        assert_eq!(CellPos::new(3, 1).manhattan(CellPos::new(1, 2)), 3);
    }

    #[test]
    fn display() {
        assert_eq!(CellPos::new(4, 9).to_string(), "(4, 9)");
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SimRng::new(99);
        let mut b = SimRng::new(99);
        for _ in 0..32 {
            assert_eq!(a.gen_range(0..1_000u32), b.gen_range(0..1_000u32));
        }
    }

    #[test]
    fn choose_empty_is_none() {
        let mut rng = SimRng::new(1);
        let empty: [u8; 0] = [];
        assert!(rng.choose(&empty).is_none());
    }

    #[test]
    fn choose_covers_every_element() {
        let mut rng = SimRng::new(3);
        let items = [0usize, 1, 2, 3];
        let mut seen = [false; 4];
        for _ in 0..200 {
            seen[*rng.choose(&items).unwrap()] = true;
        }
        assert!(seen.iter().all(|&s| s), "uniform choice missed an element: {seen:?}");
    }
}

#[cfg(test)]
mod config {
    use crate::{CoreError, WalkConfig};

    #[test]
    fn defaults_are_valid() {
        let cfg = WalkConfig::default();
        assert_eq!((cfg.rows, cfg.cols), (10, 10));
        assert_eq!(cfg.agent_count, 3);
        assert_eq!(cfg.max_simulations, 1_000);
        assert_eq!(cfg.max_steps_per_walk, 200);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn single_cell_grid_rejected() {
        let cfg = WalkConfig { rows: 1, cols: 1, ..WalkConfig::default() };
        assert!(matches!(cfg.validate(), Err(CoreError::Config(_))));
    }

    #[test]
    fn overflowing_grid_rejected() {
        let cfg = WalkConfig { rows: usize::MAX, cols: 2, ..WalkConfig::default() };
        assert!(matches!(cfg.validate(), Err(CoreError::Config(_))));
    }

    #[test]
    fn agent_count_bounds() {
        let zero = WalkConfig { agent_count: 0, ..WalkConfig::default() };
        assert!(zero.validate().is_err());
        let too_many = WalkConfig { agent_count: 21, ..WalkConfig::default() };
        assert!(too_many.validate().is_err());
    }

    #[test]
    fn paint_value_above_nine_rejected() {
        let cfg = WalkConfig { cost_paint_value: 10, ..WalkConfig::default() };
        assert!(cfg.validate().is_err());
    }
}
