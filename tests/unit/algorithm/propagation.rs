//! Tests for worklist propagation and the pending-cell queue

#[cfg(test)]
mod tests {
    use sockettile::algorithm::bitset::TileBitset;
    use sockettile::algorithm::compatibility::CompatibilityIndex;
    use sockettile::algorithm::propagation::{
        Contradiction, PropagationEngine, PropagationQueue, PropagationReport, find_unsupported,
    };
    use sockettile::spatial::direction::Direction;
    use sockettile::spatial::grid::Grid;
    use sockettile::spatial::tiles::TileDescriptor;

    fn chain_pair() -> CompatibilityIndex {
        let a = TileDescriptor::new("a", "x", "a", "p");
        let b = TileDescriptor::new("b", "q", "b", "x");
        CompatibilityIndex::new(vec![a, b])
    }

    // Tests duplicate positions are held once while queued
    // Verified by removing the queued check in push
    #[test]
    fn test_queue_deduplication() {
        let mut queue = PropagationQueue::new(3, 3);
        queue.push([1, 2]);
        queue.push([0, 0]);
        queue.push([1, 2]);
        assert_eq!(queue.len(), 2);

        assert_eq!(queue.take_next(), Some([1, 2]));
        queue.push([1, 2]);
        assert_eq!(queue.len(), 2);

        assert_eq!(queue.take_next(), Some([0, 0]));
        assert_eq!(queue.take_next(), Some([1, 2]));
        assert!(queue.take_next().is_none());
        assert!(queue.is_empty());
    }

    #[test]
    fn test_queue_clear_allows_requeue() {
        let mut queue = PropagationQueue::new(2, 2);
        queue.push([1, 1]);
        queue.clear();
        assert!(queue.is_empty());

        queue.push([1, 1]);
        assert_eq!(queue.len(), 1);
    }

    // Collapsing the left cell to A must shrink the right cell to exactly B
    // Verified by discarding the restricted candidate set
    #[test]
    fn test_collapse_restricts_neighbor() {
        let index = chain_pair();
        let mut grid = Grid::new(2, 1, index.tiles()).expect("valid grid");
        let mut engine = PropagationEngine::new(&grid);

        let collapsed = grid.cell_mut([0, 0]).is_some_and(|cell| cell.collapse_to(0));
        assert!(collapsed);

        let report = engine
            .propagate_from(&mut grid, &index, [0, 0])
            .expect("no contradiction");
        let right = grid.cell([1, 0]).map(|cell| cell.candidates().to_vec());
        assert_eq!(right, Some(vec![1]));
        assert_eq!(report.cells_changed, 1);
        assert_eq!(report.candidates_removed, 1);
    }

    // Changes cascade beyond the direct neighbors of the origin
    #[test]
    fn test_changes_cascade_along_chain() {
        // Each tile only accepts the next one on its right
        let tiles = vec![
            TileDescriptor::new("0", "a", "0", "z"),
            TileDescriptor::new("0", "b", "0", "a"),
            TileDescriptor::new("0", "c", "0", "b"),
            TileDescriptor::new("0", "d", "0", "c"),
        ];
        let index = CompatibilityIndex::new(tiles);
        let mut grid = Grid::new(4, 1, index.tiles()).expect("valid grid");
        let mut engine = PropagationEngine::new(&grid);

        if let Some(cell) = grid.cell_mut([0, 0]) {
            cell.collapse_to(0);
        }
        engine
            .propagate_from(&mut grid, &index, [0, 0])
            .expect("no contradiction");

        for x in 0..4 {
            assert_eq!(
                grid.cell([x, 0]).and_then(|cell| cell.collapsed_tile()),
                Some(x)
            );
        }
        assert!(find_unsupported(&grid, &index).is_none());
    }

    // Propagation stops at the first emptied cell and reports it
    // Verified by continuing to propagate from the empty cell
    #[test]
    fn test_contradiction_reported() {
        let index = CompatibilityIndex::new(vec![TileDescriptor::new("0", "x", "0", "y")]);
        let mut grid = Grid::new(3, 1, index.tiles()).expect("valid grid");
        let mut engine = PropagationEngine::new(&grid);

        let result = engine.propagate_from(&mut grid, &index, [1, 0]);
        assert_eq!(
            result,
            Err(Contradiction {
                position: [2, 0],
                source: [1, 0],
                direction: Direction::Right,
            })
        );
        assert_eq!(grid.contradicted_cells(), vec![[2, 0]]);
        // The cell on the other side was never reached
        assert_eq!(grid.cell([0, 0]).map(|cell| cell.entropy()), Some(1));
    }

    #[test]
    fn test_contradiction_display_names_cells() {
        let contradiction = Contradiction {
            position: [2, 0],
            source: [1, 0],
            direction: Direction::Right,
        };
        assert_eq!(
            contradiction.to_string(),
            "cell (2, 0) emptied by its left neighbor (1, 0)"
        );
    }

    // Settling the whole grid removes tiles that lack partners anywhere
    #[test]
    fn test_propagate_all_settles_grid() {
        let upper = TileDescriptor::new("a", "z", "b", "z");
        let lower = TileDescriptor::new("b", "z", "c", "z");
        let index = CompatibilityIndex::new(vec![upper, lower]);
        let mut grid = Grid::new(1, 2, index.tiles()).expect("valid grid");
        let mut engine = PropagationEngine::new(&grid);

        assert!(find_unsupported(&grid, &index).is_some());

        let report = engine
            .propagate_all(&mut grid, &index)
            .expect("no contradiction");
        assert_eq!(
            grid.cell([0, 0]).and_then(|cell| cell.collapsed_tile()),
            Some(0)
        );
        assert_eq!(
            grid.cell([0, 1]).and_then(|cell| cell.collapsed_tile()),
            Some(1)
        );
        assert_eq!(report.cells_changed, 2);
        assert_eq!(report.candidates_removed, 2);
        assert!(find_unsupported(&grid, &index).is_none());
    }

    // A consistent grid is a fixed point: nothing is removed
    #[test]
    fn test_consistent_grid_is_fixed_point() {
        let index = chain_pair();
        let mut grid = Grid::new(1, 3, index.tiles()).expect("valid grid");
        let mut engine = PropagationEngine::new(&grid);
        let before = grid.clone();

        let report = engine
            .propagate_all(&mut grid, &index)
            .expect("no contradiction");
        assert_eq!(report.candidates_removed, 0);
        assert_eq!(report.cells_visited, 3);
        assert_eq!(grid, before);
        assert_ne!(report, PropagationReport::default());
    }

    #[test]
    fn test_find_unsupported_reports_offender() {
        let index = chain_pair();
        let mut grid = Grid::new(2, 1, index.tiles()).expect("valid grid");
        if let Some(cell) = grid.cell_mut([1, 0]) {
            cell.restrict_to(&TileBitset::single(2, 0));
        }

        // Neither candidate on the left accepts A on its right
        let offender = find_unsupported(&grid, &index);
        assert_eq!(offender, Some(([0, 0], 0, Direction::Right)));
    }
}
