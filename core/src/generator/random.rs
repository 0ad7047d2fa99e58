use alloc::vec::Vec;
use ndarray::Array2;

use super::*;

/// Picks mine cells uniformly at random among every cell except the excluded one.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RandomMineGenerator {
    seed: u64,
}

impl RandomMineGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MineGenerator for RandomMineGenerator {
    fn generate(self, config: GameConfig, exclude: Coord2) -> Result<MineLayout> {
        use rand::prelude::*;

        let config = config.validate()?;
        if exclude.0 >= config.size || exclude.1 >= config.size {
            return Err(GameError::OutOfBounds);
        }

        let mut candidates: Vec<Coord2> = (0..config.size)
            .flat_map(|row| (0..config.size).map(move |col| (row, col)))
            .filter(|&coords| coords != exclude)
            .collect();

        // partial Fisher-Yates: the first `mines` slots end up a uniform sample
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mines = usize::from(config.mines);
        for i in 0..mines {
            let j = rng.random_range(i..candidates.len());
            candidates.swap(i, j);
        }

        let mut mine_mask: Array2<bool> = Array2::default((config.size, config.size).to_nd_index());
        for &coords in &candidates[..mines] {
            mine_mask[coords.to_nd_index()] = true;
        }

        let layout = MineLayout::from_mine_mask(mine_mask);
        log::debug!(
            "Placed {} mines on a {}x{} board, first move at {:?}",
            layout.mine_count(),
            config.size,
            config.size,
            exclude
        );
        Ok(layout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn places_exact_count_and_skips_excluded_cell() {
        let config = GameConfig::new(5, 5).unwrap();

        for seed in 0..64 {
            let layout = RandomMineGenerator::new(seed).generate(config, (2, 2)).unwrap();
            assert_eq!(layout.mine_count(), 5);
            assert!(!layout.contains_mine((2, 2)));
        }
    }

    #[test]
    fn fills_every_other_cell_on_densest_board() {
        let config = GameConfig::new(3, 8).unwrap();
        let layout = RandomMineGenerator::new(7).generate(config, (0, 0)).unwrap();

        assert_eq!(layout.mine_count(), 8);
        assert!(!layout.contains_mine((0, 0)));
    }

    #[test]
    fn same_seed_same_layout() {
        let config = GameConfig::new(9, 10).unwrap();
        let a = RandomMineGenerator::new(42).generate(config, (4, 4)).unwrap();
        let b = RandomMineGenerator::new(42).generate(config, (4, 4)).unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn rejects_excluded_cell_outside_of_board() {
        let config = GameConfig::new(3, 1).unwrap();
        assert_eq!(
            RandomMineGenerator::new(0).generate(config, (0, 3)),
            Err(GameError::OutOfBounds)
        );
    }

    #[test]
    fn fixed_layout_must_match_board_and_keep_first_move_safe() {
        let config = GameConfig::new(3, 1).unwrap();
        let layout = MineLayout::from_mine_coords(3, &[(0, 0)]).unwrap();

        assert_eq!(
            layout.clone().generate(config, (0, 0)),
            Err(GameError::InvalidParameters)
        );
        assert_eq!(
            layout.clone().generate(GameConfig::new(4, 1).unwrap(), (1, 1)),
            Err(GameError::InvalidParameters)
        );
        assert_eq!(layout.clone().generate(config, (1, 1)), Ok(layout));
    }
}
