use rand::Rng;

use crate::{Coords, TermInt};
use crate::snake::Snake;

/// Picks a uniformly random free cell in `[1, width] x [1, height]`,
/// resampling until the candidate misses the snake. Assumes the snake leaves
/// at least one cell free, which holds for any playable grid size.
pub fn generate(snake: &Snake, width: TermInt, height: TermInt) -> Coords {
    generate_with(&mut rand::thread_rng(), snake, width, height)
}

pub fn generate_with<R: Rng>(rng: &mut R, snake: &Snake, width: TermInt, height: TermInt) -> Coords {
    loop {
        let candidate = (rng.gen_range(1..=width), rng.gen_range(1..=height));
        if !snake.occupies(candidate) {
            return candidate;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn never_lands_on_the_snake() {
        let mut rng = StdRng::seed_from_u64(42);
        let snake = Snake::new((2, 4), 5, 64);

        for _ in 0..200 {
            let apple = generate_with(&mut rng, &snake, 8, 8);
            assert!(!snake.occupies(apple));
            assert!((1..=8).contains(&apple.0) && (1..=8).contains(&apple.1));
        }
    }

    #[test]
    fn finds_the_free_cells_on_a_cramped_grid() {
        let mut rng = StdRng::seed_from_u64(7);
        // Snake fills all of row 1 on a 4x2 grid; only row 2 remains.
        let snake = Snake::new((1, 1), 4, 16);

        for _ in 0..100 {
            let apple = generate_with(&mut rng, &snake, 4, 2);
            assert_eq!(apple.1, 2);
        }
    }
}
