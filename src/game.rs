use std::{thread::sleep, time::Duration};

use crate::{Coords, TermInt};
use crate::apple;
use crate::snake::{Snake, Direction};
use crate::term::{InputEvent, TermManager};

use rand::Rng;

const INITIAL_SNAKE_LENGTH: TermInt = 5;
const SNAKE_ORIGIN: Coords = (10, 10);
const INITIAL_DELAY_MICROS: f64 = 200_000.0;
const ACCELERATION_RATIO: f64 = 0.98;
const INITIAL_SCORE: u32 = 100;
const APPLE_SCORE: u32 = 100;
const GAME_OVER_HOLD: Duration = Duration::from_secs(3);

const SNAKE_BODY_CHAR: char = 'o';
const SNAKE_HEAD_CHAR: char = '@';
const APPLE_CHAR: char = 'a';

#[derive(Copy, Clone, PartialEq, Eq)]
pub enum Phase {
    Running,
    Over,
}

/// Everything the tick loop mutates: the snake, the single live apple, and
/// the score/speed counters. Rendering and timing live in `SnakeGame`.
pub struct Session {
    width: TermInt,
    height: TermInt,
    snake: Snake,
    apple: Coords,
    delay_micros: f64,
    score: u32,
    phase: Phase,
}

impl Session {
    pub fn new<R: Rng>(width: TermInt, height: TermInt, rng: &mut R) -> Self {
        let capacity = width as usize * height as usize;
        let snake = Snake::new(SNAKE_ORIGIN, INITIAL_SNAKE_LENGTH, capacity);
        let apple = apple::generate_with(rng, &snake, width, height);

        Session {
            width,
            height,
            snake,
            apple,
            delay_micros: INITIAL_DELAY_MICROS,
            score: INITIAL_SCORE,
            phase: Phase::Running,
        }
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn apple(&self) -> Coords {
        self.apple
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn delay_micros(&self) -> f64 {
        self.delay_micros
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::Over
    }

    pub fn head_on_apple(&self) -> bool {
        self.snake.head() == self.apple
    }

    /// Resolves an eaten apple: grow, respawn the apple off the grown body,
    /// speed up, score up. Happens before the move of the same tick.
    pub fn consume_apple<R: Rng>(&mut self, rng: &mut R) {
        self.snake.grow();
        self.apple = apple::generate_with(rng, &self.snake, self.width, self.height);
        self.delay_micros *= ACCELERATION_RATIO;
        self.score += APPLE_SCORE;
    }

    /// Moves the snake one step and runs the collision check that decides
    /// whether the session keeps running.
    pub fn advance(&mut self, turn: Option<Direction>) {
        self.snake.advance(turn, self.width, self.height);

        if self.snake.has_self_collision() {
            self.phase = Phase::Over;
        }
    }
}

pub struct SnakeGame {
    term: TermManager,
}

impl SnakeGame {
    pub fn new() -> Self {
        SnakeGame { term: TermManager::new() }
    }

    pub fn run(&mut self) {
        self.term.setup();

        let (width, height) = self.term.interior_size();
        let mut rng = rand::thread_rng();
        let mut session = Session::new(width, height, &mut rng);

        while !session.is_over() {
            self.term.clear();
            self.term.draw_border(width, height);
            self.term.draw_cell(session.apple(), APPLE_CHAR);

            if session.head_on_apple() {
                session.consume_apple(&mut rng);
            }

            let turn = match self.term.poll_input() {
                Some(InputEvent::Turn(dir)) => Some(dir),
                Some(InputEvent::Quit) => break,
                None => None,
            };

            session.advance(turn);

            if session.is_over() {
                self.show_game_over(width, height, session.score());
                break;
            }

            self.draw_snake(session.snake());
            self.term.draw_status(&format!("Score {}", session.score()));
            self.term.flush();

            sleep(Duration::from_micros(session.delay_micros() as u64));
        }

        self.term.restore();
    }

    ///////////////////////////////////////////////////////////////////////////

    fn draw_snake(&mut self, snake: &Snake) {
        let head = snake.head();

        for &pos in snake.body() {
            let ch = if pos == head { SNAKE_HEAD_CHAR } else { SNAKE_BODY_CHAR };
            self.term.draw_cell(pos, ch);
        }
    }

    fn show_game_over(&mut self, width: TermInt, height: TermInt, score: u32) {
        let center_x = width / 2;
        let center_y = height / 2;

        self.term.clear();
        self.term.draw_border(width, height);
        self.term.draw_text((center_x - 4, center_y - 1), "GAME OVER");
        self.term.draw_text((center_x - 4, center_y + 1), &format!("Score {}", score));
        self.term.flush();

        sleep(GAME_OVER_HOLD);
    }
}
