mod apple;
mod game;
mod snake;
mod term;

pub type TermInt = u16;
pub type Coords = (u16, u16);

fn main() {
    let mut game = game::SnakeGame::new();
    game.run();
}
