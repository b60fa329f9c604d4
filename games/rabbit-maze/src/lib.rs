use wasm_bindgen::prelude::*;

mod game;
mod maze;
mod sounds;
mod state;
use game::RabbitMaze;

maze_web::export_game!(RabbitMaze, "rabbit-maze");
