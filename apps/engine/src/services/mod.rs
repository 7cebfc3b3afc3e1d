pub mod game_flow;
