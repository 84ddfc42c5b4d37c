pub mod agent;
pub mod board;
pub mod error;
pub mod evaluation;
pub mod game;
pub mod protocol;
pub mod rules;
pub mod search;
pub mod time;
pub mod types;
