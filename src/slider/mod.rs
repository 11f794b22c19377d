pub mod controller;
pub mod engine;
pub mod slide;
