pub mod controller;
pub mod menu;
