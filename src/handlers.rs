pub mod health;
pub mod historical;
pub mod predict;
