//! CLI commands for pathfind

pub mod dijkstra;
pub mod dispatch;
pub mod ladder;
pub mod verify;
