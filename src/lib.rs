pub mod bot;
pub mod commands;
pub mod config;
pub mod entities;
pub mod error;
pub mod http;
pub mod sink;

#[cfg(test)]
mod testing;
