pub mod channel;
pub mod context;
pub mod destination;
pub mod message;
pub mod tags;
pub mod user;
