pub mod session;
pub mod terminal;
