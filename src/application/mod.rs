pub mod client;
pub mod showcase;

pub use client::client_code;
pub use showcase::Showcase;
