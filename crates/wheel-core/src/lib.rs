pub mod constants;
pub mod mapper;
pub mod wheel;
pub mod words;

pub use constants::*;
pub use mapper::*;
pub use wheel::*;
pub use words::*;
