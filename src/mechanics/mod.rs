pub mod ruin;
pub mod stoch;

pub use ruin::*;
pub use stoch::*;
