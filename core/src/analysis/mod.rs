pub use evaluate::*;
pub use knowledge::*;
pub use space::*;

mod evaluate;
mod knowledge;
mod space;
