pub mod bar;
pub mod horizon;
pub mod signals;

pub use bar::*;
pub use horizon::*;
pub use signals::*;
