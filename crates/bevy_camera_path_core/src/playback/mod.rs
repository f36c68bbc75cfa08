mod controller;
mod events;
mod run;

pub use controller::*;
pub use events::*;
pub use run::*;
