mod configuration_error;
mod input_error;
mod serial_error;

pub use configuration_error::*;
pub use input_error::*;
pub use serial_error::*;
