// Utils compartidos

pub mod constants;
pub mod storage;
pub mod dates;
pub mod status;

pub use constants::*;
pub use storage::*;
pub use dates::*;
pub use status::*;
