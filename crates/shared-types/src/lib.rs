pub mod certificate;
pub mod error;
pub mod ftm;
pub mod user;

pub use certificate::*;
pub use error::*;
pub use ftm::*;
pub use user::*;
