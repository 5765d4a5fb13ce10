pub mod codec;
pub mod error;
pub mod register;
pub mod token;

pub use codec::{decode, encode_cleared, RawLatch};
pub use error::{LatchError, LatchResult};
pub use register::{OverrideLatch, DEFAULT_REGISTER_OFFSET};
pub use token::SettingToken;
