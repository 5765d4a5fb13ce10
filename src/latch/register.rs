//! OverrideLatch binds the register codec to one early store at one fixed
//! platform offset and exposes the two caller-facing operations: read the
//! recorded override if the validity marker says the byte is meaningful,
//! and clear the register once the override has been consumed.
//!
//! Reads never change register content. Clearing is the protocol's only
//! writer; the fault-time producer that sets the byte lives outside this
//! crate and runs at a well-separated boot phase, which is why no locking
//! is layered on top of the store.
use log::debug;

use crate::{
    latch::{
        codec,
        error::{LatchError, LatchResult},
        token::SettingToken,
    },
    store::EarlyStore,
};

/// Platform-default offset of the override register within bank 0. Platforms
/// that park the byte elsewhere pass their own offset to `OverrideLatch::new`.
pub const DEFAULT_REGISTER_OFFSET: u8 = 0x48;

pub struct OverrideLatch<S: EarlyStore> {
    store: S,
    offset: u8,
}

impl<S: EarlyStore> OverrideLatch<S> {
    pub fn new(store: S, offset: u8) -> Self {
        Self { store, offset }
    }

    pub fn at_default_offset(store: S) -> Self {
        Self::new(store, DEFAULT_REGISTER_OFFSET)
    }

    /// Read the override recorded for `token`.
    ///
    /// Fails with `NotFound` when the validity marker is unset or when the
    /// token has no bit mapping; both are routine outcomes on a boot without
    /// a prior protection fault, not errors worth escalating.
    pub fn read(&mut self, token: SettingToken) -> LatchResult<bool> {
        let raw = codec::decode(self.store.read_byte(self.offset));
        if !raw.valid {
            return Err(LatchError::NotFound { token });
        }
        // Closed mapping: the register carries GlobalToggle and nothing
        // else. A new token must take an explicit arm here.
        match token {
            SettingToken::GlobalToggle => Ok(raw.toggle),
            SettingToken::NullDetection | SettingToken::HeapGuard => {
                Err(LatchError::NotFound { token })
            }
        }
    }

    /// Entry point for callers handing over an out-location. A missing
    /// destination fails before the store sees any access, keeping the
    /// argument error distinct from the `NotFound` an empty register
    /// produces.
    pub fn read_into(
        &mut self,
        token: SettingToken,
        dest: Option<&mut bool>,
    ) -> LatchResult<()> {
        let Some(dest) = dest else {
            return Err(LatchError::MissingDestination);
        };
        *dest = self.read(token)?;
        Ok(())
    }

    /// Reset the register to the empty pattern, whatever it held. Clearing
    /// an already-empty register rewrites the same zero byte.
    pub fn clear(&mut self) {
        self.store.write_byte(self.offset, codec::encode_cleared());
        debug!(
            "{}[{:#04X}] override cleared",
            self.store.name(),
            self.offset
        );
    }

    #[inline(always)]
    pub fn get_offset(&self) -> u8 {
        self.offset
    }

    pub fn get_store(&self) -> &S {
        &self.store
    }

    pub fn get_store_mut(&mut self) -> &mut S {
        &mut self.store
    }
}
