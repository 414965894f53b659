multiversx_sc::imports!();

use crate::errors::ERR_REENTRANT;

/// Single contract-wide busy flag. A nested call into any guarded endpoint
/// is rejected, never queued. A failed transaction reverts the flag with
/// the rest of its writes, so it cannot stay stuck.
#[multiversx_sc::module]
pub trait ReentrancyGuardModule {
    fn enter_guarded(&self) {
        require!(!self.reentrancy_lock().get(), ERR_REENTRANT);
        self.reentrancy_lock().set(true);
    }

    fn exit_guarded(&self) {
        self.reentrancy_lock().clear();
    }

    #[storage_mapper("reentrancyLock")]
    fn reentrancy_lock(&self) -> SingleValueMapper<bool>;
}
