multiversx_sc::imports!();

use crate::errors::{ERR_INSUFFICIENT_FUNDS, ERR_UNAUTHORIZED, ERR_ZERO_AMOUNT};

/// Withdrawals of the collected tips by a single authorized address.
/// Custody itself stays with the chain: the balance is whatever EGLD the
/// contract account holds.
#[multiversx_sc::module]
pub trait TreasuryModule: crate::reentrancy::ReentrancyGuardModule {
    // ========================================================
    // ENDPOINT: withdraw
    // Sends the whole balance to the caller.
    // ========================================================

    #[endpoint(withdraw)]
    fn withdraw(&self) {
        self.enter_guarded();

        let caller = self.blockchain().get_caller();
        self.require_withdrawer(&caller);

        let amount = self.egld_balance();
        self.send_withdrawal(&caller, &amount);

        self.exit_guarded();
    }

    // ========================================================
    // ENDPOINT: withdrawAmount
    // ========================================================

    #[endpoint(withdrawAmount)]
    fn withdraw_amount(&self, amount: BigUint) {
        self.enter_guarded();

        let caller = self.blockchain().get_caller();
        self.require_withdrawer(&caller);

        self.send_withdrawal(&caller, &amount);

        self.exit_guarded();
    }

    // ========================================================
    // ENDPOINT: setAuthorizedWithdrawer
    // Hands the withdrawal capability to another address.
    // ========================================================

    #[only_owner]
    #[endpoint(setAuthorizedWithdrawer)]
    fn set_authorized_withdrawer(&self, withdrawer: ManagedAddress) {
        self.authorized_withdrawer().set(&withdrawer);
        self.withdrawer_changed_event(&withdrawer);
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    /// Stores who may withdraw. Called once from `init`.
    fn init_treasury(&self, withdrawer: &ManagedAddress) {
        self.authorized_withdrawer().set(withdrawer);
    }

    fn is_authorized_withdrawer(&self, caller: &ManagedAddress) -> bool {
        let withdrawer = self.authorized_withdrawer();
        !withdrawer.is_empty() && withdrawer.get() == *caller
    }

    fn require_withdrawer(&self, caller: &ManagedAddress) {
        require!(self.is_authorized_withdrawer(caller), ERR_UNAUTHORIZED);
    }

    fn send_withdrawal(&self, recipient: &ManagedAddress, amount: &BigUint) {
        require!(*amount > 0u64, ERR_ZERO_AMOUNT);

        let balance = self.egld_balance();
        require!(*amount <= balance, ERR_INSUFFICIENT_FUNDS);

        // Bookkeeping first; a failed transfer reverts it with the transaction
        self.total_withdrawn().update(|total| *total += amount);
        let remaining = &balance - amount;

        self.send().direct_egld(recipient, amount);
        self.withdrawal_event(recipient, amount, &remaining);
    }

    fn egld_balance(&self) -> BigUint {
        self.blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::egld(), 0)
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getBalance)]
    fn get_balance(&self) -> BigUint {
        self.egld_balance()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("withdrawal")]
    fn withdrawal_event(
        &self,
        #[indexed] recipient: &ManagedAddress,
        #[indexed] amount: &BigUint,
        remaining_balance: &BigUint,
    );

    #[event("withdrawerChanged")]
    fn withdrawer_changed_event(&self, #[indexed] withdrawer: &ManagedAddress);

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(getAuthorizedWithdrawer)]
    #[storage_mapper("authorizedWithdrawer")]
    fn authorized_withdrawer(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(totalWithdrawn)]
    #[storage_mapper("totalWithdrawn")]
    fn total_withdrawn(&self) -> SingleValueMapper<BigUint>;
}
