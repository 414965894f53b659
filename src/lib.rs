#![no_std]

multiversx_sc::imports!();

pub mod errors;
pub mod leaderboard;
pub mod ledger;
pub mod reentrancy;
pub mod treasury;
pub mod types;

use leaderboard::LEADERBOARD_SIZE;

// ============================================================
// Contract
// ============================================================

/// Tip jar: collects EGLD tips, keeps per-tipper totals and a live top-10.
#[multiversx_sc::contract]
pub trait TipJar:
    ledger::LedgerModule
    + leaderboard::LeaderboardModule
    + treasury::TreasuryModule
    + reentrancy::ReentrancyGuardModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    /// Everything starts empty. Withdrawals go to `withdrawer`, or to the
    /// deployer when none is given.
    #[init]
    fn init(&self, withdrawer: OptionalValue<ManagedAddress>) {
        let withdrawer = match withdrawer {
            OptionalValue::Some(address) => address,
            OptionalValue::None => self.blockchain().get_caller(),
        };
        self.init_treasury(&withdrawer);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: tip
    // ========================================================

    #[endpoint(tip)]
    #[payable("EGLD")]
    fn tip(&self) {
        let caller = self.blockchain().get_caller();
        let amount = self.call_value().egld_value().clone_value();

        self.enter_guarded();
        self.process_tip(&caller, &amount);
        self.exit_guarded();
    }

    // ========================================================
    // ENDPOINT: tipWithMessage
    // The message is only surfaced in the event, never stored.
    // ========================================================

    #[endpoint(tipWithMessage)]
    #[payable("EGLD")]
    fn tip_with_message(&self, message: ManagedBuffer) {
        let caller = self.blockchain().get_caller();
        let amount = self.call_value().egld_value().clone_value();

        self.enter_guarded();
        self.process_tip(&caller, &amount);
        self.tip_message_event(&caller, &amount, &message);
        self.exit_guarded();
    }

    // ========================================================
    // ENDPOINT: receive
    // Plain value transfer. Zero value is accepted and ignored.
    // ========================================================

    #[endpoint(receive)]
    #[payable("EGLD")]
    fn receive_value(&self) {
        let caller = self.blockchain().get_caller();
        let amount = self.call_value().egld_value().clone_value();

        self.enter_guarded();
        if amount > 0u64 {
            self.process_tip(&caller, &amount);
        }
        self.exit_guarded();
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn process_tip(&self, tipper: &ManagedAddress, amount: &BigUint) {
        self.record_tip(tipper, amount);
        self.refresh_leaderboard(tipper);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getContractConfig)]
    fn get_contract_config(&self) -> MultiValue3<usize, ManagedAddress, ManagedAddress> {
        let owner = self.blockchain().get_owner_address();
        let withdrawer = self.authorized_withdrawer().get();
        (LEADERBOARD_SIZE, owner, withdrawer).into()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("tipMessage")]
    fn tip_message_event(
        &self,
        #[indexed] tipper: &ManagedAddress,
        #[indexed] amount: &BigUint,
        message: &ManagedBuffer,
    );
}
