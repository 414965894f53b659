multiversx_sc::imports!();

use crate::errors::ERR_INVALID_AMOUNT;

/// Running totals per tipper plus the aggregate counters.
/// Individual tips are never stored, only what they add up to.
#[multiversx_sc::module]
pub trait LedgerModule {
    // ========================================================
    // INTERNAL: record a tip
    // Returns the tipper's new cumulative total.
    // ========================================================

    fn record_tip(&self, tipper: &ManagedAddress, amount: &BigUint) -> BigUint {
        require!(*amount > 0u64, ERR_INVALID_AMOUNT);

        if !self.has_tipped(tipper).get() {
            self.has_tipped(tipper).set(true);
            self.tippers().push(tipper);
        }

        let new_total = self.tips_by_address(tipper).update(|total| {
            *total += amount;
            total.clone()
        });
        self.total_tips().update(|total| *total += amount);

        self.tip_received_event(tipper, amount, &new_total);

        new_total
    }

    // ========================================================
    // VIEWS
    // ========================================================

    /// Page through tippers in first-tip order. Out of range pages are empty.
    #[view(getTippers)]
    fn get_tippers(
        &self,
        offset: usize,
        limit: usize,
    ) -> MultiValue2<ManagedVec<ManagedAddress>, ManagedVec<BigUint>> {
        let mut tippers = ManagedVec::new();
        let mut amounts = ManagedVec::new();

        let total = self.tippers().len();
        let end = core::cmp::min(offset.saturating_add(limit), total);

        for idx in offset..end {
            // VecMapper is 1-based
            let tipper = self.tippers().get(idx + 1);
            amounts.push(self.tips_by_address(&tipper).get());
            tippers.push(tipper);
        }

        (tippers, amounts).into()
    }

    #[view(uniqueTippers)]
    fn unique_tippers(&self) -> usize {
        self.tippers().len()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("tipReceived")]
    fn tip_received_event(
        &self,
        #[indexed] tipper: &ManagedAddress,
        #[indexed] amount: &BigUint,
        new_total: &BigUint,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(tipsByAddress)]
    #[storage_mapper("tipsByAddress")]
    fn tips_by_address(&self, tipper: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[view(totalTips)]
    #[storage_mapper("totalTips")]
    fn total_tips(&self) -> SingleValueMapper<BigUint>;

    #[view(hasTipped)]
    #[storage_mapper("hasTipped")]
    fn has_tipped(&self, tipper: &ManagedAddress) -> SingleValueMapper<bool>;

    /// Append-only, first-tip order
    #[storage_mapper("tippers")]
    fn tippers(&self) -> VecMapper<ManagedAddress>;
}
