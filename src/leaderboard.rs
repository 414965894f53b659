multiversx_sc::imports!();

use crate::types::{LeaderboardEntry, TipperInfo};

/// Number of ranked slots
pub const LEADERBOARD_SIZE: usize = 10;

/// Fixed-size top-10 ranking, ordered by the ledger totals.
///
/// Totals only ever grow, so the only mutation this board supports is moving
/// a single tipper up (or onto it) after their total increased. Slots are
/// stored individually and empty slots only appear after all occupied ones.
#[multiversx_sc::module]
pub trait LeaderboardModule: crate::ledger::LedgerModule {
    // ========================================================
    // INTERNAL: reposition a tipper whose total just grew
    // ========================================================

    fn refresh_leaderboard(&self, tipper: &ManagedAddress) {
        let total = self.tips_by_address(tipper).get();

        let mut current_pos: Option<usize> = None;
        let mut target_pos: Option<usize> = None;

        for index in 0..LEADERBOARD_SIZE {
            let slot = self.leaderboard_slot(index);
            if slot.is_empty() {
                if target_pos.is_none() {
                    target_pos = Some(index);
                }
                break;
            }

            let occupant = slot.get();
            if occupant == *tipper {
                current_pos = Some(index);
                // Already dominated everything below, and the total only grew
                if target_pos.is_none() {
                    target_pos = Some(index);
                }
                break;
            }

            // Strict: equal totals never displace an existing occupant
            if target_pos.is_none() && total > self.tips_by_address(&occupant).get() {
                target_pos = Some(index);
            }
        }

        let target = match target_pos {
            Some(target) => target,
            None => return,
        };

        if current_pos != Some(target) {
            // Close the tipper's old gap (or drop the last slot) while
            // opening a gap at the target, in a single right shift.
            let end = current_pos.unwrap_or(LEADERBOARD_SIZE - 1);
            for index in (target + 1..=end).rev() {
                let previous = self.leaderboard_slot(index - 1);
                // Empty slots only sit at the tail, so the destination is empty too
                if previous.is_empty() {
                    continue;
                }
                self.leaderboard_slot(index).set(previous.get());
            }
            self.leaderboard_slot(target).set(tipper);
        }

        self.leaderboard_updated_event(tipper, target + 1, &total);
    }

    fn rank_of(&self, tipper: &ManagedAddress) -> usize {
        for index in 0..LEADERBOARD_SIZE {
            let slot = self.leaderboard_slot(index);
            if slot.is_empty() {
                break;
            }
            if slot.get() == *tipper {
                return index + 1;
            }
        }
        0
    }

    // ========================================================
    // VIEWS
    // ========================================================

    /// All ten slots. Empty slots read as the zero address with amount 0.
    #[view(getLeaderboard)]
    fn get_leaderboard(&self) -> MultiValue2<ManagedVec<ManagedAddress>, ManagedVec<BigUint>> {
        let mut tippers = ManagedVec::new();
        let mut amounts = ManagedVec::new();

        for index in 0..LEADERBOARD_SIZE {
            let slot = self.leaderboard_slot(index);
            if slot.is_empty() {
                tippers.push(ManagedAddress::zero());
                amounts.push(BigUint::zero());
            } else {
                let tipper = slot.get();
                amounts.push(self.tips_by_address(&tipper).get());
                tippers.push(tipper);
            }
        }

        (tippers, amounts).into()
    }

    #[view(getTopTippers)]
    fn get_top_tippers(&self) -> MultiValueEncoded<LeaderboardEntry<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        for index in 0..LEADERBOARD_SIZE {
            let slot = self.leaderboard_slot(index);
            if slot.is_empty() {
                break;
            }
            let tipper = slot.get();
            let total = self.tips_by_address(&tipper).get();
            result.push(LeaderboardEntry {
                rank: index + 1,
                tipper,
                total,
            });
        }
        result
    }

    /// 1-based rank, 0 when not on the board
    #[view(getRank)]
    fn get_rank(&self, tipper: &ManagedAddress) -> usize {
        self.rank_of(tipper)
    }

    #[view(getTipperInfo)]
    fn get_tipper_info(&self, tipper: &ManagedAddress) -> TipperInfo<Self::Api> {
        TipperInfo {
            total: self.tips_by_address(tipper).get(),
            rank: self.rank_of(tipper),
            has_tipped: self.has_tipped(tipper).get(),
        }
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("leaderboardUpdated")]
    fn leaderboard_updated_event(
        &self,
        #[indexed] tipper: &ManagedAddress,
        #[indexed] rank: usize,
        total: &BigUint,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("leaderboardSlot")]
    fn leaderboard_slot(&self, index: usize) -> SingleValueMapper<ManagedAddress>;
}
