multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Leaderboard Entry: one occupied slot of the ranking
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct LeaderboardEntry<M: ManagedTypeApi> {
    /// 1-based position on the board
    pub rank: usize,
    pub tipper: ManagedAddress<M>,
    pub total: BigUint<M>,
}

// ============================================================
// Tipper Info: everything known about a single sender
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct TipperInfo<M: ManagedTypeApi> {
    pub total: BigUint<M>,
    /// 0 when the sender is not on the leaderboard
    pub rank: usize,
    pub has_tipped: bool,
}
