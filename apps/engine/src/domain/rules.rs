use std::ops::RangeInclusive;

pub const PLAYERS: usize = 4;
pub const HAND_SIZE: usize = 12;
pub const TRICKS_PER_ROUND: u8 = 12;

pub const OPENING_BID: u8 = 20;
pub const BID_FLOOR: u8 = 30;
pub const BID_CEILING: u8 = 50;
/// Raw bidding action 0 means "pass".
pub const PASS: u8 = 0;

pub const PASS_CARDS: usize = 3;
/// C(12, 3)
pub const PASS_SUBSETS: usize = 220;

pub const LAST_TRICK_BONUS: u8 = 1;

/// Width of the raw bidding action space (0 = pass, 1..=50 = bid).
pub fn bid_action_range() -> RangeInclusive<u8> {
    PASS..=BID_CEILING
}
