//! Port speed constants.

/// Bits per second in one gigabit.
pub const BITS_PER_GIGABIT: u64 = 1_000_000_000;

pub const TEN_GIG_BPS: u64 = 10 * BITS_PER_GIGABIT;
pub const TWENTY_GIG_BPS: u64 = 20 * BITS_PER_GIGABIT;
pub const TWENTY_FIVE_GIG_BPS: u64 = 25 * BITS_PER_GIGABIT;
pub const FORTY_GIG_BPS: u64 = 40 * BITS_PER_GIGABIT;
pub const FIFTY_GIG_BPS: u64 = 50 * BITS_PER_GIGABIT;
pub const HUNDRED_GIG_BPS: u64 = 100 * BITS_PER_GIGABIT;

/// Every speed that has a canonical string name, slowest first.
pub const NAMED_SPEEDS_BPS: [u64; 6] = [
    TEN_GIG_BPS,
    TWENTY_GIG_BPS,
    TWENTY_FIVE_GIG_BPS,
    FORTY_GIG_BPS,
    FIFTY_GIG_BPS,
    HUNDRED_GIG_BPS,
];
