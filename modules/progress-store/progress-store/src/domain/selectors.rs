//! Pure projections over a store snapshot, consumed by UI badges.

use progress_store_sdk::{StoreSnapshot, FIRST_DAY, LAST_DAY};

/// Whether `day` has been marked complete. Days outside 1..=8 are never complete.
#[must_use]
pub fn is_day_complete(state: &StoreSnapshot, day: u8) -> bool {
    state.completed_days.contains(day)
}

macro_rules! day_selectors {
    ($($name:ident => $day:literal),* $(,)?) => {
        $(
            #[doc = concat!("Whether day ", stringify!($day), " is complete.")]
            #[must_use]
            pub fn $name(state: &StoreSnapshot) -> bool {
                is_day_complete(state, $day)
            }
        )*
    };
}

day_selectors! {
    is_day1_complete => 1,
    is_day2_complete => 2,
    is_day3_complete => 3,
    is_day4_complete => 4,
    is_day5_complete => 5,
    is_day6_complete => 6,
    is_day7_complete => 7,
    is_day8_complete => 8,
}

/// Number of completed days.
#[must_use]
pub fn completed_count(state: &StoreSnapshot) -> usize {
    state.completed_days.len()
}

/// Whether every day from 1 to 8 is complete.
#[must_use]
pub fn all_days_complete(state: &StoreSnapshot) -> bool {
    (FIRST_DAY..=LAST_DAY).all(|day| is_day_complete(state, day))
}
