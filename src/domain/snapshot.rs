//! Status snapshot — the value reported by `GET /status`.
//!
//! A snapshot is generated fresh for every request and discarded after
//! serialization. All numeric fields are drawn independently and uniformly
//! from fixed closed intervals, then rounded to their reporting precision.

use std::ops::RangeInclusive;

use rand::Rng;
use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────
// Reporting ranges
// ────────────────────────────────────────────

/// Number of open trades.
pub const ACTIVE_TRADES_RANGE: RangeInclusive<u32> = 1..=10;

/// Profit booked since midnight, in USDT.
pub const PROFIT_TODAY_RANGE: RangeInclusive<f64> = 50.0..=500.0;

/// Errors observed since the last restart.
pub const ERRORS_RANGE: RangeInclusive<u32> = 0..=2;

/// Quote-currency wallet balance.
pub const USDT_BALANCE_RANGE: RangeInclusive<f64> = 1000.0..=5000.0;

/// Base-currency wallet balance.
pub const BTC_BALANCE_RANGE: RangeInclusive<f64> = 0.1..=1.0;

/// Fractional digits kept for USDT amounts.
pub const USDT_DECIMALS: i32 = 2;

/// Fractional digits kept for BTC amounts.
pub const BTC_DECIMALS: i32 = 4;

/// Trading pairs the bot reports as watched, in order.
pub const WATCHING_PAIRS: [&str; 2] = ["BTC/USDT", "ETH/USDT"];

/// Lifecycle state reported by the bot.
///
/// The simulated bot only ever reports `Active`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BotState {
    Active,
}

impl std::fmt::Display for BotState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
        }
    }
}

/// One generated instance of the status payload.
///
/// Field order matches the JSON wire order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusSnapshot {
    pub status: BotState,
    pub active_trades: u32,
    pub profit_today: f64,
    pub errors: u32,
    pub usdt_balance: f64,
    pub btc_balance: f64,
    pub watching_pairs: Vec<String>,
}

impl StatusSnapshot {
    /// Draw a snapshot from the given random source.
    ///
    /// Each field is an independent uniform draw from its range. Decimal
    /// fields are rounded after drawing; the bounds are exact at their
    /// precision, so rounding never leaves the range.
    pub fn draw<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            status: BotState::Active,
            active_trades: rng.gen_range(ACTIVE_TRADES_RANGE),
            profit_today: round_dp(rng.gen_range(PROFIT_TODAY_RANGE), USDT_DECIMALS),
            errors: rng.gen_range(ERRORS_RANGE),
            usdt_balance: round_dp(rng.gen_range(USDT_BALANCE_RANGE), USDT_DECIMALS),
            btc_balance: round_dp(rng.gen_range(BTC_BALANCE_RANGE), BTC_DECIMALS),
            watching_pairs: watching_pairs(),
        }
    }

    /// Check every field against its reporting range.
    pub fn is_within_bounds(&self) -> bool {
        self.status == BotState::Active
            && ACTIVE_TRADES_RANGE.contains(&self.active_trades)
            && PROFIT_TODAY_RANGE.contains(&self.profit_today)
            && ERRORS_RANGE.contains(&self.errors)
            && USDT_BALANCE_RANGE.contains(&self.usdt_balance)
            && BTC_BALANCE_RANGE.contains(&self.btc_balance)
            && self.watching_pairs == WATCHING_PAIRS
    }
}

/// Owned copy of [`WATCHING_PAIRS`].
pub fn watching_pairs() -> Vec<String> {
    WATCHING_PAIRS.iter().map(ToString::to_string).collect()
}

/// Round half away from zero to `decimals` fractional digits.
///
/// `k / 10^d` is a single correctly-rounded division, so the result is the
/// closest `f64` to the decimal value and prints with at most `d` digits.
pub fn round_dp(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
