//! Illustrative diagram sample data
//!
//! Each diagram tag maps to a generator that synthesizes the dataset a
//! renderer draws from. All data here is illustrative only: boundedly
//! randomized or fixed showcase values with no trading-accuracy guarantee.
//! Generators are pure over the supplied RNG; there is no persistence or
//! cross-render consistency requirement.

use crate::transcript::DiagramTag;
use rand::Rng;
use serde::Serialize;

/// Bars per candlestick series.
pub const CANDLE_COUNT: u32 = 12;

const BASE_PRICE: f64 = 100.0;

/// Directional drift applied to a generated candlestick series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Bullish,
    Bearish,
    Flat,
}

impl Trend {
    fn drift(self) -> f64 {
        match self {
            Trend::Bullish => 1.0,
            Trend::Bearish => -1.0,
            Trend::Flat => 0.0,
        }
    }
}

/// One open/high/low/close bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CandleBar {
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl CandleBar {
    pub fn is_bullish(&self) -> bool {
        self.close > self.open
    }
}

/// Generate a fixed-count candlestick series around a base price of 100.
///
/// Guarantees `high >= max(open, close)` and `low <= min(open, close)` for
/// every bar.
pub fn candlestick_series(rng: &mut impl Rng, trend: Trend) -> Vec<CandleBar> {
    let drift = trend.drift();
    (0..CANDLE_COUNT)
        .map(|i| {
            let volatility = rng.gen_range(2.0..10.0);
            let open = BASE_PRICE + f64::from(i) * drift + rng.gen_range(-2.5..2.5);
            let close = open + rng.gen_range(-volatility / 2.0..volatility / 2.0) + drift;
            let high = open.max(close) + rng.gen_range(0.0..3.0);
            let low = open.min(close) - rng.gen_range(0.0..3.0);
            CandleBar {
                open,
                high,
                low,
                close,
            }
        })
        .collect()
}

/// Generate one volume bar per candle, bounded to 5..20.
pub fn volume_profile(rng: &mut impl Rng) -> Vec<f64> {
    (0..CANDLE_COUNT).map(|_| rng.gen_range(5.0..20.0)).collect()
}

/// Side of the market a horizontal level sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LevelKind {
    Support,
    Resistance,
}

/// Illustrative strength grading for a level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LevelStrength {
    Weak,
    Medium,
    Strong,
}

/// A labeled horizontal support/resistance level.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceLevel {
    pub label: &'static str,
    pub price: f64,
    pub kind: LevelKind,
    pub strength: LevelStrength,
    pub touches: u32,
}

/// The fixed set of labeled levels for the support/resistance diagram.
pub fn support_resistance_levels() -> Vec<PriceLevel> {
    vec![
        PriceLevel {
            label: "R1: $52,500",
            price: 52_500.0,
            kind: LevelKind::Resistance,
            strength: LevelStrength::Strong,
            touches: 4,
        },
        PriceLevel {
            label: "R2: $51,200",
            price: 51_200.0,
            kind: LevelKind::Resistance,
            strength: LevelStrength::Medium,
            touches: 2,
        },
        PriceLevel {
            label: "S1: $48,800",
            price: 48_800.0,
            kind: LevelKind::Support,
            strength: LevelStrength::Strong,
            touches: 3,
        },
        PriceLevel {
            label: "S2: $47,500",
            price: 47_500.0,
            kind: LevelKind::Support,
            strength: LevelStrength::Weak,
            touches: 1,
        },
    ]
}

/// Directional bias of an order block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockBias {
    Bullish,
    Bearish,
}

/// A highlighted institutional order-block region.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderBlock {
    pub label: &'static str,
    pub bias: BlockBias,
}

/// Fixed showcase data for the market-structure diagram.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketStructure {
    pub supply_zone: &'static str,
    pub demand_zone: &'static str,
    pub order_blocks: Vec<OrderBlock>,
    pub caption: &'static str,
}

pub fn market_structure() -> MarketStructure {
    MarketStructure {
        supply_zone: "Institutional Supply",
        demand_zone: "Institutional Demand",
        order_blocks: vec![
            OrderBlock {
                label: "Bearish OB",
                bias: BlockBias::Bearish,
            },
            OrderBlock {
                label: "Bullish OB",
                bias: BlockBias::Bullish,
            },
        ],
        caption: "Smart Money Concepts: Order Blocks, Liquidity Grabs, and Fair Value Gaps",
    }
}

/// Dataset for one diagram tag.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagramData {
    Candlesticks {
        bars: Vec<CandleBar>,
        volume: Vec<f64>,
    },
    Levels {
        levels: Vec<PriceLevel>,
    },
    Structure(MarketStructure),
}

/// Synthesize the dataset for a diagram tag.
pub fn sample(tag: DiagramTag, rng: &mut impl Rng) -> DiagramData {
    match tag {
        DiagramTag::CandlestickAdvanced => DiagramData::Candlesticks {
            bars: candlestick_series(rng, Trend::Flat),
            volume: volume_profile(rng),
        },
        DiagramTag::SupportResistance => DiagramData::Levels {
            levels: support_resistance_levels(),
        },
        DiagramTag::MarketStructure => DiagramData::Structure(market_structure()),
    }
}
