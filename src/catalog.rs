//! Curriculum catalog
//!
//! Static course content surfaced next to the tutor: the 100-chapter
//! curriculum (grouped by skill level) and the quick-action starter topics.
//! Selecting a chapter submits an `Explain: {chapter}` prompt.

use serde::Serialize;

/// Skill grouping for curriculum chapters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillLevel {
    Basics,
    Intermediate,
    Advanced,
    Professional,
}

/// A starter topic offered on an empty transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuickAction {
    pub topic: &'static str,
    pub description: &'static str,
}

pub const QUICK_ACTIONS: [QuickAction; 4] = [
    QuickAction {
        topic: "Advanced Risk Management Strategies",
        description: "Master institutional-level risk control",
    },
    QuickAction {
        topic: "Market Structure & Smart Money Concepts",
        description: "Understanding institutional order flow",
    },
    QuickAction {
        topic: "Multi-Timeframe Technical Analysis",
        description: "Professional chart reading techniques",
    },
    QuickAction {
        topic: "Psychology of Trading & Behavioral Finance",
        description: "Master the mental game of trading",
    },
];

/// The full curriculum, in presentation order.
pub const CHAPTERS: [&str; 100] = [
    // Basics (1-20)
    "Introduction to Trading",
    "What is Technical Analysis?",
    "Understanding Candlestick Patterns",
    "Key Support and Resistance Levels",
    "How to Identify Chart Patterns",
    "Basics of Risk Management",
    "Understanding Volume and Liquidity",
    "Moving Averages Explained",
    "Relative Strength Index (RSI)",
    "MACD Strategy",
    "Bollinger Bands",
    "Fibonacci Retracement",
    "Trading Psychology",
    "Developing a Trading Plan",
    "Order Types",
    "Trend Line Analysis",
    "Day Trading Strategies",
    "Position Sizing",
    "Risk-Reward Ratio",
    "Stop Loss Strategies",
    // Intermediate (21-50)
    "Advanced Candlestick Patterns",
    "Multiple Timeframe Analysis",
    "Market Structure",
    "Supply and Demand Zones",
    "Price Action Trading",
    "Swing Trading Fundamentals",
    "Scalping Techniques",
    "Options Trading Basics",
    "Futures Trading",
    "Forex Market Dynamics",
    "Cryptocurrency Trading",
    "Market Volatility",
    "Economic Indicators",
    "News Trading",
    "Seasonal Trading",
    "Sector Analysis",
    "Stock Screening",
    "Backtesting Strategies",
    "Trade Journaling",
    "Money Management",
    "Leverage and Margin",
    "Short Selling",
    "Gap Trading",
    "Breakout Strategies",
    "Reversal Patterns",
    "Continuation Patterns",
    "Triangle Patterns",
    "Head and Shoulders",
    "Double Top/Bottom",
    "Flag and Pennant Patterns",
    // Advanced (51-80)
    "Advanced Chart Patterns",
    "Harmonic Patterns",
    "Elliott Wave Theory",
    "Gann Theory",
    "Wyckoff Method",
    "Volume Profile Analysis",
    "Market Profile",
    "Order Flow Trading",
    "Algorithmic Trading",
    "Quantitative Analysis",
    "Statistical Arbitrage",
    "Pairs Trading",
    "Mean Reversion",
    "Momentum Trading",
    "Contrarian Strategies",
    "Event-Driven Trading",
    "Derivatives Trading",
    "Options Strategies",
    "Covered Calls",
    "Protective Puts",
    "Iron Condors",
    "Butterfly Spreads",
    "Straddles and Strangles",
    "Calendar Spreads",
    "Volatility Trading",
    "Greeks in Options",
    "Implied Volatility",
    "Time Decay",
    "Delta Hedging",
    "Gamma Scalping",
    // Professional (81-100)
    "Portfolio Management",
    "Asset Allocation",
    "Diversification Strategies",
    "Modern Portfolio Theory",
    "Capital Asset Pricing Model",
    "Alternative Investments",
    "Hedge Fund Strategies",
    "Private Equity Basics",
    "Real Estate Investment",
    "Commodity Trading",
    "Currency Hedging",
    "Interest Rate Trading",
    "Bond Trading Strategies",
    "Credit Analysis",
    "Market Making",
    "High-Frequency Trading",
    "Dark Pools",
    "Liquidity Management",
    "Tax-Efficient Trading",
    "International Markets",
];

/// Skill level for a chapter index (0-based).
pub fn skill_level(index: usize) -> Option<SkillLevel> {
    match index {
        0..=19 => Some(SkillLevel::Basics),
        20..=49 => Some(SkillLevel::Intermediate),
        50..=79 => Some(SkillLevel::Advanced),
        80..=99 => Some(SkillLevel::Professional),
        _ => None,
    }
}

/// The prompt submitted when a chapter is selected.
pub fn explain_prompt(chapter: &str) -> String {
    format!("Explain: {chapter}")
}
