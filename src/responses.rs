//! Response repository
//!
//! A pure mapping from topic to a pre-authored long-form text body plus its
//! diagram tags. Content is static and authored ahead of time; the only
//! runtime assembly is the uppercased prompt interpolated into the default
//! topic's header line.
//!
//! [`lookup`] is total over every topic the classifier can produce, so a
//! valid topic never fails to resolve.

use crate::classifier::Topic;
use crate::transcript::DiagramTag;
use serde::{Deserialize, Serialize};

/// A canned response: display text plus zero or more diagram tags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponsePayload {
    pub text: String,
    #[serde(default)]
    pub diagrams: Vec<DiagramTag>,
}

/// Static apology shown when a turn fails during processing. No diagrams.
pub const FALLBACK_TEXT: &str = "I apologize, but I encountered an error processing your request. \
     Please try rephrasing your question or ask about a specific trading concept.";

/// Fallback assistant payload for a failed turn.
pub fn fallback() -> ResponsePayload {
    ResponsePayload {
        text: FALLBACK_TEXT.to_string(),
        diagrams: vec![],
    }
}

/// Resolve a topic to its response payload.
///
/// `prompt` is the raw user text; only the default topic uses it (uppercased
/// in its header line).
pub fn lookup(topic: Topic, prompt: &str) -> ResponsePayload {
    match topic {
        Topic::RiskManagement => ResponsePayload {
            text: RISK_MANAGEMENT_BODY.to_string(),
            diagrams: vec![DiagramTag::SupportResistance, DiagramTag::MarketStructure],
        },
        Topic::CandlestickPatterns => ResponsePayload {
            text: CANDLESTICK_BODY.to_string(),
            diagrams: vec![DiagramTag::CandlestickAdvanced, DiagramTag::MarketStructure],
        },
        Topic::GeneralAnalysis => ResponsePayload {
            text: format!(
                "COMPREHENSIVE TRADING ANALYSIS: {}\n\n{}",
                prompt.to_uppercase(),
                GENERAL_ANALYSIS_BODY
            ),
            diagrams: vec![DiagramTag::SupportResistance, DiagramTag::CandlestickAdvanced],
        },
    }
}

const RISK_MANAGEMENT_BODY: &str = "\
COMPREHENSIVE RISK MANAGEMENT FRAMEWORK

Risk management is the cornerstone of professional trading, encompassing position sizing, portfolio allocation, psychological discipline, and systematic approach to capital preservation.

POSITION SIZING METHODOLOGIES

Kelly Criterion Application:
The Kelly formula determines optimal position size based on win rate and average win/loss ratio:
f* = (bp - q) / b
Where: f* = fraction of capital to wager, b = odds, p = probability of win, q = probability of loss

For trading: Position Size = (Win Rate × Average Win - Loss Rate × Average Loss) / Average Win

Fixed Fractional Method:
• Risk fixed percentage (0.5-2%) per trade regardless of setup
• Advantages: Simple, prevents overtrading, consistent risk exposure
• Example: $100k account, 1% risk = $1000 maximum loss per trade

Volatility-Based Sizing:
• Adjust position size based on instrument volatility (ATR)
• Higher volatility = smaller position size
• Formula: Position Size = Risk Amount / (ATR × Multiplier)

PORTFOLIO HEAT MANAGEMENT

Maximum Concurrent Risk:
• Never exceed 6-8% total portfolio risk across all open positions
• Diversify across uncorrelated assets and strategies
• Monitor correlation during market stress (correlations spike to 1.0)

Drawdown Protocols:
• 5% drawdown: Reduce position sizes by 25%
• 10% drawdown: Halt new trades, review strategy
• 15% drawdown: Close all positions, mandatory break

PSYCHOLOGICAL RISK FACTORS

Emotional Biases:
• Overconfidence after wins leading to oversizing
• Revenge trading after losses
• FOMO (Fear of Missing Out) causing poor entries
• Loss aversion preventing taking necessary stops

Systematic Mitigation:
• Pre-defined rules remove emotional decisions
• Position sizing calculator eliminates mental math
• Trading journal identifies behavioral patterns
• Regular performance review and strategy adjustment

ADVANCED STOP LOSS STRATEGIES

Technical Stops:
• Support/resistance levels
• Moving average breaches
• Volatility-based stops (2× ATR)
• Fibonacci retracement levels

Time-Based Stops:
• Exit if trade doesn't move favorably within X periods
• Useful for mean-reversion strategies
• Prevents capital tie-up in stagnant positions

Trailing Stop Methods:
• ATR trailing: Stop follows price at X × ATR distance
• Percentage trailing: Fixed percentage below highest point
• Chandelier exit: Combines highest high with ATR multiple

RISK-ADJUSTED PERFORMANCE METRICS

Sharpe Ratio: (Return - Risk-free Rate) / Standard Deviation
• Measures return per unit of risk
• Above 1.0 is good, above 2.0 is excellent

Sortino Ratio: (Return - Risk-free Rate) / Downside Deviation
• Only considers negative volatility
• Better measure for asymmetric strategies

Maximum Drawdown Recovery:
• Time to recover from peak drawdown
• Critical for psychological sustainability
• Should not exceed 12 months for retail traders

INSTITUTIONAL RISK PRACTICES

Value at Risk (VaR):
• Statistical measure of potential loss over specific timeframe
• 95% VaR means 5% chance of exceeding loss threshold
• Monte Carlo simulation for complex portfolios

Stress Testing:
• Model performance during historical crisis periods
• 2008 Financial Crisis, COVID-19 crash, Black Monday
• Adjust position sizing based on worst-case scenarios

Risk Parity Approach:
• Equal risk contribution from each position
• Not equal dollar amounts, but equal risk amounts
• Prevents concentration in any single risk factor";

const CANDLESTICK_BODY: &str = "\
ADVANCED CANDLESTICK PATTERN ANALYSIS

Japanese candlestick analysis, developed by rice trader Homma Munehisa in the 18th century, provides profound insights into market psychology through price action visualization.

CANDLESTICK ANATOMY & PSYCHOLOGY

Body Formation:
• Long body = strong conviction (bulls or bears in control)
• Short body = indecision (balance between buyers and sellers)
• No body (Doji) = perfect indecision (open equals close)

Shadow Interpretation:
• Upper shadow = rejection of higher prices
• Lower shadow = rejection of lower prices
• No shadows = strong directional movement (Marubozu)
• Long shadows = significant price rejection

SINGLE CANDLESTICK PATTERNS

Doji Family:
• Standard Doji: Open = Close, indicates indecision
• Gravestone Doji: Long upper shadow, bearish reversal
• Dragonfly Doji: Long lower shadow, bullish reversal
• Four Price Doji: All prices equal, extreme indecision

Spinning Tops:
• Small body with upper and lower shadows
• Indicates weakening momentum
• Context determines significance

Marubozu Patterns:
• White Marubozu: Strong bullish sentiment
• Black Marubozu: Strong bearish sentiment
• Opening/Closing Marubozu: Partial strength indication

REVERSAL PATTERNS

Hammer and Hanging Man:
• Small body at upper end of range
• Lower shadow 2-3× body length
• Hammer (after downtrend) = bullish reversal
• Hanging Man (after uptrend) = bearish reversal
• Requires volume confirmation

Shooting Star and Inverted Hammer:
• Small body at lower end of range
• Upper shadow 2-3× body length
• Context and confirmation crucial

CONTINUATION PATTERNS

Rising and Falling Three Methods:
• Five-candle pattern
• Long candle in trend direction
• Three small counter-trend candles
• Final candle continues original trend

Belt Hold Lines:
• Opening on extreme of range
• Strong directional movement
• White Belt Hold = bullish continuation
• Black Belt Hold = bearish continuation

MULTI-CANDLESTICK PATTERNS

Engulfing Patterns:
• Bullish Engulfing: White candle engulfs previous black candle
• Bearish Engulfing: Black candle engulfs previous white candle
• Higher volume increases reliability
• More significant after extended moves

Dark Cloud Cover:
• Black candle opens above white candle high
• Closes below midpoint of white candle
• Bearish reversal signal
• Effectiveness increases with volume

Piercing Pattern:
• White candle opens below black candle low
• Closes above midpoint of black candle
• Bullish reversal signal
• Mirror opposite of Dark Cloud Cover

Morning and Evening Star:
• Three-candle reversal patterns
• Gap between first and second candle
• Small middle candle (star)
• Third candle confirms reversal

ADVANCED PATTERN RECOGNITION

Three Black Crows / Three White Soldiers:
• Three consecutive strong directional candles
• Each opening within previous body
• Powerful continuation or reversal signals
• Rare but highly reliable

Harami Patterns:
• Second candle contained within first candle body
• Indicates potential trend change
• Cross Harami (second candle is Doji) more significant

STATISTICAL RELIABILITY & CONFIRMATION

Pattern Reliability Ranking:
1. Three Black Crows/White Soldiers (85% reliability)
2. Morning/Evening Star (78% reliability)
3. Engulfing Patterns (65% reliability)
4. Hammer/Hanging Man (58% reliability)

Confirmation Requirements:
• Volume increase on reversal patterns
• Break of key support/resistance levels
• Additional technical indicator alignment
• Follow-through in subsequent sessions

PATTERN FAILURE & INVALIDATION

False Signal Recognition:
• Pattern completion without follow-through
• Volume decrease during pattern formation
• Conflicting signals from other timeframes
• Pattern occurring in low-volatility environment

Risk Management:
• Stop loss below pattern low (bullish patterns)
• Stop loss above pattern high (bearish patterns)
• Position sizing based on pattern reliability
• Exit if pattern fails within 2-3 periods";

const GENERAL_ANALYSIS_BODY: &str = "\
Understanding this concept requires examining multiple dimensions: technical analysis, fundamental factors, market psychology, and risk management implications.

TECHNICAL PERSPECTIVE

Price Action Analysis:
The market speaks through price movements, volume patterns, and structural formations. Every price level represents a battle between buyers and sellers, with the outcome revealing market sentiment and future direction probabilities.

Key Technical Indicators:
• Moving averages provide trend context and dynamic support/resistance
• RSI and stochastic oscillators identify overbought/oversold conditions
• MACD reveals momentum shifts and trend changes
• Volume confirms or diverges from price action

FUNDAMENTAL CONSIDERATIONS

Economic Impact:
Market movements are influenced by economic data releases, central bank policies, geopolitical events, and sector-specific developments. Understanding these fundamental drivers helps anticipate long-term trends and identify high-probability trading opportunities.

Intermarket Analysis:
• Currency movements affect international stocks and commodities
• Interest rate changes impact sector rotation
• Commodity prices influence inflation expectations
• Credit spreads indicate risk appetite

MARKET PSYCHOLOGY

Behavioral Finance Elements:
• Herding behavior creates bubbles and crashes
• Fear and greed drive extreme price movements
• Cognitive biases affect decision-making
• Market cycles reflect collective psychology

Sentiment Indicators:
• VIX levels indicate fear/complacency
• Put/call ratios show options positioning
• Commitment of Traders reports reveal commercial vs. speculative positioning
• News sentiment analysis provides contrarian signals

RISK MANAGEMENT INTEGRATION

Every trading decision must incorporate:
• Position sizing based on volatility and account size
• Stop loss placement at logical technical levels
• Risk-reward ratio calculation before entry
• Portfolio correlation and concentration limits

PRACTICAL APPLICATION

Implementation Strategy:
1. Multi-timeframe analysis for context
2. Wait for confluence of multiple signals
3. Enter with appropriate position size
4. Manage trade according to predetermined rules
5. Document results for continuous improvement

This holistic approach combines technical expertise with fundamental understanding, psychological awareness, and disciplined risk management to create a robust trading framework.";
