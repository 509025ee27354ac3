use bigdecimal::BigDecimal;

/// Minimum USD liquidity an event must add to be worth an alert
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdGate {
    min_usd: BigDecimal,
}

impl ThresholdGate {
    pub fn new(min_usd: BigDecimal) -> Self {
        Self { min_usd }
    }

    pub fn min_usd(&self) -> &BigDecimal {
        &self.min_usd
    }

    /// `true` when `usd_value` reaches the threshold (inclusive)
    pub fn passes(&self, usd_value: &BigDecimal) -> bool {
        usd_value >= &self.min_usd
    }
}
