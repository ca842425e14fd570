use crate::query_builder::Builder;

/// LIMIT в двух формах: `limit n` и `limit lower, upper`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Limit {
    Single(u64),
    Range(u64, u64),
}

impl Builder {
    /// LIMIT <n>
    #[inline]
    pub fn limit(mut self, n: u64) -> Self {
        self.limit = Some(Limit::Single(n));
        self
    }

    /// LIMIT <lower>, <upper>
    #[inline]
    pub fn limit_range(mut self, lower: u64, upper: u64) -> Self {
        self.limit = Some(Limit::Range(lower, upper));
        self
    }
}
