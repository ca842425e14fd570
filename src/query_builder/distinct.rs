use crate::query_builder::Builder;

impl Builder {
    /// SELECT DISTINCT. Идемпотентно: повторный вызов ничего не меняет.
    #[inline]
    pub fn distinct(self) -> Self {
        self.set_distinct(true)
    }

    /// Явное включение/выключение DISTINCT.
    #[inline]
    pub fn set_distinct(mut self, yes: bool) -> Self {
        self.distinct = yes;
        self
    }
}
