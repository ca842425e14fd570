use crate::query_builder::{args::FragmentList, Builder};

impl Builder {
    /// SELECT <фрагменты>; повторные вызовы дописывают поля через запятую.
    /// Пустой список аргументов — no-op.
    pub fn select<L>(mut self, items: L) -> Self
    where
        L: FragmentList,
    {
        Self::extend_clause(&mut self.select, items.into_vec());
        self
    }
}
