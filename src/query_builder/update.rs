use crate::query_builder::{args::FragmentList, Builder};

impl Builder {
    /// UPDATE <таблицы>. Вместе с `set()` переключает билдер
    /// в update-семейство; без `set()` рендер вернёт ошибку.
    pub fn update<L>(mut self, tables: L) -> Self
    where
        L: FragmentList,
    {
        Self::extend_clause(&mut self.update, tables.into_vec());
        self
    }

    /// SET <присваивания>, склейка через запятую.
    pub fn set<L>(mut self, assignments: L) -> Self
    where
        L: FragmentList,
    {
        Self::extend_clause(&mut self.set, assignments.into_vec());
        self
    }
}
