use crate::query_builder::{args::FragmentList, Builder};

impl Builder {
    /// ORDER BY <поля с направлением>.
    pub fn order_by<L>(mut self, items: L) -> Self
    where
        L: FragmentList,
    {
        Self::extend_clause(&mut self.order_by, items.into_vec());
        self
    }
}
