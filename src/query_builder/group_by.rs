use crate::query_builder::{args::FragmentList, Builder};

impl Builder {
    /// GROUP BY <поля>.
    pub fn group_by<L>(mut self, items: L) -> Self
    where
        L: FragmentList,
    {
        Self::extend_clause(&mut self.group_by, items.into_vec());
        self
    }
}
