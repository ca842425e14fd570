use crate::query_builder::{args::FragmentList, Builder};

impl Builder {
    /// WHERE <условия>, склейка через ` and`.
    pub fn where_<L>(mut self, conds: L) -> Self
    where
        L: FragmentList,
    {
        Self::extend_clause(&mut self.where_clause, conds.into_vec());
        self
    }
}
