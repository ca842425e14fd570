use crate::query_builder::{args::FragmentList, Builder};

impl Builder {
    /// HAVING <условия>, склейка через ` and`.
    /// Требует group_by — проверяется при рендере.
    pub fn having<L>(mut self, conds: L) -> Self
    where
        L: FragmentList,
    {
        Self::extend_clause(&mut self.having, conds.into_vec());
        self
    }
}
