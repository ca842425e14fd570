use std::collections::BTreeMap;

use smallvec::SmallVec;

use crate::expression::RawSql;
use crate::param::Param;
use crate::query_builder::Builder;

/// Ячейка матрицы VALUES: либо плейсхолдер с биндом, либо сырой SQL
/// (выражения вроде `NOW()`), который попадает в текст как есть.
#[derive(Debug, Clone)]
pub enum ValueCell {
    Bind(Param),
    Raw(String),
}

pub trait IntoValueCell {
    fn into_value_cell(self) -> ValueCell;
}

impl<T> IntoValueCell for T
where
    T: Into<Param>,
{
    #[inline]
    fn into_value_cell(self) -> ValueCell {
        ValueCell::Bind(self.into())
    }
}

impl IntoValueCell for RawSql {
    #[inline]
    fn into_value_cell(self) -> ValueCell {
        ValueCell::Raw(self.0)
    }
}

impl IntoValueCell for ValueCell {
    #[inline]
    fn into_value_cell(self) -> ValueCell {
        self
    }
}

/// Одна строка матрицы: позиционная или ключеванная.
/// У ключеванной формы список колонок — отсортированные ключи.
#[derive(Debug, Clone)]
pub enum ValuesRow {
    Positional(SmallVec<[ValueCell; 4]>),
    Keyed(BTreeMap<String, ValueCell>),
}

pub trait IntoValuesRow {
    fn into_values_row(self) -> ValuesRow;
}

// голый скаляр → строка из одной колонки
macro_rules! impl_scalar_row {
    ( $($T:ty),+ ) => {
        $(
            impl IntoValuesRow for $T {
                #[inline]
                fn into_values_row(self) -> ValuesRow {
                    let mut cells = SmallVec::new();
                    cells.push(self.into_value_cell());
                    ValuesRow::Positional(cells)
                }
            }
        )+
    };
}

impl_scalar_row!(i8, i16, i32, i64, f32, f64, bool, &str, String, Param, RawSql);

impl<T> IntoValuesRow for Vec<T>
where
    T: IntoValueCell,
{
    #[inline]
    fn into_values_row(self) -> ValuesRow {
        ValuesRow::Positional(self.into_iter().map(IntoValueCell::into_value_cell).collect())
    }
}

impl<T, const N: usize> IntoValuesRow for [T; N]
where
    T: IntoValueCell,
{
    #[inline]
    fn into_values_row(self) -> ValuesRow {
        ValuesRow::Positional(self.into_iter().map(IntoValueCell::into_value_cell).collect())
    }
}

impl IntoValuesRow for ValuesRow {
    #[inline]
    fn into_values_row(self) -> ValuesRow {
        self
    }
}

impl<V> IntoValuesRow for BTreeMap<String, V>
where
    V: IntoValueCell,
{
    #[inline]
    fn into_values_row(self) -> ValuesRow {
        ValuesRow::Keyed(
            self.into_iter()
                .map(|(k, v)| (k, v.into_value_cell()))
                .collect(),
        )
    }
}

impl<V> IntoValuesRow for BTreeMap<&str, V>
where
    V: IntoValueCell,
{
    #[inline]
    fn into_values_row(self) -> ValuesRow {
        ValuesRow::Keyed(
            self.into_iter()
                .map(|(k, v)| (k.to_string(), v.into_value_cell()))
                .collect(),
        )
    }
}

/// Ячейки одной строки для `row()`: кортеж позволяет смешивать типы.
/// Кортеж сам по себе строкой не является: на уровне `values()`
/// кортеж всегда означает список строк.
pub trait CellList {
    fn into_cells(self) -> SmallVec<[ValueCell; 4]>;
}

impl<T> CellList for Vec<T>
where
    T: IntoValueCell,
{
    #[inline]
    fn into_cells(self) -> SmallVec<[ValueCell; 4]> {
        self.into_iter().map(IntoValueCell::into_value_cell).collect()
    }
}

impl<T, const N: usize> CellList for [T; N]
where
    T: IntoValueCell,
{
    #[inline]
    fn into_cells(self) -> SmallVec<[ValueCell; 4]> {
        self.into_iter().map(IntoValueCell::into_value_cell).collect()
    }
}

macro_rules! impl_cell_list_for_tuple {
    ( $($T:ident),+ ) => {
        impl< $($T),+ > CellList for ( $($T,)+ )
        where
            $( $T: IntoValueCell ),+
        {
            #[allow(non_snake_case)]
            fn into_cells(self) -> SmallVec<[ValueCell; 4]> {
                let ( $($T,)+ ) = self;
                let mut cells = SmallVec::new();
                $( cells.push($T.into_value_cell()); )+
                cells
            }
        }
    };
}

impl_cell_list_for_tuple!(A);
impl_cell_list_for_tuple!(A, B);
impl_cell_list_for_tuple!(A, B, C);
impl_cell_list_for_tuple!(A, B, C, D);
impl_cell_list_for_tuple!(A, B, C, D, E);
impl_cell_list_for_tuple!(A, B, C, D, E, F);
impl_cell_list_for_tuple!(A, B, C, D, E, F, G);
impl_cell_list_for_tuple!(A, B, C, D, E, F, G, H);

/// Одна позиционная строка из смешанных ячеек:
/// `values((row((1, raw("NOW()"))), row((2, raw("NOW()")))))`.
#[inline]
pub fn row<C>(cells: C) -> ValuesRow
where
    C: CellList,
{
    ValuesRow::Positional(cells.into_cells())
}

/// Список строк для одного вызова `values()`.
pub trait ValuesList {
    fn into_rows(self) -> Vec<ValuesRow>;
}

impl<T> ValuesList for T
where
    T: IntoValuesRow,
{
    #[inline]
    fn into_rows(self) -> Vec<ValuesRow> {
        vec![self.into_values_row()]
    }
}

// Динамическое число строк: конкретно ValuesRow, а не blanket —
// иначе Vec был бы одновременно и строкой, и списком строк.
impl ValuesList for Vec<ValuesRow> {
    #[inline]
    fn into_rows(self) -> Vec<ValuesRow> {
        self
    }
}

impl ValuesList for () {
    #[inline]
    fn into_rows(self) -> Vec<ValuesRow> {
        Vec::new()
    }
}

macro_rules! impl_values_list_for_tuple {
    ( $($T:ident),+ ) => {
        impl< $($T),+ > ValuesList for ( $($T,)+ )
        where
            $( $T: IntoValuesRow ),+
        {
            #[allow(non_snake_case)]
            fn into_rows(self) -> Vec<ValuesRow> {
                let ( $($T,)+ ) = self;
                let mut v = Vec::new();
                $( v.push($T.into_values_row()); )+
                v
            }
        }
    };
}

impl_values_list_for_tuple!(A);
impl_values_list_for_tuple!(A, B);
impl_values_list_for_tuple!(A, B, C);
impl_values_list_for_tuple!(A, B, C, D);
impl_values_list_for_tuple!(A, B, C, D, E);
impl_values_list_for_tuple!(A, B, C, D, E, F);
impl_values_list_for_tuple!(A, B, C, D, E, F, G);
impl_values_list_for_tuple!(A, B, C, D, E, F, G, H);

/// Накопленная матрица VALUES: нормализованные позиционные строки
/// плюс (опционально) выведенный из ключей список колонок.
#[derive(Debug, Clone, Default)]
pub struct ValuesNode {
    pub(crate) columns: Option<Vec<String>>,
    pub(crate) rows: Vec<SmallVec<[ValueCell; 4]>>,
}

impl Builder {
    /// INSERT INTO <target>; target — текст, может нести список колонок:
    /// `insert("foo (a,b)")`.
    pub fn insert<S>(mut self, target: S) -> Self
    where
        S: Into<String>,
    {
        self.insert_target = Some(target.into());
        self
    }

    /// VALUES (<row>),(<row>),… — вызовы накапливают строки.
    ///
    /// Ключеванные строки: первая в вызове фиксирует отсортированный
    /// список колонок, остальные читаются в том же порядке ключей;
    /// отсутствующий ключ биндится как NULL.
    pub fn values<L>(mut self, rows: L) -> Self
    where
        L: ValuesList,
    {
        let node = self.values.get_or_insert_with(ValuesNode::default);
        let rows = rows.into_rows();
        if rows.is_empty() {
            // пустой вызов лишь активирует values-клаузу
            return self;
        }

        let call_columns: Option<Vec<String>> = match &rows[0] {
            // BTreeMap уже держит ключи отсортированными
            ValuesRow::Keyed(first) => Some(first.keys().cloned().collect()),
            ValuesRow::Positional(_) => None,
        };

        for row in rows {
            match row {
                ValuesRow::Positional(cells) => node.rows.push(cells),
                ValuesRow::Keyed(mut map) => {
                    let cols = call_columns
                        .as_deref()
                        .map(<[String]>::to_vec)
                        .unwrap_or_else(|| map.keys().cloned().collect());
                    node.rows.push(
                        cols.iter()
                            .map(|c| map.remove(c).unwrap_or(ValueCell::Bind(Param::Null)))
                            .collect(),
                    );
                }
            }
        }

        if call_columns.is_some() {
            node.columns = call_columns;
        }
        self
    }
}
