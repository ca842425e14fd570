use std::fmt;
use std::sync::Arc;

use smallvec::SmallVec;

use crate::expression::{Cond, RawSql};
use crate::param::Param;
use crate::query_builder::Builder;

/// Сырой SQL-колбэк: получает аккумулятор биндов, возвращает текст.
/// `Arc`, а не `Box` — фрагменты обязаны клонироваться (clone()/xor()).
#[derive(Clone)]
pub struct RawFn(Arc<dyn Fn(&mut Vec<Param>) -> String + Send + Sync>);

impl RawFn {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&mut Vec<Param>) -> String + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    #[inline]
    pub(crate) fn call(&self, binds: &mut Vec<Param>) -> String {
        (self.0)(binds)
    }
}

impl fmt::Debug for RawFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Само тело замыкания неотображаемо — выводим метку.
        f.write_str("<raw fn>")
    }
}

/// Позиционное значение шаблонного кортежа: на каждое — ровно один `?`.
#[derive(Debug, Clone)]
pub enum TupleValue {
    /// Скаляр → один плейсхолдер + один бинд.
    Scalar(Param),
    /// Список → `?,?,...` + бинды в порядке списка.
    List(Vec<Param>),
    /// Подзапрос → его SQL на месте `?`, бинды вклиниваются там же.
    Sub(Builder),
}

/// Шаблон с позициями: `["t.id < ?", 5]` из исходного API.
#[derive(Debug, Clone)]
pub struct TemplatedTuple {
    pub(crate) template: String,
    pub(crate) values: SmallVec<[TupleValue; 4]>,
}

/// Один фрагмент клаузы. Явный sum type вместо duck-typing по `.sql`:
/// вид фрагмента — это тег, а не проба способности.
#[derive(Debug, Clone)]
pub enum Fragment {
    /// Текст как есть (строки, числа, bool — через `to_string`).
    Literal(String),
    /// Колбэк-«люк» для сырого SQL.
    Raw(RawFn),
    /// Вложенный билдер, рендерится в скобках.
    Subquery(Builder),
    /// Шаблон + позиционные значения.
    Tuple(TemplatedTuple),
    /// Сгруппированная конъюнкция (and/or/...), см. `expression`.
    Group(Cond),
}

/// Всё, что можно передать клауза-сеттеру как один фрагмент.
pub trait IntoFragment {
    fn into_fragment(self) -> Fragment;
}

impl IntoFragment for Fragment {
    #[inline]
    fn into_fragment(self) -> Fragment {
        self
    }
}

impl IntoFragment for &str {
    #[inline]
    fn into_fragment(self) -> Fragment {
        Fragment::Literal(self.to_string())
    }
}

impl IntoFragment for String {
    #[inline]
    fn into_fragment(self) -> Fragment {
        Fragment::Literal(self)
    }
}

impl IntoFragment for &String {
    #[inline]
    fn into_fragment(self) -> Fragment {
        Fragment::Literal(self.clone())
    }
}

// числовые/булевы литералы — просто текст, без биндов
macro_rules! impl_into_fragment_display {
    ( $($T:ty),+ ) => {
        $(
            impl IntoFragment for $T {
                #[inline]
                fn into_fragment(self) -> Fragment {
                    Fragment::Literal(self.to_string())
                }
            }
        )+
    };
}

impl_into_fragment_display!(i16, i32, i64, u16, u32, u64, f32, f64, bool);

impl IntoFragment for Builder {
    #[inline]
    fn into_fragment(self) -> Fragment {
        Fragment::Subquery(self)
    }
}

impl IntoFragment for Cond {
    #[inline]
    fn into_fragment(self) -> Fragment {
        Fragment::Group(self)
    }
}

impl IntoFragment for RawSql {
    #[inline]
    fn into_fragment(self) -> Fragment {
        Fragment::Literal(self.0)
    }
}

// Замыкание → Raw-фрагмент
impl<F> IntoFragment for F
where
    F: Fn(&mut Vec<Param>) -> String + Send + Sync + 'static,
{
    #[inline]
    fn into_fragment(self) -> Fragment {
        Fragment::Raw(RawFn::new(self))
    }
}

/// «Вариадик» клауза-сеттеров: один аргумент, кортеж, массив, Vec, срез.
/// Покрывает и массивные варианты исходного API (`selecta` и т.п.).
pub trait FragmentList {
    fn into_vec(self) -> Vec<Fragment>;
}

// ОДИНОЧНЫЙ аргумент: позволяет .from("users") / .select("id") и т.п.
impl<T> FragmentList for T
where
    T: IntoFragment,
{
    #[inline]
    fn into_vec(self) -> Vec<Fragment> {
        vec![self.into_fragment()]
    }
}

impl<T> FragmentList for Vec<T>
where
    T: IntoFragment,
{
    #[inline]
    fn into_vec(self) -> Vec<Fragment> {
        self.into_iter().map(IntoFragment::into_fragment).collect()
    }
}

impl<T> FragmentList for &[T]
where
    T: IntoFragment + Clone,
{
    #[inline]
    fn into_vec(self) -> Vec<Fragment> {
        self.iter().cloned().map(IntoFragment::into_fragment).collect()
    }
}

impl<T, const N: usize> FragmentList for [T; N]
where
    T: IntoFragment,
{
    #[inline]
    fn into_vec(self) -> Vec<Fragment> {
        self.into_iter().map(IntoFragment::into_fragment).collect()
    }
}

impl<T, const N: usize> FragmentList for &[T; N]
where
    T: IntoFragment + Clone,
{
    #[inline]
    fn into_vec(self) -> Vec<Fragment> {
        self.iter().cloned().map(IntoFragment::into_fragment).collect()
    }
}

impl FragmentList for () {
    #[inline]
    fn into_vec(self) -> Vec<Fragment> {
        Vec::new()
    }
}

macro_rules! impl_fragment_list_for_tuple {
    ( $($T:ident),+ ) => {
        impl< $($T),+ > FragmentList for ( $($T,)+ )
        where
            $( $T: IntoFragment ),+
        {
            #[allow(non_snake_case)]
            fn into_vec(self) -> Vec<Fragment> {
                let ( $($T,)+ ) = self;
                let mut v = Vec::new();
                $( v.push($T.into_fragment()); )+
                v
            }
        }
    };
}

impl_fragment_list_for_tuple!(A);
impl_fragment_list_for_tuple!(A, B);
impl_fragment_list_for_tuple!(A, B, C);
impl_fragment_list_for_tuple!(A, B, C, D);
impl_fragment_list_for_tuple!(A, B, C, D, E);
impl_fragment_list_for_tuple!(A, B, C, D, E, F);
impl_fragment_list_for_tuple!(A, B, C, D, E, F, G);
impl_fragment_list_for_tuple!(A, B, C, D, E, F, G, H);
impl_fragment_list_for_tuple!(A, B, C, D, E, F, G, H, I);
impl_fragment_list_for_tuple!(A, B, C, D, E, F, G, H, I, J);
impl_fragment_list_for_tuple!(A, B, C, D, E, F, G, H, I, J, K);
impl_fragment_list_for_tuple!(A, B, C, D, E, F, G, H, I, J, K, L);

/// Значение для позиции шаблона (`bind("t.id < ?", …)`).
pub trait IntoTupleValue {
    fn into_tuple_value(self) -> TupleValue;
}

impl<T> IntoTupleValue for T
where
    T: Into<Param>,
{
    #[inline]
    fn into_tuple_value(self) -> TupleValue {
        TupleValue::Scalar(self.into())
    }
}

impl IntoTupleValue for TupleValue {
    #[inline]
    fn into_tuple_value(self) -> TupleValue {
        self
    }
}

impl IntoTupleValue for Builder {
    #[inline]
    fn into_tuple_value(self) -> TupleValue {
        TupleValue::Sub(self)
    }
}

impl<T> IntoTupleValue for Vec<T>
where
    T: Into<Param>,
{
    #[inline]
    fn into_tuple_value(self) -> TupleValue {
        TupleValue::List(self.into_iter().map(Into::into).collect())
    }
}

impl<T, const N: usize> IntoTupleValue for [T; N]
where
    T: Into<Param>,
{
    #[inline]
    fn into_tuple_value(self) -> TupleValue {
        TupleValue::List(self.into_iter().map(Into::into).collect())
    }
}

/// Список значений шаблона: одно значение или кортеж.
pub trait BindList {
    fn into_values(self) -> SmallVec<[TupleValue; 4]>;
}

impl<T> BindList for T
where
    T: IntoTupleValue,
{
    #[inline]
    fn into_values(self) -> SmallVec<[TupleValue; 4]> {
        let mut v = SmallVec::new();
        v.push(self.into_tuple_value());
        v
    }
}

impl BindList for () {
    #[inline]
    fn into_values(self) -> SmallVec<[TupleValue; 4]> {
        SmallVec::new()
    }
}

macro_rules! impl_bind_list_for_tuple {
    ( $($T:ident),+ ) => {
        impl< $($T),+ > BindList for ( $($T,)+ )
        where
            $( $T: IntoTupleValue ),+
        {
            #[allow(non_snake_case)]
            fn into_values(self) -> SmallVec<[TupleValue; 4]> {
                let ( $($T,)+ ) = self;
                let mut v = SmallVec::new();
                $( v.push($T.into_tuple_value()); )+
                v
            }
        }
    };
}

impl_bind_list_for_tuple!(A);
impl_bind_list_for_tuple!(A, B);
impl_bind_list_for_tuple!(A, B, C);
impl_bind_list_for_tuple!(A, B, C, D);
impl_bind_list_for_tuple!(A, B, C, D, E);
impl_bind_list_for_tuple!(A, B, C, D, E, F);
impl_bind_list_for_tuple!(A, B, C, D, E, F, G);
impl_bind_list_for_tuple!(A, B, C, D, E, F, G, H);
