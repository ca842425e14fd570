use crate::expression::Cond;
use crate::query_builder::args::{Fragment, FragmentList, IntoFragment};
use crate::query_builder::{Error, Result};

/// `(a and b and …)`
pub fn and<L>(items: L) -> Cond
where
    L: FragmentList,
{
    Cond {
        joiner: " and",
        negated: false,
        fragments: items.into_vec(),
    }
}

/// `(a or b or …)`
pub fn or<L>(items: L) -> Cond
where
    L: FragmentList,
{
    Cond {
        joiner: " or",
        negated: false,
        fragments: items.into_vec(),
    }
}

/// `not (a and b and …)`
pub fn nand<L>(items: L) -> Cond
where
    L: FragmentList,
{
    let mut c = and(items);
    c.negated = true;
    c
}

/// `not (a or b or …)`
pub fn nor<L>(items: L) -> Cond
where
    L: FragmentList,
{
    let mut c = or(items);
    c.negated = true;
    c
}

/// XOR. Для двух операндов — классическое `and(nand(a,b), or(a,b))`
/// (ключевое слово `xor` есть не во всех СУБД). Для N>2 — «ровно один
/// из N»: `or` по i от `and(операнд_i, nor(остальные))`.
///
/// Меньше двух операндов — ошибка сразу, на месте вызова.
pub fn xor<L>(items: L) -> Result<Cond>
where
    L: FragmentList,
{
    let frags = items.into_vec();

    if frags.len() < 2 {
        return Err(Error::XorArity { got: frags.len() });
    }

    if frags.len() == 2 {
        let pair = [frags[0].clone(), frags[1].clone()];
        return Ok(and((nand(pair.clone()), or(pair))));
    }

    let mut branches: Vec<Fragment> = Vec::with_capacity(frags.len());
    for i in 0..frags.len() {
        let mut others = frags.clone();
        let this = others.remove(i);
        branches.push(and((this, nor(others))).into_fragment());
    }

    Ok(or(branches))
}
