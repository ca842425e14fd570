use std::collections::BTreeMap;

use crate::expression::helpers::raw;
use crate::param::Param;
use crate::query_builder::{row, Builder, Error};
use crate::renderer;

#[test]
fn insert_value_matrix() {
    let (sql, binds) = Builder::new()
        .insert("foo (a,b)")
        .values(([1, 2], [3, 4]))
        .to_sql()
        .expect("render");

    assert_eq!(sql, "insert into foo (a,b) values (?,?),(?,?)");
    assert_eq!(
        binds,
        vec![Param::I32(1), Param::I32(2), Param::I32(3), Param::I32(4)]
    );
}

#[test]
fn insert_bare_scalars_become_single_column_rows() {
    let (sql, binds) = Builder::new()
        .insert("foo (a)")
        .values((1, 2, 3))
        .to_sql()
        .expect("render");

    assert_eq!(sql, "insert into foo (a) values (?),(?),(?)");
    assert_eq!(binds, vec![Param::I32(1), Param::I32(2), Param::I32(3)]);
}

#[test]
fn insert_values_accumulate_across_calls() {
    let (sql, binds) = Builder::new()
        .insert("foo (a,b)")
        .values([1, 2])
        .values([3, 4])
        .to_sql()
        .expect("render");

    assert_eq!(sql, "insert into foo (a,b) values (?,?),(?,?)");
    assert_eq!(binds.len(), 4);
}

#[test]
fn insert_keyed_rows_derive_sorted_columns() {
    let mut first = BTreeMap::new();
    first.insert("b", 2);
    first.insert("a", 1);
    let mut second = BTreeMap::new();
    second.insert("a", 3);
    second.insert("b", 4);

    let (sql, binds) = Builder::new()
        .insert("foo")
        .values((first, second))
        .to_sql()
        .expect("render");

    // колонки — отсортированные ключи первой строки
    assert_eq!(sql, "insert into foo (a,b) values (?,?),(?,?)");
    assert_eq!(
        binds,
        vec![Param::I32(1), Param::I32(2), Param::I32(3), Param::I32(4)]
    );
}

#[test]
fn insert_keyed_row_missing_key_binds_null() {
    let mut first = BTreeMap::new();
    first.insert("a", Param::I32(1));
    first.insert("b", Param::I32(2));
    let mut second = BTreeMap::new();
    second.insert("a", Param::I32(3));

    let (sql, binds) = Builder::new()
        .insert("foo")
        .values((first, second))
        .to_sql()
        .expect("render");

    assert_eq!(sql, "insert into foo (a,b) values (?,?),(?,?)");
    assert_eq!(binds[3], Param::Null);
}

#[test]
fn insert_raw_cell_is_emitted_verbatim() {
    let (sql, binds) = Builder::new()
        .insert("foo (a,b)")
        .values(row((1, raw("NOW()"))))
        .to_sql()
        .expect("render");

    assert_eq!(sql, "insert into foo (a,b) values (?,NOW())");
    assert_eq!(binds, vec![Param::I32(1)]);
}

#[test]
fn insert_select_form() {
    let (sql, binds) = Builder::new()
        .insert("foo (a)")
        .select("bar.a")
        .from("bar")
        .to_sql()
        .expect("render");

    assert_eq!(sql, "insert into foo (a) select bar.a from bar");
    assert!(binds.is_empty());
}

#[test]
fn insert_without_values_or_select_fails() {
    let err = Builder::new()
        .insert("foo")
        .to_sql()
        .expect_err("insert needs values or select");
    assert!(matches!(
        err,
        Error::SQLRenderError(renderer::Error::MissingInsertSource)
    ));
}

#[test]
fn insert_with_empty_values_call_renders_bare_values() {
    // пустой вызов values() лишь активирует клаузу
    let (sql, binds) = Builder::new()
        .insert("foo")
        .values(())
        .to_sql()
        .expect("render");
    assert_eq!(sql, "insert into foo values");
    assert!(binds.is_empty());
}
