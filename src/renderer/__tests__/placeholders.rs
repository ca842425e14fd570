use crate::expression::helpers::bind;
use crate::param::Param;
use crate::query_builder::Builder;
use crate::renderer::{default_dialect, set_default_dialect, Dialect, Error, PlaceholderStyle};

#[test]
fn default_dialect_switch_affects_only_builders_created_after() {
    assert_eq!(default_dialect(), Dialect::MySQL);
    let before = Builder::new();

    // окно до restore держим минимальным: только конструирование
    set_default_dialect(Dialect::Postgres);
    let after = Builder::new();
    let mut reborn = Builder::with_dialect(Dialect::MySQL);
    reborn.reset();
    set_default_dialect(Dialect::MySQL);

    assert_eq!(before.dialect(), Dialect::MySQL);
    assert_eq!(after.dialect(), Dialect::Postgres);
    // reset() заново снимает текущий default
    assert_eq!(reborn.dialect(), Dialect::Postgres);

    let after = after.where_(bind("a = ?", 1));
    assert_eq!(after.sql().expect("render"), "select 1 from dual where a = $1");
}

#[test]
fn question_dialects_leave_markers_untouched() {
    let (sql, binds) = Builder::new()
        .where_((bind("wow in (?)", vec![4, 5]), bind("zowie < ?", 10)))
        .to_sql()
        .expect("render");

    assert_eq!(sql, "select 1 from dual where wow in (?,?) and zowie < ?");
    assert_eq!(binds, vec![Param::I32(4), Param::I32(5), Param::I32(10)]);
}

#[test]
fn postgres_builders_number_their_markers() {
    let (sql, binds) = Builder::with_dialect(Dialect::Postgres)
        .where_((bind("wow in (?)", vec![4, 5]), bind("zowie < ?", 10)))
        .to_sql()
        .expect("render");

    assert_eq!(sql, "select 1 from dual where wow in ($1,$2) and zowie < $3");
    assert_eq!(binds.len(), 3);
}

#[test]
fn numbering_runs_once_over_nested_subqueries() {
    let sub = Builder::with_dialect(Dialect::Postgres)
        .select("id")
        .from("t")
        .where_(bind("t.x = ?", 1));
    let (sql, binds) = Builder::with_dialect(Dialect::Postgres)
        .where_((bind("a in (?)", sub), bind("b = ?", 2)))
        .to_sql()
        .expect("render");

    assert_eq!(
        sql,
        "select 1 from dual where a in (select id from t where t.x = $1) and b = $2"
    );
    assert_eq!(binds, vec![Param::I32(1), Param::I32(2)]);
}

#[test]
fn each_builder_keeps_the_dialect_it_was_created_with() {
    let pg = Builder::with_dialect(Dialect::Postgres).where_(bind("a = ?", 1));
    let my = Builder::with_dialect(Dialect::MySQL).where_(bind("a = ?", 1));

    assert_eq!(pg.dialect(), Dialect::Postgres);
    assert_eq!(my.dialect(), Dialect::MySQL);
    assert_eq!(pg.sql().expect("render"), "select 1 from dual where a = $1");
    assert_eq!(my.sql().expect("render"), "select 1 from dual where a = ?");
}

#[test]
fn dialects_parse_and_print_by_name() {
    assert_eq!("mysql".parse::<Dialect>().expect("parse"), Dialect::MySQL);
    assert_eq!(
        "postgres".parse::<Dialect>().expect("parse"),
        Dialect::Postgres
    );
    assert_eq!(
        "postgresql".parse::<Dialect>().expect("parse"),
        Dialect::Postgres
    );
    assert_eq!("sqlite".parse::<Dialect>().expect("parse"), Dialect::SQLite);

    assert_eq!(Dialect::Postgres.to_string(), "postgres");
    assert_eq!(Dialect::MySQL.to_string(), "mysql");
    assert_eq!(Dialect::SQLite.to_string(), "sqlite");
}

#[test]
fn unknown_dialect_names_are_rejected() {
    let err = "oracle".parse::<Dialect>().expect_err("unsupported name");
    assert!(matches!(err, Error::UnknownDialect { name } if name == "oracle"));
}

#[test]
fn placeholder_style_follows_the_dialect() {
    assert_eq!(
        Dialect::Postgres.placeholder_style(),
        PlaceholderStyle::Numbered
    );
    assert_eq!(Dialect::MySQL.placeholder_style(), PlaceholderStyle::Question);
    assert_eq!(
        Dialect::SQLite.placeholder_style(),
        PlaceholderStyle::Question
    );
}
