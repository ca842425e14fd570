use crate::expression::helpers::bind;
use crate::param::Param;
use crate::query_builder::{Builder, Error};
use crate::renderer;

#[test]
fn from_single_table() {
    let sql = Builder::new().from("rawr").sql().expect("render");
    assert_eq!(sql, "select 1 from rawr");
}

#[test]
fn from_multiple_tables_in_one_string() {
    let sql = Builder::new().from("rawr, omg").sql().expect("render");
    assert_eq!(sql, "select 1 from rawr, omg");
}

#[test]
fn from_multiple_calls_accumulate() {
    let sql = Builder::new()
        .from("rawr, omg")
        .from("wow")
        .sql()
        .expect("render");
    assert_eq!(sql, "select 1 from rawr, omg, wow");
}

#[test]
fn from_rejects_bare_subquery() {
    let qb = Builder::new().from(("foo", "bar", Builder::new()));
    let err = qb.to_sql().expect_err("bare subquery in from must fail");
    match err {
        Error::BuilderErrors(list) => {
            assert!(
                list.0[0].contains("name your subquery"),
                "unexpected message: {}",
                list.0[0]
            );
            // в ошибке назван SQL подзапроса
            assert!(list.0[0].contains("select 1 from dual"));
        }
        other => panic!("expected BuilderErrors, got {other:?}"),
    }
}

#[test]
fn nested_builder_with_recorded_error_fails_at_render() {
    // ошибка сбора не глотается, когда битый билдер вложен в другой
    let bad = Builder::new().from(("foo", Builder::new()));

    let via_template = Builder::new().where_(bind("exists (?)", bad.clone()));
    let err = via_template
        .to_sql()
        .expect_err("embedded invalid builder must fail");
    match err {
        Error::SQLRenderError(renderer::Error::InvalidBuilder(list)) => {
            assert!(list.0[0].contains("name your subquery"));
        }
        other => panic!("expected InvalidBuilder, got {other:?}"),
    }

    let via_fragment = Builder::new().where_(bad);
    assert!(matches!(
        via_fragment.to_sql(),
        Err(Error::SQLRenderError(renderer::Error::InvalidBuilder(_)))
    ));
}

#[test]
fn from_accepts_aliased_subquery_template() {
    let qb = Builder::new().from(bind("(?) tmp", Builder::new()));
    assert_eq!(
        qb.sql().expect("render"),
        "select 1 from (select 1 from dual) tmp"
    );
}

#[test]
fn from_binds_appear_in_order() {
    let qb = Builder::new().from(("foo", bind("?", "bar"), bind("?", "so happy")));
    let binds = qb.binds().expect("render");
    assert_eq!(binds[0], Param::Str("bar".into()));
    assert_eq!(binds[1], Param::Str("so happy".into()));
}
