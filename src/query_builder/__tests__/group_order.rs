use crate::expression::helpers::bind;
use crate::query_builder::{Builder, Error};
use crate::renderer;

#[test]
fn group_by_single_field() {
    let sql = Builder::new().group_by("time").sql().expect("render");
    assert_eq!(sql, "select 1 from dual group by time");
}

#[test]
fn group_by_multiple_fields() {
    let sql = Builder::new()
        .group_by(("omg", "zomg"))
        .sql()
        .expect("render");
    assert_eq!(sql, "select 1 from dual group by omg, zomg");
}

#[test]
fn group_by_multiple_calls_accumulate() {
    let sql = Builder::new()
        .group_by("omg")
        .group_by("zomg")
        .sql()
        .expect("render");
    assert_eq!(sql, "select 1 from dual group by omg, zomg");
}

#[test]
fn order_by_single_field() {
    let sql = Builder::new().order_by("omg asc").sql().expect("render");
    assert_eq!(sql, "select 1 from dual order by omg asc");
}

#[test]
fn order_by_multiple_fields() {
    let sql = Builder::new()
        .order_by(("omg asc", "zomg desc"))
        .sql()
        .expect("render");
    assert_eq!(sql, "select 1 from dual order by omg asc, zomg desc");
}

#[test]
fn order_by_multiple_calls_accumulate() {
    let sql = Builder::new()
        .order_by("omg asc")
        .order_by("zomg desc")
        .sql()
        .expect("render");
    assert_eq!(sql, "select 1 from dual order by omg asc, zomg desc");
}

#[test]
fn having_without_group_by_fails() {
    let qb = Builder::new().having(bind("count(*) > ?", 5));
    let err = qb.to_sql().expect_err("having without group by must fail");
    match err {
        Error::SQLRenderError(renderer::Error::HavingWithoutGroupBy { sql }) => {
            // в ошибке — собранный SQL для диагностики
            assert!(sql.starts_with("select 1 from dual having"), "got: {sql}");
        }
        other => panic!("expected HavingWithoutGroupBy, got {other:?}"),
    }
}

#[test]
fn having_with_group_by_succeeds() {
    let (sql, binds) = Builder::new()
        .group_by("user_id")
        .having(bind("count(*) > ?", 5))
        .to_sql()
        .expect("render");
    assert_eq!(
        sql,
        "select 1 from dual group by user_id having count(*) > ?"
    );
    assert_eq!(binds.len(), 1);
}

#[test]
fn full_select_pipeline() {
    let qb = Builder::new()
        .select(("users.id", "users.name"))
        .from("users")
        .where_((bind("users.id > ?", 1), "users.deleted is null"))
        .order_by("users.id desc")
        .limit(10)
        .distinct();

    assert_eq!(
        qb.sql().expect("render"),
        "select distinct users.id, users.name from users where users.id > ? \
         and users.deleted is null order by users.id desc limit 10"
    );
}

#[test]
fn full_scoring_pipeline() {
    let qb = Builder::new()
        .select(("scores.user_id", "IFNULL(sum(scores.points), 0) pts"))
        .from("scores")
        .where_(bind("scores.created > ?", "2014-01-01"))
        .order_by("pts desc")
        .group_by("scores.user_id");

    assert_eq!(
        qb.sql().expect("render"),
        "select scores.user_id, IFNULL(sum(scores.points), 0) pts from scores \
         where scores.created > ? group by scores.user_id order by pts desc"
    );
}
