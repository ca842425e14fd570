use crate::query_builder::Builder;

#[test]
fn limit_single_bound() {
    let sql = Builder::new().limit(5).sql().expect("render");
    assert_eq!(sql, "select 1 from dual limit 5");
}

#[test]
fn limit_range_form() {
    let sql = Builder::new().limit_range(5, 20).sql().expect("render");
    assert_eq!(sql, "select 1 from dual limit 5, 20");
}

#[test]
fn limit_zero_is_honored() {
    let sql = Builder::new().limit(0).sql().expect("render");
    assert_eq!(sql, "select 1 from dual limit 0");
}

#[test]
fn distinct_rewrites_select_token() {
    let sql = Builder::new().distinct().sql().expect("render");
    assert_eq!(sql, "select distinct 1 from dual");
}

#[test]
fn distinct_is_cancelable() {
    let sql = Builder::new()
        .distinct()
        .set_distinct(false)
        .sql()
        .expect("render");
    assert_eq!(sql, "select 1 from dual");
}

#[test]
fn distinct_is_idempotent() {
    let once = Builder::new().select("foo").distinct().sql().expect("render");
    let twice = Builder::new()
        .select("foo")
        .distinct()
        .distinct()
        .sql()
        .expect("render");
    assert_eq!(once, twice);
    assert_eq!(once, "select distinct foo from dual");
}
