use diesel::{prelude::*, MysqlConnection};

pub fn admission_exists(conn: &MysqlConnection, admission_num: i32) -> QueryResult<bool> {
    use crate::schema::admissions;

    let res = admissions::table
        .filter(admissions::admission_num.eq(admission_num))
        .count()
        .get_result::<i64>(conn)?;

    Ok(res > 0)
}
