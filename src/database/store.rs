use diesel::{
    mysql::Mysql,
    prelude::*,
    query_builder::QueryFragment,
    query_dsl::methods::ExecuteDsl,
    sql_types::{Date, Integer, Nullable},
    MysqlConnection,
};

use super::{exists::admission_exists, Session};
use crate::{
    models::{admissions::Admission, doctors::Doctor, patients::Patient, stays::Stay},
    schema::{admissions, doctors, examines, patients, stays},
};

/// Reads and writes against the hospital tables.
pub trait HospitalStore {
    fn find_patient(&self, ssn: i32) -> QueryResult<Option<Patient>>;

    fn find_doctor(&self, did: i32) -> QueryResult<Option<Doctor>>;

    fn find_admission(&self, admission_num: i32) -> QueryResult<Option<Admission>>;

    /// `StayIn` rows of an admission, in the order the store returns them.
    fn stays_of(&self, admission_num: i32) -> QueryResult<Vec<Stay>>;

    /// Distinct IDs of doctors who examined the patient during an admission.
    fn examining_doctors(&self, admission_num: i32) -> QueryResult<Vec<i32>>;

    /// Returns `false` when no admission has that number.
    fn set_total_payment(&mut self, admission_num: i32, total_payment: f32) -> QueryResult<bool>;
}

fn patient_by_ssn(ssn: i32) -> patients::BoxedQuery<'static, Mysql> {
    patients::table
        .filter(patients::ssn.eq(ssn))
        .into_boxed()
}

fn doctor_by_id(did: i32) -> doctors::BoxedQuery<'static, Mysql> {
    doctors::table.filter(doctors::did.eq(did)).into_boxed()
}

fn admission_by_num(admission_num: i32) -> admissions::BoxedQuery<'static, Mysql> {
    admissions::table
        .filter(admissions::admission_num.eq(admission_num))
        .into_boxed()
}

fn stays_by_admission(
    admission_num: i32,
) -> stays::BoxedQuery<'static, Mysql, (Integer, Date, Nullable<Date>)> {
    stays::table
        .filter(stays::admission_num.eq(admission_num))
        .select((stays::room_num, stays::start_date, stays::end_date))
        .into_boxed()
}

fn examining_dids(admission_num: i32) -> examines::BoxedQuery<'static, Mysql, Integer> {
    examines::table
        .filter(examines::admission_num.eq(admission_num))
        .select(examines::did)
        .distinct()
        .into_boxed()
}

fn set_payment(
    admission_num: i32,
    total_payment: f32,
) -> impl QueryFragment<Mysql> + ExecuteDsl<MysqlConnection> + RunQueryDsl<MysqlConnection> {
    diesel::update(admissions::table.filter(admissions::admission_num.eq(admission_num)))
        .set(admissions::total_payment.eq(Some(total_payment)))
}

/// MySQL counts changed rows, so rewriting the same payment reports zero;
/// only then is the admission looked up to tell "unchanged" from "missing".
fn admission_matched<F>(changed: usize, exists: F) -> QueryResult<bool>
where
    F: FnOnce() -> QueryResult<bool>,
{
    if changed > 0 {
        Ok(true)
    } else {
        exists()
    }
}

impl HospitalStore for Session {
    fn find_patient(&self, ssn: i32) -> QueryResult<Option<Patient>> {
        patient_by_ssn(ssn).first::<Patient>(&self.conn).optional()
    }

    fn find_doctor(&self, did: i32) -> QueryResult<Option<Doctor>> {
        doctor_by_id(did).first::<Doctor>(&self.conn).optional()
    }

    fn find_admission(&self, admission_num: i32) -> QueryResult<Option<Admission>> {
        admission_by_num(admission_num)
            .first::<Admission>(&self.conn)
            .optional()
    }

    fn stays_of(&self, admission_num: i32) -> QueryResult<Vec<Stay>> {
        stays_by_admission(admission_num).load::<Stay>(&self.conn)
    }

    fn examining_doctors(&self, admission_num: i32) -> QueryResult<Vec<i32>> {
        examining_dids(admission_num).load::<i32>(&self.conn)
    }

    fn set_total_payment(&mut self, admission_num: i32, total_payment: f32) -> QueryResult<bool> {
        let changed = set_payment(admission_num, total_payment).execute(&self.conn)?;
        admission_matched(changed, || admission_exists(&self.conn, admission_num))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use diesel::debug_query;

    /// Splits `debug_query` output into the SQL text and its bind list.
    fn sql_and_binds<T: QueryFragment<Mysql>>(query: &T) -> (String, String) {
        let printed = debug_query::<Mysql, _>(query).to_string();
        let mut parts = printed.splitn(2, " -- binds: ");
        let sql = parts.next().unwrap_or_default().to_string();
        let binds = parts.next().unwrap_or_default().to_string();
        (sql, binds)
    }

    #[test]
    fn patient_lookup_binds_ssn() {
        let (sql, binds) = sql_and_binds(&patient_by_ssn(12345));
        assert!(sql.contains("FROM `Patient`"), "{}", sql);
        assert!(sql.contains("`Patient`.`pFName`"), "{}", sql);
        assert!(sql.contains("WHERE `Patient`.`SSN` = ?"), "{}", sql);
        assert!(!sql.contains("12345"), "{}", sql);
        assert_eq!(binds, "[12345]");
    }

    #[test]
    fn doctor_and_admission_lookups_bind_keys() {
        let (sql, binds) = sql_and_binds(&doctor_by_id(3));
        assert!(sql.contains("FROM `Doctor` WHERE `Doctor`.`dID` = ?"), "{}", sql);
        assert_eq!(binds, "[3]");

        let (sql, binds) = sql_and_binds(&admission_by_num(7));
        assert!(
            sql.contains("FROM `Admission` WHERE `Admission`.`AdmissionNum` = ?"),
            "{}",
            sql
        );
        assert_eq!(binds, "[7]");
    }

    #[test]
    fn stays_select_room_and_dates() {
        let (sql, binds) = sql_and_binds(&stays_by_admission(7));
        assert!(
            sql.starts_with(
                "SELECT `StayIn`.`RoomNum`, `StayIn`.`StartDate`, `StayIn`.`EndDate` FROM `StayIn`"
            ),
            "{}",
            sql
        );
        assert!(sql.contains("WHERE `StayIn`.`AdmissionNum` = ?"), "{}", sql);
        assert!(!sql.contains("ORDER BY"), "{}", sql);
        assert_eq!(binds, "[7]");
    }

    #[test]
    fn examining_doctors_are_distinct() {
        let (sql, binds) = sql_and_binds(&examining_dids(7));
        assert!(
            sql.starts_with("SELECT DISTINCT `Examine`.`dID` FROM `Examine`"),
            "{}",
            sql
        );
        assert!(sql.contains("WHERE `Examine`.`AdmissionNum` = ?"), "{}", sql);
        assert_eq!(binds, "[7]");
    }

    #[test]
    fn payment_update_binds_amount_and_key() {
        let (sql, binds) = sql_and_binds(&set_payment(7, 2750.25));
        assert!(
            sql.starts_with("UPDATE `Admission` SET `TotalPayment` = ?"),
            "{}",
            sql
        );
        assert!(sql.contains("WHERE `Admission`.`AdmissionNum` = ?"), "{}", sql);
        assert!(!sql.contains("2750"), "{}", sql);
        assert!(binds.contains("2750.25"), "{}", binds);
        assert!(binds.ends_with("7]"), "{}", binds);
    }

    #[test]
    fn changed_rows_skip_existence_check() {
        let matched = admission_matched(1, || panic!("existence checked")).unwrap();
        assert!(matched);
    }

    #[test]
    fn unchanged_rows_fall_back_to_existence() {
        assert!(admission_matched(0, || Ok(true)).unwrap());
        assert!(!admission_matched(0, || Ok(false)).unwrap());

        let err = admission_matched(0, || Err(diesel::result::Error::NotFound)).unwrap_err();
        assert!(matches!(err, diesel::result::Error::NotFound));
    }
}
