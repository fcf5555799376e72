use chrono::NaiveDate;

#[derive(Queryable, Clone, Debug, PartialEq)]
pub struct Admission {
    pub admission_num: i32,
    pub ssn: i32,
    pub admission_date: NaiveDate,
    pub total_payment: Option<f32>,
}

pub const NO_PAYMENT: &str = "(none)";
