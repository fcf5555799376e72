use chrono::NaiveDate;

/// One `StayIn` row as selected for an admission, without the admission number.
#[derive(Queryable, Clone, Debug, PartialEq)]
pub struct Stay {
    pub room_num: i32,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
}

pub const ONGOING_END_DATE: &str = "(ongoing)";
