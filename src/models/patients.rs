#[derive(Queryable, Clone, Debug, PartialEq)]
pub struct Patient {
    pub ssn: i32,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
}
