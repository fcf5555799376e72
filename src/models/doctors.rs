#[derive(Queryable, Clone, Debug, PartialEq)]
pub struct Doctor {
    pub did: i32,
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
}
