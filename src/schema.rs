table! {
    #[sql_name = "Admission"]
    admissions (admission_num) {
        #[sql_name = "AdmissionNum"]
        admission_num -> Integer,
        #[sql_name = "SSN"]
        ssn -> Integer,
        #[sql_name = "AdmissionDate"]
        admission_date -> Date,
        #[sql_name = "TotalPayment"]
        total_payment -> Nullable<Float>,
    }
}

table! {
    #[sql_name = "Doctor"]
    doctors (did) {
        #[sql_name = "dID"]
        did -> Integer,
        #[sql_name = "dFName"]
        first_name -> Varchar,
        #[sql_name = "dLName"]
        last_name -> Varchar,
        #[sql_name = "Gender"]
        gender -> Varchar,
    }
}

table! {
    #[sql_name = "Examine"]
    examines (admission_num, did) {
        #[sql_name = "AdmissionNum"]
        admission_num -> Integer,
        #[sql_name = "dID"]
        did -> Integer,
    }
}

table! {
    #[sql_name = "Patient"]
    patients (ssn) {
        #[sql_name = "SSN"]
        ssn -> Integer,
        #[sql_name = "pFName"]
        first_name -> Varchar,
        #[sql_name = "pLName"]
        last_name -> Varchar,
        #[sql_name = "Address"]
        address -> Varchar,
    }
}

table! {
    #[sql_name = "StayIn"]
    stays (admission_num, room_num, start_date) {
        #[sql_name = "AdmissionNum"]
        admission_num -> Integer,
        #[sql_name = "RoomNum"]
        room_num -> Integer,
        #[sql_name = "StartDate"]
        start_date -> Date,
        #[sql_name = "EndDate"]
        end_date -> Nullable<Date>,
    }
}

joinable!(admissions -> patients (ssn));
joinable!(examines -> admissions (admission_num));
joinable!(examines -> doctors (did));
joinable!(stays -> admissions (admission_num));

allow_tables_to_appear_in_same_query!(
    admissions,
    doctors,
    examines,
    patients,
    stays,
);
