use std::fmt;

use crate::{
    models::{
        admissions::{Admission, NO_PAYMENT},
        doctors::Doctor,
        patients::Patient,
        stays::{Stay, ONGOING_END_DATE},
    },
    utils::{format_date, format_date_opt},
};

pub struct PatientReport {
    pub patient: Patient,
}

impl fmt::Display for PatientReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Patient SSN: {}", self.patient.ssn)?;
        writeln!(f, "Patient First Name: {}", self.patient.first_name)?;
        writeln!(f, "Patient Last Name: {}", self.patient.last_name)?;
        writeln!(f, "Patient Address: {}", self.patient.address)
    }
}

pub struct DoctorReport {
    pub doctor: Doctor,
}

impl fmt::Display for DoctorReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Doctor ID: {}", self.doctor.did)?;
        writeln!(f, "Doctor First Name: {}", self.doctor.first_name)?;
        writeln!(f, "Doctor Last Name: {}", self.doctor.last_name)?;
        writeln!(f, "Doctor Gender: {}", self.doctor.gender)
    }
}

/// Admission header followed by its room stays and examining doctors.
pub struct AdmissionReport {
    pub admission: Admission,
    pub stays: Vec<Stay>,
    pub doctor_ids: Vec<i32>,
}

impl fmt::Display for AdmissionReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let admission = &self.admission;
        writeln!(f, "Admission Number: {}", admission.admission_num)?;
        writeln!(f, "Patient SSN: {}", admission.ssn)?;
        writeln!(
            f,
            "Admission date (start date): {}",
            format_date(&admission.admission_date)
        )?;
        match admission.total_payment {
            Some(payment) => writeln!(f, "Total Payment: {:?}", payment)?,
            None => writeln!(f, "Total Payment: {}", NO_PAYMENT)?,
        }

        writeln!(f, "Rooms:")?;
        for stay in &self.stays {
            writeln!(
                f,
                "\tRoomNum: {}\tFromDate: {}\tToDate: {}",
                stay.room_num,
                format_date(&stay.start_date),
                format_date_opt(stay.end_date.as_ref(), ONGOING_END_DATE)
            )?;
        }

        writeln!(f, "Doctors examined the patient in this admission:")?;
        for did in &self.doctor_ids {
            writeln!(f, "\tDoctor ID: {}", did)?;
        }
        Ok(())
    }
}
