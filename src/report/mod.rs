mod requests;
mod responses;


use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use crate::{
    console::Console,
    database::HospitalStore,
    error::{ReportError, ReportResult},
};

use self::{
    requests::{LookupRequest, UpdatePaymentRequest},
    responses::{AdmissionReport, DoctorReport, PatientReport},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    PatientReport,
    DoctorReport,
    AdmissionReport,
    UpdatePayment,
}

impl Action {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "1" => Some(Action::PatientReport),
            "2" => Some(Action::DoctorReport),
            "3" => Some(Action::AdmissionReport),
            "4" => Some(Action::UpdatePayment),
            _ => None,
        }
    }
}

/// Runs the action selected by `code`. An unknown code runs nothing.
pub fn run<S, R, W>(store: &mut S, console: &mut Console<R, W>, code: &str) -> ReportResult<()>
where
    S: HospitalStore,
    R: BufRead,
    W: Write,
{
    let action = match Action::from_code(code) {
        Some(action) => action,
        None => {
            warn!(code, "unrecognized action code, nothing to run");
            return Ok(());
        }
    };
    debug!(?action, "dispatching");

    match action {
        Action::PatientReport => patient_report(store, console),
        Action::DoctorReport => doctor_report(store, console),
        Action::AdmissionReport => admission_report(store, console),
        Action::UpdatePayment => update_payment(store, console),
    }
}

fn patient_report<S: HospitalStore, R: BufRead, W: Write>(
    store: &S,
    console: &mut Console<R, W>,
) -> ReportResult<()> {
    let info = LookupRequest::read(console, "Enter Patient SSN: ", "patient SSN")?;
    let patient = store
        .find_patient(info.id)
        .map_err(ReportError::QueryFailed)?;

    match patient {
        Some(patient) => write!(console.output(), "{}", PatientReport { patient })?,
        None => writeln!(console.output(), "No patient with SSN {}", info.id)?,
    }
    Ok(())
}

fn doctor_report<S: HospitalStore, R: BufRead, W: Write>(
    store: &S,
    console: &mut Console<R, W>,
) -> ReportResult<()> {
    let info = LookupRequest::read(console, "Enter Doctor ID: ", "doctor ID")?;
    let doctor = store
        .find_doctor(info.id)
        .map_err(ReportError::QueryFailed)?;

    match doctor {
        Some(doctor) => write!(console.output(), "{}", DoctorReport { doctor })?,
        None => writeln!(console.output(), "No doctor with ID {}", info.id)?,
    }
    Ok(())
}

fn admission_report<S: HospitalStore, R: BufRead, W: Write>(
    store: &S,
    console: &mut Console<R, W>,
) -> ReportResult<()> {
    let info = LookupRequest::read(console, "Enter Admission Number: ", "admission number")?;
    let admission = match store
        .find_admission(info.id)
        .map_err(ReportError::QueryFailed)?
    {
        Some(admission) => admission,
        None => {
            writeln!(console.output(), "No admission with number {}", info.id)?;
            return Ok(());
        }
    };

    let stays = store.stays_of(info.id).map_err(ReportError::QueryFailed)?;
    let doctor_ids = store
        .examining_doctors(info.id)
        .map_err(ReportError::QueryFailed)?;

    let report = AdmissionReport {
        admission,
        stays,
        doctor_ids,
    };
    write!(console.output(), "{}", report)?;
    Ok(())
}

fn update_payment<S: HospitalStore, R: BufRead, W: Write>(
    store: &mut S,
    console: &mut Console<R, W>,
) -> ReportResult<()> {
    let info = UpdatePaymentRequest::read(console)?;
    let found = store
        .set_total_payment(info.admission_num, info.total_payment)
        .map_err(ReportError::UpdateFailed)?;

    if found {
        info!(
            admission_num = info.admission_num,
            total_payment = info.total_payment,
            "admission payment updated"
        );
        writeln!(
            console.output(),
            "Admission Number {} Updated",
            info.admission_num
        )?;
    } else {
        writeln!(
            console.output(),
            "No admission with number {}, nothing updated",
            info.admission_num
        )?;
    }
    Ok(())
}
