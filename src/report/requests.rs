use std::io::{BufRead, Write};

use crate::{
    console::Console,
    error::{ReportError, ReportResult},
};

pub struct LookupRequest {
    pub id: i32,
}

impl LookupRequest {
    pub fn read<R: BufRead, W: Write>(
        console: &mut Console<R, W>,
        label: &str,
        field: &'static str,
    ) -> ReportResult<Self> {
        let id = console.prompt(label, field)?;
        Ok(Self { id })
    }
}

pub struct UpdatePaymentRequest {
    pub admission_num: i32,
    pub total_payment: f32,
}

impl UpdatePaymentRequest {
    pub fn read<R: BufRead, W: Write>(console: &mut Console<R, W>) -> ReportResult<Self> {
        let admission_num = console.prompt("Enter Admission Num: ", "admission number")?;
        let token: String = console.prompt("Enter the new total payment: ", "total payment")?;
        let total_payment = match token.parse::<f32>() {
            Ok(payment) if payment.is_finite() => payment,
            _ => {
                return Err(ReportError::InvalidInput {
                    field: "total payment",
                    value: token,
                })
            }
        };

        Ok(Self {
            admission_num,
            total_payment,
        })
    }
}
