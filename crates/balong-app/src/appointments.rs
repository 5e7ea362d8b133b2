//! # Appointment Commands
//!
//! Lightweight booking book. Appointments do not reserve barber time or
//! stock; they are a calendar the front desk reads each morning.

use balong_core::{Appointment, AppointmentStatus};
use chrono::{NaiveDate, NaiveTime};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::session::PosSession;

#[derive(Debug, Clone)]
pub struct AppointmentDraft {
    pub date: NaiveDate,
    pub time: NaiveTime,
    /// Blank names become "Walk-in", same as checkout.
    pub customer_name: String,
    pub barber_id: String,
    pub service_id: String,
}

impl PosSession {
    /// Books a new appointment, validating that the referenced barber and
    /// service still exist.
    pub fn book_appointment(&mut self, draft: AppointmentDraft) -> AppResult<Appointment> {
        if !self.state().barbers.iter().any(|b| b.id == draft.barber_id) {
            return Err(AppError::not_found("Barber", draft.barber_id));
        }
        if !self.state().services.iter().any(|s| s.id == draft.service_id) {
            return Err(AppError::not_found("Service", draft.service_id));
        }

        let customer_name = match draft.customer_name.trim() {
            "" => "Walk-in".to_string(),
            trimmed => trimmed.to_string(),
        };

        let appointment = Appointment {
            id: Uuid::new_v4().to_string(),
            date: draft.date,
            time: draft.time,
            customer_name,
            barber_id: draft.barber_id,
            service_id: draft.service_id,
            status: AppointmentStatus::Booked,
        };
        let stored = appointment.clone();
        self.store.update(move |mut state| {
            state.appointments.push(appointment);
            state
        });
        Ok(stored)
    }

    pub fn set_appointment_status(
        &mut self,
        id: &str,
        status: AppointmentStatus,
    ) -> AppResult<()> {
        if !self.state().appointments.iter().any(|a| a.id == id) {
            return Err(AppError::not_found("Appointment", id));
        }
        let id = id.to_string();
        self.store.update(move |mut state| {
            if let Some(appointment) = state.appointments.iter_mut().find(|a| a.id == id) {
                appointment.status = status;
            }
            state
        });
        Ok(())
    }

    /// All appointments on a given day, earliest first. The weekly calendar
    /// view calls this once per visible day.
    pub fn appointments_on(&self, date: NaiveDate) -> Vec<&Appointment> {
        let mut day: Vec<&Appointment> = self
            .state()
            .appointments
            .iter()
            .filter(|a| a.date == date)
            .collect();
        day.sort_by_key(|a| a.time);
        day
    }
}

// ============================================================================
// Tests
// ============================================================================
