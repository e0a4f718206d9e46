//! Rendering of generated appointments.

use std::io::Write;

use anyhow::Result;
use clap::ValueEnum;
use schedule_engine::Appointment;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// One `YYYY-MM-DD HH:MM | name` line per appointment
    Text,
    /// A JSON array of `{"time", "name"}` objects
    Json,
}

pub fn write_appointments(
    out: &mut impl Write,
    appointments: &[Appointment],
    format: Format,
) -> Result<()> {
    match format {
        Format::Text => {
            for appointment in appointments {
                writeln!(
                    out,
                    "{} | {}",
                    appointment.time().format("%Y-%m-%d %H:%M"),
                    appointment.name()
                )?;
            }
        }
        Format::Json => {
            serde_json::to_writer_pretty(&mut *out, appointments)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
