//! Case entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A legal case handled by the firm.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Caso {
    /// Unique case identifier.
    pub id: i64,
    /// Case title.
    pub title: String,
    /// Free-form case description.
    pub description: Option<String>,
    /// Name of the client party.
    pub client_name: String,
    /// Contact person at the client.
    pub contact_person: Option<String>,
    /// Client contact email.
    pub client_email: Option<String>,
    /// Client contact phone.
    pub client_phone: Option<String>,
    /// Practice area (e.g. civil, penal, laboral).
    pub practice_area: Option<String>,
    /// Case type within the practice area.
    pub case_type: Option<String>,
    /// Opposing party name.
    pub opponent: Option<String>,
    /// Opposing counsel.
    pub opponent_lawyer: Option<String>,
    /// Court file number.
    pub file_number: Option<String>,
    /// Court handling the case.
    pub court: Option<String>,
    /// Jurisdiction.
    pub jurisdiction: Option<String>,
    /// Presiding judge.
    pub judge: Option<String>,
    /// Case status (e.g. "inicio", "en_proceso", "cerrado").
    pub status: String,
    /// Next scheduled hearing.
    pub next_hearing: Option<DateTime<Utc>>,
    /// Amount in dispute.
    pub amount: Option<f64>,
    /// Fee arrangement description.
    pub fees: Option<String>,
    /// Responsible lawyer name.
    pub responsible_lawyer: Option<String>,
    /// Assisting staff names.
    pub assistants: Option<String>,
    /// Case strategy notes.
    pub strategy: Option<String>,
    /// Identified risks.
    pub risks: Option<String>,
    /// When work on the case started.
    pub start_date: Option<DateTime<Utc>>,
    /// When the case was created.
    pub created_at: DateTime<Utc>,
    /// When the case was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new case. Title and client name are
/// mandatory; everything else is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateCaso {
    pub title: String,
    pub description: Option<String>,
    pub client_name: String,
    pub contact_person: Option<String>,
    pub client_email: Option<String>,
    pub client_phone: Option<String>,
    pub practice_area: Option<String>,
    pub case_type: Option<String>,
    pub opponent: Option<String>,
    pub opponent_lawyer: Option<String>,
    pub file_number: Option<String>,
    pub court: Option<String>,
    pub jurisdiction: Option<String>,
    pub judge: Option<String>,
    /// Defaults to "inicio" when absent.
    pub status: Option<String>,
    pub next_hearing: Option<DateTime<Utc>>,
    pub amount: Option<f64>,
    pub fees: Option<String>,
    pub responsible_lawyer: Option<String>,
    pub assistants: Option<String>,
    pub strategy: Option<String>,
    pub risks: Option<String>,
}
