//! The output row model. Field order and renames define the CSV layout.

use crate::types::{AccountId, ContactMethod, FraudType, Gender, ResolutionStatus, RingId, TimeOfDay};
use chrono::NaiveDate;
use serde::{Serialize, Serializer};

pub const COLUMNS: [&str; 17] = [
    "Transaction_ID",
    "Sender_account",
    "Sender_age",
    "Sender_is_elderly",
    "Receiver_account",
    "Receiver_age",
    "Receiver_is_elderly",
    "Amount",
    "Date",
    "Is_fraud",
    "Sender_gender",
    "Receiver_gender",
    "Type_of_fraud",
    "Method_of_contact",
    "Loss",
    "Time_of_day",
    "Resolution_status",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionRecord {
    #[serde(rename = "Transaction_ID")]
    pub transaction_id: String,
    #[serde(rename = "Sender_account")]
    pub sender_account: AccountId,
    #[serde(rename = "Sender_age")]
    pub sender_age: u32,
    #[serde(rename = "Sender_is_elderly", serialize_with = "as_flag")]
    pub sender_is_elderly: bool,
    #[serde(rename = "Receiver_account")]
    pub receiver_account: AccountId,
    #[serde(rename = "Receiver_age")]
    pub receiver_age: u32,
    #[serde(rename = "Receiver_is_elderly", serialize_with = "as_flag")]
    pub receiver_is_elderly: bool,
    #[serde(rename = "Amount", serialize_with = "as_cents")]
    pub amount: f64,
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    #[serde(rename = "Is_fraud", serialize_with = "as_flag")]
    pub is_fraud: bool,
    #[serde(rename = "Sender_gender")]
    pub sender_gender: Gender,
    #[serde(rename = "Receiver_gender")]
    pub receiver_gender: Gender,
    #[serde(rename = "Type_of_fraud")]
    pub fraud_type: FraudType,
    #[serde(rename = "Method_of_contact")]
    pub contact_method: ContactMethod,
    #[serde(rename = "Loss", serialize_with = "as_cents")]
    pub loss: f64,
    #[serde(rename = "Time_of_day")]
    pub time_of_day: TimeOfDay,
    #[serde(rename = "Resolution_status")]
    pub resolution_status: ResolutionStatus,
    /// Producing ring for fraud rows. Not written out.
    #[serde(skip)]
    pub ring_id: Option<RingId>,
}

/// Round to whole cents.
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn as_flag<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u8(u8::from(*value))
}

fn as_cents<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&format_args!("{value:.2}"))
}
