//! Domain layer - Pure business logic with no external dependencies
//!
//! This crate contains:
//! - Entities (ActionRecord) and value objects (ActionKind, ScooterFleet)
//! - The pagination engine over the static fleet range
//! - Inbound event and outbound keyboard shapes
//! - Collaborator interfaces (traits): action log, report exporter, messenger, clock
//!
//! Principles:
//! - No dependencies on infrastructure
//! - Validation lives with the value objects, not in the store
//! - Testable in isolation

pub mod action;
pub mod clock;
pub mod error;
pub mod event;
pub mod export;
pub mod messaging;
pub mod pagination;
pub mod report;
pub mod scooter;

// Re-export commonly used types
pub use action::{ActionKind, ActionLogRepository, ActionRecord, NewActionRecord};
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::DomainError;
pub use event::{EventPayload, InboundEvent};
pub use report::{HistoryEntry, ReportKind, ReportOutcome, ReportRow};
pub use scooter::ScooterFleet;
