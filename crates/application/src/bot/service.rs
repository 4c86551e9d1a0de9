use super::error::BotError;
use super::reply::{Reply, Response};
use super::{keyboards, texts};
use crate::auth::AdminGate;
use crate::intent::{self, InputHint, Intent};
use crate::report::ReportBuilder;
use domain::action::format_date;
use domain::export::ReportExporter;
use domain::{
    ActionLogRepository, Clock, EventPayload, InboundEvent, NewActionRecord, ReportKind,
    ReportOutcome, ReportRow, ScooterFleet, SystemClock,
};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Turns inbound events into responses.
///
/// Holds only immutable configuration and shared handles, so one instance
/// serves concurrent webhook requests.
pub struct BotService {
    fleet: ScooterFleet,
    page_size: usize,
    gate: AdminGate,
    log: Arc<dyn ActionLogRepository>,
    reports: ReportBuilder,
    exporter: Arc<dyn ReportExporter>,
    clock: Arc<dyn Clock>,
}

impl BotService {
    pub const DEFAULT_PAGE_SIZE: usize = 20;

    pub fn new(
        log: Arc<dyn ActionLogRepository>,
        exporter: Arc<dyn ReportExporter>,
        gate: AdminGate,
    ) -> Self {
        Self {
            fleet: ScooterFleet::default(),
            page_size: Self::DEFAULT_PAGE_SIZE,
            gate,
            reports: ReportBuilder::new(log.clone()),
            log,
            exporter,
            clock: Arc::new(SystemClock),
        }
    }

    pub fn with_fleet(mut self, fleet: ScooterFleet, page_size: usize) -> Self {
        self.fleet = fleet;
        self.page_size = page_size.max(1);
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Handle one event. Never fails: errors become their user message.
    /// Unrecognized events produce an empty response.
    pub async fn handle(&self, event: &InboundEvent) -> Response {
        let sender = event.sender_id;
        let Some(routed) = intent::route(event) else {
            debug!(user_id = sender, "Ignoring unrecognized event");
            return Response::default();
        };

        let result = match routed {
            Ok(intent) => {
                debug!(user_id = sender, ?intent, "Routing intent");
                self.execute(sender, intent).await.map(|response| {
                    let from_button = matches!(event.payload, EventPayload::Button { .. });
                    if from_button && matches!(intent, Intent::ListScooters(_)) {
                        let mut replies = vec![Reply::DeleteOrigin];
                        replies.extend(response.replies);
                        Response { replies }
                    } else {
                        response
                    }
                })
            }
            Err(hint) => Err(self.reject(sender, hint)),
        };

        result.unwrap_or_else(|e| {
            match &e {
                BotError::InvalidInput(_) => debug!(user_id = sender, error = %e, "Invalid input"),
                BotError::PermissionDenied(_) => warn!(user_id = sender, "⛔ Admin intent rejected"),
                BotError::Storage(_) | BotError::Export(_) => {
                    error!(user_id = sender, error = %e, "Failed to handle event")
                }
            }
            Response::notice(e.user_message(), true)
        })
    }

    /// Run one intent on behalf of `sender`. The admin gate runs before any
    /// store access.
    pub async fn execute(&self, sender: i64, intent: Intent) -> Result<Response, BotError> {
        if intent.requires_admin() && !self.gate.is_admin(sender) {
            return Err(BotError::PermissionDenied(sender));
        }

        match intent {
            Intent::Start => Ok(Response::message(texts::START)),
            Intent::Help => Ok(Response::message(texts::help(self.gate.is_admin(sender)))),
            Intent::ListScooters(requested) => {
                let page = self.fleet.page(requested, self.page_size);
                Ok(Response::with_keyboard(
                    texts::scooter_page(&page),
                    keyboards::page_navigation(&page),
                ))
            }
            Intent::ScooterDetail(number) => {
                let number = self.check_scooter(number)?;
                Ok(Response::with_keyboard(
                    texts::scooter_detail(number),
                    keyboards::scooter_actions(number),
                ))
            }
            Intent::RecordAction(number, action) => {
                let number = self.check_scooter(number)?;
                let record = NewActionRecord::new(number, sender, action, self.clock.now());
                let id = self.log.append(record).await?;
                info!(id, scooter = number, user_id = sender, %action, "📝 Action recorded");
                Ok(Response::notice(texts::recorded(action), true))
            }
            Intent::ShowMyId => Ok(Response::message(texts::my_id(sender))),
            Intent::AdminMenu => Ok(Response::with_keyboard(
                texts::ADMIN_MENU,
                keyboards::admin_menu(),
            )),
            Intent::AdminReportAll => {
                let outcome = self.reports.full_report().await?;
                self.export(ReportKind::Full, outcome, texts::NO_RECORDS.to_string())
            }
            Intent::AdminReportByDate(day) => {
                let outcome = self.reports.daily_report(day).await?;
                self.export(
                    ReportKind::Daily(day),
                    outcome,
                    texts::no_records_on(&format_date(&day)),
                )
            }
            Intent::AdminReportByDateHint => Ok(Response::notice(texts::REPORT_USAGE, true)),
            Intent::AdminReportToday => {
                let day = self.clock.today();
                let outcome = self.reports.daily_report(day).await?;
                self.export(
                    ReportKind::Daily(day),
                    outcome,
                    texts::NO_RECORDS_TODAY.to_string(),
                )
            }
            Intent::AdminStatusList(action) => {
                let outcome = self.reports.status_list(action).await?;
                Ok(Response::message(texts::status_list(action, outcome.rows())))
            }
            Intent::AdminClear => {
                let deleted = self.log.clear().await?;
                warn!(user_id = sender, deleted, "🧹 Action log cleared");
                Ok(Response::message(texts::cleared(deleted)))
            }
            Intent::AdminHistory(number) => {
                let number = self.check_scooter(number)?;
                let outcome = self.reports.history(number).await?;
                Ok(Response::message(texts::history(number, outcome.rows())))
            }
        }
    }

    fn check_scooter(&self, number: i64) -> Result<i64, BotError> {
        self.fleet
            .check(number)
            .map_err(|_| BotError::InvalidInput(InputHint::InvalidScooterNumber))
    }

    /// Usage hints of admin commands are not revealed to other users
    fn reject(&self, sender: i64, hint: InputHint) -> BotError {
        if hint.requires_admin() && !self.gate.is_admin(sender) {
            BotError::PermissionDenied(sender)
        } else {
            BotError::InvalidInput(hint)
        }
    }

    fn export(
        &self,
        kind: ReportKind,
        outcome: ReportOutcome<ReportRow>,
        empty_text: String,
    ) -> Result<Response, BotError> {
        let rows = match outcome {
            ReportOutcome::Rows(rows) => rows,
            ReportOutcome::Empty => return Ok(Response::message(empty_text)),
        };
        let report = self.exporter.export(kind, &rows)?;
        info!(file = %report.file_name, rows = rows.len(), "📊 Report exported");
        let caption = match kind {
            ReportKind::Full => texts::FULL_REPORT_CAPTION,
            ReportKind::Daily(_) => texts::DAILY_REPORT_CAPTION,
        };
        Ok(Response::document(report, caption))
    }
}
