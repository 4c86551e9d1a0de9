use chrono::NaiveDate;
use domain::action::parse_date;
use domain::{ActionKind, EventPayload, InboundEvent};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Everything the bot knows how to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Start,
    Help,
    ListScooters(i64),
    ScooterDetail(i64),
    RecordAction(i64, ActionKind),
    ShowMyId,
    AdminMenu,
    AdminReportAll,
    AdminReportByDate(NaiveDate),
    AdminReportByDateHint,
    AdminReportToday,
    AdminStatusList(ActionKind),
    AdminClear,
    AdminHistory(i64),
}

impl Intent {
    pub fn requires_admin(&self) -> bool {
        matches!(
            self,
            Self::AdminMenu
                | Self::AdminReportAll
                | Self::AdminReportByDate(_)
                | Self::AdminReportByDateHint
                | Self::AdminReportToday
                | Self::AdminStatusList(_)
                | Self::AdminClear
                | Self::AdminHistory(_)
        )
    }
}

/// Why a recognized command could not be turned into an intent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputHint {
    /// Scooter number outside the fleet, or not a number at all
    InvalidScooterNumber,
    /// `/history` without exactly one numeric argument
    HistoryUsage,
    /// `/report` with something other than a single `YYYY-MM-DD` date
    ReportUsage,
}

impl InputHint {
    /// Usage hints of admin commands are only shown to admins
    pub fn requires_admin(&self) -> bool {
        matches!(self, Self::HistoryUsage | Self::ReportUsage)
    }
}

/// Opaque payload carried by inline keyboard buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallbackToken {
    Page(i64),
    Record(ActionKind, i64),
    AdminToday,
    AdminByDate,
    AdminStatusList(ActionKind),
    AdminClear,
}

impl CallbackToken {
    pub fn parse(token: &str) -> Option<Self> {
        if let Some(admin) = token.strip_prefix("admin_") {
            return match admin {
                "today" => Some(Self::AdminToday),
                "by_date" => Some(Self::AdminByDate),
                "clear_db" => Some(Self::AdminClear),
                other => other
                    .strip_suffix("_list")
                    .and_then(|kind| kind.parse().ok())
                    .map(Self::AdminStatusList),
            };
        }

        let (head, number) = token.split_once('_')?;
        let number: i64 = number.parse().ok()?;
        match head {
            "page" => Some(Self::Page(number)),
            kind => kind.parse().ok().map(|kind| Self::Record(kind, number)),
        }
    }

    pub fn into_intent(self) -> Intent {
        match self {
            Self::Page(page) => Intent::ListScooters(page),
            Self::Record(kind, number) => Intent::RecordAction(number, kind),
            Self::AdminToday => Intent::AdminReportToday,
            Self::AdminByDate => Intent::AdminReportByDateHint,
            Self::AdminStatusList(kind) => Intent::AdminStatusList(kind),
            Self::AdminClear => Intent::AdminClear,
        }
    }
}

impl fmt::Display for CallbackToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Page(page) => write!(f, "page_{page}"),
            Self::Record(kind, number) => write!(f, "{kind}_{number}"),
            Self::AdminToday => f.write_str("admin_today"),
            Self::AdminByDate => f.write_str("admin_by_date"),
            Self::AdminStatusList(kind) => write!(f, "admin_{kind}_list"),
            Self::AdminClear => f.write_str("admin_clear_db"),
        }
    }
}

static SCOOTER_COMMAND: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/s([0-9]+)(?:@\w+)?$").expect("scooter command pattern"));

/// Outcome of routing one event. `None` means the event is ignored.
pub type Routed = Option<Result<Intent, InputHint>>;

/// Classify an inbound event. Purely syntactic: range checks against the
/// fleet and the admin gate are applied by the handler.
pub fn route(event: &InboundEvent) -> Routed {
    match &event.payload {
        EventPayload::Text { text } => route_text(text),
        EventPayload::Button { token, .. } => {
            CallbackToken::parse(token).map(|t| Ok(t.into_intent()))
        }
    }
}

fn route_text(text: &str) -> Routed {
    let text = text.trim();

    if let Some(caps) = SCOOTER_COMMAND.captures(text) {
        return Some(
            caps[1]
                .parse::<i64>()
                .map(Intent::ScooterDetail)
                .map_err(|_| InputHint::InvalidScooterNumber),
        );
    }

    let mut parts = text.split_whitespace();
    let command = parts.next()?.strip_prefix('/')?;
    // Group chats address commands as `/cmd@bot_name`
    let command = command.split('@').next().unwrap_or(command);
    let args: Vec<&str> = parts.collect();

    let intent = match command {
        "start" => Ok(Intent::Start),
        "help" => Ok(Intent::Help),
        "liste" => Ok(Intent::ListScooters(1)),
        "myid" => Ok(Intent::ShowMyId),
        "admin" => Ok(Intent::AdminMenu),
        "report" => match args.as_slice() {
            [] => Ok(Intent::AdminReportAll),
            [day] => parse_date(day)
                .map(Intent::AdminReportByDate)
                .map_err(|_| InputHint::ReportUsage),
            _ => Err(InputHint::ReportUsage),
        },
        "history" => match args.as_slice() {
            [number] => number
                .parse::<i64>()
                .map(Intent::AdminHistory)
                .map_err(|_| InputHint::HistoryUsage),
            _ => Err(InputHint::HistoryUsage),
        },
        _ => return None,
    };
    Some(intent)
}
