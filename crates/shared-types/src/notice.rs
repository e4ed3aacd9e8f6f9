use serde::{Deserialize, Serialize};

// ── Fixed option tables ─────────────────────────────────────────────

/// Category of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NoticeType {
    WarningDisciplinary,
    PerformanceImprovement,
    AppreciationRecognition,
    AttendanceLeaveIssue,
    PayrollCompensation,
    ContractRoleUpdate,
    AdvisoryPersonalReminder,
}

/// All notice types in display order.
pub const NOTICE_TYPES: &[NoticeType] = &[
    NoticeType::WarningDisciplinary,
    NoticeType::PerformanceImprovement,
    NoticeType::AppreciationRecognition,
    NoticeType::AttendanceLeaveIssue,
    NoticeType::PayrollCompensation,
    NoticeType::ContractRoleUpdate,
    NoticeType::AdvisoryPersonalReminder,
];

impl NoticeType {
    pub fn code(&self) -> &'static str {
        match self {
            NoticeType::WarningDisciplinary => "WARNING_DISCIPLINARY",
            NoticeType::PerformanceImprovement => "PERFORMANCE_IMPROVEMENT",
            NoticeType::AppreciationRecognition => "APPRECIATION_RECOGNITION",
            NoticeType::AttendanceLeaveIssue => "ATTENDANCE_LEAVE_ISSUE",
            NoticeType::PayrollCompensation => "PAYROLL_COMPENSATION",
            NoticeType::ContractRoleUpdate => "CONTRACT_ROLE_UPDATE",
            NoticeType::AdvisoryPersonalReminder => "ADVISORY_PERSONAL_REMINDER",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NoticeType::WarningDisciplinary => "Warning / Disciplinary",
            NoticeType::PerformanceImprovement => "Performance Improvement",
            NoticeType::AppreciationRecognition => "Appreciation / Recognition",
            NoticeType::AttendanceLeaveIssue => "Attendance / Leave Issue",
            NoticeType::PayrollCompensation => "Payroll / Compensation",
            NoticeType::ContractRoleUpdate => "Contract / Role Update",
            NoticeType::AdvisoryPersonalReminder => "Advisory / Personal Reminder",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        NOTICE_TYPES.iter().copied().find(|t| t.code() == code)
    }
}

/// A concrete department a notice can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Department {
    Sales,
    Marketing,
    It,
    Hr,
}

pub const DEPARTMENTS: &[Department] = &[
    Department::Sales,
    Department::Marketing,
    Department::It,
    Department::Hr,
];

impl Department {
    pub fn code(&self) -> &'static str {
        match self {
            Department::Sales => "SALES",
            Department::Marketing => "MARKETING",
            Department::It => "IT",
            Department::Hr => "HR",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Department::Sales => "Sales",
            Department::Marketing => "Marketing",
            Department::It => "IT",
            Department::Hr => "Human Resources",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        DEPARTMENTS.iter().copied().find(|d| d.code() == code)
    }
}

/// Sentinel target code for "every department".
pub const ALL_DEPARTMENTS: &str = "ALL_DEPARTMENTS";
/// Sentinel target code for a single employee.
pub const INDIVIDUAL: &str = "INDIVIDUAL";

/// One entry of the audience picker: a sentinel or a department.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetOption {
    AllDepartments,
    Individual,
    Department(Department),
}

/// Audience picker entries in display order.
pub const TARGET_OPTIONS: &[TargetOption] = &[
    TargetOption::AllDepartments,
    TargetOption::Individual,
    TargetOption::Department(Department::Sales),
    TargetOption::Department(Department::Marketing),
    TargetOption::Department(Department::It),
    TargetOption::Department(Department::Hr),
];

impl TargetOption {
    pub fn code(&self) -> &'static str {
        match self {
            TargetOption::AllDepartments => ALL_DEPARTMENTS,
            TargetOption::Individual => INDIVIDUAL,
            TargetOption::Department(d) => d.code(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TargetOption::AllDepartments => "All Departments",
            TargetOption::Individual => "Individual",
            TargetOption::Department(d) => d.label(),
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        TARGET_OPTIONS.iter().copied().find(|o| o.code() == code)
    }
}

/// Employee ids offered by the individual-target picker.
pub const EMPLOYEE_ID_OPTIONS: &[&str] = &["EMP001", "EMP002", "EMP003", "EMP004", "EMP005", "EMP006"];

// ── Status ──────────────────────────────────────────────────────────

/// Lifecycle status of a persisted notice. Values the API adds later land in
/// `Other` with their raw text so one unfamiliar row never sinks a page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NoticeStatus {
    Draft,
    Published,
    Unpublished,
    Other(String),
}

impl NoticeStatus {
    pub fn as_str(&self) -> &str {
        match self {
            NoticeStatus::Draft => "draft",
            NoticeStatus::Published => "published",
            NoticeStatus::Unpublished => "unpublished",
            NoticeStatus::Other(raw) => raw,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            NoticeStatus::Draft => "Draft",
            NoticeStatus::Published => "Published",
            NoticeStatus::Unpublished => "Unpublished",
            NoticeStatus::Other(raw) => raw,
        }
    }

    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s {
            "draft" => Some(NoticeStatus::Draft),
            "published" => Some(NoticeStatus::Published),
            "unpublished" => Some(NoticeStatus::Unpublished),
            _ => None,
        }
    }

    /// The status a published/unpublished toggle moves to. Drafts are
    /// promoted through the publish endpoint instead, and unrecognised
    /// statuses are shown read-only.
    pub fn toggled(&self) -> Option<Self> {
        match self {
            NoticeStatus::Published => Some(NoticeStatus::Unpublished),
            NoticeStatus::Unpublished => Some(NoticeStatus::Published),
            NoticeStatus::Draft | NoticeStatus::Other(_) => None,
        }
    }
}

impl From<String> for NoticeStatus {
    fn from(raw: String) -> Self {
        NoticeStatus::from_str_opt(&raw).unwrap_or(NoticeStatus::Other(raw))
    }
}

impl From<NoticeStatus> for String {
    fn from(status: NoticeStatus) -> Self {
        match status {
            NoticeStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

/// Reads a missing or `null` string field as empty.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

// ── Wire records ────────────────────────────────────────────────────

/// `{id, name}` pair the API returns for notice types and targets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionRef {
    pub id: String,
    pub name: String,
}

/// A stored attachment reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub file_path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
}

impl Attachment {
    /// Link target with Windows-style separators normalized.
    pub fn href(&self) -> String {
        self.file_path.replace('\\', "/")
    }

    /// Display label, falling back to a 1-based position.
    pub fn label(&self, index: usize) -> String {
        match &self.file_name {
            Some(name) if !name.is_empty() => name.clone(),
            _ => format!("Attachment {}", index + 1),
        }
    }
}

/// A notice as returned by the API. List responses omit the body and
/// attachments; the detail endpoint fills them in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notice {
    #[serde(rename = "_id")]
    pub id: String,
    pub notice_title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notice_body: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notice_type: Option<OptionRef>,
    #[serde(default)]
    pub target_departments: Vec<OptionRef>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub publish_date: String,
    pub status: NoticeStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Notice {
    pub fn notice_type_name(&self) -> &str {
        self.notice_type
            .as_ref()
            .map(|t| t.name.as_str())
            .unwrap_or("N/A")
    }

    /// Short audience summary for table rows: `"Sales +2 more"`.
    pub fn department_summary(&self) -> String {
        match self.target_departments.split_first() {
            None => "N/A".to_string(),
            Some((first, [])) => first.name.clone(),
            Some((first, rest)) => format!("{} +{} more", first.name, rest.len()),
        }
    }

    /// Code of the first target, used to colour the audience cell.
    pub fn primary_target_code(&self) -> Option<&str> {
        self.target_departments.first().map(|d| d.id.as_str())
    }

    /// Every target name, comma separated.
    pub fn department_list(&self) -> String {
        if self.target_departments.is_empty() {
            return "N/A".to_string();
        }
        self.target_departments
            .iter()
            .map(|d| d.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn targets_individual(&self) -> bool {
        self.target_departments.iter().any(|d| d.id == INDIVIDUAL)
    }
}
