//! Client-side notice draft: audience selection, attachments, and the
//! validation that turns a draft into a submittable [`NoticeSubmission`].

use chrono::NaiveDate;
use std::fmt;

use crate::error::FieldErrors;
use crate::notice::{Department, NoticeType, TargetOption, ALL_DEPARTMENTS, INDIVIDUAL};

/// Upper bound on files attached to one notice.
pub const MAX_ATTACHMENTS: usize = 5;

/// Form field names. These match the API's multipart field names so that
/// server-side field errors land on the same inputs as local ones.
pub mod fields {
    pub const NOTICE_TITLE: &str = "noticeTitle";
    pub const NOTICE_BODY: &str = "noticeBody";
    pub const NOTICE_TYPE: &str = "noticeType";
    pub const PUBLISH_DATE: &str = "publishDate";
    pub const EMPLOYEE_ID: &str = "employeeId";
    pub const EMPLOYEE_NAME: &str = "employeeName";
    pub const POSITION: &str = "position";
    pub const DEPARTMENTS: &str = "departments";
    pub const ATTACHMENTS: &str = "attachments";
    pub const TARGET_DEPARTMENTS: &str = "targetDepartments[]";
}

pub const ATTACHMENT_LIMIT_MESSAGE: &str = "Maximum 5 files allowed";

/// Audience shape discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetType {
    AllDepartments,
    Individual,
    Department,
}

/// Employee details required for an individual notice.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeFields {
    pub employee_id: String,
    pub employee_name: String,
    pub position: String,
}

/// Who a notice is addressed to. Exactly one shape is active at a time.
#[derive(Debug, Clone, PartialEq)]
pub enum Target {
    AllDepartments,
    Individual(EmployeeFields),
    Departments(Vec<Department>),
}

impl Default for Target {
    fn default() -> Self {
        Target::AllDepartments
    }
}

impl Target {
    pub fn target_type(&self) -> TargetType {
        match self {
            Target::AllDepartments => TargetType::AllDepartments,
            Target::Individual(_) => TargetType::Individual,
            Target::Departments(_) => TargetType::Department,
        }
    }

    pub fn selected_departments(&self) -> &[Department] {
        match self {
            Target::Departments(depts) => depts,
            _ => &[],
        }
    }

    /// Whether the picker should show `option` as checked.
    pub fn is_selected(&self, option: TargetOption) -> bool {
        match (self, option) {
            (Target::AllDepartments, TargetOption::AllDepartments) => true,
            (Target::Individual(_), TargetOption::Individual) => true,
            (Target::Departments(depts), TargetOption::Department(d)) => depts.contains(&d),
            _ => false,
        }
    }

    /// Values sent as the repeated `targetDepartments[]` field.
    pub fn wire_codes(&self) -> Vec<&'static str> {
        match self {
            Target::AllDepartments => vec![ALL_DEPARTMENTS],
            Target::Individual(_) => vec![INDIVIDUAL],
            Target::Departments(depts) => depts.iter().map(|d| d.code()).collect(),
        }
    }
}

/// A file picked for upload.
#[derive(Debug, Clone, PartialEq)]
pub struct AttachmentFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl AttachmentFile {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let content_type = guess_content_type(&file_name).to_string();
        Self {
            file_name,
            content_type,
            bytes,
        }
    }

    /// Build from a browser file, preferring the type the browser reports
    /// over a guess from the extension.
    pub fn with_content_type(
        file_name: impl Into<String>,
        content_type: Option<String>,
        bytes: Vec<u8>,
    ) -> Self {
        let mut file = Self::new(file_name, bytes);
        if let Some(ct) = content_type.filter(|ct| !ct.is_empty()) {
            file.content_type = ct;
        }
        file
    }
}

fn guess_content_type(file_name: &str) -> &'static str {
    let ext = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "pdf" => "application/pdf",
        _ => "application/octet-stream",
    }
}

/// Rejected attachment batch; the draft is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttachmentLimitExceeded {
    pub current: usize,
    pub incoming: usize,
}

impl fmt::Display for AttachmentLimitExceeded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", ATTACHMENT_LIMIT_MESSAGE)
    }
}

impl std::error::Error for AttachmentLimitExceeded {}

/// Transient notice state owned by the create form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoticeDraft {
    pub target: Target,
    pub notice_title: String,
    pub notice_type: Option<NoticeType>,
    pub publish_date: Option<NaiveDate>,
    pub notice_body: String,
    attachments: Vec<AttachmentFile>,
}

impl NoticeDraft {
    pub fn target_type(&self) -> TargetType {
        self.target.target_type()
    }

    pub fn attachments(&self) -> &[AttachmentFile] {
        &self.attachments
    }

    /// Employee inputs, present only while the target is an individual.
    pub fn employee_mut(&mut self) -> Option<&mut EmployeeFields> {
        match &mut self.target {
            Target::Individual(emp) => Some(emp),
            _ => None,
        }
    }

    pub fn employee(&self) -> Option<&EmployeeFields> {
        match &self.target {
            Target::Individual(emp) => Some(emp),
            _ => None,
        }
    }

    pub fn select_target(&mut self, option: TargetOption) {
        match option {
            TargetOption::AllDepartments => self.target = Target::AllDepartments,
            TargetOption::Individual => {
                if !matches!(self.target, Target::Individual(_)) {
                    self.target = Target::Individual(EmployeeFields::default());
                }
            }
            TargetOption::Department(dept) => match &mut self.target {
                Target::Departments(depts) => {
                    if !depts.contains(&dept) {
                        depts.push(dept);
                    }
                }
                _ => self.target = Target::Departments(vec![dept]),
            },
        }
    }

    /// Drop one department. An emptied selection reverts to all departments.
    pub fn remove_department(&mut self, dept: Department) {
        if let Target::Departments(depts) = &mut self.target {
            depts.retain(|d| *d != dept);
            if depts.is_empty() {
                self.target = Target::AllDepartments;
            }
        }
    }

    pub fn add_attachments(
        &mut self,
        files: Vec<AttachmentFile>,
    ) -> Result<(), AttachmentLimitExceeded> {
        let current = self.attachments.len();
        if current + files.len() > MAX_ATTACHMENTS {
            return Err(AttachmentLimitExceeded {
                current,
                incoming: files.len(),
            });
        }
        self.attachments.extend(files);
        Ok(())
    }

    pub fn remove_attachment(&mut self, index: usize) -> Option<AttachmentFile> {
        if index < self.attachments.len() {
            Some(self.attachments.remove(index))
        } else {
            None
        }
    }

    /// Check every rule against `today` (the client's local calendar day).
    pub fn validate(&self, today: NaiveDate) -> Result<NoticeSubmission, FieldErrors> {
        let mut errors = FieldErrors::new();

        match &self.target {
            Target::Individual(emp) => {
                require(&mut errors, fields::EMPLOYEE_ID, &emp.employee_id, "Employee ID is required");
                require(&mut errors, fields::EMPLOYEE_NAME, &emp.employee_name, "Employee Name is required");
                require(&mut errors, fields::POSITION, &emp.position, "Position is required");
            }
            Target::Departments(depts) if depts.is_empty() => {
                errors.insert(
                    fields::DEPARTMENTS.to_string(),
                    "Select at least one department".to_string(),
                );
            }
            _ => {}
        }

        require(&mut errors, fields::NOTICE_TITLE, &self.notice_title, "Notice Title is required");
        require(&mut errors, fields::NOTICE_BODY, &self.notice_body, "Notice Body is required");

        if self.notice_type.is_none() {
            errors.insert(
                fields::NOTICE_TYPE.to_string(),
                "Notice Type is required".to_string(),
            );
        }

        match self.publish_date {
            None => {
                errors.insert(
                    fields::PUBLISH_DATE.to_string(),
                    "Publish Date is required".to_string(),
                );
            }
            Some(date) if date < today => {
                errors.insert(
                    fields::PUBLISH_DATE.to_string(),
                    "Publish Date cannot be before today".to_string(),
                );
            }
            Some(_) => {}
        }

        if self.attachments.len() > MAX_ATTACHMENTS {
            errors.insert(
                fields::ATTACHMENTS.to_string(),
                ATTACHMENT_LIMIT_MESSAGE.to_string(),
            );
        }

        match (errors.is_empty(), self.notice_type, self.publish_date) {
            (true, Some(notice_type), Some(publish_date)) => Ok(NoticeSubmission {
                notice_title: self.notice_title.clone(),
                notice_body: self.notice_body.clone(),
                notice_type,
                publish_date,
                target: self.target.clone(),
                attachments: self.attachments.clone(),
            }),
            _ => Err(errors),
        }
    }
}

fn require(errors: &mut FieldErrors, field: &str, value: &str, message: &str) {
    if value.trim().is_empty() {
        errors.insert(field.to_string(), message.to_string());
    }
}

/// A validated draft, ready to be serialized as multipart form data.
#[derive(Debug, Clone, PartialEq)]
pub struct NoticeSubmission {
    pub notice_title: String,
    pub notice_body: String,
    pub notice_type: NoticeType,
    pub publish_date: NaiveDate,
    pub target: Target,
    pub attachments: Vec<AttachmentFile>,
}

impl NoticeSubmission {
    /// Text parts in wire order; files are appended separately as
    /// `attachments` parts.
    pub fn text_fields(&self) -> Vec<(&'static str, String)> {
        let mut out = vec![
            (fields::NOTICE_TITLE, self.notice_title.clone()),
            (fields::NOTICE_BODY, self.notice_body.clone()),
            (fields::NOTICE_TYPE, self.notice_type.code().to_string()),
            (
                fields::PUBLISH_DATE,
                self.publish_date.format("%Y-%m-%d").to_string(),
            ),
        ];
        for code in self.target.wire_codes() {
            out.push((fields::TARGET_DEPARTMENTS, code.to_string()));
        }
        if let Target::Individual(emp) = &self.target {
            out.push((fields::EMPLOYEE_ID, emp.employee_id.clone()));
            out.push((fields::EMPLOYEE_NAME, emp.employee_name.clone()));
            out.push((fields::POSITION, emp.position.clone()));
        }
        out
    }
}
