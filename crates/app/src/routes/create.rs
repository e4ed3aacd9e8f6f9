use client::{NoticeApi, NoticeClient, NoticeForm, SubmitEndpoint, SubmitOutcome};
use dioxus::html::FileData;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdPaperclip, LdUpload, LdX};
use dioxus_free_icons::Icon;
use shared_types::{
    fields, AttachmentFile, NoticeType, TargetOption, TargetType, EMPLOYEE_ID_OPTIONS,
    MAX_ATTACHMENTS, NOTICE_TYPES, TARGET_OPTIONS,
};
use shared_ui::{
    AlertBanner, Button, ButtonVariant, Card, CardContent, DialogActions, DialogContent,
    DialogDescription, DialogRoot, DialogTitle, FormSelect, Input, PageHeader, PageTitle,
    Textarea,
};

use crate::format_helpers::{date_input_value, format_file_size, parse_date_input};
use crate::routes::Route;

#[component]
pub fn CreateNoticePage() -> Element {
    let api: NoticeClient = use_context();
    let mut form = use_signal(NoticeForm::new);

    let submit = use_callback(move |endpoint: SubmitEndpoint| {
        let Some(submission) = form.write().begin_submit(crate::today()) else {
            return;
        };
        let api = api.clone();
        spawn(async move {
            let result = api.submit_notice(endpoint, &submission).await;
            form.write().finish_submit(endpoint, result);
        });
    });

    // Pickers are remounted after each choice so picking the same entry
    // again still fires a change.
    let mut target_picks = use_signal(|| 0u32);
    let mut file_picks = use_signal(|| 0u32);
    let mut dragging = use_signal(|| false);

    let on_files = move |evt: FormEvent| async move {
        let picked = read_attachments(evt.files()).await;
        *file_picks.write() += 1;
        if !picked.is_empty() {
            form.write().add_attachments(picked);
        }
    };

    let on_drop = move |evt: DragEvent| {
        evt.prevent_default();
        dragging.set(false);
        let files = evt.files();
        spawn(async move {
            let dropped = read_attachments(files).await;
            if !dropped.is_empty() {
                form.write().add_attachments(dropped);
            }
        });
    };

    let field_error = move |field: &str| form.read().error(field).map(str::to_string);

    let snapshot = form.read().draft().clone();
    let submitting = form.read().is_submitting();
    let banner = form.read().banner().map(str::to_string);
    let target_type = snapshot.target_type();
    let notice_type = snapshot.notice_type.map(|t| t.code()).unwrap_or_default();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./create.css") }

        div { class: "container",
            PageHeader {
                PageTitle { "Create a Notice" }
            }

            Card {
                CardContent {
                    p { class: "create-intro", "Please fill in the details below" }

                    if let Some(message) = banner {
                        AlertBanner {
                            message: message,
                            on_dismiss: move |_| form.write().dismiss_banner(),
                        }
                    }

                    section { class: "create-section",
                        for pick in [target_picks()] {
                            FormSelect {
                                key: "{pick}",
                                label: "Target Department(s) or Individual",
                                required: true,
                                placeholder: "Add a department or individual",
                                error: field_error(fields::DEPARTMENTS),
                                onchange: move |evt: FormEvent| {
                                    if let Some(option) = TargetOption::from_code(&evt.value()) {
                                        form.write().select_target(option);
                                    }
                                    *target_picks.write() += 1;
                                },
                                for target in TARGET_OPTIONS.iter() {
                                    option { key: "{target.code()}", value: target.code(), "{target.label()}" }
                                }
                            }
                        }
                        TargetChips { form: form }
                    }

                    section { class: "create-section",
                        Input {
                            label: "Notice Title",
                            required: true,
                            placeholder: "Write the Title of Notice",
                            value: snapshot.notice_title.clone(),
                            error: field_error(fields::NOTICE_TITLE),
                            on_input: move |evt: FormEvent| form.write().set_title(evt.value()),
                        }
                    }

                    if target_type == TargetType::Individual {
                        EmployeeFieldsSection { form: form }
                    }

                    div { class: "create-grid two",
                        FormSelect {
                            label: "Notice Type",
                            required: true,
                            placeholder: "Select Notice Type",
                            value: notice_type,
                            error: field_error(fields::NOTICE_TYPE),
                            onchange: move |evt: FormEvent| {
                                form.write().set_notice_type(NoticeType::from_code(&evt.value()));
                            },
                            for kind in NOTICE_TYPES.iter() {
                                option { key: "{kind.code()}", value: kind.code(), "{kind.label()}" }
                            }
                        }
                        Input {
                            label: "Publish Date",
                            required: true,
                            input_type: "date",
                            value: date_input_value(snapshot.publish_date),
                            error: field_error(fields::PUBLISH_DATE),
                            on_input: move |evt: FormEvent| {
                                form.write().set_publish_date(parse_date_input(&evt.value()));
                            },
                        }
                    }

                    section { class: "create-section",
                        Textarea {
                            label: "Notice Body",
                            placeholder: "Write the details about notice",
                            rows: 4,
                            value: snapshot.notice_body.clone(),
                            error: field_error(fields::NOTICE_BODY),
                            on_input: move |evt: FormEvent| form.write().set_body(evt.value()),
                        }
                    }

                    section { class: "create-section",
                        label { class: "upload-label",
                            "Upload Attachments (optional, max {MAX_ATTACHMENTS} files)"
                        }
                        label { class: "upload-zone",
                            "data-invalid": field_error(fields::ATTACHMENTS).is_some(),
                            "data-dragging": dragging(),
                            ondragover: move |evt: DragEvent| {
                                evt.prevent_default();
                                dragging.set(true);
                            },
                            ondragleave: move |_| dragging.set(false),
                            ondrop: on_drop,
                            Icon::<LdUpload> { icon: LdUpload, width: 32, height: 32 }
                            span { class: "upload-cta", "Upload" }
                            span { class: "muted", " files or drag and drop." }
                            span { class: "upload-hint", "Accepted File Type: jpg, png, pdf" }
                            for pick in [file_picks()] {
                                input {
                                    key: "{pick}",
                                    class: "upload-input",
                                    r#type: "file",
                                    multiple: true,
                                    accept: ".jpg,.jpeg,.png,.pdf",
                                    onchange: on_files,
                                }
                            }
                        }
                        if let Some(message) = field_error(fields::ATTACHMENTS) {
                            p { class: "field-error", "{message}" }
                        }
                        ul { class: "attachment-list",
                            for (index, file) in snapshot.attachments().iter().enumerate() {
                                li { key: "{index}-{file.file_name}", class: "attachment-item",
                                    Icon::<LdPaperclip> { icon: LdPaperclip, width: 14, height: 14 }
                                    span { "{file.file_name}" }
                                    span { class: "muted", "{format_file_size(file.bytes.len())}" }
                                    button {
                                        class: "attachment-remove",
                                        r#type: "button",
                                        "aria-label": "Remove attachment",
                                        onclick: move |_| form.write().remove_attachment(index),
                                        Icon::<LdX> { icon: LdX, width: 14, height: 14 }
                                    }
                                }
                            }
                        }
                    }

                    div { class: "create-actions",
                        Button {
                            variant: ButtonVariant::Outline,
                            disabled: submitting,
                            onclick: move |_| {
                                navigator().push(Route::notices());
                            },
                            "Cancel"
                        }
                        Button {
                            variant: ButtonVariant::Secondary,
                            loading: submitting,
                            onclick: move |_| submit.call(SubmitEndpoint::SaveDraft),
                            "Save as Draft"
                        }
                        Button {
                            variant: ButtonVariant::Primary,
                            loading: submitting,
                            onclick: move |_| submit.call(SubmitEndpoint::Publish),
                            "Publish Notice"
                        }
                    }
                }
            }

            SubmitSuccessDialog { form: form }
        }
    }
}

/// Read picked or dropped files. Files the browser cannot read are skipped.
async fn read_attachments(files: Vec<FileData>) -> Vec<AttachmentFile> {
    let mut read = Vec::new();
    for file in files {
        let name = file.name();
        match file.read_bytes().await {
            Ok(bytes) => read.push(AttachmentFile::with_content_type(
                name,
                file.content_type(),
                bytes.to_vec(),
            )),
            Err(_) => tracing::warn!(file = %name, "failed to read attachment"),
        }
    }
    read
}

/// Chips for the current audience. Departments can be removed one by one.
#[component]
fn TargetChips(form: Signal<NoticeForm>) -> Element {
    let target = form.read().draft().target.clone();

    rsx! {
        div { class: "target-chips",
            match target.target_type() {
                TargetType::AllDepartments => rsx! {
                    span { class: "target-chip", "All Departments" }
                },
                TargetType::Individual => rsx! {
                    span { class: "target-chip", "Individual" }
                },
                TargetType::Department => rsx! {
                    for dept in target.selected_departments().iter().copied() {
                        span { key: "{dept.code()}", class: "target-chip", "data-target": dept.code(),
                            "{dept.label()}"
                            button {
                                class: "target-chip-remove",
                                r#type: "button",
                                "aria-label": "Remove {dept.label()}",
                                onclick: move |_| form.write().remove_department(dept),
                                Icon::<LdX> { icon: LdX, width: 12, height: 12 }
                            }
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn EmployeeFieldsSection(form: Signal<NoticeForm>) -> Element {
    let Some(employee) = form.read().draft().employee().cloned() else {
        return rsx! {};
    };
    let error = move |field: &str| form.read().error(field).map(str::to_string);

    rsx! {
        div { class: "create-grid three",
            FormSelect {
                label: "Select Employee ID",
                required: true,
                placeholder: "Select employee designation",
                value: employee.employee_id.clone(),
                error: error(fields::EMPLOYEE_ID),
                onchange: move |evt: FormEvent| form.write().set_employee_id(evt.value()),
                for id in EMPLOYEE_ID_OPTIONS.iter() {
                    option { key: "{id}", value: *id, "{id}" }
                }
            }
            Input {
                label: "Employee Name",
                required: true,
                placeholder: "Enter employee full name",
                value: employee.employee_name.clone(),
                error: error(fields::EMPLOYEE_NAME),
                on_input: move |evt: FormEvent| form.write().set_employee_name(evt.value()),
            }
            Input {
                label: "Position",
                required: true,
                placeholder: "Enter employee position",
                value: employee.position.clone(),
                error: error(fields::POSITION),
                on_input: move |evt: FormEvent| form.write().set_position(evt.value()),
            }
        }
    }
}

/// Confirmation shown after a publish or a saved draft.
#[component]
fn SubmitSuccessDialog(form: Signal<NoticeForm>) -> Element {
    let outcome = form.read().outcome();
    let title = form.read().draft().notice_title.clone();

    let (view_label, view_route) = match outcome {
        Some(SubmitOutcome::Drafted) => ("View Drafts", Route::drafts()),
        _ => ("View Notice", Route::notices()),
    };

    rsx! {
        DialogRoot {
            open: outcome.is_some(),
            on_open_change: move |open: bool| {
                if !open {
                    form.write().dismiss_outcome();
                }
            },
            DialogContent {
                if let Some(outcome) = outcome {
                    DialogTitle { "{outcome.title()}" }
                    DialogDescription { "{outcome.message(&title)}" }
                }
                DialogActions {
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_| {
                            form.write().reset();
                            navigator().push(view_route.clone());
                        },
                        "{view_label}"
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| form.write().reset(),
                        "+ Create Another"
                    }
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| form.write().dismiss_outcome(),
                        "Close"
                    }
                }
            }
        }
    }
}
