//! Create-test form state

use labtrack_core::TestDraft;

use crate::request::RequestId;

/// Focusable element of the create form, in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CreateField {
    #[default]
    PatientName,
    DoctorName,
    TestType,
    Status,
    Result,
    Submit,
    Cancel,
}

impl CreateField {
    pub const ALL: [CreateField; 7] = [
        CreateField::PatientName,
        CreateField::DoctorName,
        CreateField::TestType,
        CreateField::Status,
        CreateField::Result,
        CreateField::Submit,
        CreateField::Cancel,
    ];

    pub fn next(self) -> Self {
        let idx = self.index();
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let idx = self.index();
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn label(self) -> &'static str {
        match self {
            CreateField::PatientName => "Patient Name",
            CreateField::DoctorName => "Doctor Name",
            CreateField::TestType => "Test Type",
            CreateField::Status => "Status",
            CreateField::Result => "Result",
            CreateField::Submit => "Create Test",
            CreateField::Cancel => "Cancel",
        }
    }

    pub fn is_text(self) -> bool {
        matches!(
            self,
            CreateField::PatientName | CreateField::DoctorName | CreateField::Result
        )
    }

    pub fn is_select(self) -> bool {
        matches!(self, CreateField::TestType | CreateField::Status)
    }
}

/// State owned by the create form while it is shown
#[derive(Debug, Clone, Default)]
pub struct CreateFormState {
    pub draft: TestDraft,
    pub focus: CreateField,
    pub error: Option<String>,
    /// Outstanding `POST /tests`, if any
    pub pending: Option<RequestId>,
}

impl CreateFormState {
    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// The focused text field's value, `None` when a select or button has focus
    pub fn focused_text_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            CreateField::PatientName => Some(&mut self.draft.patient_name),
            CreateField::DoctorName => Some(&mut self.draft.doctor_name),
            CreateField::Result => Some(&mut self.draft.result),
            _ => None,
        }
    }

    /// Cycle the focused select; no-op elsewhere
    pub fn cycle_focused(&mut self, forward: bool) {
        match self.focus {
            CreateField::TestType => {
                self.draft.test_type = if forward {
                    self.draft.test_type.next()
                } else {
                    self.draft.test_type.prev()
                };
            }
            CreateField::Status => {
                self.draft.status = if forward {
                    self.draft.status.next()
                } else {
                    self.draft.status.prev()
                };
            }
            _ => {}
        }
    }

    /// First required field left empty
    pub fn missing_field(&self) -> Option<CreateField> {
        match self.draft.missing_required()? {
            "Patient Name" => Some(CreateField::PatientName),
            _ => Some(CreateField::DoctorName),
        }
    }

    /// Back to an empty draft with focus on the first field
    pub fn reset(&mut self) {
        self.draft = TestDraft::default();
        self.focus = CreateField::PatientName;
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use labtrack_core::{TestStatus, TestType};

    #[test]
    fn test_focus_order_wraps() {
        assert_eq!(CreateField::PatientName.prev(), CreateField::Cancel);
        assert_eq!(CreateField::Cancel.next(), CreateField::PatientName);
        assert_eq!(CreateField::Result.next(), CreateField::Submit);
    }

    #[test]
    fn test_selects_cycle_fixed_options() {
        let mut form = CreateFormState {
            focus: CreateField::TestType,
            ..Default::default()
        };
        form.cycle_focused(true);
        assert_eq!(form.draft.test_type, TestType::Urine);
        form.cycle_focused(false);
        form.cycle_focused(false);
        assert_eq!(form.draft.test_type, TestType::Mri);

        form.focus = CreateField::Status;
        form.cycle_focused(true);
        assert_eq!(form.draft.status, TestStatus::InProgress);
    }

    #[test]
    fn test_text_input_only_on_text_fields() {
        let mut form = CreateFormState::default();
        assert!(form.focused_text_mut().is_some());
        form.focus = CreateField::Status;
        assert!(form.focused_text_mut().is_none());
        form.focus = CreateField::Submit;
        assert!(form.focused_text_mut().is_none());
    }

    #[test]
    fn test_missing_field_maps_to_focus_target() {
        let mut form = CreateFormState::default();
        assert_eq!(form.missing_field(), Some(CreateField::PatientName));
        form.draft.patient_name = "Jane".into();
        assert_eq!(form.missing_field(), Some(CreateField::DoctorName));
        form.draft.doctor_name = "Dr. A".into();
        assert_eq!(form.missing_field(), None);
    }
}
