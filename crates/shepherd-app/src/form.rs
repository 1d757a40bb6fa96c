//! Registration form state
//!
//! Holds the inputs of one registration request and the busy flag that
//! guards against duplicate submissions. All of it is owned by
//! [`AppState`](crate::state::AppState) and mutated only by the update
//! handler.

use std::path::PathBuf;

use shepherd_client::{AddRequest, UploadRequest};
use shepherd_core::{ToolType, PATH2_PLACEHOLDER};

/// Focusable inputs, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Tool,
    Name,
    Path1,
    /// Only reachable while the selected tool compares two files
    Path2,
    /// Local file to upload; its stored path becomes `path1`
    Upload,
}

impl FormField {
    pub fn label(&self) -> &'static str {
        match self {
            FormField::Tool => "Tool",
            FormField::Name => "Project",
            FormField::Path1 => "Path",
            FormField::Path2 => "Base path",
            FormField::Upload => "Upload file",
        }
    }

    pub fn is_text(&self) -> bool {
        !matches!(self, FormField::Tool)
    }
}

/// Inputs and submission state of the registration form
#[derive(Debug, Clone)]
pub struct FormState {
    tool: ToolType,
    pub name: String,
    pub path1: String,
    /// Holds [`PATH2_PLACEHOLDER`] while hidden
    path2: String,
    pub upload_file: String,
    pub focus: FormField,
    /// Set strictly between the start and the end of one submit cycle
    busy: bool,
    uploading: bool,
    /// Inline validation message
    pub error: Option<String>,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new(ToolType::default())
    }
}

impl FormState {
    pub fn new(tool: ToolType) -> Self {
        let mut form = Self {
            tool,
            name: String::new(),
            path1: String::new(),
            path2: String::new(),
            upload_file: String::new(),
            focus: FormField::Tool,
            busy: false,
            uploading: false,
            error: None,
        };
        form.on_tool_type_change(tool);
        form
    }

    pub fn tool(&self) -> ToolType {
        self.tool
    }

    /// Raw secondary path value, placeholder included
    pub fn path2(&self) -> &str {
        &self.path2
    }

    pub fn path2_visible(&self) -> bool {
        self.tool.requires_secondary_path()
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn is_uploading(&self) -> bool {
        self.uploading
    }

    /// Switch tool and show or hide the secondary path.
    ///
    /// Showing it clears the placeholder; hiding it stores the placeholder.
    /// Applying the same tool twice leaves the form unchanged.
    pub fn on_tool_type_change(&mut self, tool: ToolType) {
        self.tool = tool;
        if tool.requires_secondary_path() {
            if self.path2 == PATH2_PLACEHOLDER {
                self.path2.clear();
            }
        } else {
            self.path2 = PATH2_PLACEHOLDER.to_string();
            if self.focus == FormField::Path2 {
                self.focus = FormField::Path1;
            }
        }
    }

    /// Fields currently reachable with Tab
    pub fn visible_fields(&self) -> Vec<FormField> {
        let mut fields = vec![FormField::Tool, FormField::Name, FormField::Path1];
        if self.path2_visible() {
            fields.push(FormField::Path2);
        }
        fields.push(FormField::Upload);
        fields
    }

    /// Move focus forward; returns false when it wrapped past the last field
    pub fn focus_next(&mut self) -> bool {
        let fields = self.visible_fields();
        let idx = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        if idx + 1 < fields.len() {
            self.focus = fields[idx + 1];
            true
        } else {
            self.focus = fields[0];
            false
        }
    }

    /// Move focus backward; returns false when it wrapped past the first field
    pub fn focus_prev(&mut self) -> bool {
        let fields = self.visible_fields();
        let idx = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        if idx > 0 {
            self.focus = fields[idx - 1];
            true
        } else {
            self.focus = fields[fields.len() - 1];
            false
        }
    }

    /// The text buffer behind the focused field, if it is editable
    fn focused_buffer(&mut self) -> Option<&mut String> {
        match self.focus {
            FormField::Tool => None,
            FormField::Name => Some(&mut self.name),
            FormField::Path1 => Some(&mut self.path1),
            FormField::Path2 => Some(&mut self.path2),
            FormField::Upload => Some(&mut self.upload_file),
        }
    }

    pub fn input_char(&mut self, c: char) {
        if let Some(buf) = self.focused_buffer() {
            buf.push(c);
        }
        self.error = None;
    }

    pub fn backspace(&mut self) {
        if let Some(buf) = self.focused_buffer() {
            buf.pop();
        }
    }

    pub fn clear_field(&mut self) {
        if let Some(buf) = self.focused_buffer() {
            buf.clear();
        }
    }

    /// Check required fields and build the request they describe.
    ///
    /// Name and path are always required; the base path only for the compare tool.
    pub fn validate(&self) -> Result<AddRequest, String> {
        if self.name.trim().is_empty() {
            return Err("Project name is required".to_string());
        }
        if self.path1.trim().is_empty() {
            return Err("Path is required".to_string());
        }
        if self.path2_visible() && self.path2.trim().is_empty() {
            return Err("Base path is required for comparison".to_string());
        }
        Ok(AddRequest::new(
            self.tool,
            self.name.trim(),
            self.path1.trim(),
            self.path2.trim(),
        ))
    }

    /// Start a submit cycle.
    ///
    /// Returns `None` without side effects while a submission is in flight.
    /// On a validation failure the inline error is set and the form stays idle.
    pub fn begin_submit(&mut self) -> Option<AddRequest> {
        if self.busy {
            return None;
        }
        match self.validate() {
            Ok(request) => {
                self.busy = true;
                self.error = None;
                Some(request)
            }
            Err(message) => {
                self.error = Some(message);
                None
            }
        }
    }

    /// End the submit cycle; called on every outcome
    pub fn finish_submit(&mut self) {
        self.busy = false;
    }

    /// Start an upload of the chosen file
    pub fn begin_upload(&mut self) -> Option<UploadRequest> {
        if self.uploading || self.busy {
            return None;
        }
        let file = self.upload_file.trim().to_string();
        if file.is_empty() {
            self.error = Some("Choose a file to upload".to_string());
            return None;
        }
        self.uploading = true;
        self.error = None;
        Some(UploadRequest {
            file: PathBuf::from(file),
            project_name: self.name.trim().to_string(),
        })
    }

    pub fn finish_upload(&mut self) {
        self.uploading = false;
    }

    /// Place the path the service stored an upload at into the primary path
    pub fn set_uploaded_path(&mut self, path: impl Into<String>) {
        self.path1 = path.into();
        self.uploading = false;
    }

    /// Whether the inputs still describe `request`
    pub fn holds(&self, request: &AddRequest) -> bool {
        self.validate().is_ok_and(|current| current == *request)
    }

    /// Clear inputs after a successful registration, keeping the tool
    pub fn reset_inputs(&mut self) {
        self.name.clear();
        self.path1.clear();
        self.upload_file.clear();
        let tool = self.tool;
        self.path2.clear();
        self.on_tool_type_change(tool);
    }
}
