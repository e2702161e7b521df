use crate::{ControlState, Notice, NoticeLevel, Presenter, StatusColor};

/// Presenter that records every call for assertions.
#[derive(Debug, Default)]
pub(crate) struct RecordingPresenter {
    pub(crate) statuses: Vec<(String, StatusColor)>,
    pub(crate) script: Option<String>,
    pub(crate) controls: Option<ControlState>,
    pub(crate) notices: Vec<Notice>,
}

impl RecordingPresenter {
    pub(crate) fn last_status(&self) -> Option<&str> {
        self.statuses.last().map(|(text, _)| text.as_str())
    }

    pub(crate) fn last_color(&self) -> Option<StatusColor> {
        self.statuses.last().map(|(_, color)| *color)
    }

    pub(crate) fn errors(&self) -> Vec<&Notice> {
        self.notices
            .iter()
            .filter(|n| n.level == NoticeLevel::Error)
            .collect()
    }
}

impl Presenter for RecordingPresenter {
    fn set_status(&mut self, text: &str, color: StatusColor) {
        self.statuses.push((text.to_string(), color));
    }

    fn show_script(&mut self, script: Option<&str>) {
        self.script = script.map(str::to_string);
    }

    fn set_controls(&mut self, controls: ControlState) {
        self.controls = Some(controls);
    }

    fn notify(&mut self, notice: Notice) {
        self.notices.push(notice);
    }
}
