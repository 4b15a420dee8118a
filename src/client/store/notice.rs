#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Info,
    Warning,
    Danger,
}

impl NoticeLevel {
    /// daisyUI alert class for the level
    pub fn alert_class(&self) -> &'static str {
        match self {
            NoticeLevel::Success => "alert-success",
            NoticeLevel::Info => "alert-info",
            NoticeLevel::Warning => "alert-warning",
            NoticeLevel::Danger => "alert-error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub level: NoticeLevel,
    pub message: String,
}

/// The transient notification surface.
///
/// Only the most recent notice is shown. Dismissal is keyed by notice ID so a timer started
/// for an older notice cannot hide a newer one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NoticeBoard {
    current: Option<Notice>,
    next_id: u64,
}

impl NoticeBoard {
    pub fn push(&mut self, level: NoticeLevel, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let notice = Notice {
            id: self.next_id,
            level,
            message: message.into(),
        };

        self.current = Some(notice);

        self.next_id
    }

    /// Hides the current notice if it is still `id`. Returns whether anything was hidden.
    pub fn dismiss(&mut self, id: u64) -> bool {
        match &self.current {
            Some(notice) if notice.id == id => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }
}
