use std::fmt;

/// GitHub Actions workflow commands understood when printed at the start of a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Annotation {
    Error,
    Warning,
    Notice,
    Debug,
    Group,
    EndGroup,
}

impl Annotation {
    fn command(&self) -> &'static str {
        match self {
            Annotation::Error => "error",
            Annotation::Warning => "warning",
            Annotation::Notice => "notice",
            Annotation::Debug => "debug",
            Annotation::Group => "group",
            Annotation::EndGroup => "endgroup",
        }
    }

    pub fn line(&self, message: impl fmt::Display) -> String {
        format!("::{}::{}", self.command(), message)
    }
}

pub fn error(message: impl fmt::Display) -> String {
    Annotation::Error.line(message)
}

pub fn warning(message: impl fmt::Display) -> String {
    Annotation::Warning.line(message)
}

pub fn notice(message: impl fmt::Display) -> String {
    Annotation::Notice.line(message)
}

pub fn debug(message: impl fmt::Display) -> String {
    Annotation::Debug.line(message)
}

pub fn group(title: impl fmt::Display) -> String {
    Annotation::Group.line(title)
}

pub fn end_group() -> String {
    Annotation::EndGroup.line("")
}
