use tracing::{error, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Warning,
    Error,
}

impl Severity {
    pub fn prefix(&self) -> &'static str {
        match self {
            Severity::Success => "Generate React Component Success: ",
            Severity::Warning => "Generate React Component Warning: ",
            Severity::Error => "Generate React Component Failed: ",
        }
    }

    pub fn format(&self, message: &str) -> String {
        format!("{}{message}", self.prefix())
    }
}

/// Presents messages to the user.
pub trait Notifier: Send + Sync {
    fn notify(&self, severity: Severity, message: &str);
}

/// Logs the message and prints it to the terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, severity: Severity, message: &str) {
        let line = severity.format(message);

        match severity {
            Severity::Success => {
                info!("{message}");
                println!("🚀 {line}");
            }
            Severity::Warning => {
                warn!("{message}");
                println!("🤔 {line}");
            }
            Severity::Error => {
                error!("{message}");
                eprintln!("😢 {line}");
            }
        }
    }
}
