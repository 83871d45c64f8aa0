use dialoguer::Confirm;
use steamfastlogin_core::ports::UserInteraction;
use tracing::warn;

/// Terminal rendering of the message boxes and yes/no prompts.
pub struct TerminalInteraction {
    assume_yes: bool,
}

impl TerminalInteraction {
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

impl UserInteraction for TerminalInteraction {
    fn show_information(&self, _title: &str, message: &str) {
        println!("{}", message);
    }

    fn show_warning(&self, title: &str, message: &str) {
        eprintln!("{}: {}", title, message);
    }

    fn show_error(&self, title: &str, message: &str) {
        eprintln!("{}: {}", title, message);
    }

    fn ask_question(&self, title: &str, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }

        match Confirm::new()
            .with_prompt(format!("{}: {}", title, message))
            .default(false)
            .interact()
        {
            Ok(answer) => answer,
            Err(e) => {
                // No terminal to ask on; treat as "no"
                warn!(error = %e, "confirmation prompt failed");
                false
            }
        }
    }
}
