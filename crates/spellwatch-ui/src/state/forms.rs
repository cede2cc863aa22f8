/// Username field of the login route.
#[derive(Clone, Debug, Default)]
pub struct LoginFormState {
    pub username: String,
    /// Inline error under the field; cleared on the next submit.
    pub error: Option<String>,
    pub submitting: bool,
}

impl LoginFormState {
    pub fn push(&mut self, c: char) {
        if !self.submitting {
            self.username.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if !self.submitting {
            self.username.pop();
        }
    }

    /// Mark the form as submitting and return the username to send.
    ///
    /// Returns `None` while a submission is already in flight.
    pub fn begin_submit(&mut self) -> Option<String> {
        if self.submitting {
            return None;
        }
        self.submitting = true;
        self.error = None;
        Some(self.username.clone())
    }

    pub fn finish_submit(&mut self, error: Option<String>) {
        self.submitting = false;
        self.error = error;
    }
}

/// Cast prompt on the dashboard route.
///
/// Only one prompt can be open at a time.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum CastPrompt {
    #[default]
    Closed,
    Open {
        spell: String,
    },
}

impl CastPrompt {
    pub fn is_open(&self) -> bool {
        matches!(self, CastPrompt::Open { .. })
    }

    pub fn open() -> Self {
        CastPrompt::Open {
            spell: String::new(),
        }
    }

    pub fn push(&mut self, c: char) {
        if let CastPrompt::Open { spell } = self {
            spell.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if let CastPrompt::Open { spell } = self {
            spell.pop();
        }
    }

    /// Close the prompt and return the trimmed spell name, if any.
    pub fn submit(&mut self) -> Option<String> {
        match std::mem::take(self) {
            CastPrompt::Open { spell } if !spell.trim().is_empty() => {
                Some(spell.trim().to_string())
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_form_blocks_double_submit() {
        let mut form = LoginFormState::default();
        form.push('a');
        assert_eq!(form.begin_submit().as_deref(), Some("a"));
        assert!(form.begin_submit().is_none());

        form.push('b');
        assert_eq!(form.username, "a");

        form.finish_submit(Some("User 'a' not found".to_string()));
        assert!(!form.submitting);
        assert_eq!(form.error.as_deref(), Some("User 'a' not found"));
    }

    #[test]
    fn test_begin_submit_clears_previous_error() {
        let mut form = LoginFormState {
            username: "alice".to_string(),
            error: Some("old".to_string()),
            submitting: false,
        };
        form.begin_submit();
        assert!(form.error.is_none());
    }

    #[test]
    fn test_cast_prompt_submit_trims_and_closes() {
        let mut prompt = CastPrompt::open();
        for c in "  Lumos ".chars() {
            prompt.push(c);
        }
        assert_eq!(prompt.submit().as_deref(), Some("Lumos"));
        assert_eq!(prompt, CastPrompt::Closed);
    }

    #[test]
    fn test_cast_prompt_blank_submit_closes_without_spell() {
        let mut prompt = CastPrompt::open();
        prompt.push(' ');
        assert!(prompt.submit().is_none());
        assert!(!prompt.is_open());
    }

    #[test]
    fn test_closed_prompt_ignores_input() {
        let mut prompt = CastPrompt::Closed;
        prompt.push('x');
        assert_eq!(prompt, CastPrompt::Closed);
    }
}
