use crate::api::ApiError;

/// Where a view stands relative to one kind of network operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

/// Lifecycle of a single, re-enterable async operation.
///
/// `idle -> loading -> success | error`, and either terminal state can go
/// back to `loading` when the user retries. The last successful value is
/// kept while a retry is in flight so views can keep showing it.
#[derive(Debug, Clone, PartialEq)]
pub struct AsyncOp<T> {
    status: Status,
    value: Option<T>,
    error: Option<String>,
}

impl<T> Default for AsyncOp<T> {
    fn default() -> Self {
        Self {
            status: Status::Idle,
            value: None,
            error: None,
        }
    }
}

impl<T> AsyncOp<T> {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn start(&mut self) {
        self.status = Status::Loading;
        self.error = None;
    }

    pub fn succeed(&mut self, value: T) {
        self.status = Status::Success;
        self.value = Some(value);
        self.error = None;
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.status = Status::Error;
        self.error = Some(message.into());
    }

    pub fn settle(&mut self, result: Result<T, ApiError>) {
        match result {
            Ok(value) => self.succeed(value),
            Err(err) => self.fail(err.to_string()),
        }
    }

    /// Back to `idle`, dropping value and error.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_idle(&self) -> bool {
        self.status == Status::Idle
    }

    pub fn is_loading(&self) -> bool {
        self.status == Status::Loading
    }

    pub fn is_success(&self) -> bool {
        self.status == Status::Success
    }

    pub fn is_error(&self) -> bool {
        self.status == Status::Error
    }

    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn value_mut(&mut self) -> Option<&mut T> {
        self.value.as_mut()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_the_full_lifecycle() {
        let mut op: AsyncOp<u32> = AsyncOp::idle();
        assert!(op.is_idle());

        op.start();
        assert!(op.is_loading());

        op.fail("Network error");
        assert!(op.is_error());
        assert_eq!(op.error(), Some("Network error"));

        op.start();
        assert!(op.is_loading());
        assert_eq!(op.error(), None);

        op.succeed(3);
        assert_eq!(op.status(), Status::Success);
        assert_eq!(op.value(), Some(&3));
    }

    #[test]
    fn keeps_previous_value_while_reloading() {
        let mut op = AsyncOp::idle();
        op.succeed("first");
        op.start();
        assert_eq!(op.value(), Some(&"first"));
        op.reset();
        assert_eq!(op.value(), None);
        assert!(op.is_idle());
    }

    #[test]
    fn settle_uses_error_message() {
        let mut op: AsyncOp<()> = AsyncOp::idle();
        op.settle(Err(ApiError::Http {
            status: 400,
            message: "A form with this name already exists.".to_string(),
        }));
        assert_eq!(op.error(), Some("A form with this name already exists."));
    }
}
