use std::sync::Arc;

/// Page-level effects the widget cannot render itself.
pub trait Dialogs: Send + Sync {
    fn alert(&self, message: &str);

    fn confirm(&self, message: &str) -> bool;

    /// Invoked on logout, before the widget resets its own state.
    fn reload(&self);
}

impl<T: Dialogs + ?Sized> Dialogs for Arc<T> {
    fn alert(&self, message: &str) {
        (**self).alert(message)
    }

    fn confirm(&self, message: &str) -> bool {
        (**self).confirm(message)
    }

    fn reload(&self) {
        (**self).reload()
    }
}
