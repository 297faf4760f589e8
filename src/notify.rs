//! Non-blocking user notifications.

use gloo_timers::callback::Timeout;
use web_sys::Document;

use crate::consts::TOAST_DISMISS_MS;

/// Delivers short confirmation messages to the visitor without blocking
/// the event loop the way `alert()` would.
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// Shows messages as transient `.toast` elements appended to `<body>`.
pub struct ToastNotifier {
    document: Document,
}

impl ToastNotifier {
    #[must_use]
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, message: &str) {
        let Ok(toast) = self.document.create_element("div") else {
            return;
        };
        let _ = toast.class_list().add_1("toast");
        toast.set_text_content(Some(message));

        let Some(body) = self.document.body() else {
            return;
        };
        let _ = body.append_child(&toast);

        Timeout::new(TOAST_DISMISS_MS, move || {
            toast.remove();
        })
        .forget();
    }
}
