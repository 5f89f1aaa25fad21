//! Contact Form - four required fields and a simulated send.

use dioxus::prelude::*;
use homepage_core::{ContactField, ContactForm, Notification, NotificationLevel};
use rfd::{AsyncMessageDialog, MessageButtons, MessageLevel};

use crate::context::use_page;

/// Show a blocking notification as a native dialog
async fn show_notification(notification: Notification) {
    let (level, title) = match notification.level {
        NotificationLevel::Warning => (MessageLevel::Warning, "Incomplete message"),
        NotificationLevel::Info => (MessageLevel::Info, "Message sent"),
    };

    AsyncMessageDialog::new()
        .set_level(level)
        .set_title(title)
        .set_description(notification.text)
        .set_buttons(MessageButtons::Ok)
        .show()
        .await;
}

/// Contact section. Renders nothing when the page has no form.
#[component]
pub fn ContactSection() -> Element {
    let mut page = use_page();
    let contact = use_memo(move || page.read().contact.clone());

    let Some(form): Option<ContactForm> = contact() else {
        return rsx! {};
    };

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(notification) = page.write().submit_contact() else {
            return;
        };
        spawn(async move {
            show_notification(notification).await;
        });
    };

    // Writes go straight to the view-state so a reset clears the inputs
    let mut set_field = move |field: ContactField, value: String| {
        if let Some(form) = page.write().contact.as_mut() {
            form.set(field, value);
        }
    };

    rsx! {
        section { class: "contact-section",
            h2 { class: "section-header", "Get in Touch" }
            form { id: "contactForm", class: "contact-form", onsubmit: on_submit,
                input {
                    id: "name",
                    r#type: "text",
                    placeholder: "Your name",
                    value: "{form.name}",
                    oninput: move |e| set_field(ContactField::Name, e.value()),
                }
                input {
                    id: "email",
                    r#type: "email",
                    placeholder: "Your email",
                    value: "{form.email}",
                    oninput: move |e| set_field(ContactField::Email, e.value()),
                }
                input {
                    id: "subject",
                    r#type: "text",
                    placeholder: "Subject",
                    value: "{form.subject}",
                    oninput: move |e| set_field(ContactField::Subject, e.value()),
                }
                textarea {
                    id: "message",
                    placeholder: "Your message",
                    rows: "5",
                    value: "{form.message}",
                    oninput: move |e| set_field(ContactField::Message, e.value()),
                }
                button { r#type: "submit", class: "btn-primary", "Send Message" }
            }
        }
    }
}
