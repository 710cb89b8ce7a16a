//! Lead-capture inquiry: draft state, validation, `mailto:` composition and
//! the modal that hosts the form.

use std::fmt;
use std::rc::Rc;

use log::debug;
use thiserror::Error;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config::INQUIRY_DESTINATION;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InquiryField {
    Name,
    Email,
    Query,
}

impl InquiryField {
    pub const ALL: [InquiryField; 3] = [InquiryField::Name, InquiryField::Email, InquiryField::Query];

    pub fn label(self) -> &'static str {
        match self {
            InquiryField::Name => "name",
            InquiryField::Email => "email",
            InquiryField::Query => "query",
        }
    }
}

impl fmt::Display for InquiryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InquiryError {
    #[error("the {0} field is required")]
    MissingField(InquiryField),
    #[error("the email address is not valid")]
    MalformedEmail,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InquiryDraft {
    pub name: String,
    pub email: String,
    pub query: String,
}

impl InquiryDraft {
    pub fn value(&self, field: InquiryField) -> &str {
        match field {
            InquiryField::Name => &self.name,
            InquiryField::Email => &self.email,
            InquiryField::Query => &self.query,
        }
    }

    pub fn set(&mut self, field: InquiryField, value: String) {
        match field {
            InquiryField::Name => self.name = value,
            InquiryField::Email => self.email = value,
            InquiryField::Query => self.query = value,
        }
    }

    /// Whitespace-only counts as empty.
    pub fn validate(&self) -> Result<(), InquiryError> {
        if let Some(field) = InquiryField::ALL
            .into_iter()
            .find(|field| self.value(*field).trim().is_empty())
        {
            return Err(InquiryError::MissingField(field));
        }
        if !is_email_shaped(&self.email) {
            return Err(InquiryError::MalformedEmail);
        }
        Ok(())
    }
}

/// Basic address shape: `local@domain`, one `@`, no whitespace, and the
/// domain does not start or end with a dot.
pub fn is_email_shaped(address: &str) -> bool {
    let address = address.trim();
    if address.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = address.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty() && !domain.is_empty() && !domain.starts_with('.') && !domain.ends_with('.')
        }
        _ => false,
    }
}

pub enum DraftAction {
    Edit(InquiryField, String),
    Reset,
}

impl Reducible for InquiryDraft {
    type Action = DraftAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            DraftAction::Edit(field, value) => {
                let mut next = (*self).clone();
                next.set(field, value);
                next.into()
            }
            DraftAction::Reset => Self::default().into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl OutboundMessage {
    pub fn compose(to: &str, draft: &InquiryDraft) -> Self {
        Self {
            to: to.to_string(),
            subject: format!("new signal from {}", draft.name.trim()),
            body: format!(
                "name: {}\nemail: {}\nquery: {}",
                draft.name.trim(),
                draft.email.trim(),
                draft.query.trim()
            ),
        }
    }

    pub fn mailto_uri(&self) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            self.to,
            urlencoding::encode(&self.subject),
            urlencoding::encode(&self.body)
        )
    }
}

/// A form submission delivered before the host performs its default action.
pub trait SubmissionEvent {
    fn suppress_default(&self);
}

impl SubmissionEvent for web_sys::SubmitEvent {
    fn suppress_default(&self) {
        self.prevent_default();
    }
}

/// Passes a composed message to whatever client the host uses for `mailto:`.
pub trait MessageHandoff {
    fn hand_off(&self, uri: &str);
}

pub struct MailtoHandoff;

impl MessageHandoff for MailtoHandoff {
    fn hand_off(&self, uri: &str) {
        // Delivery and any refusal are the host's business.
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(uri);
        }
    }
}

/// Suppresses the default submission, then validates and hands the message
/// off exactly once. Nothing is handed off when validation fails.
pub fn submit_inquiry<E, H>(
    event: &E,
    draft: &InquiryDraft,
    destination: &str,
    handoff: &H,
) -> Result<OutboundMessage, InquiryError>
where
    E: SubmissionEvent + ?Sized,
    H: MessageHandoff + ?Sized,
{
    event.suppress_default();
    draft.validate()?;
    let message = OutboundMessage::compose(destination, draft);
    handoff.hand_off(&message.mailto_uri());
    Ok(message)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    Open,
}

pub enum ModalAction {
    Initiate,
    Close,
}

impl ModalState {
    pub fn apply(self, action: ModalAction) -> Self {
        match action {
            ModalAction::Initiate => ModalState::Open,
            ModalAction::Close => ModalState::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        self == ModalState::Open
    }
}

impl Reducible for ModalState {
    type Action = ModalAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct InquiryModalProps {
    pub open: bool,
    pub on_close: Callback<()>,
}

/// The draft lives in the inner form, so closing the modal discards it.
#[function_component(InquiryModal)]
pub fn inquiry_modal(props: &InquiryModalProps) -> Html {
    if !props.open {
        return html! {};
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="modal-backdrop">
            <button class="modal-close" aria-label="close" onclick={close}>{"✕"}</button>
            <div class="modal-body">
                <h2 class="modal-title">{"initiate."}</h2>
                <InquiryForm />
            </div>
        </div>
    }
}

fn input_value(event: &InputEvent) -> Option<String> {
    event
        .target_dyn_into::<HtmlInputElement>()
        .map(|input| input.value())
        .or_else(|| event.target_dyn_into::<HtmlTextAreaElement>().map(|area| area.value()))
}

#[function_component(InquiryForm)]
fn inquiry_form() -> Html {
    let draft = use_reducer(InquiryDraft::default);

    let edit = |field: InquiryField| {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(value) = input_value(&e) {
                draft.dispatch(DraftAction::Edit(field, value));
            }
        })
    };

    let onsubmit = {
        let draft = draft.clone();
        Callback::from(move |e: SubmitEvent| {
            if let Ok(message) = submit_inquiry(&e, &*draft, INQUIRY_DESTINATION, &MailtoHandoff) {
                debug!("Handed off inquiry to {}", message.to);
                draft.dispatch(DraftAction::Reset);
            }
        })
    };

    html! {
        <form class="inquiry-form" onsubmit={onsubmit}>
            <div class="field">
                <label for="inquiry-name">{"your name"}</label>
                <input
                    id="inquiry-name"
                    type="text"
                    required=true
                    placeholder="enter name"
                    value={draft.name.clone()}
                    oninput={edit(InquiryField::Name)}
                />
            </div>
            <div class="field">
                <label for="inquiry-email">{"email address"}</label>
                <input
                    id="inquiry-email"
                    type="email"
                    required=true
                    placeholder="your@email.com"
                    value={draft.email.clone()}
                    oninput={edit(InquiryField::Email)}
                />
            </div>
            <div class="field">
                <label for="inquiry-query">{"your query"}</label>
                <textarea
                    id="inquiry-query"
                    rows="4"
                    required=true
                    placeholder="what do you need produced?"
                    value={draft.query.clone()}
                    oninput={edit(InquiryField::Query)}
                />
            </div>
            <button type="submit" class="signal-button">{"send the signal"}</button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::cell::{Cell, RefCell};

    #[derive(Default)]
    struct FakeSubmit {
        suppressed: Cell<u32>,
    }

    impl SubmissionEvent for FakeSubmit {
        fn suppress_default(&self) {
            self.suppressed.set(self.suppressed.get() + 1);
        }
    }

    #[derive(Default)]
    struct RecordingHandoff {
        uris: RefCell<Vec<String>>,
    }

    impl MessageHandoff for RecordingHandoff {
        fn hand_off(&self, uri: &str) {
            self.uris.borrow_mut().push(uri.to_string());
        }
    }

    fn asha() -> InquiryDraft {
        InquiryDraft {
            name: "Asha Rao".to_string(),
            email: "asha@example.com".to_string(),
            query: "Need a quote for daily video output.".to_string(),
        }
    }

    fn decode_param(uri: &str, key: &str) -> String {
        let query = uri.split_once('?').map(|(_, q)| q).unwrap_or("");
        let raw = query
            .split('&')
            .find_map(|pair| pair.strip_prefix(&format!("{}=", key)))
            .unwrap_or("");
        urlencoding::decode(raw).unwrap().into_owned()
    }

    #[test]
    fn test_keystrokes_last_write_wins() {
        let mut draft = Rc::new(InquiryDraft::default());
        for typed in ["A", "As", "Ash", "Asha", "Asha R", "Asha Rao"] {
            draft = draft.reduce(DraftAction::Edit(InquiryField::Name, typed.to_string()));
        }
        draft = draft.reduce(DraftAction::Edit(InquiryField::Email, "asha@".to_string()));
        draft = draft.reduce(DraftAction::Edit(InquiryField::Email, "asha@example.com".to_string()));

        assert_eq!(draft.name, "Asha Rao");
        assert_eq!(draft.email, "asha@example.com");
        assert_eq!(draft.query, "");
    }

    #[test]
    fn test_reset_discards_draft() {
        let draft = Rc::new(asha()).reduce(DraftAction::Reset);
        assert_eq!(*draft, InquiryDraft::default());
    }

    #[rstest]
    #[case(InquiryField::Name)]
    #[case(InquiryField::Email)]
    #[case(InquiryField::Query)]
    fn test_empty_field_blocks_handoff(#[case] field: InquiryField) {
        let mut draft = asha();
        draft.set(field, String::new());
        let event = FakeSubmit::default();
        let handoff = RecordingHandoff::default();

        let result = submit_inquiry(&event, &draft, INQUIRY_DESTINATION, &handoff);

        assert_eq!(result, Err(InquiryError::MissingField(field)));
        assert!(handoff.uris.borrow().is_empty());
        assert_eq!(event.suppressed.get(), 1);
    }

    #[test]
    fn test_whitespace_only_is_empty() {
        let mut draft = asha();
        draft.query = "   \n ".to_string();
        assert_eq!(draft.validate(), Err(InquiryError::MissingField(InquiryField::Query)));
    }

    #[test]
    fn test_malformed_email_blocks_handoff() {
        let mut draft = asha();
        draft.email = "asha.example.com".to_string();
        let handoff = RecordingHandoff::default();

        let result = submit_inquiry(&FakeSubmit::default(), &draft, INQUIRY_DESTINATION, &handoff);

        assert_eq!(result, Err(InquiryError::MalformedEmail));
        assert!(handoff.uris.borrow().is_empty());
    }

    #[rstest]
    #[case("asha@example.com", true)]
    #[case("a@b", true)]
    #[case("  asha@example.com  ", true)]
    #[case("asha", false)]
    #[case("@example.com", false)]
    #[case("asha@", false)]
    #[case("asha@@example.com", false)]
    #[case("asha@ex@ample.com", false)]
    #[case("asha rao@example.com", false)]
    #[case("asha@.example.com", false)]
    #[case("asha@example.com.", false)]
    fn test_email_shape(#[case] address: &str, #[case] expected: bool) {
        assert_eq!(is_email_shaped(address), expected);
    }

    #[test]
    fn test_valid_submission_hands_off_once() {
        let event = FakeSubmit::default();
        let handoff = RecordingHandoff::default();

        let message = submit_inquiry(&event, &asha(), INQUIRY_DESTINATION, &handoff).unwrap();

        let uris = handoff.uris.borrow();
        assert_eq!(uris.len(), 1);
        assert_eq!(event.suppressed.get(), 1);

        let uri = &uris[0];
        assert!(uri.starts_with(&format!("mailto:{}?", INQUIRY_DESTINATION)));
        assert_eq!(uri, &message.mailto_uri());

        let subject = decode_param(uri, "subject");
        assert!(subject.contains("Asha Rao"));

        let body = decode_param(uri, "body");
        assert_eq!(
            body,
            "name: Asha Rao\nemail: asha@example.com\nquery: Need a quote for daily video output."
        );
    }

    #[test]
    fn test_payload_is_safely_encoded() {
        let draft = InquiryDraft {
            name: "Rao & Sons".to_string(),
            email: "ops@rao.example".to_string(),
            query: "line one\nline two a=b&c=d?".to_string(),
        };
        let uri = OutboundMessage::compose(INQUIRY_DESTINATION, &draft).mailto_uri();
        let params = uri.split_once('?').map(|(_, q)| q).unwrap();

        assert!(!uri.contains('\n'));
        assert!(!uri.contains(' '));
        assert_eq!(params.matches('&').count(), 1);
        assert_eq!(params.matches('=').count(), 2);
        assert_eq!(decode_param(&uri, "body"), "name: Rao & Sons\nemail: ops@rao.example\nquery: line one\nline two a=b&c=d?");
    }

    #[test]
    fn test_body_keeps_field_order() {
        let message = OutboundMessage::compose(INQUIRY_DESTINATION, &asha());
        let name_at = message.body.find("Asha Rao").unwrap();
        let email_at = message.body.find("asha@example.com").unwrap();
        let query_at = message.body.find("Need a quote").unwrap();
        assert!(name_at < email_at && email_at < query_at);
    }

    #[test]
    fn test_modal_transitions() {
        let closed = Rc::new(ModalState::default());
        assert_eq!(*closed, ModalState::Closed);

        let open = closed.clone().reduce(ModalAction::Initiate);
        assert!(open.is_open());

        let reopened = open.clone().reduce(ModalAction::Initiate);
        assert!(Rc::ptr_eq(&open, &reopened));

        let closed_again = open.reduce(ModalAction::Close);
        assert_eq!(*closed_again, ModalState::Closed);

        let still_closed = closed_again.clone().reduce(ModalAction::Close);
        assert!(Rc::ptr_eq(&closed_again, &still_closed));
    }
}
