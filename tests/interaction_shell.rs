#![allow(clippy::unwrap_used)]
//! Behaviour of the interaction shell against scripted translators and
//! platform capabilities.

use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Notify;

use quick_translator::shell::{
    ActionOutcome, Capabilities, Capability, CapabilityError, Clipboard, InteractionShell,
    ListenOutcome, Notice, Notifier, RECOGNITION_LOCALE, SHARE_TITLE, ShareTarget, ShellState,
    SpeechRecognizer, SubmitOutcome,
};
use quick_translator::translation::{
    Language, TranslateError, TranslationRequest, Translator, build_prompt,
};

#[derive(Clone, Copy)]
enum Reply {
    Text(&'static str),
    Transport,
    Auth,
    Empty,
}

struct FakeTranslator {
    reply: Reply,
    gate: Option<Arc<Notify>>,
    calls: Mutex<Vec<TranslationRequest>>,
}

impl FakeTranslator {
    fn new(reply: Reply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            gate: None,
            calls: Mutex::new(Vec::new()),
        })
    }

    fn gated(reply: Reply, gate: Arc<Notify>) -> Arc<Self> {
        Arc::new(Self {
            reply,
            gate: Some(gate),
            calls: Mutex::new(Vec::new()),
        })
    }

    fn calls(&self) -> Vec<TranslationRequest> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl Translator for FakeTranslator {
    async fn translate(&self, request: &TranslationRequest) -> Result<String, TranslateError> {
        self.calls.lock().push(request.clone());
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        match self.reply {
            Reply::Text(text) => Ok(text.to_string()),
            Reply::Transport => Err(TranslateError::Transport("connection refused".into())),
            Reply::Auth => Err(TranslateError::Auth("bad key".into())),
            Reply::Empty => Err(TranslateError::EmptyResponse),
        }
    }
}

#[derive(Default)]
struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    fn notices(&self) -> Vec<Notice> {
        self.notices.lock().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: &Notice) {
        self.notices.lock().push(notice.clone());
    }
}

struct FakeSpeech {
    result: Result<Option<String>, CapabilityError>,
    locales: Mutex<Vec<String>>,
}

#[async_trait]
impl SpeechRecognizer for FakeSpeech {
    async fn recognize_once(&self, locale: &str) -> Result<Option<String>, CapabilityError> {
        self.locales.lock().push(locale.to_string());
        self.result.clone()
    }
}

#[derive(Default)]
struct FakeClipboard {
    contents: Mutex<Option<String>>,
}

impl Clipboard for FakeClipboard {
    fn write_text(&self, text: &str) -> Result<(), CapabilityError> {
        *self.contents.lock() = Some(text.to_string());
        Ok(())
    }
}

struct FakeShare {
    result: Result<(), CapabilityError>,
    shared: Mutex<Vec<(String, String)>>,
}

impl ShareTarget for FakeShare {
    fn share(&self, title: &str, text: &str) -> Result<(), CapabilityError> {
        self.shared
            .lock()
            .push((title.to_string(), text.to_string()));
        self.result.clone()
    }
}

fn shell_with(
    translator: Arc<FakeTranslator>,
) -> (InteractionShell, Arc<RecordingNotifier>) {
    let notifier = Arc::new(RecordingNotifier::default());
    let shell = InteractionShell::new(translator, notifier.clone());
    (shell, notifier)
}

// submit

#[tokio::test]
async fn test_hello_to_spanish_scenario() {
    let translator = FakeTranslator::new(Reply::Text("Hola"));
    let (shell, notifier) = shell_with(translator.clone());
    shell.set_target(Language::Spanish).unwrap();
    shell.set_input("Hello");

    let outcome = shell.submit().await;

    assert!(matches!(outcome, SubmitOutcome::Translated(ref t) if t == "Hola"));
    assert_eq!(shell.output_text(), "Hola");
    assert!(!shell.is_loading());
    assert!(notifier.notices().is_empty());

    let calls = translator.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(
        calls[0].prompt(),
        "Translate the following text from Auto-detect to Spanish. \
         Return ONLY the translated text without explanation: Hello"
    );
}

#[tokio::test]
async fn test_empty_or_whitespace_input_sends_nothing() {
    let translator = FakeTranslator::new(Reply::Text("unused"));
    let (shell, notifier) = shell_with(translator.clone());

    for input in ["", "   ", "\n\t "] {
        shell.set_input(input);
        let before = shell.snapshot();

        let outcome = shell.submit().await;

        assert!(matches!(outcome, SubmitOutcome::SkippedEmptyInput));
        assert_eq!(shell.snapshot(), before);
    }
    assert!(translator.calls().is_empty());
    assert!(notifier.notices().is_empty());
}

#[tokio::test]
async fn test_second_submit_while_in_flight_is_ignored() {
    let gate = Arc::new(Notify::new());
    let translator = FakeTranslator::gated(Reply::Text("Bonjour"), gate.clone());
    let (shell, _notifier) = shell_with(translator.clone());
    shell.set_input("Hello");

    let (first, second) = tokio::join!(shell.submit(), async {
        while !shell.is_loading() {
            tokio::task::yield_now().await;
        }
        let outcome = shell.submit().await;
        gate.notify_one();
        outcome
    });

    assert!(matches!(second, SubmitOutcome::Busy));
    assert!(matches!(first, SubmitOutcome::Translated(ref t) if t == "Bonjour"));
    assert_eq!(translator.calls().len(), 1);
    assert!(!shell.is_loading());
}

#[tokio::test]
async fn test_submit_allowed_again_after_completion() {
    let translator = FakeTranslator::new(Reply::Text("Hallo"));
    let (shell, _notifier) = shell_with(translator.clone());
    shell.set_input("Hello");

    shell.submit().await;
    shell.submit().await;

    assert_eq!(translator.calls().len(), 2);
}

#[tokio::test]
async fn test_transport_failure_keeps_previous_output() {
    let translator = FakeTranslator::new(Reply::Transport);
    let notifier = Arc::new(RecordingNotifier::default());
    let mut state = ShellState::default();
    state.output_text = "previous".to_string();
    state.input_text = "Hello".to_string();
    let shell = InteractionShell::new(translator, notifier.clone()).with_state(state);

    let outcome = shell.submit().await;

    assert!(matches!(
        outcome,
        SubmitOutcome::Failed(TranslateError::Transport(_))
    ));
    assert_eq!(shell.output_text(), "previous");
    assert!(!shell.is_loading());
    assert_eq!(notifier.notices(), vec![Notice::TranslationFailed]);
}

#[tokio::test]
async fn test_empty_response_clears_loading() {
    let translator = FakeTranslator::new(Reply::Empty);
    let (shell, notifier) = shell_with(translator);
    shell.set_input("Hello");

    let outcome = shell.submit().await;

    assert!(matches!(
        outcome,
        SubmitOutcome::Failed(TranslateError::EmptyResponse)
    ));
    assert!(!shell.is_loading());
    assert_eq!(notifier.notices(), vec![Notice::TranslationFailed]);
}

#[tokio::test]
async fn test_auth_failure_uses_the_same_generic_notice() {
    let translator = FakeTranslator::new(Reply::Auth);
    let (shell, notifier) = shell_with(translator);
    shell.set_input("Hello");

    let outcome = shell.submit().await;

    assert!(matches!(outcome, SubmitOutcome::Failed(TranslateError::Auth(_))));
    assert_eq!(notifier.notices(), vec![Notice::TranslationFailed]);
}

#[tokio::test]
async fn test_cancelled_submit_clears_loading() {
    let gate = Arc::new(Notify::new());
    let translator = FakeTranslator::gated(Reply::Text("never"), gate);
    let (shell, _notifier) = shell_with(translator);
    shell.set_input("Hello");

    let result = tokio::time::timeout(Duration::from_millis(20), shell.submit()).await;

    assert!(result.is_err());
    assert!(!shell.is_loading());
    assert!(shell.output_text().is_empty());
}

#[tokio::test]
async fn test_input_is_sent_untrimmed_with_selected_languages() {
    let translator = FakeTranslator::new(Reply::Text("ok"));
    let (shell, _notifier) = shell_with(translator.clone());
    shell.set_source(Language::Hindi);
    shell.set_target(Language::ChineseTraditional).unwrap();
    shell.set_input("  नमस्ते  ");

    shell.submit().await;

    let calls = translator.calls();
    assert_eq!(
        calls[0],
        TranslationRequest::new(Language::Hindi, Language::ChineseTraditional, "  नमस्ते  ")
    );
    assert_eq!(
        calls[0].prompt(),
        build_prompt(Language::Hindi, Language::ChineseTraditional, "  नमस्ते  ")
    );
}

#[test]
fn test_target_cannot_be_auto_detect() {
    let (shell, _notifier) = shell_with(FakeTranslator::new(Reply::Text("x")));
    assert!(shell.set_target(Language::Auto).is_err());
    assert_eq!(shell.target(), Language::English);
}

// voice capture

fn shell_with_speech(
    result: Result<Option<String>, CapabilityError>,
) -> (InteractionShell, Arc<RecordingNotifier>, Arc<FakeSpeech>) {
    let speech = Arc::new(FakeSpeech {
        result,
        locales: Mutex::new(Vec::new()),
    });
    let capabilities = Capabilities {
        speech: speech.clone(),
        ..Capabilities::none()
    };
    let (shell, notifier) = shell_with(FakeTranslator::new(Reply::Text("x")));
    (shell.with_capabilities(capabilities), notifier, speech)
}

#[tokio::test]
async fn test_recognised_speech_overwrites_input() {
    let (shell, notifier, speech) = shell_with_speech(Ok(Some("good morning".into())));
    shell.set_input("old text");

    let outcome = shell.start_listening().await;

    assert_eq!(outcome, ListenOutcome::Recognized("good morning".into()));
    assert_eq!(shell.snapshot().input_text, "good morning");
    assert!(!shell.is_listening());
    assert!(notifier.notices().is_empty());
    assert_eq!(speech.locales.lock().as_slice(), [RECOGNITION_LOCALE]);
}

#[tokio::test]
async fn test_no_speech_result_keeps_input() {
    let (shell, _notifier, _speech) = shell_with_speech(Ok(None));
    shell.set_input("old text");

    assert_eq!(shell.start_listening().await, ListenOutcome::NoResult);
    assert_eq!(shell.snapshot().input_text, "old text");
    assert!(!shell.is_listening());
}

#[tokio::test]
async fn test_unsupported_speech_reports_unavailable() {
    let (shell, notifier) = shell_with(FakeTranslator::new(Reply::Text("x")));

    let outcome = shell.start_listening().await;

    assert_eq!(outcome, ListenOutcome::Unavailable);
    assert!(!shell.is_listening());
    assert_eq!(
        notifier.notices(),
        vec![Notice::Unavailable(Capability::SpeechRecognition)]
    );
}

#[tokio::test]
async fn test_failed_speech_is_reported() {
    let (shell, notifier, _speech) =
        shell_with_speech(Err(CapabilityError::Failed("mic busy".into())));

    assert_eq!(shell.start_listening().await, ListenOutcome::Failed);
    assert!(!shell.is_listening());
    assert!(notifier.notices()[0].is_error());
}

// copy / share

async fn translated_shell(capabilities: Capabilities) -> (InteractionShell, Arc<RecordingNotifier>) {
    let (shell, notifier) = shell_with(FakeTranslator::new(Reply::Text("Hola")));
    let shell = shell.with_capabilities(capabilities);
    shell.set_input("Hello");
    shell.submit().await;
    (shell, notifier)
}

#[tokio::test]
async fn test_copy_writes_output_and_confirms() {
    let clipboard = Arc::new(FakeClipboard::default());
    let capabilities = Capabilities {
        clipboard: clipboard.clone(),
        ..Capabilities::none()
    };
    let (shell, notifier) = translated_shell(capabilities).await;

    assert_eq!(shell.copy_output(), ActionOutcome::Done);
    assert_eq!(clipboard.contents.lock().as_deref(), Some("Hola"));
    assert_eq!(notifier.notices(), vec![Notice::Copied]);
}

#[tokio::test]
async fn test_copy_and_share_without_output_do_nothing() {
    let (shell, notifier) = shell_with(FakeTranslator::new(Reply::Text("x")));

    assert_eq!(shell.copy_output(), ActionOutcome::NothingToDo);
    assert_eq!(shell.share_output(), ActionOutcome::NothingToDo);
    assert!(notifier.notices().is_empty());
}

#[tokio::test]
async fn test_unsupported_clipboard_and_share_are_reported() {
    let (shell, notifier) = translated_shell(Capabilities::none()).await;

    assert_eq!(shell.copy_output(), ActionOutcome::Unavailable);
    assert_eq!(shell.share_output(), ActionOutcome::Unavailable);
    assert_eq!(
        notifier.notices(),
        vec![
            Notice::Unavailable(Capability::Clipboard),
            Notice::Unavailable(Capability::Share),
        ]
    );
}

#[tokio::test]
async fn test_share_passes_title_and_output() {
    let share = Arc::new(FakeShare {
        result: Ok(()),
        shared: Mutex::new(Vec::new()),
    });
    let capabilities = Capabilities {
        share: share.clone(),
        ..Capabilities::none()
    };
    let (shell, _notifier) = translated_shell(capabilities).await;

    assert_eq!(shell.share_output(), ActionOutcome::Done);
    assert_eq!(
        share.shared.lock().as_slice(),
        [(SHARE_TITLE.to_string(), "Hola".to_string())]
    );
}

#[tokio::test]
async fn test_share_failure_is_not_surfaced() {
    let share = Arc::new(FakeShare {
        result: Err(CapabilityError::Failed("cancelled".into())),
        shared: Mutex::new(Vec::new()),
    });
    let capabilities = Capabilities {
        share,
        ..Capabilities::none()
    };
    let (shell, notifier) = translated_shell(capabilities).await;

    assert_eq!(shell.share_output(), ActionOutcome::Failed);
    assert!(notifier.notices().is_empty());
}
