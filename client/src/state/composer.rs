//! Chat composer state: prompt text, attachments, generation mode, dictation.
//!
//! DESIGN
//! ======
//! Everything here is local to one page session. Dictation is modeled as a
//! small state machine whose transitions return a `DictationCommand`; the
//! component executes the command against the browser recognizer so the state
//! itself stays testable without a DOM.
//!
//! TRADE-OFFS
//! ==========
//! Stopping a recording flips `recording` to false immediately instead of
//! waiting for the recognizer's `end` event. A late `end` is then a no-op.

#[cfg(test)]
#[path = "composer_test.rs"]
mod composer_test;

use serde::{Deserialize, Serialize};

/// Shown when the browser exposes no speech recognition constructor.
pub const SPEECH_UNSUPPORTED_NOTICE: &str =
    "Speech recognition is not supported in this browser. Try a recent version of Chrome or Edge.";

/// How the assistant should apply a prompt.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GenerationMode {
    /// Edit only the slide currently in the preview.
    #[default]
    SinglePage,
    /// Regenerate the whole deck.
    Global,
}

impl GenerationMode {
    pub const ALL: [Self; 2] = [Self::SinglePage, Self::Global];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SinglePage => "single-page",
            Self::Global => "global",
        }
    }

    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "single-page" => Some(Self::SinglePage),
            "global" => Some(Self::Global),
            _ => None,
        }
    }

    /// Tab caption.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::SinglePage => "Single Page",
            Self::Global => "Global Gen",
        }
    }
}

/// A file picked through the attachment button. Never uploaded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedFile {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub size: u64,
}

impl UploadedFile {
    #[must_use]
    pub fn new(name: impl Into<String>, kind: impl Into<String>, size: u64) -> Self {
        Self { id: uuid::Uuid::new_v4().to_string(), name: name.into(), kind: kind.into(), size }
    }
}

/// Side effect the dictation toggle asks the view to perform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DictationCommand {
    /// Recognition is unavailable; a notice is now pending.
    ShowNotice,
    /// Start a single-utterance recognition session.
    Start,
    /// Stop the running session.
    Stop,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ComposerState {
    input: String,
    files: Vec<UploadedFile>,
    mode: GenerationMode,
    recording: bool,
    notice: Option<&'static str>,
}

impl ComposerState {
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    #[must_use]
    pub fn files(&self) -> &[UploadedFile] {
        &self.files
    }

    #[must_use]
    pub fn mode(&self) -> GenerationMode {
        self.mode
    }

    #[must_use]
    pub fn is_recording(&self) -> bool {
        self.recording
    }

    #[must_use]
    pub fn notice(&self) -> Option<&'static str> {
        self.notice
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn add_files(&mut self, files: impl IntoIterator<Item = UploadedFile>) {
        self.files.extend(files);
    }

    /// Remove the attachment with `id`. Returns whether anything was removed.
    pub fn remove_file(&mut self, id: &str) -> bool {
        let before = self.files.len();
        self.files.retain(|f| f.id != id);
        self.files.len() != before
    }

    pub fn set_mode(&mut self, mode: GenerationMode) {
        self.mode = mode;
    }

    /// Flip the microphone button.
    ///
    /// With no recognizer available nothing but the notice changes.
    pub fn toggle_recording(&mut self, recognition_available: bool) -> DictationCommand {
        if !recognition_available {
            self.notice = Some(SPEECH_UNSUPPORTED_NOTICE);
            return DictationCommand::ShowNotice;
        }
        if self.recording {
            self.recording = false;
            DictationCommand::Stop
        } else {
            self.recording = true;
            DictationCommand::Start
        }
    }

    /// Append a recognized utterance to the prompt.
    pub fn append_transcript(&mut self, transcript: &str) {
        let transcript = transcript.trim();
        if transcript.is_empty() {
            return;
        }
        if !self.input.is_empty() && !self.input.ends_with(char::is_whitespace) {
            self.input.push(' ');
        }
        self.input.push_str(transcript);
    }

    /// Recognizer fired `end` (or `error`).
    pub fn recording_ended(&mut self) {
        self.recording = false;
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}
