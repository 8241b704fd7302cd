//! Browser speech recognition bridge for prompt dictation.
//!
//! SYSTEM CONTEXT
//! ==============
//! The Web Speech API is still vendor-prefixed in Chromium
//! (`webkitSpeechRecognition`) and absent in Firefox, so the recognizer is
//! looked up and driven dynamically through `js_sys::Reflect` instead of typed
//! bindings.
//!
//! DESIGN
//! ======
//! A `Dictation` owns one recognizer plus the closures registered as its
//! handlers. Sessions are single-utterance (`continuous = false`): the browser
//! fires one `result` and then `end`. Dropping a `Dictation` detaches the
//! handlers and aborts the session.
//!
//! A `Dictation` must not be dropped from inside its own `on_transcript` or
//! `on_end` callbacks, because that would free the closure that is running.
//! Callers keep the finished session around and replace it on the next start.

#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, JsValue, closure::Closure};

/// Whether this browser exposes a speech recognition constructor.
pub fn is_supported() -> bool {
    #[cfg(feature = "hydrate")]
    {
        recognition_constructor().is_some()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// One running (or finished) recognition session.
#[cfg(feature = "hydrate")]
pub struct Dictation {
    recognition: JsValue,
    _on_result: Closure<dyn FnMut(JsValue)>,
    _on_end: Closure<dyn FnMut(JsValue)>,
}

#[cfg(feature = "hydrate")]
impl Dictation {
    /// Create a recognizer for `lang` and start listening.
    ///
    /// `on_transcript` receives the final transcript of the utterance;
    /// `on_end` runs when the session ends for any reason, errors included.
    ///
    /// # Errors
    ///
    /// Returns an error if recognition is unavailable or the browser rejects
    /// construction or start.
    pub fn start(
        lang: &str,
        on_transcript: impl Fn(String) + 'static,
        on_end: impl Fn() + 'static,
    ) -> Result<Self, String> {
        let ctor = recognition_constructor().ok_or_else(|| "speech recognition unavailable".to_owned())?;
        let recognition = js_sys::Reflect::construct(&ctor, &js_sys::Array::new()).map_err(js_error)?;

        set_prop(&recognition, "continuous", &JsValue::FALSE)?;
        set_prop(&recognition, "interimResults", &JsValue::FALSE)?;
        set_prop(&recognition, "lang", &JsValue::from_str(lang))?;

        let on_result = Closure::<dyn FnMut(JsValue)>::new(move |event: JsValue| {
            if let Some(transcript) = first_transcript(&event) {
                on_transcript(transcript);
            }
        });
        let on_end = Closure::<dyn FnMut(JsValue)>::new(move |_event: JsValue| on_end());

        set_prop(&recognition, "onresult", on_result.as_ref())?;
        set_prop(&recognition, "onend", on_end.as_ref())?;
        set_prop(&recognition, "onerror", on_end.as_ref())?;
        call_method(&recognition, "start")?;

        Ok(Self { recognition, _on_result: on_result, _on_end: on_end })
    }

    /// Ask the recognizer to stop; `on_end` fires once it has.
    pub fn stop(&self) {
        let _ = call_method(&self.recognition, "stop");
    }
}

#[cfg(feature = "hydrate")]
impl Drop for Dictation {
    fn drop(&mut self) {
        for handler in ["onresult", "onend", "onerror"] {
            let _ = js_sys::Reflect::set(&self.recognition, &JsValue::from_str(handler), &JsValue::NULL);
        }
        let _ = call_method(&self.recognition, "abort");
    }
}

/// Server stand-in; recognition only exists in the browser.
#[cfg(not(feature = "hydrate"))]
pub struct Dictation;

#[cfg(not(feature = "hydrate"))]
impl Dictation {
    /// # Errors
    ///
    /// Always fails outside the browser.
    pub fn start(
        _lang: &str,
        _on_transcript: impl Fn(String) + 'static,
        _on_end: impl Fn() + 'static,
    ) -> Result<Self, String> {
        Err("speech recognition unavailable".to_owned())
    }

    pub fn stop(&self) {}
}

#[cfg(feature = "hydrate")]
fn recognition_constructor() -> Option<js_sys::Function> {
    let window = web_sys::window()?;
    ["SpeechRecognition", "webkitSpeechRecognition"]
        .into_iter()
        .find_map(|name| {
            js_sys::Reflect::get(window.as_ref(), &JsValue::from_str(name))
                .ok()
                .and_then(|value| value.dyn_into::<js_sys::Function>().ok())
        })
}

/// `event.results[0][0].transcript`
#[cfg(feature = "hydrate")]
fn first_transcript(event: &JsValue) -> Option<String> {
    let results = js_sys::Reflect::get(event, &JsValue::from_str("results")).ok()?;
    let result = js_sys::Reflect::get_u32(&results, 0).ok()?;
    let alternative = js_sys::Reflect::get_u32(&result, 0).ok()?;
    js_sys::Reflect::get(&alternative, &JsValue::from_str("transcript"))
        .ok()?
        .as_string()
}

#[cfg(feature = "hydrate")]
fn set_prop(target: &JsValue, key: &str, value: &JsValue) -> Result<(), String> {
    js_sys::Reflect::set(target, &JsValue::from_str(key), value)
        .map(|_| ())
        .map_err(js_error)
}

#[cfg(feature = "hydrate")]
fn call_method(target: &JsValue, name: &str) -> Result<(), String> {
    let method = js_sys::Reflect::get(target, &JsValue::from_str(name))
        .map_err(js_error)?
        .dyn_into::<js_sys::Function>()
        .map_err(js_error)?;
    method.call0(target).map(|_| ()).map_err(js_error)
}

#[cfg(feature = "hydrate")]
fn js_error(value: impl Into<JsValue>) -> String {
    let value = value.into();
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
