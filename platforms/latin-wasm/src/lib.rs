use latin_morph::MemoryProvider;
use latin_parser::token::TokenKind;
use latin_parser::tokenize;
use latin_protocol::{RoleAssignment, Word};
use latin_solver::{Translator, TranslatorConfig};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

#[derive(Debug, Serialize)]
pub struct TokenDebug {
    pub text: String,
    pub start: usize,
    pub end: usize,
    pub kind: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorReport {
    /// Index among the surface words, when the failure belongs to one
    pub position: Option<usize>,
    pub message: String,
}

/// The structured response sent back to JavaScript
#[derive(Debug, Serialize)]
pub struct TranslationReport {
    pub tokens: Vec<TokenDebug>,
    pub text: Option<String>,
    pub roles: Vec<RoleAssignment>,
    pub words: Vec<Word>,
    pub error: Option<ErrorReport>,
}

/// The engine instance running in the browser
#[wasm_bindgen]
pub struct LatinEngine {
    provider: MemoryProvider,
    config: TranslatorConfig,
}

#[wasm_bindgen]
impl LatinEngine {
    /// `data` is a lexicon archive fetched by the host page.
    #[wasm_bindgen(constructor)]
    pub fn new(data: Vec<u8>) -> Result<LatinEngine, JsValue> {
        let provider = MemoryProvider::from_archive(&data).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self {
            provider,
            config: TranslatorConfig::default(),
        })
    }

    /// Replace the translator configuration with a `{ entry_point, prune_variants }` object.
    pub fn configure(&mut self, config: JsValue) -> Result<(), JsValue> {
        self.config = serde_wasm_bindgen::from_value(config)?;
        Ok(())
    }

    pub fn lexicon_version(&self) -> u32 {
        self.provider.version()
    }

    pub fn translate(&self, input: &str) -> Result<JsValue, JsValue> {
        let report = build_report(&self.provider, self.config, input);
        Ok(serde_wasm_bindgen::to_value(&report)?)
    }
}

pub fn build_report(provider: &MemoryProvider, config: TranslatorConfig, input: &str) -> TranslationReport {
    let tokens = tokenize(input)
        .iter()
        .map(|t| TokenDebug {
            text: t.text.to_string(),
            start: t.span.start,
            end: t.span.end,
            kind: match t.kind {
                TokenKind::Word => "Word".to_string(),
                TokenKind::Punctuation(_) => "Punctuation".to_string(),
            },
        })
        .collect();

    match Translator::new(provider, config).translate(input) {
        Ok(translation) => TranslationReport {
            tokens,
            text: Some(translation.text),
            roles: translation.roles,
            words: translation.words,
            error: None,
        },
        Err(err) => TranslationReport {
            tokens,
            text: None,
            roles: Vec::new(),
            words: Vec::new(),
            error: Some(ErrorReport {
                position: err.position(),
                message: err.to_string(),
            }),
        },
    }
}
