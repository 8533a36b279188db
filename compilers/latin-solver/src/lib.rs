pub mod compose;
pub mod pipeline;
pub mod roles;

pub use compose::{collapse_repeats, compose};
pub use pipeline::{EntryPoint, Source, TranslateError, Translation, Translator, TranslatorConfig};
pub use roles::extract_roles;
