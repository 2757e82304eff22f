//! cnmerge - class-name merging for utility-first CSS
//!
//! This crate joins class-name inputs into one string, dropping falsy
//! inputs and resolving conflicting utilities so that the later one wins.
//!
//! ```
//! use cnmerge::{cn, ClassInput};
//!
//! assert_eq!(cn(["px-4 py-2", "px-6"]), "py-2 px-6");
//! assert_eq!(cnmerge::cn!("base", false, None::<&str>, "end"), "base end");
//! assert_eq!(cn([ClassInput::when(true, "active")]), "active");
//! ```

pub mod config;
pub mod input;
pub mod merge;
pub mod telemetry;

pub use cnmerge_classifier::{Classifier, ClassifierConfig, ClassifierResult};
pub use config::{ConfigError, EffectiveConfig, MergeConfig};
pub use input::ClassInput;
pub use merge::{DropReason, MergeReport, Merger, TokenDecision};

use std::sync::OnceLock;

static DEFAULT_MERGER: OnceLock<Merger> = OnceLock::new();

/// Process-wide merger with the built-in group table.
pub fn default_merger() -> &'static Merger {
    DEFAULT_MERGER.get_or_init(Merger::default)
}

/// Merge class-name inputs with the built-in group table.
pub fn cn<I>(inputs: I) -> String
where
    I: IntoIterator,
    I::Item: Into<ClassInput>,
{
    default_merger().merge(inputs)
}

/// Variadic form of [`cn`]; arguments may be of different input types.
#[macro_export]
macro_rules! cn {
    () => {
        ::std::string::String::new()
    };
    ($($input:expr),+ $(,)?) => {
        $crate::cn([$($crate::ClassInput::from($input)),+])
    };
}
