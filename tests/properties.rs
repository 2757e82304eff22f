//! Property tests for the merger
//!
//! Inputs are drawn from a pool of real utility classes, modifiers and
//! unknown class names so that conflicts actually occur.

use cnmerge::{cn, ClassInput, Merger};
use proptest::prelude::*;

const UTILITIES: &[&str] = &[
    "p-2", "p-4", "px-1", "px-6", "py-2", "pt-3", "pl-0", "m-auto", "mx-2", "-mt-1",
    "w-4", "h-full", "size-8", "text-sm", "text-lg", "text-lg/7", "text-red-500",
    "text-center", "leading-6", "font-bold", "font-sans", "bg-blue-500", "bg-cover",
    "border", "border-2", "border-t-4", "border-red-500", "rounded", "rounded-tl-lg",
    "flex", "block", "hidden", "flex-1", "grow", "basis-1/2", "gap-2", "gap-x-4",
    "overflow-hidden", "overflow-x-auto", "inset-0", "top-2", "shadow-lg", "ring-2",
    "[mask-type:alpha]", "[mask-type:luminance]", "btn", "card", "active",
];

const MODIFIERS: &[&str] = &["", "hover:", "md:", "md:hover:", "hover:md:", "!", "[&>*]:"];

// A pool where no two classes conflict with each other.
const CONFLICT_FREE: &[&str] = &[
    "flex", "items-center", "justify-between", "px-4", "py-2", "mt-1", "w-full",
    "h-8", "text-sm", "text-gray-700", "font-medium", "bg-white", "border",
    "border-gray-200", "rounded-md", "shadow-sm", "hover:bg-gray-50",
    "focus:ring-2", "transition", "duration-150", "btn", "card",
];

// Unrecognized classes, which may repeat without conflicting.
const UNKNOWN: &[&str] = &["btn", "card", "active", "is-open"];

// Conflict-free utilities plus any number of repeated unknown classes, shuffled.
fn conflict_free_with_repeats() -> impl Strategy<Value = Vec<&'static str>> {
    (
        prop::sample::subsequence(CONFLICT_FREE.to_vec(), 0..CONFLICT_FREE.len()),
        prop::collection::vec(prop::sample::select(UNKNOWN), 0..8),
    )
        .prop_flat_map(|(mut tokens, repeats)| {
            tokens.extend(repeats);
            Just(tokens).prop_shuffle()
        })
}

fn token() -> impl Strategy<Value = String> {
    (prop::sample::select(MODIFIERS), prop::sample::select(UTILITIES))
        .prop_map(|(modifier, utility)| format!("{}{}", modifier, utility))
}

const WHITESPACE: &[&str] = &[" ", "  ", "\t", "\n", " \t "];

fn whitespace() -> impl Strategy<Value = String> {
    prop::sample::select(WHITESPACE).prop_map(str::to_string)
}

// A class string with irregular whitespace between tokens.
fn class_string() -> impl Strategy<Value = String> {
    prop::collection::vec((token(), whitespace()), 0..12).prop_map(|parts| {
        parts
            .into_iter()
            .map(|(t, ws)| format!("{}{}", t, ws))
            .collect()
    })
}

proptest! {
    #[test]
    fn merge_is_idempotent(input in class_string()) {
        let once = cn([input.as_str()]);
        prop_assert_eq!(cn([once.as_str()]), once);
    }

    #[test]
    fn output_has_no_stray_whitespace(input in class_string()) {
        let output = cn([input.as_str()]);
        prop_assert_eq!(output.trim(), output.as_str());
        prop_assert!(!output.contains("  "));
        prop_assert!(!output.contains(|c: char| c == '\t' || c == '\n'));
    }

    #[test]
    fn output_is_ordered_subsequence_of_input(input in class_string()) {
        let output = cn([input.as_str()]);
        let mut remaining = input.split_whitespace();
        for kept in output.split_whitespace() {
            prop_assert!(
                remaining.any(|t| t == kept),
                "{:?} out of order in {:?}", kept, output
            );
        }
    }

    #[test]
    fn last_token_always_survives(input in class_string()) {
        let output = cn([input.as_str()]);
        prop_assert_eq!(input.split_whitespace().last(), output.split_whitespace().last());
    }

    #[test]
    fn conflict_free_input_is_identity(
        tokens in prop::sample::subsequence(CONFLICT_FREE.to_vec(), 0..CONFLICT_FREE.len())
    ) {
        prop_assert_eq!(cn(tokens.clone()), tokens.join(" "));
    }

    #[test]
    fn repeated_unknown_classes_are_identity(tokens in conflict_free_with_repeats()) {
        prop_assert_eq!(cn(tokens.clone()), tokens.join(" "));
    }

    #[test]
    fn splitting_arguments_does_not_change_result(
        tokens in prop::collection::vec(token(), 0..10),
        split in 0usize..10,
    ) {
        let split = split.min(tokens.len());
        let joined = cn([tokens.join(" ")]);
        let parts = ClassInput::List(vec![
            ClassInput::from(tokens[..split].to_vec()),
            ClassInput::from(tokens[split..].to_vec()),
        ]);
        prop_assert_eq!(cn([parts]), joined);
    }

    #[test]
    fn report_agrees_with_merge(input in class_string()) {
        let merger = Merger::default();
        let report = merger.report([input.as_str()]);
        prop_assert_eq!(&report.output, &merger.merge_str(&input));
        prop_assert_eq!(report.decisions.len(), input.split_whitespace().count());
    }
}
