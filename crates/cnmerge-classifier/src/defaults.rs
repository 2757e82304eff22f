//! Built-in utility taxonomy.
//!
//! Group ids, value rules and conflicts follow the tailwind-merge default
//! configuration so that merge results match what Tailwind users expect.

use crate::table::{GroupRule, GroupTable};
use crate::validators::ValueKind as K;

const SPACING: &[K] = &[K::Length, K::ArbitraryLength, K::Arbitrary];
const NUMBER: &[K] = &[K::Number, K::Arbitrary];
const INTEGER: &[K] = &[K::Integer, K::Arbitrary];
const COLOR: &[K] = &[K::Any];

const LINE_STYLES: &[&str] = &["solid", "dashed", "dotted", "double", "none"];
const ALIGN: &[&str] = &["start", "end", "center", "between", "around", "evenly", "stretch"];
const BLEND_MODES: &[&str] = &[
    "normal",
    "multiply",
    "screen",
    "overlay",
    "darken",
    "lighten",
    "color-dodge",
    "color-burn",
    "hard-light",
    "soft-light",
    "difference",
    "exclusion",
    "hue",
    "saturation",
    "color",
    "luminosity",
];
const POSITIONS: &[&str] = &[
    "bottom",
    "center",
    "left",
    "left-bottom",
    "left-top",
    "right",
    "right-bottom",
    "right-top",
    "top",
];
const OVERFLOW: &[&str] = &["auto", "hidden", "clip", "visible", "scroll"];

fn p(id: &str, prefix: &str) -> GroupRule {
    GroupRule::prefixed(id, prefix)
}

fn ids(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

/// Build the default group table.
pub fn default_table() -> GroupTable {
    let mut table = GroupTable::new();
    for rule in default_rules() {
        table.add_rule(rule);
    }
    for (group, overridden) in DEFAULT_CONFLICTS {
        table.add_conflicts(group, &ids(overridden));
    }
    for (group, overridden) in DEFAULT_POSTFIX_CONFLICTS {
        table.add_postfix_conflicts(group, &ids(overridden));
    }
    table
}

/// Groups overridden by a later member of the key group.
pub const DEFAULT_CONFLICTS: &[(&str, &[&str])] = &[
    ("overflow", &["overflow-x", "overflow-y"]),
    ("inset", &["inset-x", "inset-y", "start", "end", "top", "right", "bottom", "left"]),
    ("inset-x", &["right", "left"]),
    ("inset-y", &["top", "bottom"]),
    ("flex", &["basis", "grow", "shrink"]),
    ("gap", &["gap-x", "gap-y"]),
    ("p", &["px", "py", "ps", "pe", "pt", "pr", "pb", "pl"]),
    ("px", &["pr", "pl"]),
    ("py", &["pt", "pb"]),
    ("m", &["mx", "my", "ms", "me", "mt", "mr", "mb", "ml"]),
    ("mx", &["mr", "ml"]),
    ("my", &["mt", "mb"]),
    ("size", &["w", "h"]),
    (
        "rounded",
        &[
            "rounded-s",
            "rounded-e",
            "rounded-t",
            "rounded-r",
            "rounded-b",
            "rounded-l",
            "rounded-ss",
            "rounded-se",
            "rounded-ee",
            "rounded-es",
            "rounded-tl",
            "rounded-tr",
            "rounded-br",
            "rounded-bl",
        ],
    ),
    ("rounded-s", &["rounded-ss", "rounded-es"]),
    ("rounded-e", &["rounded-se", "rounded-ee"]),
    ("rounded-t", &["rounded-tl", "rounded-tr"]),
    ("rounded-r", &["rounded-tr", "rounded-br"]),
    ("rounded-b", &["rounded-br", "rounded-bl"]),
    ("rounded-l", &["rounded-tl", "rounded-bl"]),
    (
        "border-w",
        &[
            "border-w-s",
            "border-w-e",
            "border-w-t",
            "border-w-r",
            "border-w-b",
            "border-w-l",
        ],
    ),
    ("border-w-x", &["border-w-r", "border-w-l"]),
    ("border-w-y", &["border-w-t", "border-w-b"]),
    (
        "border-color",
        &[
            "border-color-s",
            "border-color-e",
            "border-color-t",
            "border-color-r",
            "border-color-b",
            "border-color-l",
        ],
    ),
    ("border-color-x", &["border-color-r", "border-color-l"]),
    ("border-color-y", &["border-color-t", "border-color-b"]),
    ("scale", &["scale-x", "scale-y"]),
];

/// Extra conflicts that apply only when the class has a postfix modifier.
/// `text-lg/7` sets the line height too.
pub const DEFAULT_POSTFIX_CONFLICTS: &[(&str, &[&str])] = &[("font-size", &["leading"])];

fn default_rules() -> Vec<GroupRule> {
    let mut rules = Vec::new();

    // Layout
    rules.extend([
        p("aspect", "aspect").keywords(&["auto", "square", "video"]).kinds(&[K::Arbitrary]),
        GroupRule::exact("container", &["container"]),
        p("columns", "columns").kinds(&[K::TshirtSize, K::Integer, K::Arbitrary]),
        p("break-after", "break-after").keywords(&["auto", "avoid", "all", "page", "left", "right", "column"]),
        p("break-before", "break-before").keywords(&["auto", "avoid", "all", "page", "left", "right", "column"]),
        p("break-inside", "break-inside").keywords(&["auto", "avoid", "avoid-page", "avoid-column"]),
        p("box-decoration", "box-decoration").keywords(&["slice", "clone"]),
        p("box", "box").keywords(&["border", "content"]),
        GroupRule::exact(
            "display",
            &[
                "block",
                "inline-block",
                "inline",
                "flex",
                "inline-flex",
                "table",
                "inline-table",
                "table-caption",
                "table-cell",
                "table-column",
                "table-column-group",
                "table-footer-group",
                "table-header-group",
                "table-row-group",
                "table-row",
                "flow-root",
                "grid",
                "inline-grid",
                "contents",
                "list-item",
                "hidden",
            ],
        ),
        p("float", "float").keywords(&["right", "left", "none", "start", "end"]),
        p("clear", "clear").keywords(&["left", "right", "both", "none", "start", "end"]),
        GroupRule::exact("isolation", &["isolate", "isolation-auto"]),
        p("object-fit", "object").keywords(&["contain", "cover", "fill", "none", "scale-down"]),
        p("object-position", "object").keywords(POSITIONS).kinds(&[K::Arbitrary]),
        p("overflow", "overflow").keywords(OVERFLOW),
        p("overflow-x", "overflow-x").keywords(OVERFLOW),
        p("overflow-y", "overflow-y").keywords(OVERFLOW),
        p("overscroll", "overscroll").keywords(&["auto", "contain", "none"]),
        GroupRule::exact("position", &["static", "fixed", "absolute", "relative", "sticky"]),
        p("inset", "inset").keywords(&["auto"]).kinds(SPACING),
        p("inset-x", "inset-x").keywords(&["auto"]).kinds(SPACING),
        p("inset-y", "inset-y").keywords(&["auto"]).kinds(SPACING),
        p("start", "start").keywords(&["auto"]).kinds(SPACING),
        p("end", "end").keywords(&["auto"]).kinds(SPACING),
        p("top", "top").keywords(&["auto"]).kinds(SPACING),
        p("right", "right").keywords(&["auto"]).kinds(SPACING),
        p("bottom", "bottom").keywords(&["auto"]).kinds(SPACING),
        p("left", "left").keywords(&["auto"]).kinds(SPACING),
        GroupRule::exact("visibility", &["visible", "invisible", "collapse"]),
        p("z", "z").keywords(&["auto"]).kinds(INTEGER),
    ]);

    // Flexbox and grid
    rules.extend([
        p("basis", "basis").keywords(&["auto"]).kinds(SPACING),
        p("flex-direction", "flex").keywords(&["row", "row-reverse", "col", "col-reverse"]),
        p("flex-wrap", "flex").keywords(&["wrap", "wrap-reverse", "nowrap"]),
        p("flex", "flex").keywords(&["auto", "initial", "none"]).kinds(NUMBER),
        p("grow", "grow").bare().kinds(NUMBER),
        p("shrink", "shrink").bare().kinds(NUMBER),
        p("order", "order").keywords(&["first", "last", "none"]).kinds(INTEGER),
        p("grid-cols", "grid-cols").kinds(&[K::Any]),
        p("col-start-end", "col").keywords(&["auto"]).kinds(&[K::Arbitrary]),
        p("col-start-end", "col-span").keywords(&["full"]).kinds(INTEGER),
        p("col-start", "col-start").keywords(&["auto"]).kinds(NUMBER),
        p("col-end", "col-end").keywords(&["auto"]).kinds(NUMBER),
        p("grid-rows", "grid-rows").kinds(&[K::Any]),
        p("row-start-end", "row").keywords(&["auto"]).kinds(&[K::Arbitrary]),
        p("row-start-end", "row-span").keywords(&["full"]).kinds(INTEGER),
        p("row-start", "row-start").keywords(&["auto"]).kinds(NUMBER),
        p("row-end", "row-end").keywords(&["auto"]).kinds(NUMBER),
        p("grid-flow", "grid-flow").keywords(&["row", "col", "dense", "row-dense", "col-dense"]),
        p("auto-cols", "auto-cols").keywords(&["auto", "min", "max", "fr"]).kinds(&[K::Arbitrary]),
        p("auto-rows", "auto-rows").keywords(&["auto", "min", "max", "fr"]).kinds(&[K::Arbitrary]),
        p("gap", "gap").kinds(SPACING),
        p("gap-x", "gap-x").kinds(SPACING),
        p("gap-y", "gap-y").kinds(SPACING),
        p("justify-content", "justify").keywords(&["normal"]).keywords(ALIGN),
        p("justify-items", "justify-items").keywords(&["start", "end", "center", "stretch"]),
        p("justify-self", "justify-self").keywords(&["auto", "start", "end", "center", "stretch"]),
        p("align-content", "content").keywords(&["normal", "baseline"]).keywords(ALIGN),
        p("align-items", "items").keywords(&["start", "end", "center", "baseline", "stretch"]),
        p("align-self", "self").keywords(&["auto", "start", "end", "center", "stretch", "baseline"]),
        p("place-content", "place-content").keywords(&["baseline"]).keywords(ALIGN),
        p("place-items", "place-items").keywords(&["start", "end", "center", "baseline", "stretch"]),
        p("place-self", "place-self").keywords(&["auto", "start", "end", "center", "stretch"]),
    ]);

    // Spacing
    for id in ["p", "px", "py", "ps", "pe", "pt", "pr", "pb", "pl"] {
        rules.push(p(id, id).kinds(SPACING));
    }
    for id in ["m", "mx", "my", "ms", "me", "mt", "mr", "mb", "ml"] {
        rules.push(p(id, id).keywords(&["auto"]).kinds(SPACING));
    }
    rules.extend([
        p("space-x", "space-x").kinds(SPACING),
        GroupRule::exact("space-x-reverse", &["space-x-reverse"]),
        p("space-y", "space-y").kinds(SPACING),
        GroupRule::exact("space-y-reverse", &["space-y-reverse"]),
    ]);

    // Sizing
    rules.extend([
        p("w", "w").keywords(&["auto", "min", "max", "fit", "svw", "lvw", "dvw"]).kinds(SPACING),
        p("min-w", "min-w").keywords(&["min", "max", "fit"]).kinds(SPACING),
        p("max-w", "max-w")
            .keywords(&["none", "min", "max", "fit", "prose"])
            .kinds(&[K::TshirtSize])
            .kinds(SPACING),
        p("h", "h").keywords(&["auto", "min", "max", "fit", "svh", "lvh", "dvh"]).kinds(SPACING),
        p("min-h", "min-h").keywords(&["min", "max", "fit", "svh", "lvh", "dvh"]).kinds(SPACING),
        p("max-h", "max-h").keywords(&["min", "max", "fit", "svh", "lvh", "dvh"]).kinds(SPACING),
        p("size", "size").keywords(&["auto", "min", "max", "fit"]).kinds(SPACING),
    ]);

    // Typography
    rules.extend([
        p("font-size", "text").keywords(&["base"]).kinds(&[K::TshirtSize, K::ArbitraryLength]),
        GroupRule::exact("font-smoothing", &["antialiased", "subpixel-antialiased"]),
        GroupRule::exact("font-style", &["italic", "not-italic"]),
        p("font-weight", "font")
            .keywords(&[
                "thin",
                "extralight",
                "light",
                "normal",
                "medium",
                "semibold",
                "bold",
                "extrabold",
                "black",
            ])
            .kinds(&[K::ArbitraryNumber]),
        p("font-family", "font").kinds(&[K::Any]),
        GroupRule::exact("fvn-normal", &["normal-nums"]),
        GroupRule::exact("fvn-ordinal", &["ordinal"]),
        GroupRule::exact("fvn-slashed-zero", &["slashed-zero"]),
        GroupRule::exact("fvn-figure", &["lining-nums", "oldstyle-nums"]),
        GroupRule::exact("fvn-spacing", &["proportional-nums", "tabular-nums"]),
        GroupRule::exact("fvn-fraction", &["diagonal-fractions", "stacked-fractions"]),
        p("tracking", "tracking")
            .keywords(&["tighter", "tight", "normal", "wide", "wider", "widest"])
            .kinds(&[K::Arbitrary]),
        p("line-clamp", "line-clamp").keywords(&["none"]).kinds(&[K::Number, K::ArbitraryNumber]),
        p("leading", "leading")
            .keywords(&["none", "tight", "snug", "normal", "relaxed", "loose"])
            .kinds(SPACING),
        p("list-image", "list-image").keywords(&["none"]).kinds(&[K::Arbitrary]),
        p("list-style-type", "list").keywords(&["none", "disc", "decimal"]).kinds(&[K::Arbitrary]),
        p("list-style-position", "list").keywords(&["inside", "outside"]),
        p("placeholder-color", "placeholder").kinds(COLOR),
        p("text-alignment", "text").keywords(&["left", "center", "right", "justify", "start", "end"]),
        p("text-wrap", "text").keywords(&["wrap", "nowrap", "balance", "pretty"]),
        p("text-color", "text").kinds(COLOR),
        GroupRule::exact("text-decoration", &["underline", "overline", "line-through", "no-underline"]),
        p("text-decoration-style", "decoration").keywords(&["solid", "dashed", "dotted", "double", "wavy"]),
        p("text-decoration-thickness", "decoration")
            .keywords(&["auto", "from-font"])
            .kinds(&[K::Length, K::ArbitraryLength]),
        p("text-decoration-color", "decoration").kinds(COLOR),
        p("underline-offset", "underline-offset").keywords(&["auto"]).kinds(SPACING),
        GroupRule::exact("text-transform", &["uppercase", "lowercase", "capitalize", "normal-case"]),
        GroupRule::exact("text-overflow", &["truncate", "text-ellipsis", "text-clip"]),
        p("indent", "indent").kinds(SPACING),
        p("vertical-align", "align")
            .keywords(&[
                "baseline",
                "top",
                "middle",
                "bottom",
                "text-top",
                "text-bottom",
                "sub",
                "super",
            ])
            .kinds(&[K::Arbitrary]),
        p("whitespace", "whitespace").keywords(&["normal", "nowrap", "pre", "pre-line", "pre-wrap", "break-spaces"]),
        p("break", "break").keywords(&["normal", "words", "all", "keep"]),
        p("hyphens", "hyphens").keywords(&["none", "manual", "auto"]),
        p("content", "content").keywords(&["none"]).kinds(&[K::Arbitrary]),
    ]);

    // Backgrounds and gradients
    rules.extend([
        p("bg-attachment", "bg").keywords(&["fixed", "local", "scroll"]),
        p("bg-clip", "bg-clip").keywords(&["border", "padding", "content", "text"]),
        p("bg-origin", "bg-origin").keywords(&["border", "padding", "content"]),
        p("bg-position", "bg").keywords(POSITIONS).kinds(&[K::ArbitraryPosition]),
        p("bg-repeat", "bg").keywords(&[
            "no-repeat",
            "repeat",
            "repeat-x",
            "repeat-y",
            "repeat-round",
            "repeat-space",
        ]),
        p("bg-size", "bg").keywords(&["auto", "cover", "contain"]).kinds(&[K::ArbitrarySize]),
        p("bg-image", "bg")
            .keywords(&[
                "none",
                "gradient-to-t",
                "gradient-to-tr",
                "gradient-to-r",
                "gradient-to-br",
                "gradient-to-b",
                "gradient-to-bl",
                "gradient-to-l",
                "gradient-to-tl",
            ])
            .kinds(&[K::ArbitraryImage]),
        p("bg-color", "bg").kinds(COLOR),
        p("gradient-from-pos", "from").kinds(&[K::Percent, K::ArbitraryLength]),
        p("gradient-via-pos", "via").kinds(&[K::Percent, K::ArbitraryLength]),
        p("gradient-to-pos", "to").kinds(&[K::Percent, K::ArbitraryLength]),
        p("gradient-from", "from").kinds(COLOR),
        p("gradient-via", "via").kinds(COLOR),
        p("gradient-to", "to").kinds(COLOR),
    ]);

    // Borders
    rules.push(p("rounded", "rounded").bare().keywords(&["none", "full"]).kinds(&[K::TshirtSize, K::Arbitrary]));
    for side in ["s", "e", "t", "r", "b", "l", "ss", "se", "ee", "es", "tl", "tr", "br", "bl"] {
        let id = format!("rounded-{side}");
        rules.push(
            p(&id, &id)
                .bare()
                .keywords(&["none", "full"])
                .kinds(&[K::TshirtSize, K::Arbitrary]),
        );
    }
    rules.push(p("border-w", "border").bare().kinds(&[K::Length, K::ArbitraryLength]));
    for side in ["x", "y", "s", "e", "t", "r", "b", "l"] {
        rules.push(
            p(&format!("border-w-{side}"), &format!("border-{side}"))
                .bare()
                .kinds(&[K::Length, K::ArbitraryLength]),
        );
    }
    rules.extend([
        p("border-style", "border").keywords(LINE_STYLES).keywords(&["hidden"]),
        GroupRule::exact("border-collapse", &["border-collapse", "border-separate"]),
        p("border-color", "border").kinds(COLOR),
    ]);
    for side in ["x", "y", "s", "e", "t", "r", "b", "l"] {
        rules.push(p(&format!("border-color-{side}"), &format!("border-{side}")).kinds(COLOR));
    }
    rules.extend([
        p("divide-x", "divide-x").bare().kinds(&[K::Length, K::ArbitraryLength]),
        GroupRule::exact("divide-x-reverse", &["divide-x-reverse"]),
        p("divide-y", "divide-y").bare().kinds(&[K::Length, K::ArbitraryLength]),
        GroupRule::exact("divide-y-reverse", &["divide-y-reverse"]),
        p("divide-style", "divide").keywords(LINE_STYLES),
        p("divide-color", "divide").kinds(COLOR),
        p("outline-style", "outline").bare().keywords(LINE_STYLES),
        p("outline-offset", "outline-offset").kinds(&[K::Length, K::Arbitrary]),
        p("outline-w", "outline").kinds(&[K::Length, K::ArbitraryLength]),
        p("outline-color", "outline").kinds(COLOR),
        p("ring-w", "ring").bare().kinds(&[K::Length, K::ArbitraryLength]),
        GroupRule::exact("ring-w-inset", &["ring-inset"]),
        p("ring-opacity", "ring-opacity").kinds(NUMBER),
        p("ring-color", "ring").kinds(COLOR),
        p("ring-offset-w", "ring-offset").kinds(&[K::Length, K::ArbitraryLength]),
        p("ring-offset-color", "ring-offset").kinds(COLOR),
    ]);

    // Effects and filters
    rules.extend([
        p("shadow", "shadow")
            .bare()
            .keywords(&["inner", "none"])
            .kinds(&[K::TshirtSize, K::ArbitraryShadow]),
        p("shadow-color", "shadow").kinds(COLOR),
        p("opacity", "opacity").kinds(NUMBER),
        p("mix-blend", "mix-blend").keywords(BLEND_MODES).keywords(&["plus-lighter"]),
        p("bg-blend", "bg-blend").keywords(BLEND_MODES),
        p("blur", "blur").bare().keywords(&["none"]).kinds(&[K::TshirtSize, K::Arbitrary]),
        p("brightness", "brightness").kinds(NUMBER),
        p("contrast", "contrast").kinds(NUMBER),
        p("drop-shadow", "drop-shadow").bare().keywords(&["none"]).kinds(&[K::TshirtSize, K::Arbitrary]),
        p("grayscale", "grayscale").bare().keywords(&["0"]).kinds(&[K::Arbitrary]),
        p("hue-rotate", "hue-rotate").kinds(NUMBER),
        p("invert", "invert").bare().keywords(&["0"]).kinds(&[K::Arbitrary]),
        p("saturate", "saturate").kinds(NUMBER),
        p("sepia", "sepia").bare().keywords(&["0"]).kinds(&[K::Arbitrary]),
        p("backdrop-blur", "backdrop-blur").bare().keywords(&["none"]).kinds(&[K::TshirtSize, K::Arbitrary]),
        p("backdrop-opacity", "backdrop-opacity").kinds(NUMBER),
    ]);

    // Transitions and animation
    rules.extend([
        p("transition", "transition")
            .bare()
            .keywords(&["none", "all", "colors", "opacity", "shadow", "transform"])
            .kinds(&[K::Arbitrary]),
        p("duration", "duration").kinds(NUMBER),
        p("ease", "ease").keywords(&["linear", "in", "out", "in-out"]).kinds(&[K::Arbitrary]),
        p("delay", "delay").kinds(NUMBER),
        p("animate", "animate").keywords(&["none", "spin", "ping", "pulse", "bounce"]).kinds(&[K::Arbitrary]),
    ]);

    // Transforms
    rules.extend([
        p("scale", "scale").kinds(NUMBER),
        p("scale-x", "scale-x").kinds(NUMBER),
        p("scale-y", "scale-y").kinds(NUMBER),
        p("rotate", "rotate").kinds(INTEGER),
        p("translate-x", "translate-x").kinds(SPACING),
        p("translate-y", "translate-y").kinds(SPACING),
        p("skew-x", "skew-x").kinds(NUMBER),
        p("skew-y", "skew-y").kinds(NUMBER),
        p("transform-origin", "origin")
            .keywords(&[
                "center",
                "top",
                "top-right",
                "right",
                "bottom-right",
                "bottom",
                "bottom-left",
                "left",
                "top-left",
            ])
            .kinds(&[K::Arbitrary]),
    ]);

    // Interactivity
    rules.extend([
        p("accent", "accent").keywords(&["auto"]).kinds(COLOR),
        p("appearance", "appearance").keywords(&["none", "auto"]),
        p("cursor", "cursor")
            .keywords(&[
                "auto",
                "default",
                "pointer",
                "wait",
                "text",
                "move",
                "help",
                "not-allowed",
                "none",
                "context-menu",
                "progress",
                "cell",
                "crosshair",
                "vertical-text",
                "alias",
                "copy",
                "no-drop",
                "grab",
                "grabbing",
                "all-scroll",
                "col-resize",
                "row-resize",
                "zoom-in",
                "zoom-out",
            ])
            .kinds(&[K::Arbitrary]),
        p("caret-color", "caret").kinds(COLOR),
        p("pointer-events", "pointer-events").keywords(&["none", "auto"]),
        p("resize", "resize").bare().keywords(&["none", "y", "x"]),
        p("scroll-behavior", "scroll").keywords(&["auto", "smooth"]),
        p("snap-align", "snap").keywords(&["start", "end", "center", "align-none"]),
        p("snap-type", "snap").keywords(&["none", "x", "y", "both"]),
        p("snap-strictness", "snap").keywords(&["mandatory", "proximity"]),
        p("touch", "touch").keywords(&["auto", "none", "manipulation"]),
        p("select", "select").keywords(&["none", "text", "all", "auto"]),
        p("will-change", "will-change").keywords(&["auto", "scroll", "contents", "transform"]).kinds(&[K::Arbitrary]),
    ]);

    // Tables, SVG and accessibility
    rules.extend([
        p("table-layout", "table").keywords(&["auto", "fixed"]),
        p("caption", "caption").keywords(&["top", "bottom"]),
        p("fill", "fill").keywords(&["none"]).kinds(COLOR),
        p("stroke-w", "stroke").kinds(&[K::Length, K::ArbitraryLength, K::ArbitraryNumber]),
        p("stroke", "stroke").keywords(&["none"]).kinds(COLOR),
        GroupRule::exact("sr", &["sr-only", "not-sr-only"]),
        p("forced-color-adjust", "forced-color-adjust").keywords(&["auto", "none"]),
    ]);

    rules
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(class: &str) -> Option<String> {
        default_table().lookup(class).map(str::to_string)
    }

    #[test]
    fn test_spacing_groups() {
        assert_eq!(group("px-4").as_deref(), Some("px"));
        assert_eq!(group("py-2").as_deref(), Some("py"));
        assert_eq!(group("p-0.5").as_deref(), Some("p"));
        assert_eq!(group("m-auto").as_deref(), Some("m"));
        assert_eq!(group("px-[3px]").as_deref(), Some("px"));
    }

    #[test]
    fn test_text_disambiguation() {
        assert_eq!(group("text-lg").as_deref(), Some("font-size"));
        assert_eq!(group("text-base").as_deref(), Some("font-size"));
        assert_eq!(group("text-center").as_deref(), Some("text-alignment"));
        assert_eq!(group("text-red-500").as_deref(), Some("text-color"));
        assert_eq!(group("text-[12px]").as_deref(), Some("font-size"));
        assert_eq!(group("text-[#fff]").as_deref(), Some("text-color"));
        assert_eq!(group("text-ellipsis").as_deref(), Some("text-overflow"));
    }

    #[test]
    fn test_background_disambiguation() {
        assert_eq!(group("bg-cover").as_deref(), Some("bg-size"));
        assert_eq!(group("bg-center").as_deref(), Some("bg-position"));
        assert_eq!(group("bg-repeat-x").as_deref(), Some("bg-repeat"));
        assert_eq!(group("bg-gradient-to-r").as_deref(), Some("bg-image"));
        assert_eq!(group("bg-[url(/a.png)]").as_deref(), Some("bg-image"));
        assert_eq!(group("bg-blue-500").as_deref(), Some("bg-color"));
    }

    #[test]
    fn test_border_disambiguation() {
        assert_eq!(group("border").as_deref(), Some("border-w"));
        assert_eq!(group("border-2").as_deref(), Some("border-w"));
        assert_eq!(group("border-t-2").as_deref(), Some("border-w-t"));
        assert_eq!(group("border-dashed").as_deref(), Some("border-style"));
        assert_eq!(group("border-red-500").as_deref(), Some("border-color"));
        assert_eq!(group("border-t-red-500").as_deref(), Some("border-color-t"));
        assert_eq!(group("border-collapse").as_deref(), Some("border-collapse"));
    }

    #[test]
    fn test_flex_disambiguation() {
        assert_eq!(group("flex").as_deref(), Some("display"));
        assert_eq!(group("flex-1").as_deref(), Some("flex"));
        assert_eq!(group("flex-row").as_deref(), Some("flex-direction"));
        assert_eq!(group("flex-wrap").as_deref(), Some("flex-wrap"));
        assert_eq!(group("grow").as_deref(), Some("grow"));
    }

    #[test]
    fn test_ring_and_shadow() {
        assert_eq!(group("ring").as_deref(), Some("ring-w"));
        assert_eq!(group("ring-2").as_deref(), Some("ring-w"));
        assert_eq!(group("ring-offset-2").as_deref(), Some("ring-offset-w"));
        assert_eq!(group("ring-blue-500").as_deref(), Some("ring-color"));
        assert_eq!(group("shadow").as_deref(), Some("shadow"));
        assert_eq!(group("shadow-lg").as_deref(), Some("shadow"));
        assert_eq!(group("shadow-red-500").as_deref(), Some("shadow-color"));
    }

    #[test]
    fn test_font_weight_before_family() {
        assert_eq!(group("font-bold").as_deref(), Some("font-weight"));
        assert_eq!(group("font-sans").as_deref(), Some("font-family"));
    }

    #[test]
    fn test_unknown_classes() {
        assert_eq!(group("base-class"), None);
        assert_eq!(group("active-class"), None);
        assert_eq!(group("btn"), None);
    }

    #[test]
    fn test_every_conflict_names_a_group() {
        let table = default_table();
        for (group, overridden) in DEFAULT_CONFLICTS.iter().chain(DEFAULT_POSTFIX_CONFLICTS) {
            assert!(table.has_group(group), "unknown group {group}");
            for other in *overridden {
                assert!(table.has_group(other), "unknown group {other}");
            }
        }
    }
}
