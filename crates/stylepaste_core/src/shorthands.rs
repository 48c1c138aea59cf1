use phf::{phf_map, phf_set, Map, Set};

/// Spacing scale of the `sx` dialect: `theme.spacing(1)` is `8px`
pub const SPACING_UNIT: f64 = 8.0;

/// Border widths in the `sx` dialect are multiples of this unit
pub const BORDER_UNIT: f64 = 4.0;

/// Property names of the `sx` prop which have a shorter alias.
/// Both camelCase and kebab-case keys are present, lookup is exact.
pub static SHORTHANDS: Map<&'static str, &'static str> = phf_map! {
    // Margins
    "margin" => "m",
    "marginTop" => "mt",
    "margin-top" => "mt",
    "marginRight" => "mr",
    "margin-right" => "mr",
    "marginBottom" => "mb",
    "margin-bottom" => "mb",
    "marginLeft" => "ml",
    "margin-left" => "ml",

    // Paddings
    "padding" => "p",
    "paddingTop" => "pt",
    "padding-top" => "pt",
    "paddingRight" => "pr",
    "padding-right" => "pr",
    "paddingBottom" => "pb",
    "padding-bottom" => "pb",
    "paddingLeft" => "pl",
    "padding-left" => "pl",

    // Colors and backgrounds
    "backgroundColor" => "bgcolor",
    "background-color" => "bgcolor",
};

/// Properties (after shorthand substitution) measured in spacing units
pub static SPACING_PROPERTIES: Set<&'static str> = phf_set! {
    // Margins
    "m",
    "mt",
    "mr",
    "mb",
    "ml",
    // Paddings
    "p",
    "pt",
    "pr",
    "pb",
    "pl",
    // Grid gaps
    "gap",
    "rowGap",
    "columnGap",
};

/// Properties where `50%` becomes the fraction `0.5`
pub static PERCENTAGE_PROPERTIES: Set<&'static str> = phf_set! {
    "width",
    "height",
    "maxWidth",
    "maxHeight",
    "minWidth",
    "minHeight",
};

/// Properties (before shorthand substitution) which accept
/// the four-sided `top right bottom left` form
pub static BOX_SHORTHANDS: Set<&'static str> = phf_set! {
    "margin",
    "padding",
};

/// Editor language identifiers where pasted CSS may be converted
pub static SUPPORTED_LANGUAGES: Set<&'static str> = phf_set! {
    "javascript",
    "typescript",
    "javascriptreact",
    "typescriptreact",
};

/// Looks up the `sx` alias of a property, e.g. `marginTop` -> `mt`
#[inline]
pub fn shorthand_for(property: &str) -> Option<&'static str> {
    SHORTHANDS.get(property).copied()
}

#[inline]
pub fn is_spacing_property(property: &str) -> bool {
    SPACING_PROPERTIES.contains(property)
}

#[inline]
pub fn is_percentage_property(property: &str) -> bool {
    PERCENTAGE_PROPERTIES.contains(property)
}

#[inline]
pub fn is_box_shorthand(property: &str) -> bool {
    BOX_SHORTHANDS.contains(property)
}

#[inline]
pub fn is_supported_language(language_id: &str) -> bool {
    SUPPORTED_LANGUAGES.contains(language_id)
}
