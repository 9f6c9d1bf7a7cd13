//! Technology names that users mistake for `--lang` values.
//!
//! Language names, aliases, file extensions and versioned spec names of
//! scripting, markup, template and stylesheet technologies. Entries are
//! lowercase; lookups trim and lowercase the input. The common `emcascript`
//! misspelling is listed next to each `ecmascript` entry.
//!
//! A few entries are also valid language codes and are accepted as such:
//! `ts` (Tsonga), `xml` (Malaysian Sign Language), `xht` (Hattic) and
//! `css` (Costanoan).

use std::collections::HashSet;
use std::sync::LazyLock;

/// Every recognized technology term
pub const TECHNOLOGY_TERMS: &[&str] = &[
    // Scripting
    "javascript",
    ".js",
    "js",
    "ecmascript2015",
    "emcascript2015",
    "ecmascript6",
    "emcascript6",
    "es6",
    "ecmascript2016",
    "emcascript2016",
    "ecmascript7",
    "emcascript7",
    "es7",
    "ecmascript2017",
    "emcascript2017",
    "ecmascript8",
    "emcascript8",
    "es8",
    "ecmascript2018",
    "emcascript2018",
    "ecmascript9",
    "emcascript9",
    "es9",
    "ecmascript2019",
    "emcascript2019",
    "ecmascript10",
    "emcascript10",
    "es10",
    "typescript",
    ".ts",
    "ts",
    "node.js",
    "node",
    // Templates
    "handlebars",
    ".hbs",
    "hbs",
    "glimmer",
    "glimmer.js",
    "glimmer-vm",
    // Markup
    "markdown",
    "markup",
    "html5",
    "html4",
    ".md",
    ".html",
    ".htm",
    ".xhtml",
    ".xml",
    ".xht",
    "md",
    "html",
    "htm",
    "xhtml",
    "xml",
    "xht",
    // Stylesheets
    ".sass",
    ".scss",
    ".css",
    "sass",
    "scss",
    "css",
];

static TERM_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| TECHNOLOGY_TERMS.iter().copied().collect());

/// Whether `input` names a programming/markup/styling technology
pub fn is_technology_term(input: &str) -> bool {
    TERM_SET.contains(input.trim().to_lowercase().as_str())
}
