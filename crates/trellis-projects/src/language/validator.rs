//! Language-tag validity service.
//!
//! [`RegistryValidator`] checks BCP 47 tags case-insensitively against the
//! ISO 639 (via `isolang`) and ISO 3166-1 (via `isocountry`) registries plus
//! the script, UN M.49 region and variant subtags registered for BCP 47.
//! Extension and private-use sections are checked for syntax only.

use isocountry::CountryCode;
use isolang::Language;

/// Outcome of a validity check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation {
    pub is_valid: bool,
    /// Why the tag was rejected; always present when `is_valid` is false
    pub explanation: Option<String>,
}

impl Validation {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            explanation: None,
        }
    }

    pub fn invalid(explanation: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            explanation: Some(explanation.into()),
        }
    }
}

/// Decides whether a string is a recognized human-language tag
pub trait LanguageCodeValidator: Send + Sync {
    /// Validate `tag`, ignoring case
    fn validate(&self, tag: &str) -> Validation;
}

/// Registry-backed BCP 47 validator
#[derive(Debug, Default, Clone, Copy)]
pub struct RegistryValidator;

impl RegistryValidator {
    pub fn new() -> Self {
        Self
    }
}

impl LanguageCodeValidator for RegistryValidator {
    fn validate(&self, tag: &str) -> Validation {
        match check_tag(tag) {
            Ok(()) => Validation::valid(),
            Err(explanation) => Validation::invalid(explanation),
        }
    }
}

/// Tags registered as a whole rather than subtag by subtag
const GRANDFATHERED: &[&str] = &[
    "art-lojban",
    "cel-gaulish",
    "en-gb-oed",
    "i-ami",
    "i-bnn",
    "i-default",
    "i-enochian",
    "i-hak",
    "i-klingon",
    "i-lux",
    "i-mingo",
    "i-navajo",
    "i-pwn",
    "i-tao",
    "i-tay",
    "i-tsu",
    "no-bok",
    "no-nyn",
    "sgn-be-fr",
    "sgn-be-nl",
    "sgn-ch-de",
    "zh-guoyu",
    "zh-hakka",
    "zh-min",
    "zh-min-nan",
    "zh-xiang",
];

/// ISO 15924 script codes, lowercase
const SCRIPTS: &[&str] = &[
    "adlm", "afak", "aghb", "ahom", "arab", "aran", "armi", "armn", "avst", "bali", "bamu",
    "bass", "batk", "beng", "bhks", "blis", "bopo", "brah", "brai", "bugi", "buhd", "cakm",
    "cans", "cari", "cham", "cher", "chrs", "cirt", "copt", "cpmn", "cprt", "cyrl", "cyrs",
    "deva", "diak", "dogr", "dsrt", "dupl", "egyd", "egyh", "egyp", "elba", "elym", "ethi",
    "geok", "geor", "glag", "gong", "gonm", "goth", "gran", "grek", "gujr", "guru", "hanb",
    "hang", "hani", "hano", "hans", "hant", "hatr", "hebr", "hira", "hluw", "hmng", "hmnp",
    "hrkt", "hung", "inds", "ital", "jamo", "java", "jpan", "jurc", "kali", "kana", "kawi",
    "khar", "khmr", "khoj", "kitl", "kits", "knda", "kore", "kpel", "kthi", "lana", "laoo",
    "latf", "latg", "latn", "leke", "lepc", "limb", "lina", "linb", "lisu", "loma", "lyci",
    "lydi", "mahj", "maka", "mand", "mani", "marc", "maya", "medf", "mend", "merc", "mero",
    "mlym", "modi", "mong", "moon", "mroo", "mtei", "mult", "mymr", "nagm", "nand", "narb",
    "nbat", "newa", "nkdb", "nkgb", "nkoo", "nshu", "ogam", "olck", "orkh", "orya", "osge",
    "osma", "ougr", "palm", "pauc", "pcun", "pelm", "perm", "phag", "phli", "phlp", "phlv",
    "phnx", "piqd", "plrd", "prti", "psin", "ranj", "rjng", "rohg", "roro", "runr", "samr",
    "sara", "sarb", "saur", "sgnw", "shaw", "shrd", "shui", "sidd", "sind", "sinh", "sogd",
    "sogo", "sora", "soyo", "sund", "sunu", "sylo", "syrc", "syre", "syrj", "syrn", "tagb",
    "takr", "tale", "talu", "taml", "tang", "tavt", "telu", "teng", "tfng", "tglg", "thaa",
    "thai", "tibt", "tirh", "tnsa", "toto", "ugar", "vaii", "visp", "vith", "wara", "wcho",
    "wole", "xpeo", "xsux", "yezi", "yiii", "zanb", "zinh", "zmth", "zsye", "zsym", "zxxx",
    "zyyy", "zzzz",
];

/// Alphabetic region subtags registered outside ISO 3166-1
const EXTRA_REGIONS: &[&str] = &["EU", "EZ", "UN"];

/// UN M.49 area codes registered as region subtags
const UN_M49_REGIONS: &[&str] = &[
    "001", "002", "003", "005", "009", "011", "013", "014", "015", "017", "018", "019", "021",
    "029", "030", "034", "035", "039", "053", "054", "057", "061", "142", "143", "145", "150",
    "151", "154", "155", "202", "419",
];

/// Registered variant subtags, lowercase
const VARIANTS: &[&str] = &[
    "1606nict", "1694acad", "1901", "1959acad", "1994", "1996", "abl1943", "akuapem",
    "alalc97", "aluku", "ao1990", "aranes", "arevela", "arevmda", "arkaika", "asante", "auvern",
    "baku1926", "balanka", "barla", "basiceng", "bauddha", "biscayan", "biske", "bohoric",
    "boont", "bornholm", "cisaup", "colb1945", "cornu", "creiss", "dajnko", "ekavsk",
    "emodeng", "fonipa", "fonkirsh", "fonnapa", "fonupa", "fonxsamp", "gascon", "grclass",
    "grital", "grmistr", "hepburn", "heploc", "hognorsk", "hsistemo", "ijekavsk", "itihasa",
    "ivanchov", "jauer", "jyutping", "kkcor", "kociewie", "kscor", "laukika", "lemosin",
    "lengadoc", "lipaw", "luna1918", "metelko", "monoton", "ndyuka", "nedis", "newfound",
    "nicard", "njiva", "nulik", "osojs", "oxendict", "pahawh2", "pahawh3", "pahawh4", "pamaka",
    "peano", "petr1708", "pinyin", "polyton", "provenc", "puter", "rigik", "rozaj", "rumgr",
    "scotland", "scouse", "simple", "solba", "sotav", "spanglis", "surmiran", "sursilv",
    "sutsilv", "synnejyl", "tarask", "tongyong", "tunumiit", "uccor", "ucrcor", "ulster",
    "unifon", "vaidika", "valencia", "vallader", "vecdruka", "vivaraup", "wadegile",
    "xsistemo",
];

fn is_alpha(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_alphabetic())
}

fn is_digit(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

fn check_tag(tag: &str) -> Result<(), String> {
    if tag.is_empty() {
        return Err("A language code must not be empty.".to_string());
    }
    if tag.chars().any(char::is_whitespace) {
        return Err(format!("`{}` contains whitespace.", tag));
    }

    let lower = tag.to_ascii_lowercase();
    if GRANDFATHERED.contains(&lower.as_str()) {
        return Ok(());
    }

    let subtags: Vec<&str> = lower.split('-').collect();
    for subtag in &subtags {
        if subtag.is_empty() {
            return Err(format!("`{}` contains an empty subtag.", tag));
        }
        if !subtag.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return Err(format!(
                "`{}` may only contain letters, digits and hyphens.",
                tag
            ));
        }
        if subtag.len() > 8 {
            return Err(format!(
                "The subtag `{}` in `{}` is longer than 8 characters.",
                subtag, tag
            ));
        }
    }

    if subtags[0] == "x" {
        return check_private_use(tag, &subtags[1..]);
    }

    let language = subtags[0];
    check_language(language)?;
    let mut i = 1;

    // extlang
    let mut extlangs = 0;
    while i < subtags.len() && extlangs < 3 && subtags[i].len() == 3 && is_alpha(subtags[i]) {
        if Language::from_639_3(subtags[i]).is_none() {
            return Err(format!(
                "The extended language subtag `{}` is not a recognized ISO 639-3 code.",
                subtags[i]
            ));
        }
        extlangs += 1;
        i += 1;
    }

    // script
    if i < subtags.len() && subtags[i].len() == 4 && is_alpha(subtags[i]) {
        if !is_script(subtags[i]) {
            return Err(format!(
                "The script subtag `{}` is not a recognized ISO 15924 code.",
                subtags[i]
            ));
        }
        i += 1;
    }

    // region
    if i < subtags.len() {
        let candidate = subtags[i];
        if candidate.len() == 2 && is_alpha(candidate) {
            let upper = candidate.to_ascii_uppercase();
            if CountryCode::for_alpha2(&upper).is_err() && !EXTRA_REGIONS.contains(&upper.as_str())
            {
                return Err(format!(
                    "The region subtag `{}` is not a recognized ISO 3166-1 country code.",
                    upper
                ));
            }
            i += 1;
        } else if candidate.len() == 3 && is_digit(candidate) {
            if !UN_M49_REGIONS.contains(&candidate) {
                return Err(format!(
                    "The region subtag `{}` is not a recognized UN M.49 area code.",
                    candidate
                ));
            }
            i += 1;
        }
    }

    // variants
    let mut seen_variants: Vec<&str> = Vec::new();
    while i < subtags.len() && is_variant_syntax(subtags[i]) {
        let variant = subtags[i];
        if !VARIANTS.contains(&variant) {
            return Err(format!(
                "The variant subtag `{}` is not registered.",
                variant
            ));
        }
        if seen_variants.contains(&variant) {
            return Err(format!("The variant subtag `{}` is repeated.", variant));
        }
        seen_variants.push(variant);
        i += 1;
    }

    // extensions
    let mut seen_singletons: Vec<&str> = Vec::new();
    while i < subtags.len() && subtags[i].len() == 1 && subtags[i] != "x" {
        let singleton = subtags[i];
        if seen_singletons.contains(&singleton) {
            return Err(format!("The extension `{}` is repeated.", singleton));
        }
        seen_singletons.push(singleton);
        i += 1;

        let start = i;
        while i < subtags.len() && subtags[i].len() >= 2 {
            i += 1;
        }
        if i == start {
            return Err(format!(
                "The extension `{}` in `{}` has no subtags.",
                singleton, tag
            ));
        }
    }

    // private use
    if i < subtags.len() && subtags[i] == "x" {
        return check_private_use(tag, &subtags[i + 1..]);
    }

    if i < subtags.len() {
        return Err(format!(
            "Unexpected subtag `{}` in `{}`.",
            subtags[i], tag
        ));
    }

    Ok(())
}

fn check_language(language: &str) -> Result<(), String> {
    if !is_alpha(language) {
        return Err(format!(
            "The language subtag `{}` must consist of letters only.",
            language
        ));
    }

    match language.len() {
        2 => Language::from_639_1(language).map(|_| ()).ok_or_else(|| {
            format!(
                "The language subtag `{}` is not a recognized ISO 639-1 code.",
                language
            )
        }),
        3 => match Language::from_639_3(language) {
            Some(lang) => match lang.to_639_1() {
                Some(short) => Err(format!(
                    "The language subtag `{}` must be written as its ISO 639-1 equivalent `{}`.",
                    language, short
                )),
                None => Ok(()),
            },
            None => Err(format!(
                "The language subtag `{}` is not a recognized ISO 639-3 code.",
                language
            )),
        },
        4 => Err(format!(
            "The language subtag `{}` uses a length reserved for future use.",
            language
        )),
        _ => Err(format!(
            "The language subtag `{}` is not registered.",
            language
        )),
    }
}

fn check_private_use(tag: &str, rest: &[&str]) -> Result<(), String> {
    if rest.is_empty() {
        return Err(format!("The private use section of `{}` is empty.", tag));
    }
    Ok(())
}

fn is_script(subtag: &str) -> bool {
    // Qaaa..Qabx are reserved for private use
    let bytes = subtag.as_bytes();
    let private = bytes[0] == b'q'
        && bytes[1] == b'a'
        && matches!(bytes[2], b'a'..=b'b');
    private || SCRIPTS.contains(&subtag)
}

fn is_variant_syntax(subtag: &str) -> bool {
    match subtag.len() {
        5..=8 => true,
        4 => subtag.as_bytes()[0].is_ascii_digit(),
        _ => false,
    }
}
