//! Detection rule tables for the URL, contact and text quality analyzers.
//!
//! Every list is plain data with a serde default, so a `.scamscan.toml` can
//! replace any of them while leaving the rest untouched.

use serde::{Deserialize, Serialize};

/// Suspicious-domain heuristics for the URL analyzer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlRules {
    #[serde(default = "default_shorteners")]
    pub shorteners: Vec<String>,

    /// Substrings that make a host look like a credential-harvesting page.
    #[serde(default = "default_domain_keywords")]
    pub domain_keywords: Vec<String>,

    /// Brands commonly impersonated by typosquatted hosts.
    #[serde(default = "default_brands")]
    pub brands: Vec<String>,

    /// Public suffixes spanning two labels (`co.uk`), used when deriving
    /// the registrable domain.
    #[serde(default = "default_two_level_suffixes")]
    pub two_level_suffixes: Vec<String>,

    #[serde(default = "default_one")]
    pub shortener_points: u32,

    #[serde(default = "default_one")]
    pub keyword_points: u32,

    #[serde(default = "default_one")]
    pub typosquat_points: u32,

    #[serde(default = "default_one")]
    pub ip_host_points: u32,
}

impl Default for UrlRules {
    fn default() -> Self {
        Self {
            shorteners: default_shorteners(),
            domain_keywords: default_domain_keywords(),
            brands: default_brands(),
            two_level_suffixes: default_two_level_suffixes(),
            shortener_points: default_one(),
            keyword_points: default_one(),
            typosquat_points: default_one(),
            ip_host_points: default_one(),
        }
    }
}

/// Contact pattern rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRules {
    #[serde(default = "default_disposable_domains")]
    pub disposable_domains: Vec<String>,

    /// Points when a phone number and an email appear together.
    #[serde(default = "default_two")]
    pub multi_channel_points: u32,

    /// Points when any email uses a disposable provider.
    #[serde(default = "default_two")]
    pub disposable_email_points: u32,
}

impl Default for ContactRules {
    fn default() -> Self {
        Self {
            disposable_domains: default_disposable_domains(),
            multi_channel_points: default_two(),
            disposable_email_points: default_two(),
        }
    }
}

/// Text quality thresholds, dictionaries and penalties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityRules {
    /// Uppercase share of letters above which the text counts as shouting.
    #[serde(default = "default_caps_ratio")]
    pub caps_ratio_threshold: f64,

    /// Texts with fewer letters are too short for the caps ratio to mean
    /// anything.
    #[serde(default = "default_min_letters")]
    pub min_letters_for_caps: usize,

    #[serde(default = "default_exclamation_threshold")]
    pub exclamation_threshold: usize,

    #[serde(default = "default_one_usize")]
    pub misspelling_threshold: usize,

    #[serde(default = "default_text_speak_threshold")]
    pub text_speak_threshold: usize,

    /// Risk points added for each metric that crosses its threshold.
    #[serde(default = "default_one")]
    pub penalty_points: u32,

    #[serde(default = "default_misspellings")]
    pub misspellings: Vec<String>,

    #[serde(default = "default_text_speak")]
    pub text_speak: Vec<String>,
}

impl Default for QualityRules {
    fn default() -> Self {
        Self {
            caps_ratio_threshold: default_caps_ratio(),
            min_letters_for_caps: default_min_letters(),
            exclamation_threshold: default_exclamation_threshold(),
            misspelling_threshold: default_one_usize(),
            text_speak_threshold: default_text_speak_threshold(),
            penalty_points: default_one(),
            misspellings: default_misspellings(),
            text_speak: default_text_speak(),
        }
    }
}

fn default_one() -> u32 {
    1
}
fn default_two() -> u32 {
    2
}
fn default_one_usize() -> usize {
    1
}
fn default_caps_ratio() -> f64 {
    0.3
}
fn default_min_letters() -> usize {
    10
}
fn default_exclamation_threshold() -> usize {
    3
}
fn default_text_speak_threshold() -> usize {
    2
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn default_shorteners() -> Vec<String> {
    strings(&[
        "bit.ly",
        "tinyurl.com",
        "goo.gl",
        "ow.ly",
        "is.gd",
        "buff.ly",
        "t.co",
        "tiny.cc",
        "rb.gy",
        "cutt.ly",
        "shorturl.at",
        "rebrand.ly",
        "t.ly",
    ])
}

pub fn default_domain_keywords() -> Vec<String> {
    strings(&[
        "verify", "secure", "login", "signin", "account", "update", "confirm", "banking",
        "wallet", "billing", "support",
    ])
}

pub fn default_brands() -> Vec<String> {
    strings(&[
        "paypal",
        "amazon",
        "apple",
        "microsoft",
        "google",
        "netflix",
        "facebook",
        "instagram",
        "wellsfargo",
        "chase",
        "bankofamerica",
        "fedex",
        "usps",
        "dhl",
    ])
}

pub fn default_two_level_suffixes() -> Vec<String> {
    strings(&[
        "co.uk", "org.uk", "ac.uk", "gov.uk", "com.au", "net.au", "co.nz", "co.jp", "co.in",
        "com.br", "com.cn", "com.mx", "co.za",
    ])
}

pub fn default_disposable_domains() -> Vec<String> {
    strings(&[
        "mailinator.com",
        "guerrillamail.com",
        "10minutemail.com",
        "tempmail.com",
        "temp-mail.org",
        "yopmail.com",
        "trashmail.com",
        "throwawaymail.com",
        "getnada.com",
        "sharklasers.com",
        "dispostable.com",
        "maildrop.cc",
    ])
}

pub fn default_misspellings() -> Vec<String> {
    strings(&[
        "recieve",
        "acount",
        "verfy",
        "pasword",
        "securty",
        "imediately",
        "congradulations",
        "guarentee",
        "buisness",
        "informations",
        "adress",
        "succesful",
        "acess",
        "untill",
    ])
}

pub fn default_text_speak() -> Vec<String> {
    strings(&[
        "u", "ur", "r", "pls", "plz", "thx", "txt", "msg", "cuz", "b4", "gr8", "2day", "4u",
        "luv", "wat",
    ])
}
