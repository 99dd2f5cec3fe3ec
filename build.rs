use serde::Deserialize;
use std::collections::BTreeSet;
use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const PUBLIC_DIR: &str = "public";
const SITE_CONFIG: &str = "site.json";

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct SiteConfig {
    links: LinkTable,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct LinkTable {
    #[serde(rename = "Youtube")]
    youtube: String,
    #[serde(rename = "Instagram")]
    instagram: String,
    #[serde(rename = "X")]
    x: String,
    #[serde(rename = "Behance")]
    behance: String,
    #[serde(rename = "CV")]
    cv: String,
}

impl LinkTable {
    fn entries(&self) -> [(&'static str, &'static str, &str); 5] {
        [
            ("Youtube", "YOUTUBE_URL", &self.youtube),
            ("Instagram", "INSTAGRAM_URL", &self.instagram),
            ("X", "X_URL", &self.x),
            ("Behance", "BEHANCE_URL", &self.behance),
            ("CV", "CV_URL", &self.cv),
        ]
    }
}

fn main() {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap());
    let public_dir = manifest_dir.join(PUBLIC_DIR);
    let config_path = manifest_dir.join(SITE_CONFIG);

    println!("cargo:rerun-if-changed={}", config_path.display());
    println!("cargo:rerun-if-changed={}", public_dir.display());

    let assets = collect_assets(&public_dir);

    let raw = fs::read_to_string(&config_path)
        .unwrap_or_else(|e| panic!("cannot read {}: {e}", config_path.display()));
    let config: SiteConfig = serde_json::from_str(&raw)
        .unwrap_or_else(|e| panic!("invalid {SITE_CONFIG}: {e}"));

    let mut out = String::new();
    for (key, const_name, url) in config.links.entries() {
        check_link(key, url, &assets);
        writeln!(out, "pub(crate) const {const_name}: &str = {url:?};").unwrap();
    }

    writeln!(out, "pub(crate) const ASSET_PATHS: &[&str] = &[").unwrap();
    for asset in &assets {
        writeln!(out, "    {asset:?},").unwrap();
    }
    writeln!(out, "];").unwrap();

    let out_path = PathBuf::from(env::var("OUT_DIR").unwrap()).join("site_config.rs");
    fs::write(&out_path, out).unwrap();
}

/// Root-relative paths of every file under `public/`, sorted.
fn collect_assets(public_dir: &Path) -> BTreeSet<String> {
    let mut assets = BTreeSet::new();
    if !public_dir.is_dir() {
        return assets;
    }
    for entry in WalkDir::new(public_dir).into_iter().filter_map(Result::ok) {
        if !entry.file_type().is_file() {
            continue;
        }
        println!("cargo:rerun-if-changed={}", entry.path().display());
        let relative = entry.path().strip_prefix(public_dir).unwrap();
        let web_path = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        assets.insert(format!("/{web_path}"));
    }
    assets
}

fn check_link(key: &str, url: &str, assets: &BTreeSet<String>) {
    if url.trim().is_empty() {
        panic!("{SITE_CONFIG}: link `{key}` is empty");
    }
    if url.starts_with("https://") || url.starts_with("http://") {
        return;
    }
    if url.starts_with('/') {
        if !assets.contains(url) {
            panic!("{SITE_CONFIG}: link `{key}` points at {url}, which is not under {PUBLIC_DIR}/");
        }
        return;
    }
    panic!("{SITE_CONFIG}: link `{key}` must be an http(s) URL or a root-relative path, got {url:?}");
}
