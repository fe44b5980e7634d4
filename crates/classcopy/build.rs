use std::process::Command;

use chrono::Utc;

const RELEASE_TAG_PREFIX: &str = "classcopy@v";

fn main() {
    println!("cargo:rerun-if-changed=../../.git/HEAD");
    println!("cargo:rerun-if-changed=../../.git/refs/");

    let version = env!("CARGO_PKG_VERSION");
    let version_string = match git(&["rev-parse", "--short", "HEAD"]) {
        Some(_) if is_tagged_release(version) => version.to_owned(),
        Some(hash) => format!("{version}+{hash}.{}", build_date()),
        None => format!("{version}+unknown.{}", build_date()),
    };

    println!("cargo:rustc-env=CLASSCOPY_VERSION={version_string}");
}

fn build_date() -> String {
    Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    Some(String::from_utf8(output.stdout).ok()?.trim().to_owned())
}

fn is_tagged_release(version: &str) -> bool {
    let expected = format!("{RELEASE_TAG_PREFIX}{version}");
    git(&["tag", "--points-at", "HEAD"])
        .is_some_and(|tags| tags.lines().any(|tag| tag.trim() == expected))
}
