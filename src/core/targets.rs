// CleanSlate - core/targets.rs
//
// Static path-template table: where each cleanup target keeps its
// profile/session data on each platform, and how much of it is swept.
// Compiled in; never mutated at runtime. All roots are relative to the
// user's home directory, which is injected by the caller.

use crate::core::model::{Browser, DesktopApp, Platform};
use std::path::{Path, PathBuf};

/// Which parts of a target root are deleted by a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepScope {
    /// Delete only these named entries directly under the root. An entry may
    /// be a file (e.g. a SQLite database) or a directory (e.g. a cache);
    /// directories are removed recursively.
    Entries(&'static [&'static str]),

    /// Delete everything inside the root. The root directory itself is kept
    /// so the owning application can recreate its contents cleanly.
    AllContents,
}

/// A resolved cleanup target: a concrete root directory plus sweep scope.
#[derive(Debug, Clone)]
pub struct TargetSpec {
    pub root: PathBuf,
    pub scope: SweepScope,
}

/// Session-bearing entries inside a Chromium-family profile directory.
/// History and Login Data are SQLite files; the rest are directories.
const CHROMIUM_PROFILE_ENTRIES: &[&str] = &[
    "History",
    "Cookies",
    "Login Data",
    "Cache",
    "Code Cache",
    "Local Storage",
];

/// Session files GitHub Desktop keeps in its application-support directory.
/// Deleting them forces re-authentication on next launch.
const GITHUB_DESKTOP_SESSION_ENTRIES: &[&str] = &[
    "git-credential-desktop.json",
    "Cookies",
    "Session Storage",
    "Local Storage",
];

/// Windows Credential Manager entries related to the targets above, removed
/// best-effort via `cmdkey /delete` during sign-out on Windows.
pub const WINDOWS_CREDENTIAL_TARGETS: &[&str] = &["git:", "github", "chrome", "edge"];

/// Resolve the profile target for a browser on a platform.
///
/// Chromium-family browsers sweep a fixed entry list inside the default
/// profile; Firefox keeps per-profile subdirectories under one Profiles
/// root, all of which are swept.
pub fn browser_target(browser: Browser, platform: Platform, home: &Path) -> TargetSpec {
    match browser {
        Browser::Chrome => TargetSpec {
            root: match platform {
                Platform::Windows => home
                    .join("AppData")
                    .join("Local")
                    .join("Google")
                    .join("Chrome")
                    .join("User Data")
                    .join("Default"),
                Platform::MacOs => home
                    .join("Library")
                    .join("Application Support")
                    .join("Google")
                    .join("Chrome")
                    .join("Default"),
                Platform::Linux => home.join(".config").join("google-chrome").join("Default"),
            },
            scope: SweepScope::Entries(CHROMIUM_PROFILE_ENTRIES),
        },
        Browser::Edge => TargetSpec {
            root: match platform {
                Platform::Windows => home
                    .join("AppData")
                    .join("Local")
                    .join("Microsoft")
                    .join("Edge")
                    .join("User Data")
                    .join("Default"),
                Platform::MacOs => home
                    .join("Library")
                    .join("Application Support")
                    .join("Microsoft Edge")
                    .join("Default"),
                Platform::Linux => home.join(".config").join("microsoft-edge").join("Default"),
            },
            scope: SweepScope::Entries(CHROMIUM_PROFILE_ENTRIES),
        },
        Browser::Firefox => TargetSpec {
            root: match platform {
                Platform::Windows => home
                    .join("AppData")
                    .join("Roaming")
                    .join("Mozilla")
                    .join("Firefox")
                    .join("Profiles"),
                Platform::MacOs => home
                    .join("Library")
                    .join("Application Support")
                    .join("Firefox")
                    .join("Profiles"),
                Platform::Linux => home.join(".mozilla").join("firefox"),
            },
            scope: SweepScope::AllContents,
        },
    }
}

/// Resolve the session-storage target for a desktop application.
pub fn app_session_target(app: DesktopApp, platform: Platform, home: &Path) -> TargetSpec {
    match app {
        DesktopApp::GithubDesktop => TargetSpec {
            root: match platform {
                Platform::Windows => home
                    .join("AppData")
                    .join("Roaming")
                    .join("GitHub Desktop"),
                Platform::MacOs => home
                    .join("Library")
                    .join("Application Support")
                    .join("GitHub Desktop"),
                Platform::Linux => home.join(".config").join("GitHub Desktop"),
            },
            scope: SweepScope::Entries(GITHUB_DESKTOP_SESSION_ENTRIES),
        },
    }
}
