//! Side-effecting actions from the doctor list: call, directions and
//! copy-address.
//!
//! Directions and copy never fail from the caller's point of view. A
//! failed open degrades to the full list of map links, and a failed
//! clipboard write degrades to showing the address as text. Only
//! `call_doctor` reports an error.

use std::io::Write;
use std::process::{Command, Stdio};

use serde::Serialize;

pub const DIRECTIONS_FALLBACK_MESSAGE: &str = "Pop-up blocked. Please allow pop-ups or copy \
    the address to open in your preferred map app.";
pub const ADDRESS_COPIED_MESSAGE: &str =
    "Address copied to clipboard. Paste it in your map app.";

#[derive(Debug, thiserror::Error)]
pub enum ActionError {
    #[error("Failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{program} exited with status {code:?}")]
    ExitStatus { program: String, code: Option<i32> },
    #[error("No helper available for this platform")]
    NoHelper,
}

// ═══════════════════════════════════════════
// Platform seams
// ═══════════════════════════════════════════

/// Hands a URL (https:, tel:) to the platform.
pub trait UrlOpener: Send + Sync {
    fn open(&self, url: &str) -> Result<(), ActionError>;
}

pub trait Clipboard: Send + Sync {
    fn write_text(&self, text: &str) -> Result<(), ActionError>;
}

/// Opens URLs with the desktop's default handler.
///
/// The handler is spawned and left running. A successful spawn counts as
/// opened; its exit status is never consulted (`explorer` exits 1 on
/// success).
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemOpener;

impl UrlOpener for SystemOpener {
    fn open(&self, url: &str) -> Result<(), ActionError> {
        #[cfg(target_os = "windows")]
        let (program, args) = ("explorer", vec![url]);
        #[cfg(target_os = "macos")]
        let (program, args) = ("open", vec![url]);
        #[cfg(not(any(target_os = "windows", target_os = "macos")))]
        let (program, args) = ("xdg-open", vec![url]);

        spawn_detached(program, &args)
    }
}

/// Writes to the system clipboard through the platform's copy helper.
/// Helpers are tried in order until one succeeds.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

#[cfg(target_os = "windows")]
const CLIPBOARD_HELPERS: &[(&str, &[&str])] = &[("clip", &[])];
#[cfg(target_os = "macos")]
const CLIPBOARD_HELPERS: &[(&str, &[&str])] = &[("pbcopy", &[])];
#[cfg(not(any(target_os = "windows", target_os = "macos")))]
const CLIPBOARD_HELPERS: &[(&str, &[&str])] = &[
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
];

impl Clipboard for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<(), ActionError> {
        let mut last_err = ActionError::NoHelper;
        for (program, args) in CLIPBOARD_HELPERS {
            match run_with_input(program, args, text) {
                Ok(()) => return Ok(()),
                Err(e) => {
                    tracing::debug!(program, error = %e, "Clipboard helper failed");
                    last_err = e;
                }
            }
        }
        Err(last_err)
    }
}

fn spawn_error(program: &str) -> impl FnOnce(std::io::Error) -> ActionError + '_ {
    move |source| ActionError::Spawn {
        program: program.to_string(),
        source,
    }
}

/// Start a helper without waiting for it. A background thread reaps it.
fn spawn_detached(program: &str, args: &[&str]) -> Result<(), ActionError> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(spawn_error(program))?;

    std::thread::spawn(move || {
        let _ = child.wait();
    });
    Ok(())
}

/// Run a helper to completion, feeding it `stdin_text`.
fn run_with_input(program: &str, args: &[&str], stdin_text: &str) -> Result<(), ActionError> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(spawn_error(program))?;

    // stdin is dropped before waiting so the helper sees EOF
    let written = match child.stdin.take() {
        Some(mut stdin) => stdin.write_all(stdin_text.as_bytes()),
        None => Ok(()),
    };

    // Reap the child even when the write failed.
    let status = child.wait().map_err(spawn_error(program))?;
    written.map_err(spawn_error(program))?;

    if status.success() {
        Ok(())
    } else {
        Err(ActionError::ExitStatus {
            program: program.to_string(),
            code: status.code(),
        })
    }
}

// ═══════════════════════════════════════════
// Link construction
// ═══════════════════════════════════════════

/// `tel:` URI for a listed phone number, kept exactly as listed.
/// Visual separators such as `-` are valid in a `tel:` URI.
pub fn tel_uri(phone: &str) -> String {
    format!("tel:{phone}")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MapService {
    GoogleMaps,
    AppleMaps,
    OpenStreetMap,
}

impl MapService {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::GoogleMaps => "Google Maps",
            Self::AppleMaps => "Apple Maps",
            Self::OpenStreetMap => "OpenStreetMap",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MapLink {
    pub service: MapService,
    pub name: &'static str,
    pub url: String,
}

/// Search links for a doctor's location, primary first.
pub fn map_links(doctor_name: &str, address: &str) -> [MapLink; 3] {
    let name = urlencoding::encode(doctor_name);
    let addr = urlencoding::encode(address);
    let link = |service: MapService, url: String| MapLink {
        service,
        name: service.display_name(),
        url,
    };
    [
        link(
            MapService::GoogleMaps,
            format!("https://www.google.com/maps/search/{name}+{addr}"),
        ),
        link(
            MapService::AppleMaps,
            format!("https://maps.apple.com/maps?q={name}+{addr}"),
        ),
        link(
            MapService::OpenStreetMap,
            format!("https://www.openstreetmap.org/search?query={addr}"),
        ),
    ]
}

// ═══════════════════════════════════════════
// Actions
// ═══════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DirectionsOutcome {
    Opened { service: MapService, url: String },
    Fallback { message: &'static str, links: Vec<MapLink> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CopyOutcome {
    Copied { message: &'static str },
    ShowText { address: String },
}

/// Ask the platform to dial `phone`. Returns the URI that was opened.
pub fn call_doctor(opener: &dyn UrlOpener, phone: &str) -> Result<String, ActionError> {
    let uri = tel_uri(phone);
    opener.open(&uri)?;
    tracing::info!("Dialer opened");
    Ok(uri)
}

/// Try the primary map service; on any failure offer every service.
pub fn open_directions(opener: &dyn UrlOpener, doctor_name: &str, address: &str) -> DirectionsOutcome {
    let links = map_links(doctor_name, address);
    let primary = &links[0];
    match opener.open(&primary.url) {
        Ok(()) => {
            tracing::info!(service = primary.name, "Directions opened");
            DirectionsOutcome::Opened {
                service: primary.service,
                url: primary.url.clone(),
            }
        }
        Err(e) => {
            tracing::warn!(error = %e, "Primary map link failed, offering alternatives");
            DirectionsOutcome::Fallback {
                message: DIRECTIONS_FALLBACK_MESSAGE,
                links: links.to_vec(),
            }
        }
    }
}

/// Copy an address; on failure hand the text back for display.
pub fn copy_address(clipboard: &dyn Clipboard, address: &str) -> CopyOutcome {
    match clipboard.write_text(address) {
        Ok(()) => CopyOutcome::Copied {
            message: ADDRESS_COPIED_MESSAGE,
        },
        Err(e) => {
            tracing::warn!(error = %e, "Clipboard unavailable, showing address instead");
            CopyOutcome::ShowText {
                address: address.to_string(),
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Records every URL; fails when `fail` is set.
    #[derive(Default)]
    pub(crate) struct FakeOpener {
        pub opened: Mutex<Vec<String>>,
        pub fail: bool,
    }

    impl UrlOpener for FakeOpener {
        fn open(&self, url: &str) -> Result<(), ActionError> {
            self.opened.lock().unwrap().push(url.to_string());
            if self.fail {
                Err(ActionError::ExitStatus { program: "fake".into(), code: Some(1) })
            } else {
                Ok(())
            }
        }
    }

    #[derive(Default)]
    pub(crate) struct FakeClipboard {
        pub contents: Mutex<Option<String>>,
        pub fail: bool,
    }

    impl Clipboard for FakeClipboard {
        fn write_text(&self, text: &str) -> Result<(), ActionError> {
            if self.fail {
                return Err(ActionError::NoHelper);
            }
            *self.contents.lock().unwrap() = Some(text.to_string());
            Ok(())
        }
    }

    #[test]
    fn tel_uri_keeps_number_as_listed() {
        assert_eq!(tel_uri("+91-98765-43210"), "tel:+91-98765-43210");
        assert_eq!(tel_uri("108"), "tel:108");
    }

    #[test]
    fn map_links_escape_name_and_address() {
        let links = map_links("Dr. Rajesh Kumar", "City Hospital, Main Road");
        assert_eq!(
            links[0].url,
            "https://www.google.com/maps/search/Dr.%20Rajesh%20Kumar+City%20Hospital%2C%20Main%20Road"
        );
        assert_eq!(
            links[1].url,
            "https://maps.apple.com/maps?q=Dr.%20Rajesh%20Kumar+City%20Hospital%2C%20Main%20Road"
        );
        assert_eq!(
            links[2].url,
            "https://www.openstreetmap.org/search?query=City%20Hospital%2C%20Main%20Road"
        );
        assert_eq!(links[2].name, "OpenStreetMap");
    }

    #[test]
    fn map_links_escape_ampersand() {
        let links = map_links("A&B Clinic", "Road #4");
        assert!(links[0].url.ends_with("A%26B%20Clinic+Road%20%234"));
    }

    #[test]
    fn directions_open_primary_only() {
        let opener = FakeOpener::default();
        let outcome = open_directions(&opener, "Dr. Amit Patel", "District Hospital");
        assert!(matches!(
            outcome,
            DirectionsOutcome::Opened { service: MapService::GoogleMaps, .. }
        ));
        assert_eq!(opener.opened.lock().unwrap().len(), 1);
    }

    #[test]
    fn directions_fall_back_to_all_links() {
        let opener = FakeOpener { fail: true, ..Default::default() };
        let outcome = open_directions(&opener, "Dr. Amit Patel", "District Hospital");
        match outcome {
            DirectionsOutcome::Fallback { message, links } => {
                assert_eq!(message, DIRECTIONS_FALLBACK_MESSAGE);
                let services: Vec<_> = links.iter().map(|l| l.service).collect();
                assert_eq!(
                    services,
                    vec![MapService::GoogleMaps, MapService::AppleMaps, MapService::OpenStreetMap]
                );
            }
            other => panic!("expected fallback, got {other:?}"),
        }
    }

    #[test]
    fn copy_address_success() {
        let clipboard = FakeClipboard::default();
        let outcome = copy_address(&clipboard, "Village Road");
        assert_eq!(outcome, CopyOutcome::Copied { message: ADDRESS_COPIED_MESSAGE });
        assert_eq!(clipboard.contents.lock().unwrap().as_deref(), Some("Village Road"));
    }

    #[test]
    fn copy_address_falls_back_to_text() {
        let clipboard = FakeClipboard { fail: true, ..Default::default() };
        let outcome = copy_address(&clipboard, "Village Road");
        assert_eq!(outcome, CopyOutcome::ShowText { address: "Village Road".into() });
    }

    #[test]
    fn call_doctor_propagates_failure() {
        let opener = FakeOpener { fail: true, ..Default::default() };
        assert!(call_doctor(&opener, "+91-98765-43211").is_err());

        let opener = FakeOpener::default();
        let uri = call_doctor(&opener, "+91-98765-43211").unwrap();
        assert_eq!(uri, "tel:+91-98765-43211");
        assert_eq!(opener.opened.lock().unwrap().as_slice(), ["tel:+91-98765-43211"]);
    }

    #[test]
    fn outcomes_serialize_with_status_tag() {
        let json = serde_json::to_value(CopyOutcome::ShowText { address: "X".into() }).unwrap();
        assert_eq!(json["status"], "show_text");
        assert_eq!(json["address"], "X");
    }

    #[test]
    fn missing_helper_reports_spawn_error() {
        let err = spawn_detached("ruralhealth-no-such-helper", &[]).unwrap_err();
        assert!(matches!(err, ActionError::Spawn { .. }));
        let err = run_with_input("ruralhealth-no-such-helper", &[], "x").unwrap_err();
        assert!(matches!(err, ActionError::Spawn { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn slow_opener_does_not_block() {
        let started = std::time::Instant::now();
        spawn_detached("sleep", &["3"]).unwrap();
        assert!(started.elapsed() < std::time::Duration::from_secs(1));
    }

    #[cfg(unix)]
    #[test]
    fn opener_exit_status_is_ignored() {
        assert!(spawn_detached("false", &[]).is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn clipboard_helper_exit_status_is_checked() {
        assert!(run_with_input("cat", &[], "Village Road").is_ok());
        let err = run_with_input("sh", &["-c", "cat >/dev/null; exit 1"], "Village Road")
            .unwrap_err();
        assert!(matches!(err, ActionError::ExitStatus { code: Some(1), .. }));
    }

    #[cfg(unix)]
    #[test]
    fn failed_stdin_write_still_reaps_helper() {
        // `true` exits without reading, so a large write hits a closed pipe.
        let text = "x".repeat(1 << 20);
        let err = run_with_input("true", &[], &text).unwrap_err();
        assert!(matches!(err, ActionError::Spawn { .. }));
    }
}
