//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Platform-appropriate modifier for the form shortcuts
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const SHORTCUT_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const SHORTCUT_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Generate preview shortcut display
#[cfg(target_os = "macos")]
pub const GENERATE_SHORTCUT: &str = "Cmd+G";

#[cfg(not(target_os = "macos"))]
pub const GENERATE_SHORTCUT: &str = "Ctrl+G";

/// Download document shortcut display
#[cfg(target_os = "macos")]
pub const DOWNLOAD_SHORTCUT: &str = "Cmd+D";

#[cfg(not(target_os = "macos"))]
pub const DOWNLOAD_SHORTCUT: &str = "Ctrl+D";

/// Clear preview shortcut display
#[cfg(target_os = "macos")]
pub const CLEAR_SHORTCUT: &str = "Cmd+R";

#[cfg(not(target_os = "macos"))]
pub const CLEAR_SHORTCUT: &str = "Ctrl+R";

/// Copy preview shortcut display
#[cfg(target_os = "macos")]
pub const COPY_SHORTCUT: &str = "Cmd+Y";

#[cfg(not(target_os = "macos"))]
pub const COPY_SHORTCUT: &str = "Ctrl+Y";

/// Ctrl+key is accepted on every platform in addition to the native modifier
pub fn is_shortcut(modifiers: KeyModifiers) -> bool {
    modifiers.contains(SHORTCUT_MODIFIER) || modifiers.contains(KeyModifiers::CONTROL)
}
