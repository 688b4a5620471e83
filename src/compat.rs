//! Advisory shim for the deprecated `el` option. It only ever logs; the
//! placement path is untouched.

/// Action kinds the placement layer responds to. Passed explicitly into
/// [`scan_action`] so the shim carries no hidden coupling to the
/// dispatcher's type registry.
pub const TIP_ACTION_KINDS: &[&str] = &["tip/show", "tip/move", "tip/toggle", "tip/hide"];

/// Minimal view of an inbound action-like object: its kind and which of
/// the origin-carrying fields are present.
#[derive(Debug, Clone, Copy)]
pub struct ActionEnvelope<'a> {
    pub kind: &'a str,
    pub has_origin: bool,
    pub has_el: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeprecationNotice {
    /// Only the legacy `el` field was supplied.
    LegacyEl,
    /// Both `origin` and `el` were supplied; `el` is ignored.
    BothOriginAndEl,
}

/// Warns when a recognized action uses the deprecated `el` field. Returns
/// the notice it logged so callers can test the advisory path without
/// installing a logger.
pub fn scan_action(action: &ActionEnvelope<'_>, recognized: &[&str]) -> Option<DeprecationNotice> {
    if !recognized.contains(&action.kind) {
        return None;
    }
    if action.has_el && action.has_origin {
        log::warn!(
            "{}: both `origin` and `el` supplied; `el` is deprecated and ignored",
            action.kind
        );
        Some(DeprecationNotice::BothOriginAndEl)
    } else if action.has_el {
        log::warn!("{}: `el` is deprecated, use `origin` instead", action.kind);
        Some(DeprecationNotice::LegacyEl)
    } else {
        None
    }
}
