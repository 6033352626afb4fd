//! Procedure selection.
//!
//! Decides, for each declared procedure, whether it is eligible to execute
//! this run. Two selectors drive the decision:
//!
//! - a *single target*: the only procedure allowed to run, persisting for
//!   the whole invocation;
//! - a *resume target*: the procedure to skip forward to, consumed once
//!   reached so it never gates a later procedure again.
//!
//! Selection never fails. A selector naming no declared procedure simply
//! never matches and every procedure is skipped.

/// Published per-procedure execution permission.
///
/// Decided exactly once per procedure, when it starts, before any of its
/// steps run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Permission {
    /// No procedure is currently being decided.
    #[default]
    Undecided,

    /// The current procedure runs.
    Proceed,

    /// The current procedure is silently skipped.
    Skip,
}

impl Permission {
    /// Whether steps of the current procedure may run.
    pub fn is_proceed(&self) -> bool {
        matches!(self, Permission::Proceed)
    }
}

/// One-shot resume selector.
///
/// `Pending` gates every procedure until the named one starts; matching
/// flips it to `Consumed`, after which it never gates again. The explicit
/// `Consumed` state makes the one-shot invariant visible in code and tests.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ResumeTarget {
    /// No resume requested.
    #[default]
    None,

    /// Skip forward until this procedure is reached.
    Pending(String),

    /// The target was reached; resume no longer gates anything.
    Consumed,
}

impl ResumeTarget {
    /// Build from an optional CLI/environment value.
    pub fn from_option(name: Option<String>) -> Self {
        match name {
            Some(n) if !n.is_empty() => ResumeTarget::Pending(n),
            _ => ResumeTarget::None,
        }
    }

    /// Whether this target still gates procedures.
    pub fn is_pending(&self) -> bool {
        matches!(self, ResumeTarget::Pending(_))
    }
}

/// Decide whether the named procedure runs.
///
/// Rules, in order:
/// 1. A single target, when set, alone governs: proceed iff the names
///    match. The resume target is left untouched either way.
/// 2. Otherwise a pending resume target skips everything until its name
///    matches; the match consumes it.
/// 3. Otherwise proceed.
pub fn decide(name: &str, single: Option<&str>, resume: &mut ResumeTarget) -> Permission {
    if let Some(target) = single {
        let permission = if name == target {
            Permission::Proceed
        } else {
            Permission::Skip
        };
        tracing::debug!(procedure = name, single = target, ?permission, "selection");
        return permission;
    }

    if let ResumeTarget::Pending(target) = resume {
        if name == target.as_str() {
            tracing::debug!(procedure = name, "resume target reached");
            *resume = ResumeTarget::Consumed;
            return Permission::Proceed;
        }
        tracing::debug!(procedure = name, resume = %target, "skipped, before resume target");
        return Permission::Skip;
    }

    Permission::Proceed
}
