use crate::Platform;

/// Effective interactive state of a form control, in the shape its platform
/// expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interactivity {
    Web { disabled: bool },
    Native { editable: bool },
}

impl Interactivity {
    /// Prop key this state is rendered under.
    pub fn key(&self) -> &'static str {
        match self {
            Interactivity::Web { .. } => "disabled",
            Interactivity::Native { .. } => "editable",
        }
    }

    /// Whether the user is prevented from changing the value.
    pub fn is_locked(&self) -> bool {
        match self {
            Interactivity::Web { disabled } => *disabled,
            Interactivity::Native { editable } => !*editable,
        }
    }
}

impl Default for Interactivity {
    fn default() -> Self {
        Interactivity::Web { disabled: false }
    }
}

/// Fold the read-only, disabled and editable flags into one state.
///
/// `read_only` takes precedence: a read-only control is locked even when
/// `editable` is explicitly true. An absent `editable` means editable.
pub fn resolve_interactivity(
    platform: Platform,
    read_only: bool,
    disabled: bool,
    editable: Option<bool>,
) -> Interactivity {
    let locked = read_only || disabled || editable == Some(false);
    match platform {
        Platform::Web => Interactivity::Web { disabled: locked },
        Platform::Native => Interactivity::Native { editable: !locked },
    }
}
