/// What the input collaborator reports for a single tick.
///
/// Directional fields are *held* state and act every tick they are set.
/// `fire`, `restart` and `quit` are edges: the front end sets them only on
/// the tick the key went down, so holding Space does not auto-fire.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Controls {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub fire: bool,
    pub restart: bool,
    pub quit: bool,
}

impl Controls {
    /// No keys held, no events.
    pub fn idle() -> Self {
        Self::default()
    }
}
