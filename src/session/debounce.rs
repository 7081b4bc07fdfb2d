/// Per-control cooldown, advanced once per controller tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Debounce {
    cooldown: u32,
    remaining: u32,
}

impl Debounce {
    pub fn new(cooldown: u32) -> Self {
        Self {
            cooldown,
            remaining: 0,
        }
    }

    /// Fire if not cooling down; firing restarts the cooldown.
    pub fn try_fire(&mut self) -> bool {
        if self.remaining > 0 {
            return false;
        }
        self.remaining = self.cooldown;
        true
    }

    pub fn tick(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/debounce.rs"]
mod tests;
