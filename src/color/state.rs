/// Step used by the arrow/space keys, in percent.
pub const LEVEL_STEP: i32 = 10;
pub const MAX_LEVEL: i32 = 100;

/// Current swatch color: three channel switches sharing one brightness level.
///
/// A channel that is on shows `level` percent intensity, a channel that is off
/// shows 0%. The five operations below are the only way to change it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorState {
    red_on: bool,
    green_on: bool,
    blue_on: bool,
    level: i32,
}

impl Default for ColorState {
    fn default() -> Self {
        Self {
            red_on: true,
            green_on: true,
            blue_on: true,
            level: MAX_LEVEL,
        }
    }
}

impl ColorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_red(&mut self) {
        self.red_on = !self.red_on;
    }

    pub fn toggle_green(&mut self) {
        self.green_on = !self.green_on;
    }

    pub fn toggle_blue(&mut self) {
        self.blue_on = !self.blue_on;
    }

    /// Replaces the level as-is. No range check.
    pub fn set_level(&mut self, value: i32) {
        self.level = value;
    }

    /// One step up, wrapping 100 -> 0.
    pub fn increment_level(&mut self) {
        // 100 + 10 = 110 wraps to 0; only stays on the 10-grid for grid values.
        self.level = (self.level + LEVEL_STEP) % (MAX_LEVEL + LEVEL_STEP);
    }

    /// One step down, wrapping 0 -> 100.
    pub fn decrement_level(&mut self) {
        if self.level == 0 {
            self.level = MAX_LEVEL;
        } else {
            self.level = (self.level - LEVEL_STEP) % (MAX_LEVEL + LEVEL_STEP);
        }
    }

    pub fn level(&self) -> i32 {
        self.level
    }

    pub fn red_on(&self) -> bool {
        self.red_on
    }

    pub fn green_on(&self) -> bool {
        self.green_on
    }

    pub fn blue_on(&self) -> bool {
        self.blue_on
    }

    fn channel(&self, on: bool) -> i32 {
        if on {
            self.level
        } else {
            0
        }
    }

    /// Color descriptor such as `rgb(90%, 0%, 90%)`.
    pub fn render_color(&self) -> String {
        format!(
            "rgb({}%, {}%, {}%)",
            self.channel(self.red_on),
            self.channel(self.green_on),
            self.channel(self.blue_on)
        )
    }

    /// 24-bit color painted on the terminal for the current state.
    pub fn rgb8(&self) -> (u8, u8, u8) {
        (
            percent_to_u8(self.channel(self.red_on)),
            percent_to_u8(self.channel(self.green_on)),
            percent_to_u8(self.channel(self.blue_on)),
        )
    }
}

fn percent_to_u8(percent: i32) -> u8 {
    let p = percent.clamp(0, MAX_LEVEL) as u32;
    ((p * 255 + 50) / 100) as u8
}
