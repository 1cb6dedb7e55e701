/// Decision logic behind a two-state switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ToggleModel {
    pub value: bool,
    pub disabled: bool,
}

impl ToggleModel {
    pub fn new(value: bool, disabled: bool) -> Self {
        ToggleModel { value, disabled }
    }

    /// Value to report for a click, or `None` if the switch is disabled.
    pub fn click(self) -> Option<bool> {
        (!self.disabled).then_some(!self.value)
    }

    /// Tooltip for the current state.
    pub fn tooltip<'a>(self, active: Option<&'a str>, inactive: Option<&'a str>) -> Option<&'a str> {
        if self.value {
            active
        } else {
            inactive
        }
    }
}
