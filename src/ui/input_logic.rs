/// Button gesture, decided once the press window has elapsed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Press {
    /// Released within the press window: edit the current field.
    Short,
    /// Still held after the press window: move to the next field.
    Long,
}

/// Classify a press from the button level sampled after the press window.
pub fn classify_press(still_pressed: bool) -> Press {
    if still_pressed {
        Press::Long
    } else {
        Press::Short
    }
}
