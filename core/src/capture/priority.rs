/// Task urgency on the user-facing 0-4 scale, 0 meaning "unspecified".
///
/// The remote API uses an inverted 1-4 scale: user priority 1 (lowest
/// urgency) is API priority 4 and user priority 4 is API priority 1.
/// `to_api` / `from_api` keep that inversion in one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Priority(u8);

impl Priority {
    pub const NONE: Priority = Priority(0);

    /// Builds from the user scale. `None` for values above 4.
    pub fn from_user(value: u8) -> Option<Priority> {
        (value <= 4).then_some(Priority(value))
    }

    /// Builds from the API scale; anything outside 1-4 means unspecified.
    pub fn from_api(value: u8) -> Priority {
        if (1..=4).contains(&value) {
            Priority(5 - value)
        } else {
            Priority::NONE
        }
    }

    pub fn is_set(self) -> bool {
        self.0 != 0
    }

    /// User-scale value (0 when unspecified).
    pub fn user(self) -> u8 {
        self.0
    }

    /// API-scale value, `None` when unspecified so payloads omit the field.
    pub fn to_api(self) -> Option<u8> {
        if self.is_set() {
            Some(5 - self.0)
        } else {
            None
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
