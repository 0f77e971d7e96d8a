use std::fmt;

/// Number of gesture classes. The classifier's probability vector and the
/// one-hot label vectors both have this length.
pub const GESTURE_CLASS_COUNT: usize = 6;

/// The closed gesture vocabulary.
///
/// Declaration order is significant: it fixes each class's one-hot index and
/// the alignment of classifier probability vectors, and must stay the same
/// across training and inference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GestureClass {
    ThumbsUp = 0,
    ThumbsDown = 1,
    Peace = 2,
    Fist = 3,
    OpenPalm = 4,
    Pointing = 5,
}

impl GestureClass {
    /// All classes in fixed encoding order.
    pub const ALL: [GestureClass; GESTURE_CLASS_COUNT] = [
        GestureClass::ThumbsUp,
        GestureClass::ThumbsDown,
        GestureClass::Peace,
        GestureClass::Fist,
        GestureClass::OpenPalm,
        GestureClass::Pointing,
    ];

    /// Label string; also the exact training-data directory name.
    pub fn name(self) -> &'static str {
        match self {
            GestureClass::ThumbsUp => "thumbs_up",
            GestureClass::ThumbsDown => "thumbs_down",
            GestureClass::Peace => "peace",
            GestureClass::Fist => "fist",
            GestureClass::OpenPalm => "open_palm",
            GestureClass::Pointing => "pointing",
        }
    }

    /// Position in the fixed encoding order.
    pub fn index(self) -> usize {
        self as usize
    }

    /// One-hot label vector: 1.0 at this class's index, 0.0 elsewhere.
    pub fn one_hot(self) -> [f32; GESTURE_CLASS_COUNT] {
        let mut label = [0.0; GESTURE_CLASS_COUNT];
        label[self.index()] = 1.0;
        label
    }
}

impl fmt::Display for GestureClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl TryFrom<usize> for GestureClass {
    type Error = String;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(GestureClass::ThumbsUp),
            1 => Ok(GestureClass::ThumbsDown),
            2 => Ok(GestureClass::Peace),
            3 => Ok(GestureClass::Fist),
            4 => Ok(GestureClass::OpenPalm),
            5 => Ok(GestureClass::Pointing),
            _ => Err(format!(
                "Invalid gesture class index: {}. Must be in range 0-5.",
                value
            )),
        }
    }
}
